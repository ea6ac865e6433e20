// Batch file format
// Externally authored description of the reports a batch run generates.

use serde::Deserialize;
use simbatch_core::model::{FeatureId, QuerySpec, ID_UNSET};

/// Top-level batch file: the ordered report requests of one batch run.
#[derive(Debug, Deserialize)]
pub struct BatchFile {
    pub reports: Vec<ReportRequest>,
}

/// One report request: which report kind to generate and which features to
/// bind it to.
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    /// Report kind name, used to title the plan rows.
    pub name: String,
    pub binding: Binding,
    pub target: TargetSelector,
}

/// Whether each report instance binds one feature or a feature list.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    Single,
    List,
}

/// Feature class plus the configuration defaults backing config-mode queries.
/// The defaults stand in for the report-configuration storage the core
/// treats as an external collaborator.
#[derive(Debug, Deserialize)]
#[serde(tag = "feature", rename_all = "snake_case")]
pub enum TargetSelector {
    Component {
        query: QuerySpec,
        #[serde(default = "unset_id")]
        default_id: FeatureId,
        #[serde(default)]
        default_ids: Vec<FeatureId>,
        #[serde(default)]
        use_all: bool,
    },
    Trip {
        query: QuerySpec,
        #[serde(default)]
        default_trip: String,
        #[serde(default)]
        default_trips: Vec<String>,
        #[serde(default)]
        use_all: bool,
    },
}

fn unset_id() -> FeatureId {
    ID_UNSET
}
