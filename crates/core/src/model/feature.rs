// Feature entities
// The two kinds of domain entity a report can be bound to.

use serde::{Deserialize, Serialize};

/// Integer identifier for id-keyed features.
pub type FeatureId = u32;

/// Reserved sentinel marking an id parameter with no configured value.
pub const ID_UNSET: FeatureId = FeatureId::MAX;

/// A simulated component, addressed by integer id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Component {
    pub id: FeatureId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A scheduled trip. Its name doubles as its identifying value; an empty
/// name marks "unset".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub name: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}
