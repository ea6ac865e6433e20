// Batch query specification
// Externally authored: batch job description or UI selection.

use serde::{Deserialize, Serialize};

/// How a batch report request selects the features to report on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuerySpec {
    /// Bind the literal feature names listed in the request, in order.
    Explicit { names: Vec<String> },
    /// Bind the default value(s) carried by the report configuration.
    Config,
    /// One report per feature in the simulation.
    All,
    /// One report covering every feature in the simulation.
    Single,
}

impl QuerySpec {
    /// Mode tag for diagnostics.
    pub fn mode_name(&self) -> &'static str {
        match self {
            QuerySpec::Explicit { .. } => "explicit",
            QuerySpec::Config => "config",
            QuerySpec::All => "all",
            QuerySpec::Single => "single",
        }
    }
}
