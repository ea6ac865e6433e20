pub mod feature;
pub mod params;
pub mod query;
pub mod snapshot;

pub use feature::{Component, FeatureId, Trip, ID_UNSET};
pub use params::{NamedParam, NamedParamList};
pub use query::QuerySpec;
pub use snapshot::{OperatingPlan, SimulationSnapshot};
