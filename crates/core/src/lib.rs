pub mod model;
pub mod resolver;

pub use model::{
    Component, FeatureId, NamedParam, NamedParamList, OperatingPlan, QuerySpec,
    SimulationSnapshot, Trip, ID_UNSET,
};
pub use resolver::{
    resolve_list, resolve_single, ComponentKind, FeatureKind, ResolveError, TripKind,
};
