// Simulation snapshot
// Read-only view of a simulation the resolvers look features up in.

use serde::{Deserialize, Serialize};

use crate::model::{Component, FeatureId, Trip};

/// The schedule of trips the simulated operation runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatingPlan {
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl OperatingPlan {
    /// Find a trip by name anywhere in the plan, enabled or not.
    pub fn find_trip(&self, name: &str) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.name == name)
    }

    /// Trips eligible for reporting, in declaration order.
    pub fn enabled_trips(&self) -> impl Iterator<Item = &Trip> {
        self.trips.iter().filter(|trip| trip.enabled)
    }
}

/// One simulation's feature tables. The snapshot is caller-owned and read-only
/// for the duration of a resolution call; table iteration order is declaration
/// order and stable across calls against an unmutated snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationSnapshot {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub operating_plan: OperatingPlan,
}

impl SimulationSnapshot {
    pub fn find_component(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|component| component.name == name)
    }

    pub fn lookup_component(&self, id: FeatureId) -> Option<&Component> {
        self.components.iter().find(|component| component.id == id)
    }

    /// Component table in declaration order.
    pub fn iter_components(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }
}
