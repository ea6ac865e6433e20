use simbatch_core::model::{Component, OperatingPlan, SimulationSnapshot, Trip};

#[allow(dead_code)]
pub fn component(id: u32, name: &str) -> Component {
    Component {
        id,
        name: name.to_string(),
        description: None,
    }
}

#[allow(dead_code)]
pub fn trip(name: &str, enabled: bool) -> Trip {
    Trip {
        name: name.to_string(),
        enabled,
    }
}

/// Snapshot holding components A(id=1) and B(id=2) and no trips.
#[allow(dead_code)]
pub fn two_component_snapshot() -> SimulationSnapshot {
    SimulationSnapshot {
        components: vec![component(1, "A"), component(2, "B")],
        operating_plan: OperatingPlan::default(),
    }
}

/// Snapshot holding enabled trips "north loop" and "south loop" plus the
/// disabled "depot shuttle".
#[allow(dead_code)]
pub fn trip_snapshot() -> SimulationSnapshot {
    SimulationSnapshot {
        components: vec![],
        operating_plan: OperatingPlan {
            trips: vec![
                trip("north loop", true),
                trip("south loop", true),
                trip("depot shuttle", false),
            ],
        },
    }
}
