// Feature kind abstraction
// One implementation per feature type keeps the resolvers free of type
// branching; the caller selects the concrete kind.

use crate::model::{Component, FeatureId, SimulationSnapshot, Trip, ID_UNSET};

/// Lookup, naming, and enumeration over one feature type of a snapshot.
///
/// Enumeration order is the snapshot's native table order and is stable
/// across calls against an unmutated snapshot.
pub trait FeatureKind {
    /// The domain entity reports bind to.
    type Feature;
    /// The identifying value a report's data query carries.
    type Value: Clone;

    fn find_by_name<'a>(snapshot: &'a SimulationSnapshot, name: &str)
        -> Option<&'a Self::Feature>;

    fn find_by_value<'a>(
        snapshot: &'a SimulationSnapshot,
        value: &Self::Value,
    ) -> Option<&'a Self::Feature>;

    /// True when a configured value is the kind's "unset" sentinel.
    fn is_unset(value: &Self::Value) -> bool;

    fn display_name(feature: &Self::Feature) -> &str;

    fn value_of(feature: &Self::Feature) -> Self::Value;

    /// Render a value for an error message.
    fn format_value(value: &Self::Value) -> String;

    fn enumerate<'a>(
        snapshot: &'a SimulationSnapshot,
    ) -> Box<dyn Iterator<Item = &'a Self::Feature> + 'a>;
}

/// Id-keyed features: simulated components addressed by integer id.
pub struct ComponentKind;

impl FeatureKind for ComponentKind {
    type Feature = Component;
    type Value = FeatureId;

    fn find_by_name<'a>(snapshot: &'a SimulationSnapshot, name: &str) -> Option<&'a Component> {
        snapshot.find_component(name)
    }

    fn find_by_value<'a>(snapshot: &'a SimulationSnapshot, value: &FeatureId) -> Option<&'a Component> {
        snapshot.lookup_component(*value)
    }

    fn is_unset(value: &FeatureId) -> bool {
        *value == ID_UNSET
    }

    fn display_name(feature: &Component) -> &str {
        &feature.name
    }

    fn value_of(feature: &Component) -> FeatureId {
        feature.id
    }

    fn format_value(value: &FeatureId) -> String {
        format!("id {value}")
    }

    fn enumerate<'a>(snapshot: &'a SimulationSnapshot) -> Box<dyn Iterator<Item = &'a Component> + 'a> {
        Box::new(snapshot.iter_components())
    }
}

/// Name-keyed features: scheduled trips, whose name doubles as the lookup key.
pub struct TripKind;

impl FeatureKind for TripKind {
    type Feature = Trip;
    type Value = String;

    fn find_by_name<'a>(snapshot: &'a SimulationSnapshot, name: &str) -> Option<&'a Trip> {
        snapshot.operating_plan.find_trip(name)
    }

    // The value is the name, so value lookup degenerates to name lookup.
    fn find_by_value<'a>(snapshot: &'a SimulationSnapshot, value: &String) -> Option<&'a Trip> {
        Self::find_by_name(snapshot, value)
    }

    fn is_unset(value: &String) -> bool {
        value.is_empty()
    }

    fn display_name(feature: &Trip) -> &str {
        &feature.name
    }

    fn value_of(feature: &Trip) -> String {
        feature.name.clone()
    }

    fn format_value(value: &String) -> String {
        value.clone()
    }

    // Only enabled trips take part in enumeration; name lookup still sees the
    // whole plan.
    fn enumerate<'a>(snapshot: &'a SimulationSnapshot) -> Box<dyn Iterator<Item = &'a Trip> + 'a> {
        Box::new(snapshot.operating_plan.enabled_trips())
    }
}
