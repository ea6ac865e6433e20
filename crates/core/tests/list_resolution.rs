mod common;

use common::{component, trip_snapshot, two_component_snapshot};
use simbatch_core::model::{NamedParamList, OperatingPlan, QuerySpec, SimulationSnapshot};
use simbatch_core::resolver::{resolve_list, ComponentKind, ResolveError, TripKind};

fn explicit(names: &[&str]) -> QuerySpec {
    QuerySpec::Explicit {
        names: names.iter().map(|name| name.to_string()).collect(),
    }
}

fn list(name: &str, values: &[u32]) -> NamedParamList<u32> {
    NamedParamList {
        name: name.to_string(),
        values: values.to_vec(),
    }
}

#[test]
fn explicit_sole_name_titles_the_list_after_the_feature() {
    let snapshot = two_component_snapshot();
    let lists = resolve_list::<ComponentKind>(&explicit(&["B"]), &[], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("B", &[2])]);
}

#[test]
fn explicit_two_names_leave_the_list_name_blank() {
    let snapshot = two_component_snapshot();
    let lists =
        resolve_list::<ComponentKind>(&explicit(&["A", "B"]), &[], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("", &[1, 2])]);
}

#[test]
fn explicit_unknown_name_fails_with_that_name() {
    let snapshot = two_component_snapshot();
    let error =
        resolve_list::<ComponentKind>(&explicit(&["A", "C"]), &[], false, &snapshot).unwrap_err();
    assert_eq!(error, ResolveError::FeatureNotFound("C".to_string()));
}

#[test]
fn config_use_all_covers_every_component_in_one_list() {
    let snapshot = two_component_snapshot();
    let lists =
        resolve_list::<ComponentKind>(&QuerySpec::Config, &[], true, &snapshot).unwrap();
    assert_eq!(lists, vec![list("", &[1, 2])]);
}

#[test]
fn config_sole_default_is_renamed_to_the_current_display_name() {
    let snapshot = two_component_snapshot();
    let lists =
        resolve_list::<ComponentKind>(&QuerySpec::Config, &[2], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("B", &[2])]);
}

#[test]
fn config_several_defaults_leave_the_name_blank() {
    let snapshot = two_component_snapshot();
    let lists =
        resolve_list::<ComponentKind>(&QuerySpec::Config, &[2, 1], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("", &[2, 1])]);
}

#[test]
fn config_unknown_default_reports_the_formatted_id() {
    let snapshot = two_component_snapshot();
    let error =
        resolve_list::<ComponentKind>(&QuerySpec::Config, &[1, 9], false, &snapshot).unwrap_err();
    assert_eq!(error, ResolveError::FeatureNotFound("id 9".to_string()));
}

#[test]
fn all_emits_independent_singletons_per_component() {
    let snapshot = two_component_snapshot();
    let lists = resolve_list::<ComponentKind>(&QuerySpec::All, &[], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("A", &[1]), list("B", &[2])]);
}

#[test]
fn single_mode_emits_one_list_covering_the_whole_table() {
    let snapshot = two_component_snapshot();
    let lists = resolve_list::<ComponentKind>(&QuerySpec::Single, &[], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("", &[1, 2])]);
}

#[test]
fn single_mode_with_one_feature_is_named_after_it() {
    let snapshot = SimulationSnapshot {
        components: vec![component(5, "Condenser")],
        operating_plan: OperatingPlan::default(),
    };
    let lists = resolve_list::<ComponentKind>(&QuerySpec::Single, &[], false, &snapshot).unwrap();
    assert_eq!(lists, vec![list("Condenser", &[5])]);
}

#[test]
fn trip_all_emits_singletons_for_enabled_trips_only() {
    let snapshot = trip_snapshot();
    let lists = resolve_list::<TripKind>(&QuerySpec::All, &[], false, &snapshot).unwrap();
    let names: Vec<&str> = lists.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["north loop", "south loop"]);
    assert!(lists.iter().all(|entry| entry.values.len() == 1));
}

#[test]
fn trip_config_sole_default_uses_the_trip_name() {
    let snapshot = trip_snapshot();
    let lists = resolve_list::<TripKind>(
        &QuerySpec::Config,
        &["south loop".to_string()],
        false,
        &snapshot,
    )
    .unwrap();
    assert_eq!(
        lists,
        vec![NamedParamList {
            name: "south loop".to_string(),
            values: vec!["south loop".to_string()],
        }]
    );
}

#[test]
fn repeated_calls_produce_identical_output() {
    let snapshot = trip_snapshot();
    let spec = explicit(&["south loop", "north loop"]);
    let first = resolve_list::<TripKind>(&spec, &[], false, &snapshot).unwrap();
    let second = resolve_list::<TripKind>(&spec, &[], false, &snapshot).unwrap();
    assert_eq!(first, second);
}
