// List resolution
// One report binding covering one or more features per entry.

use tracing::debug;

use crate::model::{NamedParamList, QuerySpec, SimulationSnapshot};
use crate::resolver::accumulator::ListAccumulator;
use crate::resolver::error::ResolveError;
use crate::resolver::kind::FeatureKind;

/// Resolve a batch query into `NamedParamList` entries, one per report.
///
/// `default_values` and `use_all` are the report configuration's defaults,
/// consulted only in config mode. Fails on the first invalid element with no
/// partial output.
pub fn resolve_list<K: FeatureKind>(
    spec: &QuerySpec,
    default_values: &[K::Value],
    use_all: bool,
    snapshot: &SimulationSnapshot,
) -> Result<Vec<NamedParamList<K::Value>>, ResolveError> {
    debug!(
        mode = spec.mode_name(),
        use_all, "resolving list report parameters"
    );

    match spec {
        // One report covering every listed name.
        QuerySpec::Explicit { names } => {
            let mut list = ListAccumulator::new();
            for name in names {
                let feature = K::find_by_name(snapshot, name)
                    .ok_or_else(|| ResolveError::FeatureNotFound(name.clone()))?;
                list.push(K::display_name(feature), K::value_of(feature));
            }
            Ok(vec![list.finish()])
        }

        // One report covering the configured defaults, or every feature when
        // the configuration says so.
        QuerySpec::Config => {
            if use_all {
                return Ok(vec![accumulate_all::<K>(snapshot)]);
            }
            let mut accumulator = ListAccumulator::new();
            for value in default_values {
                let feature = K::find_by_value(snapshot, value)
                    .ok_or_else(|| ResolveError::FeatureNotFound(K::format_value(value)))?;
                accumulator.push(K::display_name(feature), K::value_of(feature));
            }
            let mut list = accumulator.finish();
            // A sole default names the report after that feature's current
            // display name; any other count leaves the name blank.
            list.name = match default_values {
                [value] => {
                    let feature = K::find_by_value(snapshot, value)
                        .ok_or_else(|| ResolveError::FeatureNotFound(K::format_value(value)))?;
                    K::display_name(feature).to_string()
                }
                _ => String::new(),
            };
            Ok(vec![list])
        }

        // One singleton report per feature, each built independently.
        QuerySpec::All => Ok(K::enumerate(snapshot)
            .map(|feature| NamedParamList {
                name: K::display_name(feature).to_string(),
                values: vec![K::value_of(feature)],
            })
            .collect()),

        // One report covering every feature in the snapshot.
        QuerySpec::Single => Ok(vec![accumulate_all::<K>(snapshot)]),
    }
}

fn accumulate_all<K: FeatureKind>(snapshot: &SimulationSnapshot) -> NamedParamList<K::Value> {
    let mut list = ListAccumulator::new();
    for feature in K::enumerate(snapshot) {
        list.push(K::display_name(feature), K::value_of(feature));
    }
    list.finish()
}
