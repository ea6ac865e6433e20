// Single-value resolution
// One report binding per resolved feature.

use tracing::debug;

use crate::model::{NamedParam, QuerySpec, SimulationSnapshot};
use crate::resolver::error::ResolveError;
use crate::resolver::kind::FeatureKind;

/// Resolve a batch query into one `NamedParam` per report to instantiate.
///
/// `default_value` is the report configuration's default, consulted only in
/// config mode. Fails on the first invalid element with no partial output.
pub fn resolve_single<K: FeatureKind>(
    spec: &QuerySpec,
    default_value: &K::Value,
    snapshot: &SimulationSnapshot,
) -> Result<Vec<NamedParam<K::Value>>, ResolveError> {
    debug!(mode = spec.mode_name(), "resolving single-value report parameters");

    match spec {
        // One report per listed name, in the order given. Duplicates are kept.
        QuerySpec::Explicit { names } => {
            let mut params = Vec::with_capacity(names.len());
            for name in names {
                let feature = K::find_by_name(snapshot, name)
                    .ok_or_else(|| ResolveError::FeatureNotFound(name.clone()))?;
                params.push(NamedParam::new(K::display_name(feature), K::value_of(feature)));
            }
            Ok(params)
        }

        // One report bound to the configured default. The entry keeps the
        // original default value but carries the feature's current name.
        QuerySpec::Config => {
            if K::is_unset(default_value) {
                return Err(ResolveError::DeferredDefault);
            }
            let feature = K::find_by_value(snapshot, default_value)
                .ok_or_else(|| ResolveError::FeatureNotFound(K::format_value(default_value)))?;
            Ok(vec![NamedParam::new(
                K::display_name(feature),
                default_value.clone(),
            )])
        }

        // One report per feature in the snapshot.
        QuerySpec::All => Ok(K::enumerate(snapshot)
            .map(|feature| NamedParam::new(K::display_name(feature), K::value_of(feature)))
            .collect()),

        // A single value cannot express "all features in one report".
        QuerySpec::Single => Err(ResolveError::UnsupportedMode(spec.mode_name())),
    }
}
