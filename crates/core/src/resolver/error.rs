use thiserror::Error;

/// Batch-configuration errors raised during parameter resolution.
///
/// Propagation is fail-fast: the first invalid element aborts resolution with
/// no partial output. Every variant is a deterministic function of the query,
/// the configuration defaults, and the snapshot; none are transient.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// A requested feature does not exist in the snapshot. Carries the
    /// literal name for explicit queries and the formatted default value for
    /// config queries.
    #[error("feature not found: {0}")]
    FeatureNotFound(String),

    /// A config-mode query ran while the report configuration's default value
    /// was still unset.
    #[error("report configuration carries no default value to resolve")]
    DeferredDefault,

    /// The query mode cannot be expressed by the resolver it was handed to.
    #[error("query mode '{0}' is not supported by this resolver")]
    UnsupportedMode(&'static str),
}
