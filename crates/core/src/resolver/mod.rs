//! Batch report parameter resolution.
//!
//! This module resolves a batch query specification into the concrete set of
//! report bindings a report generator must instantiate, one entry per report,
//! each bound to features of a simulation snapshot.
//!
//! # Example
//!
//! ```ignore
//! use simbatch_core::model::QuerySpec;
//! use simbatch_core::resolver::{resolve_single, ComponentKind};
//!
//! let params = resolve_single::<ComponentKind>(&spec, &default_id, &snapshot)?;
//! assert!(!params.is_empty());
//! ```
pub mod accumulator;
pub mod error;
pub mod kind;
pub mod list;
pub mod single;

pub use accumulator::ListAccumulator;
pub use error::ResolveError;
pub use kind::{ComponentKind, FeatureKind, TripKind};
pub use list::resolve_list;
pub use single::resolve_single;

/// Resolver submodule identifier.
pub fn module_name() -> &'static str {
    "resolver"
}
