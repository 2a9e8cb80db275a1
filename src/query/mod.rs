//! Query specification and filter predicates.
//!
//! Raw parameters are normalized into an immutable [`QuerySpec`] before any
//! search runs; validation failures surface immediately, never a partial
//! spec. Filter expressions stay raw strings on the spec; structural
//! validation happens when a [`FilterCondition`] is built from one.

pub mod errors;
pub mod filter;
pub mod spec;

pub use errors::{QueryError, QueryErrorCode, QueryResult};
pub use filter::{CompareOp, FilterCondition, FilterField};
pub use spec::{DateSelection, QueryParams, QuerySpec, ReturnKind};
