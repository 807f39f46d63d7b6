//! st-core: stable foundation for steamstate.
//!
//! Contains:
//! - error (shared error types)
//! - numeric (tolerances + float helpers)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{StError, StResult};
pub use numeric::{Tolerances, ensure_finite};
