//! dfn-core: shared foundation for the fracture network crates.
//!
//! Contains:
//! - error (the validation / state / numerical error taxonomy)
//! - numeric (Real + float helpers)
//! - units (uom SI types + constructors)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{DfnError, DfnResult, ErrorCategory};
pub use numeric::*;
