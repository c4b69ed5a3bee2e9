//! Named coefficient lookups over the F-16 HIFI aero tables.

mod facade;

pub use facade::{CoefficientId, CoefficientSet};
