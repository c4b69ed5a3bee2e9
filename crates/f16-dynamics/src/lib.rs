//! Coefficient synthesis, rigid-body equations of motion, and the
//! install/step/uninstall lifecycle surface for the F-16 HIFI
//! flight-dynamics core.

mod assembly;
mod lifecycle;

pub use assembly::evaluate;
pub use lifecycle::FlightModel;
