//! Shared scalar types, error kinds, logging sink, atmosphere and
//! accelerations for the F-16 HIFI flight-dynamics core.

mod accels;
mod atmos;
mod error;
mod log_sink;
mod types;
mod util;

pub use accels::accels;
pub use atmos::atmos;
pub use error::{Error, Result};
pub use log_sink::{FacadeLogSink, LogLevel, LogSink, NullLogSink};
pub use types::{
    load_control_limits, load_plant_constants, Control, ControlLimit, Extras, PlantConstants,
    State, StateDot,
};
pub use util::sign;
