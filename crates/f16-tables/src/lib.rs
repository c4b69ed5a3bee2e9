//! Gridded axis/tensor storage and N-D multilinear interpolation for the
//! F-16 HIFI aero tables.

mod axis;
mod catalog;
mod interp;
mod registry;
mod tensor;

pub use axis::AxisVector;
pub use catalog::{TensorCatalog, TensorId};
pub use interp::Interpolator;
pub use registry::{AxisId, AxisRegistry, AxisSetId};
pub use tensor::Tensor;
