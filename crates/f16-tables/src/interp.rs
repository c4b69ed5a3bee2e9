use f16_core::{Error, LogSink};

use crate::registry::AxisRegistry;
use crate::tensor::Tensor;

/// Locates the bracketing hypercube edge on one axis: the lower grid index
/// and the fractional distance to the next node, `0.0` at an exact node.
///
/// Mirrors `getHyperCube`'s linear scan in `mexndinterp.c`, including its
/// tie-break behaviour at an exact grid value, rather than a binary search
/// that would pick the same bracket but not necessarily the same one the
/// original scan would land on when duplicate breakpoints are present.
fn locate(axis: &[f64], x: f64, tensor_name: &str, dim: usize) -> Result<(usize, f64), Error> {
    let n = axis.len();
    if x < axis[0] || x > axis[n - 1] {
        return Err(Error::OutOfGrid {
            tensor: tensor_name.to_string(),
            axis: dim,
        });
    }
    for i in 0..n - 1 {
        if x >= axis[i] && x <= axis[i + 1] {
            let span = axis[i + 1] - axis[i];
            let frac = if span == 0.0 { 0.0 } else { (x - axis[i]) / span };
            return Ok((i, frac));
        }
    }
    // x == axis[n - 1], the loop's `<=` above should already have caught it.
    Ok((n - 2, 1.0))
}

/// N-dimensional multilinear interpolation over one gridded coefficient
/// table.
pub struct Interpolator;

impl Interpolator {
    /// Interpolates `tensor` at `query`, one value per axis in the order
    /// `axes` returns them. Returns `Error::OutOfGrid` the moment any
    /// coordinate falls outside its axis's envelope.
    pub fn interpolate_checked(
        tensor: &Tensor,
        axes: &AxisRegistry,
        axis_set: crate::registry::AxisSetId,
        query: &[f64],
        tensor_name: &str,
    ) -> Result<f64, Error> {
        let axis_ids = axis_set.axes();
        debug_assert_eq!(axis_ids.len(), query.len());
        debug_assert_eq!(axis_ids.len(), tensor.dims());

        let mut lower = Vec::with_capacity(query.len());
        let mut frac = Vec::with_capacity(query.len());
        for (dim, (&id, &x)) in axis_ids.iter().zip(query).enumerate() {
            let axis = axes.get(id);
            let (i, f) = locate(axis.as_slice(), x, tensor_name, dim)?;
            lower.push(i);
            frac.push(f);
        }

        let dims = lower.len();
        let mut acc = 0.0;
        for corner in 0..(1usize << dims) {
            let mut weight = 1.0;
            let mut indices = Vec::with_capacity(dims);
            for (d, &l) in lower.iter().enumerate() {
                let bit = (corner >> d) & 1;
                let idx = l + bit;
                indices.push(idx);
                weight *= if bit == 1 { frac[d] } else { 1.0 - frac[d] };
            }
            if weight != 0.0 {
                acc += weight * tensor.at(&indices);
            }
        }
        Ok(acc)
    }

    /// Convenience wrapper for the coefficient façade: logs and returns
    /// `NaN` instead of propagating `Error`, so a single out-of-envelope
    /// query degrades one coefficient rather than aborting a `step`.
    pub fn interpolate(
        tensor: &Tensor,
        axes: &AxisRegistry,
        axis_set: crate::registry::AxisSetId,
        query: &[f64],
        tensor_name: &str,
        log: &dyn LogSink,
    ) -> f64 {
        match Self::interpolate_checked(tensor, axes, axis_set, query, tensor_name) {
            Ok(v) => v,
            Err(e) => {
                log.log(f16_core::LogLevel::Warn, &e.to_string());
                f64::NAN
            }
        }
    }
}
