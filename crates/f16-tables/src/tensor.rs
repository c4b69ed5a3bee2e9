use std::fs;
use std::path::Path;

use f16_core::Error;

/// A gridded coefficient table: flat, column-major storage over an N-D
/// rectangular grid whose per-axis point counts are `n_points`.
///
/// `P[i] = Π_{j<i} n_points[j]`, matching `getHyperCube`/`linearInterpolate`
/// in `mexndinterp.c` — axis 0 is fastest-varying.
#[derive(Debug, Clone)]
pub struct Tensor {
    n_points: Vec<usize>,
    strides: Vec<usize>,
    data: Vec<f64>,
}

impl Tensor {
    fn strides_for(n_points: &[usize]) -> Vec<usize> {
        let mut strides = vec![1usize; n_points.len()];
        for i in 1..n_points.len() {
            strides[i] = strides[i - 1] * n_points[i - 1];
        }
        strides
    }

    pub fn from_values(n_points: Vec<usize>, data: Vec<f64>) -> Self {
        let strides = Self::strides_for(&n_points);
        Self {
            n_points,
            strides,
            data,
        }
    }

    pub fn load(path: &Path, n_points: &[usize]) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|_| Error::NotFound {
            path: path.to_path_buf(),
        })?;
        let data: Vec<f64> = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| Error::Malformed {
                path: path.to_path_buf(),
                expected: n_points.iter().product(),
                found: 0,
            })?;
        let expected: usize = n_points.iter().product();
        if data.len() != expected {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                expected,
                found: data.len(),
            });
        }
        Ok(Self::from_values(n_points.to_vec(), data))
    }

    pub fn n_points(&self) -> &[usize] {
        &self.n_points
    }

    pub fn dims(&self) -> usize {
        self.n_points.len()
    }

    /// Flat value at an exact grid node, given one index per axis.
    pub fn at(&self, indices: &[usize]) -> f64 {
        let flat: usize = indices
            .iter()
            .zip(&self.strides)
            .map(|(&idx, &stride)| idx * stride)
            .sum();
        self.data[flat]
    }
}
