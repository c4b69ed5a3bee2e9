use std::fs;
use std::path::Path;

use f16_core::Error;

/// One breakpoint vector of a gridded table, e.g. the 20-point angle of
/// attack schedule shared by every `ALPHA1` axis set.
///
/// Values are loaded strictly increasing; nothing downstream re-checks this
/// once an `AxisVector` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisVector {
    values: Vec<f64>,
}

impl AxisVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Parses one whitespace-separated column of doubles, one axis file.
    pub fn load(path: &Path, expected_len: usize) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|_| Error::NotFound {
            path: path.to_path_buf(),
        })?;
        let values: Vec<f64> = text
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| Error::Malformed {
                path: path.to_path_buf(),
                expected: expected_len,
                found: 0,
            })?;
        if values.len() != expected_len {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                expected: expected_len,
                found: values.len(),
            });
        }
        if values.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::Malformed {
                path: path.to_path_buf(),
                expected: expected_len,
                found: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Writes the vector back out as one value per line; lets test fixtures
    /// round-trip a synthetic axis without hand-formatting one.
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        let mut buf = String::new();
        for v in &self.values {
            buf.push_str(&v.to_string());
            buf.push('\n');
        }
        fs::write(path, buf)
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ALPHA1.dat");
        let axis = AxisVector::from_values(vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        axis.write_to(&path).unwrap();
        let loaded = AxisVector::load(&path, 5).unwrap();
        assert_eq!(loaded, axis);
    }

    #[test]
    fn rejects_wrong_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ALPHA1.dat");
        AxisVector::from_values(vec![0.0, 1.0, 2.0])
            .write_to(&path)
            .unwrap();
        assert!(matches!(
            AxisVector::load(&path, 5),
            Err(Error::Malformed { expected: 5, found: 3, .. })
        ));
    }

    #[test]
    fn rejects_non_monotonic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("BETA1.dat");
        AxisVector::from_values(vec![0.0, 1.0, 1.0])
            .write_to(&path)
            .unwrap();
        assert!(matches!(
            AxisVector::load(&path, 3),
            Err(Error::Malformed { .. })
        ));
    }
}
