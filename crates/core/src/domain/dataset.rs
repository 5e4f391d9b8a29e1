// Dataset Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Multidimensional image data
///
/// Samples are stored row-major: the first axis varies slowest.
/// Datasets are shared as `Arc<Dataset>` and never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    name: String,
    dims: Vec<usize>,
    data: Vec<f64>,
}

impl Dataset {
    /// Create a dataset, checking that `data` fills `dims` exactly
    ///
    /// # Errors
    /// - DomainError::InvalidShape if the sample count does not match the axes
    /// - DomainError::ShapeOverflow if the axes multiply past `usize::MAX`
    pub fn new(name: impl Into<String>, dims: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let expected = sample_count(&dims)?;
        if expected != data.len() {
            return Err(DomainError::InvalidShape {
                dims,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            dims,
            data,
        })
    }

    /// Zero-filled dataset of the given shape
    ///
    /// # Errors
    /// - DomainError::ShapeOverflow if the axes multiply past `usize::MAX`
    pub fn zeros(name: impl Into<String>, dims: Vec<usize>) -> Result<Self> {
        let len = sample_count(&dims)?;
        Ok(Self {
            name: name.into(),
            dims,
            data: vec![0.0; len],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Re-check the shape invariant (used after deserialization)
    pub fn validate(&self) -> Result<()> {
        let expected = sample_count(&self.dims)?;
        if expected != self.data.len() {
            return Err(DomainError::InvalidShape {
                dims: self.dims.clone(),
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

// A zero-dimensional dataset holds a single sample.
fn sample_count(dims: &[usize]) -> Result<usize> {
    dims.iter()
        .try_fold(1usize, |acc, d| acc.checked_mul(*d))
        .ok_or_else(|| DomainError::ShapeOverflow {
            dims: dims.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_matching_shape() {
        let ds = Dataset::new("blobs", vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(ds.name(), "blobs");
        assert_eq!(ds.dims(), &[2, 3]);
        assert_eq!(ds.ndim(), 2);
        assert_eq!(ds.len(), 6);
    }

    #[test]
    fn test_new_rejects_mismatched_shape() {
        let err = Dataset::new("bad", vec![4, 4], vec![1.0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16"));
    }

    #[test]
    fn test_zeros_fills_shape() {
        let ds = Dataset::zeros("empty", vec![3, 2, 2]).unwrap();
        assert_eq!(ds.len(), 12);
        assert!(ds.data().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_zero_length_axis_is_empty() {
        let ds = Dataset::zeros("none", vec![5, 0]).unwrap();
        assert!(ds.is_empty());
        assert!(ds.validate().is_ok());
    }

    #[test]
    fn test_overflowing_dims_are_rejected() {
        let dims = vec![1usize << (usize::BITS - 1), 2];

        let err = Dataset::new("huge", dims.clone(), Vec::new()).unwrap_err();
        assert_eq!(err, DomainError::ShapeOverflow { dims: dims.clone() });
        assert!(Dataset::zeros("huge", dims).is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_deserialized_dims() {
        let ds: Dataset =
            serde_json::from_str(r#"{"name":"huge","dims":[9223372036854775808,2],"data":[]}"#)
                .unwrap();
        assert!(matches!(
            ds.validate(),
            Err(DomainError::ShapeOverflow { .. })
        ));
    }
}
