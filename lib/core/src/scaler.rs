use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-feature standardization to zero mean and unit variance
///
/// Statistics are learned once from the training matrix and frozen.
/// Features with zero variance are scaled by 1.0 so the transform never
/// divides by zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
}

impl StandardScaler {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            mean: Vec::new(),
            scale: Vec::new(),
        }
    }

    /// Fit mean and standard deviation per feature
    ///
    /// Uses population variance, accumulated in f64 to keep the statistics
    /// stable on larger corpora.
    pub fn fit(&mut self, matrix: &[Vec<f32>]) -> Result<()> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::EmptyDataset);
        }
        let dim = matrix[0].len();

        let mut mean = vec![0.0f64; dim];
        for row in matrix {
            if row.len() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.len(),
                });
            }
            for (acc, &x) in mean.iter_mut().zip(row) {
                *acc += f64::from(x);
            }
        }
        for acc in &mut mean {
            *acc /= n as f64;
        }

        let mut var = vec![0.0f64; dim];
        for row in matrix {
            for ((acc, &x), &m) in var.iter_mut().zip(row).zip(&mean) {
                let d = f64::from(x) - m;
                *acc += d * d;
            }
        }

        self.mean = mean.iter().map(|&m| m as f32).collect();
        self.scale = var
            .iter()
            .map(|&v| {
                let std = (v / n as f64).sqrt();
                if std > 0.0 {
                    std as f32
                } else {
                    1.0
                }
            })
            .collect();

        Ok(())
    }

    /// Standardize a single vector with the frozen statistics
    pub fn transform(&self, vector: &[f32]) -> Result<Vec<f32>> {
        if self.mean.is_empty() {
            return Err(Error::NotFitted("StandardScaler"));
        }
        if vector.len() != self.mean.len() {
            return Err(Error::InvalidDimension {
                expected: self.mean.len(),
                actual: vector.len(),
            });
        }
        Ok(vector
            .iter()
            .zip(&self.mean)
            .zip(&self.scale)
            .map(|((&x, &m), &s)| (x - m) / s)
            .collect())
    }

    /// Standardize a whole matrix
    pub fn transform_all(&self, matrix: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        matrix.iter().map(|row| self.transform(row)).collect()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}
