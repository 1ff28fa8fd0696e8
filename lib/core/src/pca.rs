use crate::error::{Error, Result};
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Maximum power-iteration steps per component
const MAX_ITERATIONS: usize = 500;

/// Convergence threshold on the cosine between successive iterates
const CONVERGENCE: f32 = 1e-6;

/// Principal-component projection fitted by seeded power iteration
///
/// Extracts the top `n_components` eigenvectors of the covariance matrix
/// via power iteration with deflation. The iteration start vectors come
/// from a seeded RNG, so the same seed and data always produce the same
/// components. Each component's sign is fixed so its largest-magnitude
/// entry is positive, independent of the start vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pca {
    n_components: usize,
    seed: u64,
    mean: Array1<f32>,
    // (n_components, n_features)
    components: Array2<f32>,
    explained_variance: Vec<f32>,
}

impl Pca {
    #[inline]
    #[must_use]
    pub fn new(n_components: usize, seed: u64) -> Self {
        Self {
            n_components,
            seed,
            mean: Array1::zeros(0),
            components: Array2::zeros((0, 0)),
            explained_variance: Vec::new(),
        }
    }

    /// Fit the projection on a (rows x features) matrix
    pub fn fit(&mut self, matrix: &[Vec<f32>]) -> Result<()> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::EmptyDataset);
        }
        let dim = matrix[0].len();
        let available = dim.min(n);
        if self.n_components > available {
            return Err(Error::ProjectionTooLarge {
                requested: self.n_components,
                available,
            });
        }

        let mut data = Array2::zeros((n, dim));
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != dim {
                return Err(Error::InvalidDimension {
                    expected: dim,
                    actual: row.len(),
                });
            }
            for (j, &x) in row.iter().enumerate() {
                data[[i, j]] = x;
            }
        }

        let mean = data.mean_axis(Axis(0)).ok_or(Error::EmptyDataset)?;
        let centered = &data - &mean;

        let divisor = (n - 1).max(1) as f32;
        let mut cov: Array2<f32> = centered.t().dot(&centered) / divisor;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut components = Array2::zeros((self.n_components, dim));
        let mut explained = Vec::with_capacity(self.n_components);

        for k in 0..self.n_components {
            let mut v = Self::random_unit_vector(dim, &mut rng);

            for _ in 0..MAX_ITERATIONS {
                let mut w = cov.dot(&v);

                // Re-orthogonalize against the components found so far;
                // keeps the iteration from drifting back into them.
                for prev in 0..k {
                    let c = components.row(prev);
                    let proj = w.dot(&c);
                    w = &w - &(&c * proj);
                }

                let norm = w.dot(&w).sqrt();
                if norm < 1e-12 {
                    // Remaining variance is numerically zero; keep the
                    // current orthogonal direction.
                    break;
                }
                w /= norm;

                let converged = w.dot(&v).abs() > 1.0 - CONVERGENCE;
                v = w;
                if converged {
                    break;
                }
            }

            let eigenvalue = v.dot(&cov.dot(&v));
            explained.push(eigenvalue.max(0.0));

            // Deflate so the next iteration finds the next eigenvector
            let outer = v
                .clone()
                .insert_axis(Axis(1))
                .dot(&v.clone().insert_axis(Axis(0)));
            cov = &cov - &(outer * eigenvalue);

            // Deterministic sign: largest-magnitude entry is positive
            let max_idx = v
                .iter()
                .enumerate()
                .max_by(|a, b| {
                    a.1.abs()
                        .partial_cmp(&b.1.abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|(i, _)| i)
                .unwrap_or(0);
            if v[max_idx] < 0.0 {
                v.mapv_inplace(|x| -x);
            }

            components.row_mut(k).assign(&v);
        }

        self.mean = mean;
        self.components = components;
        self.explained_variance = explained;
        Ok(())
    }

    fn random_unit_vector(dim: usize, rng: &mut StdRng) -> Array1<f32> {
        let mut v: Array1<f32> = Array1::from_iter((0..dim).map(|_| rng.random::<f32>() - 0.5));
        let norm = v.dot(&v).sqrt();
        if norm > 0.0 {
            v /= norm;
        }
        v
    }

    /// Project a single vector into the fitted subspace
    pub fn transform(&self, vector: &[f32]) -> Result<Vec<f32>> {
        if self.components.nrows() == 0 {
            return Err(Error::NotFitted("Pca"));
        }
        if vector.len() != self.mean.len() {
            return Err(Error::InvalidDimension {
                expected: self.mean.len(),
                actual: vector.len(),
            });
        }
        let x = Array1::from_iter(vector.iter().copied());
        let centered = &x - &self.mean;
        Ok(self.components.dot(&centered).to_vec())
    }

    /// Project a whole matrix
    pub fn transform_all(&self, matrix: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        matrix.iter().map(|row| self.transform(row)).collect()
    }

    #[inline]
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    #[inline]
    #[must_use]
    pub fn explained_variance(&self) -> &[f32] {
        &self.explained_variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Points spread mostly along the (1, 1, 0) direction
    fn sample_matrix() -> Vec<Vec<f32>> {
        vec![
            vec![1.0, 1.1, 0.0],
            vec![2.0, 1.9, 0.1],
            vec![3.0, 3.2, -0.1],
            vec![4.0, 3.8, 0.05],
            vec![5.0, 5.1, 0.0],
            vec![6.0, 6.2, -0.05],
        ]
    }

    #[test]
    fn test_fit_transform_dimensions() {
        let mut pca = Pca::new(2, 42);
        pca.fit(&sample_matrix()).unwrap();
        let out = pca.transform(&[3.0, 3.0, 0.0]).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_components_orthonormal() {
        let mut pca = Pca::new(2, 42);
        pca.fit(&sample_matrix()).unwrap();
        let c0 = pca.components.row(0);
        let c1 = pca.components.row(1);
        assert!((c0.dot(&c0) - 1.0).abs() < 1e-4);
        assert!((c1.dot(&c1) - 1.0).abs() < 1e-4);
        assert!(c0.dot(&c1).abs() < 1e-3);
    }

    #[test]
    fn test_variance_ordering() {
        let mut pca = Pca::new(2, 42);
        pca.fit(&sample_matrix()).unwrap();
        let ev = pca.explained_variance();
        assert!(ev[0] >= ev[1]);
        // Dominant direction carries nearly all the variance here
        assert!(ev[0] > 10.0 * ev[1]);
    }

    #[test]
    fn test_first_component_follows_dominant_direction() {
        let mut pca = Pca::new(1, 42);
        pca.fit(&sample_matrix()).unwrap();
        let c0 = pca.components.row(0);
        // Roughly (1, 1, 0) normalized, sign fixed positive
        assert!(c0[0] > 0.5);
        assert!(c0[1] > 0.5);
        assert!(c0[2].abs() < 0.2);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let mut a = Pca::new(2, 42);
        let mut b = Pca::new(2, 42);
        a.fit(&sample_matrix()).unwrap();
        b.fit(&sample_matrix()).unwrap();
        assert_eq!(
            a.transform(&[1.0, 2.0, 3.0]).unwrap(),
            b.transform(&[1.0, 2.0, 3.0]).unwrap()
        );
    }

    #[test]
    fn test_too_many_components_errors() {
        let mut pca = Pca::new(8, 42);
        let err = pca.fit(&vec![vec![1.0, 2.0]; 10]);
        assert!(matches!(
            err,
            Err(Error::ProjectionTooLarge {
                requested: 8,
                available: 2
            })
        ));
    }

    #[test]
    fn test_empty_matrix_errors() {
        let mut pca = Pca::new(2, 42);
        assert!(pca.fit(&[]).is_err());
    }

    #[test]
    fn test_transform_before_fit_errors() {
        let pca = Pca::new(2, 42);
        assert!(pca.transform(&[1.0, 2.0]).is_err());
    }
}
