use std::f32::consts::PI;

/// Quantum-inspired feature map
///
/// Maps an n-dimensional projected vector to 2n dimensions:
/// `encoded = tanh(x * pi)` elementwise, then `encoded` concatenated with
/// `sin(encoded)`. The transform is a fixed feature expansion with no
/// fitted state; it is preserved exactly as specified and never tuned.
#[must_use]
pub fn quantum_encode(projected: &[f32]) -> Vec<f32> {
    let encoded: Vec<f32> = projected.iter().map(|&x| (x * PI).tanh()).collect();
    let mut out = Vec::with_capacity(encoded.len() * 2);
    out.extend_from_slice(&encoded);
    out.extend(encoded.iter().map(|&e| e.sin()));
    out
}

/// Output dimensionality of [`quantum_encode`] for an input of `dim`
#[inline]
#[must_use]
pub fn encoded_dim(dim: usize) -> usize {
    dim * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimension_doubles() {
        let out = quantum_encode(&[0.1, -0.5, 2.0, 0.0]);
        assert_eq!(out.len(), 8);
        assert_eq!(encoded_dim(4), 8);
    }

    #[test]
    fn test_first_half_is_tanh() {
        let out = quantum_encode(&[1.0]);
        assert!((out[0] - (std::f32::consts::PI).tanh()).abs() < 1e-6);
    }

    #[test]
    fn test_second_half_is_sin_of_first() {
        let out = quantum_encode(&[0.3, -0.7]);
        assert!((out[2] - out[0].sin()).abs() < 1e-6);
        assert!((out[3] - out[1].sin()).abs() < 1e-6);
    }

    #[test]
    fn test_values_bounded() {
        // tanh lands in (-1, 1) and sin of that stays in (-1, 1)
        let out = quantum_encode(&[-100.0, -1.0, 0.0, 1.0, 100.0]);
        assert!(out.iter().all(|&x| (-1.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_zero_input() {
        let out = quantum_encode(&[0.0, 0.0]);
        assert!(out.iter().all(|&x| x == 0.0));
    }
}
