//! Four-term Blackman-Harris tapering window.

use std::f64::consts::PI;

// Minimum four-term Blackman-Harris coefficients (Harris 1978), -92 dB sidelobes.
const A0: f64 = 0.35875;
const A1: f64 = 0.48829;
const A2: f64 = 0.14128;
const A3: f64 = 0.01168;

/// Symmetric four-term Blackman-Harris window of the given length.
///
/// Lengths below 2 return an all-ones window (nothing to taper).
pub fn blackman_harris(len: usize) -> Vec<f64> {
    if len < 2 {
        return vec![1.0; len];
    }
    let denom = (len - 1) as f64;
    (0..len)
        .map(|n| {
            let x = 2.0 * PI * n as f64 / denom;
            A0 - A1 * x.cos() + A2 * (2.0 * x).cos() - A3 * (3.0 * x).cos()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn length_matches() {
        for len in [0, 1, 2, 33, 512] {
            assert_eq!(blackman_harris(len).len(), len);
        }
    }

    #[test]
    fn symmetric() {
        let w = blackman_harris(101);
        for i in 0..101 {
            assert_relative_eq!(w[i], w[100 - i], epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoint_value() {
        // At n = 0 the cosines are all 1: a0 - a1 + a2 - a3 = 6e-5.
        let w = blackman_harris(64);
        assert_relative_eq!(w[0], A0 - A1 + A2 - A3, epsilon = 1e-15);
        assert_relative_eq!(w[0], 6e-5, epsilon = 1e-12);
    }

    #[test]
    fn peak_at_centre() {
        // Odd length puts the maximum exactly at the midpoint: a0 + a1 + a2 + a3 = 1.
        let w = blackman_harris(65);
        assert_relative_eq!(w[32], A0 + A1 + A2 + A3, epsilon = 1e-12);
        let max = w.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_relative_eq!(max, w[32]);
    }

    #[test]
    fn values_in_unit_range() {
        for &v in &blackman_harris(256) {
            assert!(v > 0.0 && v <= 1.0, "window value out of range: {v}");
        }
    }
}
