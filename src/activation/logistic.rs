use std::f64::consts::E;

/// Logistic squashing function mapping a real activation to a probability.
///
/// Extreme inputs saturate to 0.0 or 1.0 under IEEE arithmetic instead of
/// overflowing, so no input clamping is needed.
pub fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_one_half() {
        assert_eq!(logistic(0.0), 0.5);
    }

    #[test]
    fn symmetric_around_zero() {
        for &x in &[0.25, 1.0, 3.5, 10.0] {
            let sum = logistic(x) + logistic(-x);
            assert!((sum - 1.0).abs() < 1e-12, "logistic({x}) + logistic(-{x}) = {sum}");
        }
    }

    #[test]
    fn outputs_stay_strictly_inside_unit_interval_for_moderate_inputs() {
        let mut x = -30.0;
        while x <= 30.0 {
            let p = logistic(x);
            assert!(p > 0.0 && p < 1.0, "logistic({x}) = {p}");
            x += 0.5;
        }
    }

    #[test]
    fn monotonically_increasing() {
        assert!(logistic(-2.0) < logistic(-1.0));
        assert!(logistic(-1.0) < logistic(0.0));
        assert!(logistic(0.0) < logistic(1.0));
        assert!(logistic(1.0) < logistic(2.0));
    }

    #[test]
    fn extreme_inputs_saturate_without_nan() {
        assert_eq!(logistic(1e6), 1.0);
        assert_eq!(logistic(-1e6), 0.0);
        assert!(!logistic(f64::MAX).is_nan());
        assert!(!logistic(f64::MIN).is_nan());
    }
}
