//! The normalized form of Hill's equation,
//!
//! F' = (1 − V') / (1 + V'/k)
//!
//! where F' = F/F₀, V' = V/Vmax, and k is an empirical constant in the range
//! 0.15 < k < 0.25.
//!
//! Reference: Hill, A.V., 1938. The heat of shortening and the dynamic
//! constants of muscle. Proc. R. Soc. B. 141, 104-117.
//!
//! Cited by: Westneat, M. W. 2003. A biomechanical model for analysis of
//! muscle force, power output and lower jaw motion in fishes.
//! J. Theor. Biol. 223:269-281.

/// The constant used in Westneat 2003.
pub const K: f64 = 0.25;

/// Force at a given velocity.
///
/// Takes the normalized velocity V/Vmax, returns the normalized force F/F₀.
pub fn force_fraction(v: f64) -> f64 {
    (1.0 - v) / (1.0 + v / K)
}

/// Velocity at a given force. The inverse of [`force_fraction`].
///
/// Takes the normalized force F/F₀, returns the normalized velocity V/Vmax.
pub fn velocity_fraction(f: f64) -> f64 {
    (K - K * f) / (f + K)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    #[test]
    fn test_endpoints() {
        // isometric: full force at zero velocity
        assert!((force_fraction(0.0) - 1.0).abs() < EPSILON);
        // no force at maximum shortening velocity
        assert!(force_fraction(1.0).abs() < EPSILON);
        assert!((velocity_fraction(1.0)).abs() < EPSILON);
        assert!((velocity_fraction(0.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_force_decreases_with_velocity() {
        let mut prev = force_fraction(0.0);
        for i in 1..=10 {
            let f = force_fraction(i as f64 / 10.0);
            assert!(f < prev);
            prev = f;
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        // past v = 1 the force fraction goes negative (lengthening side);
        // the inverse must hold there too
        for i in 0..=30 {
            let v = i as f64 / 10.0;
            assert!((velocity_fraction(force_fraction(v)) - v).abs() < EPSILON);
        }
    }
}
