//! Triangle geometry from side lengths.
//!
//! Law-of-cosines angle solver used throughout the lever construction.
//! Callers must check [`valid_triangle`] first; the angle functions return
//! NaN when the triangle inequality is violated.

use glam::DVec2;

/// The angle between `side_a` and `side_b` (opposite `side_c`), in radians.
///
/// Law of cosines: acos((a² + b² − c²) / 2ab). NaN for sides that cannot
/// form a triangle.
pub fn angle_between(side_a: f64, side_b: f64, side_c: f64) -> f64 {
    let num = side_a * side_a + side_b * side_b - side_c * side_c;
    let denom = 2.0 * side_a * side_b;
    (num / denom).acos()
}

/// All three angles of a triangle with the given sides, in radians.
///
/// Returns `[angle opposite sides[0], opposite sides[1], opposite sides[2]]`.
pub fn triangle_angles(sides: [f64; 3]) -> [f64; 3] {
    [
        angle_between(sides[1], sides[2], sides[0]),
        angle_between(sides[0], sides[2], sides[1]),
        angle_between(sides[0], sides[1], sides[2]),
    ]
}

/// True if the three sides can form a triangle.
///
/// Non-strict: degenerate triangles (one side equal to the sum of the other
/// two) are accepted.
pub fn valid_triangle(side_a: f64, side_b: f64, side_c: f64) -> bool {
    side_a <= side_b + side_c && side_b <= side_a + side_c && side_c <= side_a + side_b
}

/// The angle of the line from `p1` to `p2`, relative to the +x axis.
///
/// Standard math convention (atan2), range (−π, π].
pub fn angle_of_line(p1: DVec2, p2: DVec2) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 0.001;

    fn assert_angles_sum_to_pi(sides: [f64; 3]) {
        let angles = triangle_angles(sides);
        let sum: f64 = angles.iter().sum();
        assert!(
            (sum - PI).abs() < EPSILON,
            "angles of {:?} sum to {}, expected π",
            sides,
            sum
        );
    }

    #[test]
    fn test_angle_sum_invariant() {
        assert_angles_sum_to_pi([1.0, 1.0, 1.0]);
        assert_angles_sum_to_pi([3.0, 4.0, 5.0]);
        assert_angles_sum_to_pi([42.0, 42.0, 1.0]);
        assert_angles_sum_to_pi([42.0, 21.0, 21.0]);
        assert_angles_sum_to_pi([1.0, 42.0, 42.0]);
    }

    #[test]
    fn test_right_triangle() {
        // 3-4-5: the angle opposite the hypotenuse is 90°
        let angles = triangle_angles([3.0, 4.0, 5.0]);
        assert!((angles[2] - PI / 2.0).abs() < EPSILON);
        assert!((angles[0] - (3.0f64 / 5.0).asin()).abs() < EPSILON);
    }

    #[test]
    fn test_equilateral() {
        let angle = angle_between(1.0, 1.0, 1.0);
        assert!((angle - PI / 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_valid_triangle() {
        assert!(valid_triangle(3.0, 4.0, 5.0));
        // degenerate triangles are accepted
        assert!(valid_triangle(1.0, 2.0, 3.0));
        assert!(valid_triangle(2.0, 1.0, 1.0));
        // each side in turn exceeding the sum of the others
        assert!(!valid_triangle(42.0, 1.0, 1.0));
        assert!(!valid_triangle(1.0, 42.0, 1.0));
        assert!(!valid_triangle(1.0, 1.0, 42.0));
    }

    #[test]
    fn test_invalid_triangle_angle_is_nan() {
        assert!(angle_between(1.0, 1.0, 42.0).is_nan());
    }

    #[test]
    fn test_angle_of_line() {
        let origin = DVec2::ZERO;
        assert!((angle_of_line(origin, DVec2::new(1.0, 0.0))).abs() < EPSILON);
        assert!((angle_of_line(origin, DVec2::new(0.0, 1.0)) - PI / 2.0).abs() < EPSILON);
        assert!((angle_of_line(origin, DVec2::new(-1.0, 0.0)) - PI).abs() < EPSILON);
        assert!((angle_of_line(origin, DVec2::new(1.0, -1.0)) + PI / 4.0).abs() < EPSILON);
    }
}
