//! Angle helpers shared by the renderer and the spin controller.
//!
//! Convention: the wheel is drawn rotated clockwise by the rotation angle
//! (canvas y axis points down) and the pointer is fixed at screen angle 0,
//! the right-hand side of the wheel.  Segment `i` occupies wheel-local angles
//! `[i * w, (i + 1) * w)`, so the segment under the pointer is the one that
//! contains the local angle `360 - rotation`.

use std::f64::consts::TAU;

/// Angular width of one segment in radians.
pub fn segment_width_rad(segment_count: usize) -> f64 {
    TAU / segment_count as f64
}

/// Angular width of one segment in degrees.
pub fn segment_width_deg(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

/// Fold any angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if folded >= 360.0 {
        0.0
    } else {
        folded
    }
}

pub fn deg_to_rad(angle: f64) -> f64 {
    angle.to_radians()
}

/// Index of the segment under the pointer for a wheel rotated by
/// `rotation_deg`.  Always in `[0, segment_count)`.
pub fn landed_index(rotation_deg: f64, segment_count: usize) -> usize {
    let under_pointer = normalize_degrees(360.0 - normalize_degrees(rotation_deg));
    let index = (under_pointer / segment_width_deg(segment_count)).floor() as usize;
    index % segment_count
}

/// Radius of the wheel for a surface of the given size.  Never negative, so a
/// tiny canvas draws a degenerate wheel instead of failing.
pub fn wheel_radius(width: f64, height: f64, margin: f64) -> f64 {
    (width.min(height) / 2.0 - margin).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalizes_into_half_open_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(1830.0), 30.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-14) < 360.0);
    }

    #[test]
    fn six_segments_thirty_degrees_lands_on_last() {
        assert_eq!(landed_index(1800.0 + 30.0, 6), 5);
    }

    #[test]
    fn unrotated_wheel_points_at_first_segment() {
        assert_eq!(landed_index(0.0, 6), 0);
        assert_eq!(landed_index(720.0, 4), 0);
    }

    #[test]
    fn rotating_one_segment_clockwise_brings_previous_segment_under_pointer() {
        // 90 degrees with four segments: local angle 270 is segment 3
        assert_eq!(landed_index(90.0, 4), 3);
        assert_eq!(landed_index(180.0, 4), 2);
        assert_eq!(landed_index(270.0, 4), 1);
    }

    #[test]
    fn single_segment_always_wins() {
        assert_eq!(landed_index(123.4, 1), 0);
    }

    #[test]
    fn radius_uses_smaller_half_dimension() {
        assert_eq!(wheel_radius(600.0, 600.0, 50.0), 250.0);
        assert_eq!(wheel_radius(800.0, 400.0, 50.0), 150.0);
        assert_eq!(wheel_radius(60.0, 60.0, 50.0), 0.0);
    }

    proptest! {
        #[test]
        fn landed_index_is_in_range(angle in -1.0e6f64..1.0e6, n in 1usize..64) {
            prop_assert!(landed_index(angle, n) < n);
        }

        #[test]
        fn normalized_angle_is_in_range(angle in -1.0e9f64..1.0e9) {
            let a = normalize_degrees(angle);
            prop_assert!((0.0..360.0).contains(&a));
        }
    }
}
