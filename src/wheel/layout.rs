use super::geometry::{segment_width_rad, wheel_radius};

/// One wedge in wheel-local radians, before the spin rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Sector {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Angle the label is rotated to.
    pub fn mid(&self) -> f64 {
        self.start + self.width() / 2.0
    }
}

/// Everything the renderer needs to know about where the wheel goes.
/// Recomputed whenever the surface is resized.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub sectors: Vec<Sector>,
}

impl WheelLayout {
    pub fn compute(width: f64, height: f64, segment_count: usize, margin: f64) -> Self {
        let step = segment_width_rad(segment_count);
        let sectors = (0..segment_count)
            .map(|index| Sector {
                index,
                start: index as f64 * step,
                end: (index + 1) as f64 * step,
            })
            .collect();

        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: wheel_radius(width, height, margin),
            sectors,
        }
    }

    pub fn total_sweep(&self) -> f64 {
        self.sectors.iter().map(Sector::width).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::TAU;

    #[test]
    fn sectors_tile_the_circle_in_order() {
        let layout = WheelLayout::compute(600.0, 600.0, 6, 50.0);
        assert_eq!(layout.sectors.len(), 6);
        assert_eq!(layout.sectors[0].start, 0.0);
        for pair in layout.sectors.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert!((layout.sectors[5].end - TAU).abs() < 1e-12);
        assert!((layout.sectors[1].mid() - TAU / 4.0).abs() < 1e-12);
    }

    #[test]
    fn resize_changes_radius_but_not_boundaries() {
        let small = WheelLayout::compute(400.0, 300.0, 8, 50.0);
        let large = WheelLayout::compute(1000.0, 900.0, 8, 50.0);

        assert_eq!(small.radius, 100.0);
        assert_eq!(large.radius, 400.0);
        assert_eq!((large.center_x, large.center_y), (500.0, 450.0));
        assert_eq!(small.sectors, large.sectors);
    }

    proptest! {
        #[test]
        fn sector_widths_sum_to_full_turn(n in 1usize..200) {
            let layout = WheelLayout::compute(600.0, 600.0, n, 50.0);
            prop_assert!((layout.total_sweep() - TAU).abs() < 1e-9);
        }
    }
}
