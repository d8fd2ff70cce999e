//! Per-tick navigability summary in polar rover space.
//!
//! Reduces the classifier's masks to the "what can I drive toward right
//! now" signal: the navigable mask's pixels as (distance, angle) samples
//! centered on the rover. This is a per-frame view, deliberately
//! unaffected by the attitude gate that protects the world map.

use crate::core::{PointCloud2D, PolarCloud};
use crate::transform::image_to_rover;
use crate::vision::{ClassifiedFrame, Mask};

/// Per-tick polar summary of drivable terrain and visible targets.
#[derive(Clone, Debug, Default)]
pub struct TerrainSummary {
    /// Navigable terrain samples, one per set pixel.
    pub nav: PolarCloud,
    /// Rover-frame Cartesian twins of `nav`, in pixel order. Kept for
    /// the re-visit penalty, which needs each sample's world cell.
    pub nav_points: PointCloud2D,
    /// Target samples, present only when the target pixel count passed
    /// the hysteresis threshold this tick.
    pub target: Option<PolarCloud>,
}

impl TerrainSummary {
    /// Whether a target is in view this tick.
    #[inline]
    pub fn target_in_view(&self) -> bool {
        self.target.is_some()
    }
}

/// Summarize a classified frame.
///
/// The target cloud is reported only when the target mask has more than
/// `target_pixel_threshold` set pixels; below that the tick reports no
/// target at all, which keeps single spurious pixels from steering the
/// vehicle.
pub fn summarize(classified: &ClassifiedFrame, target_pixel_threshold: usize) -> TerrainSummary {
    let nav_points = mask_to_rover(&classified.navigable);
    let nav = nav_points.to_polar();

    let target = if classified.target.count_set() > target_pixel_threshold {
        Some(mask_to_rover(&classified.target).to_polar())
    } else {
        None
    };

    TerrainSummary {
        nav,
        nav_points,
        target,
    }
}

/// Convert a mask's set pixels to rover-centric Cartesian points.
fn mask_to_rover(mask: &Mask) -> PointCloud2D {
    let (w, h) = (mask.width(), mask.height());
    let mut cloud = PointCloud2D::with_capacity(mask.count_set());
    for (col, row) in mask.iter_set() {
        let p = image_to_rover(col, row, w, h);
        cloud.push(p.x, p.y);
    }
    cloud
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn classified(w: usize, h: usize, nav: &[(usize, usize)], target: &[(usize, usize)]) -> ClassifiedFrame {
        let mut nav_mask = Mask::new(w, h);
        for &(c, r) in nav {
            nav_mask.set(c, r, true);
        }
        let mut target_mask = Mask::new(w, h);
        for &(c, r) in target {
            target_mask.set(c, r, true);
        }
        let obstacle = nav_mask.complement();
        ClassifiedFrame {
            navigable: nav_mask,
            obstacle,
            target: target_mask,
        }
    }

    #[test]
    fn test_straight_ahead_sample() {
        // A pixel directly above the rover origin has angle 0
        let c = classified(320, 160, &[(160, 100)], &[]);
        let summary = summarize(&c, 5);
        assert_eq!(summary.nav.len(), 1);
        assert_relative_eq!(summary.nav.angles[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(summary.nav.dists[0], 60.0, epsilon = 1e-6);
    }

    #[test]
    fn test_empty_mask_yields_empty_summary() {
        let c = classified(320, 160, &[], &[]);
        let summary = summarize(&c, 5);
        assert!(summary.nav.is_empty());
        assert!(!summary.target_in_view());
    }

    #[test]
    fn test_target_hysteresis() {
        // 5 target pixels with threshold 5: not in view
        let pixels: Vec<_> = (0..5).map(|i| (100 + i, 100)).collect();
        let c = classified(320, 160, &[], &pixels);
        assert!(!summarize(&c, 5).target_in_view());

        // 6 pixels: in view
        let pixels: Vec<_> = (0..6).map(|i| (100 + i, 100)).collect();
        let c = classified(320, 160, &[], &pixels);
        let summary = summarize(&c, 5);
        assert!(summary.target_in_view());
        assert_eq!(summary.target.unwrap().len(), 6);
    }

    #[test]
    fn test_left_pixels_have_positive_angle() {
        // Image-left is rover +Y, which is a positive polar angle
        let c = classified(320, 160, &[(100, 100)], &[]);
        let summary = summarize(&c, 5);
        assert!(summary.nav.angles[0] > 0.0);
    }
}
