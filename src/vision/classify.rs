//! Terrain classification of a rectified frame.
//!
//! Produces three masks per tick: navigable ground, obstacle, and
//! target sample. Obstacle and navigable are built as exact
//! set-complements: the raw brightness mask is opened, its complement is
//! dilated into the obstacle mask, and the final navigable mask is the
//! complement of that. The dilation pushes the boundary conservatively —
//! pixels near an obstacle edge classify as obstacle, and the two masks
//! can never double-count or leave gaps in the map.

use serde::{Deserialize, Serialize};

use super::color::{threshold_hsv, threshold_rgb, HsvBand};
use super::frame::RgbFrame;
use super::mask::Mask;
use super::morphology::{dilate, open};
use crate::config::defaults;

/// Tunable thresholds for the terrain classifier.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Per-channel RGB brightness thresholds for navigable ground.
    #[serde(default = "defaults::rgb_threshold")]
    pub rgb_threshold: [u8; 3],

    /// Structuring element size for opening/dilation (odd).
    #[serde(default = "defaults::kernel_size")]
    pub kernel_size: usize,

    /// HSV band for target-sample pixels (0–255 scale).
    #[serde(default = "defaults::target_band")]
    pub target_band: HsvBand,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            rgb_threshold: defaults::rgb_threshold(),
            kernel_size: defaults::kernel_size(),
            target_band: defaults::target_band(),
        }
    }
}

/// The per-tick classification result: one mask per terrain class.
///
/// Also serves as the vision overlay handed back to the host for
/// display; none of it is retained across ticks.
#[derive(Clone, Debug)]
pub struct ClassifiedFrame {
    /// Navigable ground (complement of `obstacle`).
    pub navigable: Mask,
    /// Obstacle terrain (complement of `navigable`).
    pub obstacle: Mask,
    /// Candidate target-sample pixels, no morphological cleanup.
    pub target: Mask,
}

/// Classify a rectified frame into the three terrain masks.
pub fn classify(warped: &RgbFrame, config: &ClassifierConfig) -> ClassifiedFrame {
    // Bright ground, then opening to drop isolated noise pixels
    let thresholded = threshold_rgb(warped, config.rgb_threshold);
    let opened = open(&thresholded, config.kernel_size);

    // Obstacle = dilated complement; navigable = complement of that.
    // The two-pass inversion keeps the masks exact complements.
    let obstacle = dilate(&opened.complement(), config.kernel_size);
    let navigable = obstacle.complement();

    let target = threshold_hsv(warped, &config.target_band);

    ClassifiedFrame {
        navigable,
        obstacle,
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground_frame() -> RgbFrame {
        // 40x40: bright sand on the lower half, dark rock above
        let mut frame = RgbFrame::new(40, 40);
        frame.fill_rect(0, 0, 40, 20, [90, 80, 70]);
        frame.fill_rect(0, 20, 40, 40, [210, 200, 190]);
        frame
    }

    #[test]
    fn test_masks_are_exact_complements() {
        let result = classify(&ground_frame(), &ClassifierConfig::default());
        assert!(result.navigable.is_complement_of(&result.obstacle));
    }

    #[test]
    fn test_bright_region_is_navigable() {
        let result = classify(&ground_frame(), &ClassifierConfig::default());
        // Deep inside the bright region, away from the dilated boundary
        assert!(result.navigable.get(20, 35));
        assert!(!result.obstacle.get(20, 35));
        // Deep inside the dark region
        assert!(result.obstacle.get(20, 5));
        assert!(!result.navigable.get(20, 5));
    }

    #[test]
    fn test_boundary_classified_conservatively() {
        let result = classify(&ground_frame(), &ClassifierConfig::default());
        // The row just below the brightness boundary is bright, but the
        // dilated obstacle mask claims it
        assert!(result.obstacle.get(20, 21));
    }

    #[test]
    fn test_isolated_noise_suppressed() {
        let mut frame = RgbFrame::new(40, 40);
        frame.set(10, 10, [255, 255, 255]);
        let result = classify(&frame, &ClassifierConfig::default());
        assert_eq!(result.navigable.count_set(), 0);
    }

    #[test]
    fn test_target_mask_no_cleanup() {
        // A single target-colored pixel survives (no opening on targets)
        let mut frame = RgbFrame::new(40, 40);
        frame.set(10, 10, [0, 255, 0]);
        let result = classify(&frame, &ClassifierConfig::default());
        assert_eq!(result.target.count_set(), 1);
        assert!(result.target.get(10, 10));
    }
}
