//! The full perception-to-decision pipeline behind one entry point.
//!
//! [`RoverCore`] owns everything with mission lifetime (calibration, the
//! world map, the navigation state) and runs one camera frame plus one
//! telemetry snapshot through rectify → classify → {map, summarize} →
//! decide per call. Single-threaded and synchronous: the host drives it
//! once per control tick.

use log::info;

use crate::config::RoverConfig;
use crate::error::{Result, RoverError};
use crate::map::{accumulate, WorldMap};
use crate::nav::{decision_step, DriveCommand, MotionStatus, NavMode, NavState, Telemetry};
use crate::summary::summarize;
use crate::vision::{classify, ClassifiedFrame, Rectifier, RgbFrame};

/// Everything one tick produced, beyond the map update itself.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// The actuation command for the host to apply.
    pub command: DriveCommand,
    /// Control mode after this tick's decision.
    pub mode: NavMode,
    /// Motion status classified this tick (`Normal` mid-window).
    pub status: MotionStatus,
    /// Navigable terrain samples seen this tick.
    pub nav_sample_count: usize,
    /// Whether a pickup target was in view this tick.
    pub target_in_view: bool,
    /// The classified masks, for display or telemetry.
    pub vision: ClassifiedFrame,
}

/// The rover perception and decision core.
pub struct RoverCore {
    config: RoverConfig,
    rectifier: Rectifier,
    map: WorldMap,
    state: NavState,
}

impl RoverCore {
    /// Build the core from a configuration.
    ///
    /// Fails when the calibration is unusable: zero frame dimensions or
    /// a degenerate source quad.
    pub fn new(config: RoverConfig) -> Result<Self> {
        let cal = &config.calibration;
        if cal.frame_width == 0 || cal.frame_height == 0 {
            return Err(RoverError::Config(format!(
                "calibration frame dimensions must be nonzero, got {}x{}",
                cal.frame_width, cal.frame_height
            )));
        }
        if config.map.size == 0 {
            return Err(RoverError::Config("map size must be nonzero".to_string()));
        }
        if !(config.map.scale > 0.0) || !config.map.scale.is_finite() {
            return Err(RoverError::Config(format!(
                "map scale must be positive and finite, got {}",
                config.map.scale
            )));
        }
        if config.classifier.kernel_size == 0 || config.classifier.kernel_size % 2 == 0 {
            return Err(RoverError::Config(format!(
                "morphology kernel size must be odd, got {}",
                config.classifier.kernel_size
            )));
        }
        if config.nav.window_ticks == 0 {
            return Err(RoverError::Config(
                "stuck/spin window must be at least one tick".to_string(),
            ));
        }

        let rectifier = Rectifier::new(
            cal.src_quad,
            cal.dst_quad(),
            cal.frame_width,
            cal.frame_height,
        )?;
        let map = WorldMap::new(config.map.size);

        info!(
            "rover core up: frame {}x{}, map {}x{} at scale {}",
            cal.frame_width, cal.frame_height, config.map.size, config.map.size, config.map.scale
        );

        Ok(Self {
            config,
            rectifier,
            map,
            state: NavState::new(),
        })
    }

    /// Run one control tick: camera frame in, actuation command out.
    ///
    /// Frames with the wrong dimensions and non-finite poses are
    /// integration errors and fail the tick without touching any state.
    pub fn tick(&mut self, frame: &RgbFrame, telemetry: &Telemetry) -> Result<TickReport> {
        let cal = &self.config.calibration;
        if frame.width() != cal.frame_width || frame.height() != cal.frame_height {
            return Err(RoverError::Frame {
                expected_width: cal.frame_width,
                expected_height: cal.frame_height,
                width: frame.width(),
                height: frame.height(),
            });
        }
        if !telemetry.pose.is_finite() {
            return Err(RoverError::Pose(format!(
                "non-finite pose: {:?}",
                telemetry.pose
            )));
        }

        let warped = self.rectifier.warp(frame);
        let classified = classify(&warped, &self.config.classifier);

        accumulate(&mut self.map, &classified, telemetry.pose, &self.config.map);
        let summary = summarize(&classified, self.config.nav.target_pixel_threshold);

        let mut rng = rand::rng();
        let command = decision_step(
            &mut self.state,
            &summary,
            &self.map,
            &self.config.map,
            telemetry,
            &self.config.nav,
            &mut rng,
        );

        Ok(TickReport {
            command,
            mode: self.state.mode,
            status: self.state.status,
            nav_sample_count: summary.nav.len(),
            target_in_view: summary.target_in_view(),
            vision: classified,
        })
    }

    /// Read-only view of the accumulated world map.
    pub fn world_map(&self) -> &WorldMap {
        &self.map
    }

    /// Read-only view of the navigation state.
    pub fn nav_state(&self) -> &NavState {
        &self.state
    }

    /// The configuration this core was built with.
    pub fn config(&self) -> &RoverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoverPose;

    #[test]
    fn test_new_rejects_zero_frame() {
        let mut config = RoverConfig::default();
        config.calibration.frame_width = 0;
        assert!(matches!(
            RoverCore::new(config),
            Err(RoverError::Config(_))
        ));
    }

    #[test]
    fn test_new_rejects_degenerate_quad() {
        let mut config = RoverConfig::default();
        // All four corners collinear
        config.calibration.src_quad = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
        assert!(matches!(
            RoverCore::new(config),
            Err(RoverError::Config(_))
        ));
    }

    #[test]
    fn test_new_rejects_even_kernel() {
        let mut config = RoverConfig::default();
        config.classifier.kernel_size = 4;
        assert!(matches!(
            RoverCore::new(config),
            Err(RoverError::Config(_))
        ));
    }

    #[test]
    fn test_tick_rejects_wrong_frame_size() {
        let mut core = RoverCore::new(RoverConfig::default()).unwrap();
        let frame = RgbFrame::new(100, 100);
        let err = core.tick(&frame, &Telemetry::default()).unwrap_err();
        assert!(matches!(err, RoverError::Frame { width: 100, .. }));
    }

    #[test]
    fn test_tick_rejects_non_finite_pose() {
        let mut core = RoverCore::new(RoverConfig::default()).unwrap();
        let frame = RgbFrame::new(320, 160);
        let telemetry = Telemetry {
            pose: RoverPose::new(f32::NAN, 0.0, 0.0, 0.0, 0.0),
            ..Telemetry::default()
        };
        assert!(matches!(
            core.tick(&frame, &telemetry),
            Err(RoverError::Pose(_))
        ));
    }
}
