//! World map accumulation from classified masks.
//!
//! Each tick, the set pixels of the three masks are projected from image
//! space through the rover frame into world grid cells, and the matching
//! counter channel is incremented by 1 per pixel. Accumulation is gated
//! on vehicle attitude: a tilted vehicle breaks the flat-ground
//! assumption behind the perspective rectification, and integrating such
//! a frame would write false geometry into the map.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::RoverPose;
use crate::transform::{image_to_rover, rover_to_world};
use crate::vision::{ClassifiedFrame, Mask};

use super::storage::WorldMap;

/// Tunables for the world map and its accumulator.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Map side length in cells.
    #[serde(default = "defaults::map_size")]
    pub size: usize,

    /// Map cells per rover-space unit.
    #[serde(default = "defaults::map_scale")]
    pub scale: f32,

    /// Attitude gate: maximum pitch distance from level, degrees.
    #[serde(default = "defaults::pitch_tolerance_deg")]
    pub pitch_tolerance_deg: f32,

    /// Attitude gate: maximum roll distance from level, degrees.
    #[serde(default = "defaults::roll_tolerance_deg")]
    pub roll_tolerance_deg: f32,

    /// Margin above the mean navigable-hit count past which a cell
    /// counts as heavily re-visited terrain.
    #[serde(default = "defaults::overdriven_margin")]
    pub overdriven_margin: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size: defaults::map_size(),
            scale: defaults::map_scale(),
            pitch_tolerance_deg: defaults::pitch_tolerance_deg(),
            roll_tolerance_deg: defaults::roll_tolerance_deg(),
            overdriven_margin: defaults::overdriven_margin(),
        }
    }
}

/// Outcome of one accumulation pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccumulateResult {
    /// Whether the attitude gate admitted this frame.
    pub applied: bool,
    /// Counter increments performed (over all three channels).
    pub hits: usize,
}

/// Integrate one tick's classified masks into the world map.
///
/// Returns without touching the map when pitch or roll is outside the
/// level tolerance.
pub fn accumulate(
    map: &mut WorldMap,
    classified: &ClassifiedFrame,
    pose: RoverPose,
    config: &MapConfig,
) -> AccumulateResult {
    if !pose.is_level(config.pitch_tolerance_deg, config.roll_tolerance_deg) {
        debug!(
            "attitude gate rejected frame: pitch={:.2} roll={:.2}",
            pose.pitch, pose.roll
        );
        return AccumulateResult {
            applied: false,
            hits: 0,
        };
    }

    let mut hits = 0;
    hits += accumulate_mask(map, &classified.obstacle, pose, config, WorldMap::hit_obstacle);
    hits += accumulate_mask(map, &classified.target, pose, config, WorldMap::hit_target);
    hits += accumulate_mask(
        map,
        &classified.navigable,
        pose,
        config,
        WorldMap::hit_navigable,
    );

    AccumulateResult {
        applied: true,
        hits,
    }
}

fn accumulate_mask(
    map: &mut WorldMap,
    mask: &Mask,
    pose: RoverPose,
    config: &MapConfig,
    hit: fn(&mut WorldMap, usize, usize),
) -> usize {
    let (w, h) = (mask.width(), mask.height());
    let mut hits = 0;
    for (col, row) in mask.iter_set() {
        let rover = image_to_rover(col, row, w, h);
        let (x, y) = rover_to_world(rover, pose.position(), pose.yaw, map.size(), config.scale);
        hit(map, x, y);
        hits += 1;
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::Mask;

    fn classified_with_navigable(w: usize, h: usize, pixels: &[(usize, usize)]) -> ClassifiedFrame {
        let mut navigable = Mask::new(w, h);
        for &(c, r) in pixels {
            navigable.set(c, r, true);
        }
        let obstacle = navigable.complement();
        ClassifiedFrame {
            navigable,
            obstacle,
            target: Mask::new(w, h),
        }
    }

    fn level_pose(x: f32, y: f32, yaw: f32) -> RoverPose {
        RoverPose::new(x, y, yaw, 0.0, 0.0)
    }

    #[test]
    fn test_accumulate_increments_counters() {
        let config = MapConfig::default();
        let mut map = WorldMap::new(config.size);
        let classified = classified_with_navigable(320, 160, &[(160, 159)]);

        let result = accumulate(&mut map, &classified, level_pose(100.0, 100.0, 0.0), &config);
        assert!(result.applied);
        // 1 navigable pixel + 320*160-1 obstacle pixels
        assert_eq!(result.hits, 320 * 160);

        // The pixel one row above the rover origin lands one rover unit
        // ahead: world cell (100 + 1/scale, 100)
        assert_eq!(map.navigable_at(100, 100), 1);
    }

    #[test]
    fn test_attitude_gate_freezes_map() {
        let config = MapConfig::default();
        let mut map = WorldMap::new(config.size);
        let classified = classified_with_navigable(320, 160, &[(160, 159)]);

        let tilted = RoverPose::new(100.0, 100.0, 0.0, 5.0, 0.0);
        let result = accumulate(&mut map, &classified, tilted, &config);
        assert!(!result.applied);
        assert_eq!(result.hits, 0);
        assert_eq!(map.navigable_at(100, 100), 0);
    }

    #[test]
    fn test_gate_alternating_attitude() {
        // Counters freeze during out-of-tolerance ticks and only grow
        // during level ones
        let config = MapConfig::default();
        let mut map = WorldMap::new(config.size);
        let classified = classified_with_navigable(320, 160, &[(160, 159)]);

        let mut applied = 0;
        for i in 0..6 {
            let pitch = if i % 2 == 0 { 0.0 } else { 3.0 };
            let pose = RoverPose::new(100.0, 100.0, 0.0, pitch, 0.0);
            if accumulate(&mut map, &classified, pose, &config).applied {
                applied += 1;
            }
        }
        assert_eq!(applied, 3);
        assert_eq!(map.navigable_at(100, 100), 3);
    }

    #[test]
    fn test_wrapped_attitude_passes_gate() {
        let config = MapConfig::default();
        let mut map = WorldMap::new(config.size);
        let classified = classified_with_navigable(320, 160, &[(160, 159)]);

        // 359.5 deg pitch is half a degree from level
        let pose = RoverPose::new(100.0, 100.0, 0.0, 359.5, 359.5);
        assert!(accumulate(&mut map, &classified, pose, &config).applied);
    }

    #[test]
    fn test_off_map_pixels_pile_on_edge() {
        let config = MapConfig::default();
        let mut map = WorldMap::new(config.size);
        // Rover at the map corner facing out: projected cells clamp to
        // the edge instead of being dropped
        let classified = classified_with_navigable(320, 160, &[(160, 100)]);
        let result = accumulate(&mut map, &classified, level_pose(199.0, 199.0, 45.0), &config);
        assert!(result.applied);
        assert_eq!(map.navigable_at(199, 199), 1);
    }
}
