//! Rover pose as supplied by the vehicle telemetry bus.
//!
//! Unlike a SLAM pose estimate, this pose is an input: the host supplies
//! it once per tick and the core treats it as ground truth. Angles are in
//! degrees wrapping at 360, matching the simulator's telemetry format.

use super::math::deg_from_level;
use super::point::Point2D;

/// Rover pose: position in world units plus attitude in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoverPose {
    /// X position in world units.
    pub x: f32,
    /// Y position in world units.
    pub y: f32,
    /// Heading in degrees, [0, 360).
    pub yaw: f32,
    /// Pitch in degrees, [0, 360), 0 = level.
    pub pitch: f32,
    /// Roll in degrees, [0, 360), 0 = level.
    pub roll: f32,
}

impl RoverPose {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f32, y: f32, yaw: f32, pitch: f32, roll: f32) -> Self {
        Self {
            x,
            y,
            yaw,
            pitch,
            roll,
        }
    }

    /// Position as a point.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Whether pitch and roll are both within tolerance of level,
    /// measured as wrap-around distance from 0°/360°.
    #[inline]
    pub fn is_level(self, pitch_tolerance_deg: f32, roll_tolerance_deg: f32) -> bool {
        deg_from_level(self.pitch) <= pitch_tolerance_deg
            && deg_from_level(self.roll) <= roll_tolerance_deg
    }

    /// All five fields are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.roll.is_finite()
    }
}
