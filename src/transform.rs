//! Geometric transforms between image, rover, and world space.
//!
//! Pure coordinate conversions, no state. Three frames are involved:
//!
//! - **Image**: (col, row) pixels of the rectified frame, row 0 at the top
//! - **Rover**: Cartesian, origin at the vehicle center (image bottom
//!   center), +X forward, +Y left
//! - **World**: Cartesian map units, shared with the world map grid
//!
//! Rotation has two distinct direction conventions that must not be
//! mixed: [`rotate_to_world`] applies the forward yaw rotation
//! (rover→world) and [`rotate_to_rover`] its exact inverse
//! (world→rover). A wrong sign here skews the entire accumulated map,
//! so the pairs are covered by round-trip tests below.

use crate::core::Point2D;
use crate::core::math::deg_to_rad;

/// Rotate a rover-frame point into the world frame by the vehicle yaw.
///
/// Yaw is in degrees, counter-clockwise positive.
#[inline]
pub fn rotate_to_world(p: Point2D, yaw_deg: f32) -> Point2D {
    let (sin, cos) = deg_to_rad(yaw_deg).sin_cos();
    Point2D::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

/// Rotate a world-frame offset into the rover frame (inverse of
/// [`rotate_to_world`]).
#[inline]
pub fn rotate_to_rover(p: Point2D, yaw_deg: f32) -> Point2D {
    let (sin, cos) = deg_to_rad(yaw_deg).sin_cos();
    Point2D::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos)
}

/// Scale a rotated rover-frame point into world units and offset it by
/// the vehicle position.
///
/// `scale` is map cells per rover-space unit.
#[inline]
pub fn translate_to_world(p: Point2D, origin: Point2D, scale: f32) -> Point2D {
    Point2D::new(p.x / scale + origin.x, p.y / scale + origin.y)
}

/// Inverse of [`translate_to_world`]: strip the vehicle offset and
/// scale a world point back into rover units.
#[inline]
pub fn translate_to_rover(p: Point2D, origin: Point2D, scale: f32) -> Point2D {
    Point2D::new((p.x - origin.x) * scale, (p.y - origin.y) * scale)
}

/// Convert a Cartesian point to polar (distance, angle-in-radians).
///
/// Angle is `atan2(y, x)` in (−π, π]; the origin maps to `(0, 0)` by
/// convention.
#[inline]
pub fn to_polar(p: Point2D) -> (f32, f32) {
    (p.length(), p.y.atan2(p.x))
}

/// Truncate a continuous grid coordinate to integers and clamp both axes
/// into `[0, size − 1]`.
///
/// This is a lossy boundary policy: points beyond the map edge pile onto
/// the edge row/column instead of being dropped. The accumulator
/// tolerates the resulting edge bias.
#[inline]
pub fn clip_to_grid(p: Point2D, size: usize) -> (usize, usize) {
    let max = (size - 1) as f32;
    let x = (p.x as i64 as f32).clamp(0.0, max);
    let y = (p.y as i64 as f32).clamp(0.0, max);
    (x as usize, y as usize)
}

/// Full rover→world conversion: rotate by yaw, scale + offset by the
/// vehicle position, clip into the map grid.
#[inline]
pub fn rover_to_world(p: Point2D, pos: Point2D, yaw_deg: f32, size: usize, scale: f32) -> (usize, usize) {
    let rotated = rotate_to_world(p, yaw_deg);
    let translated = translate_to_world(rotated, pos, scale);
    clip_to_grid(translated, size)
}

/// Full world→rover conversion (continuous, no grid clipping): strip the
/// vehicle offset, then rotate into the rover frame.
#[inline]
pub fn world_to_rover(p: Point2D, pos: Point2D, yaw_deg: f32, scale: f32) -> Point2D {
    let translated = translate_to_rover(p, pos, scale);
    rotate_to_rover(translated, yaw_deg)
}

/// Convert an image pixel (col, row) of a `width`×`height` rectified
/// mask into rover-centric coordinates.
///
/// The rover sits at the bottom center of the image: +X grows toward
/// the image top (forward), +Y toward the image left.
#[inline]
pub fn image_to_rover(col: usize, row: usize, width: usize, height: usize) -> Point2D {
    Point2D::new(
        height as f32 - row as f32,
        width as f32 / 2.0 - col as f32,
    )
}
