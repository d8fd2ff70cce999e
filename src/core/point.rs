//! 2D point type shared by rover-centric and world coordinates.

/// A 2D point in meters (world frame) or rover units (rover frame).
///
/// Coordinate convention in the rover frame:
/// - +X forward (toward the top of the rectified image)
/// - +Y left (toward the left edge of the rectified image)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point2D {
    /// Origin point.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the vector from the origin.
    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Sub for Point2D {
    type Output = Point2D;

    #[inline]
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Point2D {
    type Output = Point2D;

    #[inline]
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        assert_relative_eq!(Point2D::new(3.0, 4.0).length(), 5.0, epsilon = 1e-6);
        assert_eq!(Point2D::ZERO.length(), 0.0);
    }

    #[test]
    fn test_distance_to() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(4.0, 5.0);
        assert_relative_eq!(a.distance_to(b), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ops() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(3.0, -1.0);
        assert_eq!(a + b, Point2D::new(4.0, 1.0));
        assert_eq!(b - a, Point2D::new(2.0, -3.0));
    }
}
