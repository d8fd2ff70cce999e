//! Point-set types for terrain samples.
//!
//! - `PointCloud2D`: Cartesian rover-centric points, SoA layout
//! - `PolarCloud`: the same samples as (distance, angle) pairs
//!
//! Both are produced fresh each tick from a classifier mask; neither is
//! retained across ticks.

use super::point::Point2D;

/// Cartesian point cloud with SoA (Struct of Arrays) layout.
///
/// Rover frame: +X forward, +Y left.
#[derive(Clone, Debug, Default)]
pub struct PointCloud2D {
    /// X coordinates (forward direction).
    pub xs: Vec<f32>,
    /// Y coordinates (left direction).
    pub ys: Vec<f32>,
}

impl PointCloud2D {
    /// Create a new empty point cloud.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Create a point cloud with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }

    /// Create from a slice of points.
    pub fn from_points(points: &[Point2D]) -> Self {
        let mut cloud = Self::with_capacity(points.len());
        for p in points {
            cloud.push(p.x, p.y);
        }
        cloud
    }

    /// Add a point to the cloud.
    #[inline]
    pub fn push(&mut self, x: f32, y: f32) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Number of points in the cloud.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Check if the cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over points.
    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
    }

    /// Convert to polar samples.
    ///
    /// Distance is the Euclidean norm; angle is `atan2(y, x)` in radians,
    /// range (−π, π]. The origin maps to `(0.0, 0.0)` by convention
    /// (`atan2(0, 0)` is 0), so an all-origin cloud never yields NaN.
    pub fn to_polar(&self) -> PolarCloud {
        let mut polar = PolarCloud::with_capacity(self.len());
        for (&x, &y) in self.xs.iter().zip(self.ys.iter()) {
            polar.push((x * x + y * y).sqrt(), y.atan2(x));
        }
        polar
    }
}

/// Polar terrain samples in the rover frame, SoA layout.
///
/// Angle 0 is straight ahead; positive angles are to the left.
#[derive(Clone, Debug, Default)]
pub struct PolarCloud {
    /// Distances, all ≥ 0.
    pub dists: Vec<f32>,
    /// Angles in radians, range (−π, π].
    pub angles: Vec<f32>,
}

impl PolarCloud {
    /// Create a new empty polar cloud.
    pub fn new() -> Self {
        Self {
            dists: Vec::new(),
            angles: Vec::new(),
        }
    }

    /// Create a polar cloud with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dists: Vec::with_capacity(capacity),
            angles: Vec::with_capacity(capacity),
        }
    }

    /// Add a sample.
    #[inline]
    pub fn push(&mut self, dist: f32, angle: f32) {
        self.dists.push(dist);
        self.angles.push(angle);
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.dists.len()
    }

    /// Check if the cloud is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dists.is_empty()
    }

    /// Arithmetic mean of the angles in radians, or `None` when empty.
    ///
    /// A forward camera only produces samples within roughly ±π/2, so a
    /// plain arithmetic mean is safe here (no wrap-around ambiguity).
    pub fn mean_angle(&self) -> Option<f32> {
        if self.angles.is_empty() {
            return None;
        }
        Some(self.angles.iter().sum::<f32>() / self.angles.len() as f32)
    }

    /// Smallest sample distance, or `None` when empty.
    pub fn min_dist(&self) -> Option<f32> {
        self.dists
            .iter()
            .copied()
            .fold(None, |acc, d| match acc {
                None => Some(d),
                Some(m) => Some(m.min(d)),
            })
    }
}
