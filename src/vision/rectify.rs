//! Camera-to-overhead perspective correction.
//!
//! The camera looks out at the terrain; the classifier and the map want
//! an overhead view. A fixed four-point correspondence — a known ground
//! rectangle directly ahead of the vehicle mapped to a small rectangle at
//! the image's bottom center — defines a homography that is solved once
//! at startup and applied to every frame. The mapping is a camera
//! calibration constant, never recomputed per tick.

use nalgebra::{DMatrix, DVector, Matrix3};

use crate::error::{Result, RoverError};

use super::frame::RgbFrame;

/// Perspective rectifier with a precomputed inverse homography.
#[derive(Clone, Debug)]
pub struct Rectifier {
    /// Maps destination (overhead) pixels back to source pixels.
    h_inv: Matrix3<f64>,
    width: usize,
    height: usize,
}

impl Rectifier {
    /// Solve the homography for four source→destination correspondences
    /// and prepare the inverse mapping for warping.
    ///
    /// Points are `[x, y]` pixel coordinates. Returns a configuration
    /// error when the correspondence is degenerate (collinear points).
    pub fn new(
        src: [[f64; 2]; 4],
        dst: [[f64; 2]; 4],
        width: usize,
        height: usize,
    ) -> Result<Self> {
        let h = solve_homography(&src, &dst)?;
        let h_inv = h.try_inverse().ok_or_else(|| {
            RoverError::Config("perspective calibration homography is singular".to_string())
        })?;
        Ok(Self {
            h_inv,
            width,
            height,
        })
    }

    /// Warp a frame into the overhead view. Output dimensions equal the
    /// input's; destination pixels that map outside the source stay
    /// black.
    ///
    /// Sampling is nearest-neighbor: the downstream thresholds are far
    /// coarser than one interpolation step.
    pub fn warp(&self, frame: &RgbFrame) -> RgbFrame {
        let mut out = RgbFrame::new(frame.width(), frame.height());
        for row in 0..frame.height() {
            for col in 0..frame.width() {
                let [sx, sy] = project(&self.h_inv, col as f64, row as f64);
                let sc = sx.round();
                let sr = sy.round();
                if sc >= 0.0
                    && sr >= 0.0
                    && (sc as usize) < frame.width()
                    && (sr as usize) < frame.height()
                {
                    out.set(col, row, frame.get(sc as usize, sr as usize));
                }
            }
        }
        out
    }

    /// Expected frame width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Expected frame height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Project a point through a 3×3 homography: `H * [x, y, 1]ᵀ → [u, v]`.
fn project(h: &Matrix3<f64>, x: f64, y: f64) -> [f64; 2] {
    let w = h[(2, 0)] * x + h[(2, 1)] * y + h[(2, 2)];
    if w.abs() < 1e-12 {
        return [f64::NAN, f64::NAN];
    }
    let u = (h[(0, 0)] * x + h[(0, 1)] * y + h[(0, 2)]) / w;
    let v = (h[(1, 0)] * x + h[(1, 1)] * y + h[(1, 2)]) / w;
    [u, v]
}

/// Direct linear transform for exactly four correspondences.
///
/// Builds the standard 8×8 system (h33 fixed to 1) and solves it by LU
/// decomposition.
fn solve_homography(src: &[[f64; 2]; 4], dst: &[[f64; 2]; 4]) -> Result<Matrix3<f64>> {
    let mut a = DMatrix::<f64>::zeros(8, 8);
    let mut b = DVector::<f64>::zeros(8);

    for (i, (s, d)) in src.iter().zip(dst.iter()).enumerate() {
        let (x, y) = (s[0], s[1]);
        let (u, v) = (d[0], d[1]);

        a[(2 * i, 0)] = x;
        a[(2 * i, 1)] = y;
        a[(2 * i, 2)] = 1.0;
        a[(2 * i, 6)] = -x * u;
        a[(2 * i, 7)] = -y * u;
        b[2 * i] = u;

        a[(2 * i + 1, 3)] = x;
        a[(2 * i + 1, 4)] = y;
        a[(2 * i + 1, 5)] = 1.0;
        a[(2 * i + 1, 6)] = -x * v;
        a[(2 * i + 1, 7)] = -y * v;
        b[2 * i + 1] = v;
    }

    let h = a.lu().solve(&b).ok_or_else(|| {
        RoverError::Config("perspective calibration points are degenerate".to_string())
    })?;

    Ok(Matrix3::new(
        h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn identity_quad() -> [[f64; 2]; 4] {
        [[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]
    }

    #[test]
    fn test_identity_mapping() {
        let h = solve_homography(&identity_quad(), &identity_quad()).unwrap();
        let [u, v] = project(&h, 37.0, 81.0);
        assert_relative_eq!(u, 37.0, epsilon = 1e-6);
        assert_relative_eq!(v, 81.0, epsilon = 1e-6);
    }

    #[test]
    fn test_homography_maps_corners() {
        let src = [[14.0, 140.0], [301.0, 140.0], [200.0, 96.0], [118.0, 96.0]];
        let dst = [
            [155.0, 154.0],
            [165.0, 154.0],
            [165.0, 144.0],
            [155.0, 144.0],
        ];
        let h = solve_homography(&src, &dst).unwrap();
        for (s, d) in src.iter().zip(dst.iter()) {
            let [u, v] = project(&h, s[0], s[1]);
            assert_relative_eq!(u, d[0], epsilon = 1e-6);
            assert_relative_eq!(v, d[1], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_degenerate_points_rejected() {
        // All four source points collinear
        let src = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]];
        assert!(solve_homography(&src, &identity_quad()).is_err());
    }

    #[test]
    fn test_warp_identity_preserves_pixels() {
        let rect = Rectifier::new(identity_quad(), identity_quad(), 8, 8).unwrap();
        let mut frame = RgbFrame::new(8, 8);
        frame.set(3, 5, [10, 20, 30]);
        let warped = rect.warp(&frame);
        assert_eq!(warped.get(3, 5), [10, 20, 30]);
    }

    #[test]
    fn test_warp_out_of_source_is_black() {
        // Shift everything 4 pixels right: leftmost dst columns sample
        // outside the source and stay black
        let src = identity_quad();
        let dst = [[4.0, 0.0], [104.0, 0.0], [104.0, 100.0], [4.0, 100.0]];
        let rect = Rectifier::new(src, dst, 8, 8).unwrap();
        let mut frame = RgbFrame::new(8, 8);
        frame.fill_rect(0, 0, 8, 8, [255, 255, 255]);
        let warped = rect.warp(&frame);
        assert_eq!(warped.get(0, 0), [0, 0, 0]);
        assert_eq!(warped.get(7, 0), [255, 255, 255]);
    }
}
