//! RGB camera frame container.

/// A fixed-size RGB frame, row-major, three bytes per pixel.
///
/// Frames are produced by the host once per tick and are read-only to
/// the core; the rectifier produces a warped copy with identical
/// dimensions.
#[derive(Clone, Debug)]
pub struct RgbFrame {
    width: usize,
    height: usize,
    /// Pixel data, `width * height * 3` bytes, R-G-B interleaved.
    data: Vec<u8>,
}

impl RgbFrame {
    /// Create a black frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    /// Wrap raw interleaved RGB bytes.
    ///
    /// Returns `None` if the buffer length does not match
    /// `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height * 3 {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the RGB triple at (col, row). Panics out of bounds.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> [u8; 3] {
        debug_assert!(col < self.width && row < self.height);
        let i = (row * self.width + col) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Set the RGB triple at (col, row). Panics out of bounds.
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, rgb: [u8; 3]) {
        debug_assert!(col < self.width && row < self.height);
        let i = (row * self.width + col) * 3;
        self.data[i] = rgb[0];
        self.data[i + 1] = rgb[1];
        self.data[i + 2] = rgb[2];
    }

    /// Fill an axis-aligned rectangle with one color. Coordinates are
    /// clamped to the frame; used heavily by tests to build scenes.
    pub fn fill_rect(&mut self, col0: usize, row0: usize, col1: usize, row1: usize, rgb: [u8; 3]) {
        for row in row0..row1.min(self.height) {
            for col in col0..col1.min(self.width) {
                self.set(col, row, rgb);
            }
        }
    }

    /// Raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let frame = RgbFrame::new(4, 2);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.get(3, 1), [0, 0, 0]);
    }

    #[test]
    fn test_from_raw_validates_length() {
        assert!(RgbFrame::from_raw(2, 2, vec![0; 12]).is_some());
        assert!(RgbFrame::from_raw(2, 2, vec![0; 11]).is_none());
    }

    #[test]
    fn test_get_set() {
        let mut frame = RgbFrame::new(3, 3);
        frame.set(1, 2, [200, 100, 50]);
        assert_eq!(frame.get(1, 2), [200, 100, 50]);
        assert_eq!(frame.get(2, 2), [0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_clamps() {
        let mut frame = RgbFrame::new(4, 4);
        frame.fill_rect(2, 2, 10, 10, [255, 255, 255]);
        assert_eq!(frame.get(3, 3), [255, 255, 255]);
        assert_eq!(frame.get(1, 1), [0, 0, 0]);
    }
}
