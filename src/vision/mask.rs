//! Binary classification masks.

/// A binary grid with the same dimensions as the rectified frame.
///
/// One mask per terrain class (navigable, obstacle, target), produced
/// fresh each tick and not retained. Cells are stored as raw `u8` 0/1 in
/// a flat row-major array.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Mask {
    /// Create an all-clear mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width * height],
        }
    }

    /// Mask width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (col, row) is set.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> bool {
        debug_assert!(col < self.width && row < self.height);
        self.cells[row * self.width + col] != 0
    }

    /// Set or clear the pixel at (col, row).
    #[inline]
    pub fn set(&mut self, col: usize, row: usize, value: bool) {
        debug_assert!(col < self.width && row < self.height);
        self.cells[row * self.width + col] = value as u8;
    }

    /// Count of set pixels.
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Iterate over the (col, row) coordinates of set pixels.
    pub fn iter_set(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c != 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Logical complement within image bounds.
    pub fn complement(&self) -> Mask {
        let mut out = self.clone();
        for c in &mut out.cells {
            *c = 1 - *c;
        }
        out
    }

    /// Whether `other` is the exact set-complement of this mask.
    pub fn is_complement_of(&self, other: &Mask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(&a, &b)| a + b == 1)
    }

    /// Raw cell slice (0/1 per pixel, row-major).
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
