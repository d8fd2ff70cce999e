//! Binary morphology with a square structuring element.
//!
//! Border policy is clamp-to-edge (replicate), so a pixel on the image
//! border is judged against its in-bounds neighborhood only. This keeps
//! erosion from eating a one-pixel rim off every frame.

use super::mask::Mask;

/// Erode: a pixel stays set only if every pixel under the `kernel_size`
/// × `kernel_size` window is set.
///
/// `kernel_size` must be odd.
pub fn erode(mask: &Mask, kernel_size: usize) -> Mask {
    assert!(kernel_size % 2 == 1, "kernel size must be odd");
    let half = (kernel_size / 2) as isize;
    let (w, h) = (mask.width(), mask.height());
    let mut out = Mask::new(w, h);

    for row in 0..h {
        for col in 0..w {
            let mut all_set = true;
            'window: for dy in -half..=half {
                for dx in -half..=half {
                    let c = (col as isize + dx).clamp(0, w as isize - 1) as usize;
                    let r = (row as isize + dy).clamp(0, h as isize - 1) as usize;
                    if !mask.get(c, r) {
                        all_set = false;
                        break 'window;
                    }
                }
            }
            out.set(col, row, all_set);
        }
    }
    out
}

/// Dilate: a pixel becomes set if any pixel under the window is set.
///
/// `kernel_size` must be odd.
pub fn dilate(mask: &Mask, kernel_size: usize) -> Mask {
    assert!(kernel_size % 2 == 1, "kernel size must be odd");
    let half = (kernel_size / 2) as isize;
    let (w, h) = (mask.width(), mask.height());
    let mut out = Mask::new(w, h);

    for row in 0..h {
        for col in 0..w {
            let mut any_set = false;
            'window: for dy in -half..=half {
                for dx in -half..=half {
                    let c = (col as isize + dx).clamp(0, w as isize - 1) as usize;
                    let r = (row as isize + dy).clamp(0, h as isize - 1) as usize;
                    if mask.get(c, r) {
                        any_set = true;
                        break 'window;
                    }
                }
            }
            out.set(col, row, any_set);
        }
    }
    out
}

/// Morphological opening: erosion followed by dilation. Suppresses
/// isolated noise pixels while preserving large regions.
pub fn open(mask: &Mask, kernel_size: usize) -> Mask {
    dilate(&erode(mask, kernel_size), kernel_size)
}
