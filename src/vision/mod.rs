//! Camera-frame processing: rectification and terrain classification.
//!
//! - [`frame`]: RGB frame container
//! - [`mask`]: binary classification masks
//! - [`morphology`]: erode/dilate/open with a square element
//! - [`color`]: RGB threshold and HSV band tests
//! - [`rectify`]: fixed four-point perspective correction
//! - [`classify`]: the three-mask terrain classifier

pub mod classify;
pub mod color;
pub mod frame;
pub mod mask;
pub mod morphology;
pub mod rectify;

pub use classify::{classify, ClassifiedFrame, ClassifierConfig};
pub use color::{rgb_to_hsv, HsvBand};
pub use frame::RgbFrame;
pub use mask::Mask;
pub use rectify::Rectifier;
