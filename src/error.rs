//! Error types for the rover core.

use thiserror::Error;

/// Rover core error type.
///
/// The control loop itself never fails per tick on degenerate sensor
/// content (empty masks, zero samples) — those are handled by fallback
/// branches in the decision stage. These errors cover the hard
/// preconditions only: a malformed configuration at startup, or a frame
/// or pose that violates the integration contract with the host.
#[derive(Error, Debug)]
pub enum RoverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Frame dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    Frame {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Pose error: {0}")]
    Pose(String),
}

pub type Result<T> = std::result::Result<T, RoverError>;
