//! Core types for the rover perception and decision pipeline.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`Point2D`]: 2D point in rover or world coordinates
//! - [`RoverPose`]: telemetry pose (position + yaw/pitch/roll in degrees)
//! - [`PointCloud2D`] and [`PolarCloud`]: per-tick terrain sample sets
//! - [`math`]: angle and degree helpers

mod cloud;
mod point;
mod pose;

pub mod math;

pub use cloud::{PointCloud2D, PolarCloud};
pub use point::Point2D;
pub use pose::RoverPose;
