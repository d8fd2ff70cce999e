//! # Yatri-Rover: Perception-to-Decision Core for a Ground Rover
//!
//! Turns one forward camera frame plus a telemetry snapshot into an
//! actuation command, once per control tick, while accumulating a
//! top-down world occupancy map as a side effect.
//!
//! ## Pipeline
//!
//! ```text
//! camera frame ──► rectify ──► classify ──┬──► accumulate ──► world map
//!                 (homography) (terrain)  │     (attitude-gated)
//!                                         └──► summarize ──► polar view
//!                                                               │
//! telemetry ──────────────────────────────────────────────► decide
//!                                                               │
//!                                                      throttle/brake/steer
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yatri_rover::{RoverConfig, RoverCore, Telemetry};
//! use yatri_rover::vision::RgbFrame;
//!
//! let mut core = RoverCore::new(RoverConfig::default()).unwrap();
//!
//! // Per control tick: hand in the camera frame and telemetry
//! let frame = RgbFrame::new(320, 160);
//! let telemetry = Telemetry::default();
//! let report = core.tick(&frame, &telemetry).unwrap();
//! println!(
//!     "mode {:?}: throttle {:.2} brake {:.1} steer {:+.1}",
//!     report.mode, report.command.throttle, report.command.brake,
//!     report.command.steer
//! );
//! ```
//!
//! ## Coordinate Frames
//!
//! - **Image**: column-right, row-down, origin top-left.
//! - **Rover**: X-forward, Y-left, origin at the vehicle, units are
//!   rectified pixels; angles counter-clockwise positive.
//! - **World**: the rover frame rotated by yaw, scaled down, and
//!   translated to the vehicle position; quantized to map cells.
//!
//! ## Architecture
//!
//! - [`core`]: fundamental types (Point2D, RoverPose, point clouds)
//! - [`transform`]: image → rover → world coordinate changes
//! - [`vision`]: rectification and terrain classification
//! - [`map`]: world occupancy accumulation
//! - [`summary`]: per-tick polar terrain summary
//! - [`nav`]: the decision state machine
//! - [`config`]: YAML configuration
//! - [`pipeline`]: the [`RoverCore`] facade tying it together

pub mod config;
pub mod core;
pub mod error;
pub mod map;
pub mod nav;
pub mod pipeline;
pub mod summary;
pub mod transform;
pub mod vision;

pub use config::{CalibrationConfig, ConfigLoadError, RoverConfig};
pub use core::{Point2D, PointCloud2D, PolarCloud, RoverPose};
pub use error::{Result, RoverError};
pub use map::{MapConfig, WorldMap};
pub use nav::{DriveCommand, MotionStatus, NavConfig, NavMode, NavState, Telemetry};
pub use pipeline::{RoverCore, TickReport};
pub use summary::TerrainSummary;
