//! Navigation: the per-tick decision state machine.
//!
//! [`decision_step`] maps a terrain summary, the world map, and vehicle
//! telemetry to an actuation command, carrying its memory in
//! [`NavState`].

pub mod decision;
pub mod state;

pub use decision::{decision_step, NavConfig};
pub use state::{DriveCommand, MotionStatus, NavMode, NavState, Telemetry};
