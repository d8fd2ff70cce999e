//! Navigation state: control mode, actuation, motion-window accumulators.

use crate::core::RoverPose;

/// Discrete control mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Driving toward open terrain.
    Forward,
    /// Braking or pivot-turning in place.
    Stop,
}

impl NavMode {
    /// Mode name for logging.
    pub fn name(self) -> &'static str {
        match self {
            NavMode::Forward => "Forward",
            NavMode::Stop => "Stop",
        }
    }
}

/// Motion classification produced at each stuck/spin window boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionStatus {
    /// Moving normally (also reported mid-window).
    Normal,
    /// Commanding motion but barely displacing.
    Stuck,
    /// Commanding the same fixed steer with no terrain-driven
    /// correction — oscillating in place.
    Spin,
    /// Both conditions held at the same window boundary.
    StuckAndSpin,
}

impl MotionStatus {
    /// Whether the stuck condition holds.
    #[inline]
    pub fn is_stuck(self) -> bool {
        matches!(self, MotionStatus::Stuck | MotionStatus::StuckAndSpin)
    }

    /// Whether the spin condition holds.
    #[inline]
    pub fn is_spin(self) -> bool {
        matches!(self, MotionStatus::Spin | MotionStatus::StuckAndSpin)
    }
}

/// The actuation command handed to the host each tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriveCommand {
    /// Forward throttle, ≥ 0.
    pub throttle: f32,
    /// Brake strength, ≥ 0.
    pub brake: f32,
    /// Steering angle in degrees, clamped to the steer limit.
    pub steer: f32,
    /// Pickup request, edge-triggered; the host clears it once honored.
    pub pickup: bool,
}

/// Vehicle telemetry consumed each tick alongside the perception output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Telemetry {
    /// Current pose from the telemetry bus.
    pub pose: RoverPose,
    /// Current speed in world units per second.
    pub speed: f32,
    /// Host-reported "within pickup range of a target".
    pub near_sample: bool,
    /// Host-reported "pickup actuator busy".
    pub picking_up: bool,
}

/// Mutable navigation state, mission lifetime.
///
/// Holds the discrete mode, the standing actuation triple (decisions
/// read their own previous commands), and the short-window stuck/spin
/// accumulators. Mutated only by
/// [`decision_step`](super::decision::decision_step).
#[derive(Clone, Debug)]
pub struct NavState {
    /// Current control mode.
    pub mode: NavMode,
    /// Standing throttle command.
    pub throttle: f32,
    /// Standing brake command.
    pub brake: f32,
    /// Standing steer command, degrees.
    pub steer: f32,
    /// Motion status classified this tick (`Normal` mid-window).
    pub status: MotionStatus,

    /// Ticks elapsed in the current stuck/spin window.
    pub(crate) tick_in_window: u32,
    /// Accumulated displacement within the window.
    pub(crate) cum_dist: f32,
    /// Accumulated |Δsteer| within the window.
    pub(crate) cum_steer: f32,
    /// Pose at the previous tick (None before the first tick).
    pub(crate) last_pose: Option<RoverPose>,
    /// Steer command standing at the previous tick.
    pub(crate) last_steer: f32,
}

impl NavState {
    /// Initial state: forward mode, all actuation neutral.
    pub fn new() -> Self {
        Self {
            mode: NavMode::Forward,
            throttle: 0.0,
            brake: 0.0,
            steer: 0.0,
            status: MotionStatus::Normal,
            tick_in_window: 0,
            cum_dist: 0.0,
            cum_steer: 0.0,
            last_pose: None,
            last_steer: 0.0,
        }
    }

    /// The standing actuation as a command with the given pickup flag.
    pub(crate) fn command(&self, pickup: bool) -> DriveCommand {
        DriveCommand {
            throttle: self.throttle.max(0.0),
            brake: self.brake.max(0.0),
            steer: self.steer,
            pickup,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}
