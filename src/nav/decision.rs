//! The per-tick navigation decision.
//!
//! Consumes the polar terrain summary, the world map, and telemetry;
//! mutates [`NavState`] and returns the actuation command. All behavior
//! lives in pure functions of explicit inputs so the state machine tests
//! run without any perception in the loop.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::math::{clamp, rad_to_deg};
use crate::core::PolarCloud;
use crate::map::{MapConfig, WorldMap};
use crate::summary::TerrainSummary;
use crate::transform::rover_to_world;

use super::state::{DriveCommand, MotionStatus, NavMode, NavState, Telemetry};

/// Tunables for the navigation state machine.
///
/// The stuck/spin window length and thresholds were tuned empirically
/// for one simulator; treat them as configuration when porting to other
/// frame rates or vehicle dynamics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NavConfig {
    /// Below this navigable sample count, forward mode must stop.
    #[serde(default = "defaults::stop_forward")]
    pub stop_forward: usize,

    /// At or above this sample count, stop mode may resume forward.
    #[serde(default = "defaults::go_forward")]
    pub go_forward: usize,

    /// Speed cap; coast (zero throttle) once reached.
    #[serde(default = "defaults::max_vel")]
    pub max_vel: f32,

    /// Throttle value applied when accelerating.
    #[serde(default = "defaults::throttle_set")]
    pub throttle_set: f32,

    /// Brake value applied when braking.
    #[serde(default = "defaults::brake_set")]
    pub brake_set: f32,

    /// Steering limit in degrees (commands clamp to ±limit).
    #[serde(default = "defaults::steer_limit_deg")]
    pub steer_limit_deg: f32,

    /// Stuck/spin evaluation window length in ticks.
    #[serde(default = "defaults::window_ticks")]
    pub window_ticks: u32,

    /// Accumulated displacement below which a window classifies stuck.
    #[serde(default = "defaults::stuck_dist_threshold")]
    pub stuck_dist_threshold: f32,

    /// Weight of the re-visited-terrain steering penalty.
    #[serde(default = "defaults::penalty_weight")]
    pub penalty_weight: f32,

    /// Target pixels required before a target counts as in view.
    #[serde(default = "defaults::target_pixel_threshold")]
    pub target_pixel_threshold: usize,

    /// Target distance below which the vehicle brakes for approach.
    #[serde(default = "defaults::target_close_dist")]
    pub target_close_dist: f32,

    /// Speed below which the vehicle counts as (nearly) stopped.
    #[serde(default = "defaults::low_speed_threshold")]
    pub low_speed_threshold: f32,

    /// Speed below which a pickup may be requested.
    #[serde(default = "defaults::pickup_speed_threshold")]
    pub pickup_speed_threshold: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            stop_forward: defaults::stop_forward(),
            go_forward: defaults::go_forward(),
            max_vel: defaults::max_vel(),
            throttle_set: defaults::throttle_set(),
            brake_set: defaults::brake_set(),
            steer_limit_deg: defaults::steer_limit_deg(),
            window_ticks: defaults::window_ticks(),
            stuck_dist_threshold: defaults::stuck_dist_threshold(),
            penalty_weight: defaults::penalty_weight(),
            target_pixel_threshold: defaults::target_pixel_threshold(),
            target_close_dist: defaults::target_close_dist(),
            low_speed_threshold: defaults::low_speed_threshold(),
            pickup_speed_threshold: defaults::pickup_speed_threshold(),
        }
    }
}

/// Run one navigation decision.
///
/// Mutates `state` (mode, standing actuation, window accumulators) and
/// returns the command for the host to apply this tick.
pub fn decision_step<R: Rng + ?Sized>(
    state: &mut NavState,
    summary: &TerrainSummary,
    map: &WorldMap,
    map_config: &MapConfig,
    telemetry: &Telemetry,
    config: &NavConfig,
    rng: &mut R,
) -> DriveCommand {
    let entry_steer = state.steer;
    let status = update_motion_window(state, telemetry, config);
    state.status = status;

    if status.is_stuck() && state.mode != NavMode::Stop {
        info!("stuck detected, {} -> Stop", state.mode.name());
        state.mode = NavMode::Stop;
    }

    if summary.nav.is_empty() {
        // Perception produced nothing at all: creep forward rather than
        // leaving the previous actuation standing
        state.throttle = config.throttle_set;
        state.brake = 0.0;
        state.steer = 0.0;
    } else if let Some(target) = &summary.target {
        target_seek(state, target, telemetry, config, status);
    } else {
        match state.mode {
            NavMode::Forward => {
                forward_step(state, summary, map, map_config, telemetry, config, status, rng)
            }
            NavMode::Stop => stop_step(state, summary, telemetry, config),
        }
    }

    state.steer = clamp(state.steer, -config.steer_limit_deg, config.steer_limit_deg);

    let pickup = telemetry.near_sample
        && telemetry.speed < config.pickup_speed_threshold
        && !telemetry.picking_up;

    state.last_steer = entry_steer;
    state.last_pose = Some(telemetry.pose);
    state.command(pickup)
}

/// Accumulate the stuck/spin window and classify at its boundary.
///
/// Displacement between consecutive poses and |Δsteer| between
/// consecutive standing commands accumulate every tick; classification
/// happens only when the window closes, after which both accumulators
/// reset. Mid-window ticks always report `Normal`.
fn update_motion_window(
    state: &mut NavState,
    telemetry: &Telemetry,
    config: &NavConfig,
) -> MotionStatus {
    if let Some(last) = state.last_pose {
        state.cum_dist += telemetry.pose.position().distance_to(last.position());
    }
    state.cum_steer += (state.last_steer - state.steer).abs();
    state.tick_in_window += 1;

    if state.tick_in_window < config.window_ticks {
        return MotionStatus::Normal;
    }

    let stuck = state.cum_dist > 0.0 && state.cum_dist < config.stuck_dist_threshold;
    let spin = state.cum_steer == 0.0;
    debug!(
        "window close: cum_dist={:.4} cum_steer={:.2} stuck={} spin={}",
        state.cum_dist, state.cum_steer, stuck, spin
    );

    state.cum_dist = 0.0;
    state.cum_steer = 0.0;
    state.tick_in_window = 0;

    match (stuck, spin) {
        (true, true) => MotionStatus::StuckAndSpin,
        (true, false) => MotionStatus::Stuck,
        (false, true) => MotionStatus::Spin,
        (false, false) => MotionStatus::Normal,
    }
}

/// Steer toward the visible target; brake when close, break free when
/// stuck short of pickup range.
fn target_seek(
    state: &mut NavState,
    target: &PolarCloud,
    telemetry: &Telemetry,
    config: &NavConfig,
    status: MotionStatus,
) {
    let mean_deg = rad_to_deg(target.mean_angle().unwrap_or(0.0));
    state.steer = clamp(mean_deg, -config.steer_limit_deg, config.steer_limit_deg);

    let nearest = target.min_dist().unwrap_or(f32::INFINITY);
    if nearest < config.target_close_dist {
        state.brake = config.brake_set;
        // Stopped short of pickup range: release the brake and
        // reverse-steer to break free
        if !telemetry.near_sample && status.is_stuck() {
            state.brake = 0.0;
            state.throttle = 0.0;
            state.steer = -config.steer_limit_deg;
        }
    } else if telemetry.speed <= config.low_speed_threshold {
        state.throttle = config.throttle_set;
        state.brake = 0.0;
    }
}

/// Forward mode: drive toward the navigable mean, penalized away from
/// terrain the map says is already heavily driven.
#[allow(clippy::too_many_arguments)]
fn forward_step<R: Rng + ?Sized>(
    state: &mut NavState,
    summary: &TerrainSummary,
    map: &WorldMap,
    map_config: &MapConfig,
    telemetry: &Telemetry,
    config: &NavConfig,
    status: MotionStatus,
    rng: &mut R,
) {
    if summary.nav.len() >= config.stop_forward {
        state.throttle = if telemetry.speed < config.max_vel {
            config.throttle_set
        } else {
            0.0 // coast at the cap
        };
        state.brake = 0.0;

        if status.is_spin() {
            // Break the oscillation with a randomized steer
            state.steer = rng.random_range(-config.steer_limit_deg..=config.steer_limit_deg);
            debug!("spin detected, randomized steer to {:.1}", state.steer);
        } else {
            let mean_deg = rad_to_deg(summary.nav.mean_angle().unwrap_or(0.0));
            let avoid_deg = overdriven_mean_angle_deg(summary, map, map_config, telemetry);
            state.steer = clamp(
                mean_deg - config.penalty_weight * avoid_deg,
                -config.steer_limit_deg,
                config.steer_limit_deg,
            );
        }
    } else {
        info!(
            "navigable samples {} below stop threshold {}, Forward -> Stop",
            summary.nav.len(),
            config.stop_forward
        );
        state.throttle = 0.0;
        state.brake = config.brake_set;
        state.steer = 0.0;
        state.mode = NavMode::Stop;
    }
}

/// Stop mode: brake to a standstill, pivot until the view opens, then
/// resume.
fn stop_step(
    state: &mut NavState,
    summary: &TerrainSummary,
    telemetry: &Telemetry,
    config: &NavConfig,
) {
    if telemetry.speed > config.low_speed_threshold {
        // Still moving: keep braking
        state.throttle = 0.0;
        state.brake = config.brake_set;
        state.steer = 0.0;
        return;
    }

    if summary.nav.len() < config.go_forward {
        // Not enough open terrain: release the brake and pivot-turn in
        // place at the steer limit, continuing the previous direction
        state.throttle = 0.0;
        state.brake = 0.0;
        let prev = state.steer;
        state.steer = if prev.abs() != config.steer_limit_deg {
            if prev == 0.0 {
                -config.steer_limit_deg
            } else {
                config.steer_limit_deg * prev.signum()
            }
        } else {
            prev
        };
    } else {
        // Enough terrain ahead; resume only if no throttle command is
        // already standing, otherwise cancel it and swing hard left —
        // terrain that opens for a single tick is not worth resuming
        // into
        if state.throttle == 0.0 {
            state.throttle = config.throttle_set;
            state.brake = 0.0;
            let mean_deg = rad_to_deg(summary.nav.mean_angle().unwrap_or(0.0));
            state.steer = clamp(mean_deg, -config.steer_limit_deg, config.steer_limit_deg);
            info!("terrain open ({} samples), Stop -> Forward", summary.nav.len());
            state.mode = NavMode::Forward;
        } else {
            state.throttle = 0.0;
            state.brake = 0.0;
            state.steer = -config.steer_limit_deg;
        }
    }
}

/// Mean angle (degrees) of the current navigable samples whose world
/// cell the map marks as heavily re-visited. Spatial membership test per
/// sample; returns 0 when nothing overlaps.
fn overdriven_mean_angle_deg(
    summary: &TerrainSummary,
    map: &WorldMap,
    map_config: &MapConfig,
    telemetry: &Telemetry,
) -> f32 {
    let mean = map.navigable_mean();
    let pos = telemetry.pose.position();

    let mut sum = 0.0;
    let mut n = 0usize;
    for (point, &angle) in summary.nav_points.iter().zip(summary.nav.angles.iter()) {
        let (x, y) = rover_to_world(point, pos, telemetry.pose.yaw, map.size(), map_config.scale);
        if map.is_overdriven(x, y, mean, map_config.overdriven_margin) {
            sum += angle;
            n += 1;
        }
    }

    if n == 0 {
        0.0
    } else {
        rad_to_deg(sum / n as f32)
    }
}
