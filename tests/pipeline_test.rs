//! End-to-end pipeline tests: synthetic camera frames plus telemetry in,
//! actuation commands and map updates out.

use yatri_rover::vision::RgbFrame;
use yatri_rover::{NavMode, RoverConfig, RoverCore, RoverError, RoverPose, Telemetry};

const SAND: [u8; 3] = [200, 190, 180];
const ROCK: [u8; 3] = [0, 255, 0]; // hue 85 on the 0-255 scale

fn level_telemetry(x: f32, y: f32, speed: f32) -> Telemetry {
    Telemetry {
        pose: RoverPose::new(x, y, 0.0, 0.0, 0.0),
        speed,
        near_sample: false,
        picking_up: false,
    }
}

/// Uniform bright terrain covering the whole camera view.
fn open_terrain_frame() -> RgbFrame {
    let mut frame = RgbFrame::new(320, 160);
    frame.fill_rect(0, 0, 320, 160, SAND);
    frame
}

/// Bright terrain with the left half of the view occupied by a target.
fn target_on_left_frame() -> RgbFrame {
    let mut frame = open_terrain_frame();
    frame.fill_rect(0, 0, 160, 160, ROCK);
    frame
}

#[test]
fn open_terrain_drives_forward() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = open_terrain_frame();
    let telemetry = level_telemetry(100.0, 100.0, 0.0);

    let report = core.tick(&frame, &telemetry).unwrap();
    assert_eq!(report.mode, NavMode::Forward);
    assert_eq!(report.command.throttle, core.config().nav.throttle_set);
    assert_eq!(report.command.brake, 0.0);
    assert!(report.command.steer.abs() <= core.config().nav.steer_limit_deg);
    assert!(
        report.nav_sample_count > core.config().nav.go_forward,
        "uniform terrain should fill the view, got {} samples",
        report.nav_sample_count
    );
    assert!(!report.target_in_view);

    // A level tick accumulates navigable hits into the world map
    let navigable_total: u64 = core
        .world_map()
        .navigable_cells()
        .iter()
        .map(|&c| c as u64)
        .sum();
    assert!(navigable_total > 0);
}

#[test]
fn dark_view_creeps_forward() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = RgbFrame::new(320, 160); // all black
    let telemetry = level_telemetry(100.0, 100.0, 0.0);

    let report = core.tick(&frame, &telemetry).unwrap();
    assert_eq!(report.nav_sample_count, 0);
    assert_eq!(report.command.throttle, core.config().nav.throttle_set);
    assert_eq!(report.command.brake, 0.0);
    assert_eq!(report.command.steer, 0.0);
}

#[test]
fn tilted_pose_freezes_the_map() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = open_terrain_frame();

    let tilted = Telemetry {
        pose: RoverPose::new(100.0, 100.0, 0.0, 5.0, 0.0),
        speed: 1.0,
        near_sample: false,
        picking_up: false,
    };
    core.tick(&frame, &tilted).unwrap();
    let after_tilted: u64 = core
        .world_map()
        .navigable_cells()
        .iter()
        .map(|&c| c as u64)
        .sum();
    assert_eq!(after_tilted, 0, "tilted frames must not reach the map");

    core.tick(&frame, &level_telemetry(100.0, 100.0, 1.0)).unwrap();
    let after_level: u64 = core
        .world_map()
        .navigable_cells()
        .iter()
        .map(|&c| c as u64)
        .sum();
    assert!(after_level > 0);
}

#[test]
fn target_in_view_steers_toward_it() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = target_on_left_frame();
    let telemetry = level_telemetry(100.0, 100.0, 1.0);

    let report = core.tick(&frame, &telemetry).unwrap();
    assert!(report.target_in_view);
    // Left of the view is positive angle in the rover frame
    assert!(
        report.command.steer > 0.0,
        "steer {} should aim left at the target",
        report.command.steer
    );
    // The target reaches the near field, so the approach brakes
    assert_eq!(report.command.brake, core.config().nav.brake_set);

    // Target hits landed in the map
    let target_total: u64 = core
        .world_map()
        .target_cells()
        .iter()
        .map(|&c| c as u64)
        .sum();
    assert!(target_total > 0);
}

#[test]
fn pickup_requested_when_slow_beside_sample() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = target_on_left_frame();
    let telemetry = Telemetry {
        pose: RoverPose::new(100.0, 100.0, 0.0, 0.0, 0.0),
        speed: 0.05,
        near_sample: true,
        picking_up: false,
    };

    let report = core.tick(&frame, &telemetry).unwrap();
    assert!(report.command.pickup);
}

#[test]
fn stalled_window_forces_stop() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = open_terrain_frame();
    let window = core.config().nav.window_ticks;

    // Throttle commanded every tick but the pose barely moves
    let mut last = None;
    for i in 0..window {
        let x = 100.0 + i as f32 * 0.0005;
        last = Some(core.tick(&frame, &level_telemetry(x, 100.0, 0.0)).unwrap());
    }
    let report = last.unwrap();
    assert!(report.status.is_stuck());
    assert_eq!(report.mode, NavMode::Stop);
}

#[test]
fn wrong_frame_size_is_rejected() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = RgbFrame::new(640, 480);
    let err = core
        .tick(&frame, &level_telemetry(0.0, 0.0, 0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        RoverError::Frame {
            expected_width: 320,
            expected_height: 160,
            width: 640,
            height: 480,
        }
    ));
}

#[test]
fn non_finite_pose_is_rejected() {
    let mut core = RoverCore::new(RoverConfig::default()).unwrap();
    let frame = open_terrain_frame();
    let telemetry = Telemetry {
        pose: RoverPose::new(100.0, f32::INFINITY, 0.0, 0.0, 0.0),
        ..Telemetry::default()
    };
    assert!(matches!(
        core.tick(&frame, &telemetry),
        Err(RoverError::Pose(_))
    ));
}
