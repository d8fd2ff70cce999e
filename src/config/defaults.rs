//! Default value functions for serde deserialization.

use crate::vision::HsvBand;

// -- calibration --

pub fn frame_width() -> usize {
    320
}

pub fn frame_height() -> usize {
    160
}

/// Source quad of the ground-plane calibration target in image pixels,
/// ordered bottom-left, bottom-right, top-right, top-left.
pub fn src_quad() -> [[f64; 2]; 4] {
    [[14.0, 140.0], [301.0, 140.0], [200.0, 96.0], [118.0, 96.0]]
}

/// Half the side length, in output pixels, of the rectified square the
/// calibration target maps to.
pub fn dst_half_width() -> f64 {
    5.0
}

/// Gap in pixels between the rectified square and the bottom image edge,
/// accounting for the camera sitting ahead of the rover origin.
pub fn bottom_offset() -> f64 {
    6.0
}

// -- classifier --

pub fn rgb_threshold() -> [u8; 3] {
    [170, 160, 160]
}

pub fn kernel_size() -> usize {
    5
}

pub fn target_band() -> HsvBand {
    HsvBand {
        h_min: 80,
        h_max: 100,
        s_min: 100,
        s_max: 255,
        v_min: 100,
        v_max: 255,
    }
}

// -- world map --

pub fn map_size() -> usize {
    200
}

pub fn map_scale() -> f32 {
    10.0
}

pub fn pitch_tolerance_deg() -> f32 {
    0.75
}

pub fn roll_tolerance_deg() -> f32 {
    1.0
}

pub fn overdriven_margin() -> f32 {
    200.0
}

// -- navigation --

pub fn stop_forward() -> usize {
    50
}

pub fn go_forward() -> usize {
    500
}

pub fn max_vel() -> f32 {
    2.0
}

pub fn throttle_set() -> f32 {
    0.2
}

pub fn brake_set() -> f32 {
    10.0
}

pub fn steer_limit_deg() -> f32 {
    15.0
}

pub fn window_ticks() -> u32 {
    10
}

pub fn stuck_dist_threshold() -> f32 {
    0.01
}

pub fn penalty_weight() -> f32 {
    0.2
}

pub fn target_pixel_threshold() -> usize {
    10
}

pub fn target_close_dist() -> f32 {
    10.0
}

pub fn low_speed_threshold() -> f32 {
    0.2
}

pub fn pickup_speed_threshold() -> f32 {
    0.1
}
