use glam::Vec2;

use crate::config::CompanionConfig;

/// Activity signal source: tracks the pointer and derives the idle flag.
///
/// The host pushes a fresh pointer sample plus elapsed seconds each sample
/// tick; the engine never reads a clock itself, which keeps it deterministic
/// under test. Only movement beyond the configured threshold counts as
/// activity — sub-pixel sensor jitter doesn't keep the orb awake.
pub struct SignalEngine {
    mouse_pos: Vec2,
    is_idle: bool,
    /// Last position at which a qualifying movement was seen.
    last_active_pos: Vec2,
    seconds_since_activity: f32,
    sample_interval: f32,
    movement_threshold: f32,
    idle_threshold: f32,
}

impl SignalEngine {
    pub fn new(config: &CompanionConfig, initial_point: Vec2) -> Self {
        Self {
            mouse_pos: initial_point,
            is_idle: false,
            last_active_pos: initial_point,
            seconds_since_activity: 0.0,
            sample_interval: config.tick_interval(),
            movement_threshold: config.mouse_movement_threshold,
            idle_threshold: config.idle_threshold_secs(),
        }
    }

    /// Record one pointer sample. `dt` is seconds since the previous sample.
    pub fn poll(&mut self, point: Vec2, dt: f32) {
        self.mouse_pos = point;
        self.seconds_since_activity += dt;

        if (point - self.last_active_pos).length() >= self.movement_threshold {
            self.seconds_since_activity = 0.0;
            self.last_active_pos = point;
        }

        self.is_idle = self.seconds_since_activity >= self.idle_threshold;
    }

    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn is_idle(&self) -> bool {
        self.is_idle
    }

    pub fn sample_interval(&self) -> f32 {
        self.sample_interval
    }

    /// Adjust the host's sampling cadence. No-op when unchanged.
    pub fn set_sample_interval(&mut self, interval: f32) {
        if interval != self.sample_interval {
            self.sample_interval = interval;
        }
    }
}
