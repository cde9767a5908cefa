use glam::Vec2;

use crate::config::CompanionConfig;
use crate::state::CompanionState;

/// Floor on the integration step — guards against zero, negative, or
/// duplicated-tick dt values.
const MIN_DT: f32 = 0.0001;
/// Highlight direction when the cursor sits exactly on the orb (screen-up).
const HIGHLIGHT_FALLBACK: Vec2 = Vec2::new(0.0, -1.0);
/// Bounce direction when the cursor sits exactly on the orb.
const BOUNCE_FALLBACK: Vec2 = Vec2::new(0.0, 1.0);

/// Discrete event emitted by a simulation tick.
///
/// At most three fire per tick, in detection order: a poke, then the
/// double-poke it may complete, then a state transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Poke,
    DoublePoke,
    StateChanged {
        from: CompanionState,
        to: CompanionState,
    },
}

/// Everything the host needs from one tick. Produced fresh each call,
/// never retained by the engine.
#[derive(Debug, Clone)]
pub struct Output {
    pub position: Vec2,
    pub velocity: Vec2,
    pub state: CompanionState,
    pub events: Vec<Event>,
    /// Horizontal deformation scale, always >= 1.
    pub squash_x: f32,
    /// Vertical deformation scale, always <= 1.
    pub squash_y: f32,
    /// Unit vector from orb toward cursor, for the specular highlight.
    pub highlight_direction: Vec2,
}

/// Per-tick behavior simulation for the companion orb.
///
/// The host owns position and velocity and passes them back in each tick;
/// the engine only keeps the memory needed for transition detection and
/// poke cooldowns. `step` is a total function: degenerate inputs are
/// clamped or given fallbacks, never surfaced as errors.
pub struct PhysicsEngine {
    config: CompanionConfig,
    last_state: CompanionState,
    /// Starts at infinity so the very first poke can't read as a double.
    time_since_last_poke: f32,
    poke_cooldown_remaining: f32,
    double_poke_cooldown_remaining: f32,
}

impl PhysicsEngine {
    pub fn new(config: CompanionConfig) -> Self {
        Self {
            config,
            last_state: CompanionState::IdlePerch,
            time_since_last_poke: f32::INFINITY,
            poke_cooldown_remaining: 0.0,
            double_poke_cooldown_remaining: 0.0,
        }
    }

    pub fn config(&self) -> &CompanionConfig {
        &self.config
    }

    /// Advance the simulation one tick.
    ///
    /// `dt` is wall-clock seconds since the previous call; it is floored at
    /// a small positive value. Focus and idle are external overrides that
    /// win over any cursor-proximity behavior.
    pub fn step(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        cursor: Vec2,
        is_focus_on: bool,
        is_idle: bool,
        dt: f32,
    ) -> Output {
        let dt = dt.max(MIN_DT);
        self.poke_cooldown_remaining = (self.poke_cooldown_remaining - dt).max(0.0);
        self.double_poke_cooldown_remaining = (self.double_poke_cooldown_remaining - dt).max(0.0);
        self.time_since_last_poke += dt;

        let to_cursor = cursor - position;
        let cursor_dist = to_cursor.length();
        let highlight_direction = to_cursor.normalize_or(HIGHLIGHT_FALLBACK);

        let mut events = Vec::with_capacity(3);
        let mut new_velocity = velocity;
        let mut new_position = position;

        // State selection — priority order is policy, first match wins.
        let state = if is_focus_on {
            CompanionState::Focus
        } else if is_idle {
            CompanionState::Sleep
        } else if cursor_dist <= self.config.poke_inner_radius
            && self.poke_cooldown_remaining <= 0.0
        {
            events.push(Event::Poke);

            if self.time_since_last_poke <= self.config.double_poke_window
                && self.double_poke_cooldown_remaining <= 0.0
            {
                events.push(Event::DoublePoke);
                self.double_poke_cooldown_remaining = self.config.double_poke_cooldown;
            }

            self.time_since_last_poke = 0.0;
            self.poke_cooldown_remaining = self.config.poke_cooldown;

            // Replacement, not an additive impulse: every poke bounces away
            // at the same speed no matter what the orb was doing.
            let away = (position - cursor).normalize_or(BOUNCE_FALLBACK);
            new_velocity = away * self.config.bounce_impulse;

            CompanionState::Bounce
        } else if cursor_dist <= self.config.attract_radius {
            CompanionState::Curious
        } else {
            CompanionState::IdlePerch
        };

        match state {
            CompanionState::Curious => {
                (new_position, new_velocity) = spring_step(
                    position,
                    new_velocity,
                    cursor,
                    self.config.spring_frequency,
                    self.config.damping_ratio,
                    dt,
                );
            }
            CompanionState::Bounce => {
                new_velocity = apply_damping(new_velocity, self.config.bounce_damping, dt);
                new_position = position + new_velocity * dt;
            }
            CompanionState::IdlePerch => {
                new_velocity = apply_damping(new_velocity, self.config.idle_damping, dt);
                new_position = position + new_velocity * dt;
            }
            CompanionState::Focus => {
                new_velocity = apply_damping(new_velocity, self.config.focus_damping, dt);
                new_position = position + new_velocity * dt;
            }
            CompanionState::Sleep => {
                new_velocity = apply_damping(new_velocity, self.config.sleep_damping, dt);
                new_position = position + new_velocity * dt;
            }
        }

        new_velocity = new_velocity.clamp_length_max(self.config.max_speed);

        let speed = new_velocity.length();
        let intensity = (speed / self.config.max_speed).min(1.0);
        let squash_x = 1.0 + intensity * self.config.max_stretch;
        let squash_y = 1.0 - intensity * self.config.max_squash;

        if state != self.last_state {
            events.push(Event::StateChanged {
                from: self.last_state,
                to: state,
            });
            self.last_state = state;
        }

        Output {
            position: new_position,
            velocity: new_velocity,
            state,
            events,
            squash_x,
            squash_y,
            highlight_direction,
        }
    }
}

/// One semi-implicit Euler step of a damped harmonic oscillator pulling
/// `position` toward `target`. Stable as long as dt stays small relative
/// to 1/omega, which holds at the configured tick rate.
fn spring_step(
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    frequency: f32,
    damping_ratio: f32,
    dt: f32,
) -> (Vec2, Vec2) {
    let omega = std::f32::consts::TAU * frequency;
    let x = position - target;
    let accel = velocity * (-2.0 * damping_ratio * omega) - x * (omega * omega);
    let velocity = velocity + accel * dt;
    let position = position + velocity * dt;
    (position, velocity)
}

/// Exponential velocity decay. Larger damping settles faster.
fn apply_damping(velocity: Vec2, damping: f32, dt: f32) -> Vec2 {
    velocity * (-damping * dt).exp()
}
