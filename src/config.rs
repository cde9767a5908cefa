/// All tunables for the companion in one place. Construct with
/// `CompanionConfig::default()` and override fields as needed; the defaults
/// are the shipped tuning.
#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Orb diameter in pixels.
    pub ball_diameter: f32,

    /// Cursor inside this radius counts as a poke.
    pub poke_inner_radius: f32,
    /// Outer poke ring (reserved for the renderer's hover highlight).
    pub poke_outer_radius: f32,
    /// Cursor inside this radius makes the orb curious.
    pub attract_radius: f32,

    /// Spring frequency (Hz) for the curious chase.
    pub spring_frequency: f32,
    /// Spring damping ratio — 1.0 is critically damped.
    pub damping_ratio: f32,
    /// Hard cap on speed in pixels/second.
    pub max_speed: f32,
    /// Speed imparted by a poke, pixels/second.
    pub bounce_impulse: f32,
    /// Velocity decay constants per state. Larger settles faster:
    /// bounce < idle < focus < sleep.
    pub bounce_damping: f32,
    pub idle_damping: f32,
    pub focus_damping: f32,
    pub sleep_damping: f32,

    /// Minimum seconds between accepted pokes.
    pub poke_cooldown: f32,
    /// Two pokes within this window count as a double-poke.
    pub double_poke_window: f32,
    /// Minimum seconds between accepted double-pokes.
    pub double_poke_cooldown: f32,

    /// Max horizontal stretch at full speed (squash_x = 1 + this).
    pub max_stretch: f32,
    /// Max vertical squash at full speed (squash_y = 1 - this).
    pub max_squash: f32,

    /// Simulation tick rate.
    pub tick_hz: f32,
    /// Minutes without qualifying mouse movement before the orb sleeps.
    pub idle_minutes: f32,
    /// Mouse must move at least this many pixels to count as activity.
    pub mouse_movement_threshold: f32,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            ball_diameter: 56.0,
            poke_inner_radius: 24.0,
            poke_outer_radius: 80.0,
            attract_radius: 140.0,
            spring_frequency: 6.0,
            damping_ratio: 1.0,
            max_speed: 900.0,
            bounce_impulse: 760.0,
            bounce_damping: 3.8,
            idle_damping: 5.5,
            focus_damping: 10.0,
            sleep_damping: 12.0,
            poke_cooldown: 0.35,
            double_poke_window: 0.5,
            double_poke_cooldown: 1.0,
            max_stretch: 0.18,
            max_squash: 0.14,
            tick_hz: 30.0,
            idle_minutes: 2.0,
            mouse_movement_threshold: 1.25,
        }
    }
}

impl CompanionConfig {
    pub fn ball_radius(&self) -> f32 {
        self.ball_diameter / 2.0
    }

    /// Seconds per simulation tick.
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_hz
    }

    pub fn idle_threshold_secs(&self) -> f32 {
        self.idle_minutes * 60.0
    }
}
