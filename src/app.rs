use glam::Vec2;
use instant::Instant;

use deskorb::config::CompanionConfig;
use deskorb::physics::{Event, PhysicsEngine};
use deskorb::signal::SignalEngine;

/// Virtual screen the headless demo runs on.
const SCREEN_W: f32 = 1920.0;
const SCREEN_H: f32 = 1080.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log tick stats (seconds).
const STATS_LOG_INTERVAL: f64 = 5.0;
/// Scripted cursor travel speed (px/s).
const CURSOR_SPEED: f32 = 420.0;
/// Chance per arrival that the scripted cursor heads for the orb next.
const ORB_VISIT_CHANCE: f32 = 0.3;
/// Chance per arrival that the cursor parks for a few seconds.
const REST_CHANCE: f32 = 0.2;
/// Rest duration range (seconds).
const REST_MIN: f32 = 1.0;
const REST_MAX: f32 = 4.0;
/// Demo focus schedule: on for a stretch out of every cycle.
const FOCUS_CYCLE_SECS: f32 = 45.0;
const FOCUS_ON_SECS: f32 = 8.0;

// ---------------------------------------------------------------------------
// Host application state
// ---------------------------------------------------------------------------

/// Anchor corner the companion starts from (and would return to on reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPreset {
    BottomRight,
    BottomLeft,
}

impl AnchorPreset {
    pub fn label(self) -> &'static str {
        match self {
            AnchorPreset::BottomRight => "Bottom-right",
            AnchorPreset::BottomLeft => "Bottom-left",
        }
    }

    /// Home position for this corner, inset by `margin` from the edges.
    pub fn position(self, screen_w: f32, screen_h: f32, margin: f32) -> Vec2 {
        match self {
            AnchorPreset::BottomRight => Vec2::new(screen_w - margin, screen_h - margin),
            AnchorPreset::BottomLeft => Vec2::new(margin, screen_h - margin),
        }
    }
}

/// App-wide toggles the host owns. The core never reads these directly;
/// it gets `is_focus_on` passed in as a plain flag each tick.
pub struct HostState {
    pub is_focus_on: bool,
    pub is_visible: bool,
    pub anchor: AnchorPreset,
}

impl HostState {
    pub fn new() -> Self {
        Self {
            is_focus_on: false,
            is_visible: true,
            anchor: AnchorPreset::BottomRight,
        }
    }
}

// ---------------------------------------------------------------------------
// Tick stats
// ---------------------------------------------------------------------------

struct TickStats {
    tick_count: u64,
    last_log_time: Instant,
    ticks_since_log: u32,
    pokes: u32,
    double_pokes: u32,
    transitions: u32,
}

impl TickStats {
    fn new() -> Self {
        Self {
            tick_count: 0,
            last_log_time: Instant::now(),
            ticks_since_log: 0,
            pokes: 0,
            double_pokes: 0,
            transitions: 0,
        }
    }

    fn record_tick(&mut self, events: &[Event]) {
        self.tick_count += 1;
        self.ticks_since_log += 1;
        for event in events {
            match event {
                Event::Poke => self.pokes += 1,
                Event::DoublePoke => self.double_pokes += 1,
                Event::StateChanged { .. } => self.transitions += 1,
            }
        }

        let elapsed = self.last_log_time.elapsed().as_secs_f64();
        if elapsed >= STATS_LOG_INTERVAL {
            let rate = self.ticks_since_log as f64 / elapsed;
            log::info!(
                "ticks: {:.1}/s | pokes: {} | doubles: {} | transitions: {} | total ticks: {}",
                rate,
                self.pokes,
                self.double_pokes,
                self.transitions,
                self.tick_count,
            );
            self.last_log_time = Instant::now();
            self.ticks_since_log = 0;
            self.pokes = 0;
            self.double_pokes = 0;
            self.transitions = 0;
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted cursor
// ---------------------------------------------------------------------------

/// Stand-in for the OS mouse: wanders between random waypoints, sometimes
/// parks, and sometimes makes a beeline for the orb so pokes happen.
struct DemoCursor {
    pos: Vec2,
    waypoint: Vec2,
    rest_timer: f32,
    rng: fastrand::Rng,
}

impl DemoCursor {
    fn new(pos: Vec2, rng: fastrand::Rng) -> Self {
        Self {
            pos,
            waypoint: pos,
            rest_timer: 0.0,
            rng,
        }
    }

    fn update(&mut self, dt: f32, orb_pos: Vec2) -> Vec2 {
        if self.rest_timer > 0.0 {
            self.rest_timer -= dt;
            return self.pos;
        }

        let to_waypoint = self.waypoint - self.pos;
        let dist = to_waypoint.length();
        let step = CURSOR_SPEED * dt;

        if dist <= step {
            self.pos = self.waypoint;
            self.pick_next(orb_pos);
        } else {
            self.pos += to_waypoint / dist * step;
        }
        self.pos
    }

    fn pick_next(&mut self, orb_pos: Vec2) {
        let roll = self.rng.f32();
        if roll < REST_CHANCE {
            self.rest_timer = REST_MIN + self.rng.f32() * (REST_MAX - REST_MIN);
        } else if roll < REST_CHANCE + ORB_VISIT_CHANCE {
            self.waypoint = orb_pos;
        } else {
            self.waypoint = Vec2::new(
                self.rng.f32() * SCREEN_W,
                self.rng.f32() * SCREEN_H,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Host loop
// ---------------------------------------------------------------------------

/// Headless host loop: owns timing, polls the signal engine, steps the
/// simulation at the configured tick rate, and plays the renderer's role
/// by clamping the orb to the visible area and logging what it would draw.
pub fn run() {
    let config = CompanionConfig::default();
    let mut host = HostState::new();
    // Stands in for the menu's position submenu.
    if std::env::var("DESKORB_ANCHOR").as_deref() == Ok("bottom-left") {
        host.anchor = AnchorPreset::BottomLeft;
    }
    let mut stats = TickStats::new();

    let margin = config.ball_radius();
    let mut position = host.anchor.position(SCREEN_W, SCREEN_H, margin);
    let mut velocity = Vec2::ZERO;

    let rng = fastrand::Rng::new();
    let mut cursor = DemoCursor::new(Vec2::new(SCREEN_W / 2.0, SCREEN_H / 2.0), rng);
    let mut signal = SignalEngine::new(&config, cursor.pos);
    let mut engine = PhysicsEngine::new(config.clone());

    log::info!(
        "Demo host: {}x{} virtual screen, {} Hz, anchored {}",
        SCREEN_W,
        SCREEN_H,
        config.tick_hz,
        host.anchor.label(),
    );

    let tick_interval = config.tick_interval() as f64;
    let mut last_time = Instant::now();
    let mut accumulator = 0.0;
    let mut focus_clock = 0.0f32;

    loop {
        let now = Instant::now();
        accumulator += now.duration_since(last_time).as_secs_f64();
        last_time = now;

        if accumulator > MAX_ACCUMULATOR {
            accumulator = MAX_ACCUMULATOR;
        }

        while accumulator >= tick_interval {
            let dt = tick_interval as f32;

            // Demo focus schedule — stands in for the menu toggle.
            focus_clock = (focus_clock + dt) % FOCUS_CYCLE_SECS;
            host.is_focus_on = focus_clock < FOCUS_ON_SECS;

            let cursor_pos = cursor.update(dt, position);
            signal.poll(cursor_pos, dt);

            let out = engine.step(
                position,
                velocity,
                signal.mouse_pos(),
                host.is_focus_on,
                signal.is_idle(),
                dt,
            );

            for event in &out.events {
                match event {
                    Event::Poke => log::info!("poke!"),
                    Event::DoublePoke => log::info!("double poke!"),
                    Event::StateChanged { from, to } => {
                        log::info!("{} -> {}", from.label(), to.label())
                    }
                }
            }

            // The window mover's job: keep the orb inside the visible area.
            position = out.position.clamp(
                Vec2::splat(margin),
                Vec2::new(SCREEN_W - margin, SCREEN_H - margin),
            );
            velocity = out.velocity;

            if host.is_visible {
                log::trace!(
                    "{} pos=({:.1},{:.1}) squash=({:.2},{:.2})",
                    out.state.label(),
                    position.x,
                    position.y,
                    out.squash_x,
                    out.squash_y,
                );
            }

            stats.record_tick(&out.events);
            accumulator -= tick_interval;
        }

        std::thread::sleep(std::time::Duration::from_secs_f64(tick_interval / 2.0));
    }
}
