//! Deskorb simulation core.
//!
//! The orb is driven by a single pure-ish `step` function
//! ([`physics::PhysicsEngine::step`]) that the host calls at a fixed tick
//! rate with the current cursor position and activity flags. Everything
//! window- or render-shaped lives on the host side; this crate only produces
//! numbers (position, velocity, state, events, squash) for the host to draw.

pub mod config;
pub mod physics;
pub mod signal;
pub mod state;
