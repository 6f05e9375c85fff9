//! Fundamental geometric and simulation types.
//!
//! The world center is the origin; renderers apply their own screen offset.
//! Polar positions are (angle, radius) pairs around that center.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Wrap an angle into [0, 2π).
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Signed shortest rotation from `from` to `to`, in [-π, π).
pub fn angle_delta(from: f64, to: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    (to - from + PI).rem_euclid(TAU) - PI
}

/// Convert a polar position to Cartesian around the world center.
pub fn polar_to_cartesian(angle: f64, radius: f64) -> DVec2 {
    DVec2::new(angle.cos() * radius, angle.sin() * radius)
}

/// Squared distance between two points.
/// Collision checks compare against squared radii to avoid square roots.
pub fn dist_sq(a: DVec2, b: DVec2) -> f64 {
    (a - b).length_squared()
}
