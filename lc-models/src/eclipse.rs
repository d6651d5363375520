//! Secondary eclipse model.
//!
//! The planet is treated as a uniformly bright disk. During secondary eclipse
//! the star hides part or all of it, which suppresses whatever flux the planet
//! contributes (reflected light and thermal emission alike).

use ndarray::Array1;
use std::f64::consts::PI;

use crate::geometry::circle_overlap_area;
use crate::orbits::Orbit;

/// Output convention for [`EclipseModel::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EclipseMode {
    /// Visible fraction of the planet disk, 1 out of eclipse and 0 at totality.
    /// Meant to multiply a separately modeled planet flux.
    Multiplicative,
    /// Normalized system flux `(1 + fr·visible) / (1 + fr)` for a planet to
    /// star flux ratio `fr`.
    Additive { flux_ratio: f64 },
}

/// Eclipse model bound to a fixed time grid.
#[derive(Debug, Clone)]
pub struct EclipseModel {
    time: Array1<f64>,
}

impl EclipseModel {
    pub fn new(time: Array1<f64>) -> Self {
        Self { time }
    }

    /// Evaluate the eclipse over the time grid.
    ///
    /// # Arguments
    /// * `k` - Planet to star radius ratio
    /// * `orbit` - Planet orbit
    /// * `mode` - Output convention
    pub fn evaluate(&self, k: f64, orbit: &Orbit, mode: EclipseMode) -> Array1<f64> {
        let visible = self.time.mapv(|t| visible_fraction(k, orbit, t));
        match mode {
            EclipseMode::Multiplicative => visible,
            EclipseMode::Additive { flux_ratio } => {
                visible.mapv(|v| (1.0 + flux_ratio * v) / (1.0 + flux_ratio))
            }
        }
    }
}

/// Fraction of the planet disk not hidden by the star at time `t`
fn visible_fraction(k: f64, orbit: &Orbit, t: f64) -> f64 {
    if k <= 0.0 {
        return 1.0;
    }
    let position = orbit.sky_position(t);
    if position.in_front() {
        return 1.0;
    }
    let hidden = circle_overlap_area(1.0, k, position.separation) / (PI * k * k);
    (1.0 - hidden).clamp(0.0, 1.0)
}
