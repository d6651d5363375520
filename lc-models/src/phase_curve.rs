//! Planetary phase curves: reflected starlight and thermal emission.
//!
//! Both components assume a circular orbit for the phase angle. Phase zero
//! is mid-transit, where the observer sees the planet's night side, and phase
//! one half is mid-eclipse, where the day side faces the observer. Fluxes are
//! relative to the stellar flux.

use ndarray::Array1;
use std::f64::consts::{PI, TAU};

/// Orbital phase angle at time `t`, in radians from mid-transit
fn orbital_angle(t: f64, t0: f64, p: f64) -> f64 {
    TAU * (t - t0) / p
}

/// Lambert sphere phase function.
///
/// `alpha` is the star-planet-observer angle: 0 at full phase, π at new phase.
pub fn lambert_phase_function(alpha: f64) -> f64 {
    let alpha = alpha.abs().min(PI);
    (alpha.sin() + (PI - alpha) * alpha.cos()) / PI
}

/// Reflected-light phase curve of a Lambertian planet.
///
/// # Arguments
/// * `a` - Semi-major axis in stellar radii
/// * `area_ratio` - Planet to star area ratio, `k²`
/// * `albedo` - Geometric albedo
/// * `t0` - Mid-transit time
/// * `p` - Orbital period
/// * `time` - Evaluation times
///
/// # Returns
/// Reflected flux relative to the star, peaking at `albedo * area_ratio / a²`
/// at mid-eclipse
pub fn reflected_flux(
    a: f64,
    area_ratio: f64,
    albedo: f64,
    t0: f64,
    p: f64,
    time: &Array1<f64>,
) -> Array1<f64> {
    let amplitude = albedo * area_ratio / (a * a);
    time.mapv(|t| {
        // Star-planet-observer angle is π at transit, 0 at eclipse
        let alpha = (-orbital_angle(t, t0, p).cos()).clamp(-1.0, 1.0).acos();
        amplitude * lambert_phase_function(alpha)
    })
}

/// Thermal emission phase curve interpolating between night and day sides.
///
/// # Arguments
/// * `area_ratio` - Planet to star area ratio, `k²`
/// * `night_flux_ratio` - Night-side to stellar surface brightness ratio
/// * `day_flux_ratio` - Day-side to stellar surface brightness ratio
/// * `t0` - Mid-transit time
/// * `p` - Orbital period
/// * `time` - Evaluation times
pub fn emitted_flux(
    area_ratio: f64,
    night_flux_ratio: f64,
    day_flux_ratio: f64,
    t0: f64,
    p: f64,
    time: &Array1<f64>,
) -> Array1<f64> {
    time.mapv(|t| {
        let day_fraction = 0.5 * (1.0 - orbital_angle(t, t0, p).cos());
        area_ratio * (night_flux_ratio + (day_flux_ratio - night_flux_ratio) * day_fraction)
    })
}
