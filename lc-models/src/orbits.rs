//! Keplerian orbit geometry for transiting planets.
//!
//! All distances are in units of the stellar radius, times and periods share
//! one unit (days in practice) and angles are in radians. The observer sits on
//! the +z axis, so a planet with a positive line-of-sight coordinate is in
//! front of the star and a negative one is behind it.

use ndarray::Array1;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Convergence tolerance for the Kepler equation solver (radians)
const KEPLER_TOLERANCE: f64 = 1e-12;

/// Iteration cap for the Kepler equation solver
const KEPLER_MAX_ITERATIONS: usize = 50;

/// Orbital inclination from impact parameter, scaled semi-major axis,
/// eccentricity and argument of periastron.
///
/// Inverts `b = a cos(i) (1 - e²) / (1 + e sin(w))`. Combinations that put
/// the planet out of reach of the given impact parameter produce NaN.
///
/// # Arguments
/// * `b` - Impact parameter in stellar radii
/// * `a` - Semi-major axis in stellar radii
/// * `e` - Eccentricity
/// * `w` - Argument of periastron in radians
///
/// # Returns
/// Inclination in radians (π/2 for a central transit)
pub fn i_from_baew(b: f64, a: f64, e: f64, w: f64) -> f64 {
    let transit_distance = a * (1.0 - e * e) / (1.0 + e * w.sin());
    (b / transit_distance).acos()
}

/// Fold a time series over a period.
///
/// Each time is mapped onto the cycle `[-period/2, period/2)` measured from
/// `origin`, after shifting the cycle by `shift` periods. The result keeps the
/// units of `time`; divide by `period` to get fractional phase.
///
/// # Arguments
/// * `time` - Times to fold
/// * `period` - Folding period, same units as `time`
/// * `origin` - Reference time of phase zero
/// * `shift` - Phase shift in units of the period
pub fn fold(time: &Array1<f64>, period: f64, origin: f64, shift: f64) -> Array1<f64> {
    time.mapv(|t| {
        let cycle = ((t - origin) / period + shift + 0.5).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        let cycle = if cycle >= 1.0 { 0.0 } else { cycle };
        (cycle - 0.5) * period
    })
}

/// Solve Kepler's equation `M = E - e sin(E)` for the eccentric anomaly.
///
/// Uses Newton iteration starting from `M` (or `π` for highly eccentric
/// orbits where the plain start converges poorly).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly.rem_euclid(TAU);
    if e == 0.0 {
        return m;
    }

    let mut ea = if e < 0.8 { m } else { PI };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ea
}

/// True anomaly from eccentric anomaly
fn true_from_eccentric(ea: f64, e: f64) -> f64 {
    2.0 * ((1.0 + e).sqrt() * (ea / 2.0).sin()).atan2((1.0 - e).sqrt() * (ea / 2.0).cos())
}

/// Eccentric anomaly from true anomaly
fn eccentric_from_true(f: f64, e: f64) -> f64 {
    2.0 * ((1.0 - e).sqrt() * (f / 2.0).sin()).atan2((1.0 + e).sqrt() * (f / 2.0).cos())
}

/// Position of the planet as seen by the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    /// Projected star-planet center distance in stellar radii
    pub separation: f64,
    /// Coordinate along the line of sight, positive toward the observer
    pub line_of_sight: f64,
}

impl SkyPosition {
    /// True when the planet is between the star and the observer
    pub fn in_front(&self) -> bool {
        self.line_of_sight > 0.0
    }
}

/// Orbit of a planet around its host star.
///
/// Phase zero is the mid-transit time `t0`, which fixes the periastron
/// passage through the true anomaly at conjunction, `π/2 - w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Mid-transit time
    pub t0: f64,
    /// Orbital period
    pub period: f64,
    /// Semi-major axis in stellar radii
    pub a: f64,
    /// Inclination in radians
    pub i: f64,
    /// Eccentricity
    pub e: f64,
    /// Argument of periastron in radians
    pub w: f64,
}

impl Orbit {
    pub fn new(t0: f64, period: f64, a: f64, i: f64, e: f64, w: f64) -> Self {
        Self {
            t0,
            period,
            a,
            i,
            e,
            w,
        }
    }

    /// Mean anomaly at mid-transit
    fn transit_mean_anomaly(&self) -> f64 {
        let ea = eccentric_from_true(FRAC_PI_2 - self.w, self.e);
        ea - self.e * ea.sin()
    }

    /// True anomaly at time `t`
    pub fn true_anomaly(&self, t: f64) -> f64 {
        if self.e == 0.0 {
            return TAU * (t - self.t0) / self.period + FRAC_PI_2 - self.w;
        }
        let m = TAU * (t - self.t0) / self.period + self.transit_mean_anomaly();
        true_from_eccentric(solve_kepler(m, self.e), self.e)
    }

    /// Star-planet distance at true anomaly `f`, in stellar radii
    pub fn radius_at(&self, f: f64) -> f64 {
        self.a * (1.0 - self.e * self.e) / (1.0 + self.e * f.cos())
    }

    /// Sky position of the planet at time `t`
    pub fn sky_position(&self, t: f64) -> SkyPosition {
        let f = self.true_anomaly(t);
        let r = self.radius_at(f);
        let (sin_wf, cos_wf) = (self.w + f).sin_cos();
        let x = -r * cos_wf;
        let y = -r * sin_wf * self.i.cos();

        SkyPosition {
            separation: x.hypot(y),
            line_of_sight: r * sin_wf * self.i.sin(),
        }
    }
}
