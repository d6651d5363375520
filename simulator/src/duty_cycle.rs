//! Observing efficiency of a low-Earth-orbit telescope.
//!
//! Once per spacecraft orbit the target is lost for a while (Earth
//! occultation, South Atlantic Anomaly crossings). The gap recurs with the
//! orbital period, so it is located by folding the light curve timestamps on
//! that period.

use ndarray::Array1;

use lc_models::fold;

use crate::units::{Time, TimeExt};

/// Spacecraft orbital period in minutes.
///
/// Earlier calibrations used 98 minutes; treat this as a mission calibration
/// value and override it per simulator when a measured period is available.
pub const CHEOPS_ORBIT_MINUTES: f64 = 99.0;

/// Default spacecraft orbital period
pub fn cheops_orbit() -> Time {
    Time::from_minutes(CHEOPS_ORBIT_MINUTES)
}

/// Compute which samples survive the periodic observing gaps.
///
/// Timestamps are folded on the spacecraft orbit with a phase shift of
/// `-eff_phase`, giving a phase in `[-0.5, 0.5)`. A gap of fractional width
/// `1 - efficiency` is centered on phase zero; samples inside it are dropped.
///
/// # Arguments
/// * `time` - Sample timestamps in days
/// * `orbit_period` - Spacecraft orbital period
/// * `efficiency` - Fraction of each orbit with usable data, in `[0, 1]`
/// * `eff_phase` - Position of the gap center as a fraction of the orbit
///
/// # Returns
/// One flag per sample, `true` where the sample is kept
pub fn efficiency_mask(
    time: &Array1<f64>,
    orbit_period: Time,
    efficiency: f64,
    eff_phase: f64,
) -> Vec<bool> {
    if efficiency >= 1.0 {
        return vec![true; time.len()];
    }

    let period = orbit_period.as_days();
    let gap_half_width = 0.5 * (1.0 - efficiency);
    fold(time, period, 0.0, -eff_phase)
        .iter()
        .map(|t| (t / period).abs() > gap_half_width)
        .collect()
}
