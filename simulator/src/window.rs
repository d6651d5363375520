//! Observation window and exposure time grid.

use ndarray::Array1;

use crate::error::SimulationError;
use crate::units::{Time, TimeExt};

/// Time sampling of a single observing window.
///
/// The window is centered on zero (the reference epoch of the simulated
/// light curve) and sampled once per exposure. Timestamps are in days.
///
/// # Invariants
/// - `sample_count >= 1` and `time_grid.len() == sample_count`
/// - `time_grid` is strictly increasing and symmetric about zero
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationWindow {
    window_width: Time,
    exposure_time: Time,
    sample_count: usize,
    time_grid: Array1<f64>,
}

impl ObservationWindow {
    /// Build the time grid for a window of `window_width_hours` sampled every
    /// `exposure_time_seconds`.
    ///
    /// # Arguments
    /// * `window_width_hours` - Total window duration in hours, must be positive
    /// * `exposure_time_seconds` - Exposure cadence in seconds, must be positive
    ///
    /// # Returns
    /// * `Ok(ObservationWindow)` with `ceil(width / exposure)` samples
    /// * `Err(SimulationError::InvalidConfiguration)` for non-positive or
    ///   non-finite durations, or if the window holds no sample
    pub fn new(window_width_hours: f64, exposure_time_seconds: f64) -> Result<Self, SimulationError> {
        if !(window_width_hours.is_finite() && window_width_hours > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "window width must be a positive number of hours, got {window_width_hours}"
            )));
        }
        if !(exposure_time_seconds.is_finite() && exposure_time_seconds > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "exposure time must be a positive number of seconds, got {exposure_time_seconds}"
            )));
        }

        let window_width = Time::from_hours(window_width_hours);
        let exposure_time = Time::from_seconds(exposure_time_seconds);

        let exposures = (window_width.as_seconds() / exposure_time.as_seconds()).ceil();
        if !(exposures >= 1.0 && exposures <= usize::MAX as f64) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "window of {window_width_hours} h with {exposure_time_seconds} s exposures \
                 yields {exposures} samples"
            )));
        }
        let sample_count = exposures as usize;

        let half_width = window_width.as_days() / 2.0;
        let time_grid = if sample_count == 1 {
            Array1::zeros(1)
        } else {
            Array1::linspace(-half_width, half_width, sample_count)
        };

        Ok(Self {
            window_width,
            exposure_time,
            sample_count,
            time_grid,
        })
    }

    pub fn window_width(&self) -> Time {
        self.window_width
    }

    pub fn exposure_time(&self) -> Time {
        self.exposure_time
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Sample timestamps in days relative to the window center
    pub fn time_grid(&self) -> &Array1<f64> {
        &self.time_grid
    }
}
