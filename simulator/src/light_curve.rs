//! Synthetic light curves with observing gaps.
//!
//! A [`LightCurveSimulator`] fixes the observing geometry (window, cadence,
//! noise level, limb darkening law, spacecraft orbit) once and then produces
//! light curves for any number of planetary systems. Each light curve combines
//! four model components,
//!
//! ```text
//! flux = transit + eclipse * (reflection + emission) + noise
//! ```
//!
//! where the eclipse envelope only suppresses the planet's own light. Samples
//! that fall inside the periodic observing gaps are then dropped.

use log::{debug, warn};
use ndarray::Array1;
use rand::Rng;
use serde::Serialize;

use lc_models::{
    emitted_flux, reflected_flux, EclipseMode, EclipseModel, LimbDarkeningLaw, TransitModel,
};

use crate::duty_cycle::{cheops_orbit, efficiency_mask};
use crate::error::SimulationError;
use crate::noise::{seeded_rng, WhiteNoise};
use crate::params::{PlanetSystemParameters, SimulatorConfig};
use crate::units::{Time, TimeExt};
use crate::window::ObservationWindow;

/// Noiseless model components over the full time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FluxComponents {
    /// Normalized stellar flux including the transit
    pub transit: Array1<f64>,
    /// Visible fraction of the planet disk (secondary eclipse envelope)
    pub eclipse: Array1<f64>,
    /// Reflected light relative to the star
    pub reflection: Array1<f64>,
    /// Thermal emission relative to the star
    pub emission: Array1<f64>,
}

impl FluxComponents {
    /// Combined noiseless flux: `transit + eclipse * (reflection + emission)`
    pub fn composite(&self) -> Array1<f64> {
        &self.transit + &(&self.eclipse * &(&self.reflection + &self.emission))
    }
}

/// Light curve samples that survived the observing gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Timestamps in days relative to the window center, ascending
    pub time: Array1<f64>,
    /// Relative flux at each timestamp
    pub flux: Array1<f64>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Light curve simulator for a fixed observing setup.
///
/// # Examples
///
/// ```rust
/// use clcsim::{LightCurveSimulator, PlanetSystemParameters};
///
/// // Three hour window, one minute exposures, 100 ppm noise
/// let simulator = LightCurveSimulator::new(3.0, 60.0, 1e-4).unwrap();
/// assert_eq!(simulator.window().sample_count(), 180);
///
/// let params = PlanetSystemParameters {
///     radius_ratio: 0.1,
///     zero_epoch: 0.0,
///     period: 2.5,
///     scaled_semi_major_axis: 8.0,
///     impact_parameter: 0.2,
///     eccentricity: 0.0,
///     argument_of_periastron: 0.0,
///     limb_darkening: vec![0.4, 0.25],
///     geometric_albedo: 0.1,
///     night_flux_ratio: 0.0,
///     day_flux_ratio: 0.001,
/// };
///
/// let light_curve = simulator.simulate_seeded(&params, 0.6, 0.0, Some(42)).unwrap();
/// assert!(light_curve.len() < 180);
/// assert_eq!(light_curve.time.len(), light_curve.flux.len());
/// ```
#[derive(Debug, Clone)]
pub struct LightCurveSimulator {
    window: ObservationWindow,
    noise: WhiteNoise,
    transit_model: TransitModel,
    eclipse_model: EclipseModel,
    orbit_period: Time,
}

impl LightCurveSimulator {
    /// Create a simulator using the quadratic limb darkening law.
    ///
    /// # Arguments
    /// * `window_width_hours` - Observing window duration in hours
    /// * `exposure_time_seconds` - Exposure cadence in seconds
    /// * `white_noise_sigma` - Per-exposure noise standard deviation
    pub fn new(
        window_width_hours: f64,
        exposure_time_seconds: f64,
        white_noise_sigma: f64,
    ) -> Result<Self, SimulationError> {
        Self::with_limb_darkening(
            window_width_hours,
            exposure_time_seconds,
            white_noise_sigma,
            LimbDarkeningLaw::Quadratic,
        )
    }

    /// Create a simulator with an explicit limb darkening law.
    ///
    /// The transit and eclipse models are bound to the time grid here, so
    /// every later call reuses the same grid.
    pub fn with_limb_darkening(
        window_width_hours: f64,
        exposure_time_seconds: f64,
        white_noise_sigma: f64,
        limb_darkening: LimbDarkeningLaw,
    ) -> Result<Self, SimulationError> {
        let window = ObservationWindow::new(window_width_hours, exposure_time_seconds)?;
        let noise = WhiteNoise::new(white_noise_sigma)?;

        let transit_model = TransitModel::new(limb_darkening, window.time_grid().clone());
        let eclipse_model = EclipseModel::new(window.time_grid().clone());

        debug!(
            "Light curve simulator: {} exposures of {:.1} s over {:.2} h, sigma={:.3e}, {} limb darkening",
            window.sample_count(),
            exposure_time_seconds,
            window_width_hours,
            white_noise_sigma,
            limb_darkening
        );

        Ok(Self {
            window,
            noise,
            transit_model,
            eclipse_model,
            orbit_period: cheops_orbit(),
        })
    }

    /// Create a simulator from a configuration record
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, SimulationError> {
        Self::with_limb_darkening(
            config.window_width_hours,
            config.exposure_time_seconds,
            config.white_noise_sigma,
            config.limb_darkening,
        )?
        .with_orbit_period(Time::from_minutes(config.spacecraft_orbit_minutes))
    }

    /// Replace the spacecraft orbital period used to place observing gaps.
    pub fn with_orbit_period(mut self, orbit_period: Time) -> Result<Self, SimulationError> {
        let minutes = orbit_period.as_minutes();
        if !(minutes.is_finite() && minutes > 0.0) {
            return Err(SimulationError::InvalidConfiguration(format!(
                "spacecraft orbital period must be positive, got {minutes} min"
            )));
        }
        self.orbit_period = orbit_period;
        Ok(self)
    }

    pub fn window(&self) -> &ObservationWindow {
        &self.window
    }

    pub fn white_noise_sigma(&self) -> f64 {
        self.noise.sigma()
    }

    pub fn limb_darkening(&self) -> LimbDarkeningLaw {
        self.transit_model.law()
    }

    pub fn orbit_period(&self) -> Time {
        self.orbit_period
    }

    /// Evaluate the noiseless model components over the full time grid.
    pub fn model_flux(
        &self,
        params: &PlanetSystemParameters,
    ) -> Result<FluxComponents, SimulationError> {
        let time = self.window.time_grid();
        let orbit = params.orbit();
        let area_ratio = params.area_ratio();

        let transit = self
            .transit_model
            .evaluate(params.radius_ratio, &params.limb_darkening, &orbit)?;
        let eclipse = self.eclipse_model.evaluate(
            params.radius_ratio,
            &orbit,
            EclipseMode::Multiplicative,
        );
        let reflection = reflected_flux(
            params.scaled_semi_major_axis,
            area_ratio,
            params.geometric_albedo,
            params.zero_epoch,
            params.period,
            time,
        );
        let emission = emitted_flux(
            area_ratio,
            params.night_flux_ratio,
            params.day_flux_ratio,
            params.zero_epoch,
            params.period,
            time,
        );

        Ok(FluxComponents {
            transit,
            eclipse,
            reflection,
            emission,
        })
    }

    /// Simulate one observed light curve.
    ///
    /// # Arguments
    /// * `params` - Planetary system to observe
    /// * `efficiency` - Fraction of each spacecraft orbit with usable data, in `[0, 1]`
    /// * `eff_phase` - Position of the observing gap as a fraction of the spacecraft orbit
    /// * `rng` - Random source for the white noise
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with the retained samples in ascending time order
    /// * `Err(SimulationError::InvalidParameter)` if `efficiency` is outside `[0, 1]`
    /// * `Err(SimulationError::Model)` if a flux model rejects the parameters
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        params: &PlanetSystemParameters,
        efficiency: f64,
        eff_phase: f64,
        rng: &mut R,
    ) -> Result<SimulationResult, SimulationError> {
        if !(0.0..=1.0).contains(&efficiency) {
            return Err(SimulationError::InvalidParameter(format!(
                "efficiency must be between 0 and 1, got {efficiency}"
            )));
        }

        let components = self.model_flux(params)?;
        let flux = components.composite() + self.noise.sample(self.window.sample_count(), rng);

        let time = self.window.time_grid();
        let mask = efficiency_mask(time, self.orbit_period, efficiency, eff_phase);
        let (kept_time, kept_flux): (Vec<f64>, Vec<f64>) = time
            .iter()
            .zip(flux.iter())
            .zip(&mask)
            .filter(|&(_, &keep)| keep)
            .map(|((&t, &f), _)| (t, f))
            .unzip();

        if kept_time.is_empty() {
            warn!("Observing efficiency {efficiency} leaves no samples in the window");
        }
        debug!(
            "Simulated light curve: k={}, kept {}/{} samples (efficiency={efficiency}, phase={eff_phase})",
            params.radius_ratio,
            kept_time.len(),
            time.len()
        );

        Ok(SimulationResult {
            time: Array1::from(kept_time),
            flux: Array1::from(kept_flux),
        })
    }

    /// Simulate with an internally created RNG.
    ///
    /// Passing a seed makes the result reproducible; `None` draws a fresh seed.
    pub fn simulate_seeded(
        &self,
        params: &PlanetSystemParameters,
        efficiency: f64,
        eff_phase: f64,
        rng_seed: Option<u64>,
    ) -> Result<SimulationResult, SimulationError> {
        let mut rng = seeded_rng(rng_seed);
        self.simulate(params, efficiency, eff_phase, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_PI_2;

    fn flat_star() -> PlanetSystemParameters {
        PlanetSystemParameters {
            radius_ratio: 0.0,
            zero_epoch: 0.0,
            period: 3.0,
            scaled_semi_major_axis: 10.0,
            impact_parameter: 0.0,
            eccentricity: 0.0,
            argument_of_periastron: FRAC_PI_2,
            limb_darkening: vec![0.4, 0.25],
            geometric_albedo: 0.0,
            night_flux_ratio: 0.0,
            day_flux_ratio: 0.0,
        }
    }

    fn transiting_planet() -> PlanetSystemParameters {
        PlanetSystemParameters {
            radius_ratio: 0.1,
            geometric_albedo: 0.3,
            night_flux_ratio: 0.0005,
            day_flux_ratio: 0.004,
            ..flat_star()
        }
    }

    #[test]
    fn test_construction() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 1e-4).unwrap();
        assert_eq!(simulator.window().sample_count(), 180);
        assert_eq!(simulator.limb_darkening(), LimbDarkeningLaw::Quadratic);
        assert_eq!(simulator.white_noise_sigma(), 1e-4);
        assert_relative_eq!(simulator.orbit_period().as_minutes(), 99.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_construction() {
        assert!(matches!(
            LightCurveSimulator::new(0.0, 60.0, 1e-4),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LightCurveSimulator::new(3.0, -1.0, 1e-4),
            Err(SimulationError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            LightCurveSimulator::new(3.0, 60.0, -1e-4),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_orbit_period_override() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 0.0)
            .unwrap()
            .with_orbit_period(Time::from_minutes(98.0))
            .unwrap();
        assert_relative_eq!(simulator.orbit_period().as_minutes(), 98.0, epsilon = 1e-12);

        let result = LightCurveSimulator::new(3.0, 60.0, 0.0)
            .unwrap()
            .with_orbit_period(Time::from_minutes(0.0));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_flat_baseline() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 0.0).unwrap();
        let result = simulator
            .simulate_seeded(&flat_star(), 1.0, 0.0, Some(3))
            .unwrap();
        assert_eq!(result.len(), 180);
        for &f in result.flux.iter() {
            assert_abs_diff_eq!(f, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_composite_applies_eclipse_to_planet_light_only() {
        let components = FluxComponents {
            transit: Array1::from(vec![0.99, 1.0]),
            eclipse: Array1::from(vec![1.0, 0.0]),
            reflection: Array1::from(vec![1e-4, 1e-4]),
            emission: Array1::from(vec![2e-4, 2e-4]),
        };
        let flux = components.composite();
        assert_relative_eq!(flux[0], 0.9903, epsilon = 1e-12);
        assert_relative_eq!(flux[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transit_visible_in_window() {
        let simulator = LightCurveSimulator::new(4.0, 60.0, 0.0).unwrap();
        let components = simulator.model_flux(&transiting_planet()).unwrap();
        let n = components.transit.len();

        // Window is centered on mid-transit
        assert!(components.transit[n / 2] < 0.99);
        // Planet is in front of the star, so nothing is eclipsed
        assert!(components.eclipse.iter().all(|&v| v == 1.0));
        // Night side faces the observer at transit
        assert!(components.reflection[n / 2] < 1e-9);
        assert_relative_eq!(
            components.emission[n / 2],
            0.01 * 0.0005,
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_invalid_efficiency_leaves_simulator_usable() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 1e-4).unwrap();
        let params = transiting_planet();
        for &efficiency in &[1.5, -0.1, f64::NAN] {
            assert!(matches!(
                simulator.simulate_seeded(&params, efficiency, 0.0, Some(1)),
                Err(SimulationError::InvalidParameter(_))
            ));
        }
        assert!(simulator.simulate_seeded(&params, 0.8, 0.0, Some(1)).is_ok());
    }

    #[test]
    fn test_limb_darkening_mismatch_propagates() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 1e-4).unwrap();
        let params = PlanetSystemParameters {
            limb_darkening: vec![0.3],
            ..transiting_planet()
        };
        assert!(matches!(
            simulator.simulate_seeded(&params, 1.0, 0.0, Some(1)),
            Err(SimulationError::Model(_))
        ));
    }

    #[test]
    fn test_zero_efficiency_returns_empty() {
        let simulator = LightCurveSimulator::new(3.0, 60.0, 1e-4).unwrap();
        let result = simulator
            .simulate_seeded(&transiting_planet(), 0.0, 0.2, Some(5))
            .unwrap();
        assert!(result.is_empty());
        assert!(result.flux.is_empty());
    }
}
