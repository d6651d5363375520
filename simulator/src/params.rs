//! Planet and simulator parameter records.

use lc_models::{i_from_baew, LimbDarkeningLaw, Orbit};
use serde::{Deserialize, Serialize};

use crate::duty_cycle::CHEOPS_ORBIT_MINUTES;

/// Orbital and physical parameters of a planetary system.
///
/// Lengths are in stellar radii, times in days and angles in radians. Flux
/// ratios are planet to star surface brightness ratios in the observing band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSystemParameters {
    /// Planet to star radius ratio
    pub radius_ratio: f64,
    /// Mid-transit time in days
    pub zero_epoch: f64,
    /// Orbital period in days
    pub period: f64,
    /// Semi-major axis in stellar radii
    pub scaled_semi_major_axis: f64,
    /// Sky-projected star-planet distance at conjunction, in stellar radii
    pub impact_parameter: f64,
    pub eccentricity: f64,
    /// Argument of periastron in radians
    pub argument_of_periastron: f64,
    /// Coefficients for the simulator's limb darkening law
    pub limb_darkening: Vec<f64>,
    #[serde(default)]
    pub geometric_albedo: f64,
    /// Night-side surface brightness ratio
    #[serde(default)]
    pub night_flux_ratio: f64,
    /// Day-side surface brightness ratio
    #[serde(default)]
    pub day_flux_ratio: f64,
}

impl PlanetSystemParameters {
    /// Planet to star area ratio, `k²`
    pub fn area_ratio(&self) -> f64 {
        self.radius_ratio * self.radius_ratio
    }

    /// Orbital inclination in radians implied by the impact parameter
    pub fn inclination(&self) -> f64 {
        i_from_baew(
            self.impact_parameter,
            self.scaled_semi_major_axis,
            self.eccentricity,
            self.argument_of_periastron,
        )
    }

    /// Orbit geometry for the flux models
    pub fn orbit(&self) -> Orbit {
        Orbit::new(
            self.zero_epoch,
            self.period,
            self.scaled_semi_major_axis,
            self.inclination(),
            self.eccentricity,
            self.argument_of_periastron,
        )
    }
}

fn default_orbit_minutes() -> f64 {
    CHEOPS_ORBIT_MINUTES
}

/// Construction parameters for a [`crate::LightCurveSimulator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Observing window duration in hours
    pub window_width_hours: f64,
    /// Exposure cadence in seconds
    pub exposure_time_seconds: f64,
    /// Standard deviation of the per-exposure white noise, in relative flux
    pub white_noise_sigma: f64,
    #[serde(default)]
    pub limb_darkening: LimbDarkeningLaw,
    /// Spacecraft orbital period in minutes
    #[serde(default = "default_orbit_minutes")]
    pub spacecraft_orbit_minutes: f64,
}

impl SimulatorConfig {
    pub fn new(window_width_hours: f64, exposure_time_seconds: f64, white_noise_sigma: f64) -> Self {
        Self {
            window_width_hours,
            exposure_time_seconds,
            white_noise_sigma,
            limb_darkening: LimbDarkeningLaw::default(),
            spacecraft_orbit_minutes: CHEOPS_ORBIT_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn hot_jupiter() -> PlanetSystemParameters {
        PlanetSystemParameters {
            radius_ratio: 0.1,
            zero_epoch: 0.0,
            period: 2.2,
            scaled_semi_major_axis: 8.0,
            impact_parameter: 0.0,
            eccentricity: 0.0,
            argument_of_periastron: FRAC_PI_2,
            limb_darkening: vec![0.4, 0.25],
            geometric_albedo: 0.2,
            night_flux_ratio: 0.0,
            day_flux_ratio: 0.002,
        }
    }

    #[test]
    fn test_derived_geometry() {
        let params = hot_jupiter();
        assert_relative_eq!(params.area_ratio(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(params.inclination(), FRAC_PI_2, epsilon = 1e-12);

        let orbit = params.orbit();
        assert_eq!(orbit.period, 2.2);
        assert_eq!(orbit.a, 8.0);
    }

    #[test]
    fn test_parameters_from_json_defaults() {
        let json = r#"{
            "radius_ratio": 0.05,
            "zero_epoch": 0.01,
            "period": 4.0,
            "scaled_semi_major_axis": 12.0,
            "impact_parameter": 0.3,
            "eccentricity": 0.0,
            "argument_of_periastron": 0.0,
            "limb_darkening": [0.5, 0.1]
        }"#;
        let params: PlanetSystemParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.geometric_albedo, 0.0);
        assert_eq!(params.night_flux_ratio, 0.0);
        assert_eq!(params.day_flux_ratio, 0.0);
        assert_eq!(params.limb_darkening, vec![0.5, 0.1]);
    }

    #[test]
    fn test_config_defaults() {
        let config = SimulatorConfig::new(3.0, 60.0, 1e-4);
        assert_eq!(config.limb_darkening, LimbDarkeningLaw::Quadratic);
        assert_eq!(config.spacecraft_orbit_minutes, CHEOPS_ORBIT_MINUTES);

        let json = r#"{"window_width_hours": 3.0, "exposure_time_seconds": 60.0, "white_noise_sigma": 1e-4}"#;
        let parsed: SimulatorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = SimulatorConfig::new(6.0, 30.0, 2e-4);
        config.limb_darkening = LimbDarkeningLaw::Power2;
        config.spacecraft_orbit_minutes = 98.0;
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimulatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
