//! Primary transit light curve model.
//!
//! The stellar disk is split into concentric annuli of constant intensity and
//! the flux blocked by the planet is summed annulus by annulus from the exact
//! circle overlap areas. This works for any limb darkening law without the
//! special-function machinery of the analytic models.

use log::trace;
use ndarray::Array1;
use std::f64::consts::PI;

use crate::error::ModelError;
use crate::geometry::circle_overlap_area;
use crate::limb_darkening::LimbDarkeningLaw;
use crate::orbits::Orbit;

/// Radius ratio below which the planet is treated as a point occulter
pub const SMALL_PLANET_LIMIT: f64 = 0.001;

/// Default number of annuli used to integrate the stellar disk
pub const DEFAULT_ANNULI: usize = 500;

/// Stellar disk discretized into annuli for a given law and coefficient set.
struct DiskProfile {
    /// Annulus edges from 0 to 1
    edges: Vec<f64>,
    /// Intensity of each annulus, evaluated at its mid radius
    intensities: Vec<f64>,
    /// Total disk flux
    total: f64,
}

impl DiskProfile {
    fn new(law: LimbDarkeningLaw, coefficients: &[f64], annuli: usize) -> Self {
        let edges: Vec<f64> = (0..=annuli).map(|n| n as f64 / annuli as f64).collect();
        let intensities: Vec<f64> = edges
            .windows(2)
            .map(|w| law.intensity_at_radius(0.5 * (w[0] + w[1]), coefficients))
            .collect();
        let total = edges
            .windows(2)
            .zip(&intensities)
            .map(|(w, i)| i * PI * (w[1] * w[1] - w[0] * w[0]))
            .sum();

        Self {
            edges,
            intensities,
            total,
        }
    }

    /// Fraction of the stellar flux hidden by a disk of radius `k` at distance `z`
    fn occulted_fraction(
        &self,
        law: LimbDarkeningLaw,
        coefficients: &[f64],
        k: f64,
        z: f64,
    ) -> f64 {
        if k <= 0.0 || z >= 1.0 + k {
            return 0.0;
        }

        if k < SMALL_PLANET_LIMIT {
            let intensity = law.intensity_at_radius(z.min(1.0), coefficients);
            return circle_overlap_area(1.0, k, z) * intensity / self.total;
        }

        let mut blocked = 0.0;
        let mut inner_area = 0.0;
        for (edge, intensity) in self.edges[1..].iter().zip(&self.intensities) {
            let outer_area = circle_overlap_area(*edge, k, z);
            blocked += intensity * (outer_area - inner_area);
            inner_area = outer_area;
        }
        blocked / self.total
    }
}

/// Transit model bound to a fixed time grid and limb darkening law.
#[derive(Debug, Clone)]
pub struct TransitModel {
    law: LimbDarkeningLaw,
    time: Array1<f64>,
    annuli: usize,
}

impl TransitModel {
    /// Create a model evaluating on `time` with the given limb darkening law.
    pub fn new(law: LimbDarkeningLaw, time: Array1<f64>) -> Self {
        Self {
            law,
            time,
            annuli: DEFAULT_ANNULI,
        }
    }

    /// Override the number of annuli used for the disk integration
    pub fn with_annuli(mut self, annuli: usize) -> Self {
        self.annuli = annuli.max(1);
        self
    }

    pub fn law(&self) -> LimbDarkeningLaw {
        self.law
    }

    /// Evaluate the normalized transit flux over the time grid.
    ///
    /// # Arguments
    /// * `k` - Planet to star radius ratio
    /// * `ldc` - Limb darkening coefficients for the bound law
    /// * `orbit` - Planet orbit
    ///
    /// # Returns
    /// Flux relative to the unocculted star (1.0 out of transit)
    pub fn evaluate(
        &self,
        k: f64,
        ldc: &[f64],
        orbit: &Orbit,
    ) -> Result<Array1<f64>, ModelError> {
        self.law.validate(ldc)?;
        trace!(
            "Transit model: k={k}, law={}, {} samples",
            self.law,
            self.time.len()
        );

        if k <= 0.0 {
            return Ok(Array1::ones(self.time.len()));
        }

        let profile = DiskProfile::new(self.law, ldc, self.annuli);
        Ok(self.time.mapv(|t| {
            let position = orbit.sky_position(t);
            if !position.in_front() {
                return 1.0;
            }
            1.0 - profile.occulted_fraction(self.law, ldc, k, position.separation)
        }))
    }
}
