//! Exoplanet light curve simulation for a low-Earth-orbit space telescope
//!
//! This crate produces synthetic photometric time series of transiting
//! planets as a CHEOPS-like telescope would deliver them: a limb-darkened
//! transit, secondary eclipse, reflected light and thermal emission phase
//! curves, white noise, and the periodic data gaps caused by the spacecraft
//! orbit. The flux models themselves live in the `lc-models` crate.

pub mod duty_cycle;
pub mod error;
pub mod light_curve;
pub mod noise;
pub mod params;
pub mod units;
pub mod window;

// Re-exports for easier access
pub use duty_cycle::{cheops_orbit, efficiency_mask, CHEOPS_ORBIT_MINUTES};
pub use error::SimulationError;
pub use lc_models::LimbDarkeningLaw;
pub use light_curve::{FluxComponents, LightCurveSimulator, SimulationResult};
pub use noise::WhiteNoise;
pub use params::{PlanetSystemParameters, SimulatorConfig};
pub use units::{Time, TimeExt};
pub use window::ObservationWindow;
