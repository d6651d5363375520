//! lc-models - Flux models for exoplanet light curves
//!
//! This crate provides the astrophysical building blocks used by the light
//! curve simulator:
//!
//! - **Orbits** - Kepler solver, sky-projected geometry, inclination
//!   conversion and phase folding
//! - **Limb darkening** - Stellar intensity profiles for the common laws
//! - **Transit** - Limb-darkened primary transit flux
//! - **Eclipse** - Secondary eclipse of a uniform planet disk
//! - **Phase curves** - Lambertian reflection and day/night thermal emission
//!
//! # Example
//!
//! ```rust
//! use lc_models::{i_from_baew, LimbDarkeningLaw, Orbit, TransitModel};
//! use ndarray::Array1;
//!
//! # fn main() -> Result<(), lc_models::ModelError> {
//! let time = Array1::linspace(-0.1, 0.1, 200);
//! let model = TransitModel::new(LimbDarkeningLaw::Quadratic, time);
//! let orbit = Orbit::new(0.0, 3.0, 9.0, i_from_baew(0.2, 9.0, 0.0, 0.0), 0.0, 0.0);
//! let flux = model.evaluate(0.1, &[0.4, 0.25], &orbit)?;
//! assert_eq!(flux.len(), 200);
//! assert!(flux.iter().all(|&f| f <= 1.0));
//! # Ok(())
//! # }
//! ```

pub mod eclipse;
pub mod error;
pub mod geometry;
pub mod limb_darkening;
pub mod orbits;
pub mod phase_curve;
pub mod transit;

// Re-export commonly used types
pub use eclipse::{EclipseMode, EclipseModel};
pub use error::ModelError;
pub use geometry::circle_overlap_area;
pub use limb_darkening::LimbDarkeningLaw;
pub use orbits::{fold, i_from_baew, solve_kepler, Orbit, SkyPosition};
pub use phase_curve::{emitted_flux, lambert_phase_function, reflected_flux};
pub use transit::{TransitModel, SMALL_PLANET_LIMIT};
