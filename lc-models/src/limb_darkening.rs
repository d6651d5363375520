//! Stellar limb darkening laws.
//!
//! Each law gives the specific intensity of the stellar disk as a function of
//! `μ = cos θ = sqrt(1 - r²)`, normalized to 1 at disk center. Coefficients are
//! passed as a slice whose length must match the law.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Parameterized limb darkening law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimbDarkeningLaw {
    /// Flat disk, no coefficients
    Uniform,
    /// `1 - u (1 - μ)`
    Linear,
    /// `1 - u1 (1 - μ) - u2 (1 - μ)²`
    #[default]
    Quadratic,
    /// `1 - c (1 - μ) - d (1 - √μ)`
    #[serde(alias = "square-root")]
    SquareRoot,
    /// `1 - c (1 - μ^α)`, coefficients `[c, α]`
    #[serde(alias = "power-2")]
    Power2,
    /// Four-parameter law `1 - Σ cₙ (1 - μ^(n/2))`
    Nonlinear,
}

impl LimbDarkeningLaw {
    /// Name used in configuration and error messages
    pub fn name(&self) -> &'static str {
        match self {
            LimbDarkeningLaw::Uniform => "uniform",
            LimbDarkeningLaw::Linear => "linear",
            LimbDarkeningLaw::Quadratic => "quadratic",
            LimbDarkeningLaw::SquareRoot => "squareroot",
            LimbDarkeningLaw::Power2 => "power2",
            LimbDarkeningLaw::Nonlinear => "nonlinear",
        }
    }

    /// Number of coefficients the law takes
    pub fn coefficient_count(&self) -> usize {
        match self {
            LimbDarkeningLaw::Uniform => 0,
            LimbDarkeningLaw::Linear => 1,
            LimbDarkeningLaw::Quadratic
            | LimbDarkeningLaw::SquareRoot
            | LimbDarkeningLaw::Power2 => 2,
            LimbDarkeningLaw::Nonlinear => 4,
        }
    }

    /// Check a coefficient slice against the law
    pub fn validate(&self, coefficients: &[f64]) -> Result<(), ModelError> {
        let expected = self.coefficient_count();
        if coefficients.len() != expected {
            return Err(ModelError::CoefficientCount {
                law: self.name(),
                expected,
                got: coefficients.len(),
            });
        }
        Ok(())
    }

    /// Specific intensity at `μ`, relative to disk center.
    ///
    /// The caller is expected to have validated the coefficient count.
    pub fn intensity(&self, mu: f64, coefficients: &[f64]) -> f64 {
        let mu = mu.clamp(0.0, 1.0);
        match self {
            LimbDarkeningLaw::Uniform => 1.0,
            LimbDarkeningLaw::Linear => 1.0 - coefficients[0] * (1.0 - mu),
            LimbDarkeningLaw::Quadratic => {
                let x = 1.0 - mu;
                1.0 - coefficients[0] * x - coefficients[1] * x * x
            }
            LimbDarkeningLaw::SquareRoot => {
                1.0 - coefficients[0] * (1.0 - mu) - coefficients[1] * (1.0 - mu.sqrt())
            }
            LimbDarkeningLaw::Power2 => 1.0 - coefficients[0] * (1.0 - mu.powf(coefficients[1])),
            LimbDarkeningLaw::Nonlinear => {
                1.0 - coefficients
                    .iter()
                    .enumerate()
                    .map(|(n, c)| c * (1.0 - mu.powf((n + 1) as f64 / 2.0)))
                    .sum::<f64>()
            }
        }
    }

    /// Intensity at projected radius `r` on the unit stellar disk
    pub fn intensity_at_radius(&self, r: f64, coefficients: &[f64]) -> f64 {
        let mu = (1.0 - r * r).max(0.0).sqrt();
        self.intensity(mu, coefficients)
    }
}

impl fmt::Display for LimbDarkeningLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LimbDarkeningLaw {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(LimbDarkeningLaw::Uniform),
            "linear" => Ok(LimbDarkeningLaw::Linear),
            "quadratic" => Ok(LimbDarkeningLaw::Quadratic),
            "squareroot" | "square-root" | "sqrt" => Ok(LimbDarkeningLaw::SquareRoot),
            "power2" | "power-2" => Ok(LimbDarkeningLaw::Power2),
            "nonlinear" | "claret" => Ok(LimbDarkeningLaw::Nonlinear),
            _ => Err(ModelError::UnknownLaw(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL_LAWS: [LimbDarkeningLaw; 6] = [
        LimbDarkeningLaw::Uniform,
        LimbDarkeningLaw::Linear,
        LimbDarkeningLaw::Quadratic,
        LimbDarkeningLaw::SquareRoot,
        LimbDarkeningLaw::Power2,
        LimbDarkeningLaw::Nonlinear,
    ];

    #[test]
    fn test_center_intensity_is_one() {
        let coefficients = [0.3, 0.2, 0.1, 0.05];
        for law in ALL_LAWS {
            let c = &coefficients[..law.coefficient_count()];
            assert_relative_eq!(law.intensity(1.0, c), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quadratic_limb_value() {
        let law = LimbDarkeningLaw::Quadratic;
        assert_relative_eq!(law.intensity(0.0, &[0.4, 0.25]), 0.35, epsilon = 1e-12);
        assert_relative_eq!(law.intensity_at_radius(1.0, &[0.4, 0.25]), 0.35, epsilon = 1e-12);
    }

    #[test]
    fn test_power2_limb_value() {
        let law = LimbDarkeningLaw::Power2;
        assert_relative_eq!(law.intensity(0.0, &[0.6, 0.5]), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_coefficient_validation() {
        assert!(LimbDarkeningLaw::Quadratic.validate(&[0.1, 0.2]).is_ok());
        assert!(LimbDarkeningLaw::Uniform.validate(&[]).is_ok());

        let err = LimbDarkeningLaw::Quadratic.validate(&[0.1]).unwrap_err();
        assert_eq!(
            err,
            ModelError::CoefficientCount {
                law: "quadratic",
                expected: 2,
                got: 1
            }
        );
        assert!(LimbDarkeningLaw::Nonlinear.validate(&[0.1, 0.2]).is_err());
    }

    #[test]
    fn test_parse_names() {
        for law in ALL_LAWS {
            assert_eq!(law.name().parse::<LimbDarkeningLaw>().unwrap(), law);
        }
        assert_eq!(
            " Quadratic ".parse::<LimbDarkeningLaw>().unwrap(),
            LimbDarkeningLaw::Quadratic
        );
        assert!(matches!(
            "cubic".parse::<LimbDarkeningLaw>(),
            Err(ModelError::UnknownLaw(_))
        ));
    }

    #[test]
    fn test_default_is_quadratic() {
        assert_eq!(LimbDarkeningLaw::default(), LimbDarkeningLaw::Quadratic);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LimbDarkeningLaw::SquareRoot).unwrap();
        assert_eq!(json, "\"squareroot\"");
        let law: LimbDarkeningLaw = serde_json::from_str("\"power2\"").unwrap();
        assert_eq!(law, LimbDarkeningLaw::Power2);
    }
}
