//! # Deck Material
//!
//! Material properties for cold-formed steel deck. Stresses are in MPa
//! (N/mm²). The default is ASTM A653 SS Grade 33, the most common deck
//! sheet material.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::material::DeckMaterial;
//!
//! let grade33 = DeckMaterial::default();
//! assert_eq!(grade33.fy, 230.0);
//!
//! let grade50 = DeckMaterial::grade_50();
//! assert!(grade50.fy > grade33.fy);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Standard modulus of elasticity for steel (MPa)
pub const STEEL_E_MPA: f64 = 200_000.0;

/// Standard Poisson's ratio for steel
pub const STEEL_NU: f64 = 0.30;

/// Cold-formed steel deck material properties.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fy": 230.0,
///   "fu": 310.0,
///   "e": 200000.0,
///   "nu": 0.3,
///   "name": "ASTM A653 SS Grade 33"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckMaterial {
    /// Yield strength (MPa)
    pub fy: f64,

    /// Ultimate tensile strength (MPa)
    pub fu: f64,

    /// Modulus of elasticity (MPa)
    #[serde(default = "default_e")]
    pub e: f64,

    /// Poisson's ratio
    #[serde(default = "default_nu")]
    pub nu: f64,

    /// Material designation for reports
    pub name: String,
}

fn default_e() -> f64 {
    STEEL_E_MPA
}

fn default_nu() -> f64 {
    STEEL_NU
}

impl Default for DeckMaterial {
    fn default() -> Self {
        DeckMaterial::grade_33()
    }
}

impl DeckMaterial {
    /// Create a material from yield strength alone; E and ν take steel
    /// defaults, Fu is estimated at 1.35 Fy.
    pub fn from_fy(fy: f64) -> Self {
        DeckMaterial {
            fy,
            fu: 1.35 * fy,
            e: STEEL_E_MPA,
            nu: STEEL_NU,
            name: format!("Fy = {fy} MPa"),
        }
    }

    /// ASTM A653 SS Grade 33 (Fy = 230 MPa) - typical deck sheet
    pub fn grade_33() -> Self {
        DeckMaterial {
            fy: 230.0,
            fu: 310.0,
            e: STEEL_E_MPA,
            nu: STEEL_NU,
            name: "ASTM A653 SS Grade 33".to_string(),
        }
    }

    /// ASTM A653 SS Grade 40 (Fy = 275 MPa)
    pub fn grade_40() -> Self {
        DeckMaterial {
            fy: 275.0,
            fu: 380.0,
            e: STEEL_E_MPA,
            nu: STEEL_NU,
            name: "ASTM A653 SS Grade 40".to_string(),
        }
    }

    /// ASTM A653 SS Grade 50 (Fy = 345 MPa)
    pub fn grade_50() -> Self {
        DeckMaterial {
            fy: 345.0,
            fu: 450.0,
            e: STEEL_E_MPA,
            nu: STEEL_NU,
            name: "ASTM A653 SS Grade 50".to_string(),
        }
    }

    /// Validate material invariants: `fy > 0`, `e > 0`.
    pub fn validate(&self) -> DeckResult<()> {
        if self.fy <= 0.0 {
            return Err(DeckError::invalid_input(
                "fy",
                self.fy.to_string(),
                "Yield strength must be positive",
            ));
        }
        if self.e <= 0.0 {
            return Err(DeckError::invalid_input(
                "e",
                self.e.to_string(),
                "Modulus of elasticity must be positive",
            ));
        }
        Ok(())
    }
}
