//! # Design Method, Span Configuration, and Construction Loads
//!
//! The design-method switch (factored-resistance LRFD vs allowable-stress
//! ASD) that every limit-state check honors uniformly, the span condition
//! with its moment/shear/deflection coefficients, and the construction-stage
//! load set.
//!
//! Units: loads in kN/m² (uniform) and kN (concentrated), spans in mm.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::loads::{ConstructionLoads, DesignMethod, Demands, SpanCondition};
//!
//! let loads = ConstructionLoads::new(2.5); // wet concrete + construction
//! let demands = Demands::compute(&loads, 2400.0, SpanCondition::Simple,
//!                                DesignMethod::Lrfd).unwrap();
//! // M = 1/8 x (1.6 x 2.5) x 2.4² = 2.88 kN-m/m
//! assert!((demands.mu_pos - 2.88).abs() < 0.01);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, DeckResult};

/// Design methodology selection.
///
/// Factored-resistance design (LRFD) multiplies nominal capacities by a
/// resistance factor φ; allowable-stress design (ASD) divides them by a
/// safety factor Ω. All checks honor this switch uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignMethod {
    /// Load and Resistance Factor Design - φ-factors on nominal capacities
    #[default]
    Lrfd,
    /// Allowable Stress Design - Ω-factors (divide) on nominal capacities
    Asd,
}

impl DesignMethod {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD (Load and Resistance Factor Design)",
            DesignMethod::Asd => "ASD (Allowable Stress Design)",
        }
    }

    /// Short abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DesignMethod::Lrfd => "LRFD",
            DesignMethod::Asd => "ASD",
        }
    }

    /// Construction live load factor applied to demands
    pub fn load_factor(&self) -> f64 {
        match self {
            DesignMethod::Lrfd => 1.6,
            DesignMethod::Asd => 1.0,
        }
    }

    /// Apply the method-appropriate factor to a nominal capacity:
    /// `φ × Rn` for LRFD, `Rn / Ω` for ASD.
    pub fn design_capacity(&self, nominal: f64, phi: f64, omega: f64) -> f64 {
        match self {
            DesignMethod::Lrfd => phi * nominal,
            DesignMethod::Asd => nominal / omega,
        }
    }
}

impl std::fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Span configuration of the deck during the construction stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpanCondition {
    /// Single simple span
    #[default]
    Simple,
    /// Two-span continuous
    TwoSpan,
    /// Three or more continuous spans
    ThreeSpan,
}

impl SpanCondition {
    pub const ALL: [SpanCondition; 3] = [
        SpanCondition::Simple,
        SpanCondition::TwoSpan,
        SpanCondition::ThreeSpan,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SpanCondition::Simple => "Simple span",
            SpanCondition::TwoSpan => "Two-span continuous",
            SpanCondition::ThreeSpan => "Three-span continuous",
        }
    }

    /// Positive moment coefficient in `M = coef x w x L²`
    pub fn moment_coefficient(&self) -> f64 {
        match self {
            SpanCondition::Simple => 1.0 / 8.0,
            SpanCondition::TwoSpan => 0.07,
            SpanCondition::ThreeSpan => 0.08,
        }
    }

    /// Negative (support) moment coefficient for continuous spans
    pub fn negative_moment_coefficient(&self) -> f64 {
        0.125
    }

    /// Shear / end-reaction coefficient in `V = coef x w x L`
    pub fn shear_coefficient(&self) -> f64 {
        match self {
            SpanCondition::Simple => 0.5,
            SpanCondition::TwoSpan => 0.625,
            SpanCondition::ThreeSpan => 0.60,
        }
    }

    /// Deflection coefficient in `Δ = coef x w x L⁴ / (E I)`
    pub fn deflection_coefficient(&self) -> f64 {
        match self {
            SpanCondition::Simple => 5.0 / 384.0,
            SpanCondition::TwoSpan => 1.0 / 185.0,
            SpanCondition::ThreeSpan => 1.0 / 145.0,
        }
    }

    /// Continuous spans develop negative moment over interior supports
    pub fn is_continuous(&self) -> bool {
        !matches!(self, SpanCondition::Simple)
    }
}

/// Construction-stage loading on the bare deck.
///
/// ## JSON Example
///
/// ```json
/// {
///   "w_uniform": 2.5,
///   "p_concentrated": 1.1,
///   "bearing_length": 50.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructionLoads {
    /// Uniform construction load, wet concrete plus live (kN/m²)
    pub w_uniform: f64,

    /// Concentrated construction load, worker plus equipment (kN)
    #[serde(default = "default_p_concentrated")]
    pub p_concentrated: f64,

    /// Bearing length at supports (mm)
    #[serde(default = "default_bearing_length")]
    pub bearing_length: f64,
}

fn default_p_concentrated() -> f64 {
    1.1
}

fn default_bearing_length() -> f64 {
    50.0
}

impl ConstructionLoads {
    /// Uniform load with the default 1.1 kN worker load and 50 mm bearing
    pub fn new(w_uniform: f64) -> Self {
        ConstructionLoads {
            w_uniform,
            p_concentrated: default_p_concentrated(),
            bearing_length: default_bearing_length(),
        }
    }

    pub fn with_concentrated(mut self, p_kn: f64) -> Self {
        self.p_concentrated = p_kn;
        self
    }

    pub fn with_bearing_length(mut self, n_mm: f64) -> Self {
        self.bearing_length = n_mm;
        self
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.w_uniform < 0.0 {
            return Err(DeckError::invalid_input(
                "w_uniform",
                self.w_uniform.to_string(),
                "Uniform load cannot be negative",
            ));
        }
        if self.p_concentrated < 0.0 {
            return Err(DeckError::invalid_input(
                "p_concentrated",
                self.p_concentrated.to_string(),
                "Concentrated load cannot be negative",
            ));
        }
        if self.bearing_length <= 0.0 {
            return Err(DeckError::invalid_input(
                "bearing_length",
                self.bearing_length.to_string(),
                "Bearing length must be positive",
            ));
        }
        Ok(())
    }
}

/// Factored demands per meter of deck width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Demands {
    /// Positive moment demand (kN-m/m)
    pub mu_pos: f64,

    /// Negative (support) moment demand for continuous spans (kN-m/m)
    pub mu_neg: Option<f64>,

    /// Shear demand (kN/m)
    pub vu: f64,

    /// End reaction (kN/m)
    pub end_reaction: f64,

    /// Factored concentrated load (kN)
    pub p_factored: f64,

    /// Factored uniform load used (kN/m² = kN/m per meter width)
    pub w_factored: f64,
}

impl Demands {
    /// Compute factored demands from the construction loads, span (mm),
    /// span condition, and design method.
    pub fn compute(
        loads: &ConstructionLoads,
        span_mm: f64,
        condition: SpanCondition,
        method: DesignMethod,
    ) -> DeckResult<Self> {
        loads.validate()?;
        if span_mm <= 0.0 {
            return Err(DeckError::invalid_input(
                "span_mm",
                span_mm.to_string(),
                "Span must be positive",
            ));
        }

        let w_factored = method.load_factor() * loads.w_uniform;
        let span_m = span_mm / 1000.0;

        let mu_pos = condition.moment_coefficient() * w_factored * span_m.powi(2);
        let mu_neg = if condition.is_continuous() {
            Some(condition.negative_moment_coefficient() * w_factored * span_m.powi(2))
        } else {
            None
        };
        let vu = condition.shear_coefficient() * w_factored * span_m;

        Ok(Demands {
            mu_pos,
            mu_neg,
            vu,
            end_reaction: vu,
            p_factored: method.load_factor() * loads.p_concentrated,
            w_factored,
        })
    }
}
