//! # Limit-State Checks
//!
//! The deck design check engine: flexure (±), shear, web crippling in four
//! loading configurations, combined bending + crippling, and deflection.
//! Each check is a pure function returning a [`DesignCheckResult`]; a ratio
//! above 1.0 is a normal, expected outcome - not an error. Errors are
//! reserved for inputs that prevent a check from being computed at all.
//!
//! The orchestrator [`design::design_deck`] runs the full ordered pipeline
//! and aggregates a [`DeckDesignSummary`].

pub mod combined;
pub mod deflection;
pub mod design;
pub mod flexure;
pub mod shear;
pub mod web_crippling;

use serde::{Deserialize, Serialize};

pub use combined::check_combined_bending_crippling;
pub use deflection::check_deflection;
pub use design::{design_deck, DeckDesignInput};
pub use flexure::check_flexural_strength;
pub use shear::check_shear_strength;
pub use web_crippling::{check_web_crippling, LoadingCondition, SupportCondition};

/// AISI S100-16 / SDI C-2017 section references for traceability.
pub mod aisi_ref {
    // Flexure
    /// Flexural strength based on effective section modulus
    pub const FLEXURE: &str = "AISI S100-16 Section F3.1";
    /// Nominal flexural strength Mn = Se Fy
    pub const FLEXURE_EQ: &str = "Eq. F3.1-1";

    // Shear
    /// Shear strength of webs without holes
    pub const SHEAR: &str = "AISI S100-16 Section G2";
    /// Shear yield regime
    pub const SHEAR_YIELD_EQ: &str = "Eq. G2.1-2";
    /// Inelastic shear buckling regime
    pub const SHEAR_INELASTIC_EQ: &str = "Eq. G2.1-3";
    /// Elastic shear buckling regime
    pub const SHEAR_ELASTIC_EQ: &str = "Eq. G2.1-4";

    // Web crippling
    /// Web crippling strength of webs without holes
    pub const WEB_CRIPPLING: &str = "AISI S100-16 Section G5";
    /// Nominal web crippling strength
    pub const WEB_CRIPPLING_EQ: &str = "Eq. G5-1";

    // Combined bending and web crippling
    /// Combined bending and web crippling
    pub const COMBINED: &str = "AISI S100-16 Section G6";
    /// Interior loading interaction
    pub const COMBINED_INTERIOR_EQ: &str = "Eq. G6-1";
    /// End reaction interaction
    pub const COMBINED_END_EQ: &str = "Eq. G6-2";

    // Deflection
    /// Construction-stage deflection limits
    pub const DEFLECTION: &str = "SDI C-2017 Section 2.4";

    // Effective width
    /// Effective width of uniformly compressed stiffened elements
    pub const EFFECTIVE_WIDTH: &str = "AISI S100-16 Appendix 1, Section 1.1";
}

/// Identifier for each limit-state check, in the engine's stable reporting
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckId {
    PositiveMoment,
    NegativeMoment,
    Shear,
    WebCripplingEof,
    WebCripplingIof,
    WebCripplingEtf,
    WebCripplingItf,
    CombinedBendingCrippling,
    Deflection,
}

impl CheckId {
    /// All checks in the stable reporting order guaranteed to consumers
    pub const ALL: [CheckId; 9] = [
        CheckId::PositiveMoment,
        CheckId::NegativeMoment,
        CheckId::Shear,
        CheckId::WebCripplingEof,
        CheckId::WebCripplingIof,
        CheckId::WebCripplingEtf,
        CheckId::WebCripplingItf,
        CheckId::CombinedBendingCrippling,
        CheckId::Deflection,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckId::PositiveMoment => "Flexure (+M)",
            CheckId::NegativeMoment => "Flexure (-M)",
            CheckId::Shear => "Shear",
            CheckId::WebCripplingEof => "Web Crippling (EOF)",
            CheckId::WebCripplingIof => "Web Crippling (IOF)",
            CheckId::WebCripplingEtf => "Web Crippling (ETF)",
            CheckId::WebCripplingItf => "Web Crippling (ITF)",
            CheckId::CombinedBendingCrippling => "Combined Bending & Crippling",
            CheckId::Deflection => "Deflection",
        }
    }

    pub fn is_web_crippling(&self) -> bool {
        matches!(
            self,
            CheckId::WebCripplingEof
                | CheckId::WebCripplingIof
                | CheckId::WebCripplingEtf
                | CheckId::WebCripplingItf
        )
    }

    pub fn is_flexure(&self) -> bool {
        matches!(self, CheckId::PositiveMoment | CheckId::NegativeMoment)
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Result of a single limit-state check.
///
/// `passes` means `ratio <= 1.0`. A failing check is a normal result; the
/// engine never raises on it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "check": "PositiveMoment",
///   "demand": 2.88,
///   "capacity": 3.12,
///   "ratio": 0.923,
///   "passes": true,
///   "equation": "Eq. F3.1-1",
///   "code_ref": "AISI S100-16 Section F3.1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCheckResult {
    /// Which limit state this result belongs to
    pub check: CheckId,

    /// Demand (units depend on the check: kN-m/m, kN/web, mm, ...)
    pub demand: f64,

    /// Design (factored or allowable) capacity in the same units
    pub capacity: f64,

    /// Demand / capacity; infinite when capacity is zero
    pub ratio: f64,

    /// `ratio <= 1.0`
    pub passes: bool,

    /// Governing equation tag for traceability
    pub equation: String,

    /// Code section reference
    pub code_ref: String,
}

impl DesignCheckResult {
    /// Build a result, deriving the ratio and pass flag.
    pub fn new(
        check: CheckId,
        demand: f64,
        capacity: f64,
        equation: impl Into<String>,
        code_ref: impl Into<String>,
    ) -> Self {
        let ratio = if capacity > 0.0 {
            demand / capacity
        } else {
            f64::INFINITY
        };
        DesignCheckResult {
            check,
            demand,
            capacity,
            ratio,
            passes: ratio <= 1.0,
            equation: equation.into(),
            code_ref: code_ref.into(),
        }
    }
}

/// A check the engine could not compute, with the reason it was omitted.
///
/// Omission is distinct from failure: a failed check ran and reported
/// `ratio > 1`; an omitted check never ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmittedCheck {
    pub check: CheckId,
    pub reason: String,
}

/// Aggregate result of a full design run.
///
/// `results` is in the engine's stable order (flexure +, flexure -, shear,
/// EOF/IOF/ETF/ITF crippling, combined, deflection) so report rendering is
/// reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDesignSummary {
    /// Computed checks in stable order
    pub results: Vec<DesignCheckResult>,

    /// Checks that could not be computed, with reasons
    pub omitted: Vec<OmittedCheck>,

    /// Non-fatal warnings (e.g. effective-width iteration not converged)
    pub warnings: Vec<String>,

    /// True when every computed check passes
    pub all_pass: bool,
}

impl DeckDesignSummary {
    /// Look up a computed check by id
    pub fn get(&self, check: CheckId) -> Option<&DesignCheckResult> {
        self.results.iter().find(|r| r.check == check)
    }

    /// The computed check with the highest demand/capacity ratio
    pub fn governing(&self) -> Option<&DesignCheckResult> {
        self.results
            .iter()
            .max_by(|a, b| a.ratio.partial_cmp(&b.ratio).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Formatted summary table for console output.
    pub fn format_table(&self) -> String {
        let mut lines = Vec::new();
        lines.push("=".repeat(72));
        lines.push("METAL DECK DESIGN SUMMARY".to_string());
        lines.push("Per AISI S100-16 and SDI C-2017".to_string());
        lines.push("=".repeat(72));
        lines.push(format!(
            "{:<30} {:>10} {:>10} {:>8} {:>8}",
            "Check", "Demand", "Capacity", "D/C", "Status"
        ));
        lines.push("-".repeat(72));
        for result in &self.results {
            lines.push(format!(
                "{:<30} {:>10.3} {:>10.3} {:>8.3} {:>8}",
                result.check.display_name(),
                result.demand,
                result.capacity,
                result.ratio,
                if result.passes { "PASS" } else { "FAIL" }
            ));
        }
        for omitted in &self.omitted {
            lines.push(format!(
                "{:<30} {:>38} (omitted: {})",
                omitted.check.display_name(),
                "-",
                omitted.reason
            ));
        }
        lines.push("-".repeat(72));
        for warning in &self.warnings {
            lines.push(format!("WARNING: {warning}"));
        }
        lines.push(format!(
            "Overall: {}",
            if self.all_pass {
                "ALL CHECKS PASS"
            } else {
                "DESIGN NOT ADEQUATE"
            }
        ));
        lines.push("=".repeat(72));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_and_pass_derivation() {
        let r = DesignCheckResult::new(CheckId::Shear, 5.0, 10.0, "Eq. G2.1-2", aisi_ref::SHEAR);
        assert!((r.ratio - 0.5).abs() < 1e-12);
        assert!(r.passes);

        let r = DesignCheckResult::new(CheckId::Shear, 11.0, 10.0, "Eq. G2.1-2", aisi_ref::SHEAR);
        assert!(!r.passes);
    }

    #[test]
    fn test_zero_capacity_is_infinite_ratio() {
        let r = DesignCheckResult::new(CheckId::Deflection, 5.0, 0.0, "", aisi_ref::DEFLECTION);
        assert!(r.ratio.is_infinite());
        assert!(!r.passes);
    }

    #[test]
    fn test_check_order_is_stable() {
        // The documented reporting order must not drift
        assert_eq!(CheckId::ALL[0], CheckId::PositiveMoment);
        assert_eq!(CheckId::ALL[2], CheckId::Shear);
        assert_eq!(CheckId::ALL[3], CheckId::WebCripplingEof);
        assert_eq!(CheckId::ALL[6], CheckId::WebCripplingItf);
        assert_eq!(CheckId::ALL[8], CheckId::Deflection);
    }

    #[test]
    fn test_result_serialization() {
        let r = DesignCheckResult::new(
            CheckId::PositiveMoment,
            2.88,
            3.12,
            aisi_ref::FLEXURE_EQ,
            aisi_ref::FLEXURE,
        );
        let json = serde_json::to_string(&r).unwrap();
        let roundtrip: DesignCheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, roundtrip);
    }
}
