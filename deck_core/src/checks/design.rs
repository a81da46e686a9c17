//! # Design Orchestrator
//!
//! Runs the full ordered check pipeline on one deck configuration:
//! effective section properties for each bending orientation, factored
//! demands from the span and loads, then every limit-state check in the
//! engine's stable reporting order. A check that cannot be computed is
//! recorded as omitted with its reason; the remaining checks still run.

use serde::{Deserialize, Serialize};

use crate::checks::combined::check_combined_bending_crippling;
use crate::checks::deflection::{check_deflection, DEFAULT_DEFLECTION_LIMIT_RATIO};
use crate::checks::flexure::check_flexural_strength;
use crate::checks::shear::check_shear_strength;
use crate::checks::web_crippling::{check_web_crippling, LoadingCondition, SupportCondition};
use crate::checks::{CheckId, DeckDesignSummary, DesignCheckResult, OmittedCheck};
use crate::effective_section::{
    effective_properties, ConvergenceConfig, EffectiveSection, Orientation,
};
use crate::errors::{DeckError, DeckResult};
use crate::geometry::DeckGeometry;
use crate::loads::{ConstructionLoads, Demands, DesignMethod, SpanCondition};
use crate::material::DeckMaterial;

/// Complete input set for a construction-stage design run.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": {
///     "hr": 50.8, "wr_top": 114.0, "wr_bot": 38.0,
///     "pitch": 152.4, "t": 0.9, "theta": 80.0
///   },
///   "material": { "fy": 230.0, "fu": 310.0, "name": "ASTM A653 SS Grade 33" },
///   "span_mm": 2400.0,
///   "span_condition": "Simple",
///   "loads": { "w_uniform": 2.5 },
///   "method": "Lrfd"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDesignInput {
    pub geometry: DeckGeometry,

    pub material: DeckMaterial,

    /// Span length (mm)
    pub span_mm: f64,

    #[serde(default)]
    pub span_condition: SpanCondition,

    pub loads: ConstructionLoads,

    #[serde(default)]
    pub method: DesignMethod,

    #[serde(default)]
    pub convergence: ConvergenceConfig,

    /// Deflection limit denominator (span / ratio)
    #[serde(default = "default_deflection_limit")]
    pub deflection_limit_ratio: f64,
}

fn default_deflection_limit() -> f64 {
    DEFAULT_DEFLECTION_LIMIT_RATIO
}

impl DeckDesignInput {
    /// Input with default span condition, method, convergence, and
    /// deflection limit.
    pub fn new(
        geometry: DeckGeometry,
        material: DeckMaterial,
        span_mm: f64,
        loads: ConstructionLoads,
    ) -> Self {
        DeckDesignInput {
            geometry,
            material,
            span_mm,
            span_condition: SpanCondition::default(),
            loads,
            method: DesignMethod::default(),
            convergence: ConvergenceConfig::default(),
            deflection_limit_ratio: default_deflection_limit(),
        }
    }

    pub fn with_span_condition(mut self, condition: SpanCondition) -> Self {
        self.span_condition = condition;
        self
    }

    pub fn with_method(mut self, method: DesignMethod) -> Self {
        self.method = method;
        self
    }

    /// Coefficient row for web crippling: continuous decks use the
    /// fastened multi-span table.
    pub fn support_condition(&self) -> SupportCondition {
        if self.span_condition.is_continuous() {
            SupportCondition::MultiSpan
        } else {
            SupportCondition::SingleSpan
        }
    }

    pub fn validate(&self) -> DeckResult<()> {
        self.geometry.validate()?;
        self.material.validate()?;
        self.loads.validate()?;
        if self.span_mm <= 0.0 || !self.span_mm.is_finite() {
            return Err(DeckError::invalid_input(
                "span_mm",
                self.span_mm.to_string(),
                "Span must be positive and finite",
            ));
        }
        if self.deflection_limit_ratio <= 0.0 {
            return Err(DeckError::invalid_input(
                "deflection_limit_ratio",
                self.deflection_limit_ratio.to_string(),
                "Limit ratio must be positive",
            ));
        }
        Ok(())
    }
}

/// Tracks results and omissions while preserving the stable check order.
struct CheckCollector {
    results: Vec<DesignCheckResult>,
    omitted: Vec<OmittedCheck>,
    warnings: Vec<String>,
}

impl CheckCollector {
    fn new() -> Self {
        CheckCollector {
            results: Vec::new(),
            omitted: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn record(&mut self, check: CheckId, outcome: DeckResult<DesignCheckResult>) {
        match outcome {
            Ok(result) => self.results.push(result),
            Err(error) => self.omitted.push(OmittedCheck {
                check,
                reason: error.to_string(),
            }),
        }
    }

    fn omit(&mut self, check: CheckId, reason: impl Into<String>) {
        self.omitted.push(OmittedCheck {
            check,
            reason: reason.into(),
        });
    }

    fn finish(self) -> DeckDesignSummary {
        let all_pass = self.results.iter().all(|r| r.passes);
        DeckDesignSummary {
            results: self.results,
            omitted: self.omitted,
            warnings: self.warnings,
            all_pass,
        }
    }
}

fn effective_for(
    input: &DeckDesignInput,
    orientation: Orientation,
    warnings: &mut Vec<String>,
) -> DeckResult<EffectiveSection> {
    let eff = effective_properties(
        &input.geometry,
        &input.material,
        orientation,
        &input.convergence,
    )?;
    if !eff.convergence.is_converged() {
        warnings.push(format!(
            "Effective-width iteration for {} did not converge in {} iteration(s); \
             using last iterate",
            orientation.display_name(),
            eff.convergence.iterations(),
        ));
    }
    Ok(eff)
}

/// Run the complete construction-stage design check suite.
///
/// Returns a [`DeckDesignSummary`] with one entry per check in the stable
/// reporting order. Individual check failures (ratio > 1) and omissions
/// never abort the run; only invalid top-level input does.
pub fn design_deck(input: &DeckDesignInput) -> DeckResult<DeckDesignSummary> {
    input.validate()?;

    let mut collector = CheckCollector::new();
    let geom = &input.geometry;
    let mat = &input.material;
    let method = input.method;
    let support = input.support_condition();

    let demands = Demands::compute(&input.loads, input.span_mm, input.span_condition, method)?;

    let eff_pos = effective_for(input, Orientation::PositiveMoment, &mut collector.warnings)?;

    // Per-web bearing and shear demands
    let webs_per_m = geom.webs_per_meter();
    let vu_per_web = demands.vu / webs_per_m;
    let reaction_per_web = demands.end_reaction / webs_per_m;
    let p_per_web = demands.p_factored / webs_per_m;

    let h_flat = geom.web_flat_width();
    let radius = geom.corner_radius();
    let bearing = input.loads.bearing_length;

    // Flexure, positive
    collector.record(
        CheckId::PositiveMoment,
        check_flexural_strength(
            eff_pos.se,
            mat.fy,
            demands.mu_pos,
            Orientation::PositiveMoment,
            method,
        ),
    );

    // Flexure, negative (continuous spans only)
    match demands.mu_neg {
        Some(mu_neg) => {
            let outcome =
                effective_for(input, Orientation::NegativeMoment, &mut collector.warnings)
                    .and_then(|eff_neg| {
                        check_flexural_strength(
                            eff_neg.se,
                            mat.fy,
                            mu_neg,
                            Orientation::NegativeMoment,
                            method,
                        )
                    });
            collector.record(CheckId::NegativeMoment, outcome);
        }
        None => collector.omit(
            CheckId::NegativeMoment,
            "Simple span develops no negative moment",
        ),
    }

    // Shear, per web
    collector.record(
        CheckId::Shear,
        check_shear_strength(h_flat, geom.t, mat.fy, mat.e, vu_per_web, method),
    );

    // Web crippling in all four configurations. End configurations carry
    // the end reaction; interior configurations the concentrated load.
    for loading in LoadingCondition::ALL {
        let pu = if loading.is_end() {
            reaction_per_web
        } else {
            p_per_web
        };
        collector.record(
            loading.check_id(),
            check_web_crippling(
                geom.t, h_flat, bearing, radius, geom.theta, mat.fy, pu, loading, support, method,
            ),
        );
    }

    // Combined bending + crippling at the interior one-flange condition.
    // The moment is evaluated at the concentrated load: Mu + P L / 4.
    let m_at_load = demands.mu_pos + demands.p_factored * input.span_mm / 4000.0;
    let combined = check_flexural_strength(
        eff_pos.se,
        mat.fy,
        m_at_load,
        Orientation::PositiveMoment,
        method,
    )
    .and_then(|flexure_at_load| {
        check_combined_bending_crippling(
            Some(&flexure_at_load),
            collector
                .results
                .iter()
                .find(|r| r.check == CheckId::WebCripplingIof),
            LoadingCondition::Iof,
        )
    });
    collector.record(CheckId::CombinedBendingCrippling, combined);

    // Deflection under unfactored load with the SDI average inertia
    collector.record(
        CheckId::Deflection,
        check_deflection(
            eff_pos.i_deflection,
            mat.e,
            input.span_mm,
            input.loads.w_uniform,
            input.deflection_limit_ratio,
            input.span_condition,
        ),
    );

    Ok(collector.finish())
}
