//! # Deck Design CLI
//!
//! Terminal front-end for the metal deck design engine. Prompts for the
//! span, loading, and span condition, runs the full construction-stage
//! check suite on a typical 0.9 mm trapezoidal deck, and prints the
//! summary table plus the JSON result for downstream tooling.

use std::io::{self, BufRead, Write};

use deck_core::checks::{design_deck, DeckDesignInput};
use deck_core::geometry::DeckGeometry;
use deck_core::loads::{ConstructionLoads, DesignMethod, SpanCondition};
use deck_core::material::DeckMaterial;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_span_condition() -> SpanCondition {
    print!("Span condition (1=simple, 2=two-span, 3=three-span) [1]: ");
    if io::stdout().flush().is_err() {
        return SpanCondition::Simple;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return SpanCondition::Simple;
    }

    match input.trim() {
        "2" => SpanCondition::TwoSpan,
        "3" => SpanCondition::ThreeSpan,
        _ => SpanCondition::Simple,
    }
}

fn main() {
    println!("Metal Deck Design - Construction Stage Checker");
    println!("==============================================");
    println!();

    let span_mm = prompt_f64("Enter deck span (mm) [2400]: ", 2400.0);
    let w_uniform = prompt_f64("Enter uniform construction load (kN/m²) [2.5]: ", 2.5);
    let condition = prompt_span_condition();

    // Typical 50.8 mm trapezoidal deck, 0.9 mm grade-33 steel
    let geometry = DeckGeometry::new(50.8, 114.0, 38.0, 152.4, 0.9, 80.0);
    let material = DeckMaterial::default();

    println!();
    println!(
        "Checking {:.1} mm deep x {:.2} mm thick deck, {} ...",
        geometry.hr,
        geometry.t,
        material.name
    );
    println!();

    let input = DeckDesignInput::new(
        geometry,
        material,
        span_mm,
        ConstructionLoads::new(w_uniform),
    )
    .with_span_condition(condition)
    .with_method(DesignMethod::Lrfd);

    match design_deck(&input) {
        Ok(summary) => {
            println!("{}", summary.format_table());

            if let Some(governing) = summary.governing() {
                println!();
                println!(
                    "Governing check: {} (D/C = {:.3}, {})",
                    governing.check,
                    governing.ratio,
                    governing.code_ref
                );
            }

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&summary) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
