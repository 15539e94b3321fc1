use crate::infra::build_assessment_service;
use cardioguard::assessment::{AssessmentRequest, ReportDocument, RiskAssessmentResult};
use cardioguard::config::AppConfig;
use cardioguard::error::AppError;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a JSON file with the questionnaire fields
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Emit the full assessment view as JSON instead of the report text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let request: AssessmentRequest = serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("failed to parse {}: {err}", args.input.display()),
        ))
    })?;

    let config = AppConfig::load()?;
    let service = build_assessment_service(&config.risk);
    let result = service.assess(request)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&result.view()).map_err(|err| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        println!("{rendered}");
    } else {
        render_report(&result);
    }

    Ok(())
}

/// Plain-text stand-in for the document exporter collaborator.
fn render_report(result: &RiskAssessmentResult) {
    let report: ReportDocument = result.report();

    println!("{}", report.title);
    println!(
        "Generated on: {}",
        report.generated_at.format("%B %d, %Y at %I:%M %p")
    );
    println!();
    println!("Executive Summary");
    println!("{}", report.executive_summary);
    println!();
    println!("Risk Analysis");
    println!(
        "Random Forest Model Prediction: {:.2}%",
        report.model_probabilities.primary * 100.0
    );
    println!(
        "Stacking Ensemble Model Prediction: {:.2}%",
        report.model_probabilities.secondary * 100.0
    );
    println!("Risk Classification: {}", report.tier_label);
    println!();
    println!("Patient Information");
    for (name, value) in &report.patient_fields {
        println!("{name}: {value}");
    }
    println!();
    println!("Key Recommendations");
    for digest in &report.top_recommendations {
        println!("{}:", digest.category_label);
        for item in &digest.items {
            println!("- {item}");
        }
    }
}
