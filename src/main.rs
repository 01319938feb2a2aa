//! dealscope - runs the decision engines over a JSON request.
//!
//! Reads an assessment request (from a file path argument or stdin),
//! scores the opportunities, evaluates the scenarios, and prints the
//! full report as JSON on stdout.

use std::error::Error;
use std::io::Read;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dealscope::adapters::export::TableExporter;
use dealscope::application::{
    AssessOpportunitiesCommand, AssessOpportunitiesHandler, EvaluateScenariosCommand,
    EvaluateScenariosHandler, ScenarioEvaluation,
};
use dealscope::config::AppConfig;
use dealscope::domain::compatibility::CompatibilityResult;
use dealscope::domain::foundation::Money;
use dealscope::domain::profile::{EntityProfile, Opportunity};
use dealscope::domain::scenario::{IrrSettings, ScenarioEngine, ScenarioSet};
use dealscope::ports::{ExportService, ExportTable};

/// Everything one advisory run needs as input.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRequest {
    profile: EntityProfile,
    #[serde(default)]
    opportunities: Vec<Opportunity>,
    /// Defaults to the standard Best/Realistic/Worst set.
    scenarios: Option<ScenarioSet>,
    /// Scenario to center the sensitivity analysis on.
    #[serde(default)]
    reference_scenario: Option<String>,
}

/// The full report printed on stdout.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentReport {
    generated_at: chrono::DateTime<Utc>,
    compatibility: Vec<CompatibilityResult>,
    scenarios: ScenarioEvaluation,
    tables: ReportTables,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportTables {
    compatibility: ExportTable,
    scenarios: ExportTable,
    sensitivity: ExportTable,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    config.validate()?;

    let request = read_request()?;
    info!(
        opportunity_count = request.opportunities.len(),
        "starting assessment"
    );

    let compatibility = AssessOpportunitiesHandler::new().handle(AssessOpportunitiesCommand {
        profile: request.profile,
        opportunities: request.opportunities,
    });

    let engine_settings: IrrSettings = config.engine.irr_settings();
    let scenario_handler = EvaluateScenariosHandler::new(
        ScenarioEngine::new(engine_settings),
        Money::try_new(config.engine.baseline_revenue)?,
        config.engine.sensitivity_shift,
    );
    let scenarios = scenario_handler.handle(EvaluateScenariosCommand {
        scenarios: request.scenarios.unwrap_or_else(ScenarioSet::standard),
        reference: request.reference_scenario,
    });

    let exporter = TableExporter::new();
    let tables = ReportTables {
        compatibility: exporter.compatibility_table(&compatibility),
        scenarios: exporter.scenario_table(&scenarios.results),
        sensitivity: exporter.sensitivity_table(&scenarios.sensitivity),
    };

    let report = AssessmentReport {
        generated_at: Utc::now(),
        compatibility,
        scenarios,
        tables,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn read_request() -> Result<AssessmentRequest, Box<dyn Error>> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&raw)?)
}
