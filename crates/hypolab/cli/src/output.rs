//! Output formatting utilities

use crate::error::CliResult;
use crate::orchestrator::{IterationOutcome, IterationStatus, SweepReport};
use colored::*;
use hypolab_candidates::CandidateRegistry;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
}

#[derive(Tabled, Serialize)]
struct OutcomeRow {
    #[tabled(rename = "Task")]
    task: String,
    #[tabled(rename = "Iteration")]
    iteration: u32,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Details")]
    details: String,
}

impl From<&IterationOutcome> for OutcomeRow {
    fn from(o: &IterationOutcome) -> Self {
        let (status, details) = match &o.status {
            IterationStatus::HypothesesEvaluated {
                examples,
                hypotheses,
                errors,
            } => (
                "evaluated".cyan().to_string(),
                format!(
                    "{} hypotheses x {} examples, {} errors",
                    hypotheses, examples, errors
                ),
            ),
            IterationStatus::TrainPassed { test_examples } => (
                "✓ train passed".green().to_string(),
                format!("{} test examples evaluated", test_examples),
            ),
            IterationStatus::TrainFailed { failing } => (
                "✗ train failed".red().to_string(),
                format!("{} failing train examples, test skipped", failing),
            ),
            IterationStatus::Failed { kind, message } => (
                format!("✗ {}", kind).red().to_string(),
                message.clone(),
            ),
        };
        Self {
            task: o.task_id.clone(),
            iteration: o.iteration,
            kind: o.kind.to_string(),
            status,
            details,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CandidateRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format a sweep report.
pub fn format_report(report: &SweepReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Table => {
            let mut text = if report.outcomes.is_empty() {
                "No iterations run".dimmed().to_string()
            } else {
                let rows: Vec<OutcomeRow> = report.outcomes.iter().map(OutcomeRow::from).collect();
                Table::new(rows).to_string()
            };
            for task in &report.skipped_tasks {
                text.push('\n');
                text.push_str(&format!(
                    "{} {}: skipped, no readable iterations directory",
                    "⚠".yellow(),
                    task
                ));
            }
            Ok(text)
        }
    }
}

/// Format the registered candidates.
pub fn format_candidates(registry: &CandidateRegistry, format: OutputFormat) -> CliResult<String> {
    let rows: Vec<CandidateRow> = registry
        .hypothesis_names()
        .map(|n| CandidateRow {
            kind: "hypothesis",
            name: n.to_string(),
        })
        .chain(registry.transformation_names().map(|n| CandidateRow {
            kind: "transformation",
            name: n.to_string(),
        }))
        .collect();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => Ok(Table::new(rows).to_string()),
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
