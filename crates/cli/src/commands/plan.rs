use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use simbatch_core::model::{NamedParam, NamedParamList, SimulationSnapshot};
use simbatch_core::resolver::{
    resolve_list, resolve_single, ComponentKind, FeatureKind, TripKind,
};

use crate::batch::{BatchFile, Binding, ReportRequest, TargetSelector};

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Human,
    Json,
}

/// Resolve a batch file into the report instances it will generate
#[derive(Debug, Parser)]
pub struct PlanCommand {
    /// Path to the batch YAML file
    #[arg(value_name = "BATCH")]
    pub batch_path: PathBuf,

    /// Path to the simulation snapshot YAML file
    #[arg(long, value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Output format (human, json)
    #[arg(long, value_name = "FORMAT", default_value = "human")]
    pub output: String,
}

/// One report instance the batch run will generate.
#[derive(Debug, Serialize)]
pub struct PlannedReport {
    pub report: String,
    pub title: String,
    pub values: Vec<String>,
}

impl PlanCommand {
    pub fn execute(&self) -> Result<i32> {
        let output_format = self.output_format()?;
        let snapshot = load_snapshot(&self.snapshot)?;
        let batch = load_batch(&self.batch_path)?;

        let mut planned = Vec::new();
        for request in &batch.reports {
            let rows = plan_request(request, &snapshot)
                .with_context(|| format!("invalid report request '{}'", request.name))?;
            planned.extend(rows);
        }

        match output_format {
            OutputFormat::Human => report_plan(&planned),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&planned)?),
        }

        Ok(0)
    }

    fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}'; expected human or json", other),
        }
    }
}

fn load_snapshot(path: &Path) -> Result<SimulationSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot file {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot file {}", path.display()))
}

fn load_batch(path: &Path) -> Result<BatchFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse batch file {}", path.display()))
}

fn plan_request(request: &ReportRequest, snapshot: &SimulationSnapshot) -> Result<Vec<PlannedReport>> {
    let rows = match &request.target {
        TargetSelector::Component {
            query,
            default_id,
            default_ids,
            use_all,
        } => match request.binding {
            Binding::Single => single_rows::<ComponentKind>(
                &request.name,
                resolve_single::<ComponentKind>(query, default_id, snapshot)?,
            ),
            Binding::List => list_rows::<ComponentKind>(
                &request.name,
                resolve_list::<ComponentKind>(query, default_ids, *use_all, snapshot)?,
            ),
        },
        TargetSelector::Trip {
            query,
            default_trip,
            default_trips,
            use_all,
        } => match request.binding {
            Binding::Single => single_rows::<TripKind>(
                &request.name,
                resolve_single::<TripKind>(query, default_trip, snapshot)?,
            ),
            Binding::List => list_rows::<TripKind>(
                &request.name,
                resolve_list::<TripKind>(query, default_trips, *use_all, snapshot)?,
            ),
        },
    };
    Ok(rows)
}

fn single_rows<K: FeatureKind>(report: &str, params: Vec<NamedParam<K::Value>>) -> Vec<PlannedReport> {
    params
        .into_iter()
        .map(|param| {
            let values = vec![K::format_value(&param.value)];
            PlannedReport {
                report: report.to_string(),
                title: param.name,
                values,
            }
        })
        .collect()
}

fn list_rows<K: FeatureKind>(report: &str, lists: Vec<NamedParamList<K::Value>>) -> Vec<PlannedReport> {
    lists
        .into_iter()
        .map(|list| {
            let values = list.values.iter().map(K::format_value).collect();
            PlannedReport {
                report: report.to_string(),
                title: list.name,
                values,
            }
        })
        .collect()
}

/// Print the plan in human-readable format.
fn report_plan(planned: &[PlannedReport]) {
    println!("Planned reports: {}", planned.len());
    println!();
    for row in planned {
        if row.title.is_empty() {
            println!("  {}: {}", row.report, row.values.join(", "));
        } else {
            println!("  {} ({}): {}", row.report, row.title, row.values.join(", "));
        }
    }
}
