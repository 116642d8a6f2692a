//! # Names Command
//!
//! Prints every child object derived for one `Cincinnati`.

use super::OutputFormat;
use anyhow::{Context, Result};
use cincinnati_operator::crd::Cincinnati;
use cincinnati_operator::naming::{parent_name, try_child_names, ChildNames, ChildRef};
use kube::Resource;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Serialize)]
struct NamesReport {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    children: Vec<ChildRef>,
}

pub fn names_command(instance: &Cincinnati, strict: bool, output: OutputFormat) -> Result<String> {
    let names = if strict {
        try_child_names(instance)?
    } else {
        ChildNames::for_instance(instance)
    };

    let report = NamesReport {
        name: parent_name(instance).to_string(),
        namespace: instance.meta().namespace.clone(),
        children: names.refs(),
    };
    render(&report, output)
}

fn render(report: &NamesReport, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(report).context("Failed to serialize names as JSON")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(report).context("Failed to serialize names as YAML")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{:<24} {:<20} {}", "ROLE", "KIND", "NAME")?;
            writeln!(out, "{}", "-".repeat(72))?;
            for child in &report.children {
                writeln!(
                    out,
                    "{:<24} {:<20} {}",
                    child.role.as_str(),
                    child.kind.as_str(),
                    child.name
                )?;
            }
            Ok(out)
        }
    }
}
