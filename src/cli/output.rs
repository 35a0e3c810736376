use crate::splitters::Algorithm;
use crate::SplitReport;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonSplits<'a> {
    algorithm: String,
    identifiers: &'a [SplitReport],
}

#[derive(Debug, Serialize)]
struct JsonExpansion<'a> {
    token: &'a str,
    expansions: &'a [String],
}

#[derive(Debug, Serialize)]
struct JsonExpansions<'a> {
    tokens: Vec<JsonExpansion<'a>>,
}

pub fn print_reports(
    reports: &[SplitReport],
    algorithm: Algorithm,
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    print!("{}", render_reports(reports, algorithm, format, colored_output)?);
    Ok(())
}

pub fn render_reports(
    reports: &[SplitReport],
    algorithm: Algorithm,
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(reports
            .iter()
            .map(|report| format_report(report, colored_output) + "\n")
            .collect()),
        OutputFormat::Json => {
            let output = JsonSplits {
                algorithm: algorithm.to_string(),
                identifiers: reports,
            };
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
    }
}

fn format_report(report: &SplitReport, colored_output: bool) -> String {
    let words = report.words.join(" ");

    let mut line = if colored_output {
        format!(
            "{} {} {}",
            report.identifier.bold(),
            "→".dimmed(),
            words.green()
        )
    } else {
        format!("{} → {}", report.identifier, words)
    };

    if let Some(expansion) = &report.expansion {
        if colored_output {
            line.push_str(&format!(" {}", format!("({})", expansion).cyan()));
        } else {
            line.push_str(&format!(" ({})", expansion));
        }
    }

    line
}

pub fn print_expansions(
    expansions: &[(String, Vec<String>)],
    format: OutputFormat,
    colored_output: bool,
) -> Result<()> {
    print!("{}", render_expansions(expansions, format, colored_output)?);
    Ok(())
}

pub fn render_expansions(
    expansions: &[(String, Vec<String>)],
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (token, candidates) in expansions {
                let listed = if candidates.is_empty() {
                    "(no expansion)".to_string()
                } else {
                    candidates.join(", ")
                };

                if colored_output {
                    let listed = if candidates.is_empty() {
                        listed.yellow()
                    } else {
                        listed.green()
                    };
                    out.push_str(&format!("{} {} {}\n", token.bold(), "→".dimmed(), listed));
                } else {
                    out.push_str(&format!("{} → {}\n", token, listed));
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let output = JsonExpansions {
                tokens: expansions
                    .iter()
                    .map(|(token, candidates)| JsonExpansion {
                        token,
                        expansions: candidates,
                    })
                    .collect(),
            };
            Ok(serde_json::to_string_pretty(&output)? + "\n")
        }
    }
}
