//! Show command implementation.
//!
//! This module implements the `show` command, which displays configured
//! tasks in various formats (text, JSON, CSV, TSV).

use crate::commands::path::TierArg;
use crate::error::CliError;
use crate::utils::{GlobalOptions, Settings};
use clap::{Args, ValueEnum};
use llm_manager::{MergedView, Tier};
use serde::Serialize;
use std::io::Write;

/// Show all configured tasks.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "LLM_MANAGER_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show entries defined in this tier
    #[arg(long, value_enum)]
    pub tier: Option<TierArg>,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `task = model` lines (human-readable)
    Text,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

/// One output row.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Entry<'a> {
    task: &'a str,
    model: &'a str,
    source: String,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = Settings::load(global)?;
        let view = settings.load_view();
        let entries = collect_entries(&view, self.tier.map(Tier::from));

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Text => format_as_text(&mut handle, &entries)?,
            OutputFormat::Json => format_as_json(&mut handle, &entries)?,
            OutputFormat::Csv => format_as_delimited(&mut handle, &entries, b',')?,
            OutputFormat::Tsv => format_as_delimited(&mut handle, &entries, b'\t')?,
        }

        Ok(())
    }
}

/// Merged entries sorted by task, optionally restricted to one tier.
fn collect_entries(view: &MergedView, only: Option<Tier>) -> Vec<Entry<'_>> {
    let map = match only {
        Some(tier) => view.tier(tier),
        None => view.entries(),
    };

    map.iter()
        .map(|(task, model)| Entry {
            task: task.as_str(),
            model: model.as_str(),
            source: only
                .or_else(|| view.source(task))
                .unwrap_or(Tier::User)
                .to_string(),
        })
        .collect()
}

fn format_as_text(out: &mut impl Write, entries: &[Entry<'_>]) -> Result<(), CliError> {
    if entries.is_empty() {
        writeln!(out, "No configurations found.")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(out, "{} = {}", entry.task, entry.model)?;
    }
    Ok(())
}

fn format_as_json(out: &mut impl Write, entries: &[Entry<'_>]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, entries)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn format_as_delimited(
    out: &mut impl Write,
    entries: &[Entry<'_>],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    // Header comes from the field names
    if entries.is_empty() {
        writer
            .write_record(["task", "model", "source"])
            .map_err(csv_error)?;
    }
    for entry in entries {
        writer.serialize(entry).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}
