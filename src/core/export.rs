use crate::core::history::CheckInLog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flat row for CSV output.
#[derive(Serialize, Clone, Debug)]
struct CheckInExport {
    id: String,
    name: String,
    confirmed: bool,
    timestamp: String,
}

/// Check whether a file can be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists, no `force` → ask the user
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export("existing file not overwritten".to_string()))
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write the history to `file`, newest first.
    ///
    /// JSON output has the same shape as the persisted value, so it can be
    /// inspected or restored by hand. Returns the number of rows written.
    pub fn export(
        log: &CheckInLog,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path_buf = expand_tilde(file);
        let path = path_buf.as_path();
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if log.is_empty() {
            warning("No check-ins recorded. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => write_json(path, log)?,
            ExportFormat::Csv => write_csv(path, log)?,
        }

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(log.len())
    }
}

fn write_json(path: &Path, log: &CheckInLog) -> AppResult<()> {
    let json = serde_json::to_string_pretty(log.entries())?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(path: &Path, log: &CheckInLog) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for e in log.entries() {
        wtr.serialize(CheckInExport {
            id: e.id.to_string(),
            name: e.name.clone(),
            confirmed: e.confirmed,
            timestamp: e.timestamp.clone(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
