//! Export-template command handler.
//!
//! Writes an empty session record for a client, ready to be filled in.

use crate::model::{Answers, ClientInfo};
use crate::pipeline::exit_codes;
use crate::session::SessionRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

/// Write the template and return the path it was written to.
pub fn write_session_template(client_name: &str, output: Option<PathBuf>) -> Result<PathBuf> {
    let now = Utc::now();
    let record =
        SessionRecord::new(ClientInfo::named(client_name), Answers::new()).with_timestamp(now);
    let path = output.unwrap_or_else(|| PathBuf::from(record.export_file_name(now.date_naive())));

    record
        .save(&path)
        .with_context(|| format!("Failed to write session template to {}", path.display()))?;
    Ok(path)
}

/// Run the export-template command, returning the desired exit code.
pub fn run_export_template(client_name: &str, output: Option<PathBuf>) -> Result<i32> {
    let path = write_session_template(client_name, output)?;
    println!("{}", path.display());
    Ok(exit_codes::SUCCESS)
}
