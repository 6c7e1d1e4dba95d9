pub mod formats;

use crate::motif::table::{AccessionRecord, MotifTable};
use chrono::{DateTime, Utc};
use serde::ser::Serializer;
use serde::Serialize;

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    #[value(name = "csv")]
    Csv,
    #[value(name = "json")]
    Json,
}

/// Root structure for JSON exports
#[derive(Debug, Serialize)]
pub struct ScanExport {
    pub version: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub created_at: DateTime<Utc>,
    pub tool_version: String,
    pub motif: String,
    pub records: Vec<AccessionRecord>,
}

impl ScanExport {
    pub fn from_table(table: &MotifTable) -> Self {
        ScanExport {
            version: "1.0".to_string(),
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            motif: table.motif.clone(),
            records: table.records.clone(),
        }
    }
}

fn serialize_datetime<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339())
}

pub fn write_table(
    table: &MotifTable,
    path: &str,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ExportFormat::Csv => formats::csv::write(table, path),
        ExportFormat::Json => formats::json::write(table, path),
    }
}
