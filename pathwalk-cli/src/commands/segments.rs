//! Command to list a path's segments as rows.

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use pathwalk::SegmentCursor;

/// Output formats for segment rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `row kind segment` lines
    Text,
    /// A JSON array of row objects
    Json,
}

/// List a path's segments as rows.
#[derive(Args)]
pub struct SegmentsCommand {
    /// Path to iterate
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SegmentRowOutput<'a> {
    row: i64,
    kind: &'a str,
    segment: &'a str,
}

impl SegmentsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cursor = SegmentCursor::open(&self.path, global.style);
        let mut rows = Vec::new();
        while let Some(row) = cursor.current() {
            rows.push(SegmentRowOutput {
                row: row.row_id,
                kind: row.kind.as_str(),
                segment: row.text,
            });
            cursor.advance();
        }
        global.logger.debug(&format!("emitted {} rows", rows.len()));

        match self.format {
            OutputFormat::Text => {
                for row in &rows {
                    println!("{}\t{}\t{}", row.row, row.kind, row.segment);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
        }
        Ok(())
    }
}
