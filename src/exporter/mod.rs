// file: src/exporter/mod.rs
// description: rendering of the word list into export artifacts and writing them out
// reference: internal module structure

pub mod csv;
pub mod json;
pub mod writer;

pub use self::csv::{CsvRecord, escape_value};
pub use writer::ArtifactWriter;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::models::{ExportArtifact, ExportFormat, WordRecord};

/// Renders the requested formats, JSON before CSV, without touching disk.
pub fn render_artifacts(
    records: &[WordRecord],
    formats: &[ExportFormat],
    output: &OutputConfig,
) -> Result<Vec<ExportArtifact>> {
    let mut formats = formats.to_vec();
    formats.sort();
    formats.dedup();

    formats
        .into_iter()
        .map(|format| -> Result<ExportArtifact> {
            let artifact = match format {
                ExportFormat::Json => {
                    ExportArtifact::new(format, &output.json_filename, json::encode(records)?)
                }
                ExportFormat::Csv => {
                    ExportArtifact::new(format, &output.csv_filename, csv::encode(records)?)
                }
            };
            Ok(artifact)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ExportError;

    #[test]
    fn test_render_orders_and_dedups_formats() {
        let output = Config::default_config().output;
        let records = vec![WordRecord::new("foo", "bar")];

        let artifacts = render_artifacts(
            &records,
            &[ExportFormat::Csv, ExportFormat::Json, ExportFormat::Csv],
            &output,
        )
        .unwrap();

        let names: Vec<_> = artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["words.json", "words.csv"]);
        assert_eq!(artifacts[1].contents, "word,meaning\r\nfoo,bar");
    }

    #[test]
    fn test_empty_list_fails_only_when_csv_requested() {
        let output = Config::default_config().output;

        let json_only = render_artifacts(&[], &[ExportFormat::Json], &output).unwrap();
        assert_eq!(json_only[0].contents, "[]");

        let err = render_artifacts(&[], &ExportFormat::ALL, &output).unwrap_err();
        assert!(matches!(err, ExportError::EmptyRecords));
    }
}
