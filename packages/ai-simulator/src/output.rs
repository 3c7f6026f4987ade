//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

/// Writes one JSONL line per game (optionally gzipped) plus a CSV summary.
pub struct OutputWriter {
    jsonl: Option<(Box<dyn Write + Send>, PathBuf)>,
    csv: (csv::Writer<BufWriter<File>>, PathBuf),
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let stem = format!("simulation_{}", file_timestamp());

        let jsonl = match format {
            OutputFormat::Jsonl => Some(open_jsonl(dir, &stem, compress)?),
            OutputFormat::Csv => None,
        };

        let csv_path = dir.join(format!("{stem}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncated(&csv_path)?));

        Ok(Self {
            jsonl,
            csv: (csv_writer, csv_path),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        if let Some((writer, _)) = self.jsonl.as_mut() {
            serde_json::to_writer(&mut *writer, metrics)?;
            writer.write_all(b"\n")?;
        }
        self.csv.0.serialize(CsvSummaryRow::from(metrics))?;
        Ok(())
    }

    /// Flush both files. Gzip trailers are written when the encoder drops.
    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some((writer, _)) = self.jsonl.as_mut() {
            writer.flush()?;
        }
        self.csv.0.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl.as_ref().map(|(_, p)| p), &self.csv.1)
    }
}

fn file_timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-")
}

fn create_truncated(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn open_jsonl(
    dir: &Path,
    stem: &str,
    compress: bool,
) -> Result<(Box<dyn Write + Send>, PathBuf), Box<dyn std::error::Error>> {
    if compress {
        let path = dir.join(format!("{stem}.jsonl.gz"));
        let encoder = GzEncoder::new(create_truncated(&path)?, Compression::default());
        Ok((Box::new(BufWriter::new(encoder)), path))
    } else {
        let path = dir.join(format!("{stem}.jsonl"));
        Ok((Box::new(BufWriter::new(create_truncated(&path)?)), path))
    }
}
