//! Output writers for simulation results.
//!
//! Every run writes a CSV summary; `--output-format jsonl` adds one JSON
//! object per game, gzip-compressed with `--compress`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

type BoxError = Box<dyn std::error::Error>;

enum JsonlSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl JsonlSink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            JsonlSink::Plain(w) => w,
            JsonlSink::Gzip(w) => w,
        }
    }

    fn close(self) -> std::io::Result<()> {
        match self {
            JsonlSink::Plain(mut w) => w.flush(),
            JsonlSink::Gzip(w) => w.finish()?.flush(),
        }
    }
}

pub struct OutputWriter {
    jsonl: Option<(JsonlSink, PathBuf)>,
    csv: csv::Writer<BufWriter<File>>,
    csv_path: PathBuf,
}

fn run_stamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-")
}

impl OutputWriter {
    pub fn new(output_dir: &str, format: &OutputFormat, compress: bool) -> Result<Self, BoxError> {
        Self::create(Path::new(output_dir), &run_stamp(), format, compress)
    }

    fn create(
        dir: &Path,
        stamp: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, BoxError> {
        std::fs::create_dir_all(dir)?;

        let jsonl = match format {
            OutputFormat::Jsonl if compress => {
                let path = dir.join(format!("briscola_sim_{stamp}.jsonl.gz"));
                let file = BufWriter::new(File::create(&path)?);
                Some((JsonlSink::Gzip(GzEncoder::new(file, Compression::default())), path))
            }
            OutputFormat::Jsonl => {
                let path = dir.join(format!("briscola_sim_{stamp}.jsonl"));
                Some((JsonlSink::Plain(BufWriter::new(File::create(&path)?)), path))
            }
            OutputFormat::Csv => None,
        };

        let csv_path = dir.join(format!("briscola_sim_{stamp}_summary.csv"));
        let csv = csv::Writer::from_writer(BufWriter::new(File::create(&csv_path)?));

        Ok(Self {
            jsonl,
            csv,
            csv_path,
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), BoxError> {
        if let Some((sink, _)) = self.jsonl.as_mut() {
            let line = serde_json::to_string(metrics)?;
            writeln!(sink.writer(), "{line}")?;
        }
        self.csv.serialize(CsvSummaryRow::from(metrics))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), BoxError> {
        if let Some((sink, _)) = self.jsonl.take() {
            sink.close()?;
        }
        self.csv.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (self.jsonl.as_ref().map(|(_, p)| p), Some(&self.csv_path))
    }
}
