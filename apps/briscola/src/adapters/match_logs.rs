//! Match log sinks.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::events::MatchEvent;
use crate::error::AppError;
use crate::ports::MatchLog;

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl MatchLog for NullLog {
    fn record(&mut self, _event: &MatchEvent) {}
}

/// Collects rendered log lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    lines: Vec<String>,
}

impl MemoryLog {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write the collected lines under `header` to `path`.
    pub fn write_to(&self, path: &Path, header: &str) -> Result<(), AppError> {
        let mut file = fs::File::create(path)?;
        writeln!(file, "{header}")?;
        writeln!(file, "{}", "=".repeat(40))?;
        for line in &self.lines {
            writeln!(file, "{line}")?;
        }
        file.flush()?;
        Ok(())
    }
}

impl MatchLog for MemoryLog {
    fn record(&mut self, event: &MatchEvent) {
        self.lines.push(event.to_string());
    }
}

/// Forwards every event to two sinks, left first.
pub struct Tee<A, B> {
    pub left: A,
    pub right: B,
}

impl<A: MatchLog, B: MatchLog> Tee<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: MatchLog, B: MatchLog> MatchLog for Tee<A, B> {
    fn record(&mut self, event: &MatchEvent) {
        self.left.record(event);
        self.right.record(event);
    }
}

/// `log_<player>_<stamp>.txt` inside `dir`.
pub fn log_file_path(dir: &Path, player: &str, stamp: &str) -> PathBuf {
    dir.join(format!("log_{player}_{stamp}.txt"))
}
