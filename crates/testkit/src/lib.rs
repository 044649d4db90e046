#![warn(missing_docs)]
//! Headless testing surfaces (event stream capture for scripted sessions).

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Primary event record captured by headless runs.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a, T: Serialize> {
    /// Script step that produced the event.
    pub step: u64,
    /// Human-readable kind label.
    pub kind: &'a str,
    /// Event body.
    pub payload: &'a T,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create event log {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append an event to the log.
    pub fn write<T: Serialize>(&mut self, event: &EventRecord<'_, T>) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered lines to disk.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Read a JSONL file back as generic JSON values, one per line.
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<serde_json::Value>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event log {}", path.display()))?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).context("Malformed event log line"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        index: usize,
    }

    #[test]
    fn jsonl_sink_writes_one_line_per_event() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("logs").join("events.jsonl");

        let mut sink = JsonlSink::create(&path).expect("sink create");
        for step in 0..2 {
            let payload = Payload { index: step as usize };
            sink.write(&EventRecord {
                step,
                kind: "slot_updated",
                payload: &payload,
            })
            .expect("write succeeds");
        }
        sink.flush().expect("flush succeeds");

        let lines = read_jsonl(&path).expect("log readable");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["step"], 1);
        assert_eq!(lines[1]["kind"], "slot_updated");
        assert_eq!(lines[1]["payload"]["index"], 1);
    }
}
