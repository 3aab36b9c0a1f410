//! Log Sinks
//!
//! Write-only destinations for network log entries. Sinks are best-effort:
//! the network reports their failures through tracing and carries on.

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::rc::Rc;

use share_events::LogEntry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Receives every log entry the network produces
pub trait LogSink {
    fn append_log(&mut self, entry: &LogEntry) -> Result<(), SinkError>;

    fn flush(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Forwards messages to `tracing` at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn append_log(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        tracing::info!(
            iteration = entry.iteration,
            event = ?entry.event.event_type(),
            "{}",
            entry.message
        );
        Ok(())
    }
}

/// Keeps entries in a buffer shared between clones.
///
/// Hand one clone to the network and keep the other to read what was logged.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl LogSink for MemorySink {
    fn append_log(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        self.entries.borrow_mut().push(entry.clone());
        Ok(())
    }
}

/// Append-only JSONL file of log entries
pub struct JsonlSink {
    writer: BufWriter<File>,
    entry_count: u64,
}

impl JsonlSink {
    /// Create a sink writing to `path`, truncating any existing file
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            entry_count: 0,
        })
    }

    pub fn entry_count(&self) -> u64 {
        self.entry_count
    }
}

impl LogSink for JsonlSink {
    fn append_log(&mut self, entry: &LogEntry) -> Result<(), SinkError> {
        let json = serde_json::to_string(entry)?;
        writeln!(self.writer, "{}", json)?;
        self.entry_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for JsonlSink {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!("Failed to flush log sink: {}", e);
        }
    }
}
