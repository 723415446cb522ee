//! Optional JSON-lines session log.
//!
//! One JSON object per line, tagged by `type`. Logging is best effort: the
//! first write error is reported on stderr and turns the log off.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionRecord {
    SessionStart {
        seed: u32,
        tick_ms: u64,
    },
    Lock {
        piece: &'static str,
        lines_cleared: u32,
        score_gained: u32,
        total_score: u32,
        total_lines: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        ticks: u64,
        pieces: u32,
    },
    Quit {
        score: u32,
        lines: u32,
        ticks: u64,
    },
}

impl SessionRecord {
    pub fn lock(ev: &LockEvent, total_score: u32, total_lines: u32) -> Self {
        SessionRecord::Lock {
            piece: ev.piece.as_str(),
            lines_cleared: ev.lines_cleared,
            score_gained: ev.score_gained,
            total_score,
            total_lines,
        }
    }
}

pub struct SessionLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
}

impl SessionLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening session log {}", path))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }
}

impl<W: Write> SessionLog<W> {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self { writer: None }
    }

    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    pub fn record(&mut self, record: &SessionRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(e) = write_record(writer, record) {
            eprintln!("[session-log] write failed, logging disabled: {:#}", e);
            self.writer = None;
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

fn write_record<W: Write>(writer: &mut W, record: &SessionRecord) -> Result<()> {
    serde_json::to_writer(&mut *writer, record)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
