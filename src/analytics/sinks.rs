// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Bundled analytics sinks.
//!
//! [`TracingSink`] writes events into the application log. [`JsonLinesSink`]
//! appends one JSON document per event to a writer, doing the serialization
//! and I/O on a background worker so that emitting never blocks the caller.

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
    sync::mpsc::{self, Sender},
    thread,
};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::analytics::{AnalyticsEvent, AnalyticsSink};

/// Logs every event at `info` level under the `analytics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        let data = serde_json::Value::Object(event.data.clone());
        info!(target: "analytics", event = %event.name, %data, "analytics event");
    }
}

enum SinkMessage {
    Event(AnalyticsEvent),
    Flush(Sender<()>),
}

/// Writes events as JSON lines from a dedicated worker thread.
pub struct JsonLinesSink {
    tx: Sender<SinkMessage>,
}

impl JsonLinesSink {
    /// Spawns the worker that owns `writer`.
    ///
    /// The worker exits once the sink is dropped and the queue has drained.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut writer = writer;

            while let Ok(message) = rx.recv() {
                match message {
                    SinkMessage::Event(event) => {
                        if let Err(e) = write_event(&mut writer, &event) {
                            warn!(event = %event.name, error = %e, "Failed to write analytics event");
                        }
                    }
                    SinkMessage::Flush(done_tx) => {
                        if let Err(e) = writer.flush() {
                            warn!(error = %e, "Failed to flush analytics log");
                        }
                        let _ = done_tx.send(());
                    }
                }
            }

            writer.flush().ok();
        });

        Self { tx }
    }

    /// Opens (or creates) `path` for appending and writes events to it.
    pub fn to_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open analytics log {}", path.display()))?;

        Ok(Self::new(BufWriter::new(file)))
    }

    /// Blocks until every event emitted so far has been written and flushed.
    ///
    /// Rows never call this. It exists for hosts that want the log complete
    /// before they exit.
    pub fn flush(&self) {
        let (done_tx, done_rx) = mpsc::channel();
        if self.tx.send(SinkMessage::Flush(done_tx)).is_ok() {
            let _ = done_rx.recv();
        }
    }
}

impl AnalyticsSink for JsonLinesSink {
    fn emit(&self, event: &AnalyticsEvent) {
        // A closed worker means the event is lost, which is acceptable here.
        let _ = self.tx.send(SinkMessage::Event(event.clone()));
    }
}

fn write_event<W: Write>(writer: &mut W, event: &AnalyticsEvent) -> Result<()> {
    serde_json::to_writer(&mut *writer, event)?;
    writer.write_all(b"\n")?;
    Ok(())
}
