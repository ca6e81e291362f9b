//! Incremental record parser for the analysis event stream.
//!
//! The server frames events the server-sent-events way: records separated by
//! a blank line, payloads on `data: ` lines. Chunks arrive at arbitrary
//! boundaries, so a record may span several chunks and a single chunk may
//! carry several records (or part of one).

use super::event::AnalysisEvent;
use crate::utils::config::{DATA_PREFIX, RECORD_DELIMITER};
use log::{debug, warn};

/// Reassembles raw text chunks into delimiter-bounded records
#[derive(Debug, Default)]
pub struct EventStreamParser {
    buffer: String,
}

impl EventStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and drain the records it completed.
    ///
    /// The returned iterator is lazy: each step removes one record (plus its
    /// delimiter) from the buffer front, in the order records appeared on
    /// the wire. A trailing partial record stays buffered for the next feed.
    pub fn feed(&mut self, chunk: &str) -> Records<'_> {
        self.buffer.push_str(chunk);
        Records { parser: self }
    }

    /// Flush the buffer at end-of-stream.
    ///
    /// A trailing record without its closing delimiter is still yielded;
    /// a buffer of pure whitespace yields nothing.
    pub fn finish(self) -> Vec<String> {
        if self.buffer.trim().is_empty() {
            return Vec::new();
        }

        self.buffer
            .split(RECORD_DELIMITER)
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    #[cfg(test)]
    fn buffered(&self) -> &str {
        &self.buffer
    }
}

/// Iterator over complete records drained from the parser buffer
pub struct Records<'a> {
    parser: &'a mut EventStreamParser,
}

impl Iterator for Records<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let end = self.parser.buffer.find(RECORD_DELIMITER)?;
        let record = self.parser.buffer[..end].to_string();
        self.parser.buffer.drain(..end + RECORD_DELIMITER.len());
        Some(record)
    }
}

/// Decode every data line of a record into typed events.
///
/// Lines without the data prefix and empty payloads are skipped. A record
/// normally carries one data line, but multiple lines are each decoded
/// independently, in order. Malformed JSON drops the line with a warning;
/// it never aborts the stream.
pub fn decode_record(record: &str) -> Vec<AnalysisEvent> {
    let mut events = Vec::new();

    for line in record.lines() {
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            continue;
        };
        let payload = payload.trim();
        if payload.is_empty() {
            continue;
        }

        match AnalysisEvent::from_json(payload) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => debug!("Ignoring event with unrecognized type: {}", payload),
            Err(e) => warn!("Dropping undecodable data line: {}", e),
        }
    }

    events
}
