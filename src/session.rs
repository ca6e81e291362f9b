//! Analysis session driver.
//!
//! A single-threaded fold over one streamed response: blocking reads are the
//! only suspension points, and everything between reads is synchronous, so
//! events reach the display state in exact wire order. The session owns its
//! parser buffer and state; nothing is shared across uploads.

use crate::render::state::{DisplayState, Effect};
use crate::stream::event::AnalysisEvent;
use crate::stream::parser::{decode_record, EventStreamParser};
use crate::utils::config::READ_BUFFER_SIZE;
use crate::utils::error::StreamError;
use log::debug;
use std::io::Read;

/// Consumer of effects emitted while folding the stream
pub trait EffectSink {
    fn handle(&mut self, effect: Effect);
}

/// Sink for callers that only want the final state
pub struct DiscardEffects;

impl EffectSink for DiscardEffects {
    fn handle(&mut self, _effect: Effect) {}
}

/// Drive one analysis stream to completion.
///
/// **Public** - main entry point for stream consumption
///
/// # Arguments
/// * `reader` - the raw response body (e.g. a streaming HTTP response)
/// * `sink` - receives effects as events are folded in
///
/// # Returns
/// The final display state. A `Failed` phase means the server sent an
/// explicit error event; a `Streaming` phase means the stream ended before
/// the analysis completed, which callers must not present as success.
///
/// # Errors
/// * `StreamError::Transport` - the underlying read failed
pub fn consume_stream<R: Read>(
    mut reader: R,
    sink: &mut dyn EffectSink,
) -> Result<DisplayState, StreamError> {
    let mut parser = EventStreamParser::new();
    let mut state = DisplayState::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut buf = [0u8; READ_BUFFER_SIZE];

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        pending.extend_from_slice(&buf[..n]);

        let text = take_valid_utf8(&mut pending);
        if text.is_empty() {
            continue;
        }

        for record in parser.feed(&text) {
            for event in decode_record(&record) {
                dispatch(&mut state, event, sink);
            }
        }

        if state.is_terminal() {
            debug!("Session reached terminal state, ignoring rest of stream");
            return Ok(state);
        }
    }

    // End of stream: flush undecoded bytes, then any trailing record
    if !pending.is_empty() {
        let tail = String::from_utf8_lossy(&pending).into_owned();
        for record in parser.feed(&tail) {
            for event in decode_record(&record) {
                dispatch(&mut state, event, sink);
            }
        }
    }
    for record in parser.finish() {
        for event in decode_record(&record) {
            dispatch(&mut state, event, sink);
        }
    }

    Ok(state)
}

/// Apply one event and hand its effects to the sink
fn dispatch(state: &mut DisplayState, event: AnalysisEvent, sink: &mut dyn EffectSink) {
    for effect in state.apply(event) {
        sink.handle(effect);
    }
}

/// Take the longest valid UTF-8 prefix off the pending bytes.
///
/// An incomplete multi-byte sequence at the tail stays pending until more
/// bytes arrive; genuinely invalid bytes are decoded with replacement
/// characters rather than treated as fatal.
fn take_valid_utf8(pending: &mut Vec<u8>) -> String {
    match std::str::from_utf8(pending) {
        Ok(text) => {
            let text = text.to_string();
            pending.clear();
            text
        }
        Err(e) if e.error_len().is_none() => {
            let valid = e.valid_up_to();
            let text = String::from_utf8_lossy(&pending[..valid]).into_owned();
            pending.drain(..valid);
            text
        }
        Err(_) => {
            let text = String::from_utf8_lossy(pending).into_owned();
            pending.clear();
            text
        }
    }
}
