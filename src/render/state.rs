//! Display state fold for an analysis session.
//!
//! `DisplayState::apply` turns decoded events into state transitions and a
//! list of [`Effect`]s describing the side effects to perform. Effects are
//! data: the session driver hands them to whatever sink is attached, so the
//! fold itself never touches the outside world.

use super::highlight::highlight_numbers;
use crate::stream::event::{AnalysisEvent, MacroSplit};
use crate::utils::config::{DEFAULT_MACROS, PROGRESS_CAP, PROGRESS_FULL_TRANSCRIPT};

/// Where the session stands; terminal phases accept no further events
#[derive(Debug, Clone, PartialEq)]
pub enum SessionPhase {
    /// Events are still being folded in
    Streaming,
    /// Final result received
    Complete,
    /// Server reported a failure
    Failed(String),
}

/// A side effect described (not performed) by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-render the accumulated transcript (escaped + highlighted HTML)
    RenderTranscript { html: String },

    /// Show the analyzed meal image (data URL from the server)
    RenderImage { data_url: String },

    /// Render the macro split chart
    RenderChart { macros: MacroSplit },

    /// Persist the final transcript snapshot for later export
    StoreSnapshot { html: String },

    /// Surface a server-reported failure to the user
    SurfaceError { message: String },
}

/// Mutable display state owned by one analysis session
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Cumulative text assembled from chunk events (append-only)
    pub transcript: String,

    /// Last known macro split; set on completion, defaulted if the payload was bad
    pub macros: Option<MacroSplit>,

    /// Progress estimate in percent; reaches 100 only after completion
    pub progress: f64,

    /// Session phase
    pub phase: SessionPhase,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            transcript: String::new(),
            macros: None,
            progress: 0.0,
            phase: SessionPhase::Streaming,
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A terminal state is only reachable via a `complete` or `error` event,
    /// never by stream truncation.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.phase, SessionPhase::Streaming)
    }

    /// Fold one event into the state, returning the effects to dispatch.
    ///
    /// Events applied to a terminal state are ignored, so replaying a stream
    /// tail after an error cannot change what the user saw.
    pub fn apply(&mut self, event: AnalysisEvent) -> Vec<Effect> {
        if self.is_terminal() {
            return Vec::new();
        }

        match event {
            AnalysisEvent::Chunk { text } => {
                self.transcript.push_str(&text);
                self.progress = chunk_progress(self.transcript.chars().count());

                vec![Effect::RenderTranscript {
                    html: highlight_numbers(&self.transcript),
                }]
            }

            AnalysisEvent::Complete { macros, image } => {
                let macros = macros.unwrap_or(DEFAULT_MACROS);
                self.macros = Some(macros);
                self.progress = 100.0;
                self.phase = SessionPhase::Complete;

                let mut effects = Vec::new();
                if let Some(data_url) = image {
                    effects.push(Effect::RenderImage { data_url });
                }
                effects.push(Effect::RenderChart { macros });
                effects.push(Effect::StoreSnapshot {
                    html: highlight_numbers(&self.transcript),
                });
                effects
            }

            AnalysisEvent::Error { message } => {
                self.phase = SessionPhase::Failed(message.clone());
                vec![Effect::SurfaceError { message }]
            }
        }
    }
}

/// Progress ramp derived from transcript length: `min(90, chars / 1000 * 90)`
pub fn chunk_progress(transcript_chars: usize) -> f64 {
    (transcript_chars as f64 / PROGRESS_FULL_TRANSCRIPT * PROGRESS_CAP).min(PROGRESS_CAP)
}
