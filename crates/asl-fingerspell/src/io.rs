//! JSON recordings of detector output and replay reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use asl_fingerspell_classifier::{ClassifierError, GestureState, TranscriptEvent};
use asl_fingerspell_core::HandObservation;
use serde::{Deserialize, Serialize};

use crate::session::{HandSession, SessionConfig};

#[derive(thiserror::Error, Debug)]
pub enum SessionIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One captured frame: a timestamp and the detector output, if any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Milliseconds since the start of the recording.
    pub t_ms: u64,
    #[serde(default)]
    pub hand: Option<HandObservation>,
}

/// A session configuration together with a recorded frame stream.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecording {
    #[serde(default)]
    pub config: SessionConfig,
    #[serde(default)]
    pub output_path: Option<String>,
    pub frames: Vec<RecordedFrame>,
}

impl SessionRecording {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SessionIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SessionIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("replay_report.json"))
    }
}

/// Per-frame line of a [`ReplayReport`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub t_ms: u64,
    pub state: GestureState,
    /// The frame assigned a state and notified it.
    pub notified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<TranscriptEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayReport {
    pub text: String,
    pub final_state: GestureState,
    pub frames: Vec<FrameReport>,
}

impl ReplayReport {
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SessionIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// States that were notified, in order.
    pub fn notified_states(&self) -> impl Iterator<Item = GestureState> + '_ {
        self.frames.iter().filter(|f| f.notified).map(|f| f.state)
    }
}

/// Run a recording through a fresh [`HandSession`].
pub fn replay(recording: &SessionRecording) -> Result<ReplayReport, ClassifierError> {
    let start = Instant::now();
    let mut session = HandSession::new(&recording.config, start)?;
    let mut frames = Vec::with_capacity(recording.frames.len());
    for frame in &recording.frames {
        let now = start + Duration::from_millis(frame.t_ms);
        let outcome = session.process(frame.hand.as_ref(), now);
        frames.push(FrameReport {
            t_ms: frame.t_ms,
            state: session.state(),
            notified: outcome.transition.is_some_and(|t| t.notify),
            transcript: outcome.transcript,
            rejected: outcome.rejected.map(|e| e.to_string()),
        });
    }
    Ok(ReplayReport {
        text: session.transcript().text().to_string(),
        final_state: session.state(),
        frames,
    })
}
