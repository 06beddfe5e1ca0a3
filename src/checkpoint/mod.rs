//! Checkpoint and resume for paused runs.
//!
//! A [`Session`] can be captured between two symbols, serialized as JSON
//! (readable) or bincode (compact), and resumed later, possibly in another
//! process. The resumed session continues exactly where the captured one
//! stopped.

use crate::core::{Automaton, StateHistory};
use crate::driver::{RunConfig, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a session.
///
/// # Example
///
/// ```rust
/// use stepwise::checkpoint::Checkpoint;
/// use stepwise::core::{Accepting, Automaton};
/// use stepwise::driver::{RunConfig, Session};
/// use stepwise::matchers::a_plus_b::APlusB;
///
/// let session = Session::new(APlusB::initial(), RunConfig::default()).feed('A');
/// let json = Checkpoint::capture(&session).to_json().unwrap();
///
/// let resumed = Checkpoint::<APlusB>::from_json(&json).unwrap().resume().unwrap();
/// assert!(resumed.feed('B').finish().has_tag::<Accepting>());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<A: Automaton> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    pub initial_state: A,

    pub current_state: A,

    /// Symbols stepped through before the capture
    pub consumed: usize,

    /// Symbols left unread because the run was absorbed
    pub skipped: usize,

    pub config: RunConfig,

    /// Steps recorded so far, when the session records history
    pub history: Option<StateHistory<A>>,
}

impl<A: Automaton> Checkpoint<A> {
    /// Snapshot `session` without consuming it.
    pub fn capture(session: &Session<A>) -> Self {
        let checkpoint = Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: session.initial.clone(),
            current_state: session.current.clone(),
            consumed: session.consumed,
            skipped: session.skipped,
            config: session.config,
            history: session.history.clone(),
        };

        debug!(
            id = %checkpoint.id,
            state = checkpoint.current_state.name(),
            consumed = checkpoint.consumed,
            "checkpoint captured"
        );

        checkpoint
    }

    /// Rebuild the session this checkpoint was captured from.
    pub fn resume(self) -> Result<Session<A>, CheckpointError> {
        self.validate()?;

        debug!(
            id = %self.id,
            state = self.current_state.name(),
            consumed = self.consumed,
            "resuming from checkpoint"
        );

        Ok(Session {
            initial: self.initial_state,
            current: self.current_state,
            consumed: self.consumed,
            skipped: self.skipped,
            history: self.history,
            config: self.config,
        })
    }

    /// Check that the checkpoint describes a session that could exist.
    ///
    /// A recorded history is replayed step by step: every step must start
    /// where the previous one ended, sit at its own position, and be the
    /// move the automaton actually makes on its input.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if self.skipped > 0 {
            if !self.config.stop_when_absorbed {
                return Err(self.inconsistent("input was skipped with early stop disabled"));
            }
            if !self.current_state.is_absorbing() {
                return Err(self.inconsistent("input was skipped outside an absorbing state"));
            }
        }

        if self.config.record_history != self.history.is_some() {
            return Err(self.inconsistent("history presence disagrees with the run config"));
        }

        match &self.history {
            Some(history) => self.validate_history(history),
            None if self.consumed == 0 && self.current_state != self.initial_state => {
                Err(self.inconsistent("state moved without consuming input"))
            }
            None => Ok(()),
        }
    }

    fn validate_history(&self, history: &StateHistory<A>) -> Result<(), CheckpointError> {
        if history.len() != self.consumed {
            return Err(self.inconsistent("history length differs from consumed count"));
        }

        let mut state = &self.initial_state;
        for (position, step) in history.transitions().iter().enumerate() {
            if step.from != *state {
                return Err(self.inconsistent(&format!(
                    "step {position} starts in {} instead of {}",
                    step.from.name(),
                    state.name()
                )));
            }
            if step.position != position {
                return Err(self.inconsistent(&format!(
                    "step {position} is recorded at position {}",
                    step.position
                )));
            }
            if step.input.is_end() {
                return Err(self.inconsistent("history already contains end of input"));
            }

            let replayed = step.from.clone().step(step.input.as_ref());
            if replayed != step.to {
                return Err(self.inconsistent(&format!(
                    "step {position} goes from {} to {}, but the automaton moves to {}",
                    step.from.name(),
                    step.to.name(),
                    replayed.name()
                )));
            }
            state = &step.to;
        }

        if *state != self.current_state {
            return Err(self.inconsistent("history does not end in the current state"));
        }

        Ok(())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| CheckpointError::Encode {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Deserialize from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json).map_err(|e| CheckpointError::Decode {
            format: "json",
            message: e.to_string(),
        })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Serialize with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::Encode {
            format: "bincode",
            message: e.to_string(),
        })
    }

    /// Deserialize from bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes).map_err(|e| CheckpointError::Decode {
            format: "bincode",
            message: e.to_string(),
        })?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    fn inconsistent(&self, reason: &str) -> CheckpointError {
        CheckpointError::Inconsistent {
            id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

impl<A: Automaton> Session<A> {
    /// Snapshot this session.
    pub fn checkpoint(&self) -> Checkpoint<A> {
        Checkpoint::capture(self)
    }
}
