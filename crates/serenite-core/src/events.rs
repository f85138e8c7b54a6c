use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerState;

/// Every timer state change produces an Event.
/// The presentation layer polls or subscribes and renders from these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A session was created and is ready to start.
    TimerArmed {
        exercise: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    TimerStarted {
        exercise: String,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// One simulated second elapsed; session still running.
    TimerProgress {
        remaining_secs: u32,
        /// Elapsed over total, in [0, 1].
        progress: f64,
        at: DateTime<Utc>,
    },
    /// The countdown reached zero. The collaborator is expected to record
    /// an exercise completion with the originally planned duration.
    TimerCompleted {
        exercise: String,
        total_duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// User abort. Never carries completion data.
    TimerStopped {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        exercise: Option<String>,
        remaining_secs: u32,
        total_secs: u32,
        progress: f64,
        minutes: String,
        seconds: String,
        at: DateTime<Utc>,
    },
}
