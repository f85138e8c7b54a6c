//! Session countdown engine.
//!
//! The timer is a tick-driven state machine. It owns no clock and no
//! thread - the caller (a real interval timer, or a test harness) is
//! responsible for calling `tick()` once per simulated second.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Armed -> Running <-> Paused -> Completed|Idle
//! ```
//!
//! `remaining` only changes on explicit `tick()` calls, so an arbitrary
//! suspension between two ticks (backgrounded environment) cannot
//! corrupt the countdown. No wall-clock drift compensation is applied.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::events::Event;

/// Stroke circumference of the progress ring (2 * pi * 45-unit radius).
pub const RING_CIRCUMFERENCE: f64 = 283.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    /// A session exists but the countdown has not started.
    Armed,
    Running,
    Paused,
    /// The countdown reached zero naturally. The session stays readable
    /// until `stop()` returns the engine to `Idle`.
    Completed,
}

/// The singleton active session. Created by `arm`, destroyed by `stop`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerSession {
    pub exercise: String,
    /// Planned duration, fixed at creation.
    pub total_secs: u32,
    pub remaining_secs: u32,
}

/// Core countdown engine.
///
/// Serializable so a CLI invocation can persist it between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTimer {
    state: TimerState,
    #[serde(default)]
    session: Option<TimerSession>,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Idle,
            session: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn session(&self) -> Option<&TimerSession> {
        self.session.as_ref()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.session.as_ref().map(|s| s.remaining_secs).unwrap_or(0)
    }

    pub fn total_secs(&self) -> u32 {
        self.session.as_ref().map(|s| s.total_secs).unwrap_or(0)
    }

    /// Elapsed over total for the active session, in [0, 1].
    pub fn progress(&self) -> f64 {
        match self.session {
            Some(ref s) if s.total_secs > 0 => {
                f64::from(s.total_secs - s.remaining_secs) / f64::from(s.total_secs)
            }
            _ => 0.0,
        }
    }

    /// Remaining whole minutes, zero-padded to two digits.
    pub fn minutes(&self) -> String {
        format!("{:02}", self.remaining_secs() / 60)
    }

    /// Remaining seconds within the minute, zero-padded to two digits.
    pub fn seconds(&self) -> String {
        format!("{:02}", self.remaining_secs() % 60)
    }

    /// Stroke-dashoffset for the progress ring.
    pub fn ring_offset(&self) -> f64 {
        RING_CIRCUMFERENCE - self.progress() * RING_CIRCUMFERENCE
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            exercise: self.session.as_ref().map(|s| s.exercise.clone()),
            remaining_secs: self.remaining_secs(),
            total_secs: self.total_secs(),
            progress: self.progress(),
            minutes: self.minutes(),
            seconds: self.seconds(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Create the session for `exercise` and transition to `Armed`.
    ///
    /// # Errors
    ///
    /// `InvalidDuration` if `duration_secs` is zero;
    /// `SessionAlreadyActive` if the engine is not `Idle`. Neither
    /// mutates state.
    pub fn arm(&mut self, exercise: &str, duration_secs: u32) -> Result<Event, TimerError> {
        if duration_secs == 0 {
            return Err(TimerError::InvalidDuration { duration_secs });
        }
        if self.state != TimerState::Idle {
            let exercise = self
                .session
                .as_ref()
                .map(|s| s.exercise.clone())
                .unwrap_or_default();
            return Err(TimerError::SessionAlreadyActive { exercise });
        }
        self.session = Some(TimerSession {
            exercise: exercise.to_string(),
            total_secs: duration_secs,
            remaining_secs: duration_secs,
        });
        self.state = TimerState::Armed;
        Ok(Event::TimerArmed {
            exercise: exercise.to_string(),
            duration_secs,
            at: Utc::now(),
        })
    }

    /// Begin (or resume) the countdown. No-op outside `Armed`/`Paused`.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Armed | TimerState::Paused => {
                let session = self.session.as_ref()?;
                self.state = TimerState::Running;
                Some(Event::TimerStarted {
                    exercise: session.exercise.clone(),
                    remaining_secs: session.remaining_secs,
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Suspend the countdown. Idempotent when already paused.
    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Paused;
                Some(Event::TimerPaused {
                    remaining_secs: self.remaining_secs(),
                    at: Utc::now(),
                })
            }
            _ => None,
        }
    }

    /// Advance the countdown by one simulated second.
    ///
    /// Ignored in every state but `Running`, so stray ticks from a
    /// suspended interval source leave `remaining` untouched.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        let (exercise, total_secs, remaining_secs) = {
            let session = self.session.as_mut()?;
            session.remaining_secs = session.remaining_secs.saturating_sub(1);
            (
                session.exercise.clone(),
                session.total_secs,
                session.remaining_secs,
            )
        };
        if remaining_secs == 0 {
            self.state = TimerState::Completed;
            Some(Event::TimerCompleted {
                exercise,
                total_duration_secs: total_secs,
                at: Utc::now(),
            })
        } else {
            Some(Event::TimerProgress {
                remaining_secs,
                progress: self.progress(),
                at: Utc::now(),
            })
        }
    }

    /// Discard the session and return to `Idle`. Safe to call at any
    /// time, including when already idle. Never emits a completion
    /// event, which is what distinguishes user abort from a natural
    /// completion.
    pub fn stop(&mut self) -> Option<Event> {
        if self.state == TimerState::Idle {
            return None;
        }
        self.state = TimerState::Idle;
        self.session = None;
        Some(Event::TimerStopped { at: Utc::now() })
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn armed(duration: u32) -> SessionTimer {
        let mut timer = SessionTimer::new();
        timer.arm("breathing", duration).unwrap();
        timer
    }

    #[test]
    fn arm_rejects_zero_duration() {
        let mut timer = SessionTimer::new();
        assert!(matches!(
            timer.arm("breathing", 0),
            Err(TimerError::InvalidDuration { .. })
        ));
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.session().is_none());
    }

    #[test]
    fn arm_rejects_second_session() {
        let mut timer = armed(60);
        assert!(matches!(
            timer.arm("meditation", 30),
            Err(TimerError::SessionAlreadyActive { .. })
        ));
        // Existing session untouched.
        assert_eq!(timer.session().unwrap().exercise, "breathing");
        assert_eq!(timer.total_secs(), 60);
    }

    #[test]
    fn completes_on_final_tick_and_never_before() {
        let mut timer = armed(3);
        timer.start().unwrap();
        for expected in (1..3).rev() {
            match timer.tick().unwrap() {
                Event::TimerProgress { remaining_secs, .. } => {
                    assert_eq!(remaining_secs, expected);
                }
                other => panic!("expected TimerProgress, got {other:?}"),
            }
        }
        match timer.tick().unwrap() {
            Event::TimerCompleted {
                exercise,
                total_duration_secs,
                ..
            } => {
                assert_eq!(exercise, "breathing");
                assert_eq!(total_duration_secs, 3);
            }
            other => panic!("expected TimerCompleted, got {other:?}"),
        }
        assert_eq!(timer.state(), TimerState::Completed);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn ticks_are_ignored_while_paused() {
        let mut timer = armed(10);
        timer.start().unwrap();
        timer.tick().unwrap();
        timer.pause().unwrap();
        for _ in 0..5 {
            assert!(timer.tick().is_none());
        }
        assert_eq!(timer.remaining_secs(), 9);

        // Resume decrements from the paused value.
        timer.start().unwrap();
        timer.tick().unwrap();
        assert_eq!(timer.remaining_secs(), 8);
    }

    #[test]
    fn pause_is_idempotent() {
        let mut timer = armed(10);
        timer.start().unwrap();
        assert!(timer.pause().is_some());
        assert!(timer.pause().is_none());
        assert_eq!(timer.state(), TimerState::Paused);
    }

    #[test]
    fn ticks_are_ignored_before_start() {
        let mut timer = armed(10);
        assert!(timer.tick().is_none());
        assert_eq!(timer.remaining_secs(), 10);
    }

    #[test]
    fn stop_returns_to_idle_from_any_state() {
        let mut timer = armed(5);
        assert!(timer.stop().is_some());
        assert_eq!(timer.state(), TimerState::Idle);
        assert!(timer.session().is_none());

        // Idempotent.
        assert!(timer.stop().is_none());

        let mut timer = armed(1);
        timer.start().unwrap();
        timer.tick().unwrap();
        assert_eq!(timer.state(), TimerState::Completed);
        assert!(timer.stop().is_some());
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn start_is_a_no_op_without_a_session() {
        let mut timer = SessionTimer::new();
        assert!(timer.start().is_none());
        assert_eq!(timer.state(), TimerState::Idle);
    }

    #[test]
    fn display_is_zero_padded() {
        let timer = armed(125);
        assert_eq!(timer.minutes(), "02");
        assert_eq!(timer.seconds(), "05");

        let idle = SessionTimer::new();
        assert_eq!(idle.minutes(), "00");
        assert_eq!(idle.seconds(), "00");
    }

    #[test]
    fn ring_offset_shrinks_to_zero_at_completion() {
        let mut timer = armed(2);
        assert_eq!(timer.ring_offset(), RING_CIRCUMFERENCE);
        timer.start().unwrap();
        timer.tick().unwrap();
        timer.tick().unwrap();
        assert_eq!(timer.ring_offset(), 0.0);
    }

    #[test]
    fn engine_roundtrips_through_json() {
        let mut timer = armed(90);
        timer.start().unwrap();
        timer.tick().unwrap();
        let json = serde_json::to_string(&timer).unwrap();
        let restored: SessionTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.state(), TimerState::Running);
        assert_eq!(restored.remaining_secs(), 89);
    }

    proptest! {
        #[test]
        fn completes_exactly_at_duration(duration in 1u32..500) {
            let mut timer = SessionTimer::new();
            timer.arm("breathing", duration).unwrap();
            timer.start().unwrap();
            let mut last_progress = 0.0;
            for _ in 0..duration - 1 {
                match timer.tick().unwrap() {
                    Event::TimerProgress { progress, .. } => {
                        // Monotonically non-decreasing within a session.
                        prop_assert!(progress >= last_progress);
                        last_progress = progress;
                    }
                    other => prop_assert!(false, "completed early: {other:?}"),
                }
            }
            let completed = matches!(timer.tick().unwrap(), Event::TimerCompleted { .. });
            prop_assert!(completed);
            prop_assert_eq!(timer.progress(), 1.0);
        }
    }
}
