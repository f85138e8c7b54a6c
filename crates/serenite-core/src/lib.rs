//! # Serenite Core Library
//!
//! Core logic for Serenite, a client-side wellness companion: guided
//! relaxation exercises with a countdown timer, a mood/anxiety journal,
//! and locally persisted progress statistics.
//!
//! ## Architecture
//!
//! - **Session Timer**: a tick-driven countdown state machine. The
//!   caller owns the clock and invokes `tick()` once per simulated
//!   second; the engine never drifts on its own.
//! - **Record Store**: append-only journal entries and day-bucketed
//!   exercise completions, written through to a named-record store
//!   (SQLite key/value) on every append, best-effort.
//! - **Progress Aggregator**: weekly completion counts, consecutive-day
//!   streak, and weekly average anxiety, derived on demand.
//! - **Exercise Catalog**: static id -> title/instructions lookup.
//!
//! The presentation layer (a CLI here, any UI in principle) renders
//! [`Event`]s and performs the one collaborator duty: recording an
//! exercise completion when the timer completes naturally.

pub mod catalog;
pub mod error;
pub mod events;
pub mod export;
pub mod records;
pub mod stats;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, RecordError, StorageError, TimerError};
pub use events::Event;
pub use export::ExportDocument;
pub use records::{DayBuckets, ExerciseCompletion, JournalEntry, RecordStore};
pub use stats::ProgressSnapshot;
pub use storage::{Config, MemoryStore, SqliteStore, Storage};
pub use timer::{SessionTimer, TimerSession, TimerState, RING_CIRCUMFERENCE};
