//! Journal and exercise-completion records.
//!
//! The in-memory model is authoritative. Every append writes through to
//! the named-record store immediately, best-effort: a failed write is
//! recorded as a diagnostic and never rolls back the append, so the
//! worst case is loss of persistence across sessions.
//!
//! Day buckets are keyed by the UTC calendar date of the completion
//! instant. The key is an explicit `NaiveDate`, not a locale-dependent
//! display string.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{RecordError, StorageError};
use crate::storage::{MemoryStore, SqliteStore, Storage};

/// Named record holding the ordered journal sequence.
pub const JOURNAL_KEY: &str = "journal";
/// Named record holding the day-bucketed exercise completions.
pub const EXERCISES_KEY: &str = "exercises";
/// Reserved record carried through export/import untouched.
pub const PROGRESS_KEY: &str = "progress";

/// One mood/anxiety journal entry. Immutable once appended; insertion
/// order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    /// 0..=10 anxiety scale.
    pub anxiety_level: u8,
    /// 0..=5 stars; 0 means no stars selected.
    #[serde(default)]
    pub sleep_rating: u8,
    /// 0..=5 stars; 0 means no stars selected.
    #[serde(default)]
    pub energy_rating: u8,
    #[serde(default)]
    pub notes: String,
}

/// One finished exercise session. The recorded duration is always the
/// originally planned duration, not wall-clock elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCompletion {
    pub exercise: String,
    pub completed_at: DateTime<Utc>,
    pub duration_secs: u32,
}

/// Completions grouped by UTC calendar day.
pub type DayBuckets = BTreeMap<NaiveDate, Vec<ExerciseCompletion>>;

/// The UTC day bucket an instant belongs to.
pub fn day_key(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Owned record context: journal, completions, and the backing store.
///
/// Constructed at session start; all reads for progress aggregation go
/// through the in-memory sequences.
pub struct RecordStore {
    store: Box<dyn Storage>,
    journal: Vec<JournalEntry>,
    completions: DayBuckets,
    progress: serde_json::Value,
    diagnostics: Vec<StorageError>,
}

impl RecordStore {
    /// Open the on-disk store, degrading to in-memory-only operation if
    /// the database cannot be opened. Never fails.
    pub fn open() -> Self {
        match SqliteStore::open() {
            Ok(store) => Self::with_storage(Box::new(store)),
            Err(e) => {
                let mut records = Self::with_storage(Box::new(MemoryStore::new()));
                records.diagnostics.push(e);
                records
            }
        }
    }

    /// A store with no persistence at all.
    pub fn in_memory() -> Self {
        Self::with_storage(Box::new(MemoryStore::new()))
    }

    /// Load the three named records from `store`. Absent or corrupt
    /// payloads fall back to empty; corruption is kept as a diagnostic.
    pub fn with_storage(store: Box<dyn Storage>) -> Self {
        let mut records = Self {
            store,
            journal: Vec::new(),
            completions: DayBuckets::new(),
            progress: serde_json::Value::Object(Default::default()),
            diagnostics: Vec::new(),
        };
        records.journal = records.load_or_default(JOURNAL_KEY);
        records.completions = records.load_or_default(EXERCISES_KEY);
        if let Some(progress) = records.load_value(PROGRESS_KEY) {
            records.progress = progress;
        }
        records
    }

    fn load_value(&mut self, key: &str) -> Option<serde_json::Value> {
        match self.store.read_named(key) {
            Ok(value) => value,
            Err(e) => {
                self.diagnostics.push(e);
                None
            }
        }
    }

    fn load_or_default<T: Default + serde::de::DeserializeOwned>(&mut self, key: &str) -> T {
        let Some(value) = self.load_value(key) else {
            return T::default();
        };
        match serde_json::from_value(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                self.diagnostics.push(StorageError::Corrupt {
                    key: key.to_string(),
                    message: e.to_string(),
                });
                T::default()
            }
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn completions(&self) -> &DayBuckets {
        &self.completions
    }

    pub fn progress_record(&self) -> &serde_json::Value {
        &self.progress
    }

    /// Drain accumulated storage diagnostics for reporting.
    pub fn take_diagnostics(&mut self) -> Vec<StorageError> {
        std::mem::take(&mut self.diagnostics)
    }

    // ── Appends ──────────────────────────────────────────────────────

    /// Append a journal entry and write the journal record through.
    ///
    /// # Errors
    ///
    /// `InvalidRating` if anxiety exceeds 10 or a star rating exceeds 5.
    /// The journal is left unmodified on failure.
    pub fn append_journal_entry(&mut self, entry: JournalEntry) -> Result<(), RecordError> {
        if entry.anxiety_level > 10 {
            return Err(RecordError::InvalidRating {
                field: "anxiety_level",
                value: entry.anxiety_level,
                max: 10,
            });
        }
        if entry.sleep_rating > 5 {
            return Err(RecordError::InvalidRating {
                field: "sleep_rating",
                value: entry.sleep_rating,
                max: 5,
            });
        }
        if entry.energy_rating > 5 {
            return Err(RecordError::InvalidRating {
                field: "energy_rating",
                value: entry.energy_rating,
                max: 5,
            });
        }
        self.journal.push(entry);
        self.persist(JOURNAL_KEY);
        Ok(())
    }

    /// Append a completion to its UTC day bucket, creating the bucket
    /// if absent, and write the completions record through.
    ///
    /// # Errors
    ///
    /// `InvalidDuration` if the duration is zero. No bucket is touched
    /// on failure.
    pub fn append_exercise_completion(
        &mut self,
        completion: ExerciseCompletion,
    ) -> Result<(), RecordError> {
        if completion.duration_secs == 0 {
            return Err(RecordError::InvalidDuration {
                duration_secs: completion.duration_secs,
            });
        }
        let day = day_key(completion.completed_at);
        self.completions.entry(day).or_default().push(completion);
        self.persist(EXERCISES_KEY);
        Ok(())
    }

    /// Replace the full dataset (export/import path) and persist all
    /// three records.
    pub(crate) fn replace(
        &mut self,
        journal: Vec<JournalEntry>,
        completions: DayBuckets,
        progress: serde_json::Value,
    ) {
        self.journal = journal;
        self.completions = completions;
        self.progress = progress;
        self.persist(JOURNAL_KEY);
        self.persist(EXERCISES_KEY);
        self.persist(PROGRESS_KEY);
    }

    /// Best-effort write-through of one named record.
    fn persist(&mut self, key: &str) {
        let encoded = match key {
            JOURNAL_KEY => serde_json::to_value(&self.journal),
            EXERCISES_KEY => serde_json::to_value(&self.completions),
            _ => Ok(self.progress.clone()),
        };
        let value = match encoded {
            Ok(value) => value,
            Err(e) => {
                self.diagnostics.push(StorageError::Unavailable {
                    key: key.to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };
        if let Err(e) = self.store.write_named(key, &value) {
            self.diagnostics.push(e);
        }
    }
}
