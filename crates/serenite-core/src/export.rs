//! Full-fidelity backup document.
//!
//! The export is a single JSON object with the wire field names the
//! app has always used (`journalData`, `exerciseData`, `progressData`,
//! `exportDate`). Importing a document reconstructs the record store
//! exactly: journal order preserved, every day bucket intact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{DayBuckets, JournalEntry, RecordStore};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub journal_data: Vec<JournalEntry>,
    pub exercise_data: DayBuckets,
    /// Reserved record, carried through untouched.
    #[serde(default)]
    pub progress_data: serde_json::Value,
    pub export_date: DateTime<Utc>,
}

impl RecordStore {
    /// Produce the backup document, stamped with `now`.
    pub fn export(&self, now: DateTime<Utc>) -> ExportDocument {
        ExportDocument {
            journal_data: self.journal().to_vec(),
            exercise_data: self.completions().clone(),
            progress_data: self.progress_record().clone(),
            export_date: now,
        }
    }

    /// Replace the full dataset from a backup document and persist it.
    pub fn import(&mut self, document: ExportDocument) {
        self.replace(
            document.journal_data,
            document.exercise_data,
            document.progress_data,
        );
    }
}
