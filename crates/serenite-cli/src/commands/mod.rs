pub mod config;
pub mod data;
pub mod exercise;
pub mod journal;
pub mod stats;
pub mod timer;

use serenite_core::RecordStore;

/// Print any storage diagnostics to stderr. Persistence failures are
/// non-fatal; the in-memory model stays authoritative.
pub(crate) fn report_diagnostics(records: &mut RecordStore) {
    for diag in records.take_diagnostics() {
        eprintln!("warning: {diag}");
    }
}
