//! Progress aggregation over journal and completion records.
//!
//! Every figure here is derived on demand from the raw records and
//! never persisted. Callers pass `today` explicitly, so the aggregates
//! are deterministic under test; production callers pass
//! `Utc::now().date_naive()`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::records::RecordStore;

/// Derived weekly/streak figures. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProgressSnapshot {
    pub completed_this_week: u32,
    pub current_streak_days: u32,
    /// One fractional digit, 0.0 when the week has no journal entries.
    pub average_anxiety_this_week: f64,
}

/// The 7 calendar dates of the Monday-first week containing `reference`.
pub fn week_dates(reference: NaiveDate) -> [NaiveDate; 7] {
    let dow = i64::from(reference.weekday().num_days_from_sunday());
    let offset = if dow == 0 { -6 } else { 1 - dow };
    std::array::from_fn(|i| reference + Duration::days(offset + i as i64))
}

/// Number of completions falling on any day of the current week.
pub fn completed_this_week(records: &RecordStore, today: NaiveDate) -> u32 {
    let week = week_dates(today);
    week.iter()
        .filter_map(|day| records.completions().get(day))
        .map(|bucket| bucket.len() as u32)
        .sum()
}

/// Count of consecutive days with at least one completion, ending
/// today.
///
/// Walks the distinct bucket dates newest-first against the expected
/// date `today - i` and stops at the first mismatch. A mismatch at
/// i = 0 (no completion today) yields 0 even if yesterday has activity;
/// this matches the app's historical behavior and is deliberate.
pub fn current_streak(records: &RecordStore, today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = records
        .completions()
        .iter()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(day, _)| *day)
        .collect();
    days.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 0;
    for (i, day) in days.iter().enumerate() {
        let expected = today - Duration::days(i as i64);
        if *day == expected {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Mean anxiety level over this week's journal entries, rounded
/// half-up to one decimal. 0.0 when the week is empty.
pub fn average_anxiety_this_week(records: &RecordStore, today: NaiveDate) -> f64 {
    let week = week_dates(today);
    let levels: Vec<f64> = records
        .journal()
        .iter()
        .filter(|entry| week.contains(&entry.timestamp.date_naive()))
        .map(|entry| f64::from(entry.anxiety_level))
        .collect();
    if levels.is_empty() {
        return 0.0;
    }
    let mean = levels.iter().sum::<f64>() / levels.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Compute the full derived snapshot.
pub fn snapshot(records: &RecordStore, today: NaiveDate) -> ProgressSnapshot {
    ProgressSnapshot {
        completed_this_week: completed_this_week(records, today),
        current_streak_days: current_streak(records, today),
        average_anxiety_this_week: average_anxiety_this_week(records, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ExerciseCompletion, JournalEntry};
    use chrono::{TimeZone, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn complete_on(records: &mut RecordStore, day: NaiveDate) {
        records
            .append_exercise_completion(ExerciseCompletion {
                exercise: "breathing".into(),
                completed_at: Utc
                    .with_ymd_and_hms(day.year(), day.month(), day.day(), 12, 0, 0)
                    .unwrap(),
                duration_secs: 300,
            })
            .unwrap();
    }

    fn journal_on(records: &mut RecordStore, day: NaiveDate, anxiety: u8) {
        records
            .append_journal_entry(JournalEntry {
                timestamp: Utc
                    .with_ymd_and_hms(day.year(), day.month(), day.day(), 9, 0, 0)
                    .unwrap(),
                anxiety_level: anxiety,
                sleep_rating: 0,
                energy_rating: 0,
                notes: String::new(),
            })
            .unwrap();
    }

    #[test]
    fn week_starts_on_monday() {
        // 2025-06-11 is a Wednesday.
        let week = week_dates(date(2025, 6, 11));
        assert_eq!(week[0], date(2025, 6, 9));
        assert_eq!(week[6], date(2025, 6, 15));
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday_week() {
        let week = week_dates(date(2025, 6, 15));
        assert_eq!(week[0], date(2025, 6, 9));
        assert_eq!(week[6], date(2025, 6, 15));
    }

    #[test]
    fn completed_this_week_ignores_other_weeks() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        complete_on(&mut records, date(2025, 6, 9));
        complete_on(&mut records, date(2025, 6, 9));
        complete_on(&mut records, date(2025, 6, 11));
        complete_on(&mut records, date(2025, 6, 8)); // previous week's Sunday
        assert_eq!(completed_this_week(&records, today), 3);
    }

    #[test]
    fn streak_is_zero_on_empty_store() {
        let records = RecordStore::in_memory();
        assert_eq!(current_streak(&records, date(2025, 6, 11)), 0);
    }

    #[test]
    fn streak_counts_consecutive_days_ending_today() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        complete_on(&mut records, today);
        complete_on(&mut records, date(2025, 6, 10));
        assert_eq!(current_streak(&records, today), 2);
    }

    #[test]
    fn streak_stops_at_the_first_gap() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        complete_on(&mut records, today);
        complete_on(&mut records, date(2025, 6, 9)); // gap on the 10th
        assert_eq!(current_streak(&records, today), 1);
    }

    #[test]
    fn streak_requires_activity_today() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        complete_on(&mut records, date(2025, 6, 10));
        assert_eq!(current_streak(&records, today), 0);
    }

    #[test]
    fn average_anxiety_over_the_week() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        journal_on(&mut records, date(2025, 6, 9), 4);
        journal_on(&mut records, date(2025, 6, 11), 6);
        journal_on(&mut records, date(2025, 6, 2), 10); // previous week
        assert_eq!(average_anxiety_this_week(&records, today), 5.0);
    }

    #[test]
    fn average_is_zero_without_entries() {
        let records = RecordStore::in_memory();
        assert_eq!(average_anxiety_this_week(&records, date(2025, 6, 11)), 0.0);
    }

    #[test]
    fn average_rounds_half_up_to_one_decimal() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        for anxiety in [4, 4, 4, 5] {
            journal_on(&mut records, today, anxiety);
        }
        // 17 / 4 = 4.25 -> 4.3
        assert_eq!(average_anxiety_this_week(&records, today), 4.3);
    }

    #[test]
    fn snapshot_combines_all_figures() {
        let mut records = RecordStore::in_memory();
        let today = date(2025, 6, 11);
        complete_on(&mut records, today);
        journal_on(&mut records, today, 7);
        let snap = snapshot(&records, today);
        assert_eq!(snap.completed_this_week, 1);
        assert_eq!(snap.current_streak_days, 1);
        assert_eq!(snap.average_anxiety_this_week, 7.0);
    }
}
