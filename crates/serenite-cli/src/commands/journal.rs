use chrono::Utc;
use clap::Subcommand;
use serenite_core::{JournalEntry, RecordStore};

#[derive(Subcommand)]
pub enum JournalAction {
    /// Append a journal entry
    Add {
        /// Anxiety level, 0-10
        #[arg(long)]
        anxiety: u8,
        /// Sleep rating, 0-5 stars (0 = none selected)
        #[arg(long, default_value = "0")]
        sleep: u8,
        /// Energy rating, 0-5 stars (0 = none selected)
        #[arg(long, default_value = "0")]
        energy: u8,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Print journal entries as JSON, oldest first
    List {
        /// Only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: JournalAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = RecordStore::open();
    super::report_diagnostics(&mut records);

    match action {
        JournalAction::Add {
            anxiety,
            sleep,
            energy,
            notes,
        } => {
            let entry = JournalEntry {
                timestamp: Utc::now(),
                anxiety_level: anxiety,
                sleep_rating: sleep,
                energy_rating: energy,
                notes,
            };
            records.append_journal_entry(entry.clone())?;
            super::report_diagnostics(&mut records);
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        JournalAction::List { limit } => {
            let journal = records.journal();
            let skip = limit.map_or(0, |n| journal.len().saturating_sub(n));
            println!("{}", serde_json::to_string_pretty(&journal[skip..])?);
        }
    }
    Ok(())
}
