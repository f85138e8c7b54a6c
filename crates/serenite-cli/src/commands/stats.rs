use chrono::Utc;
use clap::Subcommand;
use serenite_core::{stats, RecordStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Weekly completions, current streak, weekly average anxiety
    Show,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = RecordStore::open();
    super::report_diagnostics(&mut records);

    match action {
        StatsAction::Show => {
            let snapshot = stats::snapshot(&records, Utc::now().date_naive());
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
