use chrono::Utc;
use clap::Subcommand;
use std::path::PathBuf;

use serenite_core::{ExportDocument, RecordStore};

#[derive(Subcommand)]
pub enum DataAction {
    /// Write the full backup document as JSON
    Export {
        /// Destination file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore the record store from a backup document
    Import {
        /// Backup file produced by `data export`
        file: PathBuf,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = RecordStore::open();
    super::report_diagnostics(&mut records);

    match action {
        DataAction::Export { output } => {
            let document = records.export(Utc::now());
            let json = serde_json::to_string_pretty(&document)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    eprintln!("exported to {}", path.display());
                }
                None => println!("{json}"),
            }
        }
        DataAction::Import { file } => {
            let json = std::fs::read_to_string(&file)?;
            let document: ExportDocument = serde_json::from_str(&json)?;
            let journal_count = document.journal_data.len();
            let day_count = document.exercise_data.len();
            records.import(document);
            super::report_diagnostics(&mut records);
            eprintln!("imported {journal_count} journal entries, {day_count} day buckets");
        }
    }
    Ok(())
}
