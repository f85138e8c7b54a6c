use clap::Subcommand;
use serenite_core::catalog;

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List all exercises
    List,
    /// Show one exercise with its instructions
    Show {
        /// Exercise id (unknown ids fall back to deep breathing)
        id: String,
    },
}

pub fn run(action: ExerciseAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ExerciseAction::List => {
            for entry in catalog::entries() {
                println!("{:<20} {}", entry.id, entry.title);
            }
        }
        ExerciseAction::Show { id } => {
            let entry = catalog::get(&id);
            println!("{} ({})", entry.title, entry.id);
            for (i, instruction) in entry.instructions.iter().enumerate() {
                println!("  {}. {instruction}", i + 1);
            }
        }
    }
    Ok(())
}
