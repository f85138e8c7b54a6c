use clap::{Subcommand, ValueEnum};
use serenite_core::Config;

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Set the UI theme
    Theme {
        #[arg(value_enum)]
        mode: ThemeMode,
    },
    /// Set the default exercise duration in seconds
    DefaultDuration { seconds: u32 },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let cfg = Config::load()?;
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Theme { mode } => {
            let mut cfg = Config::load()?;
            cfg.ui.dark_mode = matches!(mode, ThemeMode::Dark);
            cfg.save()?;
        }
        ConfigAction::DefaultDuration { seconds } => {
            let mut cfg = Config::load()?;
            cfg.exercise.default_duration_secs = seconds;
            cfg.save()?;
        }
    }
    Ok(())
}
