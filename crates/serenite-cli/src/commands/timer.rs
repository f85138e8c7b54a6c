use clap::Subcommand;
use chrono::Utc;
use serenite_core::storage::{Config, SqliteStore, Storage};
use serenite_core::{catalog, Event, ExerciseCompletion, RecordStore, SessionTimer};

const TIMER_KEY: &str = "session_timer";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Create a session for an exercise
    Arm {
        /// Exercise id (see `exercise list`)
        exercise: String,
        /// Planned duration in seconds (defaults from config)
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Abort the session without recording a completion
    Stop,
    /// Advance the countdown by simulated seconds
    Tick {
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Print current timer state as JSON
    Status,
}

fn load_timer(store: &SqliteStore) -> SessionTimer {
    if let Ok(Some(value)) = store.read_named(TIMER_KEY) {
        if let Ok(timer) = serde_json::from_value(value) {
            return timer;
        }
    }
    SessionTimer::new()
}

fn save_timer(
    store: &mut SqliteStore,
    timer: &SessionTimer,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = serde_json::to_value(timer)?;
    store.write_named(TIMER_KEY, &value)?;
    Ok(())
}

fn print_event(event: &Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(event)?);
    Ok(())
}

/// Collaborator duty on natural completion: record the planned duration
/// and return the engine to idle.
fn record_completion(
    timer: &mut SessionTimer,
    exercise: &str,
    total_duration_secs: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = RecordStore::open();
    records.append_exercise_completion(ExerciseCompletion {
        exercise: exercise.to_string(),
        completed_at: Utc::now(),
        duration_secs: total_duration_secs,
    })?;
    super::report_diagnostics(&mut records);
    timer.stop();
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SqliteStore::open()?;
    let mut timer = load_timer(&store);

    match action {
        TimerAction::Arm { exercise, duration } => {
            let duration = duration
                .unwrap_or_else(|| Config::load_or_default().exercise.default_duration_secs);
            let event = timer.arm(&exercise, duration)?;
            let entry = catalog::get(&exercise);
            eprintln!("{}", entry.title);
            for (i, instruction) in entry.instructions.iter().enumerate() {
                eprintln!("  {}. {instruction}", i + 1);
            }
            print_event(&event)?;
        }
        TimerAction::Start => {
            if let Some(event) = timer.start() {
                print_event(&event)?;
            } else {
                print_event(&timer.snapshot())?;
            }
        }
        TimerAction::Pause => {
            if let Some(event) = timer.pause() {
                print_event(&event)?;
            } else {
                print_event(&timer.snapshot())?;
            }
        }
        TimerAction::Stop => {
            if let Some(event) = timer.stop() {
                print_event(&event)?;
            } else {
                print_event(&timer.snapshot())?;
            }
        }
        TimerAction::Tick { count } => {
            for _ in 0..count {
                let Some(event) = timer.tick() else { break };
                print_event(&event)?;
                if let Event::TimerCompleted {
                    ref exercise,
                    total_duration_secs,
                    ..
                } = event
                {
                    record_completion(&mut timer, exercise, total_duration_secs)?;
                    break;
                }
            }
        }
        TimerAction::Status => {
            print_event(&timer.snapshot())?;
        }
    }

    save_timer(&mut store, &timer)?;
    Ok(())
}
