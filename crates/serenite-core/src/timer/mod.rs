mod engine;

pub use engine::{SessionTimer, TimerSession, TimerState, RING_CIRCUMFERENCE};
