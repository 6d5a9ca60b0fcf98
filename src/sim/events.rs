//! Notifications from the simulation to the presentation layer
//!
//! The core never touches the UI. It queues `GameEvent`s; the host drains
//! them each frame and either matches on them directly or hands them to a
//! `Presenter`.

use serde::{Deserialize, Serialize};

use super::state::GamePhase;

/// Something the presentation layer may want to show
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A life was lost to an enemy (by name) or to "the water"
    Death { cause: String },
    LivesChanged { remaining: u8 },
    PhaseChanged { phase: GamePhase },
    /// Once per second of play
    Tick { elapsed_secs: u32 },
    /// State was fully reinitialized
    Reset,
}

impl GameEvent {
    /// Route this event to the matching presenter callback
    pub fn dispatch(&self, presenter: &mut dyn Presenter) {
        match self {
            GameEvent::Death { cause } => presenter.on_death(cause),
            GameEvent::LivesChanged { remaining } => presenter.on_lives_changed(*remaining),
            GameEvent::PhaseChanged { phase } => presenter.on_phase_changed(*phase),
            GameEvent::Tick { elapsed_secs } => presenter.on_tick(*elapsed_secs),
            GameEvent::Reset => presenter.on_reset(),
        }
    }
}

/// Callbacks for a UI adapter. Every method defaults to a no-op.
pub trait Presenter {
    fn on_death(&mut self, _cause: &str) {}
    fn on_lives_changed(&mut self, _remaining: u8) {}
    fn on_phase_changed(&mut self, _phase: GamePhase) {}
    fn on_tick(&mut self, _elapsed_secs: u32) {}
    fn on_reset(&mut self) {}
}

/// Text for the kill banner
pub fn death_message(cause: &str) -> String {
    format!("You were killed by {cause}")
}
