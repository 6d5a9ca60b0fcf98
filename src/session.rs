//! Host-facing game API
//!
//! `GameSession` is what a UI adapter talks to. The frame clock calls
//! `step`, a separate one-second interval calls `on_second`, and input or
//! button handlers call `submit_input` / `request_reset`. Everything the UI
//! needs to show comes back as queued `GameEvent`s.

use crate::settings::{Settings, SettingsError};
use crate::sim::{
    Direction, GameEvent, GamePhase, GameState, PlayerOutcome, Presenter, Sprite, submit_input,
    tick,
};
use crate::summary::RunSummary;

pub struct GameSession {
    settings: Settings,
    state: GameState,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Start a new run. The play timer starts right away.
    ///
    /// Settings are validated first; a run never starts without lives or
    /// avatars.
    pub fn new(seed: u64, settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = GameState::new(seed, &settings);
        let events = vec![
            GameEvent::LivesChanged {
                remaining: state.lives,
            },
            GameEvent::PhaseChanged { phase: state.phase },
        ];
        Ok(Self {
            settings,
            state,
            events,
        })
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self, dt: f32) -> PlayerOutcome {
        tick(&mut self.state, dt, &mut self.events)
    }

    /// Called by the one-second interval
    pub fn on_second(&mut self) {
        if let Some(elapsed_secs) = self.state.timer.tick_second() {
            self.events.push(GameEvent::Tick { elapsed_secs });
        }
    }

    /// Move the player one cell. Returns true if the player moved.
    pub fn submit_input(&mut self, dir: Option<Direction>) -> bool {
        submit_input(&mut self.state, dir)
    }

    /// Restart the run, optionally with a newly picked avatar
    pub fn request_reset(&mut self, avatar: Option<Sprite>) {
        self.state.reset(&self.settings, avatar, &mut self.events);
    }

    /// Stop the play timer (e.g. when the page is hidden). No-op if stopped.
    pub fn stop_timer(&mut self) {
        self.state.timer.stop();
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver all queued events to `presenter`
    pub fn flush(&mut self, presenter: &mut dyn Presenter) {
        for event in self.drain_events() {
            event.dispatch(presenter);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from_state(&self.state)
    }
}
