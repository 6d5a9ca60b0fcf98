//! Game phase transitions
//!
//! ```text
//! Playing --bridge reached--> Success
//! Playing --last life lost--> GameOver
//! Playing --life lost-------> Playing   (Death event only)
//! any     --reset-----------> Playing
//! ```
//!
//! Lives, death causes and phase are only written from here.

use super::entity::{Player, Sprite};
use super::events::GameEvent;
use super::state::{GamePhase, GameState, pick_avatar};
use crate::settings::Settings;

impl GameState {
    fn set_phase(&mut self, phase: GamePhase, events: &mut Vec<GameEvent>) {
        if self.phase == phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        events.push(GameEvent::PhaseChanged { phase });
    }

    /// The player died to `cause`: respawn, lose a life, maybe end the run
    pub fn record_death(&mut self, cause: &str, events: &mut Vec<GameEvent>) {
        log::debug!("Killed by {cause} at {}", self.player.body.pos);
        self.death_causes.push(cause.to_string());
        self.player.reset_position();
        events.push(GameEvent::Death {
            cause: cause.to_string(),
        });

        self.lives = self.lives.saturating_sub(1);
        events.push(GameEvent::LivesChanged {
            remaining: self.lives,
        });

        if self.lives == 0 {
            self.timer.stop();
            self.set_phase(GamePhase::GameOver, events);
        }
    }

    /// The player made it onto the bridge
    pub fn record_crossing(&mut self, events: &mut Vec<GameEvent>) {
        self.timer.stop();
        self.set_phase(GamePhase::Success, events);
    }

    /// Start over: full lives, no death causes, player at spawn, timer at zero.
    ///
    /// `avatar` replaces the current avatar. Without one the avatar is kept,
    /// or redrawn when `settings.reshuffle_avatar_on_reset` is set. Enemies
    /// and the bridge keep moving where they are.
    pub fn reset(&mut self, settings: &Settings, avatar: Option<Sprite>, events: &mut Vec<GameEvent>) {
        self.avatar = match avatar {
            Some(avatar) => avatar,
            None if settings.reshuffle_avatar_on_reset => pick_avatar(&mut self.rng, &settings.avatars),
            None => self.avatar.clone(),
        };
        self.player = Player::new(settings.player_spawn, self.avatar.clone());

        self.lives = settings.starting_lives;
        self.death_causes.clear();
        self.timer.start();

        log::info!("Reset as {} with {} lives", self.avatar.as_str(), self.lives);

        self.set_phase(GamePhase::Playing, events);
        events.push(GameEvent::LivesChanged {
            remaining: self.lives,
        });
        // Reported even when the phase was already Playing
        events.push(GameEvent::Reset);
    }
}
