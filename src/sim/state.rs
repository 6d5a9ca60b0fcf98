//! Game state and core simulation types
//!
//! One `GameState` holds everything a run mutates: entities, lives, death
//! causes, phase, timer and the RNG. It is created at game start and
//! reinitialized in place by a reset.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Bridge, Enemy, EntityRef, Player, Sprite};
use super::timer::PlayTimer;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Dodging bugs, trying to reach the bridge
    Playing,
    /// Made it across; waits for a reset
    Success,
    /// Out of lives; waits for a reset
    GameOver,
}

/// Pick a random avatar from the roster
pub(crate) fn pick_avatar(rng: &mut Pcg32, avatars: &[String]) -> Sprite {
    avatars
        .choose(rng)
        .map(|path| Sprite::new(path.as_str()))
        .unwrap_or_else(|| Sprite::new(""))
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// All randomness (enemy speeds, re-entry, avatars) comes from here
    pub(crate) rng: Pcg32,
    pub lives: u8,
    /// Who killed the player, in order, since the last reset
    pub death_causes: Vec<String>,
    pub phase: GamePhase,
    /// Currently selected avatar
    pub avatar: Sprite,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bridge: Bridge,
    pub timer: PlayTimer,
    /// Simulation steps since creation
    pub frame: u64,
}

impl GameState {
    /// Create a new game state with the given seed. The timer starts at once.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemy_sprite = Sprite::new(settings.enemy_sprite.as_str());
        let enemies = settings
            .enemies
            .iter()
            .map(|spawn| Enemy::spawn(spawn.name.as_str(), spawn.row_y, enemy_sprite.clone(), &mut rng))
            .collect();
        let avatar = pick_avatar(&mut rng, &settings.avatars);

        let mut timer = PlayTimer::default();
        timer.start();

        log::info!("New game (seed {seed}) as {}", avatar.as_str());

        Self {
            seed,
            rng,
            lives: settings.starting_lives,
            death_causes: Vec::new(),
            phase: GamePhase::Playing,
            player: Player::new(settings.player_spawn, avatar.clone()),
            avatar,
            enemies,
            bridge: Bridge::new(settings.bridge_start, Sprite::new(settings.bridge_sprite.as_str())),
            timer,
            frame: 0,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.timer.elapsed_secs()
    }

    pub fn player_pos(&self) -> Vec2 {
        self.player.body.pos
    }

    /// All entities in draw order: bridge, enemies, then the player on top
    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        std::iter::once(EntityRef::Bridge(&self.bridge))
            .chain(self.enemies.iter().map(EntityRef::Enemy))
            .chain(std::iter::once(EntityRef::Player(&self.player)))
    }
}
