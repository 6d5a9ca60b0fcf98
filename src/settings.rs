//! Game content and tuning
//!
//! Everything that shapes a run but is not part of the rules: how many lives,
//! who the enemies are and which row they crawl along, which avatars can be
//! picked. Loaded from JSON; missing fields fall back to the defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Player;

/// Settings could not be loaded
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// One enemy in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub name: String,
    /// y of the row the enemy crawls along
    pub row_y: f32,
}

impl EnemySpawn {
    pub fn new(name: &str, row_y: f32) -> Self {
        Self {
            name: name.to_string(),
            row_y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of every run
    pub starting_lives: u8,
    pub player_spawn: Vec2,
    pub bridge_start: Vec2,
    pub enemies: Vec<EnemySpawn>,
    /// Avatar sprites the player can be drawn with
    pub avatars: Vec<String>,
    pub enemy_sprite: String,
    pub bridge_sprite: String,
    /// Pick a new random avatar on reset when none is requested
    pub reshuffle_avatar_on_reset: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            player_spawn: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            bridge_start: Vec2::new(BRIDGE_START_X, BRIDGE_START_Y),
            enemies: vec![
                EnemySpawn::new("Erwin", 60.0),
                EnemySpawn::new("Kevin", 143.0),
                EnemySpawn::new("Alfons", 226.0),
                EnemySpawn::new("Dieter", 60.0),
                EnemySpawn::new("Agnes", 226.0),
            ],
            avatars: [
                "images/char-boy.png",
                "images/char-cat-girl.png",
                "images/char-horn-girl.png",
                "images/char-pink-girl.png",
                "images/char-princess-girl.png",
            ]
            .map(String::from)
            .to_vec(),
            enemy_sprite: "images/enemy-bug.png".to_string(),
            bridge_sprite: "images/Rock.png".to_string(),
            reshuffle_avatar_on_reset: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.avatars.is_empty() {
            return Err(SettingsError::Invalid("at least one avatar is required".into()));
        }
        if !self.player_spawn.is_finite() || !Player::in_bounds(self.player_spawn) {
            return Err(SettingsError::Invalid(format!(
                "player_spawn {} is outside the playable area",
                self.player_spawn
            )));
        }
        if !self.bridge_start.is_finite() {
            return Err(SettingsError::Invalid("bridge_start must be finite".into()));
        }
        if let Some(bad) = self.enemies.iter().find(|e| !e.row_y.is_finite()) {
            return Err(SettingsError::Invalid(format!("enemy {} has no valid row", bad.name)));
        }
        Ok(())
    }
}
