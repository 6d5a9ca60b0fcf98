//! River Crossing - dodge the bugs, catch the bridge
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game phases)
//! - `session`: Host-facing game loop API (step, input, reset, events)
//! - `settings`: Data-driven game content (lives, rosters, spawn points)
//! - `summary`: Result panel formatting (play time, death causes)

pub mod session;
pub mod settings;
pub mod sim;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use session::GameSession;
pub use settings::{EnemySpawn, Settings, SettingsError};
pub use summary::{RunSummary, format_death_causes, format_play_time};

/// Game configuration constants
pub mod consts {
    /// Horizontal size of one grid cell (one player step left/right)
    pub const CELL_WIDTH: f32 = 101.0;
    /// Vertical size of one grid cell (one player step up/down)
    pub const CELL_HEIGHT: f32 = 83.0;

    /// Player hitbox
    pub const PLAYER_WIDTH: f32 = 67.0;
    pub const PLAYER_HEIGHT: f32 = 76.0;
    /// Default player spawn
    pub const PLAYER_START_X: f32 = 202.0;
    pub const PLAYER_START_Y: f32 = 404.0;

    /// Playable area for the player's top-left corner (inclusive)
    pub const PLAYER_MIN_X: f32 = -2.0;
    pub const PLAYER_MAX_X: f32 = 500.0;
    pub const PLAYER_MIN_Y: f32 = -15.0;
    pub const PLAYER_MAX_Y: f32 = 404.0;

    /// Enemies past this x re-enter from the left
    pub const ENEMY_WRAP_X: f32 = 500.0;
    /// Re-entry offset range [-500, 0)
    pub const ENEMY_REENTRY_MIN_X: f32 = -500.0;
    /// Enemy speed range [50, 150) in units/s
    pub const ENEMY_MIN_SPEED: f32 = 50.0;
    pub const ENEMY_MAX_SPEED: f32 = 150.0;
    /// Enemy hitbox shrink when checking the player (forgiving bites)
    pub const ENEMY_TOLERANCE: f32 = 30.0;

    /// Bridge speed (moves left) in units/s
    pub const BRIDGE_SPEED: f32 = 50.0;
    /// Bridge past this x jumps back to the right edge
    pub const BRIDGE_WRAP_X: f32 = -100.0;
    pub const BRIDGE_REENTRY_X: f32 = 550.0;
    pub const BRIDGE_START_X: f32 = 0.0;
    pub const BRIDGE_START_Y: f32 = -20.0;

    /// Player y below this value is over the water
    pub const WATER_LINE_Y: f32 = 0.0;
    /// Death cause recorded for drowning
    pub const WATER_CAUSE: &str = "the water";

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
}
