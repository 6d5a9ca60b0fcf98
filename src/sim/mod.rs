//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (roster order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod events;
pub mod phase;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{Tolerance, first_collision, overlaps};
pub use entity::{Body, Bounded, Bridge, Direction, Enemy, EntityRef, Player, Sprite};
pub use events::{GameEvent, Presenter, death_message};
pub use state::{GamePhase, GameState};
pub use tick::{PlayerOutcome, evaluate_player, sanitize_dt, submit_input, tick};
pub use timer::PlayTimer;
