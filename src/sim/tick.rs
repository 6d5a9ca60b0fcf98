//! Per-frame simulation step
//!
//! Moves every entity by the frame's measured delta, then decides what
//! happened to the player. Frame deltas come from the wall clock and are
//! not fixed, so any non-negative `dt` has to work.

use super::collision::{Tolerance, first_collision};
use super::entity::Direction;
use super::events::GameEvent;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Enemy bites only count once the boxes overlap by this much
const ENEMY_HIT_TOLERANCE: Tolerance = Tolerance::new(ENEMY_TOLERANCE, ENEMY_TOLERANCE);

/// What happened to the player this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerOutcome {
    /// Nothing (or the run is not in progress)
    Safe,
    /// Lost a life to an enemy or the water
    Killed { cause: String },
    /// Reached the bridge
    Crossed,
}

/// Clamp a frame delta to something the simulation can use.
///
/// Negative and non-finite deltas are a caller bug; they become zero.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame delta {dt}");
        0.0
    }
}

/// Decide the player's fate from the current positions.
///
/// Enemies are checked first so a player can't drown and get bitten in the
/// same frame. The water check uses the position the player is already at,
/// and the bridge needs an exact overlap (no tolerance).
pub fn evaluate_player(state: &GameState) -> PlayerOutcome {
    let player = &state.player.body;

    if let Some(enemy) = first_collision(player, &state.enemies, ENEMY_HIT_TOLERANCE) {
        return PlayerOutcome::Killed {
            cause: enemy.name.clone(),
        };
    }

    if state.player.above_water() {
        let on_bridge = first_collision(player, std::iter::once(&state.bridge), Tolerance::NONE).is_some();
        return if on_bridge {
            PlayerOutcome::Crossed
        } else {
            PlayerOutcome::Killed {
                cause: WATER_CAUSE.to_string(),
            }
        };
    }

    PlayerOutcome::Safe
}

/// Advance the game by one frame of `dt` seconds
///
/// Enemies and the bridge keep moving in every phase so the scene stays
/// alive behind the result panels; the player is only judged while Playing.
pub fn tick(state: &mut GameState, dt: f32, events: &mut Vec<GameEvent>) -> PlayerOutcome {
    let dt = sanitize_dt(dt);
    state.frame += 1;

    for enemy in &mut state.enemies {
        enemy.update(dt, &mut state.rng);
    }
    state.bridge.update(dt);

    if state.phase != GamePhase::Playing {
        return PlayerOutcome::Safe;
    }

    let outcome = evaluate_player(state);
    match &outcome {
        PlayerOutcome::Killed { cause } => state.record_death(cause, events),
        PlayerOutcome::Crossed => state.record_crossing(events),
        PlayerOutcome::Safe => {}
    }
    outcome
}

/// Apply one directional command. Ignored outside the Playing phase.
/// Returns true if the player moved.
pub fn submit_input(state: &mut GameState, dir: Option<Direction>) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    dir.is_some_and(|dir| state.player.handle_input(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::entity::{Body, Enemy, Sprite};
    use glam::Vec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    /// A game with the enemies and bridge parked out of the way
    fn quiet_state() -> GameState {
        let mut state = GameState::new(12345, &Settings::default());
        state.enemies.clear();
        state.bridge.body.pos = Vec2::new(BRIDGE_REENTRY_X, BRIDGE_START_Y);
        state
    }

    fn parked_enemy(name: &str, x: f32, y: f32) -> Enemy {
        Enemy {
            name: name.into(),
            body: Body::cell(Vec2::new(x, y)),
            speed: ENEMY_MIN_SPEED,
            sprite: Sprite::new("images/enemy-bug.png"),
        }
    }

    #[test]
    fn test_quiet_frame_is_safe() {
        let mut state = quiet_state();
        let mut events = Vec::new();
        assert_eq!(tick(&mut state, DT, &mut events), PlayerOutcome::Safe);
        assert!(events.is_empty());
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_enemy_bite() {
        let mut state = quiet_state();
        state.enemies.push(parked_enemy("Alfons", 202.0, 226.0));
        state.player.body.pos = Vec2::new(202.0, 226.0);
        let mut events = Vec::new();

        let outcome = tick(&mut state, 0.0, &mut events);

        assert_eq!(outcome, PlayerOutcome::Killed { cause: "Alfons".into() });
        assert_eq!(state.lives, 2);
        assert_eq!(state.player_pos(), Vec2::new(202.0, 404.0));
        assert_eq!(events[0], GameEvent::Death { cause: "Alfons".into() });
        assert_eq!(events[1], GameEvent::LivesChanged { remaining: 2 });
    }

    #[test]
    fn test_first_enemy_in_roster_gets_the_blame() {
        let mut state = quiet_state();
        state.enemies.push(parked_enemy("Dieter", 202.0, 226.0));
        state.enemies.push(parked_enemy("Agnes", 202.0, 226.0));
        state.player.body.pos = Vec2::new(202.0, 226.0);
        let outcome = tick(&mut state, 0.0, &mut Vec::new());
        assert_eq!(outcome, PlayerOutcome::Killed { cause: "Dieter".into() });
    }

    #[test]
    fn test_grazing_an_enemy_is_forgiven() {
        let mut state = quiet_state();
        // 20 units of horizontal overlap, less than the tolerance
        state.enemies.push(parked_enemy("Kevin", 202.0 - 101.0 + 20.0, 238.0));
        state.player.body.pos = Vec2::new(202.0, 238.0);
        assert_eq!(tick(&mut state, 0.0, &mut Vec::new()), PlayerOutcome::Safe);
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_reaching_the_bridge() {
        let mut state = quiet_state();
        state.bridge.body.pos = Vec2::new(202.0, BRIDGE_START_Y);
        state.player.body.pos = Vec2::new(202.0, -5.0);
        let mut events = Vec::new();

        let outcome = tick(&mut state, 0.0, &mut events);

        assert_eq!(outcome, PlayerOutcome::Crossed);
        assert_eq!(state.phase, GamePhase::Success);
        assert!(!state.timer.is_running());
        assert_eq!(state.lives, 3);
        assert_eq!(events, vec![GameEvent::PhaseChanged { phase: GamePhase::Success }]);
    }

    #[test]
    fn test_bridge_counts_any_overlap() {
        let mut state = quiet_state();
        // 20 units of horizontal overlap: too little for an enemy bite,
        // enough to stand on the bridge
        state.bridge.body.pos = Vec2::new(249.0, BRIDGE_START_Y);
        state.player.body.pos = Vec2::new(202.0, -11.0);
        let mut events = Vec::new();

        let outcome = tick(&mut state, 0.0, &mut events);

        assert_eq!(outcome, PlayerOutcome::Crossed);
        assert_eq!(state.phase, GamePhase::Success);
        assert_eq!(state.lives, 3);
        assert!(state.death_causes.is_empty());
    }

    #[test]
    fn test_missing_the_bridge_drowns() {
        let mut state = quiet_state();
        state.player.body.pos = Vec2::new(202.0, -11.0);
        let mut events = Vec::new();

        let outcome = tick(&mut state, DT, &mut events);

        assert_eq!(outcome, PlayerOutcome::Killed { cause: WATER_CAUSE.into() });
        assert_eq!(state.lives, 2);
        assert_eq!(state.death_causes, vec![WATER_CAUSE]);
        assert_eq!(state.player_pos(), state.player.spawn);
    }

    #[test]
    fn test_enemy_beats_water() {
        let mut state = quiet_state();
        state.bridge.body.pos = Vec2::new(202.0, BRIDGE_START_Y);
        state.enemies.push(parked_enemy("Erwin", 202.0, -11.0));
        state.player.body.pos = Vec2::new(202.0, -11.0);

        let outcome = tick(&mut state, 0.0, &mut Vec::new());

        assert_eq!(outcome, PlayerOutcome::Killed { cause: "Erwin".into() });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.death_causes.len(), 1);
    }

    #[test]
    fn test_last_life_lost_is_game_over() {
        let mut state = quiet_state();
        state.lives = 1;
        state.player.body.pos = Vec2::new(202.0, -11.0);
        let mut events = Vec::new();

        tick(&mut state, DT, &mut events);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.timer.is_running());
        assert_eq!(
            events.last(),
            Some(&GameEvent::PhaseChanged { phase: GamePhase::GameOver })
        );
    }

    #[test]
    fn test_world_keeps_moving_after_success() {
        let mut state = quiet_state();
        state.bridge.body.pos = Vec2::new(202.0, BRIDGE_START_Y);
        state.player.body.pos = Vec2::new(202.0, -5.0);
        tick(&mut state, 0.0, &mut Vec::new());
        assert_eq!(state.phase, GamePhase::Success);

        // The bridge drifts away from under the player, nobody drowns
        let mut events = Vec::new();
        for _ in 0..300 {
            assert_eq!(tick(&mut state, DT, &mut events), PlayerOutcome::Safe);
        }
        assert!(events.is_empty());
        assert_eq!(state.lives, 3);
        assert!(state.bridge.body.pos.x < 202.0);
    }

    #[test]
    fn test_negative_dt_is_clamped() {
        let mut state = GameState::new(1, &Settings::default());
        let before: Vec<f32> = state.enemies.iter().map(|e| e.body.pos.x).collect();
        let bridge_before = state.bridge.body.pos.x;

        tick(&mut state, -0.5, &mut Vec::new());
        tick(&mut state, f32::NAN, &mut Vec::new());

        let after: Vec<f32> = state.enemies.iter().map(|e| e.body.pos.x).collect();
        assert_eq!(before, after);
        assert_eq!(state.bridge.body.pos.x, bridge_before);
        assert_eq!(sanitize_dt(0.25), 0.25);
    }

    #[test]
    fn test_input_walks_four_rows_up() {
        let mut state = quiet_state();
        for _ in 0..4 {
            assert!(submit_input(&mut state, Some(Direction::Up)));
            tick(&mut state, DT, &mut Vec::new());
        }
        assert_eq!(state.player_pos(), Vec2::new(202.0, 404.0 - 4.0 * 83.0));
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_input_ignored_outside_playing() {
        let mut state = quiet_state();
        assert!(!submit_input(&mut state, None));
        state.phase = GamePhase::GameOver;
        assert!(!submit_input(&mut state, Some(Direction::Up)));
        assert_eq!(state.player_pos(), state.player.spawn);
    }

    #[test]
    fn test_input_off_the_edge_is_rejected() {
        let mut state = quiet_state();
        state.player.body.pos = Vec2::new(0.0, 404.0);
        assert!(!submit_input(&mut state, Some(Direction::Left)));
        assert_eq!(state.player_pos(), Vec2::new(0.0, 404.0));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let settings = Settings::default();
        let mut state1 = GameState::new(99999, &settings);
        let mut state2 = GameState::new(99999, &settings);

        for frame in 0..5000 {
            let dt = if frame % 7 == 0 { 0.05 } else { DT };
            tick(&mut state1, dt, &mut Vec::new());
            tick(&mut state2, dt, &mut Vec::new());
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.bridge, state2.bridge);
    }

    proptest! {
        #[test]
        fn lives_drop_by_at_most_one_per_frame(
            seed in 0u64..500,
            moves in proptest::collection::vec(0u32..5, 1..200),
        ) {
            let mut state = GameState::new(seed, &Settings::default());
            let dirs = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
            for m in moves {
                submit_input(&mut state, dirs.get(m as usize).copied());
                let before = state.lives;
                let outcome = tick(&mut state, DT, &mut Vec::new());
                match outcome {
                    PlayerOutcome::Killed { .. } => prop_assert_eq!(state.lives, before - 1),
                    _ => prop_assert_eq!(state.lives, before),
                }
                prop_assert!(state.lives <= STARTING_LIVES);
                prop_assert_eq!(state.phase == GamePhase::GameOver, state.lives == 0);
            }
        }
    }
}
