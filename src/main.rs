//! River Crossing entry point
//!
//! The browser build is driven by the page through `river_crossing::web`.
//! Natively there is no window; the binary plays a headless demo run with a
//! simple autopilot and logs what happens.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;
    use river_crossing::consts::*;
    use river_crossing::sim::{Body, Direction, GamePhase, GameState, Presenter, Tolerance, overlaps};
    use river_crossing::{GameSession, Settings};

    const FPS: u32 = 60;
    const FRAME_DT: f32 = 1.0 / FPS as f32;
    /// Frames between autopilot moves
    const MOVE_COOLDOWN: u32 = 15;
    /// How far ahead (seconds) the autopilot looks for bugs
    const LOOKAHEAD: f32 = 0.6;
    /// Give up after this many simulated seconds
    const MAX_SECS: u32 = 180;

    /// Logs every notification, the way a HUD would show it
    struct LogPresenter;

    impl Presenter for LogPresenter {
        fn on_death(&mut self, cause: &str) {
            log::warn!("{}", river_crossing::sim::death_message(cause));
        }
        fn on_lives_changed(&mut self, remaining: u8) {
            log::info!("Lives: {}", "♥".repeat(remaining as usize));
        }
        fn on_phase_changed(&mut self, phase: GamePhase) {
            log::info!("Phase: {phase:?}");
        }
        fn on_tick(&mut self, elapsed_secs: u32) {
            log::debug!("Time {}", river_crossing::format_play_time(elapsed_secs));
        }
        fn on_reset(&mut self) {
            log::info!("Game reset");
        }
    }

    /// Is it safe to step up right now?
    fn safe_to_step_up(state: &GameState) -> bool {
        let candidate = Body::new(state.player_pos() + Direction::Up.offset(), state.player.body.size);

        if candidate.pos.y < WATER_LINE_Y {
            let bridge_next = Body::new(
                state.bridge.body.pos - Vec2::new(state.bridge.speed * FRAME_DT, 0.0),
                state.bridge.body.size,
            );
            // Aim for the middle of the bridge, not its edge
            let tol = Tolerance::new(CELL_WIDTH / 4.0, 0.0);
            return overlaps(&candidate, &bridge_next, tol);
        }

        let tol = Tolerance::new(ENEMY_TOLERANCE, ENEMY_TOLERANCE);
        state.enemies.iter().all(|enemy| {
            let soon = Body::new(
                enemy.body.pos + Vec2::new(enemy.speed * LOOKAHEAD, 0.0),
                enemy.body.size,
            );
            !overlaps(&candidate, &enemy.body, tol) && !overlaps(&candidate, &soon, tol)
        })
    }

    pub fn run() {
        let settings = match std::env::var("RIVER_CROSSING_SETTINGS") {
            Ok(path) => match Settings::from_file(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("{e}; using default settings");
                    Settings::default()
                }
            },
            Err(_) => Settings::default(),
        };

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        log::info!("Demo run with seed {seed}");

        let mut session = match GameSession::new(seed, settings) {
            Ok(session) => session,
            Err(e) => {
                log::error!("{e}");
                return;
            }
        };
        let mut presenter = LogPresenter;
        let mut cooldown = 0;

        for frame in 1..=MAX_SECS * FPS {
            if cooldown == 0 && safe_to_step_up(session.state()) {
                session.submit_input(Some(Direction::Up));
                cooldown = MOVE_COOLDOWN;
            }
            cooldown = cooldown.saturating_sub(1);

            session.step(FRAME_DT);
            if frame % FPS == 0 {
                session.on_second();
            }
            session.flush(&mut presenter);

            if session.phase() != GamePhase::Playing {
                break;
            }
        }

        let summary = session.summary();
        match summary.phase {
            GamePhase::Success => log::info!(
                "Crossed in {} with {} lives left",
                summary.play_time,
                summary.remaining_lives
            ),
            GamePhase::GameOver => log::info!(
                "Game over after {}, killed by {}",
                summary.play_time,
                summary.killed_by
            ),
            GamePhase::Playing => log::info!("Still playing after {}", summary.play_time),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("River Crossing (native) starting...");
    log::info!("Native mode runs a headless demo - build for wasm32 to play in the browser");
    demo::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
