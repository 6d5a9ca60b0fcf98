//! Browser bindings
//!
//! Thin `wasm_bindgen` wrapper around `GameSession`. The page owns the
//! canvas, the panels and the key listeners; it calls into `WebGame` and
//! reads events and entity positions back as JSON.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::session::GameSession;
use crate::settings::Settings;
use crate::sim::{Direction, Sprite};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("River Crossing starting...");
}

/// One drawable entity for the page
#[derive(Serialize)]
struct SpriteDraw<'a> {
    sprite: &'a str,
    x: f32,
    y: f32,
}

#[wasm_bindgen]
pub struct WebGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WebGame {
    /// Start a game. `settings_json` may be empty for the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WebGame, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Game seed: {seed}");
        let session = GameSession::new(seed, settings).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WebGame { session })
    }

    /// Frame callback, `dt` in seconds
    pub fn step(&mut self, dt: f32) {
        self.session.step(dt);
    }

    /// One-second interval callback
    pub fn on_second(&mut self) {
        self.session.on_second();
    }

    /// Arrow key `keyCode`; other keys are ignored
    pub fn submit_key(&mut self, key_code: u32) -> bool {
        self.session.submit_input(Direction::from_key_code(key_code))
    }

    /// Restart, optionally with the avatar picked in the selection popup
    pub fn request_reset(&mut self, avatar: Option<String>) {
        self.session.request_reset(avatar.map(Sprite::new));
    }

    pub fn stop_timer(&mut self) {
        self.session.stop_timer();
    }

    /// Queued events as a JSON array
    pub fn drain_events(&mut self) -> String {
        serde_json::to_string(&self.session.drain_events()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Entities in draw order as a JSON array of `{sprite, x, y}`
    pub fn snapshot(&self) -> String {
        let draws: Vec<SpriteDraw<'_>> = self
            .session
            .state()
            .entities()
            .map(|entity| SpriteDraw {
                sprite: entity.sprite().as_str(),
                x: entity.body().pos.x,
                y: entity.body().pos.y,
            })
            .collect();
        serde_json::to_string(&draws).unwrap_or_else(|_| "[]".to_string())
    }

    /// Result panel data as JSON
    pub fn summary(&self) -> String {
        serde_json::to_string(&self.session.summary()).unwrap_or_else(|_| "{}".to_string())
    }
}
