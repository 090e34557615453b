//! Browser entry point
//!
//! The host page owns the canvas and the animation frame. It creates a
//! `WebGame`, feeds it raw button levels and frame time, and reads back
//! positions and HUD state to draw. The high score lives in LocalStorage.

use wasm_bindgen::prelude::*;

use crate::consts::SIM_DT;
use crate::persistence::LocalStorageStore;
use crate::platform::{self, ButtonState, FixedStep, FrameInput};
use crate::{GameManager, GamePhase, GameSettings};

/// LocalStorage key prefix
const STORAGE_PREFIX: &str = "gravity_runner";

#[wasm_bindgen(start)]
pub fn wasm_main() {
    platform::init_logging();
    log::info!("Gravity Runner (web) starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    manager: GameManager,
    clock: FixedStep,
    /// Presses wait here until a substep consumes them
    input: FrameInput,
    jump: ButtonState,
    cancel: ButtonState,
}

#[wasm_bindgen]
impl WebGame {
    /// Build a session from optional settings JSON
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Result<WebGame, JsValue> {
        let settings = match settings_json {
            Some(json) => GameSettings::from_json(&json, "page"),
            None => Ok(GameSettings::default()),
        }
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let store = LocalStorageStore::new(STORAGE_PREFIX);
        let manager = GameManager::new(settings, Box::new(store))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            manager,
            clock: FixedStep::default(),
            input: FrameInput::default(),
            jump: ButtonState::default(),
            cancel: ButtonState::default(),
        })
    }

    /// Advance by one animation frame. Buttons are levels; presses are
    /// detected here and consumed by the next substep.
    pub fn update(&mut self, dt: f32, jump_held: bool, cancel_held: bool, vertical: f32) {
        if self.jump.update(jump_held) {
            self.input.jump = true;
        }
        if self.cancel.update(cancel_held) {
            self.input.cancel = true;
        }
        self.input.vertical = vertical;

        for _ in 0..self.clock.advance(dt) {
            let input = self.input;
            self.manager.update(SIM_DT, &input);
            self.input.jump = false;
            self.input.cancel = false;
        }
        // Events only matter to the headless log
        self.manager.drain_events();
    }

    /// 0 = title, 1 = playing, 2 = lost
    pub fn phase(&self) -> u8 {
        match self.manager.phase() {
            GamePhase::NotStarted => 0,
            GamePhase::Playing => 1,
            GamePhase::Lost => 2,
        }
    }

    pub fn score(&self) -> f32 {
        self.manager.hud().score
    }

    pub fn high_score(&self) -> f32 {
        self.manager.hud().high_score
    }

    pub fn breaking_high_score(&self) -> bool {
        self.manager.hud().breaking_high_score
    }

    pub fn controls_hint(&self) -> Option<String> {
        let hud = self.manager.hud();
        hud.controls_panel.then(|| hud.controls_hint.to_string())
    }

    /// Player box as `[x, y, size]`
    pub fn player(&self) -> Vec<f32> {
        let player = self.manager.player();
        vec![player.pos.x, player.pos.y, player.size]
    }

    /// Obstacles flattened as `[x, y, size, x, y, size, ...]`
    pub fn obstacles(&self) -> Vec<f32> {
        self.manager
            .spawner()
            .obstacles()
            .iter()
            .flat_map(|o| [o.pos.x, o.pos.y, o.size])
            .collect()
    }
}
