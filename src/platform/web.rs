//! Browser host binding
//!
//! JS owns a `WebTable`, forwards resize and pointer events to it, and calls
//! `frame` from its `requestAnimationFrame` loop. Drawing reads `vertices` or
//! `render_state_json` after each frame.

use wasm_bindgen::prelude::*;

use crate::frame::{FrameDriver, RenderState};
use crate::renderer::{self, Vertex};
use crate::settings::Settings;
use crate::sim::{PointerEvent, PointerPhase, Table};

/// Install the panic hook and console logger once per page
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("Pinball starting...");
    }
}

#[wasm_bindgen]
pub struct WebTable {
    table: Table,
    driver: FrameDriver,
    last: Option<RenderState>,
    vertices: Vec<Vertex>,
}

#[wasm_bindgen]
impl WebTable {
    /// Create a table; `settings_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<WebTable, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json).map_err(|e| JsValue::from_str(&format!("{e:#}")))?
        };
        let seed = settings.seed.unwrap_or_else(super::fresh_seed);
        log::info!("Table created with seed: {}", seed);

        Ok(WebTable {
            driver: FrameDriver::for_tuning(&settings.tuning),
            table: Table::new(seed, settings.tuning),
            last: None,
            vertices: Vec::new(),
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.table.on_size_changed(width, height);
    }

    /// Canvas attached to a live document; primes the frame clock
    pub fn attach(&mut self, now_ms: f64) {
        self.driver.attach(now_ms as u64);
    }

    pub fn detach(&mut self) {
        self.driver.detach();
    }

    pub fn pointer_down(&mut self, id: u32, x: f32, y: f32) {
        self.table.handle_pointer(PointerEvent::new(id, PointerPhase::Down, x, y));
    }

    pub fn pointer_move(&mut self, id: u32, x: f32, y: f32) {
        self.table.handle_pointer(PointerEvent::new(id, PointerPhase::Move, x, y));
    }

    pub fn pointer_up(&mut self, id: u32, x: f32, y: f32) {
        self.table.handle_pointer(PointerEvent::new(id, PointerPhase::Up, x, y));
    }

    pub fn pointer_cancel(&mut self, id: u32, x: f32, y: f32) {
        self.table.handle_pointer(PointerEvent::new(id, PointerPhase::Cancel, x, y));
    }

    /// Step one display tick; false while detached
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match self.driver.frame(&mut self.table, now_ms as u64) {
            Some(state) => {
                self.vertices = renderer::build_scene(&state);
                self.last = Some(state);
                true
            }
            None => false,
        }
    }

    /// Flat `[x, y, r, g, b, a, ...]` triangle list for the last frame
    pub fn vertices(&self) -> Vec<f32> {
        renderer::as_floats(&self.vertices).to_vec()
    }

    /// The last frame's vertex buffer as raw bytes, ready for a GPU upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        renderer::as_bytes(&self.vertices).to_vec()
    }

    /// RGBA the surface is cleared to before drawing `vertices`
    pub fn clear_color(&self) -> Vec<f32> {
        renderer::colors::BACKGROUND.to_vec()
    }

    /// The last render snapshot as JSON (current state if no frame ran yet)
    pub fn render_state_json(&self) -> Result<String, JsValue> {
        let state = match &self.last {
            Some(state) => state.clone(),
            None => RenderState::capture(&self.table),
        };
        serde_json::to_string(&state).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
