use js_sys::JSON;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use limelight_motion_core::{
    parse_page_data_json, Config, Engine, Inputs, Outputs, PageData, PageId,
};

/// The hosting page drives this wrapper from its own event loop: arm the
/// observers listed by `watchers()`, translate DOM callbacks into Inputs,
/// call `update()` once per animation frame, and apply the returned changes.
#[wasm_bindgen]
pub struct LimelightMotion {
    core: Engine,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl LimelightMotion {
    /// Create a new engine instance. Pass a JSON config object or
    /// undefined/null for defaults. The hosting shell decides the
    /// pointer-follower capability here, once:
    ///   new LimelightMotion({ pointer: { enabled: false } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LimelightMotion, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(LimelightMotion {
            core: Engine::new(cfg),
        })
    }

    /// Register a page's target list (a PageData JS object). Returns the
    /// page id used to dispose it on the next route change.
    #[wasm_bindgen(js_name = register_page)]
    pub fn register_page(&mut self, page_json: JsValue) -> Result<u32, JsError> {
        if jsvalue_is_undefined_or_null(&page_json) {
            return Err(JsError::new("register_page: page_json is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser, which
        // validates as well as deserializes.
        let s = JSON::stringify(&page_json)
            .map_err(|e| JsError::new(&format!("register_page stringify error: {e:?}")))?
            .as_string()
            .ok_or_else(|| JsError::new("register_page: stringify produced non-string"))?;
        let data: PageData = parse_page_data_json(&s)
            .map_err(|e| JsError::new(&format!("register_page error: {e}")))?;
        let id: PageId = self
            .core
            .register_page(data)
            .map_err(|e| JsError::new(&format!("register_page error: {e}")))?;
        Ok(id.0)
    }

    /// Dispose a previously registered page: cancels its pending reveals and
    /// releases its watchers. Safe to call more than once.
    #[wasm_bindgen(js_name = dispose_page)]
    pub fn dispose_page(&mut self, page_id: u32) {
        self.core.dispose_page(PageId(page_id));
    }

    /// The live observation requests: rows with an `intersection` kind want
    /// a one-shot viewport-threshold report, rows with `scrollProgress`
    /// want normalized progress on every scroll tick.
    #[wasm_bindgen]
    pub fn watchers(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.watcher_rows())
            .map_err(|e| JsError::new(&format!("watchers error: {e}")))
    }

    /// Step the engine by dt (seconds) with this frame's events (an Inputs
    /// JSON object, or undefined for none). Returns Outputs JSON.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32, inputs_json: JsValue) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out: &Outputs = self.core.update(dt, inputs);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
