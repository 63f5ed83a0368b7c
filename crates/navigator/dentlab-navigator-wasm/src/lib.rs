use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use dentlab_navigator_core::{Direction, InputEvent, NavigatorConfig, SectionNavigator};

mod widgets;

pub use widgets::{SiteCarousel, SiteMarquee, SiteModals};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

pub(crate) fn to_js<T: Serialize>(what: &str, value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

/// Full-page section navigator. The host forwards wheel/touch/pointer events
/// and nav clicks, calls `update(dt)` every animation frame, and applies the
/// returned `changes` to element styles.
#[wasm_bindgen]
pub struct SiteNavigator {
    core: SectionNavigator,
}

#[wasm_bindgen]
impl SiteNavigator {
    /// Create a navigator. Pass a config object, or undefined/null for the
    /// production defaults.
    /// Example:
    ///   new SiteNavigator({ sections: 9, gesture: { tolerance: 12 } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SiteNavigator, JsError> {
        console_error_panic_hook::set_once();

        let cfg: NavigatorConfig = if jsvalue_is_undefined_or_null(&config) {
            NavigatorConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let core =
            SectionNavigator::new(cfg).map_err(|e| JsError::new(&format!("config error: {e}")))?;
        Ok(SiteNavigator { core })
    }

    /// Enter section 0. Call once after construction.
    #[wasm_bindgen]
    pub fn start(&mut self) -> Result<JsValue, JsError> {
        let t = self.core.start();
        to_js("transition", &t)
    }

    /// Request a transition. `direction` < 0 slides backward, anything else
    /// forward. Returns `{ type: "started", ... }` or `{ type: "dropped" }`.
    #[wasm_bindgen(js_name = go_to_section)]
    pub fn go_to_section(&mut self, index: i32, direction: i32) -> Result<JsValue, JsError> {
        let t = self
            .core
            .go_to_section(index as i64, Direction::from_sign(direction as i64));
        to_js("transition", &t)
    }

    /// Feed one `{ type: "wheel" | "touchStart" | ..., ... }` event. Returns
    /// `{ gesture, preventDefault }`.
    #[wasm_bindgen(js_name = handle_input)]
    pub fn handle_input(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let event: InputEvent =
            swb::from_value(event).map_err(|e| JsError::new(&format!("input error: {e}")))?;
        let recognized = self.core.handle_input(&event);
        to_js("input", &recognized)
    }

    /// Resolve a nav click by href, falling back to top-level link position.
    #[wasm_bindgen(js_name = click_link)]
    pub fn click_link(
        &mut self,
        href: Option<String>,
        position: Option<u32>,
    ) -> Result<JsValue, JsError> {
        let outcome = self
            .core
            .click_link(href.as_deref(), position.map(|p| p as usize));
        to_js("click", &outcome)
    }

    /// Advance by dt (seconds). Returns `{ changes, events }`.
    #[wasm_bindgen]
    pub fn update(&mut self, dt: f32) -> Result<JsValue, JsError> {
        let out = self.core.update(dt);
        to_js("outputs", out)
    }

    /// Active section, or -1 before the first activation.
    #[wasm_bindgen(js_name = current_index)]
    pub fn current_index(&self) -> i32 {
        self.core.current_index().map(|i| i as i32).unwrap_or(-1)
    }

    #[wasm_bindgen(js_name = is_animating)]
    pub fn is_animating(&self) -> bool {
        self.core.is_animating()
    }

    /// Ids of the nav links that should carry the active class.
    #[wasm_bindgen]
    pub fn highlight(&self) -> Result<JsValue, JsError> {
        to_js("highlight", self.core.highlight())
    }

    /// The nav-link table in use, so the host can map ids to elements.
    #[wasm_bindgen(js_name = nav_links)]
    pub fn nav_links(&self) -> Result<JsValue, JsError> {
        to_js("nav", &self.core.config().nav)
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
