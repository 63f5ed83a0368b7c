//! Bindings for the peripheral widgets: carousels, the client marquee, and
//! the modal set.

use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use dentlab_navigator_core::{Carousel, Marquee, ModalId, ModalSet, WorkingDaysCatalog};

use crate::{jsvalue_is_undefined_or_null, to_js};

#[wasm_bindgen]
pub struct SiteCarousel {
    core: Carousel,
}

#[wasm_bindgen]
impl SiteCarousel {
    /// `kind` is `"services"` (one slide per step) or `"gallery"` (one view
    /// per step).
    #[wasm_bindgen(constructor)]
    pub fn new(kind: &str, total: u32, width: f32) -> Result<SiteCarousel, JsError> {
        let total = total as usize;
        let core = match kind {
            "services" => Carousel::services(total, width),
            "gallery" => Carousel::gallery(total, width),
            other => return Err(JsError::new(&format!("unknown carousel kind: {other}"))),
        };
        Ok(SiteCarousel { core })
    }

    pub fn next(&mut self) -> bool {
        self.core.next()
    }

    pub fn prev(&mut self) -> bool {
        self.core.prev()
    }

    #[wasm_bindgen(js_name = go_to)]
    pub fn go_to(&mut self, index: u32) {
        self.core.go_to(index as usize);
    }

    #[wasm_bindgen(js_name = click_dot)]
    pub fn click_dot(&mut self, dot: u32) {
        self.core.click_dot(dot as usize);
    }

    #[wasm_bindgen(js_name = touch_start)]
    pub fn touch_start(&mut self, x: f32) {
        self.core.touch_start(x);
    }

    #[wasm_bindgen(js_name = touch_move)]
    pub fn touch_move(&mut self, x: f32) {
        self.core.touch_move(x);
    }

    #[wasm_bindgen(js_name = touch_end)]
    pub fn touch_end(&mut self) -> bool {
        self.core.touch_end()
    }

    pub fn resize(&mut self, width: f32) -> bool {
        self.core.resize(width)
    }

    /// `{ current, perView, translateXPercent, dots, prevDisabled, nextDisabled }`
    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js("carousel view", &self.core.view())
    }
}

#[wasm_bindgen]
pub struct SiteMarquee {
    core: Marquee,
}

#[wasm_bindgen]
impl SiteMarquee {
    /// One width (px, one copy of the logos) per client row.
    #[wasm_bindgen(constructor)]
    pub fn new(widths: &[f32]) -> SiteMarquee {
        SiteMarquee {
            core: Marquee::new(widths),
        }
    }

    /// Advance by dt seconds; returns each row's `translateX` in px.
    pub fn update(&mut self, dt: f32) -> Vec<f32> {
        self.core.update(dt)
    }

    /// Same per-row width list as the constructor.
    pub fn resize(&mut self, widths: &[f32]) {
        self.core.resize(widths);
    }
}

#[wasm_bindgen]
pub struct SiteModals {
    core: ModalSet,
}

#[wasm_bindgen]
impl SiteModals {
    /// Pass a working-days catalog (`[{ name, services: [{ service, days }] }]`)
    /// or undefined/null for the built-in one.
    #[wasm_bindgen(constructor)]
    pub fn new(catalog: JsValue) -> Result<SiteModals, JsError> {
        let catalog: WorkingDaysCatalog = if jsvalue_is_undefined_or_null(&catalog) {
            WorkingDaysCatalog::default()
        } else {
            swb::from_value(catalog).map_err(|e| JsError::new(&format!("catalog error: {e}")))?
        };
        Ok(SiteModals {
            core: ModalSet::new(catalog),
        })
    }

    pub fn open(&mut self, id: String) -> bool {
        self.core.open(&ModalId(id))
    }

    /// Returns `{ title, subtitle, rows }`, or null when the category is unknown.
    #[wasm_bindgen(js_name = open_working_days)]
    pub fn open_working_days(&mut self, category: &str) -> Result<JsValue, JsError> {
        match self.core.open_working_days(category) {
            Some(content) => to_js("modal content", content),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn close(&mut self, id: String) -> bool {
        self.core.close(&ModalId(id))
    }

    /// Escape handler. Returns the ids that were open.
    #[wasm_bindgen(js_name = close_all)]
    pub fn close_all(&mut self) -> Result<JsValue, JsError> {
        to_js("modal ids", &self.core.close_all())
    }

    #[wasm_bindgen(js_name = backdrop_click)]
    pub fn backdrop_click(&mut self, id: String, on_backdrop: bool) -> bool {
        self.core.backdrop_click(&ModalId(id), on_backdrop)
    }

    #[wasm_bindgen(js_name = is_open)]
    pub fn is_open(&self, id: String) -> bool {
        self.core.is_open(&ModalId(id))
    }

    #[wasm_bindgen(js_name = body_scroll_locked)]
    pub fn body_scroll_locked(&self) -> bool {
        self.core.body_scroll_locked()
    }

    /// True once, right after a lazily initialized modal first opens.
    #[wasm_bindgen(js_name = take_pending_init)]
    pub fn take_pending_init(&mut self, id: String) -> bool {
        self.core.take_pending_init(&ModalId(id))
    }
}
