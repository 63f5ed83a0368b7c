#![cfg(target_arch = "wasm32")]
use dentlab_navigator_wasm::{abi_version, SiteCarousel, SiteMarquee, SiteModals, SiteNavigator};
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use serde_json::{json, Value};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn to_json(v: JsValue) -> Value {
    swb::from_value(v).unwrap()
}

fn js(v: Value) -> JsValue {
    v.serialize(&swb::Serializer::json_compatible()).unwrap()
}

fn ids(v: JsValue) -> Vec<f64> {
    to_json(v)
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_f64)
        .collect()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn construct_with_defaults_and_overrides() {
    assert!(SiteNavigator::new(JsValue::UNDEFINED).is_ok());
    assert!(SiteNavigator::new(js(json!({ "gesture": { "tolerance": 4.0 } }))).is_ok());
    assert!(SiteNavigator::new(js(json!({ "sections": 0 }))).is_err());
}

#[wasm_bindgen_test]
fn start_update_and_scroll() {
    let mut nav = SiteNavigator::new(JsValue::NULL).unwrap();
    assert_eq!(nav.current_index(), -1);

    let t = to_json(nav.start().unwrap());
    assert_eq!(t["type"], "started");
    assert_eq!(t["to"].as_f64(), Some(0.0));
    assert_eq!(nav.current_index(), 0);

    let out = nav.update(0.016).unwrap();
    let obj = Object::from(out);
    let changes = Reflect::get(&obj, &JsValue::from_str("changes")).unwrap();
    assert!(Array::is_array(&changes));
    assert!(Array::from(&changes).length() > 0);

    let out = to_json(nav.update(2.0).unwrap());
    let completed = out["events"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["type"] == "transitionCompleted");
    assert!(completed);
    assert!(!nav.is_animating());

    let r = to_json(
        nav.handle_input(js(json!({ "type": "wheel", "deltaY": 30.0 })))
            .unwrap(),
    );
    assert_eq!(r["gesture"], "up");
    assert_eq!(r["preventDefault"], true);
    assert_eq!(nav.current_index(), 1);
    assert_eq!(ids(nav.highlight().unwrap()), vec![0.0]);
}

#[wasm_bindgen_test]
fn clicks_resolve_modals_and_submenus() {
    let mut nav = SiteNavigator::new(JsValue::NULL).unwrap();
    nav.start().unwrap();
    nav.update(2.0).unwrap();

    let o = to_json(nav.click_link(Some("#china-factory".into()), None).unwrap());
    assert_eq!(o, json!({ "type": "openModal", "modal": "chinaFactory" }));

    let o = to_json(nav.click_link(Some("#clients".into()), None).unwrap());
    assert_eq!(o["type"], "navigated");
    assert_eq!(o["transition"]["to"].as_f64(), Some(6.0));
    assert_eq!(ids(nav.highlight().unwrap()), vec![0.0, 6.0]);

    let o = to_json(nav.go_to_section(2, 1).unwrap());
    assert_eq!(o, json!({ "type": "dropped" }));
}

#[wasm_bindgen_test]
fn bad_input_is_an_error() {
    let mut nav = SiteNavigator::new(JsValue::NULL).unwrap();
    assert!(nav.handle_input(js(json!({ "type": "keyboard" }))).is_err());
}

#[wasm_bindgen_test]
fn carousel_view_round_trip() {
    let mut c = SiteCarousel::new("gallery", 6, 1280.0).unwrap();
    assert!(c.next());
    let view = to_json(c.view().unwrap());
    assert_eq!(view["current"].as_f64(), Some(3.0));
    assert_eq!(view["perView"].as_f64(), Some(3.0));
    assert_eq!(view["nextDisabled"], true);
    assert!(SiteCarousel::new("spinner", 3, 100.0).is_err());
}

#[wasm_bindgen_test]
fn marquee_and_modals() {
    let mut m = SiteMarquee::new(&[60.0, 60.0]);
    let pos = m.update(0.0);
    assert_eq!(pos, vec![0.0, -60.0]);

    let mut modals = SiteModals::new(JsValue::UNDEFINED).unwrap();
    let content = to_json(modals.open_working_days("Other").unwrap());
    assert_eq!(content["title"], "Other");
    assert_eq!(content["rows"].as_array().unwrap().len(), 4);
    assert!(modals.open_working_days("Nope").unwrap().is_null());
    assert!(modals.body_scroll_locked());
    assert_eq!(to_json(modals.close_all().unwrap()), json!(["workingDays"]));
    assert!(!modals.body_scroll_locked());
}
