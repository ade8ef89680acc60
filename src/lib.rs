/// Category Panels - collapsible categories that remember their state
/// Built with Rust + WASM + Yew

pub mod config;
pub mod controller;
pub mod error;
pub mod panel;
pub mod stepper;
pub mod storage;
pub mod ui;

use config::Conventions;
use panel::DomPanels;
use stepper::Step;
use storage::LocalStore;
use wasm_bindgen::prelude::*;
use web_sys::Element;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Replace the active conventions. Fields left out keep their defaults.
#[wasm_bindgen]
pub fn configure(conventions: JsValue) -> Result<(), JsValue> {
    let conventions: Conventions = serde_wasm_bindgen::from_value(conventions).map_err(|e| {
        log::error!("Rejected conventions: {:?}", e);
        JsValue::from_str(&format!("Invalid conventions: {}", e))
    })?;

    config::install(conventions);
    Ok(())
}

/// Restore open categories once the markup is in place.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document; categories will not be restored");
        return Ok(());
    };

    if document.ready_state() != "loading" {
        restore_categories();
        return Ok(());
    }

    let on_ready = Closure::<dyn FnMut()>::new(restore_categories);
    document.add_event_listener_with_callback(
        "DOMContentLoaded",
        on_ready.as_ref().unchecked_ref::<js_sys::Function>(),
    )?;
    // The listener fires once for the page lifetime
    on_ready.forget();
    Ok(())
}

/// Open every category whose flag is stored.
#[wasm_bindgen(js_name = restoreCategories)]
pub fn restore_categories() {
    let conventions = config::active();
    let Some(panels) = DomPanels::current(conventions.clone()) else {
        return;
    };

    controller::restore_panels(&conventions, &LocalStore::open(), &panels);
}

/// Flip a category open or closed and remember the choice.
#[wasm_bindgen(js_name = toggleCat)]
pub fn toggle_cat(category: &str) {
    let conventions = config::active();
    let Some(panels) = DomPanels::current(conventions.clone()) else {
        return;
    };

    controller::toggle_category(&conventions, &LocalStore::open(), &panels, category);
}

#[wasm_bindgen(js_name = incrementQty)]
pub fn increment_qty(button: &Element) {
    stepper::step_input(button, Step::Increment, config::active().stepper_baseline);
}

#[wasm_bindgen(js_name = decrementQty)]
pub fn decrement_qty(button: &Element) {
    stepper::step_input(button, Step::Decrement, config::active().stepper_baseline);
}
