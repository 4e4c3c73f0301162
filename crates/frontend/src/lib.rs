pub mod app;
pub mod shared;
pub mod tabs;

use contracts::shared::tabs::{TabsConfig, LANG_GROUP, SPEC_GROUP, TAB_GROUP};
use shared::dom::WebDom;
use wasm_bindgen::prelude::*;
use web_sys::Event;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let Some(dom) = WebDom::current() else {
        log::warn!("No document, tabs not installed");
        return;
    };

    let config = app::load_page_config(&dom);
    app::apply_log_level(&config);
    if let Err(err) = app::install(&config, &dom) {
        log::error!("Tab config rejected: {}", err);
    }
}

/// Replace the page's tab groups with a config object supplied from JS.
#[wasm_bindgen(js_name = initTabs)]
pub fn init_tabs(config: JsValue) -> Result<(), JsValue> {
    let config: TabsConfig = serde_wasm_bindgen::from_value(config)?;
    let dom = WebDom::current().ok_or_else(|| JsValue::from_str("No document"))?;

    app::apply_log_level(&config);
    app::install(&config, &dom).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Open `panel_id` in the named group; the event's current target becomes active.
#[wasm_bindgen(js_name = openInGroup)]
pub fn open_in_group(event: Event, group: &str, panel_id: &str) {
    match app::current_tabs() {
        Some(tabs) => app::open_from_event(&tabs, group, &event, panel_id),
        None => log::warn!("Tabs are not installed yet"),
    }
}

/// Main specialization tabs.
#[wasm_bindgen(js_name = openSpec)]
pub fn open_spec(event: Event, panel_id: &str) {
    open_in_group(event, SPEC_GROUP, panel_id);
}

/// Nested language tabs.
#[wasm_bindgen(js_name = openLang)]
pub fn open_lang(event: Event, panel_id: &str) {
    open_in_group(event, LANG_GROUP, panel_id);
}

#[wasm_bindgen(js_name = openTab)]
pub fn open_tab(event: Event, panel_id: &str) {
    open_in_group(event, TAB_GROUP, panel_id);
}
