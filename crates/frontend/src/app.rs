//! Page runtime: config loading, global handlers for inline `onclick`
//! markup and default selection once the document is parsed.

use crate::shared::dom::WebDom;
use crate::tabs::binding::CurrentTabs;
use crate::tabs::{bind_links, bootstrap, TabError, TabSet};
use contracts::shared::tabs::{TabsConfig, CONFIG_ELEMENT_ID};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

// Tab groups of the page, shared by exported functions and listeners
thread_local! {
    static TABS: RefCell<Option<Rc<TabSet>>> = RefCell::new(None);
    static BOOTSTRAP_PENDING: Cell<bool> = Cell::new(false);
}

pub fn current_tabs() -> Option<Rc<TabSet>> {
    TABS.with(|tabs| tabs.borrow().clone())
}

/// Config from `<script type="application/json" id="tabswitch-config">`.
/// Falls back to the two-level defaults when absent or invalid.
pub fn load_page_config(dom: &WebDom) -> TabsConfig {
    let json = dom
        .document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());

    let (config, err) = TabsConfig::from_page(json.as_deref());
    if let Some(err) = err {
        log::error!("Invalid tab config in #{}: {}", CONFIG_ELEMENT_ID, err);
    }
    config
}

/// Level filter named by `log_level`, `None` when the name is unknown.
pub fn log_filter(config: &TabsConfig) -> Option<log::LevelFilter> {
    config
        .log_level
        .parse::<log::Level>()
        .ok()
        .map(|level| level.to_level_filter())
}

pub fn apply_log_level(config: &TabsConfig) {
    match log_filter(config) {
        Some(filter) => log::set_max_level(filter),
        None => log::warn!("Unknown log level `{}`", config.log_level),
    }
}

/// Make `config` the page's tab groups: install global handlers, bind
/// `data-tab-target` links and schedule the default selection.
pub fn install(config: &TabsConfig, dom: &WebDom) -> Result<(), TabError> {
    let tabs = Rc::new(TabSet::new(config)?);
    TABS.with(|current| *current.borrow_mut() = Some(Rc::clone(&tabs)));

    let handlers = register_handlers(&tabs);
    let current: CurrentTabs = Rc::new(current_tabs);
    let links = bind_links(&tabs, dom, current);
    log::debug!("Installed {} global handlers, {} bound links", handlers, links);

    schedule_bootstrap(dom.clone());
    Ok(())
}

/// Open `panel_id` in `group` on behalf of a DOM event. The event's
/// `currentTarget` becomes the active link. Errors are logged, never thrown.
pub fn open_from_event(tabs: &TabSet, group: &str, event: &Event, panel_id: &str) {
    let Some(dom) = WebDom::current() else {
        return;
    };
    let origin = event
        .current_target()
        .and_then(|t| t.dyn_into::<Element>().ok());

    if let Err(err) = tabs.open(group, &dom, origin.as_ref(), panel_id) {
        log::warn!("{}", err);
    }
}

/// Install `window[handler](event, id)` for every group that names a handler,
/// so markup like `onclick="openSpec(event, 'SpecAL')"` reaches the module.
/// Handlers look the groups up on every call and follow later installs.
fn register_handlers(tabs: &TabSet) -> usize {
    let Some(window) = web_sys::window() else {
        return 0;
    };
    let mut installed = 0;

    for controller in tabs.controllers() {
        let Some(name) = controller.group().handler.clone() else {
            continue;
        };

        let group = controller.name().to_string();
        let closure = Closure::wrap(Box::new(move |event: Event, panel_id: JsValue| {
            let Some(tabs) = current_tabs() else {
                return;
            };
            match panel_id.as_string() {
                Some(id) => open_from_event(&tabs, &group, &event, &id),
                None => log::warn!("Tab group `{}`: panel id is not a string", group),
            }
        }) as Box<dyn FnMut(Event, JsValue)>);

        match js_sys::Reflect::set(&window, &JsValue::from_str(&name), closure.as_ref()) {
            Ok(_) => installed += 1,
            Err(err) => log::error!("Failed to install `{}`: {:?}", name, err),
        }
        closure.forget();
    }

    installed
}

/// Run the default selection on `DOMContentLoaded`, or right away when the
/// document is already parsed. Installs made while loading share one run,
/// against whichever groups are installed when the event fires.
fn schedule_bootstrap(dom: WebDom) {
    if !dom.is_loading() {
        run_bootstrap(&dom);
        return;
    }
    if BOOTSTRAP_PENDING.with(|pending| pending.replace(true)) {
        return;
    }

    let document = dom.document().clone();
    let callback = Closure::once_into_js(move || {
        BOOTSTRAP_PENDING.with(|pending| pending.set(false));
        run_bootstrap(&dom);
    });
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        BOOTSTRAP_PENDING.with(|pending| pending.set(false));
        log::error!("Failed to schedule default tabs: {:?}", err);
    }
}

fn run_bootstrap(dom: &WebDom) {
    let Some(tabs) = current_tabs() else {
        return;
    };
    let report = bootstrap(&tabs, dom);
    log::info!(
        "Tabs ready: defaults clicked {:?}, skipped {:?}",
        report.clicked,
        report.skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_level(level: &str) -> TabsConfig {
        let mut config = TabsConfig::default();
        config.log_level = level.to_string();
        config
    }

    #[test]
    fn test_log_filter_known_levels() {
        assert_eq!(log_filter(&TabsConfig::default()), Some(log::LevelFilter::Info));
        assert_eq!(log_filter(&with_level("warn")), Some(log::LevelFilter::Warn));
        assert_eq!(log_filter(&with_level("DEBUG")), Some(log::LevelFilter::Debug));
    }

    #[test]
    fn test_log_filter_unknown_level() {
        assert_eq!(log_filter(&with_level("loud")), None);
        assert_eq!(log_filter(&with_level("")), None);
    }
}
