use super::{ClickHandler, TabDom};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement};

/// `TabDom` over the browser document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if running in a browser.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// True until the markup is fully parsed.
    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }
}

impl TabDom for WebDom {
    type Element = Element;

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        // HTMLCollection is live: copy it before anything mutates classes
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn set_display(&self, element: &Element, value: &str) {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => {
                let _ = html.style().set_property("display", value);
            }
            None => log::debug!(
                "Element `{}` is not an HTML element, display left unchanged",
                element.id()
            ),
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn on_click(&self, element: &Element, handler: ClickHandler<Self>) {
        let dom = self.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(current) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            handler(&dom, &current);
        }) as Box<dyn FnMut(Event)>);

        let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        // Listeners live for the page lifetime
        closure.forget();
    }

    fn click(&self, element: &Element) -> bool {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => {
                html.click();
                true
            }
            None => {
                log::debug!("Element `{}` is not an HTML element, not clicked", element.id());
                false
            }
        }
    }
}
