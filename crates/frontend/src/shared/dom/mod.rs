//! DOM access used by the tab controllers.
//!
//! Controllers only need a handful of operations: look elements up by class
//! or id, toggle classes, set the inline `display` style and route clicks.
//! `WebDom` does this against the live document; `MemoryDom` keeps an
//! in-memory tree for unit tests.

#[cfg(test)]
pub mod memory;
pub mod web;

use std::rc::Rc;

pub use web::WebDom;

/// Click listener: receives the DOM and the element the listener is attached to
/// (the event's `currentTarget`).
pub type ClickHandler<D> = Rc<dyn Fn(&D, &<D as TabDom>::Element)>;

pub trait TabDom: Clone + 'static {
    type Element: Clone + 'static;

    /// Snapshot of all elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Set the inline `display` style.
    fn set_display(&self, element: &Self::Element, value: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    /// Attach a click listener that lives as long as the page.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler<Self>);

    /// Synthesize a user click: every listener attached to the element runs
    /// synchronously before this returns. `false` if the element cannot be
    /// clicked.
    fn click(&self, element: &Self::Element) -> bool;
}
