use super::error::TabError;
use super::set::TabSet;
use crate::shared::dom::TabDom;
use contracts::shared::tabs::TARGET_ATTRIBUTE;
use std::rc::Rc;

/// Set on a link once a listener is attached, so a second pass skips it.
pub const BOUND_ATTRIBUTE: &str = "data-tab-bound";

/// Lookup of the tab groups installed on the page right now.
pub type CurrentTabs = Rc<dyn Fn() -> Option<Rc<TabSet>>>;

/// Attach a click listener to every link of `tabs` that names its panel
/// through `data-tab-target`. Links without the attribute are left to inline
/// handlers. Returns the number of links bound by this call.
///
/// Listeners resolve the group through `current` on every click, so a link
/// bound under one config follows whatever config is installed later.
pub fn bind_links<D: TabDom>(tabs: &TabSet, dom: &D, current: CurrentTabs) -> usize {
    let mut bound = 0;

    for controller in tabs.controllers() {
        for link in controller.links(dom) {
            if dom.attribute(&link, TARGET_ATTRIBUTE).is_none()
                || dom.attribute(&link, BOUND_ATTRIBUTE).is_some()
            {
                continue;
            }

            let current = Rc::clone(&current);
            dom.on_click(
                &link,
                Rc::new(move |dom: &D, link: &D::Element| {
                    let Some(tabs) = current() else {
                        log::warn!("Tabs are not installed yet");
                        return;
                    };
                    if let Err(err) = open_bound(&tabs, dom, link) {
                        log::warn!("{}", err);
                    }
                }),
            );
            dom.set_attribute(&link, BOUND_ATTRIBUTE, controller.name());
            bound += 1;
        }
    }

    log::debug!("Bound {} tab links", bound);
    bound
}

/// Open the panel a bound link names, in whichever group of `tabs` owns the
/// link's class. A link no group owns any more is left alone.
fn open_bound<D: TabDom>(tabs: &TabSet, dom: &D, link: &D::Element) -> Result<(), TabError> {
    let Some(controller) = tabs
        .controllers()
        .find(|c| dom.has_class(link, &c.group().link_class))
    else {
        log::debug!("Bound link belongs to no installed group");
        return Ok(());
    };
    let Some(target) = dom.attribute(link, TARGET_ATTRIBUTE) else {
        return Ok(());
    };
    controller.open(dom, Some(link), &target)
}
