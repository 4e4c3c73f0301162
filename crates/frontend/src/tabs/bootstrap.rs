use super::set::TabSet;
use crate::shared::dom::TabDom;

/// Outcome of the page-load default selection, per group name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Groups whose default link received a click.
    pub clicked: Vec<String>,
    /// Groups without a default link in config or in the document.
    pub skipped: Vec<String>,
}

/// Click the default link of every group, outer groups first.
///
/// The click goes through whatever handler the link is wired to, exactly as
/// a user click would. A group whose default link is absent keeps the state
/// its markup and stylesheet give it.
pub fn bootstrap<D: TabDom>(tabs: &TabSet, dom: &D) -> BootstrapReport {
    let mut report = BootstrapReport::default();

    for controller in tabs.controllers() {
        let name = controller.name().to_string();
        let link = controller
            .group()
            .default_link
            .as_deref()
            .and_then(|id| dom.element_by_id(id));

        match link {
            Some(link) if dom.click(&link) => report.clicked.push(name),
            Some(_) => {
                log::debug!("Tab group `{}`: default link is not clickable, skipped", name);
                report.skipped.push(name);
            }
            None => {
                log::debug!("Tab group `{}`: no default link, skipped", name);
                report.skipped.push(name);
            }
        }
    }

    report
}
