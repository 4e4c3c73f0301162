use super::error::TabError;
use crate::shared::dom::TabDom;
use contracts::shared::tabs::TabGroupSpec;

/// Shows one panel of a group and hides its siblings.
#[derive(Debug, Clone)]
pub struct TabController {
    group: TabGroupSpec,
}

impl TabController {
    pub fn new(group: TabGroupSpec) -> Self {
        Self { group }
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn group(&self) -> &TabGroupSpec {
        &self.group
    }

    pub fn panels<D: TabDom>(&self, dom: &D) -> Vec<D::Element> {
        dom.elements_by_class(&self.group.panel_class)
    }

    pub fn links<D: TabDom>(&self, dom: &D) -> Vec<D::Element> {
        dom.elements_by_class(&self.group.link_class)
    }

    /// Show panel `panel_id`, hide the rest of the group and move the active
    /// marker to `origin` (the link that received the click).
    ///
    /// The target is resolved before anything is touched, so an unknown id
    /// leaves the group exactly as it was.
    pub fn open<D: TabDom>(
        &self,
        dom: &D,
        origin: Option<&D::Element>,
        panel_id: &str,
    ) -> Result<(), TabError> {
        let group = &self.group;

        let target = dom
            .element_by_id(panel_id)
            .ok_or_else(|| TabError::MissingPanel {
                group: group.name.clone(),
                id: panel_id.to_string(),
            })?;
        if !dom.has_class(&target, &group.panel_class) {
            return Err(TabError::ForeignPanel {
                group: group.name.clone(),
                id: panel_id.to_string(),
                class: group.panel_class.clone(),
            });
        }

        // 1. Hide all panels of the group
        for panel in self.panels(dom) {
            dom.set_display(&panel, &group.hidden);
        }

        // 2. Deactivate all links of the group
        for link in self.links(dom) {
            dom.remove_class(&link, &group.active_class);
        }

        // 3. Show the target and mark the clicked link
        dom.set_display(&target, &group.shown);
        if let Some(origin) = origin {
            dom.add_class(origin, &group.active_class);
        }

        log::debug!("Tab group `{}`: opened `{}`", group.name, panel_id);
        Ok(())
    }
}
