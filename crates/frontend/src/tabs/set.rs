use super::controller::TabController;
use super::error::TabError;
use crate::shared::dom::TabDom;
use contracts::shared::tabs::{TabsConfig, LANG_GROUP, SPEC_GROUP};

/// Independent tab groups of one page, e.g. specializations with nested
/// language tabs. Opening a tab in one group never touches another group.
#[derive(Debug, Clone)]
pub struct TabSet {
    controllers: Vec<TabController>,
}

impl TabSet {
    pub fn new(config: &TabsConfig) -> Result<Self, TabError> {
        config.validate()?;
        let controllers = config
            .groups
            .iter()
            .cloned()
            .map(TabController::new)
            .collect();
        Ok(Self { controllers })
    }

    /// Controllers in bootstrap order.
    pub fn controllers(&self) -> impl Iterator<Item = &TabController> {
        self.controllers.iter()
    }

    pub fn controller(&self, group: &str) -> Option<&TabController> {
        self.controllers.iter().find(|c| c.name() == group)
    }

    pub fn open<D: TabDom>(
        &self,
        group: &str,
        dom: &D,
        origin: Option<&D::Element>,
        panel_id: &str,
    ) -> Result<(), TabError> {
        self.controller(group)
            .ok_or_else(|| TabError::UnknownGroup(group.to_string()))?
            .open(dom, origin, panel_id)
    }

    /// Outer specialization tabs.
    pub fn open_spec<D: TabDom>(
        &self,
        dom: &D,
        origin: Option<&D::Element>,
        panel_id: &str,
    ) -> Result<(), TabError> {
        self.open(SPEC_GROUP, dom, origin, panel_id)
    }

    /// Language tabs nested in a specialization panel.
    pub fn open_lang<D: TabDom>(
        &self,
        dom: &D,
        origin: Option<&D::Element>,
        panel_id: &str,
    ) -> Result<(), TabError> {
        self.open(LANG_GROUP, dom, origin, panel_id)
    }
}
