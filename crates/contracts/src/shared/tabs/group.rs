use serde::{Deserialize, Serialize};

/// Class toggled on the link whose panel is currently shown.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Inline `display` value of the visible panel.
pub const DISPLAY_SHOWN: &str = "block";

/// Inline `display` value of every other panel in the group.
pub const DISPLAY_HIDDEN: &str = "none";

/// Attribute that wires a link to its panel without an inline handler:
/// `<button class="spec-tab-link" data-tab-target="SpecAL">`.
pub const TARGET_ATTRIBUTE: &str = "data-tab-target";

// ── Well-known groups ────────────────────────────────────────────────────────

pub const SPEC_GROUP: &str = "spec";
pub const LANG_GROUP: &str = "lang";
pub const TAB_GROUP: &str = "tab";

/// Markup contract of one tab group.
///
/// A group is the set of panels carrying `panel_class` and the set of links
/// carrying `link_class`. At most one panel of the group is visible and at
/// most one link carries `active_class`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabGroupSpec {
    pub name: String,
    pub panel_class: String,
    pub link_class: String,
    /// Id of the link clicked on page load, if any.
    #[serde(default)]
    pub default_link: Option<String>,
    /// Global function installed on `window` for inline `onclick` handlers.
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default = "default_active_class")]
    pub active_class: String,
    #[serde(default = "default_shown")]
    pub shown: String,
    #[serde(default = "default_hidden")]
    pub hidden: String,
}

fn default_active_class() -> String {
    DEFAULT_ACTIVE_CLASS.to_string()
}

fn default_shown() -> String {
    DISPLAY_SHOWN.to_string()
}

fn default_hidden() -> String {
    DISPLAY_HIDDEN.to_string()
}

impl TabGroupSpec {
    /// Group with the default active class and display values.
    pub fn new(name: &str, panel_class: &str, link_class: &str) -> Self {
        Self {
            name: name.to_string(),
            panel_class: panel_class.to_string(),
            link_class: link_class.to_string(),
            default_link: None,
            handler: None,
            active_class: default_active_class(),
            shown: default_shown(),
            hidden: default_hidden(),
        }
    }

    pub fn with_default_link(mut self, id: &str) -> Self {
        self.default_link = Some(id.to_string());
        self
    }

    pub fn with_handler(mut self, name: &str) -> Self {
        self.handler = Some(name.to_string());
        self
    }

    /// Outer "specialization" group: `SpecAL`, `SpecML`, `SpecGlobal` panels.
    pub fn spec() -> Self {
        Self::new(SPEC_GROUP, "spec-tab-content", "spec-tab-link")
            .with_default_link("defaultSpecOpen")
            .with_handler("openSpec")
    }

    /// Inner "language" group nested inside a specialization panel.
    pub fn lang() -> Self {
        Self::new(LANG_GROUP, "lang-tab-content", "lang-tab-link")
            .with_default_link("defaultLangOpen")
            .with_handler("openLang")
    }

    /// Plain single-level group.
    pub fn tab() -> Self {
        Self::new(TAB_GROUP, "tab-content", "tab-link")
            .with_default_link("defaultOpen")
            .with_handler("openTab")
    }
}
