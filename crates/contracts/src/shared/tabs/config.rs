use super::group::TabGroupSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Id of the `<script type="application/json">` element holding a page config.
pub const CONFIG_ELEMENT_ID: &str = "tabswitch-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Group #{index} has an empty `{field}`")]
    EmptyField { index: usize, field: &'static str },

    #[error("Duplicate group name `{0}`")]
    DuplicateGroup(String),

    #[error("Class `{class}` is used by more than one group")]
    SharedClass { class: String },

    #[error("Handler `{0}` is registered by more than one group")]
    DuplicateHandler(String),
}

/// Every tab group on the page, in bootstrap order (outer groups first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TabsConfig {
    pub groups: Vec<TabGroupSpec>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self::two_level()
    }
}

impl TabsConfig {
    pub fn new(groups: Vec<TabGroupSpec>) -> Self {
        Self {
            groups,
            log_level: default_log_level(),
        }
    }

    /// Specializations with nested language tabs.
    pub fn two_level() -> Self {
        Self::new(vec![TabGroupSpec::spec(), TabGroupSpec::lang()])
    }

    pub fn single_level() -> Self {
        Self::new(vec![TabGroupSpec::tab()])
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config for a page given the text of its `#tabswitch-config` element.
    /// No element means defaults; an invalid one also falls back to the
    /// defaults and hands back the reason so the caller can report it.
    pub fn from_page(json: Option<&str>) -> (Self, Option<ConfigError>) {
        match json.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(err)) => (Self::default(), Some(err)),
        }
    }

    pub fn group(&self, name: &str) -> Option<&TabGroupSpec> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Check that groups are addressable and their class tags are disjoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        let mut classes = HashSet::new();
        let mut handlers = HashSet::new();

        for (index, group) in self.groups.iter().enumerate() {
            for (field, value) in [
                ("name", &group.name),
                ("panel_class", &group.panel_class),
                ("link_class", &group.link_class),
                ("active_class", &group.active_class),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::EmptyField { index, field });
                }
            }

            if !names.insert(group.name.as_str()) {
                return Err(ConfigError::DuplicateGroup(group.name.clone()));
            }

            // panel_class == link_class внутри одной группы тоже запрещён
            for class in [&group.panel_class, &group.link_class] {
                if !classes.insert(class.as_str()) {
                    return Err(ConfigError::SharedClass {
                        class: class.clone(),
                    });
                }
            }

            if let Some(handler) = &group.handler {
                if !handlers.insert(handler.as_str()) {
                    return Err(ConfigError::DuplicateHandler(handler.clone()));
                }
            }
        }

        Ok(())
    }
}
