//! Markup contract for class-driven tab groups.
//!
//! Содержит:
//! - `group` - class names, bootstrap id and handler name of one group
//! - `config` - the ordered list of groups on a page, parsing and validation

pub mod config;
pub mod group;

pub use config::{ConfigError, TabsConfig, CONFIG_ELEMENT_ID};
pub use group::{TabGroupSpec, LANG_GROUP, SPEC_GROUP, TAB_GROUP, TARGET_ATTRIBUTE};
