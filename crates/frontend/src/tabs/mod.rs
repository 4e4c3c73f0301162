//! Class-driven tab groups.
//!
//! Содержит:
//! - `controller` - one group: show a panel, hide its siblings, move the active class
//! - `set` - independent groups of a page (specializations + nested languages)
//! - `bootstrap` - clicks the default link of every group on page load
//! - `binding` - click listeners for links wired through `data-tab-target`

pub mod binding;
pub mod bootstrap;
pub mod controller;
pub mod error;
pub mod set;

pub use binding::bind_links;
pub use bootstrap::{bootstrap, BootstrapReport};
pub use controller::TabController;
pub use error::TabError;
pub use set::TabSet;
