//! Types shared between the tab runtime and pages that configure it.

pub mod shared;
