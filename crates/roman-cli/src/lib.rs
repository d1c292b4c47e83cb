//! CLI library components for the Roman numeral converter.

pub mod logging;
pub mod menu;
pub mod report;
