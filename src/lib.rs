//! POCKET2D: a small 2D game runtime
//!
//! Two independent pieces:
//! - `game`: dispersed interval processing. Expensive per-entity work is
//!   spread over an interval instead of running for every entity at once.
//! - `ui::layout`: responsive layout rulesets. Rule strings like
//!   `xs-12c md-6c md-offset-3c hidden-touchscreen` resolve to pixel sizes,
//!   offsets and visibility for the current screen size and input device.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod game;
pub mod input;
pub mod ui;
