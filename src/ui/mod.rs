//! UI building blocks
//!
//! Only layout lives here: rectangles and the responsive ruleset engine.
//! Drawing is left to the host (see the demo binary).

mod rect;
pub mod layout;

pub use rect::*;
