//! Input modality
//!
//! Which device the player is using decides which UI elements are shown
//! (button prompts vs. mouse hints, touch-only controls). This module holds
//! the input source / controller type vocabulary shared with layout rule
//! text and a tracker for the last active modality.

mod controller_type;
mod source;
mod tracker;

pub use controller_type::ControllerType;
pub use source::InputSource;
pub use tracker::{InputEvent, InputTracker};
