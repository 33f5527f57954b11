//! Per-pass layout context handed to rulesets

use super::ScreenSize;
use crate::input::{ControllerType, InputSource};

/// Default number of grid columns a row is divided into
pub const DEFAULT_TOTAL_COLUMNS: u32 = 12;

/// Everything a ruleset needs to resolve sizes, offsets and visibility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    pub screen_size: ScreenSize,
    pub last_input_source: InputSource,
    pub last_controller_type: ControllerType,
    /// Width of the parent container in pixels
    pub available_width: f32,
    pub total_columns: u32,
    /// Measured content extent, used by `auto` sizes
    pub content_size: f32,
}

impl LayoutState {
    pub fn new(screen_size: ScreenSize, available_width: f32) -> Self {
        Self {
            screen_size,
            last_input_source: InputSource::default(),
            last_controller_type: ControllerType::default(),
            available_width,
            total_columns: DEFAULT_TOTAL_COLUMNS,
            content_size: 0.0,
        }
    }

    pub fn with_input(mut self, source: InputSource, controller: ControllerType) -> Self {
        self.last_input_source = source;
        self.last_controller_type = controller;
        self
    }

    pub fn with_columns(mut self, total_columns: u32) -> Self {
        self.total_columns = total_columns;
        self
    }

    pub fn with_content_size(mut self, content_size: f32) -> Self {
        self.content_size = content_size;
        self
    }

    /// Width of one grid column. Zero columns yields zero-width columns.
    pub fn column_width(&self) -> f32 {
        if self.total_columns == 0 {
            return 0.0;
        }
        self.available_width / self.total_columns as f32
    }
}
