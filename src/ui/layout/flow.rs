//! Row flow layout
//!
//! Places elements left to right using their horizontal and vertical
//! rulesets, wrapping to a new line when the next element doesn't fit.

use super::{LayoutRuleset, LayoutState};
use crate::ui::Rect;

/// A UI element as far as layout is concerned
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: String,
    pub horizontal: LayoutRuleset,
    pub vertical: LayoutRuleset,
    /// Measured content height, fed to `auto` vertical sizes
    pub content_height: f32,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>, horizontal: LayoutRuleset, vertical: LayoutRuleset) -> Self {
        Self {
            id: id.into(),
            horizontal,
            vertical,
            content_height: 0.0,
        }
    }

    pub fn with_content_height(mut self, height: f32) -> Self {
        self.content_height = height;
        self
    }
}

/// Lay out `nodes` inside `area`. Returns one entry per node, `None` for
/// nodes hidden by the current input source. Rects are in the same
/// coordinate space as `area`.
pub fn flow_row(nodes: &[LayoutNode], state: &LayoutState, area: Rect) -> Vec<Option<Rect>> {
    let mut state = *state;
    state.available_width = area.w;

    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f32 = 0.0;
    let mut row_empty = true;

    nodes
        .iter()
        .map(|node| {
            if node.horizontal.is_hidden_for_input(&state) {
                return None;
            }

            let h = node.horizontal.resolve(&state);
            let v_state = state.with_content_size(node.content_height);
            let v = node.vertical.resolve(&v_state);

            if !row_empty && x + h.offset + h.size > area.w {
                y += row_height;
                x = 0.0;
                row_height = 0.0;
            }

            let rect = Rect::new(
                area.x + x + h.offset,
                area.y + y + v.offset,
                h.size,
                v.size,
            );
            x += h.offset + h.size;
            row_height = row_height.max(v.offset + v.size);
            row_empty = false;
            Some(rect)
        })
        .collect()
}
