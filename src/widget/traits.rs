//! Widget trait shared by everything that draws into a [`Buffer`].

use crate::buffer::Buffer;
use crate::layout::Rect;
use std::time::Instant;

/// A UI component that can be rendered to a buffer and animated over time.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize). This is the
    /// layout-ready signal for widgets waiting on a non-zero size.
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget to the given buffer.
    ///
    /// The widget should only write to cells within its bounds.
    fn render(&self, buffer: &mut Buffer);

    /// Advance the widget's clock to `now`.
    fn tick(&mut self, now: Instant);

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
