//! Text measurement: `text × font → size`.

use super::font::FontDescriptor;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Rendered extent of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl TextSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Round both dimensions up to whole units.
    #[inline]
    #[must_use]
    pub fn ceil(self) -> Self {
        Self::new(self.width.ceil(), self.height.ceil())
    }
}

/// Synchronous single-line text measurement.
///
/// Implementations must be deterministic and must return ceil-rounded sizes.
/// The empty string measures 0 wide.
pub trait TextMeasurer {
    /// Measure `text` rendered with `font`.
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextSize;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextSize {
        (**self).measure(text, font)
    }
}

/// Terminal column count of a string, summed per grapheme cluster.
///
/// Every cluster occupies at least one and at most two columns, matching
/// how [`Buffer::put_grapheme`](crate::Buffer::put_grapheme) lays them out.
fn column_width(text: &str) -> usize {
    text.graphemes(true).map(|g| g.width().clamp(1, 2)).sum()
}

/// Measures in terminal cells: width in columns, height of one row.
///
/// The font is ignored; a terminal has exactly one face and size.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, _font: &FontDescriptor) -> TextSize {
        TextSize::new(column_width(text) as f32, 1.0)
    }
}

/// Fixed-advance measurement scaled by font size.
///
/// Each column advances `advance × font.size` units and a line is
/// `line_height × font.size` tall. Suitable for hosts that lay out in
/// pixel-like units with a monospace face.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    /// Advance per column as a fraction of the font size.
    pub advance: f32,
    /// Line height as a fraction of the font size.
    pub line_height: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, font: &FontDescriptor) -> TextSize {
        let columns = column_width(text) as f32;
        TextSize::new(
            columns * self.advance * font.size,
            self.line_height * font.size,
        )
        .ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_measurer_ascii() {
        let size = CellMeasurer.measure("HELLO", &FontDescriptor::default());
        assert_eq!(size, TextSize::new(5.0, 1.0));
    }

    #[test]
    fn test_cell_measurer_wide_and_clusters() {
        let font = FontDescriptor::default();
        assert_eq!(CellMeasurer.measure("日本", &font).width, 4.0);
        // ZWJ family sequence is a single cluster.
        assert_eq!(CellMeasurer.measure("a👨‍👩‍👧", &font).width, 3.0);
        assert_eq!(CellMeasurer.measure("", &font).width, 0.0);
    }

    #[test]
    fn test_monospace_measurer_rounds_up() {
        let measurer = MonospaceMeasurer::default();
        let font = FontDescriptor::new("mono", 14.0);
        // 3 × 0.6 × 14 = 25.2 → 26, 1.2 × 14 = 16.8 → 17
        assert_eq!(measurer.measure("abc", &font), TextSize::new(26.0, 17.0));
    }

    #[test]
    fn test_text_size_ceil() {
        assert_eq!(TextSize::new(1.01, 2.0).ceil(), TextSize::new(2.0, 2.0));
    }
}
