//! Cell: One column of the marquee's render target.
//!
//! A cell holds a single grapheme cluster together with its display width
//! and styling. Wide graphemes (CJK, most emoji) occupy two columns; the
//! second column is a continuation cell with an empty symbol.

use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers, carried by a font descriptor.
    ///
    /// # Example
    /// ```
    /// use marquee::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single styled column.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Grapheme cluster shown in this column; empty for continuations.
    symbol: String,
    /// Display width of the grapheme (0 = continuation, 1, or 2).
    width: u8,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

impl Cell {
    /// A space on the given background.
    pub fn blank(bg: Rgb) -> Self {
        Self {
            symbol: " ".to_string(),
            width: 1,
            fg: Rgb::WHITE,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell from a grapheme cluster.
    ///
    /// The display width is clamped to 2 columns; zero-width clusters
    /// (lone combining marks) still occupy one column so they stay visible.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_grapheme(grapheme: &str) -> Self {
        let width = grapheme.width().clamp(1, 2) as u8;
        Self {
            symbol: grapheme.to_string(),
            width,
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            modifiers: Modifiers::empty(),
        }
    }

    /// The trailing half of a wide grapheme.
    pub fn continuation(bg: Rgb) -> Self {
        Self {
            symbol: String::new(),
            width: 0,
            fg: Rgb::WHITE,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Get the grapheme; empty for continuation cells.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("width", &self.width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
        assert_eq!(format!("{rgb:?}"), "#ff8000");
        assert_eq!(Rgb::from((255, 128, 0)), rgb);
    }

    #[test]
    fn test_cell_from_grapheme_width() {
        assert_eq!(Cell::from_grapheme("A").width(), 1);
        assert_eq!(Cell::from_grapheme("日").width(), 2);
        assert_eq!(Cell::from_grapheme("👨‍👩‍👧").symbol(), "👨‍👩‍👧");
    }

    #[test]
    fn test_cell_continuation() {
        let cell = Cell::continuation(Rgb::BLACK);
        assert!(cell.is_continuation());
        assert_eq!(cell.symbol(), "");
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::from_grapheme("X")
            .with_fg(Rgb::new(255, 0, 0))
            .with_bg(Rgb::new(0, 0, 255))
            .with_modifiers(Modifiers::BOLD | Modifiers::ITALIC);

        assert_eq!(cell.fg(), Rgb::new(255, 0, 0));
        assert_eq!(cell.bg(), Rgb::new(0, 0, 255));
        assert!(cell.modifiers().contains(Modifiers::ITALIC));
    }
}
