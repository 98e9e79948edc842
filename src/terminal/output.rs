//! `Presenter`: Writes buffer regions to a terminal with `crossterm`.
//!
//! Commands are queued into the writer and flushed once per `present`,
//! so a whole marquee frame reaches the terminal in a single write.

use crate::buffer::{Buffer, Modifiers, Rgb};
use crate::layout::Rect;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use std::io::{self, Write};

type Style = (Rgb, Rgb, Modifiers);

const fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

const ATTRIBUTES: [(Modifiers, Attribute); 6] = [
    (Modifiers::BOLD, Attribute::Bold),
    (Modifiers::DIM, Attribute::Dim),
    (Modifiers::ITALIC, Attribute::Italic),
    (Modifiers::UNDERLINE, Attribute::Underlined),
    (Modifiers::REVERSED, Attribute::Reverse),
    (Modifiers::STRIKETHROUGH, Attribute::CrossedOut),
];

/// Flushes buffer regions to a terminal writer.
///
/// Style changes are emitted only when consecutive cells differ.
#[derive(Debug, Default)]
pub struct Presenter {
    style: Option<Style>,
}

impl Presenter {
    /// Create a presenter with no known terminal style.
    pub const fn new() -> Self {
        Self { style: None }
    }

    /// Write `area` of `buffer` to `out` and flush.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn present<W: Write>(&mut self, buffer: &Buffer, area: Rect, out: &mut W) -> io::Result<()> {
        let area = area.intersection(&buffer.area());
        self.style = None;

        for y in area.y..area.bottom() {
            let Some(row) = buffer.row(y) else {
                continue;
            };
            queue!(out, MoveTo(area.x, y))?;
            for cell in &row[area.x as usize..area.right() as usize] {
                if cell.is_continuation() {
                    continue;
                }
                let style = (cell.fg(), cell.bg(), cell.modifiers());
                if self.style != Some(style) {
                    self.apply(out, style)?;
                }
                queue!(out, Print(cell.symbol()))?;
            }
        }

        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        self.style = None;
        out.flush()
    }

    fn apply<W: Write>(&mut self, out: &mut W, style: Style) -> io::Result<()> {
        let (fg, bg, modifiers) = style;
        let modifiers_changed = self.style.is_none_or(|(_, _, m)| m != modifiers);
        if modifiers_changed {
            queue!(out, SetAttribute(Attribute::Reset))?;
            for (flag, attribute) in ATTRIBUTES {
                if modifiers.contains(flag) {
                    queue!(out, SetAttribute(attribute))?;
                }
            }
        }
        queue!(out, SetForegroundColor(color(fg)), SetBackgroundColor(color(bg)))?;
        self.style = Some(style);
        Ok(())
    }
}
