//! Text module: Font descriptors and text measurement.
//!
//! Measurement is a pure function of `(text, font)` and always rounds up to
//! whole units, so a container sized from it never clips the last glyph.

mod font;
mod measure;

pub use font::FontDescriptor;
pub use measure::{CellMeasurer, MonospaceMeasurer, TextMeasurer, TextSize};
