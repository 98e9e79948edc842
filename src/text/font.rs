//! Font descriptor passed through measurement and rendering.

use crate::buffer::Modifiers;

/// Face and size of the marquee text.
///
/// Terminal rendering only honours `modifiers`; `family` and `size` are
/// carried for measurers that scale with the font (see
/// [`MonospaceMeasurer`](super::MonospaceMeasurer)).
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name.
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Style modifiers (bold, italic, ...).
    pub modifiers: Modifiers,
}

impl FontDescriptor {
    /// Default point size.
    pub const DEFAULT_SIZE: f32 = 14.0;

    /// Create a descriptor with no style modifiers.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the style modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::new("monospace", Self::DEFAULT_SIZE)
    }
}
