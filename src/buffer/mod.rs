//! Buffer module: The cell grid the terminal marquee renders into.
//!
//! This module contains:
//! - [`Cell`]: One styled column holding a grapheme cluster
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Rgb`]: True-color representation
//! - [`Modifiers`]: Text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{Cell, Modifiers, Rgb};
pub use buffer::Buffer;
