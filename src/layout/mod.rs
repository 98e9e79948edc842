//! Layout module: Integer bounds assigned to widgets by the host layout.

mod rect;

pub use rect::Rect;
