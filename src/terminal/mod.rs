//! Terminal output: presenting a [`Buffer`](crate::Buffer) on a real terminal.

mod output;

pub use output::Presenter;
