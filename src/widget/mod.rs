//! Widget trait for components drawn into a [`Buffer`](crate::Buffer).
//!
//! [`MarqueeWidget`](crate::MarqueeWidget) implements it when mounted in a
//! [`TerminalHost`](crate::TerminalHost).

mod traits;

pub use traits::Widget;
