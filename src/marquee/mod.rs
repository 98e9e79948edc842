//! Marquee: A seamless, endlessly scrolling line of text.
//!
//! The widget repeats its source text until one block is at least twice the
//! viewport width, places two identical blocks back to back, and asks its
//! host to animate the scroll offset from 0 to one block width, linearly and
//! forever. When a cycle ends the picture is identical to where it started,
//! so the wrap is invisible.
//!
//! # Example
//!
//! ```rust
//! use marquee::{MarqueeConfig, MarqueeWidget, Rect, TerminalHost};
//!
//! let host = TerminalHost::new(Rect::new(0, 0, 20, 1));
//! let mut marquee = MarqueeWidget::new(host, MarqueeConfig::new("Breaking news · "));
//! assert!(marquee.start().is_scrolling());
//! assert!(marquee.block_width() >= 40.0);
//! ```

mod config;
mod error;
mod repeat;
mod widget;

pub use config::{LoopTarget, MarqueeColors, MarqueeConfig};
pub use error::{ConfigError, MarqueeError};
pub use repeat::{repeat_to_fill, RepeatStrategy, Repetition};
pub use widget::{MarqueeState, MarqueeWidget, StartOutcome};
