//! Error types for marquee setup.

use crate::host::HostError;
use thiserror::Error;

/// Why a marquee could not start scrolling.
///
/// None of these are fatal: [`MarqueeWidget::start`](super::MarqueeWidget::start)
/// reports them through [`StartOutcome`](super::StartOutcome) and leaves the
/// widget in a safe state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarqueeError {
    /// There is nothing to scroll.
    #[error("source text is empty")]
    EmptyText,
    /// The host has not assigned a usable width yet.
    #[error("viewport width {width} is not laid out yet")]
    ViewportNotReady {
        /// Width reported by the host.
        width: f32,
    },
    /// The text is non-empty but renders with no horizontal extent.
    #[error("source text measures zero width")]
    ZeroWidthText,
    /// The host refused to attach or animate the content.
    #[error("host rejected the marquee: {0}")]
    Host(#[from] HostError),
}

/// Problems with a [`MarqueeConfig`](super::MarqueeConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A zero-length loop is rendered as an instant jump.
    #[error("animation duration is zero")]
    ZeroDuration,
    /// At least one copy of the text is always needed.
    #[error("repeat limit must be at least 1")]
    ZeroRepeatLimit,
    /// A seconds value could not become a `Duration`.
    #[error("{field} must be a finite, non-negative number of seconds, got {value}")]
    InvalidSeconds {
        /// Name of the offending setting.
        field: &'static str,
        /// Value as given.
        value: f64,
    },
}
