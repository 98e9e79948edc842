//! Marquee configuration with named defaults.

use super::error::ConfigError;
use super::repeat::RepeatStrategy;
use crate::buffer::Rgb;
use crate::text::FontDescriptor;
use std::time::Duration;

/// Colors passed through to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarqueeColors {
    /// Text color.
    pub text: Rgb,
    /// Background behind the text labels.
    pub text_background: Rgb,
    /// Background of the whole view.
    pub background: Rgb,
}

impl Default for MarqueeColors {
    fn default() -> Self {
        Self {
            text: Rgb::WHITE,
            text_background: Rgb::BLACK,
            background: Rgb::BLACK,
        }
    }
}

/// Where one loop of the scroll animation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopTarget {
    /// Scroll exactly one block width. The wrap is seamless because the
    /// second block is identical to the first.
    #[default]
    BlockWidth,
    /// Scroll one block width plus the viewport width. The wrap jumps by a
    /// viewport width, so the loop is visibly discontinuous.
    BlockPlusViewport,
}

impl LoopTarget {
    /// Target offset for a block of `block_width` in a `viewport`-wide view.
    #[inline]
    pub fn offset(self, block_width: f32, viewport: f32) -> f32 {
        match self {
            Self::BlockWidth => block_width,
            Self::BlockPlusViewport => block_width + viewport,
        }
    }
}

/// Configuration for the marquee widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeConfig {
    /// Text to scroll.
    pub text: String,
    /// Font used for measurement and rendering.
    pub font: FontDescriptor,
    /// Text and background colors.
    pub colors: MarqueeColors,
    /// Length of one full loop.
    pub duration: Duration,
    /// Wait before the first loop begins.
    pub start_delay: Duration,
    /// Retry delay when `start` runs before layout.
    pub defer_delay: Duration,
    /// How the repetition count is computed.
    pub strategy: RepeatStrategy,
    /// Where each loop ends.
    pub loop_target: LoopTarget,
    /// Upper bound on copies of the text.
    pub max_repeats: usize,
}

impl MarqueeConfig {
    /// Default loop length.
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(30);
    /// Default wait for the host's layout pass.
    pub const DEFAULT_DEFER_DELAY: Duration = Duration::from_millis(200);
    /// Default cap on repetitions.
    pub const DEFAULT_MAX_REPEATS: usize = 4096;

    /// Default configuration scrolling `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the font (builder pattern).
    #[must_use]
    pub fn with_font(mut self, font: FontDescriptor) -> Self {
        self.font = font;
        self
    }

    /// Set the colors (builder pattern).
    #[must_use]
    pub const fn with_colors(mut self, colors: MarqueeColors) -> Self {
        self.colors = colors;
        self
    }

    /// Set the loop duration (builder pattern).
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the start delay (builder pattern).
    #[must_use]
    pub const fn with_start_delay(mut self, delay: Duration) -> Self {
        self.start_delay = delay;
        self
    }

    /// Set the deferral retry delay (builder pattern).
    #[must_use]
    pub const fn with_defer_delay(mut self, delay: Duration) -> Self {
        self.defer_delay = delay;
        self
    }

    /// Set the repetition strategy (builder pattern).
    #[must_use]
    pub const fn with_strategy(mut self, strategy: RepeatStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the loop target policy (builder pattern).
    #[must_use]
    pub const fn with_loop_target(mut self, target: LoopTarget) -> Self {
        self.loop_target = target;
        self
    }

    /// Set the repetition cap (builder pattern).
    #[must_use]
    pub const fn with_max_repeats(mut self, max_repeats: usize) -> Self {
        self.max_repeats = max_repeats;
        self
    }

    /// Convert floating seconds into a `Duration`.
    pub fn seconds(field: &'static str, value: f64) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(value).map_err(|_| ConfigError::InvalidSeconds { field, value })
    }

    /// Report the first setting that will degrade the animation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        if self.max_repeats == 0 {
            return Err(ConfigError::ZeroRepeatLimit);
        }
        Ok(())
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontDescriptor::default(),
            colors: MarqueeColors::default(),
            duration: Self::DEFAULT_DURATION,
            start_delay: Duration::ZERO,
            defer_delay: Self::DEFAULT_DEFER_DELAY,
            strategy: RepeatStrategy::default(),
            loop_target: LoopTarget::default(),
            max_repeats: Self::DEFAULT_MAX_REPEATS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarqueeConfig::default();
        assert_eq!(config.duration, Duration::from_secs(30));
        assert_eq!(config.start_delay, Duration::ZERO);
        assert_eq!(config.defer_delay, Duration::from_millis(200));
        assert_eq!(config.loop_target, LoopTarget::BlockWidth);
        assert_eq!(config.strategy, RepeatStrategy::Iterative);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        let zero = MarqueeConfig::new("x").with_duration(Duration::ZERO);
        assert_eq!(zero.validate(), Err(ConfigError::ZeroDuration));

        let capped = MarqueeConfig::new("x").with_max_repeats(0);
        assert_eq!(capped.validate(), Err(ConfigError::ZeroRepeatLimit));
    }

    #[test]
    fn test_seconds() {
        assert_eq!(MarqueeConfig::seconds("duration", 0.2), Ok(Duration::from_millis(200)));
        assert!(matches!(
            MarqueeConfig::seconds("start_delay", -1.0),
            Err(ConfigError::InvalidSeconds { field: "start_delay", .. })
        ));
        assert!(MarqueeConfig::seconds("duration", f64::NAN).is_err());
    }

    #[test]
    fn test_loop_target_offset() {
        assert_eq!(LoopTarget::BlockWidth.offset(240.0, 100.0), 240.0);
        assert_eq!(LoopTarget::BlockPlusViewport.offset(240.0, 100.0), 340.0);
    }
}
