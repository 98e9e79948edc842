//! Marquee widget: turns text, style and timing into an endless scroll.
//!
//! # Lifecycle
//!
//! ```text
//!            start() ─ viewport ≤ 0 ─▶ Pending ── on_layout / poll ──┐
//!   Idle ──┤                                                         │
//!            start() ─ ready ───────▶ Scrolling ◀────────────────────┘
//!   ▲                                   │
//!   └──────── stop() / drop / empty ────┘
//! ```
//!
//! Every `start()` first cancels the previous animation and detaches the
//! previous content, so calling it repeatedly never stacks labels or loops.

use super::config::{MarqueeColors, MarqueeConfig};
use super::error::MarqueeError;
use super::repeat::{repeat_to_fill, Repetition};
use crate::buffer::{Buffer, Rgb};
use crate::host::{AnimationId, AnimationRequest, HostError, MarqueeHost, ScrollContent, TerminalHost, TextRun};
use crate::layout::Rect;
use crate::text::{CellMeasurer, FontDescriptor, TextMeasurer, TextSize};
use crate::widget::Widget;
use std::time::{Duration, Instant};

/// Observable state of a marquee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeState {
    /// Configured, not animating.
    Idle,
    /// `start` ran before layout; waiting for a usable width.
    Pending,
    /// The looping animation is active.
    Scrolling,
}

/// Result of [`MarqueeWidget::start`].
#[derive(Debug, Clone, PartialEq)]
pub enum StartOutcome {
    /// Content attached and this animation requested.
    Scrolling(AnimationRequest),
    /// The host has no width yet; start will be retried.
    Deferred,
    /// Nothing to animate (empty or zero-width text).
    Static(MarqueeError),
    /// The host rejected the content or the animation.
    Failed(MarqueeError),
}

impl StartOutcome {
    /// Check if the marquee is now scrolling.
    pub const fn is_scrolling(&self) -> bool {
        matches!(self, Self::Scrolling(_))
    }
}

/// Everything derived by one successful `start`.
#[derive(Debug, Clone)]
struct Scroll {
    repetition: Repetition,
    viewport: f32,
    animation: AnimationId,
    request: AnimationRequest,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Pending {
        since: Instant,
    },
    Scrolling(Scroll),
}

/// A horizontally auto-scrolling text view.
///
/// `H` is the environment the widget is mounted in and `M` measures text
/// in the host's units.
#[derive(Debug)]
pub struct MarqueeWidget<H: MarqueeHost, M: TextMeasurer = CellMeasurer> {
    config: MarqueeConfig,
    host: H,
    measurer: M,
    phase: Phase,
    dirty: bool,
}

impl<H: MarqueeHost> MarqueeWidget<H> {
    /// Create a marquee measuring in terminal cells.
    pub fn new(host: H, config: MarqueeConfig) -> Self {
        Self::with_measurer(host, CellMeasurer, config)
    }
}

impl<H: MarqueeHost, M: TextMeasurer> MarqueeWidget<H, M> {
    /// Create a marquee with a custom text measurer.
    pub fn with_measurer(mut host: H, measurer: M, config: MarqueeConfig) -> Self {
        host.set_idle_background(config.colors.background);
        Self {
            config,
            host,
            measurer,
            phase: Phase::Idle,
            dirty: true,
        }
    }

    /// Replace text, font, colors and timing in one call.
    ///
    /// Takes effect on the next [`start`](Self::start).
    pub fn configure(
        &mut self,
        text: impl Into<String>,
        font: FontDescriptor,
        colors: MarqueeColors,
        duration: Duration,
        start_delay: Duration,
    ) {
        self.config.text = text.into();
        self.config.font = font;
        self.config.colors = colors;
        self.host.set_idle_background(colors.background);
        self.config.duration = duration;
        self.config.start_delay = start_delay;
        self.dirty = true;
    }

    /// Set the text to scroll.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = text.into();
        self.dirty = true;
    }

    /// Set the font.
    pub fn set_font(&mut self, font: FontDescriptor) {
        self.config.font = font;
        self.dirty = true;
    }

    /// Set the text color.
    pub const fn set_text_color(&mut self, color: Rgb) {
        self.config.colors.text = color;
        self.dirty = true;
    }

    /// Set the background behind the text labels.
    pub const fn set_text_background(&mut self, color: Rgb) {
        self.config.colors.text_background = color;
        self.dirty = true;
    }

    /// Set the background of the whole view.
    pub fn set_background(&mut self, color: Rgb) {
        self.config.colors.background = color;
        self.host.set_idle_background(color);
        self.dirty = true;
    }

    /// Set the length of one loop.
    pub const fn set_duration(&mut self, duration: Duration) {
        self.config.duration = duration;
        self.dirty = true;
    }

    /// Set the wait before the first loop.
    pub const fn set_start_delay(&mut self, delay: Duration) {
        self.config.start_delay = delay;
        self.dirty = true;
    }

    /// Set the loop length in seconds; invalid values become zero.
    pub fn set_duration_secs(&mut self, secs: f64) {
        self.set_duration(Self::lenient_seconds("duration", secs));
    }

    /// Set the start delay in seconds; invalid values become zero.
    pub fn set_start_delay_secs(&mut self, secs: f64) {
        self.set_start_delay(Self::lenient_seconds("start_delay", secs));
    }

    fn lenient_seconds(field: &'static str, secs: f64) -> Duration {
        MarqueeConfig::seconds(field, secs).unwrap_or_else(|err| {
            log::warn!("marquee: {err}; using 0");
            Duration::ZERO
        })
    }

    /// Get the configuration.
    pub const fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Get the host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Get the host mutably (e.g. to feed it layout changes).
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current lifecycle state.
    pub const fn state(&self) -> MarqueeState {
        match self.phase {
            Phase::Idle => MarqueeState::Idle,
            Phase::Pending { .. } => MarqueeState::Pending,
            Phase::Scrolling(_) => MarqueeState::Scrolling,
        }
    }

    const fn scroll(&self) -> Option<&Scroll> {
        match &self.phase {
            Phase::Scrolling(scroll) => Some(scroll),
            _ => None,
        }
    }

    /// Height of one line of the source text, rounded up.
    ///
    /// Useful for sizing a container around the marquee.
    pub fn text_height(&self) -> f32 {
        self.measurer.measure(&self.config.text, &self.config.font).ceil().height
    }

    /// The repeated text block while scrolling.
    pub fn repeated_text(&self) -> Option<&str> {
        self.scroll().map(|s| s.repetition.text.as_str())
    }

    /// Copies of the source text in the block (0 unless scrolling).
    pub fn repeat_count(&self) -> usize {
        self.scroll().map_or(0, |s| s.repetition.count)
    }

    /// Measured width of the repeated block (0 unless scrolling).
    pub fn block_width(&self) -> f32 {
        self.scroll().map_or(0.0, |s| s.repetition.block.width)
    }

    /// Extent of the scrollable area: two back-to-back blocks.
    pub fn content_width(&self) -> f32 {
        2.0 * self.block_width()
    }

    /// The running animation, if any.
    pub fn animation(&self) -> Option<AnimationId> {
        self.scroll().map(|s| s.animation)
    }

    /// The request behind the running animation, if any.
    pub fn request(&self) -> Option<&AnimationRequest> {
        self.scroll().map(|s| &s.request)
    }

    /// Measure, lay out and start the looping scroll.
    ///
    /// Safe to call any number of times; each call fully replaces what the
    /// previous one set up.
    pub fn start(&mut self) -> StartOutcome {
        self.start_at(Instant::now())
    }

    /// [`start`](Self::start) with an explicit clock, for deferral timing.
    pub fn start_at(&mut self, now: Instant) -> StartOutcome {
        self.host.sync_clock(now);
        self.reset();
        self.dirty = true;

        if let Err(err) = self.config.validate() {
            log::warn!("marquee: {err}; continuing");
        }

        let viewport = self.host.viewport_width();
        let repetition = match repeat_to_fill(
            &self.config.text,
            &self.config.font,
            &self.measurer,
            viewport,
            self.config.strategy,
            self.config.max_repeats,
        ) {
            Ok(repetition) => repetition,
            Err(MarqueeError::ViewportNotReady { width }) => {
                log::debug!("marquee: viewport width {width}, deferring start");
                self.phase = Phase::Pending { since: now };
                return StartOutcome::Deferred;
            }
            Err(err) => {
                log::debug!("marquee: nothing to scroll: {err}");
                return StartOutcome::Static(err);
            }
        };

        let block = repetition.block;
        let content = ScrollContent {
            runs: vec![
                self.text_run(&repetition.text, 0.0, block),
                self.text_run(&repetition.text, block.width, block),
            ],
            content_width: 2.0 * block.width,
            background: self.config.colors.background,
        };
        if let Err(err) = self.host.attach_content(content) {
            return self.fail(err);
        }

        let target = self.config.loop_target.offset(block.width, viewport);
        let request = AnimationRequest::looping(target, self.config.duration, self.config.start_delay);
        let animation = match self.host.animate(request) {
            Ok(id) => id,
            Err(err) => {
                self.host.detach_all_content();
                return self.fail(err);
            }
        };

        log::debug!(
            "marquee: {} copies, block {}x{}, scrolling to {target} over {:?} ({animation})",
            repetition.count,
            block.width,
            block.height,
            self.config.duration
        );
        self.phase = Phase::Scrolling(Scroll {
            repetition,
            viewport,
            animation,
            request,
        });
        StartOutcome::Scrolling(request)
    }

    fn text_run(&self, text: &str, origin_x: f32, size: TextSize) -> TextRun {
        TextRun {
            text: text.to_string(),
            origin_x,
            size,
            fg: self.config.colors.text,
            bg: self.config.colors.text_background,
            modifiers: self.config.font.modifiers,
        }
    }

    fn fail(&self, err: HostError) -> StartOutcome {
        log::warn!("marquee: host failure, staying idle: {err}");
        StartOutcome::Failed(err.into())
    }

    /// Layout-ready signal from the host.
    ///
    /// Resolves a pending start, and restarts a running scroll whose
    /// viewport width changed. Returns `None` when nothing had to happen.
    pub fn on_layout(&mut self, now: Instant) -> Option<StartOutcome> {
        let width = self.host.viewport_width();
        let resize = match &self.phase {
            Phase::Idle => return None,
            Phase::Pending { .. } => false,
            Phase::Scrolling(scroll) => {
                if (scroll.viewport - width).abs() < f32::EPSILON {
                    return None;
                }
                true
            }
        };
        if resize {
            log::debug!("marquee: viewport changed to {width}, restarting");
        }
        Some(self.start_at(now))
    }

    /// Retry a pending start once the defer delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<StartOutcome> {
        match self.phase {
            Phase::Pending { since }
                if now.saturating_duration_since(since) >= self.config.defer_delay =>
            {
                Some(self.start_at(now))
            }
            _ => None,
        }
    }

    /// Stop scrolling and remove the content.
    pub fn stop(&mut self) {
        self.reset();
        self.dirty = true;
    }

    /// Cancel the animation and detach everything, whatever the phase.
    fn reset(&mut self) {
        if let Phase::Scrolling(scroll) = std::mem::take(&mut self.phase) {
            self.host.cancel_animation(scroll.animation);
        }
        self.host.detach_all_content();
    }
}

impl<H: MarqueeHost, M: TextMeasurer> Drop for MarqueeWidget<H, M> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<M: TextMeasurer> Widget for MarqueeWidget<TerminalHost, M> {
    fn bounds(&self) -> Rect {
        self.host.bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.host.set_bounds(bounds);
        self.dirty = true;
        let now = self.host.now();
        self.on_layout(now);
    }

    fn render(&self, buffer: &mut Buffer) {
        self.host.render(buffer);
    }

    fn tick(&mut self, now: Instant) {
        self.host.tick(now);
        if self.poll(now).is_some() || self.state() == MarqueeState::Scrolling {
            self.dirty = true;
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
