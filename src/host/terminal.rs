//! Terminal host: composites marquee content into a cell buffer.
//!
//! Content coordinates are terminal columns, so this host pairs with
//! [`CellMeasurer`](crate::CellMeasurer). The host keeps its own notion of
//! "now", advanced by [`TerminalHost::tick`]; animations start at the current
//! host time and are sampled at it when rendering.

use super::{AnimationId, AnimationRequest, Animator, HostError, MarqueeHost, ScrollContent, TextRun};
use crate::buffer::{Buffer, Cell, Rgb};
use crate::layout::Rect;
use std::time::Instant;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A [`MarqueeHost`] that renders into a [`Buffer`] region.
#[derive(Debug)]
pub struct TerminalHost {
    bounds: Rect,
    content: Option<ScrollContent>,
    animator: Animator,
    animation: Option<AnimationId>,
    now: Instant,
    background: Rgb,
}

impl TerminalHost {
    /// Create a host occupying `bounds`.
    ///
    /// Pass [`Rect::ZERO`] to model a widget that has not been laid out yet.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            content: None,
            animator: Animator::new(),
            animation: None,
            now: Instant::now(),
            background: Rgb::BLACK,
        }
    }

    /// Get the current bounds.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move or resize the host area.
    pub const fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Background drawn when no content is attached.
    pub const fn set_background(&mut self, background: Rgb) {
        self.background = background;
    }

    /// Advance the host clock.
    ///
    /// Earlier instants are ignored so the clock never runs backwards.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Current host time.
    pub const fn now(&self) -> Instant {
        self.now
    }

    /// The attached scroll content, if any.
    pub const fn content(&self) -> Option<&ScrollContent> {
        self.content.as_ref()
    }

    /// The animation driving the scroll offset, if any.
    pub const fn animation(&self) -> Option<AnimationId> {
        self.animation
    }

    /// The timeline of running animations.
    pub const fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Scroll offset at the current host time.
    pub fn offset(&self) -> f32 {
        self.animation
            .and_then(|id| self.animator.sample(id, self.now))
            .unwrap_or(0.0)
    }

    /// Cancel an animation, reporting ids this host does not know.
    pub fn try_cancel(&mut self, id: AnimationId) -> Result<(), HostError> {
        if self.animation == Some(id) {
            self.animation = None;
        }
        if self.animator.cancel(id) {
            Ok(())
        } else {
            Err(HostError::UnknownAnimation(id))
        }
    }

    /// Draw the scroll area into `buffer`, clipped to the host bounds.
    pub fn render(&self, buffer: &mut Buffer) {
        let area = self.bounds.intersection(&buffer.area());
        if area.is_empty() {
            return;
        }

        let background = self.content.as_ref().map_or(self.background, |c| c.background);
        buffer.fill_rect(area, &Cell::blank(background));

        let Some(content) = &self.content else {
            return;
        };
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.offset().round() as i32;
        for run in &content.runs {
            draw_run(buffer, area, run, offset);
        }
    }
}

/// Draw one label shifted left by `offset` columns.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_run(buffer: &mut Buffer, area: Rect, run: &TextRun, offset: i32) {
    let rows = (run.size.height.max(1.0) as u16).min(area.height);
    let y = area.y + (area.height - rows) / 2;
    let style = (run.fg, run.bg, run.modifiers);
    let visible = i32::from(area.width);

    let mut col = run.origin_x.round() as i32 - offset;
    if col >= visible || col + run.size.width.ceil() as i32 <= 0 {
        return;
    }

    for grapheme in run.text.graphemes(true) {
        if col >= visible {
            break;
        }
        let width = grapheme.width().clamp(1, 2) as i32;
        if col >= 0 {
            buffer.put_grapheme(area.x + col as u16, y, grapheme, style, area.right());
        } else if col + width > 0 {
            // Right half of a wide glyph scrolled past the left edge.
            buffer.set(area.x, y, Cell::blank(run.bg));
        }
        col += width;
    }
}

impl MarqueeHost for TerminalHost {
    fn viewport_width(&self) -> f32 {
        f32::from(self.bounds.width)
    }

    fn detach_all_content(&mut self) {
        self.content = None;
    }

    fn attach_content(&mut self, content: ScrollContent) -> Result<(), HostError> {
        if self.content.is_some() {
            log::debug!("terminal host: replacing attached content");
        }
        self.content = Some(content);
        Ok(())
    }

    fn animate(&mut self, request: AnimationRequest) -> Result<AnimationId, HostError> {
        if self.content.is_none() {
            return Err(HostError::NoContent);
        }
        let id = self.animator.start(request, self.now);
        self.animation = Some(id);
        Ok(id)
    }

    fn cancel_animation(&mut self, id: AnimationId) {
        if let Err(err) = self.try_cancel(id) {
            log::debug!("terminal host: {err}");
        }
    }

    fn sync_clock(&mut self, now: Instant) {
        self.tick(now);
    }

    fn set_idle_background(&mut self, background: Rgb) {
        self.set_background(background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Modifiers;
    use crate::text::TextSize;
    use std::time::Duration;

    fn run(text: &str, origin_x: f32) -> TextRun {
        #[allow(clippy::cast_precision_loss)]
        let width = text.chars().count() as f32;
        TextRun {
            text: text.to_string(),
            origin_x,
            size: TextSize::new(width, 1.0),
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            modifiers: Modifiers::empty(),
        }
    }

    fn content(block: &str) -> ScrollContent {
        #[allow(clippy::cast_precision_loss)]
        let width = block.chars().count() as f32;
        ScrollContent {
            runs: vec![run(block, 0.0), run(block, width)],
            content_width: width * 2.0,
            background: Rgb::BLACK,
        }
    }

    #[test]
    fn test_viewport_width_from_bounds() {
        let mut host = TerminalHost::new(Rect::ZERO);
        assert_eq!(host.viewport_width(), 0.0);
        host.set_bounds(Rect::new(0, 0, 12, 1));
        assert_eq!(host.viewport_width(), 12.0);
    }

    #[test]
    fn test_animate_requires_content() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 10, 1));
        let request = AnimationRequest::looping(10.0, Duration::from_secs(10), Duration::ZERO);
        assert_eq!(host.animate(request), Err(HostError::NoContent));
    }

    #[test]
    fn test_render_scrolls_content() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 6, 1));
        let t0 = Instant::now();
        host.tick(t0);
        host.attach_content(content("ABCDEFGH")).unwrap();
        host.animate(AnimationRequest::looping(8.0, Duration::from_secs(8), Duration::ZERO))
            .unwrap();

        let mut buffer = Buffer::new(6, 1);
        host.render(&mut buffer);
        assert_eq!(buffer.row_text(0, 0, 6), "ABCDEF");

        host.tick(t0 + Duration::from_secs(3));
        host.render(&mut buffer);
        assert_eq!(buffer.row_text(0, 0, 6), "DEFGHA");

        // One full cycle later the picture is identical to the start.
        host.tick(t0 + Duration::from_secs(8));
        host.render(&mut buffer);
        assert_eq!(buffer.row_text(0, 0, 6), "ABCDEF");
    }

    #[test]
    fn test_render_clips_to_bounds() {
        let mut host = TerminalHost::new(Rect::new(2, 0, 3, 1));
        host.attach_content(content("XYZW")).unwrap();

        let mut buffer = Buffer::new(8, 1);
        host.render(&mut buffer);
        assert_eq!(buffer.row_text(0, 0, 8), "  XYZ   ");
    }

    #[test]
    fn test_cancel_unknown_animation() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 4, 1));
        assert_eq!(
            host.try_cancel(AnimationId(7)),
            Err(HostError::UnknownAnimation(AnimationId(7)))
        );
    }

    #[test]
    fn test_detach_clears_render() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 4, 1));
        host.attach_content(content("QQQQ")).unwrap();
        host.detach_all_content();

        let mut buffer = Buffer::new(4, 1);
        host.render(&mut buffer);
        assert_eq!(buffer.row_text(0, 0, 4), "    ");
    }

    #[test]
    fn test_animation_bookkeeping() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 4, 1));
        let block = content("ABCD");
        host.attach_content(block.clone()).unwrap();
        assert_eq!(host.content(), Some(&block));

        let request = AnimationRequest::looping(4.0, Duration::from_secs(4), Duration::ZERO);
        let id = host.animate(request).unwrap();
        assert_eq!(host.animation(), Some(id));
        assert_eq!(host.animator().request(id), Some(&request));

        host.cancel_animation(id);
        assert_eq!(host.animation(), None);
        assert!(host.animator().is_empty());
    }

    #[test]
    fn test_sync_clock_stamps_new_animations() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 8, 1));
        let late = host.now() + Duration::from_secs(10);
        host.sync_clock(late);
        assert_eq!(host.now(), late);

        // Earlier instants never rewind the clock.
        host.sync_clock(late - Duration::from_secs(3));
        assert_eq!(host.now(), late);

        host.attach_content(content("ABCDEFGH")).unwrap();
        host.animate(AnimationRequest::looping(8.0, Duration::from_secs(8), Duration::from_secs(2)))
            .unwrap();
        host.tick(late + Duration::from_secs(1));
        assert_eq!(host.offset(), 0.0);
        host.tick(late + Duration::from_secs(4));
        assert!((host.offset() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_idle_background_fills_area() {
        let mut host = TerminalHost::new(Rect::new(0, 0, 3, 1));
        let navy = Rgb::from((0, 0, 128));
        host.set_idle_background(navy);

        let mut buffer = Buffer::new(3, 1);
        host.render(&mut buffer);
        assert_eq!(buffer.get(0, 0).map(Cell::bg), Some(navy));
    }
}
