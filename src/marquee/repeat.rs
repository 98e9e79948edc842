//! Repetition: how many copies of the text cover the viewport twice.
//!
//! Two strategies are offered. `Iterative` appends one copy at a time and
//! re-measures, so it is exact even when shaping is not additive (kerning,
//! ligatures across the seam). `SingleShot` measures one copy and divides;
//! it needs one extra measurement of the result and assumes widths add up,
//! which is only an approximation for proportional fonts.

use super::error::MarqueeError;
use crate::text::{FontDescriptor, TextMeasurer, TextSize};

/// How the repetition count is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatStrategy {
    /// Append and re-measure until the block is wide enough.
    #[default]
    Iterative,
    /// `ceil(2 × viewport / single width)` copies.
    SingleShot,
}

/// The repeated text block and its measurements.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    /// Number of copies in `text`.
    pub count: usize,
    /// The source text repeated `count` times.
    pub text: String,
    /// Measured size of one copy.
    pub single: TextSize,
    /// Measured size of `text`.
    pub block: TextSize,
}

/// Repeat `text` until its rendered width is at least `2 × viewport`.
///
/// The count is clamped to `1..=max_repeats`; if the cap is reached first
/// the block comes back short and a warning is logged.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn repeat_to_fill<M: TextMeasurer + ?Sized>(
    text: &str,
    font: &FontDescriptor,
    measurer: &M,
    viewport: f32,
    strategy: RepeatStrategy,
    max_repeats: usize,
) -> Result<Repetition, MarqueeError> {
    if !viewport.is_finite() || viewport <= 0.0 {
        return Err(MarqueeError::ViewportNotReady { width: viewport });
    }
    if text.is_empty() {
        return Err(MarqueeError::EmptyText);
    }

    let single = measurer.measure(text, font).ceil();
    if single.width <= 0.0 {
        return Err(MarqueeError::ZeroWidthText);
    }

    let target = 2.0 * viewport;
    let cap = max_repeats.max(1);

    let (count, repeated, block) = match strategy {
        RepeatStrategy::Iterative => {
            let mut repeated = text.to_string();
            let mut count = 1;
            let mut block = single;
            while block.width < target && count < cap {
                repeated.push_str(text);
                count += 1;
                block = measurer.measure(&repeated, font).ceil();
                log::trace!("repeat: {count} copies measure {}", block.width);
            }
            (count, repeated, block)
        }
        RepeatStrategy::SingleShot => {
            let wanted = (target / single.width).ceil();
            let count = if wanted >= cap as f32 { cap } else { (wanted as usize).max(1) };
            let repeated = text.repeat(count);
            let block = measurer.measure(&repeated, font).ceil();
            (count, repeated, block)
        }
    };

    if block.width < target {
        log::warn!(
            "repeat: {count} copies measure {}, short of {target} (cap {cap})",
            block.width
        );
    }

    Ok(Repetition {
        count,
        text: repeated,
        single,
        block,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every char advances the same amount.
    struct PerChar(f32);

    impl TextMeasurer for PerChar {
        #[allow(clippy::cast_precision_loss)]
        fn measure(&self, text: &str, _font: &FontDescriptor) -> TextSize {
            TextSize::new(text.chars().count() as f32 * self.0, 10.0).ceil()
        }
    }

    /// Adjacent chars overlap by one unit, so widths are not additive.
    struct Kerned(f32);

    impl TextMeasurer for Kerned {
        #[allow(clippy::cast_precision_loss)]
        fn measure(&self, text: &str, _font: &FontDescriptor) -> TextSize {
            let n = text.chars().count() as f32;
            let width = if n == 0.0 { 0.0 } else { n.mul_add(self.0, -(n - 1.0)) };
            TextSize::new(width, 10.0).ceil()
        }
    }

    fn font() -> FontDescriptor {
        FontDescriptor::default()
    }

    #[test]
    fn test_hello_single_shot() {
        let rep = repeat_to_fill("HELLO", &font(), &PerChar(12.0), 100.0, RepeatStrategy::SingleShot, 4096)
            .unwrap();
        assert_eq!(rep.single.width, 60.0);
        assert_eq!(rep.count, 4);
        assert_eq!(rep.text, "HELLOHELLOHELLOHELLO");
        assert_eq!(rep.block.width, 240.0);
    }

    #[test]
    fn test_hello_iterative_matches() {
        let rep = repeat_to_fill("HELLO", &font(), &PerChar(12.0), 100.0, RepeatStrategy::Iterative, 4096)
            .unwrap();
        assert_eq!(rep.count, 4);
        assert_eq!(rep.text, "HELLO".repeat(4));
    }

    #[test]
    fn test_single_char_exact() {
        for strategy in [RepeatStrategy::Iterative, RepeatStrategy::SingleShot] {
            let rep = repeat_to_fill("A", &font(), &PerChar(5.0), 50.0, strategy, 4096).unwrap();
            assert_eq!(rep.count, 20);
            assert_eq!(rep.block.width, 100.0);
        }
    }

    #[test]
    fn test_single_shot_is_approximate_for_kerning() {
        // One copy of "AB" is 2×5-1 = 9 wide, but k copies are only 8k+1 wide.
        // Single-shot trusts ceil(36/9) = 4 copies (33 wide); iterating finds 5.
        let kerned = Kerned(5.0);
        let single = repeat_to_fill("AB", &font(), &kerned, 18.0, RepeatStrategy::SingleShot, 4096).unwrap();
        let exact = repeat_to_fill("AB", &font(), &kerned, 18.0, RepeatStrategy::Iterative, 4096).unwrap();

        assert_eq!(single.count, 4);
        assert_eq!(single.block.width, 33.0);
        assert_eq!(exact.count, 5);
        assert_eq!(exact.block.width, 41.0);
    }

    #[test]
    fn test_empty_text() {
        let err = repeat_to_fill("", &font(), &PerChar(5.0), 50.0, RepeatStrategy::SingleShot, 4096);
        assert_eq!(err, Err(MarqueeError::EmptyText));
    }

    #[test]
    fn test_viewport_not_ready() {
        for width in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let err = repeat_to_fill("A", &font(), &PerChar(5.0), width, RepeatStrategy::Iterative, 4096);
            assert!(matches!(err, Err(MarqueeError::ViewportNotReady { .. })));
        }
    }

    #[test]
    fn test_zero_width_text() {
        let err = repeat_to_fill("A", &font(), &PerChar(0.0), 50.0, RepeatStrategy::SingleShot, 4096);
        assert_eq!(err, Err(MarqueeError::ZeroWidthText));
    }

    #[test]
    fn test_repeat_cap() {
        for strategy in [RepeatStrategy::Iterative, RepeatStrategy::SingleShot] {
            let rep = repeat_to_fill("A", &font(), &PerChar(1.0), 1000.0, strategy, 8).unwrap();
            assert_eq!(rep.count, 8);
            assert_eq!(rep.text, "AAAAAAAA");
        }
    }

    #[test]
    fn test_already_wide_enough() {
        let rep = repeat_to_fill("long text", &font(), &PerChar(10.0), 20.0, RepeatStrategy::SingleShot, 4096)
            .unwrap();
        assert_eq!(rep.count, 1);
    }

    proptest! {
        #[test]
        fn prop_block_covers_twice_the_viewport(
            text in "[a-zA-Z ]{1,12}",
            advance in 1u8..40,
            viewport in 1u16..2000,
            single_shot in any::<bool>(),
        ) {
            let strategy = if single_shot { RepeatStrategy::SingleShot } else { RepeatStrategy::Iterative };
            let viewport = f32::from(viewport);
            let rep = repeat_to_fill(&text, &font(), &PerChar(f32::from(advance)), viewport, strategy, usize::MAX)
                .unwrap();
            prop_assert!(rep.block.width >= 2.0 * viewport);
            prop_assert_eq!(rep.text, text.repeat(rep.count));
        }

        #[test]
        fn prop_iterative_is_minimal(
            text in "[a-z]{1,8}",
            advance in 1u8..20,
            viewport in 1u16..1500,
        ) {
            let viewport = f32::from(viewport);
            let measurer = Kerned(f32::from(advance) + 1.0);
            let rep = repeat_to_fill(&text, &font(), &measurer, viewport, RepeatStrategy::Iterative, usize::MAX)
                .unwrap();
            prop_assert!(rep.block.width >= 2.0 * viewport);
            if rep.count > 1 {
                let shorter = measurer.measure(&text.repeat(rep.count - 1), &font());
                prop_assert!(shorter.width < 2.0 * viewport);
            }
        }
    }
}
