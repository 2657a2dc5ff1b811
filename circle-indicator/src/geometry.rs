//! Layout geometry for the segmented ring.
//!
//! Everything the renderer needs is derived here from the available size and
//! the segment count: ring radius and center, per-segment arc and gap spans,
//! stroke width, and the largest text size whose widest label still fits
//! inside the ring.

use glam::Vec2;

use crate::{px::PxSize, text::TextMeasurer};

/// Fraction of the half-extent actually used by the ring, leaving a margin so
/// the circle never touches the bounding box edge.
const RADIUS_SCALE: f32 = 0.9;

/// Base gap between segments, in degrees, before the halving search.
const BASE_GAP_DEGREES: f32 = 5.0;

/// Minimum legible ring thickness.
const MIN_STROKE_WIDTH: f32 = 5.0;

/// Ring thickness as a fraction of the radius.
const STROKE_RADIUS_RATIO: f32 = 0.1;

/// Horizontal space available to the value label, as a fraction of the radius.
const TEXT_WIDTH_RATIO: f32 = 0.7;

/// Derived layout for one measure pass.
///
/// Pure function of `(available size, max_value)`; owned by the widget and
/// recomputed whenever either input changes. Invariant:
/// `max_value * (arc_span + gap_span) == 360` and `gap_span <= arc_span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Ring radius in pixels.
    pub radius: f32,
    /// Center of the ring.
    pub center: Vec2,
    /// Arc swept by one segment, in degrees.
    pub arc_span: f32,
    /// Gap between adjacent segments, in degrees.
    pub gap_span: f32,
    /// Thickness of the visible annulus.
    pub stroke_width: f32,
    /// Text size at which the widest label fits inside the ring.
    pub text_size: f32,
}

impl Geometry {
    /// Computes the layout for the given available size and segment count.
    ///
    /// Degenerate sizes are not an error: a 0×0 box produces a zero radius
    /// and the renderer draws nothing visible.
    pub fn compute(available: PxSize, max_value: u32, measurer: &dyn TextMeasurer) -> Self {
        let radius = available.min_dimension().to_f32() / 2.0 * RADIUS_SCALE;
        let center = Vec2::new(
            available.width.to_f32() / 2.0,
            available.height.to_f32() / 2.0,
        );

        let (arc_span, gap_span) = segment_spans(max_value);
        let stroke_width = (radius * STROKE_RADIUS_RATIO).max(MIN_STROKE_WIDTH);
        let text_size = fit_text_size(&max_value.to_string(), radius, measurer);

        tracing::trace!(
            radius,
            arc_span,
            gap_span,
            stroke_width,
            text_size,
            "geometry recomputed"
        );

        Self {
            radius,
            center,
            arc_span,
            gap_span,
            stroke_width,
            text_size,
        }
    }
}

/// Finds the arc and gap spans for `max_value` segments.
///
/// Starts from the base gap and halves it until the arcs it leaves over are
/// at least as large as the gap itself, keeping
/// `max_value * (arc + gap) == 360` at every step. The result is the largest
/// power-of-two fraction of the base gap that still satisfies `gap <= arc`,
/// so the visual gap proportion stays stable across segment counts.
fn segment_spans(max_value: u32) -> (f32, f32) {
    let max_value = max_value as f32;
    let mut gap = BASE_GAP_DEGREES;
    let mut arc = BASE_GAP_DEGREES * 2.0;
    loop {
        if gap > arc {
            gap /= 2.0;
        }
        arc = (360.0 - gap * max_value) / max_value;
        if gap <= arc {
            return (arc, gap);
        }
    }
}

/// Searches upward from size 1 for the largest text size at which the label
/// still fits within [`TEXT_WIDTH_RATIO`] of the radius.
///
/// The search is capped at twice the radius. Any label wider than a single
/// glyph outgrows that bound long before reaching it under sane font
/// metrics, so the cap only bites when a measurer reports widths that never
/// grow with the size, and the search must not spin forever on those.
fn fit_text_size(widest_label: &str, radius: f32, measurer: &dyn TextMeasurer) -> f32 {
    let limit = radius * TEXT_WIDTH_RATIO;
    let max_size = (radius * 2.0).max(1.0);
    let mut size = 1.0;
    while size < max_size && measurer.text_width(widest_label, size + 1.0) <= limit {
        size += 1.0;
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{px::PxSize, text::ApproxTextMeasurer};

    const TOLERANCE: f32 = 1e-4;

    fn geometry(width: i32, height: i32, max_value: u32) -> Geometry {
        Geometry::compute(PxSize::from((width, height)), max_value, &ApproxTextMeasurer)
    }

    #[test]
    fn test_radius_is_ninety_percent_of_half_extent() {
        let g = geometry(200, 100, 10);
        assert_eq!(g.radius, 45.0);
        assert_eq!(g.center, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_spans_tile_the_full_circle() {
        for max_value in 2..=100 {
            let (arc, gap) = segment_spans(max_value);
            let total = max_value as f32 * (arc + gap);
            assert!(
                (total - 360.0).abs() < TOLERANCE,
                "max_value={max_value}: {arc} + {gap} tiles to {total}"
            );
        }
    }

    #[test]
    fn test_gap_never_exceeds_arc() {
        for max_value in 2..=100 {
            let (arc, gap) = segment_spans(max_value);
            assert!(gap <= arc, "max_value={max_value}: gap {gap} > arc {arc}");
            assert!(gap > 0.0);
        }
    }

    #[test]
    fn test_gap_halving_kicks_in_for_many_segments() {
        // 36 five-degree gaps alone would eat half the circle; the search
        // must settle on a halved gap.
        let (arc, gap) = segment_spans(72);
        assert!(gap < BASE_GAP_DEGREES);
        assert!(gap <= arc);
    }

    #[test]
    fn test_small_counts_keep_the_base_gap() {
        let (arc, gap) = segment_spans(10);
        assert_eq!(gap, BASE_GAP_DEGREES);
        assert!((arc - 31.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_stroke_width_scales_but_never_below_minimum() {
        assert_eq!(geometry(1000, 1000, 10).stroke_width, 45.0);
        assert_eq!(geometry(40, 40, 10).stroke_width, MIN_STROKE_WIDTH);
        assert_eq!(geometry(0, 0, 10).stroke_width, MIN_STROKE_WIDTH);
    }

    #[test]
    fn test_text_fits_within_seventy_percent_of_radius() {
        let m = ApproxTextMeasurer;
        let g = geometry(300, 300, 100);
        assert!(m.text_width("100", g.text_size) <= g.radius * TEXT_WIDTH_RATIO);
        assert!(m.text_width("100", g.text_size + 1.0) > g.radius * TEXT_WIDTH_RATIO);
    }

    #[test]
    fn test_text_search_terminates_on_degenerate_metrics() {
        // A measurer whose widths never grow with the size would satisfy the
        // fit condition forever; the search must stop at its cap instead.
        struct FlatMeasurer;
        impl TextMeasurer for FlatMeasurer {
            fn text_width(&self, _text: &str, _size: f32) -> f32 {
                0.0
            }
            fn text_height(&self, _text: &str, _size: f32) -> f32 {
                0.0
            }
        }

        let g = Geometry::compute(PxSize::from((200, 200)), 10, &FlatMeasurer);
        assert!(g.text_size <= g.radius * 2.0);
        assert!(g.text_size >= 1.0);
    }

    #[test]
    fn test_degenerate_size_gives_zero_radius() {
        let g = geometry(0, 0, 10);
        assert_eq!(g.radius, 0.0);
        assert_eq!(g.center, Vec2::ZERO);
    }
}
