//! Text measurement seam.
//!
//! The geometry pass needs to know how wide the widest label renders and the
//! draw pass needs the cap height of the value string, but font metrics belong
//! to whatever text stack the host renders with. Hosts implement
//! [`TextMeasurer`] on top of their own fonts; [`ApproxTextMeasurer`] is a
//! deterministic stand-in for tests and headless use.

/// Font metrics supplied by the host.
///
/// `size` is the nominal text size in the same unit the host's text renderer
/// uses for glyph scaling. Implementations must be pure: the same inputs
/// always measure the same.
pub trait TextMeasurer {
    /// Advance width of `text` laid out at `size`.
    ///
    /// Must be non-decreasing in `size` for a fixed `text`; the layout
    /// search relies on larger sizes never measuring narrower.
    fn text_width(&self, text: &str, size: f32) -> f32;

    /// Height of the tight bounding box of `text` at `size`.
    fn text_height(&self, text: &str, size: f32) -> f32;
}

/// Aspect-ratio approximation of digit metrics.
///
/// Assumes a typical UI font where a digit advances about 0.6 of the text
/// size and ascends about 0.74 of it. Good enough for layout search and
/// optical centering when no real font stack is available.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApproxTextMeasurer;

impl ApproxTextMeasurer {
    const ADVANCE_RATIO: f32 = 0.6;
    const CAP_HEIGHT_RATIO: f32 = 0.74;
}

impl TextMeasurer for ApproxTextMeasurer {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * Self::ADVANCE_RATIO
    }

    fn text_height(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            0.0
        } else {
            size * Self::CAP_HEIGHT_RATIO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wider_strings_measure_wider() {
        let m = ApproxTextMeasurer;
        assert!(m.text_width("10", 16.0) > m.text_width("9", 16.0));
        assert!(m.text_width("100", 16.0) > m.text_width("10", 16.0));
    }

    #[test]
    fn test_larger_sizes_measure_wider() {
        let m = ApproxTextMeasurer;
        assert!(m.text_width("42", 17.0) > m.text_width("42", 16.0));
        assert!(m.text_height("42", 17.0) > m.text_height("42", 16.0));
    }

    #[test]
    fn test_empty_string_is_zero() {
        let m = ApproxTextMeasurer;
        assert_eq!(m.text_width("", 16.0), 0.0);
        assert_eq!(m.text_height("", 16.0), 0.0);
    }
}
