//! Text measurement boundary.
//!
//! Glyph layout needs per-character advance widths that agree with
//! whatever actually rasterizes the text, so measurement is a collaborator
//! the host injects, not something the simulation computes. The built-in
//! [`SerifMetrics`] keeps headless runs and tests deterministic.

use crate::font::FontSpec;

/// Measures text for the font the host will draw with.
///
/// Implementations must be consistent: the width of a string equals the
/// sum of its characters' advances, which the default `text_width` method
/// guarantees. Implementations backed by a shaping engine that kerns
/// should return pre-shaped per-character advances so the invariant holds.
pub trait TextMeasurer: Send + Sync {
    /// Advance width of a single character at the given font.
    fn advance(&self, ch: char, font: FontSpec) -> f32;

    /// Total advance width of a string at the given font.
    fn text_width(&self, text: &str, font: FontSpec) -> f32 {
        text.chars().map(|ch| self.advance(ch, font)).sum()
    }
}

/// Deterministic width-class metrics approximating a bold serif face.
///
/// Advances are a fixed fraction of the font size per width class. This is
/// not typographically faithful; it exists so the effect lays glyphs out
/// sensibly with no font stack in sight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerifMetrics;

impl SerifMetrics {
    /// Narrow strokes: i l j plus thin punctuation.
    const NARROW: f32 = 0.30;
    /// Wide letters: m w and their capitals.
    const WIDE: f32 = 0.92;
    /// Capitals and digits.
    const CAPITAL: f32 = 0.68;
    /// Word space.
    const SPACE: f32 = 0.28;
    /// Everything else (typical lowercase).
    const REGULAR: f32 = 0.52;

    /// Width-class fraction for a character.
    fn fraction(ch: char) -> f32 {
        match ch {
            ' ' => Self::SPACE,
            'i' | 'l' | 'j' | 'f' | 't' | 'I' | '.' | ',' | '\'' | '!' | ':' | ';' | '|' => {
                Self::NARROW
            }
            'm' | 'w' | 'M' | 'W' => Self::WIDE,
            'A'..='Z' | '0'..='9' => Self::CAPITAL,
            _ => Self::REGULAR,
        }
    }
}

impl TextMeasurer for SerifMetrics {
    fn advance(&self, ch: char, font: FontSpec) -> f32 {
        Self::fraction(ch) * font.size
    }
}
