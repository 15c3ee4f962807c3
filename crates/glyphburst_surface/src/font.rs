//! Font description carried by text and glyph commands.
//!
//! A [`FontSpec`] is an immutable value computed once at configuration
//! time and copied into every command that needs it. Nothing here touches
//! a real font file; the host maps the spec onto whatever rasterizer it
//! owns.

use serde::{Deserialize, Serialize};

/// Font family classes the host is expected to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontFamily {
    /// A serif face (the effect's default look).
    #[default]
    Serif,
    /// A sans-serif face.
    SansSerif,
    /// A monospace face.
    Monospace,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Regular weight.
    Normal,
    /// Bold weight (the effect's default).
    #[default]
    Bold,
}

/// A complete font description: family, weight and size in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Family class.
    pub family: FontFamily,
    /// Weight.
    pub weight: FontWeight,
    /// Size in surface units.
    pub size: f32,
}

impl FontSpec {
    /// Creates a new font spec.
    #[must_use]
    pub const fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }

    /// Bold serif at the given size.
    #[must_use]
    pub const fn bold_serif(size: f32) -> Self {
        Self::new(FontFamily::Serif, FontWeight::Bold, size)
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::bold_serif(24.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bold_serif_24() {
        let font = FontSpec::default();
        assert_eq!(font.family, FontFamily::Serif);
        assert_eq!(font.weight, FontWeight::Bold);
        assert_eq!(font.size, 24.0);
    }
}
