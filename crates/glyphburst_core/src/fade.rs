//! # Opacity Fade Arithmetic
//!
//! Shared by sparks and flying glyphs. The only subtlety is float residue:
//! repeatedly subtracting a per-tick rate from `1.0` in `f32` leaves a
//! remainder on the order of `1e-6` where exact arithmetic would reach zero.
//! The step function snaps that residue away, so an entity that has run its
//! full fade reports an opacity of exactly `0.0`.

/// Opacity below this is indistinguishable from transparent and collapses
/// to exactly zero.
const SNAP: f32 = 1e-3;

/// Advances one fade tick: subtract `rate`, clamping at zero.
///
/// For any `rate >= SNAP`, an entity starting at `1.0` reaches exactly
/// `0.0` on tick `ceil(1.0 / rate)` and is nonzero on every tick before.
pub(crate) fn step(opacity: f32, rate: f32) -> f32 {
    let next = opacity - rate;
    if next < SNAP {
        0.0
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_to_zero(rate: f32) -> u32 {
        let mut opacity = 1.0;
        let mut ticks = 0;
        while opacity > 0.0 {
            opacity = step(opacity, rate);
            ticks += 1;
            assert!(ticks <= 1000, "fade never completed at rate {rate}");
        }
        ticks
    }

    #[test]
    fn test_spark_rate_fades_in_twenty_five_ticks() {
        assert_eq!(ticks_to_zero(0.04), 25);
    }

    #[test]
    fn test_glyph_rate_fades_in_fifty_ticks() {
        assert_eq!(ticks_to_zero(0.02), 50);
    }

    #[test]
    fn test_opacity_stays_nonzero_until_final_tick() {
        let mut opacity = 1.0;
        for _ in 0..49 {
            opacity = step(opacity, 0.02);
            assert!(opacity > 0.0);
        }
        assert_eq!(step(opacity, 0.02), 0.0);
    }

    #[test]
    fn test_zero_is_absorbing() {
        assert_eq!(step(0.0, 0.04), 0.0);
    }

    #[test]
    fn test_visible_values_are_not_snapped() {
        let next = step(0.5, 0.3);
        assert!((next - 0.2).abs() < 1e-6);
    }
}
