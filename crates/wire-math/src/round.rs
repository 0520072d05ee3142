//! Pixel-coordinate rounding.
//!
//! Parity between reference renders and this pipeline depends on one
//! exact rounding rule applied everywhere a float becomes a pixel
//! coordinate.

/// Rounds to the nearest integer with halves rounding up.
///
/// Computed as `floor(f + 0.5)`. This is round-half-up: not the
/// half-away-from-zero of [`f64::round`] and not banker's rounding.
/// Negative halves round toward positive infinity, so
/// `round_half_up(-0.5) == 0`.
///
/// Non-finite input follows `as` cast saturation: NaN becomes 0 and
/// infinities clamp to the `i32` range, which puts degenerate
/// projections far outside any real screen.
///
/// # Example
///
/// ```rust
/// use wire_math::round_half_up;
///
/// assert_eq!(round_half_up(0.5), 1);
/// assert_eq!(round_half_up(-0.1), 0);
/// ```
#[inline]
pub fn round_half_up(f: f64) -> i32 {
    (f + 0.5).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(123.4999999), 123);
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.0), 1);
        assert_eq!(round_half_up(-99.9999), -100);
        assert_eq!(round_half_up(-0.1), 0);
    }

    #[test]
    fn test_round_half_up_negative_halves() {
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(2.5), 3);
    }

    #[test]
    fn test_round_half_up_non_finite() {
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i32::MAX);
        assert_eq!(round_half_up(f64::NEG_INFINITY), i32::MIN);
    }
}
