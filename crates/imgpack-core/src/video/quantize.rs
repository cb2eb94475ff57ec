// crates/imgpack-core/src/video/quantize.rs

/// Round-to-nearest (half away from zero) into an unsigned `bits`-wide code.
///
/// Returns `None` for non-finite input or when the rounded value leaves `0..=2^bits-1`.
/// Callers turn `None` into an error; nothing here clamps.
pub fn quantize_unsigned(v: f64, bits: u32) -> Option<u32> {
    debug_assert!((1..=31).contains(&bits));
    if !v.is_finite() {
        return None;
    }
    let r = v.round();
    let max = ((1u64 << bits) - 1) as f64;
    if r < 0.0 || r > max {
        return None;
    }
    Some(r as u32)
}

/// Round-to-nearest into a two's complement `bits`-wide code.
///
/// Valid range is `-(2^(bits-1))..=2^(bits-1)-1`.
pub fn quantize_signed(v: f64, bits: u32) -> Option<i32> {
    debug_assert!((1..=31).contains(&bits));
    if !v.is_finite() {
        return None;
    }
    let r = v.round();
    let half = (1i64 << (bits - 1)) as f64;
    if r < -half || r > half - 1.0 {
        return None;
    }
    Some(r as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_rounds_half_away_from_zero() {
        assert_eq!(quantize_unsigned(2.5, 3), Some(3));
        assert_eq!(quantize_unsigned(2.49, 3), Some(2));
        assert_eq!(quantize_unsigned(7.4, 3), Some(7));
        assert_eq!(quantize_unsigned(7.5, 3), None);
        assert_eq!(quantize_unsigned(-0.6, 3), None);
    }

    #[test]
    fn signed_bounds() {
        assert_eq!(quantize_signed(-127.5, 8), Some(-128));
        assert_eq!(quantize_signed(127.4, 8), Some(127));
        assert_eq!(quantize_signed(127.5, 8), None);
        assert_eq!(quantize_signed(-128.5, 8), None);
    }

    #[test]
    fn non_finite_rejected() {
        assert_eq!(quantize_unsigned(f64::NAN, 11), None);
        assert_eq!(quantize_signed(f64::INFINITY, 8), None);
    }
}
