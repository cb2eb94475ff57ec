// crates/imgpack-core/src/hdl/binfield.rs

use crate::error::{PackError, Result};

const MAX_WIDTH: u32 = 32;

/// Render `value` as exactly `width` binary digits, MSB first.
///
/// Digits come from arithmetic right shifts, so negative values sign-extend
/// and print as two's complement (`-43` at width 8 is `"11010101"`).
///
/// Accepted range is `-(2^(width-1))..=2^width-1`; anything else would lose
/// bits and is reported as `FieldOverflow`.
pub fn bin_field(value: i64, width: u32) -> Result<String> {
    if width == 0 || width > MAX_WIDTH {
        return Err(PackError::FieldOverflow { value, width });
    }

    let min = -(1i64 << (width - 1));
    let max = (1i64 << width) - 1;
    if value < min || value > max {
        return Err(PackError::FieldOverflow { value, width });
    }

    let mut s = String::with_capacity(width as usize);
    for b in (0..width).rev() {
        s.push(if (value >> b) & 1 == 1 { '1' } else { '0' });
    }
    Ok(s)
}
