//! Compression ratio and confidence.

use sym_core::Symbol;

use crate::stage1_direct::word_count;

const COVERAGE_DENSITY: f64 = 0.3;
const BASE_FACTOR: f64 = 0.7;
const COVERAGE_FACTOR: f64 = 0.3;

/// Round the exact binary value of `value` to `places` decimals, ties to even.
/// `value * 10^places` is computed on the integer mantissa.
fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }
    let (mantissa, exp) = decode(value.abs());
    let scaled = u128::from(mantissa) * 5u128.pow(places);
    let shift = exp + places as i32;
    if shift >= 0 {
        return value;
    }

    let shift = shift.unsigned_abs();
    let digits = if shift >= 128 {
        0
    } else {
        let quotient = scaled >> shift;
        let remainder = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if remainder > half || (remainder == half && quotient & 1 == 1) {
            quotient + 1
        } else {
            quotient
        }
    };

    (digits as f64 / 10f64.powi(places as i32)).copysign(value)
}

/// Split a positive finite `f64` into `(mantissa, exp)` with `value = mantissa * 2^exp`.
fn decode(value: f64) -> (u64, i32) {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    }
}

/// Percentage reduction in code points, in `[0, 100]`.
pub fn compression_ratio(original: &str, compressed: &str) -> f64 {
    let original_len = original.chars().count();
    let compressed_len = compressed.chars().count();
    if original_len == 0 || compressed_len >= original_len {
        return 0.0;
    }
    round_to((1.0 - compressed_len as f64 / original_len as f64) * 100.0, 2)
}

/// Mean symbol score scaled by word coverage, clamped to `[0, 1]`.
pub fn confidence(symbols: &[Symbol], original: &str) -> f64 {
    if symbols.is_empty() {
        return 0.0;
    }
    let weighted = symbols.iter().map(Symbol::score).sum::<f64>() / symbols.len() as f64;
    let words = word_count(original) as f64;
    let coverage = (symbols.len() as f64 / (words * COVERAGE_DENSITY).max(1.0)).min(1.0);
    let value = weighted * (BASE_FACTOR + COVERAGE_FACTOR * coverage);
    round_to(value.clamp(0.0, 1.0), 3)
}
