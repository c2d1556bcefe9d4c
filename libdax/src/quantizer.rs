//! Scalar quantizers.
//!
//! Two flavours live here. The transform path rounds DCT coefficients to
//! integers and stores their low `Q` bits as a two's-complement pattern; the
//! uniform path maps raw 16-bit samples onto `2^Q` evenly spaced levels.

/// Round a coefficient to the nearest integer, ties away from zero.
#[inline]
pub fn quantize(coeff: f64) -> i64 {
    coeff.round() as i64
}

/// Keep only the low `bits` of a quantized value, as stored on the wire.
#[inline]
pub fn low_mask(bits: u8) -> u64 {
    debug_assert!((1..=64).contains(&bits));
    if bits == 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Reinterpret a `bits`-wide code as a signed value.
///
/// Values that overflowed the coded range on the way in come back wrapped,
/// not clamped; the coder relies on `Q` being wide enough in practice.
#[inline]
pub fn sign_extend(code: u64, bits: u8) -> i64 {
    debug_assert!((1..=64).contains(&bits));
    let shift = 64 - bits as u32;
    ((code << shift) as i64) >> shift
}

/// Recover the coefficient approximation from its wire code.
#[inline]
pub fn dequantize(code: u64, bits: u8) -> f64 {
    sign_extend(code, bits) as f64
}

/// Map a sample onto one of `2^bits` uniform levels, `bits` in `1..=16`.
#[inline]
pub fn quantize_sample(sample: i16, bits: u8) -> u64 {
    debug_assert!((1..=16).contains(&bits));
    let levels = 1u32 << bits;
    let shifted = sample as i32 + 32768;
    let index = ((levels as f64) * (shifted as f64) / 65536.0).round() as i64;
    index.clamp(0, levels as i64 - 1) as u64
}

/// Reconstruct a sample from its level index, placing it at the level's
/// midpoint.
#[inline]
pub fn reconstruct_sample(index: u64, bits: u8) -> i16 {
    debug_assert!((1..=16).contains(&bits));
    let levels = 1u32 << bits;
    let centered = (index as f64 + 0.5) / (levels as f64) * 65536.0 - 32768.0;
    centered.round().clamp(-32768.0, 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_extension_round_trips_small_values() {
        for v in [-5i64, -1, 0, 1, 5] {
            let code = (v as u64) & low_mask(4);
            assert_eq!(sign_extend(code, 4), v);
        }
    }

    #[test]
    fn out_of_range_values_wrap() {
        // 9 does not fit in 4 signed bits; the stored pattern decodes as -7
        let code = (9u64) & low_mask(4);
        assert_eq!(sign_extend(code, 4), -7);
    }

    #[test]
    fn one_bit_uniform_quantizer_splits_at_zero() {
        assert_eq!(quantize_sample(-32768, 1), 0);
        assert_eq!(quantize_sample(-1, 1), 1); // round(2*32767/65536) = 1
        assert_eq!(quantize_sample(32767, 1), 1);
        assert_eq!(reconstruct_sample(0, 1), -16384);
        assert_eq!(reconstruct_sample(1, 1), 16384);
    }

    #[test]
    fn sixteen_bit_uniform_quantizer_is_near_transparent() {
        for s in [-32768i16, -12345, -1, 0, 1, 12345, 32767] {
            let r = reconstruct_sample(quantize_sample(s, 16), 16);
            assert!((r as i32 - s as i32).abs() <= 1, "{} -> {}", s, r);
        }
    }
}
