use super::bits::{bits_to_value, value_to_bits, BitString};
use super::range_table::{classify, Tier};
use crate::{GeoStegoError, Result};

/// Hides `bits` in the difference of two carrier values.
///
/// The sign of the original difference is kept, its magnitude becomes
/// `tier.min + value(bits)`. Small adjustments move only the first value,
/// larger ones are split between both values. Results are clamped to
/// `[0,255]`, which can leave the realised difference off target near the
/// value boundaries.
pub fn embed(pixel1: u8, pixel2: u8, bits: &[bool], tier: Tier) -> Result<(u8, u8)> {
    if bits.len() != tier.capacity {
        return Err(GeoStegoError::BitWidthMismatch {
            expected: tier.capacity,
            actual: bits.len(),
        });
    }

    let original_diff = i16::from(pixel1) - i16::from(pixel2);
    let value = bits_to_value(bits) as i16;
    let new_abs_diff =
        (i16::from(tier.min) + value).clamp(i16::from(tier.min), i16::from(tier.max));
    let target_diff = if original_diff >= 0 {
        new_abs_diff
    } else {
        -new_abs_diff
    };

    let adjustment = target_diff - original_diff;
    if adjustment.abs() <= 2 {
        return Ok((clamp_channel(i16::from(pixel1) + adjustment), pixel2));
    }

    let half = adjustment / 2;
    Ok((
        clamp_channel(i16::from(pixel1) + half),
        clamp_channel(i16::from(pixel2) - (adjustment - half)),
    ))
}

/// Reads the bits a pair carries, as many as the tier of its current difference allows.
pub fn extract(pixel1: u8, pixel2: u8) -> BitString {
    let diff = i16::from(pixel1) - i16::from(pixel2);
    let tier = classify(diff);
    let embedded = (diff.unsigned_abs().saturating_sub(u16::from(tier.min))).min(tier.max_value());

    value_to_bits(embedded, tier.capacity)
}

fn clamp_channel(value: i16) -> u8 {
    value.clamp(0, 255) as u8
}
