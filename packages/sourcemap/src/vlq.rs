//! VLQ Module
//!
//! Base64-VLQ encoding and decoding of signed integers.
//!
//! Each character carries 6 bits: bit 5 is a continuation flag and bits 0-4
//! are a payload group. Payload groups accumulate least-significant first;
//! bit 0 of the reconstructed value is the sign, the rest the magnitude.

use smallvec::SmallVec;

use crate::base64::{from_base64_digit, B64_DIGITS};
use crate::error::VlqError;

const VLQ_CONTINUATION_BIT: u8 = 32;
const VLQ_PAYLOAD_MASK: u8 = 31;

/// The decoded fields of one mappings segment. Well-formed segments hold 1,
/// 4, or 5 integers, so this never spills to the heap.
pub type SegmentValues = SmallVec<[i64; 5]>;

/// Decodes one comma-free, semicolon-free Base64-VLQ token into its sequence
/// of signed integers.
///
/// Pure and reentrant; an empty string yields an empty sequence. Fails if a
/// character falls outside the alphabet, if the token ends mid-integer, or
/// if an integer does not fit in 64 bits.
pub fn decode_segment(segment: &str) -> Result<SegmentValues, VlqError> {
    let mut values = SegmentValues::new();
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    let mut in_progress = false;

    for (position, character) in segment.char_indices() {
        let digit = from_base64_digit(character)
            .ok_or(VlqError::InvalidCharacter { character, position })?;

        let payload = u64::from(digit & VLQ_PAYLOAD_MASK);
        if payload != 0 {
            if shift > payload.leading_zeros() {
                return Err(VlqError::NumericOverflow { position });
            }
            value |= payload << shift;
        }
        shift += 5;
        in_progress = true;

        if digit & VLQ_CONTINUATION_BIT == 0 {
            // Bit 0 of the reconstructed value is the sign. `-0` collapses
            // to 0 here.
            let negative = value & 1 != 0;
            let magnitude = (value >> 1) as i64;
            values.push(if negative { -magnitude } else { magnitude });
            value = 0;
            shift = 0;
            in_progress = false;
        }
    }

    if in_progress {
        return Err(VlqError::TruncatedSegment);
    }

    Ok(values)
}

/// Encodes one signed integer as a Base64-VLQ token.
///
/// The inverse of a single-integer [`decode_segment`] for every value above
/// `i64::MIN` (whose magnitude needs a 65th bit and cannot be decoded back).
pub fn encode_vlq(value: i64) -> String {
    let mut vlq = u128::from(value.unsigned_abs()) << 1;
    if value < 0 {
        vlq |= 1;
    }

    let mut out = String::new();
    loop {
        let mut digit = (vlq & u128::from(VLQ_PAYLOAD_MASK)) as u8;
        vlq >>= 5;
        if vlq > 0 {
            digit |= VLQ_CONTINUATION_BIT;
        }
        out.push(B64_DIGITS.as_bytes()[digit as usize] as char);

        if vlq == 0 {
            break;
        }
    }

    out
}
