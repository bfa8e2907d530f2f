//! Error Module
//!
//! Error types for VLQ segment decoding and mapping-table building.

use thiserror::Error;

/// An error produced while decoding a single Base64-VLQ segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VlqError {
    /// A character outside the 64-symbol alphabet appeared in the segment.
    #[error("invalid character {character:?} at offset {position} in VLQ segment")]
    InvalidCharacter { character: char, position: usize },

    /// The segment ended while the continuation bit of the last digit was
    /// still set, leaving an integer incomplete.
    #[error("VLQ segment ended while an integer was still incomplete")]
    TruncatedSegment,

    /// The reconstructed integer does not fit in 64 bits.
    #[error("VLQ value at offset {position} exceeds the representable range")]
    NumericOverflow { position: usize },
}

/// An error produced while building a mapping table from a `mappings` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A segment failed to decode. Carries the owning generated line
    /// (1-based) and the offending segment text.
    #[error("generated line {line}, segment {segment:?}: {source}")]
    Segment {
        line: i64,
        segment: String,
        source: VlqError,
    },

    /// A segment decoded to a field count that is never valid (2, 3, or
    /// more than 5).
    #[error("generated line {line}, segment {segment:?}: decoded {count} fields, expected 1, 4 or 5")]
    MalformedSegmentLength {
        line: i64,
        segment: String,
        count: usize,
    },

    /// A resolved source or name index fell outside the corresponding
    /// array. Only raised in strict mode; the default lenient mode
    /// substitutes a placeholder instead.
    #[error("generated line {line}: {kind} index {index} out of range (have {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: i64,
        len: usize,
        line: i64,
    },
}
