#![deny(clippy::all)]

/**
 * Source Map Mappings Decoder
 *
 * Decodes the Base64-VLQ `mappings` field of a version-3 source map into a
 * line/column-indexed table relating generated positions to original source
 * positions and symbol names.
 */
pub mod base64;
pub mod error;
pub mod mappings;
pub mod source_map;
pub mod vlq;

// Re-exports
pub use error::{MappingError, VlqError};
pub use mappings::{
    build_mapping_table, build_mapping_table_with_options, find_mapping, DecodeOptions, Mapping,
};
pub use source_map::SourceMap;
pub use vlq::{decode_segment, encode_vlq, SegmentValues};
