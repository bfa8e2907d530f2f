//! Mappings Module
//!
//! Builds a line/column-indexed mapping table from the VLQ-encoded
//! `mappings` field of a source map.

use serde::Serialize;

use crate::error::MappingError;
use crate::vlq::decode_segment;

/// One generated-to-original position correspondence.
///
/// `source`, `original_line`, and `original_column` appear together or not
/// at all; `original_name` only when the segment carried a fifth field.
/// Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mapping {
    #[serde(rename = "generatedLine")]
    pub generated_line: i64,
    #[serde(rename = "generatedColumn")]
    pub generated_column: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "originalLine", skip_serializing_if = "Option::is_none")]
    pub original_line: Option<i64>,
    #[serde(rename = "originalColumn", skip_serializing_if = "Option::is_none")]
    pub original_column: Option<i64>,
    #[serde(rename = "originalName", skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

/// Options for building a mapping table.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
    /// When true, a source or name index outside the corresponding array is
    /// a hard error. When false (the default), a placeholder string such as
    /// `source[5]` is substituted and decoding proceeds.
    pub strict_indices: bool,
}

/// Builds the mapping table for a `mappings` string with default (lenient)
/// options.
pub fn build_mapping_table(
    mappings: &str,
    names: &[String],
    sources: &[String],
) -> Result<Vec<Mapping>, MappingError> {
    build_mapping_table_with_options(mappings, names, sources, &DecodeOptions::default())
}

/// Builds the mapping table for a `mappings` string.
///
/// Generated-line groups are separated by `;` (an empty group still counts
/// as a line), segments within a group by `,` (empty tokens are skipped).
/// All five fields are deltas: the generated column resets to 0 at each new
/// line, while the source index, original line, original column, and name
/// index accumulate across the whole string. Records come out in generated
/// line order, then within-line segment order.
pub fn build_mapping_table_with_options(
    mappings: &str,
    names: &[String],
    sources: &[String],
    options: &DecodeOptions,
) -> Result<Vec<Mapping>, MappingError> {
    let mut table = Vec::new();

    let mut source_index: i64 = 0;
    let mut source_line: i64 = 0;
    let mut source_column: i64 = 0;
    let mut name_index: i64 = 0;

    for (line_index, group) in mappings.split(';').enumerate() {
        let generated_line = line_index as i64 + 1;
        let mut generated_column: i64 = 0;

        if group.is_empty() {
            continue;
        }

        for segment in group.split(',') {
            if segment.is_empty() {
                continue;
            }

            let decoded = decode_segment(segment).map_err(|source| MappingError::Segment {
                line: generated_line,
                segment: segment.to_string(),
                source,
            })?;

            if !matches!(decoded.len(), 1 | 4 | 5) {
                return Err(MappingError::MalformedSegmentLength {
                    line: generated_line,
                    segment: segment.to_string(),
                    count: decoded.len(),
                });
            }

            generated_column += decoded[0];

            let mut mapping = Mapping {
                generated_line,
                generated_column,
                source: None,
                original_line: None,
                original_column: None,
                original_name: None,
            };

            if decoded.len() >= 4 {
                source_index += decoded[1];
                source_line += decoded[2];
                source_column += decoded[3];

                mapping.source = Some(resolve_index(
                    sources,
                    source_index,
                    "source",
                    generated_line,
                    options,
                )?);
                mapping.original_line = Some(source_line + 1);
                mapping.original_column = Some(source_column);
            }

            if decoded.len() == 5 {
                name_index += decoded[4];
                mapping.original_name = Some(resolve_index(
                    names,
                    name_index,
                    "name",
                    generated_line,
                    options,
                )?);
            }

            table.push(mapping);
        }
    }

    Ok(table)
}

/// Resolves an accumulated index against `entries`, substituting a
/// placeholder that identifies the raw index when it is out of range
/// (or failing, in strict mode).
fn resolve_index(
    entries: &[String],
    index: i64,
    kind: &'static str,
    line: i64,
    options: &DecodeOptions,
) -> Result<String, MappingError> {
    let entry = usize::try_from(index).ok().and_then(|i| entries.get(i));
    match entry {
        Some(entry) => Ok(entry.clone()),
        None if options.strict_indices => Err(MappingError::IndexOutOfRange {
            kind,
            index,
            len: entries.len(),
            line,
        }),
        None => Ok(format!("{}[{}]", kind, index)),
    }
}

/// Finds the mapping covering a generated position: the last record at or
/// before `(line, column)` in generated order.
///
/// Expects `table` in generated-position order, which is what
/// [`build_mapping_table`] produces for well-formed maps.
pub fn find_mapping(table: &[Mapping], line: i64, column: i64) -> Option<&Mapping> {
    let upper =
        table.partition_point(|m| (m.generated_line, m.generated_column) <= (line, column));
    table[..upper].last()
}
