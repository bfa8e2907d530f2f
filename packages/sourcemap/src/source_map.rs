//! Source Map Module
//!
//! Serde model of a version-3 source map document.

use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::mappings::{
    build_mapping_table, build_mapping_table_with_options, DecodeOptions, Mapping,
};

/// A raw source map (version 3), as emitted by a build tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMap {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(rename = "sourceRoot", skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    #[serde(rename = "sourcesContent", skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
}

impl SourceMap {
    /// Parses a `.map` JSON document already held in memory.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decodes this map's `mappings` field into a mapping table, resolving
    /// sources and names against this map's own arrays.
    pub fn decode_mappings(&self) -> Result<Vec<Mapping>, MappingError> {
        build_mapping_table(&self.mappings, &self.names, &self.sources)
    }

    /// Like [`SourceMap::decode_mappings`], with explicit options.
    pub fn decode_mappings_with_options(
        &self,
        options: &DecodeOptions,
    ) -> Result<Vec<Mapping>, MappingError> {
        build_mapping_table_with_options(&self.mappings, &self.names, &self.sources, options)
    }

    /// The original text of the source at `index`, when the map carries
    /// `sourcesContent` aligned with `sources`.
    pub fn source_content(&self, index: usize) -> Option<&str> {
        self.sources_content
            .as_ref()?
            .get(index)?
            .as_deref()
    }
}
