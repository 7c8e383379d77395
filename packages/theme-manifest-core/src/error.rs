//! Manifest error types.

use thiserror::Error;

use crate::resolver::ResolveError;

/// Errors from schema construction, attribute parsing and the wire codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// One or more compulsory attributes never matched during the parse
    #[error("Missing compulsory attributes: {}", .missing.join(", "))]
    MissingCompulsoryAttribute { missing: Vec<String> },

    /// Resolver failure, passed through unchanged
    #[error(transparent)]
    Resolver(#[from] ResolveError),

    /// Attribute name listed twice in a schema definition
    #[error("Duplicate attribute name '{name}' in schema definition")]
    DuplicateAttributeName { name: String },

    /// Schema name lists do not cover the field table exactly
    #[error("Schema defines {names} attribute names for {fields} fields")]
    AttributeCountMismatch { names: usize, fields: usize },

    /// Encoded record carries a version this build cannot read
    #[error("Unsupported record format version {version}")]
    UnsupportedFormatVersion { version: u8 },

    /// Encoded record ended before a field was fully read
    #[error("Truncated record while reading {context}")]
    TruncatedRecord { context: &'static str },

    /// Presence or boolean byte held a value other than 0 or 1
    #[error("Invalid marker byte {value} while reading {context}")]
    InvalidMarker { context: &'static str, value: u8 },

    /// String field bytes were not valid UTF-8
    #[error("Invalid UTF-8 while reading {context}")]
    InvalidUtf8 { context: &'static str },

    /// Bytes remained after the last field was decoded
    #[error("Unexpected {remaining} trailing bytes after record")]
    TrailingBytes { remaining: usize },

    /// Stored checksum does not match the record contents
    #[error("Checksum mismatch: stored {stored:#010x}, computed {computed:#010x}")]
    ChecksumMismatch { stored: u32, computed: u32 },
}
