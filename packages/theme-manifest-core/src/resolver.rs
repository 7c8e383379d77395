//! Resource resolution seam for attribute values.

use thiserror::Error;

use crate::source::AttributeSource;

/// Failure reported by a resolver for one attribute.
///
/// Carries the index of the offending attribute in the source so callers
/// can point back at the input. Travels through the parser unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to resolve attribute at index {source_index}: {message}")]
pub struct ResolveError {
    /// Index of the attribute in the source
    pub source_index: usize,
    /// Resolver-specific description of the failure
    pub message: String,
}

impl ResolveError {
    /// Creates a resolve error for the attribute at `source_index`.
    pub fn new(source_index: usize, message: impl Into<String>) -> Self {
        Self {
            source_index,
            message: message.into(),
        }
    }
}

/// Resolves attribute values that may reference an external resource table.
///
/// The parser consults a resolver for fields whose values are display
/// strings or resource identifiers; raw-text fields bypass it entirely.
pub trait ResourceResolver {
    /// Resolves the attribute at `index` to a display string.
    fn resolve_string(&self, index: usize) -> Result<String, ResolveError>;

    /// Resolves the attribute at `index` to an integer resource identifier.
    ///
    /// # Arguments
    /// * `index` - Index of the attribute in the source
    /// * `default` - Value to return when the attribute holds no usable
    ///   integer or reference
    fn resolve_int(&self, index: usize, default: i32) -> Result<i32, ResolveError>;
}

/// Resolver that interprets raw attribute text literally.
///
/// For callers without a resource table: strings resolve to the raw text,
/// integers to the decimal value of the text or the supplied default.
#[derive(Debug, Clone, Copy)]
pub struct LiteralResolver<'a, S: AttributeSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: AttributeSource + ?Sized> LiteralResolver<'a, S> {
    /// Creates a literal resolver over `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }
}

impl<S: AttributeSource + ?Sized> ResourceResolver for LiteralResolver<'_, S> {
    fn resolve_string(&self, index: usize) -> Result<String, ResolveError> {
        Ok(self.source.raw_value(index).to_string())
    }

    fn resolve_int(&self, index: usize, default: i32) -> Result<i32, ResolveError> {
        Ok(self
            .source
            .raw_value(index)
            .trim()
            .parse::<i32>()
            .unwrap_or(default))
    }
}
