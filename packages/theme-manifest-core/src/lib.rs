//! Core parsing, validation and wire codec for theme metadata records.
//!
//! Extracts a structured record from the namespaced attributes of a theme
//! declaration, enforces compulsory attributes, derives the DRM flag from
//! locked media paths, and round-trips records through a versioned binary
//! form.

pub mod codec;
pub mod drm;
pub mod error;
pub mod manifest;
pub mod parser;
pub mod resolver;
pub mod schema;
pub mod source;

pub use manifest::ThemeManifest;
