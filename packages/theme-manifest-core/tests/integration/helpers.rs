//! Shared fixtures for the integration suite.

use std::collections::HashMap;

use theme_manifest_core::resolver::{ResolveError, ResourceResolver};
use theme_manifest_core::source::{Attribute, AttributeSource, THEME_NAMESPACE};

/// Attribute in the theme namespace.
pub fn theme_attr(name: &str, value: &str) -> Attribute {
    Attribute::new(THEME_NAMESPACE, name, value)
}

/// A complete declaration, compulsory attributes included. The
/// notification ringtone lives under a locked directory.
pub fn pluto_default_attrs() -> Vec<Attribute> {
    vec![
        theme_attr("name", "Pluto Default"),
        theme_attr("preview", "@drawable/preview"),
        theme_attr("author", "John Doe"),
        theme_attr("themeId", "Pluto"),
        theme_attr("styleName", "Pluto"),
        theme_attr("ringtoneFileName", "media/audio/ringtone.mp3"),
        theme_attr(
            "notificationRingtoneFileName",
            "media/audio/locked/notification.mp3",
        ),
        theme_attr("copyright", "T-Mobile, 2009"),
    ]
}

/// Resolver backed by fixed reference tables, standing in for a resource
/// service. Values starting with `@` are looked up; anything else is
/// treated as literal text.
pub struct TableResolver<'a, S: AttributeSource + ?Sized> {
    source: &'a S,
    strings: HashMap<String, String>,
    ints: HashMap<String, i32>,
}

impl<'a, S: AttributeSource + ?Sized> TableResolver<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            strings: HashMap::new(),
            ints: HashMap::new(),
        }
    }

    pub fn with_string(mut self, reference: &str, value: &str) -> Self {
        self.strings.insert(reference.to_string(), value.to_string());
        self
    }

    pub fn with_int(mut self, reference: &str, id: i32) -> Self {
        self.ints.insert(reference.to_string(), id);
        self
    }
}

impl<S: AttributeSource + ?Sized> ResourceResolver for TableResolver<'_, S> {
    fn resolve_string(&self, index: usize) -> Result<String, ResolveError> {
        let raw = self.source.raw_value(index);
        if let Some(reference) = raw.strip_prefix('@') {
            return self
                .strings
                .get(reference)
                .cloned()
                .ok_or_else(|| ResolveError::new(index, format!("unknown string reference @{reference}")));
        }
        Ok(raw.to_string())
    }

    fn resolve_int(&self, index: usize, default: i32) -> Result<i32, ResolveError> {
        let raw = self.source.raw_value(index);
        if let Some(reference) = raw.strip_prefix('@') {
            return self
                .ints
                .get(reference)
                .copied()
                .ok_or_else(|| ResolveError::new(index, format!("unknown resource reference @{reference}")));
        }
        Ok(raw.trim().parse::<i32>().unwrap_or(default))
    }
}
