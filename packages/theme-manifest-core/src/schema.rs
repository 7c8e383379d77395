//! Attribute schema: the immutable name-to-field lookup table.

use std::collections::HashMap;

use crate::error::ManifestError;

/// Compulsory attribute names, in canonical field order.
pub const COMPULSORY_ATTRIBUTES: [&str; 5] = ["name", "preview", "author", "themeId", "styleName"];

/// Optional attribute names, in canonical field order.
pub const OPTIONAL_ATTRIBUTES: [&str; 12] = [
    "thumbnail",
    "ringtoneFileName",
    "notificationRingtoneFileName",
    "wallpaperImage",
    "copyright",
    "ringtoneName",
    "notificationRingtoneName",
    "styleId",
    "soundpackName",
    "parentThemeId",
    "parentThemePackageName",
    "hasColorPalette",
];

/// Validation group of a schema attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeGroup {
    /// Must match during a parse or the record is rejected
    Compulsory,
    /// May be absent; the field keeps its unset value
    Optional,
}

/// Semantic field targeted by a recognized attribute.
///
/// Variant order is the canonical field order: compulsory fields first,
/// then optional fields. `ordinal()` is a dense index into that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIndex {
    Name,
    Preview,
    Author,
    ThemeId,
    StyleName,
    Thumbnail,
    RingtoneFileName,
    NotificationRingtoneFileName,
    WallpaperImage,
    Copyright,
    RingtoneName,
    NotificationRingtoneName,
    StyleId,
    SoundPackName,
    ParentThemeId,
    ParentThemePackageName,
    HasColorPalette,
}

impl FieldIndex {
    /// All fields in canonical order.
    pub const ALL: [FieldIndex; 17] = [
        FieldIndex::Name,
        FieldIndex::Preview,
        FieldIndex::Author,
        FieldIndex::ThemeId,
        FieldIndex::StyleName,
        FieldIndex::Thumbnail,
        FieldIndex::RingtoneFileName,
        FieldIndex::NotificationRingtoneFileName,
        FieldIndex::WallpaperImage,
        FieldIndex::Copyright,
        FieldIndex::RingtoneName,
        FieldIndex::NotificationRingtoneName,
        FieldIndex::StyleId,
        FieldIndex::SoundPackName,
        FieldIndex::ParentThemeId,
        FieldIndex::ParentThemePackageName,
        FieldIndex::HasColorPalette,
    ];

    /// Position of this field in the canonical order.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

/// Lookup result for a recognized attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Field the attribute populates
    pub index: FieldIndex,
    /// Validation group of the attribute
    pub group: AttributeGroup,
}

/// Immutable mapping from attribute names to fields.
///
/// Built once from two ordered name lists (compulsory first) and shared by
/// reference across parses. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    entries: HashMap<String, SchemaEntry>,
    ordered_names: Vec<String>,
    compulsory_count: usize,
}

impl AttributeSchema {
    /// Builds a schema from ordered attribute name lists.
    ///
    /// Names are assigned fields by position: `compulsory` covers the
    /// compulsory fields in canonical order, then `optional` covers the
    /// rest. The two lists together must name every field exactly once.
    ///
    /// # Arguments
    /// * `compulsory` - Names of attributes that must match during a parse
    /// * `optional` - Names of attributes that may be absent
    ///
    /// # Returns
    /// `Err(ManifestError::DuplicateAttributeName)` if a name repeats,
    /// `Err(ManifestError::AttributeCountMismatch)` if the lists do not
    /// cover the field table.
    pub fn new(compulsory: &[&str], optional: &[&str]) -> Result<Self, ManifestError> {
        let total = compulsory.len() + optional.len();
        if total != FieldIndex::ALL.len() {
            return Err(ManifestError::AttributeCountMismatch {
                names: total,
                fields: FieldIndex::ALL.len(),
            });
        }

        let mut entries = HashMap::with_capacity(total);
        let mut ordered_names = Vec::with_capacity(total);

        let groups = compulsory
            .iter()
            .map(|name| (*name, AttributeGroup::Compulsory))
            .chain(optional.iter().map(|name| (*name, AttributeGroup::Optional)));

        for ((name, group), index) in groups.zip(FieldIndex::ALL) {
            let entry = SchemaEntry { index, group };
            if entries.insert(name.to_string(), entry).is_some() {
                return Err(ManifestError::DuplicateAttributeName {
                    name: name.to_string(),
                });
            }
            ordered_names.push(name.to_string());
        }

        Ok(Self {
            entries,
            ordered_names,
            compulsory_count: compulsory.len(),
        })
    }

    /// Builds the standard theme attribute schema.
    pub fn standard() -> Result<Self, ManifestError> {
        Self::new(&COMPULSORY_ATTRIBUTES, &OPTIONAL_ATTRIBUTES)
    }

    /// Looks up an attribute name.
    ///
    /// # Returns
    /// `Some(SchemaEntry)` for a recognized name, `None` otherwise.
    pub fn lookup(&self, name: &str) -> Option<SchemaEntry> {
        self.entries.get(name).copied()
    }

    /// Canonical name of the field at `ordinal`, if in range.
    pub fn attribute_name(&self, ordinal: usize) -> Option<&str> {
        self.ordered_names.get(ordinal).map(String::as_str)
    }

    /// Number of recognized attribute names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema recognizes no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of compulsory attributes.
    pub fn compulsory_count(&self) -> usize {
        self.compulsory_count
    }
}
