//! The theme metadata record.

use serde::Serialize;

/// Sentinel carried by resource-id fields that never matched an attribute.
pub const UNSET_RESOURCE_ID: i32 = -1;

/// Structured metadata extracted from one theme declaration.
///
/// Only `parser::parse_manifest` and `codec::decode` construct values of
/// this type, so every record in existence has passed compulsory-attribute
/// validation. Records are immutable after construction; the serde surface
/// is serialize-only for the same reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeManifest {
    pub(crate) name: String,
    pub(crate) preview_resource_id: i32,
    pub(crate) author: String,
    pub(crate) theme_id: String,
    pub(crate) theme_style_name: String,
    pub(crate) thumbnail_resource_id: i32,
    pub(crate) ringtone_file_name: Option<String>,
    pub(crate) notification_ringtone_file_name: Option<String>,
    pub(crate) wallpaper_resource_id: i32,
    pub(crate) copyright: Option<String>,
    pub(crate) ringtone_name: Option<String>,
    pub(crate) notification_ringtone_name: Option<String>,
    pub(crate) style_resource_id: i32,
    pub(crate) sound_pack_name: Option<String>,
    pub(crate) parent_theme_id: i32,
    pub(crate) parent_theme_package_name: Option<String>,
    pub(crate) has_color_palette: bool,
    pub(crate) is_drm_protected: bool,
}

impl ThemeManifest {
    /// Record with every field at its unset value. Parser working state,
    /// never observable by callers.
    pub(crate) fn empty() -> Self {
        Self {
            name: String::new(),
            preview_resource_id: UNSET_RESOURCE_ID,
            author: String::new(),
            theme_id: String::new(),
            theme_style_name: String::new(),
            thumbnail_resource_id: UNSET_RESOURCE_ID,
            ringtone_file_name: None,
            notification_ringtone_file_name: None,
            wallpaper_resource_id: UNSET_RESOURCE_ID,
            copyright: None,
            ringtone_name: None,
            notification_ringtone_name: None,
            style_resource_id: UNSET_RESOURCE_ID,
            sound_pack_name: None,
            parent_theme_id: UNSET_RESOURCE_ID,
            parent_theme_package_name: None,
            has_color_palette: false,
            is_drm_protected: false,
        }
    }

    /// Display name of the theme.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource id of the preview image.
    pub fn preview_resource_id(&self) -> i32 {
        self.preview_resource_id
    }

    /// Author of the theme.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Stable identifier of the theme within its package.
    pub fn theme_id(&self) -> &str {
        &self.theme_id
    }

    /// Display name of the style the theme applies.
    pub fn theme_style_name(&self) -> &str {
        &self.theme_style_name
    }

    /// Resource id of the thumbnail, or [`UNSET_RESOURCE_ID`].
    pub fn thumbnail_resource_id(&self) -> i32 {
        self.thumbnail_resource_id
    }

    /// Path of the bundled ringtone audio file.
    pub fn ringtone_file_name(&self) -> Option<&str> {
        self.ringtone_file_name.as_deref()
    }

    /// Path of the bundled notification ringtone audio file.
    pub fn notification_ringtone_file_name(&self) -> Option<&str> {
        self.notification_ringtone_file_name.as_deref()
    }

    /// Resource id of the wallpaper image, or [`UNSET_RESOURCE_ID`].
    pub fn wallpaper_resource_id(&self) -> i32 {
        self.wallpaper_resource_id
    }

    /// Copyright notice.
    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    /// Display name of the ringtone.
    pub fn ringtone_name(&self) -> Option<&str> {
        self.ringtone_name.as_deref()
    }

    /// Display name of the notification ringtone.
    pub fn notification_ringtone_name(&self) -> Option<&str> {
        self.notification_ringtone_name.as_deref()
    }

    /// Resource id of the style, or [`UNSET_RESOURCE_ID`].
    pub fn style_resource_id(&self) -> i32 {
        self.style_resource_id
    }

    /// Name of the bundled sound pack.
    pub fn sound_pack_name(&self) -> Option<&str> {
        self.sound_pack_name.as_deref()
    }

    /// Theme id of the parent theme, or [`UNSET_RESOURCE_ID`].
    pub fn parent_theme_id(&self) -> i32 {
        self.parent_theme_id
    }

    /// Package name of the parent theme.
    pub fn parent_theme_package_name(&self) -> Option<&str> {
        self.parent_theme_package_name.as_deref()
    }

    /// Whether the theme ships a color palette.
    pub fn has_color_palette(&self) -> bool {
        self.has_color_palette
    }

    /// Whether any referenced media file lives under a locked directory.
    pub fn is_drm_protected(&self) -> bool {
        self.is_drm_protected
    }
}
