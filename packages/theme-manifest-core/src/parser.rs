//! Single-pass attribute parser producing validated theme records.

use crate::drm;
use crate::error::ManifestError;
use crate::manifest::{ThemeManifest, UNSET_RESOURCE_ID};
use crate::resolver::ResourceResolver;
use crate::schema::{AttributeGroup, AttributeSchema, FieldIndex};
use crate::source::{AttributeSource, NamespaceFilter};

/// Parses one theme declaration into a validated record.
///
/// Walks the attributes once in source order. Attributes outside the
/// filter's namespace are ignored, as are names the schema does not
/// recognize; when a recognized name repeats, the first occurrence wins.
/// Media file-name fields feed the DRM flag as they are assigned, so the
/// flag only ever moves from false to true within a parse.
///
/// # Arguments
/// * `schema` - Attribute lookup table, shared across parses
/// * `source` - Attributes of the declaration being parsed
/// * `filter` - Namespace the schema's attributes are declared under
/// * `resolver` - Resolution service for display strings and resource ids
///
/// # Returns
/// `Err(ManifestError::MissingCompulsoryAttribute)` when any compulsory
/// attribute never matched; resolver failures are returned unchanged.
pub fn parse_manifest<S, R>(
    schema: &AttributeSchema,
    source: &S,
    filter: &NamespaceFilter,
    resolver: &R,
) -> Result<ThemeManifest, ManifestError>
where
    S: AttributeSource + ?Sized,
    R: ResourceResolver + ?Sized,
{
    let mut manifest = ThemeManifest::empty();
    let mut seen = vec![false; schema.len()];
    let mut compulsory_found = 0;

    for i in 0..source.len() {
        if !filter.matches(source.namespace(i)) {
            continue;
        }

        let name = source.name(i);
        let entry = match schema.lookup(name) {
            Some(entry) => entry,
            None => {
                tracing::trace!("Skipping unrecognized attribute '{}'", name);
                continue;
            }
        };

        let ordinal = entry.index.ordinal();
        if seen[ordinal] {
            tracing::trace!("Skipping repeated attribute '{}'", name);
            continue;
        }
        seen[ordinal] = true;

        if entry.group == AttributeGroup::Compulsory {
            compulsory_found += 1;
        }

        match entry.index {
            FieldIndex::Name => {
                manifest.name = resolver.resolve_string(i)?;
            }
            FieldIndex::Preview => {
                manifest.preview_resource_id = resolver.resolve_int(i, UNSET_RESOURCE_ID)?;
            }
            FieldIndex::Author => {
                manifest.author = resolver.resolve_string(i)?;
            }
            FieldIndex::ThemeId => {
                manifest.theme_id = source.raw_value(i).to_string();
            }
            FieldIndex::StyleName => {
                manifest.theme_style_name = resolver.resolve_string(i)?;
            }
            FieldIndex::Thumbnail => {
                manifest.thumbnail_resource_id = resolver.resolve_int(i, UNSET_RESOURCE_ID)?;
            }
            FieldIndex::RingtoneFileName => {
                let path = source.raw_value(i).to_string();
                if drm::is_locked_media_path(&path) {
                    manifest.is_drm_protected = true;
                }
                manifest.ringtone_file_name = Some(path);
            }
            FieldIndex::NotificationRingtoneFileName => {
                let path = source.raw_value(i).to_string();
                if drm::is_locked_media_path(&path) {
                    manifest.is_drm_protected = true;
                }
                manifest.notification_ringtone_file_name = Some(path);
            }
            FieldIndex::WallpaperImage => {
                manifest.wallpaper_resource_id = resolver.resolve_int(i, UNSET_RESOURCE_ID)?;
            }
            FieldIndex::Copyright => {
                manifest.copyright = Some(resolver.resolve_string(i)?);
            }
            FieldIndex::RingtoneName => {
                manifest.ringtone_name = Some(source.raw_value(i).to_string());
            }
            FieldIndex::NotificationRingtoneName => {
                manifest.notification_ringtone_name = Some(source.raw_value(i).to_string());
            }
            FieldIndex::StyleId => {
                manifest.style_resource_id = resolver.resolve_int(i, UNSET_RESOURCE_ID)?;
            }
            FieldIndex::SoundPackName => {
                manifest.sound_pack_name = Some(source.raw_value(i).to_string());
            }
            FieldIndex::ParentThemeId => {
                manifest.parent_theme_id = resolver.resolve_int(i, UNSET_RESOURCE_ID)?;
            }
            FieldIndex::ParentThemePackageName => {
                manifest.parent_theme_package_name = Some(source.raw_value(i).to_string());
            }
            FieldIndex::HasColorPalette => {
                manifest.has_color_palette = source.raw_value(i).eq_ignore_ascii_case("true");
            }
        }
    }

    if compulsory_found < schema.compulsory_count() {
        let missing: Vec<String> = (0..schema.compulsory_count())
            .filter(|&ordinal| !seen[ordinal])
            .filter_map(|ordinal| schema.attribute_name(ordinal))
            .map(str::to_string)
            .collect();
        return Err(ManifestError::MissingCompulsoryAttribute { missing });
    }

    tracing::debug!(
        "Parsed theme manifest '{}' from {} attributes",
        manifest.name,
        source.len()
    );

    Ok(manifest)
}
