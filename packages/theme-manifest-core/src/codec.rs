//! Binary codec for theme records crossing process boundaries.
//!
//! Fixed field order, explicit absence markers, a leading format version
//! byte and a trailing CRC32 over everything before it. Integers are
//! little-endian. Encoding is infallible; decoding is strict and rejects
//! anything it cannot account for byte by byte.

use crc32fast::Hasher;

use crate::error::ManifestError;
use crate::manifest::ThemeManifest;

/// Version byte leading every encoded record.
pub const FORMAT_VERSION: u8 = 1;

const MARKER_ABSENT: u8 = 0;
const MARKER_PRESENT: u8 = 1;

/// Encodes a record into its binary form.
///
/// The produced bytes decode back to an identical record via [`decode`].
pub fn encode(manifest: &ThemeManifest) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.push(FORMAT_VERSION);

    write_string(&mut buf, &manifest.name);
    write_i32(&mut buf, manifest.preview_resource_id);
    write_string(&mut buf, &manifest.author);
    write_string(&mut buf, &manifest.theme_id);
    write_string(&mut buf, &manifest.theme_style_name);
    write_i32(&mut buf, manifest.thumbnail_resource_id);
    write_opt_string(&mut buf, manifest.ringtone_file_name.as_deref());
    write_opt_string(&mut buf, manifest.notification_ringtone_file_name.as_deref());
    write_i32(&mut buf, manifest.wallpaper_resource_id);
    write_opt_string(&mut buf, manifest.copyright.as_deref());
    write_opt_string(&mut buf, manifest.ringtone_name.as_deref());
    write_opt_string(&mut buf, manifest.notification_ringtone_name.as_deref());
    write_i32(&mut buf, manifest.style_resource_id);
    write_opt_string(&mut buf, manifest.sound_pack_name.as_deref());
    write_i32(&mut buf, manifest.parent_theme_id);
    write_opt_string(&mut buf, manifest.parent_theme_package_name.as_deref());
    write_bool(&mut buf, manifest.has_color_palette);
    write_bool(&mut buf, manifest.is_drm_protected);

    let mut hasher = Hasher::new();
    hasher.update(&buf);
    buf.extend_from_slice(&hasher.finalize().to_le_bytes());

    buf
}

/// Decodes a record from its binary form.
///
/// # Arguments
/// * `bytes` - A complete encoded record, checksum included
///
/// # Returns
/// The decoded record, or a `ManifestError` naming the first thing wrong
/// with the bytes: checksum mismatch, unsupported version, truncation,
/// bad marker or bool byte, invalid UTF-8, or trailing garbage.
pub fn decode(bytes: &[u8]) -> Result<ThemeManifest, ManifestError> {
    if bytes.len() < 4 {
        return Err(ManifestError::TruncatedRecord {
            context: "checksum",
        });
    }
    let (payload, trailer) = bytes.split_at(bytes.len() - 4);
    let stored = u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]]);

    let mut hasher = Hasher::new();
    hasher.update(payload);
    let computed = hasher.finalize();
    if stored != computed {
        return Err(ManifestError::ChecksumMismatch { stored, computed });
    }

    let mut reader = ByteReader::new(payload);

    let version = reader.read_u8("format version")?;
    if version != FORMAT_VERSION {
        return Err(ManifestError::UnsupportedFormatVersion { version });
    }

    let mut manifest = ThemeManifest::empty();
    manifest.name = reader.read_string("name")?;
    manifest.preview_resource_id = reader.read_i32("previewResourceId")?;
    manifest.author = reader.read_string("author")?;
    manifest.theme_id = reader.read_string("themeId")?;
    manifest.theme_style_name = reader.read_string("themeStyleName")?;
    manifest.thumbnail_resource_id = reader.read_i32("thumbnailResourceId")?;
    manifest.ringtone_file_name = reader.read_opt_string("ringtoneFileName")?;
    manifest.notification_ringtone_file_name =
        reader.read_opt_string("notificationRingtoneFileName")?;
    manifest.wallpaper_resource_id = reader.read_i32("wallpaperResourceId")?;
    manifest.copyright = reader.read_opt_string("copyright")?;
    manifest.ringtone_name = reader.read_opt_string("ringtoneName")?;
    manifest.notification_ringtone_name = reader.read_opt_string("notificationRingtoneName")?;
    manifest.style_resource_id = reader.read_i32("styleResourceId")?;
    manifest.sound_pack_name = reader.read_opt_string("soundPackName")?;
    manifest.parent_theme_id = reader.read_i32("parentThemeId")?;
    manifest.parent_theme_package_name = reader.read_opt_string("parentThemePackageName")?;
    manifest.has_color_palette = reader.read_bool("hasColorPalette")?;
    manifest.is_drm_protected = reader.read_bool("isDrmProtected")?;

    reader.finish()?;

    Ok(manifest)
}

fn write_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

fn write_opt_string(buf: &mut Vec<u8>, value: Option<&str>) {
    match value {
        Some(value) => {
            buf.push(MARKER_PRESENT);
            write_string(buf, value);
        }
        None => buf.push(MARKER_ABSENT),
    }
}

fn write_i32(buf: &mut Vec<u8>, value: i32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn write_bool(buf: &mut Vec<u8>, value: bool) {
    buf.push(if value { 1 } else { 0 });
}

/// Sequential reader over the decoded payload.
struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, count: usize, context: &'static str) -> Result<&'a [u8], ManifestError> {
        let end = self
            .pos
            .checked_add(count)
            .filter(|&end| end <= self.data.len())
            .ok_or(ManifestError::TruncatedRecord { context })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u8(&mut self, context: &'static str) -> Result<u8, ManifestError> {
        Ok(self.take(1, context)?[0])
    }

    fn read_i32(&mut self, context: &'static str) -> Result<i32, ManifestError> {
        let bytes = self.take(4, context)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u32(&mut self, context: &'static str) -> Result<u32, ManifestError> {
        let bytes = self.take(4, context)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_bool(&mut self, context: &'static str) -> Result<bool, ManifestError> {
        match self.read_u8(context)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(ManifestError::InvalidMarker { context, value }),
        }
    }

    fn read_string(&mut self, context: &'static str) -> Result<String, ManifestError> {
        let len = self.read_u32(context)? as usize;
        let bytes = self.take(len, context)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ManifestError::InvalidUtf8 { context })
    }

    fn read_opt_string(&mut self, context: &'static str) -> Result<Option<String>, ManifestError> {
        match self.read_u8(context)? {
            MARKER_ABSENT => Ok(None),
            MARKER_PRESENT => Ok(Some(self.read_string(context)?)),
            value => Err(ManifestError::InvalidMarker { context, value }),
        }
    }

    fn finish(&self) -> Result<(), ManifestError> {
        let remaining = self.data.len() - self.pos;
        if remaining > 0 {
            return Err(ManifestError::TrailingBytes { remaining });
        }
        Ok(())
    }
}
