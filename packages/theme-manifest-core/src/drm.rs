//! DRM flag derivation from media file paths.

/// Whether `path` points into a locked media directory.
///
/// True iff the path component immediately preceding the final component
/// equals `locked`, case-sensitively. The final component itself is never
/// inspected, so a file named `locked.ogg` does not trip the flag.
pub fn is_locked_media_path(path: &str) -> bool {
    let mut components = path.rsplit('/');
    components.next();
    components.next() == Some("locked")
}
