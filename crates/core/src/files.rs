//! Public URLs for externally stored files.
//!
//! Binary assets live in object storage behind a separate files service.
//! This service only stores references (`storage_files` rows) and resolves
//! them to URLs the frontend can fetch.

/// Build the externally servable URL for a stored file.
///
/// Convention: `{base_url}/files/{file_type}/{storage_key}`.
///
/// Trailing slashes on `base_url` and leading slashes on `storage_key` are
/// collapsed so the result never contains `//` after the scheme.
///
/// # Examples
///
/// ```
/// use folio_core::files::file_url;
///
/// assert_eq!(
///     file_url("https://files.example.com/", "miniature-image", "a/b.webp"),
///     "https://files.example.com/files/miniature-image/a/b.webp"
/// );
/// ```
pub fn file_url(base_url: &str, file_type: &str, storage_key: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let key = storage_key.trim_start_matches('/');
    format!("{base}/files/{file_type}/{key}")
}
