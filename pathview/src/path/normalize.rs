//! Separator normalization.
//!
//! This module converts native path strings into canonical form, where
//! forward slashes are the only separator. It performs no structural
//! changes; see [`StructuredPath`](super::StructuredPath) for resolving
//! `.` and `..` components.

/// The Windows verbatim (extended-length) path marker.
pub const VERBATIM_PREFIX: &str = r"\\?\";

/// Check whether a path uses the Windows verbatim prefix.
///
/// A bare prefix with nothing after it does not count: there is no path to
/// protect.
///
/// # Examples
///
/// ```
/// use pathview::path::normalize::is_verbatim;
///
/// assert!(is_verbatim(r"\\?\C:\Very\Long\Path"));
/// assert!(!is_verbatim(r"\\?\"));
/// assert!(!is_verbatim(r"C:\Users"));
/// assert!(!is_verbatim("//?/C:/Users"));
/// ```
#[must_use]
pub fn is_verbatim(path: &str) -> bool {
    path.len() > VERBATIM_PREFIX.len() && path.starts_with(VERBATIM_PREFIX)
}

/// Convert a path to canonical forward-slash form.
///
/// Every backslash becomes a forward slash, except in verbatim paths, which
/// are returned unchanged because rewriting their separators would change
/// their meaning. Nothing else is touched: case, `.` and `..` components,
/// and repeated separators survive as given.
///
/// # Examples
///
/// ```
/// use pathview::path::normalize::normalize;
///
/// assert_eq!(normalize(r"C:\Users\test\file.txt"), "C:/Users/test/file.txt");
/// assert_eq!(normalize("/already/canonical"), "/already/canonical");
/// assert_eq!(normalize(r"mixed/sep\arators"), "mixed/sep/arators");
/// assert_eq!(normalize(r"\\?\C:\Very\Long\Path"), r"\\?\C:\Very\Long\Path");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    if is_verbatim(path) {
        return path.to_string();
    }
    path.replace('\\', "/")
}
