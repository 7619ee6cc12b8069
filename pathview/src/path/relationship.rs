//! Path relationship checking.
//!
//! This module determines how two structurally normalized paths relate in
//! the directory hierarchy, under a platform's case rule.

use crate::path::StructuredPath;
use crate::platform::Platform;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathview::path::{PathRelationship, StructuredPath};
/// use pathview::Platform;
///
/// let parent = StructuredPath::parse("/home/user", Platform::Posix);
/// let child = StructuredPath::parse("/home/user/project", Platform::Posix);
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child, Platform::Posix),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths denote the same location.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::{PathRelationship, StructuredPath};
    /// use pathview::Platform;
    ///
    /// let a = StructuredPath::parse(r"C:\Users", Platform::Windows);
    /// let b = StructuredPath::parse(r"c:\users\test", Platform::Windows);
    /// assert_eq!(
    ///     PathRelationship::between(&a, &b, Platform::Windows),
    ///     PathRelationship::Ancestor
    /// );
    ///
    /// let a = StructuredPath::parse("/Users", Platform::Posix);
    /// let b = StructuredPath::parse("/users/test", Platform::Posix);
    /// assert_eq!(
    ///     PathRelationship::between(&a, &b, Platform::Posix),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(path1: &StructuredPath, path2: &StructuredPath, platform: Platform) -> Self {
        match remainder(path1, path2, platform) {
            Some([]) => Self::Same,
            Some(_) => Self::Ancestor,
            None if remainder(path2, path1, platform).is_some() => Self::Descendant,
            None => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Descendant.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

/// The segments of `target` below `base`, or `None` if `target` is not
/// inside `base`.
///
/// An empty slice means the two paths are the same. Roots and segments are
/// compared under the platform case rule, one whole segment at a time, so
/// `/a/bc` is not inside `/a/b`. A remainder that climbs with `..` is
/// outside by definition.
pub(crate) fn remainder<'a>(
    base: &StructuredPath,
    target: &'a StructuredPath,
    platform: Platform,
) -> Option<&'a [String]> {
    if base.is_verbatim() != target.is_verbatim() {
        return None;
    }
    if !platform.names_equal(base.root(), target.root()) {
        return None;
    }

    let base_segments = base.segments();
    let target_segments = target.segments();
    if base_segments.len() > target_segments.len() {
        return None;
    }

    let shared = base_segments
        .iter()
        .zip(target_segments)
        .all(|(a, b)| platform.names_equal(a, b));
    if !shared {
        return None;
    }

    let rest = &target_segments[base_segments.len()..];
    if rest.iter().any(|segment| segment == "..") {
        return None;
    }
    Some(rest)
}
