//! Path equality and containment.
//!
//! [`PathComparator`] answers "do these two strings name the same place?"
//! and "is this path under that one?" for a fixed [`Platform`]. Both inputs
//! are structurally normalized before comparison, so `/a/./b/`, `/a/b` and
//! `/a/c/../b` are all equal.

use crate::path::relationship::{remainder, PathRelationship};
use crate::path::StructuredPath;
use crate::platform::Platform;

/// Compares path strings under one platform's separator and case rules.
///
/// # Examples
///
/// ```
/// use pathview::path::PathComparator;
/// use pathview::Platform;
///
/// let windows = PathComparator::new(Platform::Windows);
/// assert!(windows.equal(Some(r"C:\Users\Test"), Some(r"c:\users\test")));
///
/// let posix = PathComparator::new(Platform::Posix);
/// assert!(!posix.equal(Some("/Users/Test"), Some("/Users/test")));
/// assert!(posix.equal(Some("/Users/./Test/"), Some("/Users/Test")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathComparator {
    platform: Platform,
}

impl PathComparator {
    /// Create a comparator for the given platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Create a comparator for the platform of the running process.
    #[must_use]
    pub const fn current() -> Self {
        Self::new(Platform::current())
    }

    /// The platform whose rules this comparator applies.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Parse a path under this comparator's platform.
    #[must_use]
    pub fn parse(&self, path: &str) -> StructuredPath {
        StructuredPath::parse(path, self.platform)
    }

    /// Check whether two optional paths denote the same location.
    ///
    /// Two absent paths are equal; an absent path never equals a present
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::PathComparator;
    /// use pathview::Platform;
    ///
    /// let cmp = PathComparator::new(Platform::Posix);
    /// assert!(cmp.equal(None, None));
    /// assert!(!cmp.equal(None, Some("/x")));
    /// assert!(!cmp.equal(Some("/x"), None));
    /// assert!(cmp.equal(Some("/"), Some("/")));
    /// ```
    #[must_use]
    pub fn equal(&self, a: Option<&str>, b: Option<&str>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.equal_structured(&self.parse(a), &self.parse(b)),
            _ => false,
        }
    }

    /// Check whether two already-parsed paths denote the same location.
    #[must_use]
    pub fn equal_structured(&self, a: &StructuredPath, b: &StructuredPath) -> bool {
        remainder(a, b, self.platform).is_some_and(<[String]>::is_empty)
    }

    /// Determine how `a` relates to `b` in the directory hierarchy.
    #[must_use]
    pub fn relationship(&self, a: &str, b: &str) -> PathRelationship {
        PathRelationship::between(&self.parse(a), &self.parse(b), self.platform)
    }

    /// Check whether `target` is `base` or lies inside it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::PathComparator;
    /// use pathview::Platform;
    ///
    /// let cmp = PathComparator::new(Platform::Windows);
    /// assert!(cmp.contains(r"C:\Project", r"c:\project\src\main.rs"));
    /// assert!(cmp.contains(r"C:\Project", r"C:\Project"));
    /// assert!(!cmp.contains(r"C:\Project", r"C:\Projects\main.rs"));
    /// ```
    #[must_use]
    pub fn contains(&self, base: &str, target: &str) -> bool {
        remainder(&self.parse(base), &self.parse(target), self.platform).is_some()
    }

    /// The canonical path of `target` relative to `base`.
    ///
    /// Returns an empty string when the paths are equal and `None` when
    /// `target` is outside `base`. Segment names come from `target`, so
    /// its spelling is preserved even where the case rule ignored it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::PathComparator;
    /// use pathview::Platform;
    ///
    /// let cmp = PathComparator::new(Platform::Posix);
    /// assert_eq!(
    ///     cmp.strip_base("/Users/test/project", "/Users/test/project/src/file.txt"),
    ///     Some("src/file.txt".to_string())
    /// );
    /// assert_eq!(cmp.strip_base("/a", "/a/"), Some(String::new()));
    /// assert_eq!(cmp.strip_base("/a", "/b/c"), None);
    /// ```
    #[must_use]
    pub fn strip_base(&self, base: &str, target: &str) -> Option<String> {
        let target = self.parse(target);
        remainder(&self.parse(base), &target, self.platform).map(|rest| rest.join("/"))
    }
}

/// Check whether two optional paths denote the same location on the
/// current platform.
///
/// This is [`PathComparator::equal`] with [`Platform::current`].
///
/// # Examples
///
/// ```
/// use pathview::paths_equal;
///
/// assert!(paths_equal(None, None));
/// assert!(!paths_equal(None, Some("/x")));
/// assert!(paths_equal(Some("/Users/./Test"), Some("/Users/Test")));
/// assert!(paths_equal(Some("/Users/Test/"), Some("/Users/Test")));
/// ```
#[must_use]
pub fn paths_equal(a: Option<&str>, b: Option<&str>) -> bool {
    PathComparator::current().equal(a, b)
}
