//! Human-readable path rendering.
//!
//! Given a base directory (usually a workspace root) and a target, pick the
//! shortest form a user can still read unambiguously:
//!
//! - the base's own name when the target is the base,
//! - a relative path when the target is inside the base,
//! - the full canonical path otherwise.
//!
//! The formatter never computes parent-traversal forms like
//! `../other/file.txt`; a target outside the base is shown in full. A
//! relative target is taken relative to an absolute base.

use crate::path::normalize::normalize;
use crate::path::relationship::remainder;
use crate::path::{PathComparator, StructuredPath};
use crate::platform::Platform;

/// Renders paths relative to a base directory for display.
///
/// # Examples
///
/// ```
/// use pathview::path::ReadablePathFormatter;
/// use pathview::Platform;
///
/// let fmt = ReadablePathFormatter::new(Platform::Posix);
/// let base = "/Users/test/project";
///
/// assert_eq!(fmt.format(base, Some(base)), "project");
/// assert_eq!(fmt.format(base, Some("/Users/test/project/src/file.txt")), "src/file.txt");
/// assert_eq!(fmt.format(base, Some("/Users/test/other/file.txt")), "/Users/test/other/file.txt");
/// assert_eq!(fmt.format(base, None), "project");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadablePathFormatter {
    comparator: PathComparator,
}

impl ReadablePathFormatter {
    /// Create a formatter for the given platform.
    #[must_use]
    pub const fn new(platform: Platform) -> Self {
        Self {
            comparator: PathComparator::new(platform),
        }
    }

    /// Create a formatter for the platform of the running process.
    #[must_use]
    pub const fn current() -> Self {
        Self::new(Platform::current())
    }

    /// The platform whose rules this formatter applies.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.comparator.platform()
    }

    /// Render `target` for display relative to `base`.
    ///
    /// An absent target formats the base relative to itself, which yields
    /// the base's final segment. The result is always in canonical
    /// forward-slash form.
    #[must_use]
    pub fn format(&self, base: &str, target: Option<&str>) -> String {
        let base_path = self.comparator.parse(base);
        let target_path = match target {
            Some(target) => self.resolve(&base_path, target),
            None => base_path.clone(),
        };

        let rendered = match remainder(&base_path, &target_path, self.platform()) {
            Some([]) => base_path.basename().to_string(),
            Some(rest) => rest.join("/"),
            None => target_path.to_string(),
        };
        let rendered = normalize(&rendered);

        log::trace!("readable path for {target:?} under {base:?}: {rendered}");
        rendered
    }

    /// Parse `target`, anchoring a rootless relative path under an absolute
    /// `base`. Relative bases leave the target as given.
    fn resolve(&self, base: &StructuredPath, target: &str) -> StructuredPath {
        let parsed = self.comparator.parse(target);
        if parsed.is_absolute() || !parsed.root().is_empty() {
            return parsed;
        }
        if !base.is_absolute() || base.is_verbatim() {
            return parsed;
        }
        self.comparator.parse(&format!("{base}/{target}"))
    }
}

/// Render `target` for display relative to `base` on the current platform.
///
/// This is [`ReadablePathFormatter::format`] with [`Platform::current`].
///
/// # Examples
///
/// ```
/// use pathview::readable_path;
///
/// assert_eq!(readable_path("/Users/test/project", None), "project");
/// assert_eq!(
///     readable_path("/Users/test/project", Some("/Users/test/project/./src/../src/file.txt")),
///     "src/file.txt"
/// );
/// ```
#[must_use]
pub fn readable_path(base: &str, target: Option<&str>) -> String {
    ReadablePathFormatter::current().format(base, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSIX: ReadablePathFormatter = ReadablePathFormatter::new(Platform::Posix);
    const WINDOWS: ReadablePathFormatter = ReadablePathFormatter::new(Platform::Windows);

    const BASE: &str = "/Users/test/project";

    #[test]
    fn test_base_equals_target() {
        assert_eq!(POSIX.format(BASE, Some(BASE)), "project");
        assert_eq!(POSIX.format(BASE, Some("/Users/test/project/")), "project");
        assert_eq!(POSIX.format("/Users/test/project/.", Some(BASE)), "project");
    }

    #[test]
    fn test_absent_target_uses_base() {
        assert_eq!(POSIX.format(BASE, None), "project");
        assert_eq!(WINDOWS.format(r"C:\work\repo\", None), "repo");
    }

    #[test]
    fn test_target_inside_base() {
        assert_eq!(
            POSIX.format(BASE, Some("/Users/test/project/src/file.txt")),
            "src/file.txt"
        );
        assert_eq!(POSIX.format(BASE, Some("/Users/test/project/a")), "a");
    }

    #[test]
    fn test_target_inside_base_with_redundant_segments() {
        assert_eq!(
            POSIX.format(BASE, Some("/Users/test/project/./src/../src//file.txt")),
            "src/file.txt"
        );
        assert_eq!(
            POSIX.format("/Users/test/../test/project", Some("/Users/test/project/src/file.txt")),
            "src/file.txt"
        );
    }

    #[test]
    fn test_target_outside_base() {
        assert_eq!(
            POSIX.format(BASE, Some("/Users/test/other/file.txt")),
            "/Users/test/other/file.txt"
        );
        assert_eq!(POSIX.format(BASE, Some("/Users/test")), "/Users/test");
        assert_eq!(POSIX.format(BASE, Some("/etc/hosts")), "/etc/hosts");
    }

    #[test]
    fn test_outside_target_is_normalized() {
        assert_eq!(
            POSIX.format(BASE, Some("/Users/test/other/./x/../file.txt")),
            "/Users/test/other/file.txt"
        );
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_outside() {
        assert_eq!(
            POSIX.format(BASE, Some("/Users/test/project-old/file.txt")),
            "/Users/test/project-old/file.txt"
        );
    }

    #[test]
    fn test_windows_output_is_canonical() {
        assert_eq!(
            WINDOWS.format(r"C:\Users\test\project", Some(r"C:\Users\test\project\src\file.txt")),
            "src/file.txt"
        );
        assert_eq!(
            WINDOWS.format(r"C:\Users\test\project", Some(r"D:\data\file.txt")),
            "D:/data/file.txt"
        );
    }

    #[test]
    fn test_windows_containment_ignores_case() {
        assert_eq!(
            WINDOWS.format(r"C:\Users\Test\Project", Some(r"c:\users\test\PROJECT\Src\main.rs")),
            "Src/main.rs"
        );
        assert_eq!(
            WINDOWS.format(r"C:\Users\Test\Project", Some(r"c:\users\test\project")),
            "Project"
        );
    }

    #[test]
    fn test_posix_containment_respects_case() {
        assert_eq!(
            POSIX.format("/Users/Test/Project", Some("/Users/Test/project/src/main.rs")),
            "/Users/Test/project/src/main.rs"
        );
    }

    #[test]
    fn test_posix_backslashes_rendered_canonical() {
        assert_eq!(POSIX.format("/work", Some(r"/work/a\b")), "a/b");
    }

    #[test]
    fn test_root_base() {
        assert_eq!(POSIX.format("/", None), "/");
        assert_eq!(POSIX.format("/", Some("/etc/hosts")), "etc/hosts");
        assert_eq!(WINDOWS.format(r"C:\", None), "C:/");
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(POSIX.format(".", Some("src/main.rs")), "src/main.rs");
        assert_eq!(POSIX.format("project", Some("/abs/file")), "/abs/file");
        assert_eq!(POSIX.format("", None), ".");
    }

    #[test]
    fn test_relative_target_resolved_under_base() {
        assert_eq!(POSIX.format(BASE, Some("src/file.txt")), "src/file.txt");
        assert_eq!(POSIX.format(BASE, Some("./src/../lib.rs")), "lib.rs");
        assert_eq!(POSIX.format(BASE, Some(".")), "project");
        assert_eq!(
            POSIX.format(BASE, Some("../other/file.txt")),
            "/Users/test/other/file.txt"
        );
        assert!(!POSIX.format(BASE, Some("../../x")).starts_with(".."));
        assert_eq!(POSIX.format("/", Some("../../etc")), "etc");
        assert_eq!(
            WINDOWS.format(r"C:\Users\test\project", Some(r"..\other\file.txt")),
            "C:/Users/test/other/file.txt"
        );
        assert_eq!(
            WINDOWS.format(r"\\server\share\team", Some(r"docs\notes.md")),
            "docs/notes.md"
        );
    }

    #[test]
    fn test_drive_relative_target_not_joined() {
        assert_eq!(WINDOWS.format(r"C:\work", Some("D:notes.md")), "D:notes.md");
    }

    #[test]
    fn test_unc_paths() {
        assert_eq!(
            WINDOWS.format(r"\\server\share\team", Some(r"\\SERVER\share\team\notes.md")),
            "notes.md"
        );
        assert_eq!(
            WINDOWS.format(r"\\server\share\team", Some(r"\\other\share\team\notes.md")),
            "//other/share/team/notes.md"
        );
    }

    #[test]
    fn test_verbatim_target_kept() {
        let raw = r"\\?\C:\Very\Long\Path";
        assert_eq!(WINDOWS.format(r"C:\Very", Some(raw)), raw);
        assert_eq!(WINDOWS.format(raw, None), "Path");
    }

    #[test]
    fn test_readable_path_current_platform() {
        assert_eq!(readable_path(BASE, Some(BASE)), "project");
        assert_eq!(
            readable_path(BASE, Some("/Users/test/project/src/file.txt")),
            "src/file.txt"
        );
        assert_eq!(
            readable_path(BASE, Some("/Users/test/other/file.txt")),
            "/Users/test/other/file.txt"
        );
    }

    #[test]
    fn test_platform_accessor() {
        assert_eq!(WINDOWS.platform(), Platform::Windows);
        assert_eq!(ReadablePathFormatter::current().platform(), Platform::current());
    }
}
