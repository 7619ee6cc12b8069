//! Lexical structural normalization.
//!
//! A [`StructuredPath`] is a path string split into a root and a list of
//! normal segments, with `.` and `..` resolved and redundant separators
//! collapsed. Parsing is purely textual; the filesystem is never consulted,
//! so symlinks are not followed and `a/link/..` resolves to `a`.

use std::fmt;

use crate::path::normalize::{is_verbatim, normalize, VERBATIM_PREFIX};
use crate::platform::Platform;

const PARENT: &str = "..";
const CURRENT: &str = ".";

/// A path broken into root and segments after lexical normalization.
///
/// Roots are kept in canonical forward-slash form:
///
/// | Input (Windows)     | Root               |
/// |---------------------|--------------------|
/// | `C:\Users`          | `C:/`              |
/// | `C:Users`           | `C:`               |
/// | `\Users`            | `/`                |
/// | `\\server\share\x`  | `//server/share/`  |
/// | `Users`             | (empty)            |
///
/// On POSIX the only root is `/`, and backslashes are ordinary characters.
///
/// Verbatim (`\\?\`) paths on Windows are kept whole as the root with no
/// segments, since they must not be reinterpreted.
///
/// # Examples
///
/// ```
/// use pathview::path::StructuredPath;
/// use pathview::Platform;
///
/// let path = StructuredPath::parse("/a/./b//c/../d/", Platform::Posix);
/// assert_eq!(path.root(), "/");
/// assert_eq!(path.segments(), ["a", "b", "d"]);
/// assert_eq!(path.to_string(), "/a/b/d");
///
/// let path = StructuredPath::parse(r"C:\Users\Test\..\Test\", Platform::Windows);
/// assert_eq!(path.to_string(), "C:/Users/Test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredPath {
    root: String,
    segments: Vec<String>,
    verbatim: bool,
}

impl StructuredPath {
    /// Parse and lexically normalize a path under the given platform rules.
    ///
    /// - empty and `.` segments are dropped
    /// - `..` removes the preceding normal segment
    /// - `..` directly below an absolute root is dropped
    /// - leading `..` segments of a relative path are kept
    ///
    /// Never fails; any string yields a best-effort result.
    #[must_use]
    pub fn parse(path: &str, platform: Platform) -> Self {
        if platform == Platform::Windows && is_verbatim(path) {
            return Self {
                root: trim_verbatim(path).to_string(),
                segments: Vec::new(),
                verbatim: true,
            };
        }

        let (root, rest) = split_root(path, platform);
        let absolute = root.ends_with('/');

        let mut segments: Vec<String> = Vec::new();
        for part in rest.split(|c| platform.is_separator(c)) {
            match part {
                "" | CURRENT => {}
                PARENT => {
                    if segments.last().is_some_and(|last| last != PARENT) {
                        segments.pop();
                    } else if !absolute {
                        segments.push(PARENT.to_string());
                    }
                }
                name => segments.push(name.to_string()),
            }
        }

        Self {
            root,
            segments,
            verbatim: false,
        }
    }

    /// The root in canonical form, or an empty string for relative paths.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The normal segments below the root.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether this path was kept verbatim.
    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.verbatim
    }

    /// Whether the path is anchored at an absolute root.
    ///
    /// Drive-relative Windows paths such as `C:foo` are not absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.verbatim || self.root.ends_with('/')
    }

    /// Whether the path is a bare root such as `/` or `C:/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.verbatim && !self.root.is_empty() && self.segments.is_empty()
    }

    /// The final component of the path.
    ///
    /// A path without segments yields its root, and an empty relative path
    /// yields `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathview::path::StructuredPath;
    /// use pathview::Platform;
    ///
    /// let path = StructuredPath::parse("/Users/test/project", Platform::Posix);
    /// assert_eq!(path.basename(), "project");
    ///
    /// let root = StructuredPath::parse("/", Platform::Posix);
    /// assert_eq!(root.basename(), "/");
    /// ```
    #[must_use]
    pub fn basename(&self) -> &str {
        if self.verbatim {
            return self
                .root
                .rsplit('\\')
                .find(|part| !part.is_empty())
                .unwrap_or(&self.root);
        }
        match self.segments.last() {
            Some(last) => last,
            None if self.root.is_empty() => CURRENT,
            None => &self.root,
        }
    }

    /// Render the path in canonical forward-slash form.
    ///
    /// Segments on POSIX may contain literal backslashes; this routes them
    /// through [`normalize`] so the result never does, verbatim paths aside.
    #[must_use]
    pub fn to_canonical(&self) -> String {
        normalize(&self.to_string())
    }
}

impl fmt::Display for StructuredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_empty() && self.segments.is_empty() {
            return f.write_str(CURRENT);
        }
        f.write_str(&self.root)?;
        f.write_str(&self.segments.join("/"))
    }
}

/// Drop one trailing `\` from a verbatim path unless it ends at a drive
/// root such as `\\?\C:\`.
fn trim_verbatim(path: &str) -> &str {
    let Some(trimmed) = path.strip_suffix('\\') else {
        return path;
    };
    let body = &trimmed[VERBATIM_PREFIX.len()..];
    let is_drive = body.len() == 2 && body.ends_with(':');
    if body.is_empty() || is_drive {
        path
    } else {
        trimmed
    }
}

/// Split a path into its canonical root and the unparsed remainder.
fn split_root(path: &str, platform: Platform) -> (String, &str) {
    match platform {
        Platform::Posix => match path.strip_prefix('/') {
            Some(rest) => ("/".to_string(), rest),
            None => (String::new(), path),
        },
        Platform::Windows => split_windows_root(path),
    }
}

fn split_windows_root(path: &str) -> (String, &str) {
    let is_sep = |c: char| Platform::Windows.is_separator(c);
    let mut chars = path.chars();

    match (chars.next(), chars.next(), chars.next()) {
        // \\server\share
        (Some(a), Some(b), Some(c)) if is_sep(a) && is_sep(b) && !is_sep(c) => {
            let rest = &path[2..];
            let (server, rest) = take_component(rest);
            let rest = rest.trim_start_matches(is_sep);
            let (share, rest) = take_component(rest);
            let root = if share.is_empty() {
                format!("//{server}/")
            } else {
                format!("//{server}/{share}/")
            };
            (root, rest)
        }
        (Some(a), _, _) if is_sep(a) => ("/".to_string(), &path[1..]),
        (Some(drive), Some(':'), next) if drive.is_ascii_alphabetic() => match next {
            Some(c) if is_sep(c) => (format!("{drive}:/"), &path[3..]),
            _ => (format!("{drive}:"), &path[2..]),
        },
        _ => (String::new(), path),
    }
}

/// Take everything up to the next Windows separator.
fn take_component(s: &str) -> (&str, &str) {
    match s.find(|c| Platform::Windows.is_separator(c)) {
        Some(idx) => (&s[..idx], &s[idx..]),
        None => (s, ""),
    }
}
