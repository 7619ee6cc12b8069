//! Default base directory resolution.
//!
//! The host application (an editor, a CLI, a language server) knows which
//! document is active and which root directories are open. This module
//! defines the narrow interface the host implements, [`WorkspaceHost`], and
//! the rule that turns that context into a base directory for
//! [`ReadablePathFormatter`](crate::path::ReadablePathFormatter).

use serde::{Deserialize, Serialize};

use crate::path::relationship::remainder;
use crate::path::PathComparator;
use crate::platform::Platform;

/// Context supplied by the host environment.
#[cfg_attr(test, mockall::automock)]
pub trait WorkspaceHost {
    /// The path of the document the user is working in, if any.
    fn active_document(&self) -> Option<String>;

    /// The root directories open in the host, in the host's order.
    fn workspace_roots(&self) -> Vec<String>;
}

/// Pick the directory paths should be displayed relative to.
///
/// - An active document inside an open root resolves to that root. When
///   roots nest, the innermost root containing the document wins.
/// - With no active document, the first open root is used.
/// - Otherwise (no roots, or an active document outside all of them) the
///   `fallback` is returned unchanged.
///
/// Containment follows the `platform` case rule.
///
/// # Examples
///
/// ```
/// use pathview::workspace::{resolve_default_base, StaticWorkspace};
/// use pathview::Platform;
///
/// let host = StaticWorkspace::new(vec!["/work/api".into(), "/work/web".into()])
///     .with_active_document("/work/web/src/index.ts");
/// assert_eq!(resolve_default_base(&host, "/home/me", Platform::Posix), "/work/web");
///
/// let idle = StaticWorkspace::new(vec!["/work/api".into()]);
/// assert_eq!(resolve_default_base(&idle, "/home/me", Platform::Posix), "/work/api");
///
/// let empty = StaticWorkspace::default();
/// assert_eq!(resolve_default_base(&empty, "/home/me", Platform::Posix), "/home/me");
/// ```
pub fn resolve_default_base<H>(host: &H, fallback: &str, platform: Platform) -> String
where
    H: WorkspaceHost + ?Sized,
{
    let roots = host.workspace_roots();

    let Some(document) = host.active_document() else {
        return match roots.into_iter().next() {
            Some(first) => {
                log::debug!("no active document; using first workspace root {first}");
                first
            }
            None => {
                log::debug!("no active document or workspace roots; using {fallback}");
                fallback.to_string()
            }
        };
    };

    let comparator = PathComparator::new(platform);
    let document_path = comparator.parse(&document);

    let owner = roots
        .into_iter()
        .filter_map(|root| {
            let root_path = comparator.parse(&root);
            remainder(&root_path, &document_path, platform)?;
            Some((root_path.segments().len(), root))
        })
        .max_by_key(|(depth, _)| *depth)
        .map(|(_, root)| root);

    if let Some(root) = owner {
        log::debug!("active document {document} belongs to workspace root {root}");
        root
    } else {
        log::debug!("active document {document} is outside all workspace roots; using {fallback}");
        fallback.to_string()
    }
}

/// A host whose context is fixed at construction.
///
/// Used when the context comes from configuration or command-line flags
/// rather than a live editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticWorkspace {
    /// Open root directories, in priority order.
    #[serde(default)]
    pub folders: Vec<String>,

    /// The active document, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_document: Option<String>,
}

impl StaticWorkspace {
    /// Create a workspace with the given roots and no active document.
    #[must_use]
    pub fn new(folders: Vec<String>) -> Self {
        Self {
            folders,
            active_document: None,
        }
    }

    /// Set the active document.
    #[must_use]
    pub fn with_active_document(mut self, document: impl Into<String>) -> Self {
        self.active_document = Some(document.into());
        self
    }
}

impl WorkspaceHost for StaticWorkspace {
    fn active_document(&self) -> Option<String> {
        self.active_document.clone()
    }

    fn workspace_roots(&self) -> Vec<String> {
        self.folders.clone()
    }
}
