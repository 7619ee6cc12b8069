//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathview::config::{Config, ConfigMerger};
/// use pathview::Platform;
///
/// let low = Config { platform: Some(Platform::Posix), ..Default::default() };
/// let high = Config { platform: Some(Platform::Windows), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.platform, Some(Platform::Windows));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources are applied in order of ascending precedence, regardless of
    /// the order they are passed in.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Workspace folders: replaced as a whole list when the source has any
    /// - Active document: source overwrites if Some
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.fallback_base.is_some() {
            target.fallback_base.clone_from(&source.fallback_base);
        }

        if let Some(source_ws) = &source.workspace {
            let target_ws = target.workspace.get_or_insert_with(Default::default);
            if !source_ws.folders.is_empty() {
                target_ws.folders.clone_from(&source_ws.folders);
            }
            if source_ws.active_document.is_some() {
                target_ws
                    .active_document
                    .clone_from(&source_ws.active_document);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::StaticWorkspace;
    use crate::Platform;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_merge_respects_precedence_not_order() {
        let high = source(
            2,
            Config {
                platform: Some(Platform::Windows),
                ..Default::default()
            },
        );
        let low = source(
            1,
            Config {
                platform: Some(Platform::Posix),
                ..Default::default()
            },
        );

        let merged = ConfigMerger::merge(vec![high, low]);
        assert_eq!(merged.platform, Some(Platform::Windows));
    }

    #[test]
    fn test_merge_none_does_not_clear() {
        let mut target = Config {
            platform: Some(Platform::Posix),
            fallback_base: Some("/home".to_string()),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.platform, Some(Platform::Posix));
        assert_eq!(target.fallback_base.as_deref(), Some("/home"));
    }

    #[test]
    fn test_merge_workspace_fields_independently() {
        let mut target = Config {
            workspace: Some(StaticWorkspace::new(vec!["/a".to_string()])),
            ..Default::default()
        };
        let source = Config {
            workspace: Some(StaticWorkspace::default().with_active_document("/a/x")),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);

        let ws = target.workspace();
        assert_eq!(ws.folders, vec!["/a"]);
        assert_eq!(ws.active_document.as_deref(), Some("/a/x"));
    }

    #[test]
    fn test_merge_workspace_folders_replaced() {
        let mut target = Config {
            workspace: Some(StaticWorkspace::new(vec!["/a".to_string(), "/b".to_string()])),
            ..Default::default()
        };
        let source = Config {
            workspace: Some(StaticWorkspace::new(vec!["/c".to_string()])),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.workspace().folders, vec!["/c"]);
    }
}
