//! Asset path resolution.
//!
//! Pages served from a development host load assets relative to the checkout;
//! everything else loads them from the course's published asset tree.

use crate::config::PageConfig;

/// Asset root used on development hosts.
pub const DEVELOPMENT_ROOT: &str = "../..";

/// Where the page is being served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Pick the environment for `hostname`.
    pub fn detect(hostname: &str, development_hosts: &[String]) -> Self {
        if development_hosts.iter().any(|h| h == hostname) {
            Self::Development
        } else {
            Self::Production
        }
    }
}

/// Root of the published asset tree for a course project.
pub fn production_root(config: &PageConfig) -> String {
    format!(
        "/assets/courses/{}/{}/assets/widgets/",
        config.course, config.project
    )
}

/// Build the path of `filename` under `prefix`.
///
/// Trailing slashes are stripped from the root, and both ends of the prefix
/// and filename are stripped, so callers may pass either `"shared"` or
/// `"/shared/"`.
pub fn asset_path(
    config: &PageConfig,
    environment: Environment,
    filename: &str,
    prefix: &str,
) -> String {
    let root = match environment {
        Environment::Development => DEVELOPMENT_ROOT.to_string(),
        Environment::Production => production_root(config),
    };
    let root = root.trim_end_matches('/');
    let prefix = prefix.trim_matches('/');
    let filename = filename.trim_matches('/');
    format!("{}/{}/{}", root, prefix, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PageConfig {
        PageConfig::new("ai-story-studio-6-8", "ai-story-studio-6-8")
    }

    #[test]
    fn test_detect_environment() {
        let config = config();
        assert_eq!(config.environment("localhost"), Environment::Development);
        assert_eq!(config.environment("127.0.0.1"), Environment::Development);
        assert_eq!(config.environment("example.org"), Environment::Production);
    }

    #[test]
    fn test_development_path() {
        let path = config().asset_path(Environment::Development, "correct.mp3", "shared");
        assert_eq!(path, "../../shared/correct.mp3");
    }

    #[test]
    fn test_production_path() {
        let path = config().asset_path(Environment::Production, "action.mp3", "shared");
        assert_eq!(
            path,
            "/assets/courses/ai-story-studio-6-8/ai-story-studio-6-8/assets/widgets/shared/action.mp3"
        );
    }

    #[test]
    fn test_slashes_are_trimmed() {
        let path = config().asset_path(Environment::Development, "//incorrect.wav/", "/shared//");
        assert_eq!(path, "../../shared/incorrect.wav");
    }
}
