//! `syncdocs.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use syncdocs_content::search::DEFAULT_LATEST;
use syncdocs_content::SearchConfig;

/// Configuration file structure.
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub content: ContentSection,
    pub site: SiteSection,
    pub build: BuildSection,
    pub search: SearchSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ContentSection {
    /// Docs root
    pub dir: PathBuf,
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("content/docs"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub title: String,
    pub base_url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Sync UI".to_string(),
            base_url: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSection {
    pub output: PathBuf,
    pub minify: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            minify: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    /// 0 filters synchronously
    pub delay_ms: u64,
    /// Titles featured under "Latest"
    pub latest: Vec<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            latest: DEFAULT_LATEST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SearchSection {
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            latest: self.latest.clone(),
            delay: (self.delay_ms > 0).then(|| Duration::from_millis(self.delay_ms)),
        }
    }
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = Config::load(&temp.path().join("syncdocs.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.content.dir, PathBuf::from("content/docs"));
        assert!(config.build.minify);
        assert_eq!(config.search.to_search_config(), SearchConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("syncdocs.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Docs\"\n\n[search]\ndelay_ms = 250\nlatest = [\"Dock\"]\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.site.title, "Docs");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.build.output, PathBuf::from("dist"));

        let search = config.search.to_search_config();
        assert_eq!(search.delay, Some(Duration::from_millis(250)));
        assert_eq!(search.latest, vec!["Dock".to_string()]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("syncdocs.toml");
        fs::write(&path, "[build]\nminify = \"sometimes\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }
}
