use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site build settings, read from `sitegen.toml`.
///
/// Every field has a default so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Where the generated site is written.
    pub output_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// URL prefix the site is served under.
    pub base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("docs"),
            template_path: PathBuf::from("template.html"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = "sitegen.toml";

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        for path in [
            &mut config.content_dir,
            &mut config.static_dir,
            &mut config.output_dir,
            &mut config.template_path,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
        config.base_path = Self::normalize_base_path(&config.base_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// The config file in the current directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(Self::FILE_NAME)
    }

    /// Returns a copy with `base_path` replaced and normalised.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = Self::normalize_base_path(base_path);
        self
    }

    /// Ensures a base path starts and ends with `/`.
    pub fn normalize_base_path(base_path: &str) -> String {
        let trimmed = base_path.trim().trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        assert_eq!(Config::config_path(), PathBuf::from("sitegen.toml"));
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.output_dir, PathBuf::from("docs"));
        assert_eq!(config.template_path, PathBuf::from("template.html"));
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            content_dir: PathBuf::from("/tmp/site/content"),
            base_path: "/blog/".into(),
            ..Config::default()
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(r#"output_dir = "public""#).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/test/path")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("SITEGEN_TEST_VAR", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$SITEGEN_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("SITEGEN_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_normalize_base_path() {
        assert_eq!(Config::normalize_base_path("/"), "/");
        assert_eq!(Config::normalize_base_path(""), "/");
        assert_eq!(Config::normalize_base_path("blog"), "/blog/");
        assert_eq!(Config::normalize_base_path("/blog"), "/blog/");
        assert_eq!(Config::normalize_base_path("/a/b/"), "/a/b/");
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(&config_file, "content_dir = [not toml").unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("sitegen.toml");
        let test_config = Config {
            output_dir: PathBuf::from("/tmp/test-site"),
            base_path: "/docs/".into(),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, test_config);
    }

    #[test]
    fn test_loaded_base_path_is_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("sitegen.toml");
        std::fs::write(&config_file, r#"base_path = "blog""#).unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.base_path, "/blog/");
    }

    #[test]
    fn test_with_base_path_override() {
        let config = Config::default().with_base_path("/repo");
        assert_eq!(config.base_path, "/repo/");
    }
}
