//! Generator configuration and the optional `demo-viz.toml` file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{DemoVizError, Result};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "demo-viz.toml";

/// How the JSON text is placed into the template's script block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedMode {
    /// Inserted exactly as serialized.
    #[default]
    Verbatim,
    /// HTML-significant characters escaped as JSON unicode escapes.
    ScriptSafe,
}

/// Everything the generator needs besides its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub embed: EmbedMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("output"),
            embed: EmbedMode::Verbatim,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    paths: PathsConfig,
    #[serde(default)]
    render: RenderConfig,
}

#[derive(Debug, Deserialize, Default)]
struct PathsConfig {
    template_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
struct RenderConfig {
    embed: Option<EmbedMode>,
}

impl GeneratorConfig {
    /// Load a config file. Relative paths set inside it are taken relative to
    /// the file's own directory; unset ones keep the built-in defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DemoVizError::io(path, e))?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| DemoVizError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let defaults = Self::default();

        Ok(Self {
            template_dir: file.paths.template_dir.map(|p| base.join(p)).unwrap_or(defaults.template_dir),
            output_dir: file.paths.output_dir.map(|p| base.join(p)).unwrap_or(defaults.output_dir),
            embed: file.render.embed.unwrap_or(defaults.embed),
        })
    }

    /// Load `explicit` if given, else `demo-viz.toml` from the working
    /// directory if present, else the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            debug!("Using config from {}", fallback.display());
            return Self::from_file(fallback);
        }

        Ok(Self::default())
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn with_overrides(
        mut self,
        template_dir: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        escape_script: bool,
    ) -> Self {
        if let Some(dir) = template_dir {
            self.template_dir = dir;
        }
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if escape_script {
            self.embed = EmbedMode::ScriptSafe;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = GeneratorConfig::from_toml_str("", Path::new("demo-viz.toml")).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_relative_paths_follow_config_location() {
        let toml = r#"
[paths]
template_dir = "assets/templates"

[render]
embed = "script-safe"
"#;
        let config = GeneratorConfig::from_toml_str(toml, Path::new("/srv/viz/demo-viz.toml")).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("/srv/viz/assets/templates"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.embed, EmbedMode::ScriptSafe);
    }

    #[test]
    fn test_unset_paths_keep_working_directory_defaults() {
        let toml = "[render]\nembed = \"verbatim\"\n";
        let config = GeneratorConfig::from_toml_str(toml, Path::new("/srv/viz/demo-viz.toml")).unwrap();
        assert_eq!(config.template_dir, PathBuf::from("templates"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let toml = "[paths]\ntemplate_dir = \"tpl\"\noutput_dir = \"out\"\n";
        let config = GeneratorConfig::from_toml_str(toml, Path::new("/srv/viz/demo-viz.toml"))
            .unwrap()
            .with_overrides(Some(PathBuf::from("cli-templates")), None, true);

        assert_eq!(config.template_dir, PathBuf::from("cli-templates"));
        assert_eq!(config.output_dir, PathBuf::from("/srv/viz/out"));
        assert_eq!(config.embed, EmbedMode::ScriptSafe);
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let toml = "[render]\nembed = \"script-safe\"\n";
        let loaded = GeneratorConfig::from_toml_str(toml, Path::new("demo-viz.toml")).unwrap();
        let config = loaded.clone().with_overrides(None, None, false);
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_absolute_paths_kept() {
        let toml = "[paths]\noutput_dir = \"/tmp/reports\"\n";
        let config = GeneratorConfig::from_toml_str(toml, Path::new("conf/demo-viz.toml")).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_bad_embed_mode_rejected() {
        let toml = "[render]\nembed = \"sideways\"\n";
        let result = GeneratorConfig::from_toml_str(toml, Path::new("demo-viz.toml"));
        assert!(matches!(result, Err(DemoVizError::Config { .. })));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let result = GeneratorConfig::load(Some(dir.path().join("nope.toml").as_path()));
        assert!(matches!(result, Err(DemoVizError::FileNotFound { .. })));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("demo-viz.toml");
        fs::write(&path, "[paths]\ntemplate_dir = \"tpl\"\n").unwrap();

        let config = GeneratorConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.template_dir, dir.path().join("tpl"));
        assert_eq!(config.embed, EmbedMode::Verbatim);
    }
}
