use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub walk: WalkConfig,
    pub diagrams: DiagramConfig,
    pub output: OutputConfig,
    pub repository: RepositoryConfig,
}

/// Project metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Document title; derived from the source when unset
    pub name: Option<String>,
}

/// File tree settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub max_depth: usize,
}

/// Diagram settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub enabled: bool,
    /// Levels of the file tree drawn in the tree diagram
    pub tree_depth: usize,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
}

/// Remote repository settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// Prefix for temporary clone directories
    pub temp_prefix: String,
    /// Leave the clone on disk after the run
    pub keep_clone: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    /// File written into the output directory for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "README.md",
            OutputFormat::Json => "analysis.json",
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { max_depth: 10 }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tree_depth: 3,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            directory: PathBuf::from("./codesketch-docs"),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            temp_prefix: "codesketch_".to_string(),
            keep_clone: false,
        }
    }
}

/// CLI values that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub depth: Option<usize>,
    pub diagram_depth: Option<usize>,
    pub no_diagrams: bool,
    pub keep_clone: bool,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                if path.exists() {
                    tracing::warn!("Ignoring config {}: {}", path.display(), e);
                }
                Self::default()
            }
        }
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: CliOverrides) {
        if let Some(out) = cli.output {
            self.output.directory = out;
        }

        if let Some(fmt) = cli.format {
            self.output.format = match fmt.as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Markdown,
            };
        }

        if let Some(d) = cli.depth {
            self.walk.max_depth = d;
        }

        if let Some(d) = cli.diagram_depth {
            self.diagrams.tree_depth = d;
        }

        if cli.no_diagrams {
            self.diagrams.enabled = false;
        }

        if cli.keep_clone {
            self.repository.keep_clone = true;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.walk.max_depth == 0 {
            return Err(Error::config_validation("max_depth must be at least 1"));
        }

        if self.walk.max_depth > 100 {
            return Err(Error::config_validation("max_depth cannot exceed 100"));
        }

        if self.diagrams.tree_depth == 0 {
            return Err(Error::config_validation("diagram tree_depth must be at least 1"));
        }

        if self.repository.temp_prefix.contains(std::path::is_separator) {
            return Err(Error::config_validation(
                "temp_prefix must not contain a path separator",
            ));
        }

        Ok(())
    }
}
