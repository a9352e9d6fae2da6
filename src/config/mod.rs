pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};

use crate::diff::{Alignment, DiffOptions, Granularity};
use crate::render::{OutputFormat, RenderOptions};

pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigData {
    pub version: String,
    #[serde(default)]
    pub diff: DiffConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub notebook: NotebookConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default)]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_color")]
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_color() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["txt".to_string(), "md".to_string()]
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            diff: DiffConfig::default(),
            render: RenderConfig::default(),
            notebook: NotebookConfig::default(),
        }
    }
}

impl ConfigData {
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            granularity: self.diff.granularity,
            alignment: self.diff.alignment,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            color: self.render.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let data: ConfigData = toml::from_str(
            r#"
version = "1"

[diff]
granularity = "word"
"#,
        )
        .unwrap();

        assert_eq!(data.diff.granularity, Granularity::Word);
        assert_eq!(data.diff.alignment, Alignment::Sequence);
        assert!(data.render.color);
        assert_eq!(data.notebook.extensions, vec!["txt", "md"]);
    }

    #[test]
    fn test_default_config_serializes() {
        let content = toml::to_string_pretty(&ConfigData::default()).unwrap();
        assert!(content.contains(r#"granularity = "sentence""#));
        assert!(content.contains(r#"format = "ansi""#));
    }
}
