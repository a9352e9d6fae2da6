use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ConfigData, CONFIG_VERSION};
use crate::error::ConfigError;

/// Keys accepted by `get`/`set`
pub const KEYS: &[&str] = &[
    "diff.granularity",
    "diff.alignment",
    "render.format",
    "render.color",
    "notebook.extensions",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    pub path: PathBuf,
}

impl Config {
    pub fn project_path(project_root: impl AsRef<Path>) -> PathBuf {
        project_root.as_ref().join(".pagediff").join("config.toml")
    }

    /// Per-user config file, used when the project has none
    pub fn user_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "pagediff", "pagediff")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn load_or_default(project_root: impl AsRef<Path>) -> Result<Self> {
        let project_path = Self::project_path(project_root);
        if project_path.exists() {
            return Self::load_from(&project_path);
        }

        if let Some(user_path) = Self::user_path().filter(|p| p.exists()) {
            debug!(path = %user_path.display(), "using user config");
            let mut config = Self::load_from(&user_path)?;
            config.path = project_path;
            return Ok(config);
        }

        Ok(Self {
            data: ConfigData::default(),
            path: project_path,
        })
    }

    /// Load the project config, failing when it has not been initialized
    pub fn load(project_root: impl AsRef<Path>) -> Result<Self> {
        let path = Self::project_path(project_root);
        if !path.exists() {
            return Err(ConfigError::NotFound { path }.into());
        }
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let data: ConfigData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if data.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch {
                expected: CONFIG_VERSION.to_string(),
                found: data.version,
            }
            .into());
        }

        debug!(path = %path.display(), "loaded config");
        Ok(Self {
            data,
            path: path.to_path_buf(),
        })
    }

    pub fn init(project_root: impl AsRef<Path>) -> Result<()> {
        let config_dir = project_root.as_ref().join(".pagediff");
        fs::create_dir_all(&config_dir).context("Failed to create .pagediff directory")?;

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            let content = toml::to_string_pretty(&ConfigData::default())
                .context("Failed to serialize initial config")?;
            fs::write(&config_path, content).context("Failed to write initial config")?;
        }

        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.data).context("Failed to serialize config")?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&self.path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "diff.granularity" => self.data.diff.granularity = value.parse()?,
            "diff.alignment" => self.data.diff.alignment = value.parse()?,
            "render.format" => self.data.render.format = value.parse()?,
            "render.color" => {
                self.data.render.color = value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                    }
                })?;
            }
            "notebook.extensions" => {
                let extensions: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if extensions.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: key.to_string(),
                        value: value.to_string(),
                    }
                    .into());
                }
                self.data.notebook.extensions = extensions;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        }

        self.save()?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "diff.granularity" => self.data.diff.granularity.to_string(),
            "diff.alignment" => self.data.diff.alignment.to_string(),
            "render.format" => self.data.render.format.to_string(),
            "render.color" => self.data.render.color.to_string(),
            "notebook.extensions" => self.data.notebook.extensions.join(","),
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into())
            }
        };

        Ok(value)
    }

    pub fn entries(&self) -> Result<Vec<(&'static str, String)>> {
        KEYS.iter().map(|key| Ok((*key, self.get(key)?))).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            path: PathBuf::from(".pagediff/config.toml"),
        }
    }
}
