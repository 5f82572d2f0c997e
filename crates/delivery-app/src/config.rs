//! Configuration management for delivery-note
//!
//! Config stored at: ~/.config/delivery-note/config.json

use std::path::{Path, PathBuf};

use delivery_domain::model::{FormLayout, SupplierHeader};
use delivery_infra::layout_loader::load_layout_from_file;
use delivery_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Supplier details printed on every note
    #[serde(default)]
    pub supplier: SupplierHeader,

    /// Directory holding the lookup and history files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// TOML form layout; the standard twelve-field form when unset
    #[serde(default)]
    pub layout_path: Option<PathBuf>,

    /// Append finalized notes to the history log
    #[serde(default = "default_true")]
    pub log_enabled: bool,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supplier: SupplierHeader::default(),
            data_dir: None,
            layout_path: None,
            log_enabled: true,
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("delivery-note");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("delivery-note");
        Ok(data_dir)
    }

    /// Form layout from `layout_path`, or the standard layout
    pub fn layout(&self) -> Result<FormLayout> {
        match self.layout_path {
            Some(ref path) => load_layout_from_file(path),
            None => Ok(FormLayout::default()),
        }
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or create default when it is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Delivery Note Configuration")?;
        writeln!(f, "===========================")?;
        writeln!(f)?;
        writeln!(f, "Supplier:       {}", self.supplier.name)?;
        writeln!(f, "Address:        {}", self.supplier.address)?;
        writeln!(f, "Phone:          {}", self.supplier.phone)?;
        writeln!(f, "Email:          {}", self.supplier.email)?;
        writeln!(
            f,
            "Data dir:       {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(
            f,
            "Layout:         {}",
            self.layout_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(standard)".to_string())
        )?;
        writeln!(f, "History log:    {}", self.log_enabled)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
