use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// Which end of the row grid a stagger starts from.
///
/// `Outward` delays buttons by their distance from the center, so the
/// center moves first; `Inward` inverts the ranking, so the outermost
/// buttons move first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum StaggerDirection {
    #[strum(serialize = "Outward", serialize = "out")]
    Outward,
    #[strum(serialize = "Inward", serialize = "in", serialize = "reverse")]
    Inward,
}

/// Widget tuning knobs. Every field has a default, so a partial (or absent)
/// config file is fine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Extra left margin per unit of row distance, in pixels.
    pub row_left_margin_step: f64,
    /// Real time per stagger delay unit.
    pub time_per_delay_unit_ms: u64,
    /// Number of cosmetic button variants to cycle through.
    pub variant_count: u32,
    pub show_stagger: StaggerDirection,
    pub hide_stagger: StaggerDirection,
    /// Per-axis clamp for the pointer tilt, in degrees.
    pub tilt_max_deg: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            row_left_margin_step: 24.0,
            time_per_delay_unit_ms: 100,
            variant_count: 4,
            show_stagger: StaggerDirection::Outward,
            hide_stagger: StaggerDirection::Inward,
            tilt_max_deg: 15.0,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "buttonfly", "buttonfly").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Options, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("BUTTONFLY"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Options {
    match load_config() {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Falling back to default options: {}", e);
            Options::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
