//! Application settings (`~/.config/gathering-log/settings.toml`).
//!
//! Every field has a default, so a missing file or a partial file is fine.
//! CLI flags override whatever is loaded here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profession::Profession;
use crate::store::{ITEMS_FILE, LOCALES_FILE};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub files: FileSettings,
    pub sources: SourceSettings,
    pub enrich: EnrichSettings,
    pub locations: LocationSettings,
    pub upstream: UpstreamSettings,
}

/// Where the two stores live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub items: PathBuf,
    pub locales: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            items: PathBuf::from(ITEMS_FILE),
            locales: PathBuf::from(LOCALES_FILE),
        }
    }
}

/// Raw CSV export per profession.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub miner: PathBuf,
    pub botanist: PathBuf,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            miner: PathBuf::from(Profession::Miner.default_source()),
            botanist: PathBuf::from(Profession::Botanist.default_source()),
        }
    }
}

impl SourceSettings {
    pub fn path_for(&self, profession: Profession) -> &Path {
        match profession {
            Profession::Miner => &self.miner,
            Profession::Botanist => &self.botanist,
        }
    }
}

/// Pacing for the icon/translation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichSettings {
    /// Maximum records to process per run (unbounded if unset).
    pub limit: Option<usize>,
    pub request_delay_ms: u64,
    pub cooldown_every: usize,
    pub cooldown_secs: u64,
}

impl Default for EnrichSettings {
    fn default() -> Self {
        Self {
            limit: None,
            request_delay_ms: 100,
            cooldown_every: 100,
            cooldown_secs: 60,
        }
    }
}

/// Pacing for the zone-resolution flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSettings {
    pub limit: Option<usize>,
    pub request_delay_ms: u64,
    pub cooldown_every: usize,
    pub cooldown_secs: u64,
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            limit: None,
            request_delay_ms: 100,
            cooldown_every: 50,
            cooldown_secs: 20,
        }
    }
}

/// Upstream API endpoints and request identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub user_agent: String,
    pub garland_url: String,
    pub cafemaker_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            user_agent: "FFXIV-Gathering-Log-Tool/2.0".to_string(),
            garland_url: "https://www.garlandtools.org".to_string(),
            cafemaker_url: "https://cafemaker.wakingsands.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Canonical path to the settings file: `~/.config/gathering-log/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("gathering-log").join("settings.toml")
}

/// Load settings from [`settings_path`], falling back to defaults if the file is absent.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    toml::from_str(&contents).map_err(|e| SettingsError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

impl Settings {
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.enrich.cooldown_every, 100);
        assert_eq!(settings.locations.cooldown_every, 50);
        assert_eq!(settings.files.items, PathBuf::from("items.json"));
    }

    #[test]
    fn upstream_defaults_point_at_public_services() {
        let upstream = UpstreamSettings::default();
        assert_eq!(upstream.garland_url, "https://www.garlandtools.org");
        assert_eq!(upstream.cafemaker_url, "https://cafemaker.wakingsands.com");
        assert_eq!(upstream.timeout_secs, 30);
        assert_eq!(upstream.user_agent, "FFXIV-Gathering-Log-Tool/2.0");
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[enrich]
limit = 50

[locations]
cooldown_secs = 5

[sources]
miner = "data/mining.csv"
"#,
        )
        .unwrap();
        assert_eq!(settings.enrich.limit, Some(50));
        assert_eq!(settings.enrich.cooldown_secs, 60);
        assert_eq!(settings.locations.cooldown_secs, 5);
        assert_eq!(settings.locations.cooldown_every, 50);
        assert_eq!(settings.sources.path_for(Profession::Miner), Path::new("data/mining.csv"));
        assert_eq!(
            settings.sources.path_for(Profession::Botanist),
            Path::new("Logging and Harvesting.csv")
        );
    }

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn invalid_toml_is_reported() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "[enrich\nlimit = ").unwrap();
        assert!(matches!(load_settings_from(&path), Err(SettingsError::Parse { .. })));
    }

    #[test]
    fn serialized_settings_parse_back() {
        let mut settings = Settings::default();
        settings.upstream.user_agent = "test-agent/1.0".to_string();
        let text = settings.to_toml_string().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
