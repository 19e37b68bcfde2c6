use std::path::{Path, PathBuf};

use medisight_assistant::LatencyProfile;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedisightConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Fixes the mock transcript choice. `None` draws from OS entropy.
    #[serde(default)]
    pub transcript_seed: Option<u64>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for MedisightConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            latency: LatencyConfig::default(),
            transcript_seed: None,
            log_format: LogFormat::default(),
        }
    }
}

/// Simulated service latency in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub health_query_ms: u64,
    pub transcription_ms: u64,
    pub analysis_ms: u64,
    pub dashboard_query_ms: u64,
}

impl LatencyConfig {
    pub fn zero() -> Self {
        Self {
            health_query_ms: 0,
            transcription_ms: 0,
            analysis_ms: 0,
            dashboard_query_ms: 0,
        }
    }

    pub fn profile(&self) -> LatencyProfile {
        LatencyProfile::from_millis(
            self.health_query_ms,
            self.transcription_ms,
            self.analysis_ms,
            self.dashboard_query_ms,
        )
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        let profile = LatencyProfile::default();
        Self {
            health_query_ms: profile.health_query.as_millis() as u64,
            transcription_ms: profile.transcription.as_millis() as u64,
            analysis_ms: profile.analysis.as_millis() as u64,
            dashboard_query_ms: profile.dashboard_query.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("medisight"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// Load the config from the default location, or defaults if there is none.
pub fn load_config() -> eyre::Result<MedisightConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<MedisightConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(MedisightConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse config JSON, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<MedisightConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: MedisightConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Medisight."
        ));
    }

    // v0 → v1: files written before versioning have the same shape; stamp them.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
        tracing::info!(from_version, "stamped unversioned config");
    }

    Ok(json)
}

/// Save to the default location.
pub fn save_config(config: &MedisightConfig) -> eyre::Result<PathBuf> {
    save_config_in(&config_dir()?, config)
}

/// Save `config.json` into `dir`, creating it if needed. Returns the file path.
pub fn save_config_in(dir: &Path, config: &MedisightConfig) -> eyre::Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    save_config_to(&path, config)?;
    Ok(path)
}

/// Save the config to exactly `path`, creating its parent directory if needed.
pub fn save_config_to(path: &Path, config: &MedisightConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
