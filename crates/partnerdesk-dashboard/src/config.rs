use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use partnerdesk_core::models::partner::{DashboardContext, PartnerType};
use partnerdesk_query::DEFAULT_PAGE_SIZE;

use crate::error::DashboardError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub partner_id: Uuid,
    #[serde(default)]
    pub partner_type: PartnerType,
    /// Directory holding `records.json` and `transactions.json`.
    pub data_dir: PathBuf,
    /// Rows per list page. Added in v1.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_currency() -> String {
    "USD".to_string()
}

impl DashboardConfig {
    pub fn new(partner_id: Uuid, partner_type: PartnerType, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            partner_id,
            partner_type,
            data_dir: data_dir.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
            currency: default_currency(),
        }
    }

    /// Initial dashboard state for this partner.
    pub fn context(&self) -> DashboardContext {
        DashboardContext::new(self.partner_type)
    }
}

pub fn default_config_path() -> Result<PathBuf, DashboardError> {
    let base = dirs::config_dir().ok_or(DashboardError::NoConfigDir)?;
    Ok(base.join("partnerdesk").join("config.json"))
}

pub fn load_config(path: &Path) -> Result<DashboardConfig, DashboardError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let raw_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0);
    let on_disk_version =
        u32::try_from(raw_version).map_err(|_| DashboardError::UnsupportedConfigVersion {
            found: raw_version,
            supported: CURRENT_VERSION,
        })?;

    let migrated = migrate(json, on_disk_version)?;
    let config: DashboardConfig = serde_json::from_value(migrated)?;
    if config.default_page_size == 0 {
        return Err(DashboardError::InvalidConfig(
            "default_page_size must be at least 1".to_string(),
        ));
    }
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, DashboardError> {
    if from_version > CURRENT_VERSION {
        return Err(DashboardError::UnsupportedConfigVersion {
            found: u64::from(from_version),
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: add default_page_size
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| DashboardError::InvalidConfig("config is not a JSON object".to_string()))?;
        obj.entry("default_page_size")
            .or_insert(serde_json::Value::Number(DEFAULT_PAGE_SIZE.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added default_page_size)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &DashboardConfig) -> Result<(), DashboardError> {
    let dir = path
        .parent()
        .ok_or_else(|| DashboardError::InvalidConfig(format!("{} has no parent", path.display())))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
