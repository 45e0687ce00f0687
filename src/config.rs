use crate::domain::billing::DEFAULT_EXPIRING_WINDOW_DAYS;
use crate::domain::stats::RevenueScope;
use crate::error::{GymError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_RECENT_PAYMENTS_LIMIT: usize = 10;
pub const DEFAULT_MAX_PROFILE_IMAGE_BYTES: usize = 512 * 1024;

/// Tunables for the billing engine and member editor.
///
/// Loaded from a JSON file; any field left out keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub expiring_window_days: i64,
    pub recent_payments_limit: usize,
    pub revenue_scope: RevenueScope,
    pub max_profile_image_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expiring_window_days: DEFAULT_EXPIRING_WINDOW_DAYS,
            recent_payments_limit: DEFAULT_RECENT_PAYMENTS_LIMIT,
            revenue_scope: RevenueScope::default(),
            max_profile_image_bytes: DEFAULT_MAX_PROFILE_IMAGE_BYTES,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.expiring_window_days < 0 {
            return Err(GymError::ValidationError(
                "expiringWindowDays must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
