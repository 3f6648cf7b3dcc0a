//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/coffeechat/config.toml` by default.
//!
//! Credentials (the Nylas API key and grant id) are deliberately NOT part of
//! the file: they come from the environment or command-line flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use coffeechat_scheduler::SchedulerConfig;

// ---------------------------------------------------------------------------
// CliConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the coffeechat CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Scheduling settings.
    #[serde(default)]
    pub scheduling: SchedulingSettings,

    /// Nylas connection settings.
    #[cfg(feature = "nylas")]
    #[serde(default)]
    pub nylas: NylasSettings,
}

/// Scheduling settings: owner zone, offered hours, slot length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingSettings {
    /// IANA timezone the page owner schedules in.
    pub timezone: String,

    /// Slot length in minutes.
    pub duration_minutes: u32,

    /// First offered hour (0-23) in the owner's zone.
    pub start_hour: u32,

    /// Hour the offered window closes (1-24) in the owner's zone.
    pub end_hour: u32,

    /// Meeting location attached to booked events, usually a conference URL.
    pub location: Option<String>,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            duration_minutes: 30,
            start_hour: 9,
            end_hour: 17,
            location: None,
        }
    }
}

/// Nylas connection settings (non-secret knobs only).
#[cfg(feature = "nylas")]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NylasSettings {
    /// API base URI override (default: the US region endpoint).
    pub api_uri: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

#[cfg(feature = "nylas")]
impl Default for NylasSettings {
    fn default() -> Self {
        Self {
            api_uri: None,
            timeout: coffeechat_providers::nylas::NylasConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coffeechat")
    }

    /// Builds the scheduler configuration from the `[scheduling]` section.
    pub fn to_scheduler_config(&self) -> Result<SchedulerConfig, String> {
        let timezone = self
            .scheduling
            .timezone
            .parse()
            .map_err(|_| format!("unknown timezone: {}", self.scheduling.timezone))?;

        let policy = coffeechat_core::SlotPolicy::new(
            self.scheduling.duration_minutes,
            self.scheduling.start_hour,
            self.scheduling.end_hour,
        );

        let mut config = SchedulerConfig::new()
            .with_timezone(timezone)
            .with_policy(policy);

        if let Some(ref location) = self.scheduling.location {
            config = config.with_location(location);
        }

        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }
}

#[cfg(feature = "nylas")]
impl NylasSettings {
    /// Converts to provider configuration.
    ///
    /// Credentials are passed in rather than read from the file; `None`
    /// values produce an error naming the environment variable to set.
    pub fn to_provider_config(
        &self,
        api_key: Option<&str>,
        grant_id: Option<&str>,
    ) -> Result<coffeechat_providers::nylas::NylasConfig, String> {
        use coffeechat_providers::nylas::NylasConfig;

        let api_key = api_key.ok_or_else(|| {
            format!(
                "Nylas API key not found. Set {} or pass --api-key",
                NylasConfig::API_KEY_ENV
            )
        })?;
        let grant_id = grant_id.ok_or_else(|| {
            format!(
                "Nylas grant id not found. Set {} or pass --grant-id",
                NylasConfig::GRANT_ID_ENV
            )
        })?;

        let mut config = NylasConfig::new(api_key, grant_id)
            .with_timeout(std::time::Duration::from_secs(self.timeout));

        if let Some(ref api_uri) = self.api_uri {
            config = config.with_api_uri(api_uri);
        }

        config.validate()?;
        Ok(config)
    }
}
