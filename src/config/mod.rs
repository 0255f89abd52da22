#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 玩家儲存端的連線設定（由設定檔與命令列合併而來）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub table: String,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl StoreSettings {
    pub const DEFAULT_TABLE: &'static str = "players";

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            table: Self::DEFAULT_TABLE.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for StoreSettings {
    fn store_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        validate_url("store.endpoint", &self.endpoint)?;
        validate_non_empty_string("store.table", &self.table)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("store.timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併設定檔與命令列旗標，命令列優先
    pub fn resolve(&self) -> Result<(StoreSettings, Option<u64>)> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut store = file.store.clone();
        if let Some(endpoint) = &self.endpoint {
            store.endpoint = Some(endpoint.clone());
        }
        if let Some(table) = &self.table {
            store.table = Some(table.clone());
        }
        if let Some(api_key) = &self.api_key {
            store.api_key = Some(api_key.clone());
        }
        if let Some(timeout) = self.timeout {
            store.timeout_seconds = Some(timeout);
        }

        let merged = TomlConfig {
            store,
            grouping: file.grouping.clone(),
        };
        let settings = merged.store_settings()?;
        settings.validate()?;

        let seed = match &self.command {
            Command::Groups { seed: Some(seed), .. } => Some(*seed),
            _ => merged.seed(),
        };

        Ok((settings, seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_settings_validation() {
        assert!(StoreSettings::new("https://demo.supabase.co/rest/v1")
            .validate()
            .is_ok());

        let mut bad_table = StoreSettings::new("http://localhost:3000");
        bad_table.table = "  ".to_string();
        assert!(bad_table.validate().is_err());

        let mut zero_timeout = StoreSettings::new("http://localhost:3000");
        zero_timeout.timeout_seconds = Some(0);
        assert!(zero_timeout.validate().is_err());
    }

    #[test]
    fn test_timeout_conversion() {
        let mut settings = StoreSettings::new("http://localhost:3000");
        assert_eq!(settings.request_timeout(), None);

        settings.timeout_seconds = Some(15);
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_file() {
        use clap::Parser;
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"[store]\nendpoint = \"https://file.example.com\"\ntable = \"golfers\"\n\n[grouping]\nseed = 5\n",
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from([
            "foursomes",
            "--config",
            path.as_str(),
            "--endpoint",
            "http://localhost:3000",
            "list",
        ])
        .unwrap();
        let (settings, seed) = cli.resolve().unwrap();

        assert_eq!(settings.endpoint, "http://localhost:3000");
        assert_eq!(settings.table, "golfers");
        assert_eq!(seed, Some(5));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_command_seed_wins_over_file_seed() {
        use clap::Parser;

        let cli = CliConfig::try_parse_from([
            "foursomes",
            "--endpoint",
            "http://localhost:3000",
            "groups",
            "--seed",
            "9",
        ])
        .unwrap();

        let (_, seed) = cli.resolve().unwrap();
        assert_eq!(seed, Some(9));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_missing_endpoint_is_reported() {
        use clap::Parser;

        let cli = CliConfig::try_parse_from(["foursomes", "list"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
