use crate::config::StoreSettings;
use crate::utils::error::{RosterError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub store: StoreSection,
    pub grouping: Option<GroupingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub endpoint: Option<String>,
    pub table: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingSection {
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FOURSOMES_API_KEY})；未設定者保留原字樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn seed(&self) -> Option<u64> {
        self.grouping.as_ref().and_then(|g| g.seed)
    }

    /// 轉成連線設定；端點為必填
    pub fn store_settings(&self) -> Result<StoreSettings> {
        let endpoint = validate_required_field("store.endpoint", &self.store.endpoint)?;

        Ok(StoreSettings {
            endpoint: endpoint.clone(),
            table: self
                .store
                .table
                .clone()
                .unwrap_or_else(|| StoreSettings::DEFAULT_TABLE.to_string()),
            api_key: self.store.api_key.clone(),
            timeout_seconds: self.store.timeout_seconds,
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.store_settings()?.validate()
    }
}
