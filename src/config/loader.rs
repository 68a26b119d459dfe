use config::{Config, ConfigError, Environment as ConfigEnvironment, File};
use std::env;
use std::path::{Path, PathBuf};

/// 選擇環境的環境變數
pub const ENV_VAR: &str = "SPREAD_CHART_ENV";

/// 配置目錄的環境變數
pub const CONFIG_DIR_VAR: &str = "CONFIG_DIR";

/// 覆寫配置項的環境變數前綴，例如 `SPREAD_CHART__DATA__CSV_PATH`
pub const ENV_PREFIX: &str = "SPREAD_CHART";

/// 環境類型枚舉
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// 從環境變數取得當前環境設定
    pub fn from_env() -> Self {
        match env::var(ENV_VAR)
            .unwrap_or_else(|_| "development".into())
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// 轉換為配置文件名
    pub fn as_filename(&self) -> &'static str {
        match self {
            Environment::Development => "development.toml",
            Environment::Production => "production.toml",
        }
    }
}

/// 配置加載器，負責根據環境加載適當的配置
pub struct ConfigLoader;

impl ConfigLoader {
    /// 當前環境的配置文件路徑
    pub fn config_path(env: Environment) -> PathBuf {
        let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".into());
        Path::new(&config_dir).join(env.as_filename())
    }

    /// 載入指定環境的配置
    ///
    /// 配置文件不存在時僅使用預設值與環境變數。
    pub fn load(env: Environment) -> Result<Config, ConfigError> {
        Self::load_from(&Self::config_path(env), false)
    }

    /// 從指定文件載入配置
    pub fn load_from(path: &Path, required: bool) -> Result<Config, ConfigError> {
        Config::builder()
            .add_source(File::from(path).required(required))
            // 從環境變數加載配置（優先級高於文件配置）
            .add_source(
                ConfigEnvironment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
    }

    /// 載入當前環境的配置
    pub fn load_current() -> Result<Config, ConfigError> {
        Self::load(Environment::from_env())
    }
}
