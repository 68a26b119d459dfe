use serde::{Deserialize, Serialize};

use crate::config::validation::{self, ValidationError, Validator};
use crate::data_ingestion::CsvReaderConfig;
use crate::pipeline::{ParseOptions, TimestampPolicy};
use crate::utils::DEFAULT_TIME_FORMAT;

/// 應用程序配置結構
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Validator for ApplicationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.data.validate()?;
        self.pipeline.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
    /// 日誌檔案路徑，未設定時只輸出到標準錯誤
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::one_of("log.level", &self.level, &["trace", "debug", "info", "warn", "error"])?;
        validation::one_of("log.format", &self.format, &["pretty", "json"])?;

        if let Some(file) = &self.file {
            validation::not_empty("log.file", file)?;
        }

        Ok(())
    }
}

/// 資料來源配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    pub csv_path: String,
    pub delimiter: String,
    pub has_header: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: "data.csv".to_string(),
            delimiter: ",".to_string(),
            has_header: true,
        }
    }
}

impl DataConfig {
    /// 轉換為 CSV 讀取器配置，分隔符無效時使用逗號
    pub fn reader_config(&self) -> CsvReaderConfig {
        let separator = validation::single_ascii_char("data.delimiter", &self.delimiter).unwrap_or(b',');
        CsvReaderConfig {
            has_header: self.has_header,
            separator,
        }
    }
}

impl Validator for DataConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::not_empty("data.csv_path", &self.csv_path)?;
        validation::single_ascii_char("data.delimiter", &self.delimiter)?;

        Ok(())
    }
}

/// 管線配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub time_format: String,
    pub on_invalid_timestamp: TimestampPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            on_invalid_timestamp: TimestampPolicy::Fail,
        }
    }
}

impl PipelineConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            time_format: self.time_format.clone(),
            timestamp_policy: self.on_invalid_timestamp,
        }
    }
}

impl Validator for PipelineConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        validation::time_format("pipeline.time_format", &self.time_format)?;

        Ok(())
    }
}
