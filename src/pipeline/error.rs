//! 管線錯誤定義

use thiserror::Error;

use crate::data_ingestion::CsvError;

/// 管線錯誤類型
///
/// 所有錯誤都是致命的：發生時不產生任何部分輸出。
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("資料載入失敗: {0}")]
    Load(#[from] CsvError),

    #[error("第 {row} 筆記錄的時間無法解析: '{value}' 不符合格式 '{format}': {source}")]
    Timestamp {
        row: usize,
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("資料集為空，沒有可顯示的資料")]
    EmptyDataset,
}

/// 管線結果類型
pub type PipelineResult<T> = Result<T, PipelineError>;
