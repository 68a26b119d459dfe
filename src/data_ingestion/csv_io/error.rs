//! CSV 載入錯誤定義

use thiserror::Error;

/// CSV 載入錯誤類型
///
/// 任一錯誤都表示資料無法取得，管線不會被執行。
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("檔案讀取錯誤: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV 解析錯誤: {0}")]
    ParseError(#[from] csv::Error),

    #[error("缺少必要欄位: {0}")]
    MissingColumn(String),
}

/// CSV 處理結果類型
pub type CsvResult<T> = Result<T, CsvError>;
