use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain_types::{RawRecord, RecordType};

/// 單次載入的資料統計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionReport {
    /// 總列數（含被略過的列）
    pub total_rows: usize,
    /// 賣價記錄數
    pub asks: usize,
    /// 買價記錄數
    pub bids: usize,
    /// 類型無法識別的記錄數
    pub unclassified: usize,
    /// 數值無法轉換而成為 NaN 的記錄數
    pub non_numeric_values: usize,
    /// 時間無法解析而被略過的列數
    pub skipped_timestamps: usize,
}

impl IngestionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記錄一筆成功解析的記錄
    pub fn add_record(&mut self, record: &RawRecord) {
        self.total_rows += 1;
        match record.kind {
            RecordType::Ask => self.asks += 1,
            RecordType::Bid => self.bids += 1,
            RecordType::Unclassified => self.unclassified += 1,
        }
        if record.is_value_nan() {
            self.non_numeric_values += 1;
        }
    }

    /// 記錄一筆時間無法解析而被略過的列
    pub fn add_skipped_timestamp(&mut self) {
        self.total_rows += 1;
        self.skipped_timestamps += 1;
    }

    /// 實際進入管線的記錄數
    pub fn parsed_records(&self) -> usize {
        self.total_rows - self.skipped_timestamps
    }

    pub fn has_anomalies(&self) -> bool {
        self.unclassified > 0 || self.non_numeric_values > 0 || self.skipped_timestamps > 0
    }

    /// 輸出統計日誌
    pub fn log_summary(&self) {
        info!(
            total = self.total_rows,
            asks = self.asks,
            bids = self.bids,
            "資料載入完成"
        );
        if self.unclassified > 0 {
            warn!(count = self.unclassified, "存在無法識別類型的記錄，已排除於買賣序列之外");
        }
        if self.non_numeric_values > 0 {
            warn!(count = self.non_numeric_values, "存在非數值的 value 欄位，以 NaN 參與計算");
        }
        if self.skipped_timestamps > 0 {
            warn!(count = self.skipped_timestamps, "存在無法解析的時間欄位，已略過");
        }
    }
}
