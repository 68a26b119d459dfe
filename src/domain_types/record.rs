use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 報價方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Ask,    // 賣方報價
    Bid,    // 買方報價
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Ask => "ask",
            Side::Bid => "bid",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 記錄類型枚舉
///
/// 由 CSV 的 `type` 欄位映射而來，只有完全等於 `a` 或 `b` 的值才會被分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Ask,            // "a"
    Bid,            // "b"
    Unclassified,   // 其他任何值
}

impl RecordType {
    /// 從單字元代碼解析記錄類型
    pub fn from_code(code: &str) -> Self {
        match code {
            "a" => RecordType::Ask,
            "b" => RecordType::Bid,
            _ => RecordType::Unclassified,
        }
    }

    /// 對應的報價方向，未分類記錄返回 None
    pub fn side(&self) -> Option<Side> {
        match self {
            RecordType::Ask => Some(Side::Ask),
            RecordType::Bid => Some(Side::Bid),
            RecordType::Unclassified => None,
        }
    }
}

impl From<Side> for RecordType {
    fn from(side: Side) -> Self {
        match side {
            Side::Ask => RecordType::Ask,
            Side::Bid => RecordType::Bid,
        }
    }
}

/// CSV 原始列，所有欄位均為字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub time: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl RawRow {
    pub fn new(time: impl Into<String>, value: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            value: value.into(),
            kind: kind.into(),
        }
    }
}

/// 解析後的報價記錄
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub time: NaiveDateTime,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: RecordType,
}

impl RawRecord {
    pub fn new(time: NaiveDateTime, value: f64, kind: RecordType) -> Self {
        Self { time, value, kind }
    }

    /// 數值欄位是否因無法轉換而成為 NaN
    pub fn is_value_nan(&self) -> bool {
        self.value.is_nan()
    }
}
