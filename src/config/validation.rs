//! 配置值檢查
//!
//! 每個配置區段實作 [`Validator`]，以下列檢查函數組合出自己的規則。

use chrono::format::{Item, StrftimeItems};
use thiserror::Error;

/// 配置驗證錯誤
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} 不可為空")]
    Empty { field: &'static str },

    #[error("{field} 的值 '{value}' 無效，可選值: {allowed}")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: String,
    },

    #[error("{field} 必須是單一 ASCII 字元，目前為 '{value}'")]
    NotSingleByte { field: &'static str, value: String },

    #[error("{field} 的時間格式 '{value}' 含有無法識別的格式指令")]
    BadTimeFormat { field: &'static str, value: String },
}

/// 配置驗證器trait
pub trait Validator {
    /// 驗證配置
    fn validate(&self) -> Result<(), ValidationError>;
}

/// 值必須是允許值之一（不分大小寫）
pub fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.iter().any(|a| a.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(ValidationError::NotAllowed {
        field,
        value: value.to_string(),
        allowed: allowed.join(", "),
    })
}

/// 字串去除空白後不可為空
pub fn not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// 值必須剛好是一個 ASCII 字元，返回該字元
pub fn single_ascii_char(field: &'static str, value: &str) -> Result<u8, ValidationError> {
    match value.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ValidationError::NotSingleByte {
            field,
            value: value.to_string(),
        }),
    }
}

/// chrono 的 strftime 格式字串必須可被完整識別
pub fn time_format(field: &'static str, value: &str) -> Result<(), ValidationError> {
    not_empty(field, value)?;
    if StrftimeItems::new(value).any(|item| matches!(item, Item::Error)) {
        return Err(ValidationError::BadTimeFormat {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
