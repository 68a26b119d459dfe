//! 原始列解析
//!
//! 將字串欄位轉為 [`RawRecord`]：時間以固定格式解析，數值沿用寬鬆的數字轉換規則，
//! 類型以單字元代碼分類。輸出保持輸入順序。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::{PipelineError, PipelineResult};
use crate::data_ingestion::IngestionReport;
use crate::domain_types::{RawRecord, RawRow, RecordType};
use crate::utils::{parse_timestamp, DEFAULT_TIME_FORMAT};

/// 時間欄位無法解析時的處理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPolicy {
    /// 立即中止整個載入
    #[default]
    Fail,
    /// 略過該列並記錄在報告中
    Skip,
}

/// 解析選項
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub time_format: String,
    pub timestamp_policy: TimestampPolicy,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            timestamp_policy: TimestampPolicy::Fail,
        }
    }
}

/// 解析結果：記錄與統計
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<RawRecord>,
    pub report: IngestionReport,
}

/// 將數值欄位轉為浮點數
///
/// 規則：前後空白忽略；空字串為 0；`Infinity`、`+Infinity`、`-Infinity` 為無限大；
/// `0x`、`0o`、`0b` 前綴（不可帶正負號）分別以十六、八、二進位解析；
/// 其餘只接受十進位數字（可含正負號、小數點與指數），無法轉換時為 NaN。
pub fn coerce_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(s) {
        return value;
    }

    // str::parse 接受 "inf"、"nan" 等字樣，這裡只放行十進位字元
    let decimal_only = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal_only {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// 解析帶進位前綴的整數字面值，前綴不符時返回 None
fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // 以浮點累加，超出 u64 的大數與前端行為一致
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * radix as f64 + c.to_digit(radix).unwrap_or(0) as f64
    }))
}

/// 解析單一列
pub fn parse_row(row: &RawRow, time_format: &str) -> Result<RawRecord, chrono::ParseError> {
    let time = parse_timestamp(&row.time, time_format)?;
    Ok(RawRecord::new(
        time,
        coerce_number(&row.value),
        RecordType::from_code(&row.kind),
    ))
}

/// 解析所有列
///
/// 時間欄位不符合格式時，依 `options.timestamp_policy` 決定中止或略過。
pub fn parse(rows: &[RawRow], options: &ParseOptions) -> PipelineResult<ParsedRecords> {
    let mut records = Vec::with_capacity(rows.len());
    let mut report = IngestionReport::new();

    for (index, row) in rows.iter().enumerate() {
        match parse_row(row, &options.time_format) {
            Ok(record) => {
                report.add_record(&record);
                records.push(record);
            }
            Err(source) => match options.timestamp_policy {
                TimestampPolicy::Fail => {
                    return Err(PipelineError::Timestamp {
                        row: index + 1,
                        value: row.time.clone(),
                        format: options.time_format.clone(),
                        source,
                    });
                }
                TimestampPolicy::Skip => {
                    warn!(row = index + 1, time = %row.time, "時間無法解析，略過此列");
                    report.add_skipped_timestamp();
                }
            },
        }
    }

    debug!("解析完成: {} 列 -> {} 筆記錄", rows.len(), records.len());
    Ok(ParsedRecords { records, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case("10", 10.0)]
    #[case("  12.5 ", 12.5)]
    #[case("-3", -3.0)]
    #[case("+4", 4.0)]
    #[case(".5", 0.5)]
    #[case("1e3", 1000.0)]
    #[case("2.5E-1", 0.25)]
    #[case("", 0.0)]
    #[case("   ", 0.0)]
    #[case("Infinity", f64::INFINITY)]
    #[case("-Infinity", f64::NEG_INFINITY)]
    #[case("0x1A", 26.0)]
    #[case("0XfF", 255.0)]
    #[case("0o17", 15.0)]
    #[case("0b101", 5.0)]
    #[case("0x10000000000000000", 18446744073709551616.0)]
    #[case("0", 0.0)]
    #[case("007", 7.0)]
    fn test_coerce_number_numeric(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(coerce_number(input), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("12abc")]
    #[case("inf")]
    #[case("NaN")]
    #[case("nan")]
    #[case("1,5")]
    #[case("1e")]
    #[case("--1")]
    #[case("1.2.3")]
    #[case("0x")]
    #[case("0xG1")]
    #[case("-0x1A")]
    #[case("0b102")]
    #[case("0o8")]
    #[case("0x1.5")]
    fn test_coerce_number_non_numeric_is_nan(#[case] input: &str) {
        assert!(coerce_number(input).is_nan(), "'{}' should coerce to NaN", input);
    }

    #[test]
    fn test_parse_preserves_order_and_classifies() {
        let rows = vec![
            RawRow::new("2020-01-02 00:00:00", "5", "b"),
            RawRow::new("2020-01-01 00:00:00", "10", "a"),
            RawRow::new("2020-01-01 06:00:00", "7", "x"),
        ];

        let parsed = parse(&rows, &ParseOptions::default()).unwrap();
        let kinds: Vec<_> = parsed.records.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RecordType::Bid, RecordType::Ask, RecordType::Unclassified]);
        let values: Vec<_> = parsed.records.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![5.0, 10.0, 7.0]);
        assert_eq!(parsed.report.unclassified, 1);
    }

    #[test]
    fn test_parse_non_numeric_value_is_carried_as_nan() {
        let rows = vec![RawRow::new("2020-01-01 00:00:00", "n/a", "a")];
        let parsed = parse(&rows, &ParseOptions::default()).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert!(parsed.records[0].value.is_nan());
        assert_eq!(parsed.report.non_numeric_values, 1);
    }

    #[test]
    fn test_parse_bad_timestamp_fails() {
        let rows = vec![
            RawRow::new("2020-01-01 00:00:00", "1", "a"),
            RawRow::new("2020/01/01 00:00:00", "2", "a"),
        ];

        let result = parse(&rows, &ParseOptions::default());
        assert_matches!(
            result,
            Err(PipelineError::Timestamp { row: 2, ref value, .. }) if value == "2020/01/01 00:00:00"
        );
    }

    #[test]
    fn test_parse_bad_timestamp_skipped() {
        let rows = vec![
            RawRow::new("2020-01-01 00:00:00", "1", "a"),
            RawRow::new("yesterday", "2", "a"),
            RawRow::new("2020-01-01 00:00:01", "3", "b"),
        ];
        let options = ParseOptions {
            timestamp_policy: TimestampPolicy::Skip,
            ..Default::default()
        };

        let parsed = parse(&rows, &options).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.report.skipped_timestamps, 1);
        assert_eq!(parsed.report.total_rows, 3);
    }

    #[test]
    fn test_parse_custom_time_format() {
        let rows = vec![RawRow::new("2020-01-01T08:30:00", "1", "a")];
        let options = ParseOptions {
            time_format: "%Y-%m-%dT%H:%M:%S".to_string(),
            ..Default::default()
        };
        assert!(parse(&rows, &options).is_ok());
        assert!(parse(&rows, &ParseOptions::default()).is_err());
    }
}
