// time_utils.rs
//
// 提供時間解析與格式轉換相關的工具函數。
// 主要功能：
// 1. 以固定格式解析 CSV 中的時間欄位
// 2. 將時間戳截斷為日曆日
// 3. 在日曆日與圖表所需的時間點之間轉換
//
// 所有時間均為不帶時區的本地日曆時間，不做任何時區轉換。

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};

/// CSV 時間欄位的預設格式
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 以指定格式解析時間字串
pub fn parse_timestamp(value: &str, format: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, format)
}

/// 取得時間戳所在的日曆日（捨棄時分秒）
pub fn day_of(ts: &NaiveDateTime) -> NaiveDate {
    ts.date()
}

/// 日曆日的起始時間點（00:00:00）
pub fn day_start(day: &NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// 將日曆時間視為 UTC 轉換為毫秒時間戳，供前端座標軸使用
pub fn naive_to_timestamp_ms(ts: &NaiveDateTime) -> i64 {
    ts.and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_default_format() {
        let ts = parse_timestamp("2020-01-01 12:34:56", DEFAULT_TIME_FORMAT).unwrap();
        assert_eq!(ts.year(), 2020);
        assert_eq!(ts.hour(), 12);
        assert_eq!(ts.minute(), 34);
        assert_eq!(ts.second(), 56);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_timestamp("2020-01-01T12:34:56", DEFAULT_TIME_FORMAT).is_err());
        assert!(parse_timestamp("2020-01-01", DEFAULT_TIME_FORMAT).is_err());
        assert!(parse_timestamp("", DEFAULT_TIME_FORMAT).is_err());
    }

    #[test]
    fn test_day_truncation() {
        let ts = parse_timestamp("2020-03-15 23:59:59", DEFAULT_TIME_FORMAT).unwrap();
        let day = day_of(&ts);
        assert_eq!(day, NaiveDate::from_ymd_opt(2020, 3, 15).unwrap());
        assert_eq!(
            day_start(&day),
            parse_timestamp("2020-03-15 00:00:00", DEFAULT_TIME_FORMAT).unwrap()
        );
    }

    #[test]
    fn test_timestamp_ms() {
        let ts = parse_timestamp("1970-01-02 00:00:00", DEFAULT_TIME_FORMAT).unwrap();
        assert_eq!(naive_to_timestamp_ms(&ts), 86_400_000);
    }
}
