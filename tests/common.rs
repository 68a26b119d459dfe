#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use spread_chart::domain_types::RawRow;
use std::io::Write;

pub const HEADER: &str = "time,value,type";

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("invalid test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("invalid test date")
}

pub fn row(time: &str, value: &str, kind: &str) -> RawRow {
    RawRow::new(time, value, kind)
}

/// 三列的範例資料：兩筆同日賣價與一筆隔日買價
pub fn scenario_rows() -> Vec<RawRow> {
    vec![
        row("2020-01-01 00:00:00", "10", "a"),
        row("2020-01-01 12:00:00", "20", "a"),
        row("2020-01-02 00:00:00", "5", "b"),
    ]
}

/// 將列寫入暫存 CSV 檔案
pub fn write_csv(rows: &[RawRow]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    writeln!(file, "{}", HEADER).unwrap();
    for r in rows {
        writeln!(file, "{},{},{}", r.time, r.value, r.kind).unwrap();
    }
    file.flush().unwrap();
    file
}
