use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::day_start;

/// 單一日曆日的平均值
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub day: NaiveDate,         // 日曆日（已截斷時分秒）
    pub mean_value: f64,        // 當日所有數值的算術平均
}

impl DailyAggregate {
    pub fn new(day: NaiveDate, mean_value: f64) -> Self {
        Self { day, mean_value }
    }

    /// 繪圖時使用的時間點（當日 00:00:00）
    pub fn time(&self) -> NaiveDateTime {
        day_start(&self.day)
    }
}

/// 某日的買賣價差
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySpread {
    pub day: NaiveDate,
    pub ask_mean: f64,
    pub bid_mean: f64,
    pub spread: f64,            // ask_mean - bid_mean
}

impl DailySpread {
    pub fn new(day: NaiveDate, ask_mean: f64, bid_mean: f64) -> Self {
        Self {
            day,
            ask_mean,
            bid_mean,
            spread: ask_mean - bid_mean,
        }
    }
}
