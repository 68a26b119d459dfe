use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::data_ingestion::IngestionReport;
use crate::domain_types::{DailyAggregate, DailySpread, Extent, Series, Side};
use crate::utils::naive_to_timestamp_ms;

/// 圖表顯示模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// 原始報價
    #[default]
    Raw,
    /// 日平均
    Daily,
}

/// 圖表上的一個點
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: NaiveDateTime,
    /// 毫秒時間戳，供前端座標軸直接使用
    pub timestamp_ms: i64,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(time: NaiveDateTime, value: f64) -> Self {
        Self {
            time,
            timestamp_ms: naive_to_timestamp_ms(&time),
            value,
        }
    }
}

/// 管線輸出
///
/// 一次載入產生一個實例，之後只讀。繪圖層所需的全部資料都在這裡。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub asks: Series,
    pub bids: Series,
    pub asks_by_day: Vec<DailyAggregate>,
    pub bids_by_day: Vec<DailyAggregate>,
    pub time_extent: Extent<NaiveDateTime>,
    /// 所有數值都無法轉換時為 None
    pub value_extent: Option<Extent<f64>>,
    pub daily_spread: Vec<DailySpread>,
    pub report: IngestionReport,
}

impl ChartData {
    pub fn series(&self, side: Side) -> &Series {
        match side {
            Side::Ask => &self.asks,
            Side::Bid => &self.bids,
        }
    }

    pub fn daily(&self, side: Side) -> &[DailyAggregate] {
        match side {
            Side::Ask => &self.asks_by_day,
            Side::Bid => &self.bids_by_day,
        }
    }

    /// 依顯示模式取得某一方向的繪圖點
    pub fn points(&self, side: Side, mode: DisplayMode) -> Vec<ChartPoint> {
        match mode {
            DisplayMode::Raw => self
                .series(side)
                .iter()
                .map(|r| ChartPoint::new(r.time, r.value))
                .collect(),
            DisplayMode::Daily => self
                .daily(side)
                .iter()
                .map(|agg| ChartPoint::new(agg.time(), agg.mean_value))
                .collect(),
        }
    }

    /// 某日的價差，無對應資料時返回 None
    pub fn spread_on(&self, day: chrono::NaiveDate) -> Option<&DailySpread> {
        self.daily_spread.iter().find(|s| s.day == day)
    }
}
