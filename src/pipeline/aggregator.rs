//! 分組、排序與日聚合

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::domain_types::{DailyAggregate, DailySpread, Extent, RawRecord, Series, Side};
use crate::utils::day_of;

/// 依記錄類型拆分為賣價與買價序列
///
/// 保持輸入順序；未分類的記錄不進入任何一個序列。
pub fn partition(records: &[RawRecord]) -> (Series, Series) {
    let mut asks = Vec::new();
    let mut bids = Vec::new();

    for record in records {
        match record.kind.side() {
            Some(Side::Ask) => asks.push(*record),
            Some(Side::Bid) => bids.push(*record),
            None => {}
        }
    }

    (Series::new(Side::Ask, asks), Series::new(Side::Bid, bids))
}

/// 按時間升序的穩定排序，相同時間保持原有相對順序
pub fn sort_by_time(series: Series) -> Series {
    series.map_records(|mut records| {
        records.sort_by_key(|r| r.time);
        records
    })
}

/// 計算每個日曆日的平均值
///
/// 前置條件：輸入序列必須已按時間排序。輸出順序為各日期第一次出現的順序，
/// 只有在輸入已排序時才等於日曆順序。任何 NaN 都會使當日平均成為 NaN。
pub fn daily_averages(series: &Series) -> Vec<DailyAggregate> {
    let mut index: FxHashMap<NaiveDate, usize> = FxHashMap::default();
    let mut groups: Vec<(NaiveDate, f64, usize)> = Vec::new();

    for record in series {
        let day = day_of(&record.time);
        match index.get(&day) {
            Some(&i) => {
                let group = &mut groups[i];
                group.1 += record.value;
                group.2 += 1;
            }
            None => {
                index.insert(day, groups.len());
                groups.push((day, record.value, 1));
            }
        }
    }

    groups
        .into_iter()
        .map(|(day, sum, count)| DailyAggregate::new(day, sum / count as f64))
        .collect()
}

/// 計算投影欄位的範圍
///
/// 無法比較的值（例如 NaN）不參與計算。輸入為空或沒有可比較的值時返回 None。
pub fn compute_extent<T, F>(records: &[RawRecord], accessor: F) -> Option<Extent<T>>
where
    T: PartialOrd + Copy,
    F: Fn(&RawRecord) -> T,
{
    let mut extent: Option<Extent<T>> = None;

    for value in records.iter().map(accessor) {
        if value.partial_cmp(&value).is_none() {
            continue;
        }
        match extent.as_mut() {
            Some(e) => e.include(value),
            None => extent = Some(Extent::point(value)),
        }
    }

    extent
}

/// 計算同時存在買賣平均值的日期之價差
///
/// 以賣價日聚合的順序輸出。
pub fn daily_spread(asks_by_day: &[DailyAggregate], bids_by_day: &[DailyAggregate]) -> Vec<DailySpread> {
    let bids: FxHashMap<NaiveDate, f64> = bids_by_day
        .iter()
        .map(|agg| (agg.day, agg.mean_value))
        .collect();

    asks_by_day
        .iter()
        .filter_map(|ask| {
            bids.get(&ask.day)
                .map(|&bid_mean| DailySpread::new(ask.day, ask.mean_value, bid_mean))
        })
        .collect()
}
