//! 報價序列處理管線
//!
//! 載入完成後一次性執行：解析 → 拆分 → 排序 → 日聚合 → 計算範圍，
//! 產生不可變的 [`ChartData`]。

pub mod aggregator;
pub mod chart_data;
pub mod error;
pub mod parser;

pub use aggregator::{compute_extent, daily_averages, daily_spread, partition, sort_by_time};
pub use chart_data::{ChartData, ChartPoint, DisplayMode};
pub use error::{PipelineError, PipelineResult};
pub use parser::{coerce_number, parse, parse_row, ParseOptions, ParsedRecords, TimestampPolicy};

use std::path::Path;
use tracing::{debug, info, warn};

use crate::data_ingestion::CsvReader;
use crate::domain_types::RawRow;

/// 報價序列聚合器
#[derive(Debug, Clone, Default)]
pub struct SeriesAggregator {
    options: ParseOptions,
}

impl SeriesAggregator {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// 對已載入的原始列執行整個管線
    pub fn run(&self, rows: &[RawRow]) -> PipelineResult<ChartData> {
        let ParsedRecords { records, report } = parse(rows, &self.options)?;
        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let (asks, bids) = partition(&records);
        let asks = sort_by_time(asks);
        let bids = sort_by_time(bids);
        debug!("拆分完成: asks={}, bids={}", asks.len(), bids.len());

        let asks_by_day = daily_averages(&asks);
        let bids_by_day = daily_averages(&bids);
        let spread = daily_spread(&asks_by_day, &bids_by_day);

        // 範圍以全部記錄計算，包含未分類的記錄
        let time_extent = compute_extent(&records, |r| r.time).ok_or(PipelineError::EmptyDataset)?;
        // 全部數值都是 NaN 時沒有數值範圍，但不中止
        let value_extent = compute_extent(&records, |r| r.value);

        report.log_summary();
        match &value_extent {
            Some(extent) => info!(
                ask_days = asks_by_day.len(),
                bid_days = bids_by_day.len(),
                "管線完成，時間範圍 {} ~ {}，數值範圍 {} ~ {}",
                time_extent.min,
                time_extent.max,
                extent.min,
                extent.max
            ),
            None => warn!(
                ask_days = asks_by_day.len(),
                bid_days = bids_by_day.len(),
                "管線完成，時間範圍 {} ~ {}，沒有任何有效數值",
                time_extent.min,
                time_extent.max
            ),
        }

        Ok(ChartData {
            asks,
            bids,
            asks_by_day,
            bids_by_day,
            time_extent,
            value_extent,
            daily_spread: spread,
            report,
        })
    }

    /// 讀取 CSV 檔案後執行管線
    pub fn run_file<P: AsRef<Path>>(&self, reader: &CsvReader, path: P) -> PipelineResult<ChartData> {
        let rows = reader.read_file(path)?;
        self.run(&rows)
    }

    /// 非同步讀取 CSV 檔案後執行管線
    ///
    /// 載入失敗時管線不會執行。
    pub async fn run_file_async<P: AsRef<Path>>(
        &self,
        reader: &CsvReader,
        path: P,
    ) -> PipelineResult<ChartData> {
        let rows = reader.load_file_async(path).await?;
        self.run(&rows)
    }
}
