// 模組定義
pub mod config;
pub mod domain_types;
pub mod data_ingestion;
pub mod pipeline;
pub mod utils;

pub use pipeline::{ChartData, PipelineError, PipelineResult, SeriesAggregator};
