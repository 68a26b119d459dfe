use anyhow::{anyhow, Context, Result};
use clap::Parser;
use spread_chart::config::{self, ApplicationConfig, LogConfig};
use spread_chart::data_ingestion::CsvReader;
use spread_chart::pipeline::TimestampPolicy;
use spread_chart::SeriesAggregator;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// 載入報價 CSV，輸出繪圖所需的序列、日平均與座標範圍（JSON）
#[derive(Parser, Debug)]
#[command(name = "spread_chart", version, about)]
struct Cli {
    /// 配置文件路徑，未指定時依 SPREAD_CHART_ENV 從 CONFIG_DIR 載入
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV 檔案路徑，覆寫 data.csv_path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// 輸出檔案路徑，未指定時寫到標準輸出
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 以縮排格式輸出 JSON
    #[arg(long)]
    pretty: bool,

    /// 略過時間無法解析的列，而不是中止
    #[arg(long)]
    skip_invalid_timestamps: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化配置
    let mut app_config = match &cli.config {
        Some(path) => ApplicationConfig::load_file(path),
        None => ApplicationConfig::load_from_env(),
    }
    .map_err(|e| anyhow!("無法加載應用程序配置: {}", e))?;

    if let Some(csv) = &cli.csv {
        app_config.data.csv_path = csv.display().to_string();
    }
    if cli.skip_invalid_timestamps {
        app_config.pipeline.on_invalid_timestamp = TimestampPolicy::Skip;
    }
    let app_config = config::init_config(app_config);

    // 初始化日誌系統
    let _guard = init_logging(&app_config.log)?;

    let reader = CsvReader::new(app_config.data.reader_config());
    let aggregator = SeriesAggregator::new(app_config.pipeline.parse_options());

    info!("載入資料: {}", app_config.data.csv_path);
    let chart_data = match aggregator
        .run_file_async(&reader, &app_config.data.csv_path)
        .await
    {
        Ok(data) => data,
        Err(err) => {
            error!("管線執行失敗: {}", err);
            return Err(err.into());
        }
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&chart_data)?
    } else {
        serde_json::to_string(&chart_data)?
    };

    match &cli.output {
        Some(path) => {
            tokio::fs::write(path, json)
                .await
                .with_context(|| format!("無法寫入 {}", path.display()))?;
            info!("輸出已寫入 {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

// 初始化日誌系統
fn init_logging(log_config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.to_lowercase()));

    let (writer, guard) = match &log_config.file {
        Some(file) => {
            let path = Path::new(file);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("無效的日誌檔案路徑: {}", file))?;
            let appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(guard.is_none())
        .with_writer(writer);

    let result = if log_config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| anyhow!("設置日誌系統失敗: {}", e))?;

    info!("日誌系統初始化完成");
    Ok(guard)
}
