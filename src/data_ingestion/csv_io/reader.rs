//! CSV 檔案讀取器

use super::error::{CsvError, CsvResult};
use crate::domain_types::RawRow;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// 必要欄位
pub const REQUIRED_COLUMNS: [&str; 3] = ["time", "value", "type"];

/// CSV 讀取器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvReaderConfig {
    /// 是否有標題行
    pub has_header: bool,
    /// 分隔符
    pub separator: u8,
}

impl Default for CsvReaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
        }
    }
}

/// CSV 檔案讀取器
///
/// 只負責把檔案轉成字串欄位的 [`RawRow`]，不做任何型別轉換。
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: CsvReaderConfig,
}

impl CsvReader {
    /// 創建新的 CSV 讀取器
    pub fn new(config: CsvReaderConfig) -> Self {
        Self { config }
    }

    /// 設定分隔符
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.config.separator = separator;
        self
    }

    /// 設定是否有標題行
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.config.has_header = has_header;
        self
    }

    pub fn config(&self) -> &CsvReaderConfig {
        &self.config
    }

    /// 從檔案路徑讀取 CSV
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> CsvResult<Vec<RawRow>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CsvError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("檔案不存在: {}", path.display()),
            )));
        }

        let file = std::fs::File::open(path)?;
        let rows = self.read_from(file)?;
        debug!("從 {} 讀取 {} 列", path.display(), rows.len());
        Ok(rows)
    }

    /// 以非同步方式讀取檔案後解析
    ///
    /// 整個檔案讀入記憶體後才開始解析，這是整個流程唯一的等待點。
    pub async fn load_file_async<P: AsRef<Path>>(&self, path: P) -> CsvResult<Vec<RawRow>> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            CsvError::IoError(std::io::Error::new(
                e.kind(),
                format!("無法讀取 {}: {}", path.display(), e),
            ))
        })?;
        let rows = self.read_bytes(&bytes)?;
        debug!("從 {} 非同步讀取 {} 列", path.display(), rows.len());
        Ok(rows)
    }

    /// 從字節數組讀取 CSV
    pub fn read_bytes(&self, data: &[u8]) -> CsvResult<Vec<RawRow>> {
        self.read_from(data)
    }

    /// 從字串讀取 CSV
    pub fn read_string(&self, data: &str) -> CsvResult<Vec<RawRow>> {
        self.read_bytes(data.as_bytes())
    }

    fn read_from<R: Read>(&self, source: R) -> CsvResult<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.config.has_header)
            .delimiter(self.config.separator)
            .from_reader(source);

        if self.config.has_header {
            let headers = reader.headers()?;
            for required in REQUIRED_COLUMNS {
                if !headers.iter().any(|h| h == required) {
                    return Err(CsvError::MissingColumn(required.to_string()));
                }
            }
        }

        let rows = reader
            .deserialize::<RawRow>()
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_reader_config_default() {
        let config = CsvReaderConfig::default();
        assert!(config.has_header);
        assert_eq!(config.separator, b',');
    }

    #[test]
    fn test_csv_reader_builder() {
        let reader = CsvReader::default().with_separator(b';').with_header(false);
        assert_eq!(reader.config().separator, b';');
        assert!(!reader.config().has_header);
    }

    #[test]
    fn test_read_csv_string() {
        let csv_data = "time,value,type
2020-01-01 00:00:00,10,a
2020-01-01 12:00:00,20,a
2020-01-02 00:00:00,5,b";

        let rows = CsvReader::default().read_string(csv_data).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], RawRow::new("2020-01-01 00:00:00", "10", "a"));
        assert_eq!(rows[2].kind, "b");
    }

    #[test]
    fn test_extra_columns_ignored_and_order_free() {
        let csv_data = "type,source,value,time
a,feed1,10.5,2020-01-01 00:00:00";

        let rows = CsvReader::default().read_string(csv_data).unwrap();
        assert_eq!(rows, vec![RawRow::new("2020-01-01 00:00:00", "10.5", "a")]);
    }

    #[test]
    fn test_read_csv_with_custom_separator() {
        let csv_data = "time;value;type
2020-01-01 00:00:00;1,5;b";

        let rows = CsvReader::default().with_separator(b';').read_string(csv_data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, "1,5");
    }

    #[test]
    fn test_read_csv_without_header() {
        let csv_data = "2020-01-01 00:00:00,10,a
2020-01-02 00:00:00,11,b";

        let rows = CsvReader::default().with_header(false).read_string(csv_data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], RawRow::new("2020-01-02 00:00:00", "11", "b"));
    }

    #[test]
    fn test_missing_column() {
        let csv_data = "time,value
2020-01-01 00:00:00,10";

        let result = CsvReader::default().read_string(csv_data);
        match result {
            Err(CsvError::MissingColumn(col)) => assert_eq!(col, "type"),
            other => panic!("Expected MissingColumn error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        let rows = CsvReader::default().read_string("time,value,type\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let result = CsvReader::default().read_file("/nonexistent/spread_chart/data.csv");
        assert!(matches!(result, Err(CsvError::IoError(_))));
    }
}
