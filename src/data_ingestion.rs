pub mod csv_io;
pub mod report;

pub use csv_io::{CsvError, CsvReader, CsvReaderConfig, CsvResult};
pub use report::IngestionReport;
