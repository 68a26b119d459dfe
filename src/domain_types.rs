pub mod record;
pub mod series;
pub mod aggregation;
pub mod extent;

pub use record::{RawRecord, RawRow, RecordType, Side};
pub use series::Series;
pub use aggregation::{DailyAggregate, DailySpread};
pub use extent::Extent;
