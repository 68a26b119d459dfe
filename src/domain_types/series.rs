use serde::{Deserialize, Serialize};

use crate::domain_types::record::{RawRecord, Side};

/// 單一方向的報價序列
///
/// 由管線建構，所有記錄都屬於同一個 [`Side`]。建構完成後不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    side: Side,
    records: Vec<RawRecord>,
}

impl Series {
    /// 創建序列，`records` 必須全部屬於 `side`
    pub(crate) fn new(side: Side, records: Vec<RawRecord>) -> Self {
        debug_assert!(records.iter().all(|r| r.kind.side() == Some(side)));
        Self { side, records }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawRecord> {
        self.records.iter()
    }

    /// 所有數值
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// 是否已按時間非遞減排列
    pub fn is_sorted_by_time(&self) -> bool {
        self.records.windows(2).all(|w| w[0].time <= w[1].time)
    }

    pub fn into_records(self) -> Vec<RawRecord> {
        self.records
    }

    pub(crate) fn map_records<F>(self, f: F) -> Self
    where
        F: FnOnce(Vec<RawRecord>) -> Vec<RawRecord>,
    {
        Self {
            side: self.side,
            records: f(self.records),
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a RawRecord;
    type IntoIter = std::slice::Iter<'a, RawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
