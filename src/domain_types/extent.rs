use serde::{Deserialize, Serialize};

/// 閉區間 [min, max]，用於設定顯示座標軸的範圍
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Extent<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// 單點區間
    pub fn point(value: T) -> Self {
        Self { min: value, max: value }
    }

    /// 擴展區間以包含指定值
    pub fn include(&mut self, value: T) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}
