//! 時間單位與計量單位模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::RoutingError;

/// 時間單位
///
/// 工作流程的工期單位與計量單位的時間分類共用同一個列舉，
/// 換算秒數只在 [`TimeUnit::base_seconds`] 維護一份。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// 秒
    Second,
    /// 分
    Minute,
    /// 時
    Hour,
    /// 日
    Day,
    /// 工作日
    WorkDay,
    /// 週
    Week,
    /// 月
    Month,
    /// 工作月
    WorkMonth,
    /// 年
    Year,
}

impl TimeUnit {
    /// 所有時間單位
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::WorkDay,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::WorkMonth,
        TimeUnit::Year,
    ];

    /// 一個單位等於多少秒
    ///
    /// 月以 30 天、年以 365 天計，不依日曆調整。
    /// 既有的工期與成本數據都以此為準，不可修正成日曆天數。
    pub fn base_seconds(self) -> i64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Hour => 60 * 60,
            TimeUnit::Day | TimeUnit::WorkDay => 60 * 60 * 24,
            TimeUnit::Week => 60 * 60 * 24 * 7,
            TimeUnit::Month | TimeUnit::WorkMonth => 60 * 60 * 24 * 30,
            TimeUnit::Year => 60 * 60 * 24 * 365,
        }
    }

    /// 序列化名稱
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::WorkDay => "workday",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::WorkMonth => "workmonth",
            TimeUnit::Year => "year",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == name)
            .ok_or_else(|| RoutingError::UnknownTimeUnit(s.to_string()))
    }
}

/// 計量單位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    /// 計量單位ID
    pub uom_id: String,

    /// 名稱
    pub name: String,

    /// 時間分類（None 表示非時間單位，例如件、公斤）
    pub time_unit: Option<TimeUnit>,

    /// 標準小數位數
    pub std_precision: u32,
}

impl UnitOfMeasure {
    /// 創建非時間計量單位
    pub fn new(uom_id: String, name: String, std_precision: u32) -> Self {
        Self {
            uom_id,
            name,
            time_unit: None,
            std_precision,
        }
    }

    /// 創建時間計量單位
    pub fn time(uom_id: String, time_unit: TimeUnit, std_precision: u32) -> Self {
        Self {
            name: time_unit.to_string(),
            uom_id,
            time_unit: Some(time_unit),
            std_precision,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 檢查是否為時間單位
    pub fn is_time(&self) -> bool {
        self.time_unit.is_some()
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uom_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeUnit::Second, 1)]
    #[case(TimeUnit::Minute, 60)]
    #[case(TimeUnit::Hour, 3_600)]
    #[case(TimeUnit::Day, 86_400)]
    #[case(TimeUnit::WorkDay, 86_400)]
    #[case(TimeUnit::Week, 604_800)]
    #[case(TimeUnit::Month, 2_592_000)]
    #[case(TimeUnit::WorkMonth, 2_592_000)]
    #[case(TimeUnit::Year, 31_536_000)]
    fn test_base_seconds(#[case] unit: TimeUnit, #[case] expected: i64) {
        assert_eq!(unit.base_seconds(), expected);
    }

    #[test]
    fn test_parse_time_unit() {
        assert_eq!("hour".parse::<TimeUnit>().unwrap(), TimeUnit::Hour);
        assert_eq!(" WorkDay ".parse::<TimeUnit>().unwrap(), TimeUnit::WorkDay);

        let err = "fortnight".parse::<TimeUnit>().unwrap_err();
        assert!(matches!(err, RoutingError::UnknownTimeUnit(ref s) if s == "fortnight"));
    }

    #[test]
    fn test_display_round_trip() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_is_time() {
        let hour = UnitOfMeasure::time("UOM-HR".to_string(), TimeUnit::Hour, 2);
        let each = UnitOfMeasure::new("UOM-EA".to_string(), "Each".to_string(), 0);

        assert!(hour.is_time());
        assert_eq!(hour.name, "hour");
        assert!(!each.is_time());

        let labor = hour.with_name("Labor Hour".to_string());
        assert!(labor.is_time());
        assert_eq!(labor.to_string(), "Labor Hour (UOM-HR)");
    }
}
