//! 資源與資源類型模型

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// 資源（工作中心、機台、人力）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// 資源ID
    pub resource_id: String,

    /// 名稱
    pub name: String,

    /// 計量單位（費率以此單位計價）
    pub uom_id: String,

    /// 資源類型
    pub resource_type_id: String,

    /// 對應的資源料號（成本記錄以料號為維度）
    pub product_id: Option<String>,
}

impl Resource {
    /// 創建新的資源
    pub fn new(resource_id: String, uom_id: String, resource_type_id: String) -> Self {
        Self {
            name: resource_id.clone(),
            resource_id,
            uom_id,
            resource_type_id,
            product_id: None,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置資源料號
    pub fn with_product_id(mut self, product_id: String) -> Self {
        self.product_id = Some(product_id);
        self
    }
}

/// 每日可用時段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// 資源類型（產能設定）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceType {
    /// 資源類型ID
    pub resource_type_id: String,

    /// 工作日（週一到週日，true表示工作日）
    /// 索引 0 = 週一, 1 = 週二, ..., 6 = 週日
    pub working_days: [bool; 7],

    /// 每日可用時段（None 表示全天 24 小時）
    pub time_slot: Option<TimeSlot>,
}

impl ResourceType {
    /// 創建新的資源類型（預設週一到週五，全天可用）
    pub fn new(resource_type_id: String) -> Self {
        Self {
            resource_type_id,
            working_days: [true, true, true, true, true, false, false],
            time_slot: None,
        }
    }

    /// 創建 24/7 資源類型
    pub fn new_24_7(resource_type_id: String) -> Self {
        Self {
            resource_type_id,
            working_days: [true; 7],
            time_slot: None,
        }
    }

    /// 建構器模式：設置工作日
    pub fn with_working_days(mut self, working_days: [bool; 7]) -> Self {
        self.working_days = working_days;
        self
    }

    /// 建構器模式：設置每日可用時段
    pub fn with_time_slot(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.time_slot = Some(TimeSlot { start, end });
        self
    }

    /// 每週可用天數
    pub fn available_days_per_week(&self) -> u32 {
        self.working_days.iter().filter(|&&working| working).count() as u32
    }

    /// 每日可用秒數
    ///
    /// 未設定時段時為全天；結束早於開始時結果為負，由呼叫端檢查。
    pub fn time_slot_seconds(&self) -> i64 {
        match self.time_slot {
            None => SECONDS_PER_DAY,
            Some(slot) => (slot.end - slot.start).num_seconds(),
        }
    }

    /// 每日可用時數
    pub fn time_slot_hours(&self) -> Decimal {
        Decimal::from(self.time_slot_seconds()) / Decimal::from(SECONDS_PER_HOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resource_type() {
        let resource_type = ResourceType::new("RT-DEFAULT".to_string());

        assert_eq!(resource_type.available_days_per_week(), 5);
        assert_eq!(resource_type.time_slot_hours(), Decimal::from(24));
    }

    #[test]
    fn test_24_7_resource_type() {
        let resource_type = ResourceType::new_24_7("RT-24/7".to_string());
        assert_eq!(resource_type.available_days_per_week(), 7);
    }

    #[test]
    fn test_custom_working_days() {
        // 週一到週六上班（週日休息）
        let mut working_days = [true; 7];
        working_days[6] = false;

        let resource_type = ResourceType::new("RT-6DAY".to_string()).with_working_days(working_days);
        assert_eq!(resource_type.available_days_per_week(), 6);

        let idle = ResourceType::new("RT-IDLE".to_string()).with_working_days([false; 7]);
        assert_eq!(idle.available_days_per_week(), 0);
    }

    #[test]
    fn test_time_slot_hours() {
        let resource_type = ResourceType::new("RT-SHIFT".to_string()).with_time_slot(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(16, 30, 0).unwrap(),
        );

        assert_eq!(resource_type.time_slot_hours(), Decimal::new(85, 1));
        assert_eq!(resource_type.time_slot_seconds(), 30_600);
    }

    #[test]
    fn test_time_slot_seconds_is_exact() {
        // 7 小時 20 分：時數無法以有限小數表示，秒數仍為整數
        let resource_type = ResourceType::new("RT-SHIFT".to_string()).with_time_slot(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(15, 20, 0).unwrap(),
        );
        assert_eq!(resource_type.time_slot_seconds(), 26_400);

        let all_day = ResourceType::new_24_7("RT-24/7".to_string());
        assert_eq!(all_day.time_slot_seconds(), 86_400);
    }

    #[test]
    fn test_inverted_time_slot_is_negative() {
        let resource_type = ResourceType::new("RT-BAD".to_string()).with_time_slot(
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        );

        assert!(resource_type.time_slot_hours() < Decimal::ZERO);
    }

    #[test]
    fn test_resource_builder() {
        let resource = Resource::new("RES-CUT".to_string(), "UOM-HR".to_string(), "RT-1".to_string())
            .with_name("Cutting Cell".to_string())
            .with_product_id("P-RES-CUT".to_string());

        assert_eq!(resource.name, "Cutting Cell");
        assert_eq!(resource.product_id.as_deref(), Some("P-RES-CUT"));
    }
}
