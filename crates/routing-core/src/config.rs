//! 估算參數配置

use serde::{Deserialize, Serialize};

/// 工期與成本估算參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// 週係數小數位數（7 / 每週可用天數，向上取整到此位數）
    pub weekly_factor_scale: u32,

    /// 非時間單位資源遇到非零費率時的處理方式
    pub non_time_rated_policy: NonTimeRatedPolicy,
}

impl EstimationConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            weekly_factor_scale: 8,
            non_time_rated_policy: NonTimeRatedPolicy::Fail,
        }
    }

    /// 建構器模式：設置週係數小數位數
    pub fn with_weekly_factor_scale(mut self, scale: u32) -> Self {
        self.weekly_factor_scale = scale;
        self
    }

    /// 建構器模式：設置非時間單位處理方式
    ///
    /// # 範例
    /// ```
    /// # use routing_core::{EstimationConfig, NonTimeRatedPolicy};
    /// let config = EstimationConfig::new()
    ///     .with_non_time_rated_policy(NonTimeRatedPolicy::Zero); // 視為無法計算成本
    /// ```
    pub fn with_non_time_rated_policy(mut self, policy: NonTimeRatedPolicy) -> Self {
        self.non_time_rated_policy = policy;
        self
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// 非時間單位資源的費率處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonTimeRatedPolicy {
    /// 回報 UnsupportedUnit 錯誤（預設）
    Fail,
    /// 成本視為 0，記錄警告
    Zero,
}
