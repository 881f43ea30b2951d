//! 成本維度、成本記錄與實際報工模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 成本歸集記錄（製令節點的實際報工）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostCollector {
    /// 記錄ID
    pub collector_id: String,

    /// 對應製令節點
    pub order_node_id: String,

    /// 實際移轉數量
    pub movement_qty: Decimal,

    /// 實際整備時間（工作流程工期單位）
    pub setup_time_real: Decimal,

    /// 實際加工時間（工作流程工期單位）
    pub duration_real: Decimal,
}

impl CostCollector {
    /// 創建新的成本歸集記錄
    pub fn new(collector_id: String, order_node_id: String, movement_qty: Decimal) -> Self {
        Self {
            collector_id,
            order_node_id,
            movement_qty,
            setup_time_real: Decimal::ZERO,
            duration_real: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置實際整備與加工時間
    pub fn with_real_times(mut self, setup_time_real: Decimal, duration_real: Decimal) -> Self {
        self.setup_time_real = setup_time_real;
        self.duration_real = duration_real;
        self
    }
}

/// 實際時間覆寫值
///
/// 有值時以實際整備、加工時間取代節點的預估值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizedTimes {
    pub setup_time: Decimal,
    pub duration: Decimal,
}

impl From<&CostCollector> for RealizedTimes {
    fn from(collector: &CostCollector) -> Self {
        Self {
            setup_time: collector.setup_time_real,
            duration: collector.duration_real,
        }
    }
}

/// 成本維度（查詢費率的鍵）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDimension {
    pub client_id: String,
    pub org_id: String,

    /// 會計綱要（決定成本精度）
    pub acct_schema_id: String,

    pub product_id: Option<String>,
    pub cost_type_id: Option<String>,
    pub cost_element_id: Option<String>,
}

impl CostDimension {
    /// 創建新的成本維度
    pub fn new(client_id: String, org_id: String, acct_schema_id: String) -> Self {
        Self {
            client_id,
            org_id,
            acct_schema_id,
            product_id: None,
            cost_type_id: None,
            cost_element_id: None,
        }
    }

    /// 建構器模式：設置料號
    pub fn with_product_id(mut self, product_id: String) -> Self {
        self.product_id = Some(product_id);
        self
    }

    /// 建構器模式：設置成本類型
    pub fn with_cost_type_id(mut self, cost_type_id: String) -> Self {
        self.cost_type_id = Some(cost_type_id);
        self
    }

    /// 建構器模式：設置成本要素
    pub fn with_cost_element_id(mut self, cost_element_id: String) -> Self {
        self.cost_element_id = Some(cost_element_id);
        self
    }
}

impl fmt::Display for CostDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client={} org={} schema={} product={} cost_type={} cost_element={}",
            self.client_id,
            self.org_id,
            self.acct_schema_id,
            self.product_id.as_deref().unwrap_or("-"),
            self.cost_type_id.as_deref().unwrap_or("-"),
            self.cost_element_id.as_deref().unwrap_or("-"),
        )
    }
}

/// 成本記錄（現行成本單價）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRecord {
    pub client_id: String,
    pub org_id: String,
    pub acct_schema_id: String,
    pub product_id: String,
    pub cost_type_id: Option<String>,
    pub cost_element_id: Option<String>,

    /// 現行成本單價（每一資源計量單位）
    pub current_cost_price: Decimal,
}

impl CostRecord {
    /// 檢查記錄是否符合成本維度
    ///
    /// 維度未指定成本類型或成本要素時，該欄位不參與比對。
    pub fn matches(&self, dimension: &CostDimension) -> bool {
        let optional_matches = |filter: &Option<String>, value: &Option<String>| match filter {
            Some(expected) => value.as_ref() == Some(expected),
            None => true,
        };

        self.client_id == dimension.client_id
            && self.org_id == dimension.org_id
            && self.acct_schema_id == dimension.acct_schema_id
            && dimension.product_id.as_ref() == Some(&self.product_id)
            && optional_matches(&dimension.cost_type_id, &self.cost_type_id)
            && optional_matches(&dimension.cost_element_id, &self.cost_element_id)
    }
}
