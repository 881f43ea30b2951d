//! # Routing Calculation Engine
//!
//! 途程工時估算、工期彙總、時間單位換算與資源成本計算

pub mod calculator;
pub mod conversion;
pub mod cost;
pub mod cycle;
pub mod duration;

// Re-export 主要類型
pub use calculator::RoutingCalculator;
pub use conversion::UnitConverter;
pub use cost::CostCalculator;
pub use cycle::CycleEstimator;
pub use duration::DurationAggregator;

use routing_core::{CostCollector, RoutingNode, RoutingRepository};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 工作流程成本彙總結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowCost {
    /// 工作流程ID
    pub workflow_id: String,

    /// 各節點成本（依宣告順序）
    pub node_costs: Vec<NodeCost>,

    /// 成本合計
    pub total_cost: Decimal,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl WorkflowCost {
    /// 創建空的彙總結果
    pub fn empty(workflow_id: String) -> Self {
        Self {
            workflow_id,
            node_costs: Vec::new(),
            total_cost: Decimal::ZERO,
            calculation_time_ms: None,
        }
    }
}

/// 單節點成本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCost {
    pub node_id: String,
    pub node_name: String,
    pub cost: Decimal,
}

/// 查出成本歸集記錄所對應的途程節點（經由製令節點）
pub fn resolve_routing_node<R: RoutingRepository + ?Sized>(
    repo: &R,
    collector: &CostCollector,
) -> routing_core::Result<RoutingNode> {
    let order_node = repo.production_order_node(&collector.order_node_id)?;
    repo.routing_node(&order_node.node_id)
}
