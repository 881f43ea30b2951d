//! 週期工時估算

use routing_core::{CostCollector, CycleTimed, RoutingNode, RoutingRepository};
use rust_decimal::{Decimal, RoundingStrategy};

/// 週期工時估算器
pub struct CycleEstimator;

impl CycleEstimator {
    /// 估算每單位工時（工作流程工期單位）
    ///
    /// 每週期數量 ≤ 0 時節點工時已是每單位工時。
    pub fn estimate_working_time(node: &RoutingNode) -> Decimal {
        if node.units_per_cycle <= 0 {
            node.duration
        } else {
            node.duration / Decimal::from(node.units_per_cycle)
        }
    }

    /// 估算指定數量的工時 = 每週期工時 × 週期數
    pub fn estimate_working_time_for_qty<N: CycleTimed>(node: &N, qty: Decimal) -> Decimal {
        let cycles = Self::calculate_cycles(node.units_per_cycle(), qty);
        node.duration() * cycles
    }

    /// 依成本歸集記錄的實際移轉數量估算工時
    pub fn estimate_working_time_for_collector<R: RoutingRepository + ?Sized>(
        repo: &R,
        collector: &CostCollector,
    ) -> routing_core::Result<Decimal> {
        let order_node = repo.production_order_node(&collector.order_node_id)?;
        Ok(Self::estimate_working_time_for_qty(
            &order_node,
            collector.movement_qty,
        ))
    }

    /// 計算週期數
    ///
    /// 不足一週期仍以一整個週期計（無條件進位）。
    /// 每週期數量 ≤ 0 時不分批，週期數即為數量。
    pub fn calculate_cycles(units_per_cycle: i32, qty: Decimal) -> Decimal {
        if units_per_cycle <= 0 {
            return qty;
        }

        let cycles = (qty / Decimal::from(units_per_cycle))
            .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero);
        tracing::debug!(
            "週期數: 數量 {} / 每週期 {} = {}",
            qty,
            units_per_cycle,
            cycles
        );
        cycles
    }
}
