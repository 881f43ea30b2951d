//! 工期彙總

use routing_core::{
    CostCollector, EstimationConfig, RealizedTimes, Resource, RoutingError, RoutingNode,
    RoutingRepository, Workflow,
};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::conversion::UnitConverter;
use crate::cycle::CycleEstimator;

const SECONDS_PER_HOUR: i64 = 60 * 60;
const DAYS_PER_WEEK: u32 = 7;

/// 工期彙總計算器
pub struct DurationAggregator;

impl DurationAggregator {
    /// 計算單一節點每單位工期（工作流程工期單位）
    ///
    /// 工期 = 整備時間 / 工作流程批量 + 加工時間。
    /// 整備時間按工作流程宣告的批量分攤，與需求數量無關。
    /// 有實際報工時以實際整備、加工時間取代預估值。
    pub fn calculate_duration<R: RoutingRepository + ?Sized>(
        repo: &R,
        node: &RoutingNode,
        realized: Option<&RealizedTimes>,
    ) -> routing_core::Result<Decimal> {
        let workflow = repo.workflow(&node.workflow_id)?;
        let batch_size = workflow.qty_batch_size;
        if batch_size <= Decimal::ZERO {
            return Err(RoutingError::InvalidDivisor {
                divisor: "workflow batch size",
                value: batch_size.to_string(),
            });
        }

        let (setup_time, duration) = match realized {
            Some(realized) => (realized.setup_time, realized.duration),
            None => (node.setup_time, CycleEstimator::estimate_working_time(node)),
        };

        let total = setup_time / batch_size + duration;
        tracing::debug!(
            "節點 {} 工期: 整備 {} / 批量 {} + 加工 {} = {}",
            node.name,
            setup_time,
            batch_size,
            duration,
            total
        );
        Ok(total)
    }

    /// 計算途程節點的預估工期
    pub fn calculate_duration_for_node<R: RoutingRepository + ?Sized>(
        repo: &R,
        node: &RoutingNode,
    ) -> routing_core::Result<Decimal> {
        Self::calculate_duration(repo, node, None)
    }

    /// 計算成本歸集記錄的實際工期
    pub fn calculate_duration_for_collector<R: RoutingRepository + ?Sized>(
        repo: &R,
        collector: &CostCollector,
    ) -> routing_core::Result<Decimal> {
        let node = crate::resolve_routing_node(repo, collector)?;
        Self::calculate_duration(repo, &node, Some(&RealizedTimes::from(collector)))
    }

    /// 計算整個工作流程所需的資源時段數（通常為天數）
    ///
    /// 沒有資源時回傳 0。結果無條件進位到整數時段。
    pub fn calculate_workflow_duration<R: RoutingRepository + ?Sized>(
        repo: &R,
        config: &EstimationConfig,
        workflow: &Workflow,
        plant: Option<&Resource>,
        qty: Decimal,
    ) -> routing_core::Result<Decimal> {
        let Some(plant) = plant else {
            return Ok(Decimal::ZERO);
        };

        let resource_type = repo.resource_type(&plant.resource_type_id)?;

        let slot_seconds = resource_type.time_slot_seconds();
        if slot_seconds <= 0 {
            return Err(RoutingError::InvalidDivisor {
                divisor: "time slot hours",
                value: resource_type.time_slot_hours().to_string(),
            });
        }

        let available_days = resource_type.available_days_per_week();
        if available_days == 0 {
            return Err(RoutingError::InvalidDivisor {
                divisor: "available days per week",
                value: available_days.to_string(),
            });
        }

        let required_seconds = Self::required_seconds(repo, workflow, qty)?;

        // 把 7 天的需求投影到資源實際的工作天數
        let weekly_factor = (Decimal::from(DAYS_PER_WEEK) / Decimal::from(available_days))
            .round_dp_with_strategy(config.weekly_factor_scale, RoundingStrategy::AwayFromZero);

        // 以秒數相除：剛好 N 個時段的需求得到 N
        let slots = checked_mul(required_seconds, weekly_factor, "weekly factor")?
            .checked_div(Decimal::from(slot_seconds))
            .ok_or_else(|| overflow("time slot"))?
            .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero);

        tracing::debug!(
            "工作流程 {} 於資源 {}: 需求 {} 秒, 週係數 {}, 每時段 {} 秒 → {} 個時段",
            workflow.workflow_id,
            plant.resource_id,
            required_seconds,
            weekly_factor,
            slot_seconds,
            slots
        );

        Ok(slots)
    }

    /// 計算工作流程生產指定數量所需的總時數
    ///
    /// 每個節點累加與數量無關的排隊、整備、等待、搬運時間，
    /// 再加上每單位工時 × 重疊數量（節點重疊數量 > 0 時以其為上限）。
    pub fn required_hours<R: RoutingRepository + ?Sized>(
        repo: &R,
        workflow: &Workflow,
        qty: Decimal,
    ) -> routing_core::Result<Decimal> {
        let seconds = Self::required_seconds(repo, workflow, qty)?;
        Ok(seconds / Decimal::from(SECONDS_PER_HOUR))
    }

    /// 計算工作流程生產指定數量所需的總秒數
    pub fn required_seconds<R: RoutingRepository + ?Sized>(
        repo: &R,
        workflow: &Workflow,
        qty: Decimal,
    ) -> routing_core::Result<Decimal> {
        let duration_base_sec = UnitConverter::duration_base_sec(workflow.duration_unit);

        let mut duration_total = Decimal::ZERO;
        for node_id in &workflow.node_ids {
            let node = repo.routing_node(node_id)?;

            let overlap_units = Self::overlap_units(&node, qty);
            let node_total = checked_mul(node.duration, overlap_units, "node duration")?
                .checked_add(node.fixed_overhead())
                .ok_or_else(|| overflow("node duration"))?;

            duration_total = duration_total
                .checked_add(node_total)
                .ok_or_else(|| overflow("workflow duration"))?;
        }

        checked_mul(duration_total, Decimal::from(duration_base_sec), "workflow duration")
    }

    /// 計入節點串行工期的數量
    fn overlap_units(node: &RoutingNode, qty: Decimal) -> Decimal {
        let overlap = Decimal::from(node.overlap_units);
        if node.overlap_units > 0 && overlap < qty {
            overlap
        } else {
            qty
        }
    }
}

fn checked_mul(lhs: Decimal, rhs: Decimal, what: &str) -> routing_core::Result<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(what))
}

fn overflow(what: &str) -> RoutingError {
    RoutingError::CalculationError(format!("{what} 數值溢位"))
}
