//! 資源成本計算

use routing_core::{
    CostCollector, CostDimension, EstimationConfig, NonTimeRatedPolicy, RealizedTimes,
    RoutingError, RoutingNode, RoutingRepository,
};
use rust_decimal::Decimal;

use crate::conversion::UnitConverter;
use crate::duration::DurationAggregator;

/// 資源成本計算器
pub struct CostCalculator;

impl CostCalculator {
    /// 資源費率（以資源計量單位計價）
    ///
    /// 節點沒有資源時費率為 0。
    pub fn resource_rate<R: RoutingRepository + ?Sized>(
        repo: &R,
        node: &RoutingNode,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        let Some(resource_id) = node.resource_id.as_deref() else {
            return Ok(Decimal::ZERO);
        };

        let resource = repo.resource(resource_id)?;
        let product_id = resource
            .product_id
            .clone()
            .ok_or_else(|| RoutingError::NotFound {
                entity: "resource product",
                id: resource.resource_id.clone(),
            })?;

        let dimension = dimension.clone().with_product_id(product_id);
        repo.cost_rate(&dimension)
    }

    /// 成本基數：節點工期換算成資源計量單位
    ///
    /// 資源計量單位必須是時間單位。
    pub fn base_value<R: RoutingRepository + ?Sized>(
        repo: &R,
        node: &RoutingNode,
        realized: Option<&RealizedTimes>,
    ) -> routing_core::Result<Decimal> {
        let resource_id = node
            .resource_id
            .as_deref()
            .ok_or_else(|| RoutingError::NotFound {
                entity: "node resource",
                id: node.node_id.clone(),
            })?;
        let resource = repo.resource(resource_id)?;
        let uom = repo.uom(&resource.uom_id)?;

        if !UnitConverter::is_time(&uom) {
            return Err(RoutingError::UnsupportedUnit {
                uom: uom.to_string(),
            });
        }

        let duration = DurationAggregator::calculate_duration(repo, node, realized)?;
        Self::convert_duration_to_resource_uom(repo, duration, node)
    }

    /// 將工作流程工期單位的工期換算成節點資源的計量單位
    pub fn convert_duration_to_resource_uom<R: RoutingRepository + ?Sized>(
        repo: &R,
        duration: Decimal,
        node: &RoutingNode,
    ) -> routing_core::Result<Decimal> {
        let resource_id = node
            .resource_id
            .as_deref()
            .ok_or_else(|| RoutingError::NotFound {
                entity: "node resource",
                id: node.node_id.clone(),
            })?;
        let resource = repo.resource(resource_id)?;
        let workflow = repo.workflow(&node.workflow_id)?;
        let resource_uom = repo.uom(&resource.uom_id)?;

        UnitConverter::convert_duration(duration, workflow.duration_unit, &resource_uom)
    }

    /// 計算節點成本 = 成本基數 × 費率，四捨五入到會計綱要的成本精度
    ///
    /// 費率為 0 時直接回傳 0，不計算成本基數。
    pub fn calculate_cost<R: RoutingRepository + ?Sized>(
        repo: &R,
        config: &EstimationConfig,
        node: &RoutingNode,
        realized: Option<&RealizedTimes>,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        let rate = Self::resource_rate(repo, node, dimension)?;
        if rate.is_zero() {
            return Ok(Decimal::ZERO);
        }

        let base = match Self::base_value(repo, node, realized) {
            Ok(base) => base,
            Err(RoutingError::UnsupportedUnit { uom })
                if config.non_time_rated_policy == NonTimeRatedPolicy::Zero =>
            {
                tracing::warn!(
                    "節點 {} 的資源計量單位 {} 不是時間單位，成本視為 0（費率 {}）",
                    node.name,
                    uom,
                    rate
                );
                return Ok(Decimal::ZERO);
            }
            Err(e) => return Err(e),
        };

        let cost = Self::round_cost(repo, base * rate, &dimension.acct_schema_id)?;

        tracing::info!("節點: {}", node.name);
        tracing::info!("成本維度: {}", dimension);
        tracing::info!("成本基數: {} 費率: {} => 成本: {}", base, rate, cost);

        Ok(cost)
    }

    /// 計算途程節點的預估成本
    pub fn calculate_cost_for_node<R: RoutingRepository + ?Sized>(
        repo: &R,
        config: &EstimationConfig,
        node: &RoutingNode,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        Self::calculate_cost(repo, config, node, None, dimension)
    }

    /// 計算成本歸集記錄的實際成本
    pub fn calculate_cost_for_collector<R: RoutingRepository + ?Sized>(
        repo: &R,
        config: &EstimationConfig,
        collector: &CostCollector,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        let node = crate::resolve_routing_node(repo, collector)?;
        Self::calculate_cost(
            repo,
            config,
            &node,
            Some(&RealizedTimes::from(collector)),
            dimension,
        )
    }

    /// 四捨五入到會計綱要的成本精度
    fn round_cost<R: RoutingRepository + ?Sized>(
        repo: &R,
        cost: Decimal,
        acct_schema_id: &str,
    ) -> routing_core::Result<Decimal> {
        let precision = repo.costing_precision(acct_schema_id)?;
        Ok(UnitConverter::round_to_precision(cost, precision))
    }
}
