//! 途程工期與成本計算器

use rayon::prelude::*;
use routing_core::{CostCollector, CostDimension, EstimationConfig, RoutingRepository};
use rust_decimal::Decimal;

use crate::cost::CostCalculator;
use crate::cycle::CycleEstimator;
use crate::duration::DurationAggregator;
use crate::{NodeCost, WorkflowCost};

/// 途程計算器
///
/// 綁定一個主檔查詢介面與估算參數，依ID讀取主檔後委派給各估算器。
/// 本身不保留任何計算狀態，可同時被多個執行緒使用。
pub struct RoutingCalculator<'a, R: RoutingRepository + ?Sized> {
    /// 主檔查詢
    repo: &'a R,

    /// 估算參數
    config: EstimationConfig,
}

impl<'a, R: RoutingRepository + ?Sized> RoutingCalculator<'a, R> {
    /// 創建新的途程計算器
    pub fn new(repo: &'a R, config: EstimationConfig) -> Self {
        Self { repo, config }
    }

    /// 估算節點每單位工時
    pub fn estimate_working_time(&self, node_id: &str) -> routing_core::Result<Decimal> {
        let node = self.repo.routing_node(node_id)?;
        Ok(CycleEstimator::estimate_working_time(&node))
    }

    /// 依實際移轉數量估算工時
    pub fn estimate_working_time_for_collector(
        &self,
        collector: &CostCollector,
    ) -> routing_core::Result<Decimal> {
        CycleEstimator::estimate_working_time_for_collector(self.repo, collector)
    }

    /// 計算節點預估工期
    pub fn calculate_node_duration(&self, node_id: &str) -> routing_core::Result<Decimal> {
        let node = self.repo.routing_node(node_id)?;
        DurationAggregator::calculate_duration_for_node(self.repo, &node)
    }

    /// 計算成本歸集記錄的實際工期
    pub fn calculate_collector_duration(
        &self,
        collector: &CostCollector,
    ) -> routing_core::Result<Decimal> {
        DurationAggregator::calculate_duration_for_collector(self.repo, collector)
    }

    /// 計算工作流程在指定資源上所需的時段數
    pub fn calculate_workflow_duration(
        &self,
        workflow_id: &str,
        plant_id: Option<&str>,
        qty: Decimal,
    ) -> routing_core::Result<Decimal> {
        let workflow = self.repo.workflow(workflow_id)?;
        let plant = plant_id.map(|id| self.repo.resource(id)).transpose()?;

        DurationAggregator::calculate_workflow_duration(
            self.repo,
            &self.config,
            &workflow,
            plant.as_ref(),
            qty,
        )
    }

    /// 計算節點預估成本
    pub fn calculate_node_cost(
        &self,
        node_id: &str,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        let node = self.repo.routing_node(node_id)?;
        CostCalculator::calculate_cost_for_node(self.repo, &self.config, &node, dimension)
    }

    /// 計算成本歸集記錄的實際成本
    pub fn calculate_collector_cost(
        &self,
        collector: &CostCollector,
        dimension: &CostDimension,
    ) -> routing_core::Result<Decimal> {
        CostCalculator::calculate_cost_for_collector(self.repo, &self.config, collector, dimension)
    }

    /// 彙總整個工作流程的預估成本
    ///
    /// 各節點平行計算，結果依工作流程宣告的節點順序排列。
    /// 任一節點失敗即回傳該錯誤。
    pub fn calculate_workflow_cost(
        &self,
        workflow_id: &str,
        dimension: &CostDimension,
    ) -> routing_core::Result<WorkflowCost> {
        let start_time = std::time::Instant::now();
        let workflow = self.repo.workflow(workflow_id)?;

        tracing::info!(
            "開始工作流程成本彙總：{}，節點 {} 個",
            workflow.workflow_id,
            workflow.node_ids.len()
        );

        let node_costs = workflow
            .node_ids
            .par_iter()
            .map(|node_id| -> routing_core::Result<NodeCost> {
                let node = self.repo.routing_node(node_id)?;
                let cost = CostCalculator::calculate_cost_for_node(
                    self.repo,
                    &self.config,
                    &node,
                    dimension,
                )?;
                Ok(NodeCost {
                    node_id: node.node_id,
                    node_name: node.name,
                    cost,
                })
            })
            .collect::<routing_core::Result<Vec<_>>>()?;

        let mut result = WorkflowCost::empty(workflow.workflow_id);
        result.total_cost = node_costs.iter().map(|c| c.cost).sum();
        result.node_costs = node_costs;
        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "工作流程 {} 成本彙總完成：{}，耗時 {:?}",
            result.workflow_id,
            result.total_cost,
            start_time.elapsed()
        );

        Ok(result)
    }

    /// 獲取估算參數引用
    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    /// 獲取主檔查詢引用
    pub fn repository(&self) -> &R {
        self.repo
    }
}
