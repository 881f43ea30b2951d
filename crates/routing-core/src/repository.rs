//! 主檔查詢介面與記憶體實作

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{
    CostDimension, CostRecord, ProductionOrderNode, Resource, ResourceType, Result, RoutingError,
    RoutingNode, UnitOfMeasure, Workflow,
};

/// 主檔查詢能力
///
/// 計算引擎不持有任何主檔，所有資料都在每次計算時經由此介面讀取。
/// 找不到時回傳 [`RoutingError::NotFound`]，引擎原樣向上傳遞。
pub trait RoutingRepository: Send + Sync {
    fn routing_node(&self, node_id: &str) -> Result<RoutingNode>;

    fn workflow(&self, workflow_id: &str) -> Result<Workflow>;

    fn resource(&self, resource_id: &str) -> Result<Resource>;

    fn resource_type(&self, resource_type_id: &str) -> Result<ResourceType>;

    fn uom(&self, uom_id: &str) -> Result<UnitOfMeasure>;

    fn production_order_node(&self, order_node_id: &str) -> Result<ProductionOrderNode>;

    /// 現行成本單價（符合維度的成本記錄合計，無記錄時為 0）
    fn cost_rate(&self, dimension: &CostDimension) -> Result<Decimal>;

    /// 會計綱要的成本小數位數
    fn costing_precision(&self, acct_schema_id: &str) -> Result<u32>;
}

/// 主檔快照（JSON 格式）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterDataSnapshot {
    pub nodes: Vec<RoutingNode>,
    pub workflows: Vec<Workflow>,
    pub resources: Vec<Resource>,
    pub resource_types: Vec<ResourceType>,
    pub uoms: Vec<UnitOfMeasure>,
    pub order_nodes: Vec<ProductionOrderNode>,
    pub cost_records: Vec<CostRecord>,
    pub costing_precisions: HashMap<String, u32>,
}

/// 記憶體主檔
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    nodes: HashMap<String, RoutingNode>,
    workflows: HashMap<String, Workflow>,
    resources: HashMap<String, Resource>,
    resource_types: HashMap<String, ResourceType>,
    uoms: HashMap<String, UnitOfMeasure>,
    order_nodes: HashMap<String, ProductionOrderNode>,
    cost_records: Vec<CostRecord>,
    costing_precisions: HashMap<String, u32>,
}

impl InMemoryRepository {
    /// 創建空的主檔
    pub fn new() -> Self {
        Self::default()
    }

    /// 從 JSON 快照載入
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: MasterDataSnapshot =
            serde_json::from_str(json).map_err(|e| RoutingError::InvalidSnapshot(e.to_string()))?;
        Ok(Self::from(snapshot))
    }

    /// 建構器模式：添加途程節點
    pub fn with_node(mut self, node: RoutingNode) -> Self {
        self.nodes.insert(node.node_id.clone(), node);
        self
    }

    /// 建構器模式：添加工作流程
    pub fn with_workflow(mut self, workflow: Workflow) -> Self {
        self.workflows.insert(workflow.workflow_id.clone(), workflow);
        self
    }

    /// 建構器模式：添加資源
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.insert(resource.resource_id.clone(), resource);
        self
    }

    /// 建構器模式：添加資源類型
    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_types
            .insert(resource_type.resource_type_id.clone(), resource_type);
        self
    }

    /// 建構器模式：添加計量單位
    pub fn with_uom(mut self, uom: UnitOfMeasure) -> Self {
        self.uoms.insert(uom.uom_id.clone(), uom);
        self
    }

    /// 建構器模式：添加製令節點
    pub fn with_order_node(mut self, order_node: ProductionOrderNode) -> Self {
        self.order_nodes
            .insert(order_node.order_node_id.clone(), order_node);
        self
    }

    /// 建構器模式：添加成本記錄
    pub fn with_cost_record(mut self, record: CostRecord) -> Self {
        self.cost_records.push(record);
        self
    }

    /// 建構器模式：設置會計綱要成本精度
    pub fn with_costing_precision(mut self, acct_schema_id: String, precision: u32) -> Self {
        self.costing_precisions.insert(acct_schema_id, precision);
        self
    }

    fn lookup<T: Clone>(map: &HashMap<String, T>, entity: &'static str, id: &str) -> Result<T> {
        map.get(id).cloned().ok_or_else(|| RoutingError::NotFound {
            entity,
            id: id.to_string(),
        })
    }
}

impl From<MasterDataSnapshot> for InMemoryRepository {
    fn from(snapshot: MasterDataSnapshot) -> Self {
        Self {
            nodes: snapshot
                .nodes
                .into_iter()
                .map(|n| (n.node_id.clone(), n))
                .collect(),
            workflows: snapshot
                .workflows
                .into_iter()
                .map(|w| (w.workflow_id.clone(), w))
                .collect(),
            resources: snapshot
                .resources
                .into_iter()
                .map(|r| (r.resource_id.clone(), r))
                .collect(),
            resource_types: snapshot
                .resource_types
                .into_iter()
                .map(|t| (t.resource_type_id.clone(), t))
                .collect(),
            uoms: snapshot
                .uoms
                .into_iter()
                .map(|u| (u.uom_id.clone(), u))
                .collect(),
            order_nodes: snapshot
                .order_nodes
                .into_iter()
                .map(|o| (o.order_node_id.clone(), o))
                .collect(),
            cost_records: snapshot.cost_records,
            costing_precisions: snapshot.costing_precisions,
        }
    }
}

impl RoutingRepository for InMemoryRepository {
    fn routing_node(&self, node_id: &str) -> Result<RoutingNode> {
        Self::lookup(&self.nodes, "routing node", node_id)
    }

    fn workflow(&self, workflow_id: &str) -> Result<Workflow> {
        Self::lookup(&self.workflows, "workflow", workflow_id)
    }

    fn resource(&self, resource_id: &str) -> Result<Resource> {
        Self::lookup(&self.resources, "resource", resource_id)
    }

    fn resource_type(&self, resource_type_id: &str) -> Result<ResourceType> {
        Self::lookup(&self.resource_types, "resource type", resource_type_id)
    }

    fn uom(&self, uom_id: &str) -> Result<UnitOfMeasure> {
        Self::lookup(&self.uoms, "unit of measure", uom_id)
    }

    fn production_order_node(&self, order_node_id: &str) -> Result<ProductionOrderNode> {
        Self::lookup(&self.order_nodes, "production order node", order_node_id)
    }

    fn cost_rate(&self, dimension: &CostDimension) -> Result<Decimal> {
        Ok(self
            .cost_records
            .iter()
            .filter(|record| record.matches(dimension))
            .map(|record| record.current_cost_price)
            .sum())
    }

    fn costing_precision(&self, acct_schema_id: &str) -> Result<u32> {
        Self::lookup(&self.costing_precisions, "accounting schema", acct_schema_id)
    }
}
