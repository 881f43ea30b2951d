//! 途程模型（工作流程、途程節點、製令節點）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TimeUnit;

/// 以週期計算工時的節點
///
/// 途程節點與製令節點都以「每週期工時 + 每週期數量」描述加工時間。
pub trait CycleTimed {
    /// 每週期工時（工作流程工期單位）
    fn duration(&self) -> Decimal;

    /// 每週期數量（≤ 0 表示不分批，工時即為每單位工時）
    fn units_per_cycle(&self) -> i32;
}

/// 途程節點
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingNode {
    /// 節點ID
    pub node_id: String,

    /// 名稱
    pub name: String,

    /// 所屬工作流程
    pub workflow_id: String,

    /// 資源（工作中心）
    pub resource_id: Option<String>,

    /// 每週期工時
    pub duration: Decimal,

    /// 每週期數量
    pub units_per_cycle: i32,

    /// 整備時間
    pub setup_time: Decimal,

    /// 排隊時間
    pub queuing_time: Decimal,

    /// 等待時間
    pub waiting_time: Decimal,

    /// 搬運時間
    pub moving_time: Decimal,

    /// 重疊數量（0 表示不限制）
    pub overlap_units: u32,
}

impl RoutingNode {
    /// 創建新的途程節點
    pub fn new(node_id: String, workflow_id: String, duration: Decimal) -> Self {
        Self {
            name: node_id.clone(),
            node_id,
            workflow_id,
            resource_id: None,
            duration,
            units_per_cycle: 0,
            setup_time: Decimal::ZERO,
            queuing_time: Decimal::ZERO,
            waiting_time: Decimal::ZERO,
            moving_time: Decimal::ZERO,
            overlap_units: 0,
        }
    }

    /// 建構器模式：設置名稱
    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// 建構器模式：設置資源
    pub fn with_resource_id(mut self, resource_id: String) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// 建構器模式：設置每週期數量
    pub fn with_units_per_cycle(mut self, units: i32) -> Self {
        self.units_per_cycle = units;
        self
    }

    /// 建構器模式：設置整備時間
    pub fn with_setup_time(mut self, setup_time: Decimal) -> Self {
        self.setup_time = setup_time;
        self
    }

    /// 建構器模式：設置排隊、等待、搬運時間
    pub fn with_overheads(mut self, queuing: Decimal, waiting: Decimal, moving: Decimal) -> Self {
        self.queuing_time = queuing;
        self.waiting_time = waiting;
        self.moving_time = moving;
        self
    }

    /// 建構器模式：設置重疊數量
    pub fn with_overlap_units(mut self, overlap_units: u32) -> Self {
        self.overlap_units = overlap_units;
        self
    }

    /// 與數量無關的時間合計（排隊 + 整備 + 等待 + 搬運）
    pub fn fixed_overhead(&self) -> Decimal {
        self.queuing_time + self.setup_time + self.waiting_time + self.moving_time
    }
}

impl CycleTimed for RoutingNode {
    fn duration(&self) -> Decimal {
        self.duration
    }

    fn units_per_cycle(&self) -> i32 {
        self.units_per_cycle
    }
}

/// 工作流程（途程）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// 工作流程ID
    pub workflow_id: String,

    /// 名稱
    pub name: String,

    /// 工期單位（None 表示未設定，換算秒數為 0）
    pub duration_unit: Option<TimeUnit>,

    /// 批量
    pub qty_batch_size: Decimal,

    /// 節點（依宣告順序）
    pub node_ids: Vec<String>,
}

impl Workflow {
    /// 創建新的工作流程（批量預設為 1）
    pub fn new(workflow_id: String, duration_unit: TimeUnit) -> Self {
        Self {
            name: workflow_id.clone(),
            workflow_id,
            duration_unit: Some(duration_unit),
            qty_batch_size: Decimal::ONE,
            node_ids: Vec::new(),
        }
    }

    /// 建構器模式：設置批量
    pub fn with_batch_size(mut self, qty_batch_size: Decimal) -> Self {
        self.qty_batch_size = qty_batch_size;
        self
    }

    /// 建構器模式：設置節點
    pub fn with_node_ids(mut self, node_ids: Vec<String>) -> Self {
        self.node_ids = node_ids;
        self
    }

    /// 添加節點
    pub fn add_node(&mut self, node_id: String) {
        self.node_ids.push(node_id);
    }
}

/// 製令節點（由途程節點展開而來）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionOrderNode {
    /// 製令節點ID
    pub order_node_id: String,

    /// 來源途程節點
    pub node_id: String,

    /// 每週期工時
    pub duration: Decimal,

    /// 每週期數量
    pub units_per_cycle: i32,
}

impl ProductionOrderNode {
    /// 由途程節點展開製令節點
    pub fn from_routing_node(order_node_id: String, node: &RoutingNode) -> Self {
        Self {
            order_node_id,
            node_id: node.node_id.clone(),
            duration: node.duration,
            units_per_cycle: node.units_per_cycle,
        }
    }
}

impl CycleTimed for ProductionOrderNode {
    fn duration(&self) -> Decimal {
        self.duration
    }

    fn units_per_cycle(&self) -> i32 {
        self.units_per_cycle
    }
}
