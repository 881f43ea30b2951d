//! # Routing
//!
//! 製造途程工期與資源成本估算引擎
//!
//! - [`model`]：途程、資源、計量單位、成本維度資料模型與主檔查詢介面
//! - [`engine`]：週期工時、工期彙總、單位換算與成本計算

pub use routing_calc as engine;
pub use routing_core as model;

pub use routing_calc::{
    CostCalculator, CycleEstimator, DurationAggregator, NodeCost, RoutingCalculator,
    UnitConverter, WorkflowCost,
};
pub use routing_core::{
    CostCollector, CostDimension, EstimationConfig, InMemoryRepository, NonTimeRatedPolicy,
    Result, RoutingError, RoutingRepository,
};
