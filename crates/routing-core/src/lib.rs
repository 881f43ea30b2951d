//! # Routing Core
//!
//! 途程、資源、計量單位與成本維度的資料模型，以及主檔查詢介面

pub mod config;
pub mod costing;
pub mod repository;
pub mod resource;
pub mod routing;
pub mod uom;

// Re-export 主要類型
pub use config::{EstimationConfig, NonTimeRatedPolicy};
pub use costing::{CostCollector, CostDimension, CostRecord, RealizedTimes};
pub use repository::{InMemoryRepository, MasterDataSnapshot, RoutingRepository};
pub use resource::{Resource, ResourceType, TimeSlot};
pub use routing::{CycleTimed, ProductionOrderNode, RoutingNode, Workflow};
pub use uom::{TimeUnit, UnitOfMeasure};

/// 途程計算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("不支援的計量單位: {uom}")]
    UnsupportedUnit { uom: String },

    #[error("找不到{entity}: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("無效的除數 {divisor}: {value}")]
    InvalidDivisor { divisor: &'static str, value: String },

    #[error("計算錯誤: {0}")]
    CalculationError(String),

    #[error("無法識別的時間單位: {0}")]
    UnknownTimeUnit(String),

    #[error("主檔快照格式錯誤: {0}")]
    InvalidSnapshot(String),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
