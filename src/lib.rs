// ==========================================
// 工资结算调整计算系统 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 表单输入采集与结算计算核心 (UI 外壳作为外部集成方)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 最低工资持久化
pub mod config;

// 引擎层 - 数值解析与结算计算
pub mod engine;

// API 层 - UI 外壳接口
pub mod api;

// 应用层 - 状态装配
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    CalculationBreakdown, CalculationInput, CalculationResult, EntryHandle, HourArea,
    WageFormState,
};

// 配置
pub use config::{ConfigError, ConfigStore, DEFAULT_MIN_WAGE};

// 引擎
pub use engine::{parse_locale_number, WageCalculator};

// API
pub use api::{ApiError, ApiResult, FormApi};

// 应用
pub use app::{default_config_path, AppState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工资结算调整计算系统";

// ==========================================
// 预编译检查
// ==========================================
