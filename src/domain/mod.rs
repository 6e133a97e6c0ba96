// ==========================================
// 工资结算调整计算系统 - 领域模型层
// ==========================================
// 职责: 定义表单实体、类型与数据对象
// 红线: 不含持久化逻辑, 不含计算引擎逻辑
// ==========================================

pub mod calculation;
pub mod form;
pub mod types;

// 重导出核心类型
pub use calculation::{CalculationBreakdown, CalculationInput, CalculationResult};
pub use form::WageFormState;
pub use types::{EntryHandle, HourArea};
