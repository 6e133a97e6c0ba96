// ==========================================
// 工资结算调整计算系统 - 引擎层
// ==========================================
// 职责: 实现数值解析与结算计算规则
// 红线: 引擎永不失败, 所有输出附带可解释明细
// ==========================================

pub mod calculator;
pub mod parse;

// 重导出核心引擎
pub use calculator::{WageCalculator, CURRENCY_SYMBOL, RESULT_LABEL};
pub use parse::parse_locale_number;
