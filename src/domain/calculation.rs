// ==========================================
// 工资结算调整计算系统 - 计算数据对象
// ==========================================
// 职责: 定义一次提交的输入快照与计算结果
// 红线: 快照按提交即时构建, 不做跨提交保留
// ==========================================

use crate::domain::types::HourArea;
use serde::{Deserialize, Serialize};

// ==========================================
// 计算输入快照 (Calculation Input)
// ==========================================

/// 一次提交时刻的表单字段快照
///
/// 所有字段均为用户原始输入文本, 数值解析统一由引擎层完成。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 最低工资输入文本 (Mindestlohn)
    pub min_wage_text: String,

    /// 发放金额输入文本 (Auszahlungsbetrag)
    pub payout_text: String,

    /// 分区1的工时行文本 (Stunden)
    pub primary_hours: Vec<String>,

    /// 分区2的工时行文本 (Stunden)
    pub secondary_hours: Vec<String>,
}

impl CalculationInput {
    /// 返回指定分区的工时行
    pub fn hours(&self, area: HourArea) -> &[String] {
        match area {
            HourArea::Primary => &self.primary_hours,
            HourArea::Secondary => &self.secondary_hours,
        }
    }
}

// ==========================================
// 计算明细 (Calculation Breakdown)
// ==========================================
// 每次计算必须输出可解释的中间量, 便于 UI 外壳展示与排查
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationBreakdown {
    /// 解析后的最低工资
    pub min_wage: f64,

    /// 解析后的发放金额
    pub payout_amount: f64,

    /// 分区1工时合计 (仅含非空行)
    pub primary_hours_sum: f64,

    /// 分区2工时合计 (仅含非空行)
    pub secondary_hours_sum: f64,

    /// 分区1应得金额 = 工时合计 × 最低工资
    pub primary_total: f64,

    /// 分区2应得金额 = 工时合计 × 最低工资
    pub secondary_total: f64,

    /// 实际应得总额 = 两分区应得金额之和
    pub actual_amount: f64,

    /// 分区1参与计算的行数 (空白行不计入)
    pub primary_entry_count: usize,

    /// 分区2参与计算的行数 (空白行不计入)
    pub secondary_entry_count: usize,
}

// ==========================================
// 计算结果 (Calculation Result)
// ==========================================

/// 单次提交的计算结果
///
/// 每次提交重新生成, 不做存储。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// 结算调整金额 (Überweisung)
    pub adjustment: f64,

    /// 供 UI 外壳直接展示的格式化字符串, 如 "Überweisung: 50.00€"
    pub display: String,

    /// 计算明细
    pub breakdown: CalculationBreakdown,
}
