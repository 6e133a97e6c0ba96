// ==========================================
// 工资结算调整计算系统 - 结算计算引擎
// ==========================================
// 职责: 按固定公式计算结算调整金额
// 输入: CalculationInput (一次提交的字段快照)
// 输出: CalculationResult (展示字符串 + 计算明细)
// 红线: 计算永不失败; 非法数值按 0.0 降级
// ==========================================

use crate::domain::calculation::{CalculationBreakdown, CalculationInput, CalculationResult};
use crate::engine::parse::parse_locale_number;
use tracing::instrument;

/// 结果展示的固定前缀
pub const RESULT_LABEL: &str = "Überweisung";

/// 货币符号
pub const CURRENCY_SYMBOL: &str = "€";

// ==========================================
// WageCalculator - 结算计算引擎
// ==========================================
pub struct WageCalculator;

impl WageCalculator {
    /// 创建新的结算计算引擎
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算结算调整金额
    ///
    /// 固定公式 (既有业务规则, 按原样实现, 不做推广):
    /// 1) min_wage = parse(最低工资文本)
    /// 2) payout = parse(发放金额文本)
    /// 3) 各分区过滤空白行后逐行解析
    /// 4) 分区应得 = 工时合计 × min_wage
    /// 5) actual = 分区1应得 + 分区2应得
    /// 6) adjustment = (payout - actual) / 3 + 分区1应得 / 2
    /// 7) 结果格式化为 "Überweisung: <两位小数>€"
    #[instrument(
        skip(self, input),
        fields(
            primary_rows = input.primary_hours.len(),
            secondary_rows = input.secondary_hours.len(),
        )
    )]
    pub fn compute(&self, input: &CalculationInput) -> CalculationResult {
        let min_wage = parse_locale_number(&input.min_wage_text);
        let payout_amount = parse_locale_number(&input.payout_text);

        let primary = Self::parse_entries(&input.primary_hours);
        let secondary = Self::parse_entries(&input.secondary_hours);

        let primary_hours_sum: f64 = primary.iter().sum();
        let secondary_hours_sum: f64 = secondary.iter().sum();

        let primary_total = primary_hours_sum * min_wage;
        let secondary_total = secondary_hours_sum * min_wage;
        let actual_amount = primary_total + secondary_total;

        let adjustment = (payout_amount - actual_amount) / 3.0 + primary_total / 2.0;

        let display = format!("{}: {:.2}{}", RESULT_LABEL, adjustment, CURRENCY_SYMBOL);

        tracing::debug!(
            min_wage,
            payout_amount,
            actual_amount,
            adjustment,
            "结算计算完成"
        );

        CalculationResult {
            adjustment,
            display,
            breakdown: CalculationBreakdown {
                min_wage,
                payout_amount,
                primary_hours_sum,
                secondary_hours_sum,
                primary_total,
                secondary_total,
                actual_amount,
                primary_entry_count: primary.len(),
                secondary_entry_count: secondary.len(),
            },
        }
    }

    /// 过滤空白行后逐行解析
    ///
    /// 空白行直接剔除, 而不是作为 0 值参与, 保证行数统计只反映有效输入。
    fn parse_entries(entries: &[String]) -> Vec<f64> {
        entries
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_locale_number(raw))
            .collect()
    }
}
