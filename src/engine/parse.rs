// ==========================================
// 工资结算调整计算系统 - 数值解析
// ==========================================
// 职责: 宽容解析用户输入的数值文本
// 红线: 解析永不报错, 失败一律按 0.0 处理并告警
// ==========================================

/// 宽容的本地化数值解析
///
/// 规则 (顺序执行):
/// 1) 去除首尾空白
/// 2) 所有逗号替换为句点 (兼容逗号小数习惯)
/// 3) 清理后为空 → 0.0 (空行视为零贡献, 不是错误)
/// 4) 解析失败 → 0.0, 并输出带原始文本的非致命告警
/// 5) 其余情况返回解析值
pub fn parse_locale_number(text: &str) -> f64 {
    let cleaned = text.trim().replace(',', ".");

    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(raw_value = %text, "数值解析失败, 按 0.0 处理");
            0.0
        }
    }
}
