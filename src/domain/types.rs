// ==========================================
// 工资结算调整计算系统 - 领域类型定义
// ==========================================
// 职责: 定义工时分区、行句柄等基础类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工时分区 (Hour Area)
// ==========================================
// 表单固定包含两个相互独立、可分别增长的工时分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HourArea {
    Primary,   // 分区1
    Secondary, // 分区2
}

impl fmt::Display for HourArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourArea::Primary => write!(f, "PRIMARY"),
            HourArea::Secondary => write!(f, "SECONDARY"),
        }
    }
}

impl HourArea {
    /// 从字符串解析分区
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PRIMARY" => HourArea::Primary,
            "SECONDARY" => HourArea::Secondary,
            _ => HourArea::Primary, // 默认值
        }
    }

    /// 转换为存储/日志用的字符串
    pub fn as_key(&self) -> &'static str {
        match self {
            HourArea::Primary => "PRIMARY",
            HourArea::Secondary => "SECONDARY",
        }
    }
}

// ==========================================
// 行句柄 (Entry Handle)
// ==========================================
// UI 外壳将句柄绑定到对应的可编辑输入框。
// 行只增不减, 因此句柄在整个会话内保持有效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryHandle {
    /// 所属分区
    pub area: HourArea,

    /// 分区内的行序号 (从0开始, 按追加顺序递增)
    pub index: usize,
}
