// ==========================================
// 工资结算调整计算系统 - 表单会话状态
// ==========================================
// 职责: 持有会话期的字段文本与两个工时分区
// 红线: 工时行只增不减、不重排; 状态不做持久化
// ==========================================

use crate::domain::calculation::CalculationInput;
use crate::domain::types::{EntryHandle, HourArea};

// ==========================================
// WageFormState - 表单会话状态
// ==========================================

/// 表单会话状态
///
/// 由 UI 外壳在其生命周期内持有唯一实例。字段结构是显式的:
/// 最低工资、发放金额各一个文本字段, 外加两个有序的工时行序列,
/// 不使用通用的动态字段映射。
#[derive(Debug, Clone)]
pub struct WageFormState {
    /// 最低工资输入文本 (启动时由配置预填)
    min_wage_text: String,

    /// 发放金额输入文本
    payout_text: String,

    /// 分区1工时行 (追加序)
    primary_hours: Vec<String>,

    /// 分区2工时行 (追加序)
    secondary_hours: Vec<String>,
}

impl WageFormState {
    /// 创建新的表单会话
    ///
    /// # 参数
    /// - min_wage_text: 最低工资默认文本 (通常取自持久化配置)
    ///
    /// # 说明
    /// 每个分区初始各有一个空工时行, 与启动时的表单布局一致。
    pub fn new(min_wage_text: impl Into<String>) -> Self {
        Self {
            min_wage_text: min_wage_text.into(),
            payout_text: String::new(),
            primary_hours: vec![String::new()],
            secondary_hours: vec![String::new()],
        }
    }

    // ==========================================
    // 字段访问
    // ==========================================

    pub fn min_wage_text(&self) -> &str {
        &self.min_wage_text
    }

    pub fn set_min_wage_text(&mut self, text: &str) {
        self.min_wage_text = text.to_string();
    }

    pub fn payout_text(&self) -> &str {
        &self.payout_text
    }

    pub fn set_payout_text(&mut self, text: &str) {
        self.payout_text = text.to_string();
    }

    /// 返回指定分区的工时行文本
    pub fn hours(&self, area: HourArea) -> &[String] {
        match area {
            HourArea::Primary => &self.primary_hours,
            HourArea::Secondary => &self.secondary_hours,
        }
    }

    /// 返回指定分区当前的行数
    pub fn entry_count(&self, area: HourArea) -> usize {
        self.hours(area).len()
    }

    // ==========================================
    // 行管理 (只增不减)
    // ==========================================

    /// 向指定分区追加一个工时行
    ///
    /// # 参数
    /// - area: 目标分区
    /// - initial: 初始文本, 缺省为空字符串
    ///
    /// # 返回
    /// - EntryHandle: 供 UI 外壳绑定输入框的行句柄
    pub fn add_hour_entry(&mut self, area: HourArea, initial: Option<&str>) -> EntryHandle {
        let entries = self.hours_mut(area);
        entries.push(initial.unwrap_or_default().to_string());

        EntryHandle {
            area,
            index: entries.len() - 1,
        }
    }

    /// 更新句柄指向的工时行文本
    ///
    /// # 返回
    /// - true: 更新成功
    /// - false: 句柄越界 (不属于本会话)
    pub fn set_hour_text(&mut self, handle: EntryHandle, text: &str) -> bool {
        let entries = self.hours_mut(handle.area);
        match entries.get_mut(handle.index) {
            Some(entry) => {
                *entry = text.to_string();
                true
            }
            None => false,
        }
    }

    fn hours_mut(&mut self, area: HourArea) -> &mut Vec<String> {
        match area {
            HourArea::Primary => &mut self.primary_hours,
            HourArea::Secondary => &mut self.secondary_hours,
        }
    }

    // ==========================================
    // 快照
    // ==========================================

    /// 构建当前时刻的计算输入快照
    ///
    /// 快照为字段文本的完整拷贝, 提交后的继续编辑不影响已提交的计算。
    pub fn snapshot(&self) -> CalculationInput {
        CalculationInput {
            min_wage_text: self.min_wage_text.clone(),
            payout_text: self.payout_text.clone(),
            primary_hours: self.primary_hours.clone(),
            secondary_hours: self.secondary_hours.clone(),
        }
    }
}
