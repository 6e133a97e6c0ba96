// ==========================================
// 工资结算调整计算系统 - 表单 API
// ==========================================
// 职责: 面向 UI 外壳的唯一业务接口
// 依赖: WageFormState + ConfigStore + WageCalculator
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigStore;
use crate::domain::calculation::CalculationResult;
use crate::domain::form::WageFormState;
use crate::domain::types::{EntryHandle, HourArea};
use crate::engine::calculator::WageCalculator;

// ==========================================
// FormApi - 表单 API
// ==========================================

/// 表单API
///
/// 职责：
/// 1. 持有会话期的表单状态 (字段文本 + 两个工时分区)
/// 2. 响应字段编辑与加行事件
/// 3. 提交: 持久化最低工资 + 计算结算调整金额
pub struct FormApi {
    store: ConfigStore,
    calculator: WageCalculator,
    state: WageFormState,
}

impl FormApi {
    /// 创建新的FormApi实例
    ///
    /// # 参数
    /// - store: 配置存储 (决定最低工资的读写位置)
    ///
    /// # 说明
    /// 启动时从配置读取最低工资作为默认文本; 发放金额为空;
    /// 两个分区各预置一个空工时行。
    pub fn new(store: ConfigStore) -> Self {
        let saved_min_wage = store.load();
        tracing::info!(min_wage = %saved_min_wage, "表单会话初始化");

        Self {
            state: WageFormState::new(saved_min_wage),
            calculator: WageCalculator::new(),
            store,
        }
    }

    /// 当前表单状态 (供 UI 外壳渲染)
    pub fn state(&self) -> &WageFormState {
        &self.state
    }

    // ==========================================
    // 字段编辑事件
    // ==========================================

    /// 更新最低工资文本
    pub fn set_min_wage_text(&mut self, text: &str) {
        self.state.set_min_wage_text(text);
    }

    /// 更新发放金额文本
    pub fn set_payout_text(&mut self, text: &str) {
        self.state.set_payout_text(text);
    }

    /// 更新句柄指向的工时行文本
    ///
    /// # 返回
    /// - Ok(()): 更新成功
    /// - Err(ApiError::NotFound): 句柄不属于本会话
    pub fn set_hour_text(&mut self, handle: EntryHandle, text: &str) -> ApiResult<()> {
        if !self.state.set_hour_text(handle, text) {
            return Err(ApiError::NotFound(format!(
                "工时行({}, index={})不存在",
                handle.area.as_key(),
                handle.index
            )));
        }
        Ok(())
    }

    /// 向指定分区追加一个工时行
    ///
    /// # 返回
    /// - EntryHandle: 供 UI 外壳绑定输入框的行句柄
    pub fn add_hour_entry(&mut self, area: HourArea, initial: Option<&str>) -> EntryHandle {
        let handle = self.state.add_hour_entry(area, initial);
        tracing::debug!(
            area = handle.area.as_key(),
            index = handle.index,
            "追加工时行"
        );
        handle
    }

    // ==========================================
    // 提交
    // ==========================================

    /// 提交当前表单
    ///
    /// # 返回
    /// - CalculationResult: 结算调整金额与展示字符串
    ///
    /// # 说明
    /// 1. 先按原始文本持久化最低工资 (写入失败仅告警, 不阻断计算)
    /// 2. 再对当前字段快照执行结算计算
    /// 提交动作永不失败。
    pub fn submit(&mut self) -> CalculationResult {
        if let Err(e) = self.store.save(self.state.min_wage_text()) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %e,
                "最低工资配置写入失败, 继续返回计算结果"
            );
        }

        let input = self.state.snapshot();
        self.calculator.compute(&input)
    }
}
