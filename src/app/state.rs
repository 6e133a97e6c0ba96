// ==========================================
// 工资结算调整计算系统 - 应用状态
// ==========================================
// 职责: 装配配置存储与表单 API, 供 UI 外壳持有
// ==========================================

use std::path::{Path, PathBuf};

use crate::api::error::{ApiError, ApiResult};
use crate::api::form_api::FormApi;
use crate::config::ConfigStore;

/// 应用状态
///
/// UI 外壳在其生命周期内持有唯一实例, 所有字段编辑、加行与提交
/// 均经由 form_api 进行; 不需要任何全局可变状态。
pub struct AppState {
    /// 配置文件路径
    config_path: PathBuf,

    /// 表单API
    pub form_api: FormApi,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config_path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(ApiError::InvalidInput): 路径为空
    pub fn new(config_path: impl Into<PathBuf>) -> ApiResult<Self> {
        let config_path = config_path.into();
        if config_path.as_os_str().is_empty() {
            return Err(ApiError::InvalidInput("配置文件路径不能为空".to_string()));
        }

        tracing::info!(path = %config_path.display(), "初始化AppState");

        let form_api = FormApi::new(ConfigStore::new(&config_path));

        Ok(Self {
            config_path,
            form_api,
        })
    }

    /// 获取配置文件路径
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

// ==========================================
// 默认配置路径辅助函数
// ==========================================

/// 获取默认配置文件路径
///
/// # 返回
/// - 开发环境: 用户数据目录/wage-adjust-dev/config.json
/// - 生产环境: 用户数据目录/wage-adjust/config.json
/// - 取不到用户数据目录时回退为 ./config.json
pub fn default_config_path() -> PathBuf {
    // 允许通过环境变量显式指定配置路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("WAGE_ADJUST_CONFIG_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产数据
        #[cfg(debug_assertions)]
        let dir = data_dir.join("wage-adjust-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("wage-adjust");

        // 确保目录存在
        std::fs::create_dir_all(&dir).ok();
        return dir.join("config.json");
    }

    PathBuf::from("./config.json")
}
