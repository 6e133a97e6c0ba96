// ==========================================
// 工资结算调整计算系统 - API层错误类型
// ==========================================
// 职责: 定义面向 UI 外壳的错误类型
// 说明: 计算路径永不失败, 错误只出现在配置持久化与句柄寻址
// ==========================================

use crate::config::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("配置持久化失败: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        // ConfigError → ApiError 转换
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let config_err = ConfigError::IoError(io_err);
        let api_err: ApiError = config_err.into();

        match api_err {
            ApiError::Config(_) => {}
            _ => panic!("Expected ApiError::Config"),
        }
    }

    #[test]
    fn test_error_display_contains_reason() {
        // 错误信息必须包含显式原因
        let err = ApiError::NotFound("工时行(PRIMARY, index=99)不存在".to_string());
        assert!(err.to_string().contains("PRIMARY"));
        assert!(err.to_string().contains("99"));
    }
}
