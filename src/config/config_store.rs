// ==========================================
// 工资结算调整计算系统 - 配置存储
// ==========================================
// 职责: 最低工资的读取与持久化
// 存储: 单个 JSON 配置文件 (固定键 "Mindestlohn")
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 最低工资的固定默认值 (原始文本, 逗号小数)
pub const DEFAULT_MIN_WAGE: &str = "13,90";

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 最低工资 (Mindestlohn)
    pub const MIN_WAGE: &str = "Mindestlohn";
}

// ==========================================
// 配置错误类型
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件写入失败: {0}")]
    IoError(#[from] std::io::Error),

    #[error("配置序列化失败: {0}")]
    SerializationError(#[from] serde_json::Error),
}

// ==========================================
// 持久化记录
// ==========================================

/// 配置文件的完整内容
///
/// 写入时整体覆盖, 只包含这一个字段; 旧记录中的未知字段在重写时丢弃。
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RateRecord {
    #[serde(rename = "Mindestlohn")]
    min_wage: String,
}

// ==========================================
// ConfigStore - 配置存储
// ==========================================
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// 创建绑定到指定配置文件路径的存储实例
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 配置文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取持久化的最低工资文本
    ///
    /// # 返回
    /// - String: 记录中的最低工资; 文件缺失、JSON 损坏或键缺失时
    ///   一律返回固定默认值, 永不失败。
    pub fn load(&self) -> String {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::debug!(path = %self.path.display(), "配置文件不存在, 使用默认最低工资");
                return DEFAULT_MIN_WAGE.to_string();
            }
        };

        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "配置文件格式错误, 使用默认最低工资"
                );
                return DEFAULT_MIN_WAGE.to_string();
            }
        };

        value
            .get(config_keys::MIN_WAGE)
            .and_then(|v| v.as_str())
            .unwrap_or(DEFAULT_MIN_WAGE)
            .to_string()
    }

    /// 持久化最低工资文本
    ///
    /// # 参数
    /// - min_wage: 用户输入的原始文本 (不做数值规范化)
    ///
    /// # 说明
    /// 同步写入并落盘后才返回; 整体覆盖旧记录。
    pub fn save(&self, min_wage: &str) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let record = RateRecord {
            min_wage: min_wage.to_string(),
        };
        let json = serde_json::to_string(&record)?;

        let mut file = fs::File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}
