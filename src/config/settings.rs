// ==========================================
// 技术对象配置生成核心 - 生成设置
// ==========================================
// 存储: JSON（缺省字段取默认值）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 默认缩进
pub const DEFAULT_PREFIX: &str = "\t";

// ==========================================
// GeneratorSettings - 生成设置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// 每层嵌套使用的缩进字符串
    pub prefix: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl GeneratorSettings {
    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// 从 JSON 文件加载
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), prefix = ?settings.prefix, "生成设置加载完成");
        Ok(settings)
    }
}
