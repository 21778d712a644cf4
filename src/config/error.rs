// ==========================================
// 技术对象配置生成核心 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 核心模型与生成引擎没有错误路径,错误只出现在配置加载阶段
// ==========================================

use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件相关错误 =====
    #[error("配置文件读取失败 (path={path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ===== 格式错误 =====
    #[error("配置 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 模板定义错误 =====
    #[error("模板名称为空 (序号 {0})")]
    EmptyTemplateName(usize),

    #[error("模板名称重复: {0}")]
    DuplicateTemplate(String),

    #[error("未知的 S88 层级 (template={template}): {level}")]
    UnknownLevel { template: String, level: String },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
