// ==========================================
// 技术对象配置生成核心 - 配置层
// ==========================================
// 职责: 生成设置、基础对象目录的加载
// 存储: JSON 文档
// ==========================================

pub mod catalog;
pub mod error;
pub mod settings;

// 重导出核心配置类型
pub use catalog::{CatalogDocument, ObjectCatalog, TemplateDefinition};
pub use error::{ConfigError, ConfigResult};
pub use settings::GeneratorSettings;
