// ==========================================
// 技术对象配置生成核心 - 核心库
// ==========================================
// 系统定位: 技术对象模型 + prg.lua 配置文本生成
// 使用方式: 外部构建方通过领域层构建方法填充模型,
//           渲染阶段调用引擎层函数生成文本
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 技术对象模型
pub mod domain;

// 引擎层 - prg.lua 生成
pub mod engine;

// 配置层 - 生成设置与基础对象目录
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AllowedObjects, AttachStrategy, AttachedObjects, BaseObjectId, BaseParameter,
    BaseTechObject, ObjectRegistry, ObjectType, Operation, ParameterKind, RegisteredObject,
    SystemParam, SystemParams, TechObjectId, TechObjectRegistry,
};

// 引擎
pub use engine::{
    save_equipment, save_object_info, save_operations, save_operations_parameters,
    save_operations_steps, ModeRecord, ModeView, StepRecord, StepView,
};

// 配置
pub use config::{ConfigError, ConfigResult, GeneratorSettings, ObjectCatalog};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
