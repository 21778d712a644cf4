// ==========================================
// 技术对象配置生成核心 - 领域模型层
// ==========================================
// 职责: 定义技术对象、操作、参数、对象组、系统参数
// 红线: 不含文本生成逻辑,不含配置加载逻辑
// ==========================================

pub mod attached_objects;
pub mod operation;
pub mod parameter;
pub mod registry;
pub mod system_params;
pub mod tech_object;
pub mod types;

// 重导出核心类型
pub use attached_objects::{AllowedObjects, AttachStrategy, AttachedObjects};
pub use operation::Operation;
pub use parameter::{BaseParameter, ParameterKind};
pub use registry::{ObjectRegistry, RegisteredObject, TechObjectRegistry};
pub use system_params::{SystemParam, SystemParams};
pub use tech_object::BaseTechObject;
pub use types::{BaseObjectId, ObjectType, TechObjectId};
