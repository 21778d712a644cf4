// ==========================================
// 技术对象配置生成核心 - 引擎层
// ==========================================
// 职责: prg.lua 文本生成
// 红线: 引擎只读模型,不修改任何状态
// 红线: 外部协作方（登记表、模式编号）通过参数注入
// ==========================================

pub mod mode;
pub mod prg_lua;

// 重导出核心引擎接口
pub use mode::{ModeRecord, ModeView, StepRecord, StepView};
pub use prg_lua::{
    save_equipment, save_object_info, save_operations, save_operations_parameters,
    save_operations_steps,
};
