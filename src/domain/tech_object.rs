// ==========================================
// 技术对象配置生成核心 - 基础技术对象
// ==========================================
// 职责: 聚合操作、参数、设备、对象组、系统参数
// 红线: 操作列表非空时首元素必为占位操作
// 红线: 层级只由构建方设置,生成阶段只读
// 红线: 克隆后与源对象不共享任何可变状态
// ==========================================

mod core;


pub use self::core::BaseTechObject;
