// ==========================================
// 技术对象配置生成核心 - 技术对象登记接口
// ==========================================
// 职责: 定义核心对外部对象登记表的查询接口
// 说明: 工艺单元查找、附属成员解析均通过此接口注入,
//       核心不持有任何全局单例
// ==========================================

use crate::domain::types::ObjectType;
use std::collections::BTreeMap;

/// prg.lua 中技术对象的命名空间
pub const PRG_NAMESPACE: &str = "prg";

// ==========================================
// RegisteredObject - 已登记的技术对象
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredObject {
    pub eplan_name: String, // 显示名称（如 TANK）
    pub tech_number: u32,   // 技术编号
    pub s88_level: i32,     // 层级
}

impl RegisteredObject {
    pub fn new(eplan_name: impl Into<String>, tech_number: u32, object_type: ObjectType) -> Self {
        Self {
            eplan_name: eplan_name.into(),
            tech_number,
            s88_level: object_type.level(),
        }
    }

    pub fn object_type(&self) -> Option<ObjectType> {
        ObjectType::from_level(self.s88_level)
    }

    /// 对象在 prg.lua 中的名称: 小写显示名 + 技术编号
    pub fn lua_object_name(&self) -> String {
        format!("{}{}", self.eplan_name.to_lowercase(), self.tech_number)
    }

    /// 全限定名称: `prg.<lua_object_name>`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", PRG_NAMESPACE, self.lua_object_name())
    }
}

// ==========================================
// Trait: TechObjectRegistry
// ==========================================
// 用途: 生成阶段查询外部对象
pub trait TechObjectRegistry {
    /// 当前项目的工艺单元对象（可能不存在）
    fn process_cell(&self) -> Option<&RegisteredObject>;

    /// 按全局序号查找对象
    fn object_by_number(&self, global_number: usize) -> Option<&RegisteredObject>;
}

// ==========================================
// ObjectRegistry - 内存登记表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ObjectRegistry {
    objects: BTreeMap<usize, RegisteredObject>,
    process_cell: Option<RegisteredObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记对象,同序号已存在时替换并返回旧对象
    pub fn register(
        &mut self,
        global_number: usize,
        object: RegisteredObject,
    ) -> Option<RegisteredObject> {
        self.objects.insert(global_number, object)
    }

    pub fn set_process_cell(&mut self, process_cell: Option<RegisteredObject>) {
        self.process_cell = process_cell;
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl TechObjectRegistry for ObjectRegistry {
    fn process_cell(&self) -> Option<&RegisteredObject> {
        self.process_cell.as_ref()
    }

    fn object_by_number(&self, global_number: usize) -> Option<&RegisteredObject> {
        self.objects.get(&global_number)
    }
}
