// ==========================================
// 技术对象配置生成核心 - 基础操作
// ==========================================
// 职责: 操作标识、默认位置、操作属性列表
// 说明: 结构创建后不变,只有属性列表允许外部补充
// ==========================================

use crate::domain::parameter::BaseParameter;
use crate::domain::types::BaseObjectId;

// ==========================================
// Operation - 基础操作
// ==========================================
#[derive(Debug, Clone)]
pub struct Operation {
    lua_name: String,               // 运行时标识
    name: String,                   // 显示名称
    default_position: i32,          // 自动配置时的默认位置
    properties: Vec<BaseParameter>, // 操作属性
    owner: Option<BaseObjectId>,    // 所属基础对象（回指）
}

impl Operation {
    /// 创建操作（未关联所属对象）
    pub fn new(lua_name: impl Into<String>, name: impl Into<String>, default_position: i32) -> Self {
        Self {
            lua_name: lua_name.into(),
            name: name.into(),
            default_position,
            properties: Vec::new(),
            owner: None,
        }
    }

    /// 占位操作: 表示"未选择操作"
    pub fn empty() -> Self {
        Self::new("", "", 0)
    }

    // ===== 访问器 =====

    pub fn lua_name(&self) -> &str {
        &self.lua_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_position(&self) -> i32 {
        self.default_position
    }

    pub fn properties(&self) -> &[BaseParameter] {
        &self.properties
    }

    pub fn owner(&self) -> Option<BaseObjectId> {
        self.owner
    }

    /// 是否为占位操作（名称为空,生成时跳过）
    pub fn is_placeholder(&self) -> bool {
        self.name.is_empty()
    }

    // ===== 属性 =====

    /// 添加属性,属性回指本操作的所属对象
    pub fn add_property(&mut self, mut property: BaseParameter) -> &mut BaseParameter {
        property.set_owner(self.owner);
        let idx = self.properties.len();
        self.properties.push(property);
        &mut self.properties[idx]
    }

    pub fn add_active_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut BaseParameter {
        self.add_property(BaseParameter::active(lua_name, name, default_value))
    }

    pub fn add_active_bool_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut BaseParameter {
        self.add_property(BaseParameter::active_bool(lua_name, name, default_value))
    }

    /// 按运行时标识查找属性（首个匹配）
    pub fn property(&self, lua_name: &str) -> Option<&BaseParameter> {
        self.properties.iter().find(|p| p.lua_name() == lua_name)
    }

    pub fn property_mut(&mut self, lua_name: &str) -> Option<&mut BaseParameter> {
        self.properties.iter_mut().find(|p| p.lua_name() == lua_name)
    }

    /// 重新关联所属对象（含全部属性）
    pub(crate) fn relink(&mut self, owner: Option<BaseObjectId>) {
        self.owner = owner;
        for property in &mut self.properties {
            property.set_owner(owner);
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.lua_name == other.lua_name
            && self.name == other.name
            && self.default_position == other.default_position
            && self.properties == other.properties
    }
}
