// ==========================================
// 技术对象配置生成核心 - 附属对象组
// ==========================================
// 职责: 对象组的值、回指、成员解析策略
// 红线: 值为空的组不输出
// ==========================================

use crate::domain::registry::TechObjectRegistry;
use crate::domain::types::{ObjectType, TechObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// ==========================================
// 允许的成员类型
// ==========================================
// 在组构造时一次性确定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowedObjects {
    All,        // 附属设备 + 设备单元
    Units,      // 仅设备单元
    Aggregates, // 仅附属设备
    Default,    // 无法识别的配置,按附属设备处理
}

impl AllowedObjects {
    /// 从配置字符串解析,无法识别时返回 `Default`
    pub fn from_spec(spec: &str) -> Self {
        match spec {
            "all" => AllowedObjects::All,
            "units" => AllowedObjects::Units,
            "aggregates" => AllowedObjects::Aggregates,
            _ => AllowedObjects::Default,
        }
    }

    /// 允许的对象类型列表
    pub fn object_types(self) -> &'static [ObjectType] {
        match self {
            AllowedObjects::All => &[ObjectType::Aggregate, ObjectType::Unit],
            AllowedObjects::Units => &[ObjectType::Unit],
            AllowedObjects::Aggregates | AllowedObjects::Default => &[ObjectType::Aggregate],
        }
    }

    pub fn allows(self, object_type: ObjectType) -> bool {
        self.object_types().contains(&object_type)
    }
}

impl fmt::Display for AllowedObjects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedObjects::All => write!(f, "all"),
            AllowedObjects::Units => write!(f, "units"),
            AllowedObjects::Aggregates => write!(f, "aggregates"),
            AllowedObjects::Default => write!(f, "default"),
        }
    }
}

// ==========================================
// AttachStrategy - 无初始化附属策略
// ==========================================
// 只保存组标识与允许类型,不做额外初始化
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachStrategy {
    name: String,     // 组显示名称
    lua_name: String, // 组运行时标识
    allowed: AllowedObjects,
}

impl AttachStrategy {
    pub fn new(name: impl Into<String>, lua_name: impl Into<String>, allowed: AllowedObjects) -> Self {
        Self {
            name: name.into(),
            lua_name: lua_name.into(),
            allowed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lua_name(&self) -> &str {
        &self.lua_name
    }

    pub fn allowed_objects(&self) -> AllowedObjects {
        self.allowed
    }

    /// 解析组值中的成员,返回全限定名称
    ///
    /// # 参数
    /// - `value`: 以空白分隔的对象全局序号
    /// - `registry`: 外部对象登记表
    ///
    /// # 说明
    /// 无法解析的序号、不存在的对象、类型不被允许的对象均被跳过
    pub fn attached_object_names(
        &self,
        value: &str,
        registry: &dyn TechObjectRegistry,
    ) -> Vec<String> {
        let mut names = Vec::new();

        for token in value.split_whitespace() {
            let number = match token.parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    debug!(group = %self.lua_name, token = %token, "组成员序号无法解析,跳过");
                    continue;
                }
            };

            let object = match registry.object_by_number(number) {
                Some(obj) => obj,
                None => {
                    debug!(group = %self.lua_name, number, "组成员对象不存在,跳过");
                    continue;
                }
            };

            let allowed = object
                .object_type()
                .map(|ty| self.allowed.allows(ty))
                .unwrap_or(false);
            if !allowed {
                debug!(
                    group = %self.lua_name,
                    number,
                    level = object.s88_level,
                    "组成员类型不被允许,跳过"
                );
                continue;
            }

            names.push(object.qualified_name());
        }

        names
    }
}

// ==========================================
// AttachedObjects - 附属对象组
// ==========================================
#[derive(Debug, Clone)]
pub struct AttachedObjects {
    value: String,               // 成员序号列表,空表示未使用
    owner: Option<TechObjectId>, // 所属技术对象（回指）
    strategy: AttachStrategy,
}

impl AttachedObjects {
    pub fn new(value: impl Into<String>, owner: Option<TechObjectId>, strategy: AttachStrategy) -> Self {
        Self {
            value: value.into(),
            owner,
            strategy,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// 值为空的组不参与生成
    pub fn is_inert(&self) -> bool {
        self.value.is_empty()
    }

    pub fn owner(&self) -> Option<TechObjectId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<TechObjectId>) {
        self.owner = owner;
    }

    pub fn strategy(&self) -> &AttachStrategy {
        &self.strategy
    }

    pub fn lua_name(&self) -> &str {
        self.strategy.lua_name()
    }

    pub fn name(&self) -> &str {
        self.strategy.name()
    }

    /// 已附属对象的全限定名称（有序）
    pub fn attached_object_names(&self, registry: &dyn TechObjectRegistry) -> Vec<String> {
        self.strategy.attached_object_names(&self.value, registry)
    }
}

impl PartialEq for AttachedObjects {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.owner == other.owner && self.strategy == other.strategy
    }
}
