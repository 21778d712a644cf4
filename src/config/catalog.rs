// ==========================================
// 技术对象配置生成核心 - 基础对象目录
// ==========================================
// 职责: 从 JSON 描述构建基础对象模板,按需克隆实例
// 红线: 模板只通过构建方法生成,保证占位操作与回指不变量
// 红线: 模板不对外提供可变引用,实例化一律克隆
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::tech_object::BaseTechObject;
use crate::domain::types::{ObjectType, TechObjectId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

// ==========================================
// JSON 描述结构
// ==========================================

/// 目录文档
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub templates: Vec<TemplateDefinition>,
}

/// S88 层级: 整数或名称（"unit"、"aggregate" 等）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Number(i32),
    Name(String),
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec::Number(0)
    }
}

/// 基础对象模板定义
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    #[serde(default)]
    pub eplan_name: String,
    #[serde(default)]
    pub s88_level: LevelSpec,
    #[serde(default)]
    pub basic_name: String,
    #[serde(default)]
    pub binding_name: String,
    #[serde(default)]
    pub is_pid: bool,
    #[serde(default)]
    pub operations: Vec<OperationDefinition>,
    #[serde(default)]
    pub equipment: Vec<EquipmentDefinition>,
    #[serde(default)]
    pub aggregate_parameters: Vec<ActiveParameterDefinition>,
    #[serde(default)]
    pub main_aggregate_parameter: Option<ActiveParameterDefinition>,
    #[serde(default)]
    pub object_groups: Vec<GroupDefinition>,
    #[serde(default)]
    pub system_parameters: Vec<SystemParameterDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OperationDefinition {
    pub lua_name: String,
    pub name: String,
    #[serde(default)]
    pub default_position: i32,
    #[serde(default)]
    pub properties: Vec<ActiveParameterDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentDefinition {
    pub lua_name: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// 活动参数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveParameterType {
    #[default]
    Active,
    Bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActiveParameterDefinition {
    pub lua_name: String,
    pub name: String,
    #[serde(default)]
    pub default_value: String,
    #[serde(default, rename = "type")]
    pub parameter_type: ActiveParameterType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupDefinition {
    pub lua_name: String,
    pub name: String,
    /// "all" / "units" / "aggregates"
    #[serde(default)]
    pub allowed_objects: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemParameterDefinition {
    pub lua_name: String,
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub meter: String,
}

// ==========================================
// ObjectCatalog - 基础对象目录
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ObjectCatalog {
    templates: Vec<BaseTechObject>,
}

impl ObjectCatalog {
    /// 从 JSON 字符串加载
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        Self::from_document(&document)
    }

    /// 从 JSON 文件加载
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(path = %path.display(), templates = catalog.len(), "基础对象目录加载完成");
        Ok(catalog)
    }

    /// 从已解析的文档构建
    pub fn from_document(document: &CatalogDocument) -> ConfigResult<Self> {
        let mut seen = HashSet::new();
        let mut templates = Vec::with_capacity(document.templates.len());

        for (idx, definition) in document.templates.iter().enumerate() {
            if definition.name.trim().is_empty() {
                return Err(ConfigError::EmptyTemplateName(idx));
            }
            if !seen.insert(definition.name.as_str()) {
                return Err(ConfigError::DuplicateTemplate(definition.name.clone()));
            }

            templates.push(build_template(definition)?);
        }

        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// 模板名称列表（按定义顺序）
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    /// 按名称查找模板
    pub fn template(&self, name: &str) -> Option<&BaseTechObject> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// 按基础功能匹配名查找模板（首个匹配）
    pub fn template_by_basic_name(&self, basic_name: &str) -> Option<&BaseTechObject> {
        self.templates.iter().find(|t| t.basic_name() == basic_name)
    }

    /// 实例化模板: 克隆并归属到指定的上级对象
    pub fn instantiate(&self, basic_name: &str, owner: TechObjectId) -> Option<BaseTechObject> {
        let instance = self.template_by_basic_name(basic_name)?.clone_for(owner);
        debug!(basic_name = %basic_name, owner = %owner, "基础对象实例化");
        Some(instance)
    }
}

/// 解析层级
fn resolve_level(definition: &TemplateDefinition) -> ConfigResult<i32> {
    match &definition.s88_level {
        LevelSpec::Number(level) => Ok(*level),
        LevelSpec::Name(name) => ObjectType::from_name(name)
            .map(ObjectType::level)
            .ok_or_else(|| ConfigError::UnknownLevel {
                template: definition.name.clone(),
                level: name.clone(),
            }),
    }
}

/// 通过构建方法生成模板
fn build_template(definition: &TemplateDefinition) -> ConfigResult<BaseTechObject> {
    let mut object = BaseTechObject::new();
    object.set_name(definition.name.as_str());
    object.set_eplan_name(definition.eplan_name.as_str());
    object.set_s88_level(resolve_level(definition)?);
    object.set_basic_name(definition.basic_name.as_str());
    object.set_binding_name(definition.binding_name.as_str());
    object.set_is_pid(definition.is_pid);

    for op in &definition.operations {
        let operation = object.add_operation(op.lua_name.as_str(), op.name.as_str(), op.default_position);
        for prop in &op.properties {
            match prop.parameter_type {
                ActiveParameterType::Active => {
                    operation.add_active_parameter(
                        prop.lua_name.as_str(),
                        prop.name.as_str(),
                        prop.default_value.as_str(),
                    );
                }
                ActiveParameterType::Bool => {
                    operation.add_active_bool_parameter(
                        prop.lua_name.as_str(),
                        prop.name.as_str(),
                        prop.default_value.as_str(),
                    );
                }
            }
        }
    }

    for equip in &definition.equipment {
        object.add_equipment(equip.lua_name.as_str(), equip.name.as_str(), equip.value.as_str());
    }

    for par in &definition.aggregate_parameters {
        match par.parameter_type {
            ActiveParameterType::Active => {
                object.add_active_parameter(
                    par.lua_name.as_str(),
                    par.name.as_str(),
                    par.default_value.as_str(),
                );
            }
            ActiveParameterType::Bool => object.add_active_bool_parameter(
                par.lua_name.as_str(),
                par.name.as_str(),
                par.default_value.as_str(),
            ),
        }
    }

    if let Some(main) = &definition.main_aggregate_parameter {
        object.add_main_aggregate_parameter(
            main.lua_name.as_str(),
            main.name.as_str(),
            main.default_value.as_str(),
        );
    }

    for group in &definition.object_groups {
        object.add_object_group(group.lua_name.as_str(), group.name.as_str(), &group.allowed_objects);
    }

    for par in &definition.system_parameters {
        object.add_system_parameter(par.lua_name.as_str(), par.name.as_str(), par.value, par.meter.as_str());
    }

    debug!(
        template = %definition.name,
        operations = definition.operations.len(),
        equipment = definition.equipment.len(),
        groups = definition.object_groups.len(),
        "基础对象模板构建完成"
    );
    Ok(object)
}
