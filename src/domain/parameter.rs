// ==========================================
// 技术对象配置生成核心 - 参数领域模型
// ==========================================
// 职责: 设备参数、活动参数、布尔参数、主参数
// 红线: owner 只是回指句柄,克隆时由所属对象重新关联
// ==========================================

use crate::domain::types::BaseObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 设备引用在 prg.lua 中的命名空间
pub const CONTROL_MODULES_NAMESPACE: &str = "prg.control_modules";

// ==========================================
// 参数种类
// ==========================================
// 各种类结构一致,只在默认值类型和序列化格式上不同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    Equipment,     // 设备参数（值为设备名列表）
    Active,        // 活动参数（数值或设备）
    ActiveBool,    // 活动布尔参数
    MainAggregate, // 附属设备主参数（布尔）
}

impl ParameterKind {
    /// 是否为布尔类参数
    pub fn is_bool(self) -> bool {
        matches!(self, ParameterKind::ActiveBool | ParameterKind::MainAggregate)
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterKind::Equipment => write!(f, "equipment"),
            ParameterKind::Active => write!(f, "active"),
            ParameterKind::ActiveBool => write!(f, "active_bool"),
            ParameterKind::MainAggregate => write!(f, "main_aggregate"),
        }
    }
}

// ==========================================
// BaseParameter - 参数
// ==========================================
#[derive(Debug, Clone)]
pub struct BaseParameter {
    kind: ParameterKind,
    lua_name: String,               // 运行时标识
    name: String,                   // 显示名称
    value: String,                  // 当前值
    default_value: String,          // 默认值
    need_disable: bool,             // 禁用后不输出
    owner: Option<BaseObjectId>,    // 所属基础对象（回指）
}

impl BaseParameter {
    /// 创建参数,当前值取默认值（布尔类参数会规范化为 true/false）
    pub fn new(
        kind: ParameterKind,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        let default_value = normalize_value(kind, &default_value.into());
        Self {
            kind,
            lua_name: lua_name.into(),
            name: name.into(),
            value: default_value.clone(),
            default_value,
            need_disable: false,
            owner: None,
        }
    }

    pub fn equipment(
        lua_name: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(ParameterKind::Equipment, lua_name, name, value)
    }

    pub fn active(
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::new(ParameterKind::Active, lua_name, name, default_value)
    }

    pub fn active_bool(
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::new(ParameterKind::ActiveBool, lua_name, name, default_value)
    }

    pub fn main_aggregate(
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::new(ParameterKind::MainAggregate, lua_name, name, default_value)
    }

    // ===== 访问器 =====

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn lua_name(&self) -> &str {
        &self.lua_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn need_disable(&self) -> bool {
        self.need_disable
    }

    pub fn owner(&self) -> Option<BaseObjectId> {
        self.owner
    }

    /// 空参数（无运行时标识的占位参数）
    pub fn is_empty(&self) -> bool {
        self.lua_name.is_empty()
    }

    // ===== 修改器 =====

    /// 设置当前值（布尔类参数会规范化）
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = normalize_value(self.kind, &value.into());
    }

    pub fn set_need_disable(&mut self, need_disable: bool) {
        self.need_disable = need_disable;
    }

    pub(crate) fn set_owner(&mut self, owner: Option<BaseObjectId>) {
        self.owner = owner;
    }

    // ==========================================
    // prg.lua 序列化
    // ==========================================

    /// 序列化为 `<prefix><lua_name> = <value>`
    ///
    /// # 返回
    /// - 空字符串: 参数为空、值为空或已禁用,不应输出
    pub fn serialize(&self, prefix: &str) -> String {
        if self.is_empty() || self.need_disable || self.value.is_empty() {
            return String::new();
        }

        let rendered = match self.kind {
            ParameterKind::ActiveBool | ParameterKind::MainAggregate => self.value.clone(),
            ParameterKind::Active if is_numeric(&self.value) => {
                self.value.trim().to_string()
            }
            ParameterKind::Active | ParameterKind::Equipment => {
                match render_devices(&self.value) {
                    Some(devices) => devices,
                    None => return String::new(),
                }
            }
        };

        format!("{}{} = {}", prefix, self.lua_name, rendered)
    }
}

/// 有限数值才按数字输出（NaN、inf 在运行时不是数字字面量）
fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().map_or(false, f64::is_finite)
}

// 回指句柄不属于参数的值,比较时忽略
impl PartialEq for BaseParameter {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.lua_name == other.lua_name
            && self.name == other.name
            && self.value == other.value
            && self.default_value == other.default_value
            && self.need_disable == other.need_disable
    }
}

/// 布尔类参数统一为 "true"/"false",其余保持原样
fn normalize_value(kind: ParameterKind, raw: &str) -> String {
    if !kind.is_bool() {
        return raw.to_string();
    }

    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "да" => "true".to_string(),
        _ => "false".to_string(),
    }
}

/// 设备名列表 → 设备引用
///
/// 单个设备输出引用本身,多个设备输出表
fn render_devices(value: &str) -> Option<String> {
    let devices: Vec<String> = value
        .split_whitespace()
        .map(|dev| format!("{}.{}", CONTROL_MODULES_NAMESPACE, dev))
        .collect();

    match devices.len() {
        0 => None,
        1 => devices.into_iter().next(),
        _ => Some(format!("{{ {} }}", devices.join(", "))),
    }
}
