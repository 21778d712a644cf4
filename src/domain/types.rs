// ==========================================
// 技术对象配置生成核心 - 领域类型定义
// ==========================================
// 职责: 层级分类、对象句柄等基础类型
// 红线: 句柄只用于查找,不参与生命周期管理
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// ==========================================
// 对象类型 (S88 层级)
// ==========================================
// 层级值与下游运行时保持一致,不可随意调整
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    ProcessCell, // 工艺单元 (master)
    Unit,        // 设备单元 (罐)
    Aggregate,   // 附属设备 (泵组、加热器等)
    UserObject,  // 用户对象
}

impl ObjectType {
    /// 对应的层级整数值
    pub const fn level(self) -> i32 {
        match self {
            ObjectType::ProcessCell => 0,
            ObjectType::Unit => 1,
            ObjectType::Aggregate => 2,
            ObjectType::UserObject => 3,
        }
    }

    /// 从层级整数值解析
    pub fn from_level(level: i32) -> Option<Self> {
        match level {
            0 => Some(ObjectType::ProcessCell),
            1 => Some(ObjectType::Unit),
            2 => Some(ObjectType::Aggregate),
            3 => Some(ObjectType::UserObject),
            _ => None,
        }
    }

    /// 从名称解析（大小写不敏感,支持 snake_case 与连字符）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "process_cell" | "processcell" => Some(ObjectType::ProcessCell),
            "unit" => Some(ObjectType::Unit),
            "aggregate" => Some(ObjectType::Aggregate),
            "user_object" | "userobject" => Some(ObjectType::UserObject),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::ProcessCell => write!(f, "process_cell"),
            ObjectType::Unit => write!(f, "unit"),
            ObjectType::Aggregate => write!(f, "aggregate"),
            ObjectType::UserObject => write!(f, "user_object"),
        }
    }
}

// ==========================================
// BaseObjectId - 基础对象句柄
// ==========================================
// 参数、操作回指所属基础对象时使用
// 每次构造或克隆基础对象都会分配新句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BaseObjectId(u64);

impl BaseObjectId {
    /// 分配一个进程内唯一的新句柄
    pub fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        BaseObjectId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BaseObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base#{}", self.0)
    }
}

// ==========================================
// TechObjectId - 上级技术对象句柄
// ==========================================
// 由外部构建方分配（全局序号）,核心只负责保存与转交
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TechObjectId(pub usize);

impl fmt::Display for TechObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tech#{}", self.0)
    }
}
