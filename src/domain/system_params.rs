// ==========================================
// 技术对象配置生成核心 - 系统参数
// ==========================================
// 职责: 有序系统参数集合,插入时分配顺序序号
// 红线: 序号不复用、不重排
// ==========================================

use serde::{Deserialize, Serialize};

/// 首个系统参数的序号
pub const FIRST_SYSTEM_PARAM_IDX: u32 = 1;

// ==========================================
// SystemParam - 系统参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParam {
    pub idx: u32,         // 插入时分配的序号
    pub lua_name: String, // 运行时标识
    pub name: String,     // 显示名称
    pub value: f64,       // 数值
    pub meter: String,    // 计量单位
}

// ==========================================
// SystemParams - 系统参数集合
// ==========================================
// 派生 Clone 同时复制已记录的序号与下一个序号
#[derive(Debug, Clone, PartialEq)]
pub struct SystemParams {
    params: Vec<SystemParam>,
    next_idx: u32,
}

impl Default for SystemParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemParams {
    pub fn new() -> Self {
        Self {
            params: Vec::new(),
            next_idx: FIRST_SYSTEM_PARAM_IDX,
        }
    }

    /// 下一个待分配的序号
    pub fn next_idx(&self) -> u32 {
        self.next_idx
    }

    /// 添加系统参数
    ///
    /// # 返回
    /// 分配给该参数的序号
    pub fn add(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        meter: impl Into<String>,
    ) -> u32 {
        let idx = self.next_idx;
        self.next_idx += 1;
        self.params.push(SystemParam {
            idx,
            lua_name: lua_name.into(),
            name: name.into(),
            value,
            meter: meter.into(),
        });
        idx
    }

    pub fn iter(&self) -> impl Iterator<Item = &SystemParam> {
        self.params.iter()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get_by_lua_name(&self, lua_name: &str) -> Option<&SystemParam> {
        self.params.iter().find(|p| p.lua_name == lua_name)
    }

    pub fn get_by_idx(&self, idx: u32) -> Option<&SystemParam> {
        self.params.iter().find(|p| p.idx == idx)
    }

    /// 修改参数值
    ///
    /// # 返回
    /// - `true`: 找到并已修改
    /// - `false`: 参数不存在
    pub fn set_value(&mut self, lua_name: &str, value: f64) -> bool {
        match self.params.iter_mut().find(|p| p.lua_name == lua_name) {
            Some(param) => {
                param.value = value;
                true
            }
            None => false,
        }
    }
}
