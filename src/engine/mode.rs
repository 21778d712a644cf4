// ==========================================
// 技术对象配置生成核心 - 运行模式接口
// ==========================================
// 职责: 定义外部"模式/步骤"记录的只读接口
// 说明: 模式编号、步骤编号由外部计算,引擎只读取
// ==========================================

use crate::domain::operation::Operation;

// ==========================================
// Trait: StepView
// ==========================================
pub trait StepView {
    /// 基础步骤名称（为空时不输出）
    fn base_step_name(&self) -> &str;

    /// 基础步骤运行时标识
    fn base_step_lua_name(&self) -> &str;

    /// 步骤编号
    fn step_number(&self) -> u32;
}

// ==========================================
// Trait: ModeView
// ==========================================
pub trait ModeView {
    type Step: StepView;

    /// 绑定的基础操作
    fn base_operation(&self) -> &Operation;

    /// 模式编号
    fn mode_number(&self) -> u32;

    /// 主步骤（有序）
    fn main_steps(&self) -> &[Self::Step];
}

// ==========================================
// StepRecord / ModeRecord - 简单记录实现
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub base_step_name: String,
    pub base_step_lua_name: String,
    pub step_number: u32,
}

impl StepRecord {
    pub fn new(
        base_step_name: impl Into<String>,
        base_step_lua_name: impl Into<String>,
        step_number: u32,
    ) -> Self {
        Self {
            base_step_name: base_step_name.into(),
            base_step_lua_name: base_step_lua_name.into(),
            step_number,
        }
    }

    /// 未绑定基础步骤的步骤
    pub fn unbound(step_number: u32) -> Self {
        Self::new("", "", step_number)
    }
}

impl StepView for StepRecord {
    fn base_step_name(&self) -> &str {
        &self.base_step_name
    }

    fn base_step_lua_name(&self) -> &str {
        &self.base_step_lua_name
    }

    fn step_number(&self) -> u32 {
        self.step_number
    }
}

#[derive(Debug, Clone)]
pub struct ModeRecord<'a> {
    operation: &'a Operation,
    mode_number: u32,
    steps: Vec<StepRecord>,
}

impl<'a> ModeRecord<'a> {
    pub fn new(operation: &'a Operation, mode_number: u32) -> Self {
        Self {
            operation,
            mode_number,
            steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<StepRecord>) -> Self {
        self.steps = steps;
        self
    }

    pub fn push_step(&mut self, step: StepRecord) {
        self.steps.push(step);
    }
}

impl ModeView for ModeRecord<'_> {
    type Step = StepRecord;

    fn base_operation(&self) -> &Operation {
        self.operation
    }

    fn mode_number(&self) -> u32 {
        self.mode_number
    }

    fn main_steps(&self) -> &[StepRecord] {
        &self.steps
    }
}
