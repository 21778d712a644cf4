// ==========================================
// 技术对象配置生成核心 - 基础技术对象
// ==========================================
// 职责: 构建器式修改、派生分类、结构克隆
// 说明: 列表只通过切片对外只读,修改只能经由构建方法
// ==========================================

use crate::domain::attached_objects::{AllowedObjects, AttachStrategy, AttachedObjects};
use crate::domain::operation::Operation;
use crate::domain::parameter::BaseParameter;
use crate::domain::system_params::SystemParams;
use crate::domain::types::{BaseObjectId, ObjectType, TechObjectId};
use tracing::{debug, warn};

// ==========================================
// BaseTechObject - 基础技术对象
// ==========================================
#[derive(Debug)]
pub struct BaseTechObject {
    id: BaseObjectId, // 本对象句柄,参数回指使用

    // ===== 标识 =====
    name: String,          // 名称
    eplan_name: String,    // 运行时标识（ОУ）
    s88_level: i32,        // S88 层级
    basic_name: String,    // 基础功能匹配名
    binding_name: String,  // 作为附属设备绑定时的名称
    is_pid: bool,          // 是否为 PID 调节器

    // ===== 关系 =====
    owner: Option<TechObjectId>, // 上级技术对象,由构建方赋值

    // ===== 组成 =====
    operations: Vec<Operation>,
    equipment: Vec<BaseParameter>,
    aggregate_parameters: Vec<BaseParameter>,
    main_aggregate_parameter: Option<BaseParameter>,
    object_groups: Vec<AttachedObjects>,
    system_params: SystemParams,
}

impl Default for BaseTechObject {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseTechObject {
    /// 创建空的基础技术对象
    pub fn new() -> Self {
        Self {
            id: BaseObjectId::next(),
            name: String::new(),
            eplan_name: String::new(),
            s88_level: 0,
            basic_name: String::new(),
            binding_name: String::new(),
            is_pid: false,
            owner: None,
            operations: Vec::new(),
            equipment: Vec::new(),
            aggregate_parameters: Vec::new(),
            main_aggregate_parameter: None,
            object_groups: Vec::new(),
            system_params: SystemParams::new(),
        }
    }

    /// 创建属于指定上级对象的基础技术对象
    pub fn with_owner(owner: TechObjectId) -> Self {
        let mut object = Self::new();
        object.owner = Some(owner);
        object
    }

    pub fn id(&self) -> BaseObjectId {
        self.id
    }

    // ==========================================
    // 标识与分类
    // ==========================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn eplan_name(&self) -> &str {
        &self.eplan_name
    }

    pub fn set_eplan_name(&mut self, eplan_name: impl Into<String>) {
        self.eplan_name = eplan_name.into();
    }

    pub fn s88_level(&self) -> i32 {
        self.s88_level
    }

    pub fn set_s88_level(&mut self, s88_level: i32) {
        self.s88_level = s88_level;
    }

    /// 层级对应的对象类型（未知层级返回 None）
    pub fn object_type(&self) -> Option<ObjectType> {
        ObjectType::from_level(self.s88_level)
    }

    pub fn is_level(&self, object_type: ObjectType) -> bool {
        self.s88_level == object_type.level()
    }

    pub fn basic_name(&self) -> &str {
        &self.basic_name
    }

    pub fn set_basic_name(&mut self, basic_name: impl Into<String>) {
        self.basic_name = basic_name.into();
    }

    pub fn binding_name(&self) -> &str {
        &self.binding_name
    }

    pub fn set_binding_name(&mut self, binding_name: impl Into<String>) {
        self.binding_name = binding_name.into();
    }

    pub fn is_pid(&self) -> bool {
        self.is_pid
    }

    pub fn set_is_pid(&mut self, is_pid: bool) {
        self.is_pid = is_pid;
    }

    pub fn owner(&self) -> Option<TechObjectId> {
        self.owner
    }

    /// 设置上级对象,对象组一并改指
    pub fn set_owner(&mut self, owner: Option<TechObjectId>) {
        self.owner = owner;
        for group in &mut self.object_groups {
            group.set_owner(owner);
        }
    }

    // ==========================================
    // 操作登记
    // ==========================================

    /// 添加基础操作
    ///
    /// 第一次添加时先插入占位操作（名称与标识均为空）
    pub fn add_operation(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_position: i32,
    ) -> &mut Operation {
        if self.operations.is_empty() {
            let mut placeholder = Operation::empty();
            placeholder.relink(Some(self.id));
            self.operations.push(placeholder);
        }

        let mut operation = Operation::new(lua_name, name, default_position);
        operation.relink(Some(self.id));
        debug!(
            object = %self.name,
            lua_name = %operation.lua_name(),
            default_position,
            "添加基础操作"
        );

        let idx = self.operations.len();
        self.operations.push(operation);
        &mut self.operations[idx]
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// 按名称查找操作（首个匹配）
    pub fn find_operation_by_name(&self, name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.name() == name)
    }

    /// 按运行时标识查找操作（首个匹配）
    pub fn find_operation_by_lua_name(&self, lua_name: &str) -> Option<&Operation> {
        self.operations.iter().find(|op| op.lua_name() == lua_name)
    }

    /// 按运行时标识获取可修改的操作,用于补充操作属性
    pub fn operation_by_lua_name_mut(&mut self, lua_name: &str) -> Option<&mut Operation> {
        self.operations.iter_mut().find(|op| op.lua_name() == lua_name)
    }

    /// 操作名称列表（含占位操作的空名称）
    pub fn operation_names(&self) -> Vec<String> {
        self.operations.iter().map(|op| op.name().to_string()).collect()
    }

    // ==========================================
    // 参数构建
    // ==========================================

    /// 添加设备参数
    pub fn add_equipment(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        let mut equipment = BaseParameter::equipment(lua_name, name, value);
        equipment.set_owner(Some(self.id));
        self.equipment.push(equipment);
    }

    pub fn equipment(&self) -> &[BaseParameter] {
        &self.equipment
    }

    /// 按运行时标识获取可修改的设备参数（首个匹配）
    pub fn equipment_mut(&mut self, lua_name: &str) -> Option<&mut BaseParameter> {
        self.equipment.iter_mut().find(|p| p.lua_name() == lua_name)
    }

    /// 添加附属设备活动参数
    ///
    /// # 返回
    /// 已添加的参数
    pub fn add_active_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) -> &mut BaseParameter {
        let mut par = BaseParameter::active(lua_name, name, default_value);
        par.set_owner(Some(self.id));
        let idx = self.aggregate_parameters.len();
        self.aggregate_parameters.push(par);
        &mut self.aggregate_parameters[idx]
    }

    /// 添加附属设备活动布尔参数
    pub fn add_active_bool_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) {
        let mut par = BaseParameter::active_bool(lua_name, name, default_value);
        par.set_owner(Some(self.id));
        self.aggregate_parameters.push(par);
    }

    pub fn aggregate_parameters(&self) -> &[BaseParameter] {
        &self.aggregate_parameters
    }

    /// 按运行时标识获取可修改的附属设备参数（首个匹配）
    pub fn aggregate_parameter_mut(&mut self, lua_name: &str) -> Option<&mut BaseParameter> {
        self.aggregate_parameters
            .iter_mut()
            .find(|p| p.lua_name() == lua_name)
    }

    /// 设置附属设备主参数（替换已有的主参数）
    pub fn add_main_aggregate_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        default_value: impl Into<String>,
    ) {
        let mut par = BaseParameter::main_aggregate(lua_name, name, default_value);
        par.set_owner(Some(self.id));
        if let Some(previous) = self.main_aggregate_parameter.replace(par) {
            debug!(
                object = %self.name,
                previous = %previous.lua_name(),
                "主参数被替换"
            );
        }
    }

    pub fn main_aggregate_parameter(&self) -> Option<&BaseParameter> {
        self.main_aggregate_parameter.as_ref()
    }

    pub fn main_aggregate_parameter_mut(&mut self) -> Option<&mut BaseParameter> {
        self.main_aggregate_parameter.as_mut()
    }

    // ==========================================
    // 对象组
    // ==========================================

    /// 添加对象组
    ///
    /// # 参数
    /// - `allowed_objects`: "all" / "units" / "aggregates",
    ///   其他值按 "aggregates" 处理
    pub fn add_object_group(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        allowed_objects: &str,
    ) {
        let allowed = AllowedObjects::from_spec(allowed_objects);
        if allowed == AllowedObjects::Default {
            warn!(
                object = %self.name,
                allowed_objects = %allowed_objects,
                "无法识别的对象组类型,按 aggregates 处理"
            );
        }

        let strategy = AttachStrategy::new(name, lua_name, allowed);
        self.object_groups
            .push(AttachedObjects::new(String::new(), self.owner, strategy));
    }

    pub fn object_groups(&self) -> &[AttachedObjects] {
        &self.object_groups
    }

    /// 按运行时标识获取可修改的对象组,用于写入组值
    pub fn object_group_mut(&mut self, lua_name: &str) -> Option<&mut AttachedObjects> {
        self.object_groups.iter_mut().find(|g| g.lua_name() == lua_name)
    }

    /// 是否使用对象组
    pub fn use_groups(&self) -> bool {
        !self.object_groups.is_empty()
    }

    /// 是否可以附属到其他对象下
    pub fn is_attachable(&self) -> bool {
        self.use_groups() || self.is_level(ObjectType::Unit) || self.is_level(ObjectType::Aggregate)
    }

    // ==========================================
    // 系统参数
    // ==========================================

    /// 添加系统参数
    ///
    /// # 返回
    /// 分配的序号
    pub fn add_system_parameter(
        &mut self,
        lua_name: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        meter: impl Into<String>,
    ) -> u32 {
        self.system_params.add(lua_name, name, value, meter)
    }

    pub fn system_params(&self) -> &SystemParams {
        &self.system_params
    }

    pub fn system_params_mut(&mut self) -> &mut SystemParams {
        &mut self.system_params
    }

    // ==========================================
    // 结构克隆
    // ==========================================

    /// 克隆并归属到新的上级对象（对象组一并改指）
    pub fn clone_for(&self, owner: TechObjectId) -> Self {
        let mut cloned = self.clone();
        cloned.set_owner(Some(owner));
        cloned
    }
}

// ==========================================
// Clone: 逐元素重建,回指改到新副本
// ==========================================
impl Clone for BaseTechObject {
    fn clone(&self) -> Self {
        let id = BaseObjectId::next();

        let relink = |par: &BaseParameter| {
            let mut cloned = par.clone();
            cloned.set_owner(Some(id));
            cloned
        };

        let operations = self
            .operations
            .iter()
            .map(|op| {
                let mut cloned = op.clone();
                cloned.relink(Some(id));
                cloned
            })
            .collect();

        let object_groups = self
            .object_groups
            .iter()
            .map(|group| {
                let strategy = AttachStrategy::new(
                    group.strategy().name(),
                    group.strategy().lua_name(),
                    group.strategy().allowed_objects(),
                );
                AttachedObjects::new(group.value(), group.owner(), strategy)
            })
            .collect();

        Self {
            id,
            name: self.name.clone(),
            eplan_name: self.eplan_name.clone(),
            s88_level: self.s88_level,
            basic_name: self.basic_name.clone(),
            binding_name: self.binding_name.clone(),
            is_pid: self.is_pid,
            owner: self.owner,
            operations,
            equipment: self.equipment.iter().map(relink).collect(),
            aggregate_parameters: self.aggregate_parameters.iter().map(relink).collect(),
            main_aggregate_parameter: self.main_aggregate_parameter.as_ref().map(relink),
            object_groups,
            system_params: self.system_params.clone(),
        }
    }
}

// 句柄不属于对象的值,比较时忽略
impl PartialEq for BaseTechObject {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.eplan_name == other.eplan_name
            && self.s88_level == other.s88_level
            && self.basic_name == other.basic_name
            && self.binding_name == other.binding_name
            && self.is_pid == other.is_pid
            && self.owner == other.owner
            && self.operations == other.operations
            && self.equipment == other.equipment
            && self.aggregate_parameters == other.aggregate_parameters
            && self.main_aggregate_parameter == other.main_aggregate_parameter
            && self.object_groups == other.object_groups
            && self.system_params == other.system_params
    }
}
