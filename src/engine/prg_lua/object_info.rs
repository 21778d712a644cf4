// ==========================================
// prg.lua 生成 - 对象附加信息（罐段 + 线段）
// ==========================================

use crate::domain::registry::TechObjectRegistry;
use crate::domain::tech_object::BaseTechObject;
use crate::domain::types::ObjectType;
use tracing::debug;

use super::wrap_table;

/// 罐在清洗前需复位的参数（末项无逗号）
const TANK_RESET_BEFORE_WASH: [&str; 3] = [
    "PAR_FLOAT.V_ACCEPTING_CURRENT",
    "PAR_FLOAT.PRODUCT_TYPE",
    "PAR_FLOAT.V_ACCEPTING_SET",
];

/// 线在清洗前需复位的参数（每项带逗号）
const LINE_RESET_BEFORE_WASH: [&str; 2] = ["PAR_FLOAT.PROD_V", "PAR_FLOAT.WATER_V"];

/// 触发线复位表的操作标识
const LINE_RESET_OPERATIONS: [&str; 2] = ["FILL", "PUMPING"];

/// 保存对象附加信息: 罐段在前,线段在后
///
/// # 参数
/// - `object`: 基础技术对象
/// - `obj_name`: 写入时使用的对象名（如 `prg.tank1`）
/// - `prefix`: 缩进
/// - `registry`: 外部对象登记表（工艺单元查找、组成员解析）
pub fn save_object_info(
    object: &BaseTechObject,
    obj_name: &str,
    prefix: &str,
    registry: &dyn TechObjectRegistry,
) -> String {
    let mut res = String::new();
    res.push_str(&save_tank_additional_parameters(object, obj_name, prefix, registry));
    res.push_str(&save_line_additional_parameters(object, obj_name, prefix, registry));

    debug!(object = %obj_name, bytes = res.len(), "对象附加信息生成完成");
    res
}

/// 罐段: 仅设备单元层级输出
fn save_tank_additional_parameters(
    object: &BaseTechObject,
    obj_name: &str,
    prefix: &str,
    registry: &dyn TechObjectRegistry,
) -> String {
    if !object.is_level(ObjectType::Unit) {
        return String::new();
    }

    let mut res = String::new();
    if let Some(master) = registry.process_cell() {
        res.push_str(&format!("{}.master = {}\n", obj_name, master.qualified_name()));
    }

    let body = TANK_RESET_BEFORE_WASH
        .iter()
        .map(|par| format!("{}{}.{}", prefix, obj_name, par))
        .collect::<Vec<_>>()
        .join(",\n")
        + "\n";
    res.push_str(&wrap_table(
        &format!("{}.reset_before_wash =\n", obj_name),
        prefix,
        &body,
        "}\n",
    ));

    res
}

/// 线段: 对象组成员 + 灌装/泵送操作的复位表
fn save_line_additional_parameters(
    object: &BaseTechObject,
    obj_name: &str,
    prefix: &str,
    registry: &dyn TechObjectRegistry,
) -> String {
    let mut res = String::new();

    if object.use_groups() {
        for group in object.object_groups() {
            if group.is_inert() {
                continue;
            }

            let body: String = group
                .attached_object_names(registry)
                .iter()
                .map(|name| format!("{}{},\n", prefix, name))
                .collect();
            if body.is_empty() {
                debug!(object = %obj_name, group = %group.lua_name(), "对象组无可解析成员,跳过");
                continue;
            }

            res.push_str(&wrap_table(
                &format!("{}.{} =\n", obj_name, group.lua_name()),
                "",
                &body,
                "}\n",
            ));
        }
    }

    let contains_fill_or_pumping = object
        .operations()
        .iter()
        .any(|op| LINE_RESET_OPERATIONS.contains(&op.lua_name()));
    if object.use_groups() && contains_fill_or_pumping {
        let body: String = LINE_RESET_BEFORE_WASH
            .iter()
            .map(|par| format!("{}{}.{},\n", prefix, obj_name, par))
            .collect();
        res.push_str(&wrap_table(
            &format!("{}.reset_before_wash =\n", obj_name),
            prefix,
            &body,
            "}\n",
        ));
    }

    res
}
