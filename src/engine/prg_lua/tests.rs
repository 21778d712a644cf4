use super::*;
use crate::domain::parameter::BaseParameter;
use crate::domain::registry::{ObjectRegistry, RegisteredObject};
use crate::domain::tech_object::BaseTechObject;
use crate::domain::types::ObjectType;
use crate::engine::mode::{ModeRecord, StepRecord};

// ==========================================
// 测试辅助函数
// ==========================================

/// 登记表: 1、2 为罐,3 为泵组,带工艺单元
fn create_test_registry() -> ObjectRegistry {
    let mut registry = ObjectRegistry::new();
    registry.register(1, RegisteredObject::new("TANK", 1, ObjectType::Unit));
    registry.register(2, RegisteredObject::new("TANK", 2, ObjectType::Unit));
    registry.register(3, RegisteredObject::new("PUMP", 1, ObjectType::Aggregate));
    registry.set_process_cell(Some(RegisteredObject::new("MASTER", 1, ObjectType::ProcessCell)));
    registry
}

fn create_test_unit() -> BaseTechObject {
    let mut tank = BaseTechObject::new();
    tank.set_name("Танк");
    tank.set_eplan_name("TANK");
    tank.set_s88_level(ObjectType::Unit.level());
    tank
}

fn create_test_line() -> BaseTechObject {
    let mut line = BaseTechObject::new();
    line.set_name("Линия");
    line.set_eplan_name("LINE");
    line.set_s88_level(ObjectType::ProcessCell.level());
    line
}

// ==========================================
// 对象附加信息
// ==========================================

#[test]
fn test_group_members_exact_output() {
    let mut line = create_test_line();
    line.add_object_group("attached_objects", "Привязанные объекты", "units");
    if let Some(group) = line.object_group_mut("attached_objects") {
        group.set_value("1 2");
    }

    let text = save_object_info(&line, "prg.line1", "\t", &create_test_registry());
    assert_eq!(
        text,
        "prg.line1.attached_objects =\n{\n\tprg.tank1,\n\tprg.tank2,\n}\n"
    );
}

#[test]
fn test_inert_group_is_not_rendered() {
    let mut line = create_test_line();
    line.add_object_group("attached_objects", "Привязанные объекты", "all");

    let text = save_object_info(&line, "prg.line1", "\t", &create_test_registry());
    assert_eq!(text, "");
}

#[test]
fn test_group_without_resolvable_members_is_omitted() {
    let mut line = create_test_line();
    line.add_object_group("pumps", "Насосы", "aggregates");
    if let Some(group) = line.object_group_mut("pumps") {
        group.set_value("1 2 42");
    }

    let text = save_object_info(&line, "prg.line1", "\t", &create_test_registry());
    assert_eq!(text, "");
}

#[test]
fn test_unit_with_process_cell() {
    let tank = create_test_unit();
    let text = save_object_info(&tank, "prg.tank1", "\t", &create_test_registry());

    assert_eq!(
        text,
        "prg.tank1.master = prg.master1\n\
         prg.tank1.reset_before_wash =\n\
         \t{\n\
         \tprg.tank1.PAR_FLOAT.V_ACCEPTING_CURRENT,\n\
         \tprg.tank1.PAR_FLOAT.PRODUCT_TYPE,\n\
         \tprg.tank1.PAR_FLOAT.V_ACCEPTING_SET\n\
         \t}\n"
    );
    assert_eq!(text.matches(".master = ").count(), 1);
    assert_eq!(text.matches("reset_before_wash").count(), 1);
}

#[test]
fn test_unit_without_process_cell() {
    let tank = create_test_unit();
    let text = save_object_info(&tank, "prg.tank1", "\t", &ObjectRegistry::new());

    assert!(!text.contains("master"));
    assert!(text.starts_with("prg.tank1.reset_before_wash =\n"));
}

#[test]
fn test_non_unit_levels_skip_tank_section() {
    let registry = create_test_registry();
    for level in [
        ObjectType::ProcessCell,
        ObjectType::Aggregate,
        ObjectType::UserObject,
    ] {
        let mut object = create_test_unit();
        object.set_s88_level(level.level());
        object.add_operation("WASH", "Мойка", 1);
        assert_eq!(save_object_info(&object, "prg.obj1", "\t", &registry), "");
    }
}

#[test]
fn test_line_reset_table_requires_groups_and_fill_or_pumping() {
    let registry = create_test_registry();

    let mut line = create_test_line();
    line.add_operation("PUMPING", "Перекачка", 1);
    assert_eq!(save_object_info(&line, "prg.line1", "\t", &registry), "");

    line.add_object_group("attached_objects", "Агрегаты", "aggregates");
    assert_eq!(
        save_object_info(&line, "prg.line1", "\t", &registry),
        "prg.line1.reset_before_wash =\n\
         \t{\n\
         \tprg.line1.PAR_FLOAT.PROD_V,\n\
         \tprg.line1.PAR_FLOAT.WATER_V,\n\
         \t}\n"
    );

    let mut no_fill = create_test_line();
    no_fill.add_operation("fill", "Наполнение", 1);
    no_fill.add_object_group("attached_objects", "Агрегаты", "aggregates");
    assert_eq!(save_object_info(&no_fill, "prg.line1", "\t", &registry), "");
}

#[test]
fn test_unit_with_groups_emits_both_reset_tables() {
    let mut tank = create_test_unit();
    tank.add_operation("FILL", "Наполнение", 1);
    tank.add_object_group("attached_objects", "Агрегаты", "all");
    if let Some(group) = tank.object_group_mut("attached_objects") {
        group.set_value("3");
    }

    let text = save_object_info(&tank, "prg.tank1", "  ", &create_test_registry());
    assert_eq!(text.matches("reset_before_wash").count(), 2);

    let tank_table = text.find("V_ACCEPTING_CURRENT").unwrap_or(usize::MAX);
    let group_table = text.find("attached_objects").unwrap_or(0);
    let line_table = text.find("PROD_V").unwrap_or(0);
    assert!(tank_table < group_table);
    assert!(group_table < line_table);
    assert!(text.contains("prg.tank1.attached_objects =\n{\n  prg.pump1,\n}\n"));
}

// ==========================================
// 操作
// ==========================================

#[test]
fn test_save_operations_exact_output() {
    let mut object = create_test_unit();
    object.add_operation("fill", "Наполнение", 1);

    let ops = object.operations();
    let modes = vec![ModeRecord::new(&ops[0], 1), ModeRecord::new(&ops[1], 3)];

    assert_eq!(
        save_operations("prg.tank1", "\t", &modes),
        "prg.tank1.operations = \t\t--Операции.\n\t{\n\tFILL = 3,\n\t}\n"
    );
}

#[test]
fn test_save_operations_empty() {
    let mut object = create_test_unit();
    object.add_operation("fill", "Наполнение", 1);
    let ops = object.operations();

    let only_placeholder = vec![ModeRecord::new(&ops[0], 1)];
    assert_eq!(save_operations("prg.tank1", "\t", &only_placeholder), "");

    let none: Vec<ModeRecord<'_>> = Vec::new();
    assert_eq!(save_operations("prg.tank1", "\t", &none), "");
}

#[test]
fn test_save_operations_steps() {
    let mut object = create_test_unit();
    object.add_operation("fill", "Наполнение", 1);
    object.add_operation("WASH", "Мойка", 2);
    let ops = object.operations();

    let modes = vec![
        ModeRecord::new(&ops[0], 1).with_steps(vec![StepRecord::new("Шаг", "IGNORED", 1)]),
        ModeRecord::new(&ops[1], 2).with_steps(vec![
            StepRecord::unbound(1),
            StepRecord::new("Наполнение в танк", "IN_TANK", 2),
            StepRecord::new("Сброс", "DRAIN", 3),
        ]),
        ModeRecord::new(&ops[2], 3).with_steps(vec![StepRecord::unbound(1)]),
    ];

    assert_eq!(
        save_operations_steps("prg.tank1", "\t", &modes),
        "prg.tank1.steps = \t\t--Шаги операций.\n\
         \t{\n\
         \tFILL =\n\
         \t\t{\n\
         \t\tIN_TANK = 2,\n\
         \t\tDRAIN = 3,\n\
         \t\t},\n\
         \t}\n"
    );
}

#[test]
fn test_save_operations_steps_all_empty() {
    let mut object = create_test_unit();
    object.add_operation("WASH", "Мойка", 1);
    let ops = object.operations();

    let mut mode = ModeRecord::new(&ops[1], 1);
    mode.push_step(StepRecord::unbound(1));
    mode.push_step(StepRecord::unbound(2));

    assert_eq!(save_operations_steps("prg.tank1", "\t", &[mode]), "");
}

#[test]
fn test_save_operations_parameters() {
    let mut object = create_test_unit();
    {
        let fill = object.add_operation("fill", "Наполнение", 1);
        fill.add_active_parameter("fill_limit", "Лимит", "90");
        fill.add_active_parameter("no_value", "Без значения", "");
        fill.add_active_parameter("disabled", "Отключен", "5").set_need_disable(true);
        fill.add_active_bool_parameter("need_drain", "Слив", "true");
        fill.add_property(BaseParameter::active("", "Пустой", "1"));
    }
    {
        let wash = object.add_operation("WASH", "Мойка", 2);
        wash.add_active_parameter("off", "Отключен", "1").set_need_disable(true);
    }
    let ops = object.operations();
    let modes: Vec<ModeRecord<'_>> = ops
        .iter()
        .enumerate()
        .map(|(i, op)| ModeRecord::new(op, i as u32))
        .collect();

    assert_eq!(
        save_operations_parameters("prg.tank1", "\t", &modes),
        "prg.tank1.fill =\n\
         \t{\n\
         \tfill_limit = 90,\n\
         \tneed_drain = true,\n\
         \t}\n"
    );
}

// ==========================================
// 设备
// ==========================================

#[test]
fn test_save_equipment() {
    let mut object = create_test_unit();
    object.add_equipment("hatch", "Люк", "TANK1GS1");
    object.add_equipment("LS_up", "Верхний уровень", "");
    object.add_equipment("M1", "Мешалка", "TANK1M1 TANK1M2");

    assert_eq!(
        save_equipment("prg.tank1", object.equipment()),
        "prg.tank1.hatch = prg.control_modules.TANK1GS1\n\
         prg.tank1.M1 = { prg.control_modules.TANK1M1, prg.control_modules.TANK1M2 }\n"
    );
}

// ==========================================
// 通用性质
// ==========================================

#[test]
fn test_empty_model_produces_nothing() {
    let object = BaseTechObject::new();
    let registry = create_test_registry();
    let modes: Vec<ModeRecord<'_>> = Vec::new();

    assert_eq!(save_object_info(&object, "prg.obj1", "\t", &registry), "");
    assert_eq!(save_operations("prg.obj1", "\t", &modes), "");
    assert_eq!(save_operations_steps("prg.obj1", "\t", &modes), "");
    assert_eq!(save_operations_parameters("prg.obj1", "\t", &modes), "");
    assert_eq!(save_equipment("prg.obj1", object.equipment()), "");
}

#[test]
fn test_generation_is_idempotent() {
    let mut object = create_test_unit();
    object.add_operation("FILL", "Наполнение", 1).add_active_parameter("v", "V", "1");
    object.add_equipment("hatch", "Люк", "TANK1GS1");
    object.add_object_group("attached_objects", "Агрегаты", "all");
    if let Some(group) = object.object_group_mut("attached_objects") {
        group.set_value("3 1");
    }
    let registry = create_test_registry();
    let ops = object.operations();
    let modes = vec![
        ModeRecord::new(&ops[1], 1).with_steps(vec![StepRecord::new("Шаг", "STEP", 1)]),
    ];

    let render = || {
        [
            save_object_info(&object, "prg.tank1", "\t", &registry),
            save_operations("prg.tank1", "\t", &modes),
            save_operations_steps("prg.tank1", "\t", &modes),
            save_operations_parameters("prg.tank1", "\t", &modes),
            save_equipment("prg.tank1", object.equipment()),
        ]
        .concat()
    };

    let first = render();
    assert!(!first.is_empty());
    assert_eq!(first, render());
}
