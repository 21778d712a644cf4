// ==========================================
// 配置层集成测试
// ==========================================
// 测试目标: 从文件加载生成设置与基础对象目录,实例化并生成
// ==========================================


use tech_object_core::config::{ConfigError, GeneratorSettings, ObjectCatalog};
use tech_object_core::engine::ModeRecord;
use tech_object_core::{save_object_info, save_operations, ObjectType, TechObjectId};
use test_helpers::{create_test_registry, write_temp_file};

const CATALOG_JSON: &str = r#"
{
    "templates": [
        {
            "name": "Линия",
            "eplan_name": "LINE",
            "s88_level": "process_cell",
            "basic_name": "line",
            "operations": [
                { "lua_name": "PUMPING", "name": "Перекачка", "default_position": 1 }
            ],
            "object_groups": [
                { "lua_name": "line_tanks", "name": "Танки линии", "allowed_objects": "units" },
                { "lua_name": "pumps", "name": "Насосы", "allowed_objects": "something-else" }
            ]
        }
    ]
}
"#;

#[test]
fn test_load_catalog_from_file_and_render() {
    let (_temp_file, path) = write_temp_file(CATALOG_JSON).expect("Failed to write catalog");
    let catalog = ObjectCatalog::from_path(&path).expect("Failed to load catalog");
    assert_eq!(catalog.names(), vec!["Линия"]);

    let mut line = catalog
        .instantiate("line", TechObjectId(5))
        .expect("line template should exist");
    assert!(line.is_level(ObjectType::ProcessCell));
    assert!(line.is_attachable());

    if let Some(group) = line.object_group_mut("line_tanks") {
        group.set_value("1 2 3");
    }
    if let Some(group) = line.object_group_mut("pumps") {
        group.set_value("1 2 3");
    }

    let registry = create_test_registry();
    let text = save_object_info(&line, "prg.line1", "\t", &registry);
    assert_eq!(
        text,
        "prg.line1.line_tanks =\n\
         {\n\
         \tprg.tank1,\n\
         \tprg.tank2,\n\
         }\n\
         prg.line1.pumps =\n\
         {\n\
         \tprg.pump1,\n\
         }\n\
         prg.line1.reset_before_wash =\n\
         \t{\n\
         \tprg.line1.PAR_FLOAT.PROD_V,\n\
         \tprg.line1.PAR_FLOAT.WATER_V,\n\
         \t}\n"
    );

    let ops = line.operations();
    let modes = vec![ModeRecord::new(&ops[0], 1), ModeRecord::new(&ops[1], 1)];
    assert_eq!(
        save_operations("prg.line1", "\t", &modes),
        "prg.line1.operations = \t\t--Операции.\n\t{\n\tPUMPING = 1,\n\t}\n"
    );

    // 模板本身未被实例修改
    let template = catalog.template("Линия").expect("template");
    assert!(template.object_groups().iter().all(|g| g.value().is_empty()));
}

#[test]
fn test_missing_catalog_file() {
    let err = ObjectCatalog::from_path("/definitely/not/here/catalog.json").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));
}

#[test]
fn test_load_settings_from_file() {
    let (_temp_file, path) =
        write_temp_file(r#"{ "prefix": "  " }"#).expect("Failed to write settings");
    let settings = GeneratorSettings::from_path(&path).expect("Failed to load settings");
    assert_eq!(settings.prefix, "  ");
}

#[test]
fn test_malformed_catalog_file() {
    let (_temp_file, path) = write_temp_file("{ \"templates\": [ ").expect("Failed to write");
    let err = ObjectCatalog::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
