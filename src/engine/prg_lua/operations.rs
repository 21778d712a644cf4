// ==========================================
// prg.lua 生成 - 操作、操作步骤、操作参数
// ==========================================

use crate::engine::mode::{ModeView, StepView};
use tracing::debug;

use super::wrap_table;

/// 保存操作编号表
///
/// 每个绑定了非占位操作的模式输出一行 `<LUA_NAME 大写> = <模式编号>,`
pub fn save_operations<M: ModeView>(obj_name: &str, prefix: &str, modes: &[M]) -> String {
    let mut lines = String::new();
    for mode in modes {
        let operation = mode.base_operation();
        if operation.is_placeholder() {
            continue;
        }

        lines.push_str(&format!(
            "{}{} = {},\n",
            prefix,
            operation.lua_name().to_uppercase(),
            mode.mode_number()
        ));
    }

    let res = wrap_table(
        &format!("{}.operations = \t\t--Операции.\n", obj_name),
        prefix,
        &lines,
        "}\n",
    );
    debug!(object = %obj_name, modes = modes.len(), empty = res.is_empty(), "操作表生成完成");
    res
}

/// 保存操作步骤编号表
///
/// 每个操作一个子表,只输出绑定了基础步骤的步骤
pub fn save_operations_steps<M: ModeView>(obj_name: &str, prefix: &str, modes: &[M]) -> String {
    let double_prefix = format!("{}{}", prefix, prefix);

    let mut steps = String::new();
    for mode in modes {
        let operation = mode.base_operation();
        if operation.is_placeholder() {
            continue;
        }

        let step_lines: String = mode
            .main_steps()
            .iter()
            .filter(|step| !step.base_step_name().is_empty())
            .map(|step| {
                format!(
                    "{}{} = {},\n",
                    double_prefix,
                    step.base_step_lua_name(),
                    step.step_number()
                )
            })
            .collect();

        steps.push_str(&wrap_table(
            &format!("{}{} =\n", prefix, operation.lua_name().to_uppercase()),
            &double_prefix,
            &step_lines,
            "},\n",
        ));
    }

    let res = wrap_table(
        &format!("{}.steps = \t\t--Шаги операций.\n", obj_name),
        prefix,
        &steps,
        "}\n",
    );
    debug!(object = %obj_name, modes = modes.len(), empty = res.is_empty(), "操作步骤表生成完成");
    res
}

/// 保存操作参数表
///
/// 表名使用操作原始大小写的运行时标识;
/// 空参数、空值参数、禁用参数不输出
pub fn save_operations_parameters<M: ModeView>(
    obj_name: &str,
    prefix: &str,
    modes: &[M],
) -> String {
    let mut res = String::new();
    for mode in modes {
        let operation = mode.base_operation();
        if operation.properties().is_empty() {
            continue;
        }

        let params: String = operation
            .properties()
            .iter()
            .filter(|par| !(par.is_empty() || par.value().is_empty() || par.need_disable()))
            .map(|par| par.serialize(prefix))
            .filter(|code| !code.is_empty())
            .map(|code| code + ",\n")
            .collect();

        res.push_str(&wrap_table(
            &format!("{}.{} =\n", obj_name, operation.lua_name()),
            prefix,
            &params,
            "}\n",
        ));
    }

    debug!(object = %obj_name, modes = modes.len(), empty = res.is_empty(), "操作参数表生成完成");
    res
}
