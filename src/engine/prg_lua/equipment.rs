// ==========================================
// prg.lua 生成 - 设备
// ==========================================

use crate::domain::parameter::BaseParameter;
use tracing::debug;

/// 保存技术对象设备: 每个可输出的设备一行 `<obj_name>.<设备代码>`
pub fn save_equipment<'p, I>(obj_name: &str, equipment: I) -> String
where
    I: IntoIterator<Item = &'p BaseParameter>,
{
    let mut res = String::new();
    let mut skipped = 0usize;
    for item in equipment {
        let code = item.serialize("");
        if code.is_empty() {
            skipped += 1;
            continue;
        }

        res.push_str(&format!("{}.{}\n", obj_name, code));
    }

    debug!(object = %obj_name, skipped, "设备生成完成");
    res
}
