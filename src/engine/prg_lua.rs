// ==========================================
// 技术对象配置生成核心 - prg.lua 生成引擎
// ==========================================
// 职责: 将基础技术对象与外部模式编号生成为 prg.lua 片段
// 红线: 只读模型,同样输入必须得到逐字节相同的输出
// 红线: 段内无条目时整段省略,不输出空括号
// ==========================================
// 缩进: 由调用方传入 prefix,每层嵌套重复一次
// ==========================================

mod equipment;
mod object_info;
mod operations;

#[cfg(test)]
mod tests;

pub use equipment::save_equipment;
pub use object_info::save_object_info;
pub use operations::{save_operations, save_operations_parameters, save_operations_steps};

/// 包装为表: `<header>\n{\n<body>}\n`,body 为空时返回空字符串
///
/// `brace_prefix` 为括号行的缩进
pub(crate) fn wrap_table(header: &str, brace_prefix: &str, body: &str, closing: &str) -> String {
    if body.is_empty() {
        return String::new();
    }

    let mut res = String::with_capacity(header.len() + body.len() + 8);
    res.push_str(header);
    res.push_str(brace_prefix);
    res.push_str("{\n");
    res.push_str(body);
    res.push_str(brace_prefix);
    res.push_str(closing);
    res
}
