//! 插值：把模板中的 `?` 占位符替换为参数的 SQL 字面量。
//!
//! 安全警告：插值永远不如预编译参数安全；本实现用于日志输出和
//! 不支持参数化的执行路径。字符串字面量沿用“剔除单引号、反斜杠
//! 翻倍”的历史行为，不是转义——不要依赖它做注入防护。

use crate::value::SqlValue;

/// 字面量渲染错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("builder invalid sql argument type: {type_name} => {value} (sql: {sql})")]
    UnsupportedArgumentType {
        type_name: &'static str,
        value: String,
        sql: String,
    },
}

/// 返回绑定完参数的完整 SQL 语句。
///
/// 模板不含 `?` 时原样返回。否则按 `?` 切分为 N+1 个片段，第 i 个参数的
/// 字面量插在片段 i 与 i+1 之间（i < min(N, 参数个数)）；没有对应参数的
/// 多余占位符静默塌缩，多余参数被忽略。
pub fn full_sql(sql: &str, args: &[SqlValue]) -> Result<String, RenderError> {
    if !sql.contains('?') {
        return Ok(sql.to_string());
    }

    let parts: Vec<&str> = sql.split('?').collect();
    let mut out = String::with_capacity(sql.len() + args.len() * 8);

    for (i, part) in parts.iter().enumerate() {
        out.push_str(part);
        if i + 1 < parts.len() && i < args.len() {
            render_literal(&mut out, &args[i], sql)?;
        }
    }

    Ok(out)
}

fn render_literal(out: &mut String, v: &SqlValue, sql: &str) -> Result<(), RenderError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => {
            out.push('\'');
            for ch in s.chars() {
                match ch {
                    '\'' => {}
                    '\\' => out.push_str("\\\\"),
                    _ => out.push(ch),
                }
            }
            out.push('\'');
        }
        // 增量值是赋值表达式，不是字面量
        SqlValue::Increment(_) => {
            return Err(RenderError::UnsupportedArgumentType {
                type_name: v.kind_name(),
                value: format!("{v:?}"),
                sql: sql.to_string(),
            });
        }
    }
    Ok(())
}
