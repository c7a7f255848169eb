//! 存储过程便捷封装：拼出 `EXEC <名称> <占位符>` 并委托给 [`Session`]。

use crate::session::{RowMap, Rows, Session, SessionError, SingleRow, SqlRow};
use crate::value::SqlValue;

/// 按数量生成调用存储过程所用的参数占位符，如 `?,?,?`。
pub fn proc_placeholder(count: usize) -> String {
    let mut out = String::with_capacity(count * 2);
    for i in 0..count {
        if i > 0 {
            out.push(',');
        }
        out.push('?');
    }
    out
}

fn proc_sql(name: &str, arg_count: usize) -> String {
    format!("EXEC {name} {}", proc_placeholder(arg_count))
}

/// 存储过程调用扩展；对所有 [`Session`] 实现生效。
pub trait ProcSession: Session {
    /// 执行存储过程；有自增 ID 则返回之，否则返回受影响行数。
    fn exec_proc(&self, name: &str, args: &[SqlValue]) -> Result<i64, SessionError> {
        let out = self.exec(&proc_sql(name, args.len()), args)?;
        Ok(out.last_insert_id.or(out.rows_affected).unwrap_or(0))
    }

    /// 执行存储过程，只关心是否出错。
    fn exec_proc_ok(&self, name: &str, args: &[SqlValue]) -> Result<(), SessionError> {
        self.exec_proc(name, args)?;
        Ok(())
    }

    /// 通过存储过程查询记录集（按位置）。
    fn proc_query(&self, name: &str, args: &[SqlValue]) -> Result<Vec<SqlRow>, SessionError> {
        self.query(&proc_sql(name, args.len()), args)
    }

    /// 通过存储过程查询单行（按位置）。
    fn proc_query_row(&self, name: &str, args: &[SqlValue]) -> SingleRow {
        self.query_row(&proc_sql(name, args.len()), args)
    }

    /// 调用存储过程并取回约定的两列输出：整型状态码与提示信息。
    /// 任何失败都返回哨兵状态 `-99` 与错误文本。
    fn proc_status(&self, name: &str, args: &[SqlValue]) -> (i64, String) {
        let row = match self.proc_query_row(name, args).values() {
            Ok(row) => row,
            Err(e) => return (-99, e.to_string()),
        };
        match row.as_slice() {
            [SqlValue::I64(status), SqlValue::String(msg)] => (*status, msg.to_string()),
            _ => (-99, "proc status row must be (int, string)".to_string()),
        }
    }

    /// 通过存储过程查询记录集（按字段名）。
    fn proc_select(&self, name: &str, args: &[SqlValue]) -> Result<Rows, SessionError> {
        self.select(&proc_sql(name, args.len()), args)
    }

    /// 通过存储过程查询单行（按字段名）。
    fn proc_select_one(&self, name: &str, args: &[SqlValue]) -> Result<RowMap, SessionError> {
        self.select_one(&proc_sql(name, args.len()), args)
    }
}

impl<T: Session + ?Sized> ProcSession for T {}
