//! Session：执行协作方的契约。
//!
//! 本 crate 只产出 SQL 文本与参数列表；真正的连接、执行由实现了
//! [`Session`] 的外部对象承担。行数据以 [`SqlValue`] 表达，按位置
//! （[`SqlRow`]）或按字段名（[`RowMap`]）两种形态返回。

use crate::value::SqlValue;
use std::collections::HashMap;

/// 按位置的一行数据。
pub type SqlRow = Vec<SqlValue>;

/// 按字段名的一行数据。
pub type RowMap = HashMap<String, SqlValue>;

/// 按字段名的结果集。
pub type Rows = Vec<RowMap>;

/// 驱动层错误：对本层不透明，只携带文本。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SessionError(pub String);

/// `exec` 的驱动层返回：取不到的字段为 `None`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub last_insert_id: Option<i64>,
    pub rows_affected: Option<i64>,
}

/// 单行查询结果：查询本身不返回错误，错误在取值时显现。
#[derive(Debug, Clone, PartialEq)]
pub struct SingleRow(Result<SqlRow, SessionError>);

impl SingleRow {
    pub fn new(row: Result<SqlRow, SessionError>) -> Self {
        Self(row)
    }

    /// 取出这一行；查询或扫描阶段的错误在此处返回。
    pub fn values(self) -> Result<SqlRow, SessionError> {
        self.0
    }
}

/// 执行协作方。
///
/// 同步阻塞；重试、超时、取消等策略都属于实现方，本层不做。
pub trait Session {
    /// 执行写语句。
    fn exec(&self, sql: &str, args: &[SqlValue]) -> Result<ExecOutcome, SessionError>;

    /// 查询，按位置返回行。
    fn query(&self, sql: &str, args: &[SqlValue]) -> Result<Vec<SqlRow>, SessionError>;

    /// 查询单行；错误延迟到 [`SingleRow::values`]。
    fn query_row(&self, sql: &str, args: &[SqlValue]) -> SingleRow;

    /// 查询，按字段名返回行。
    fn select(&self, sql: &str, args: &[SqlValue]) -> Result<Rows, SessionError>;

    /// 查询单行，按字段名返回。
    fn select_one(&self, sql: &str, args: &[SqlValue]) -> Result<RowMap, SessionError>;
}
