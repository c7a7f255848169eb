//! 执行封装：把编译与执行串起来，写路径包进 [`ExecResult`]，
//! 查询路径原样透传错误。

use crate::interpolate::full_sql;
use crate::session::{RowMap, Rows, Session, SessionError, SingleRow, SqlRow};
use crate::statement::{BuildError, StatementBuilder, StatementKind};
use crate::value::SqlValue;

/// 一次执行的结果封套；返回后不再变化。
///
/// 执行路径不向外抛错：编译或驱动错误都落在 `message` 上，
/// 调用方检查 `success` 而不是错误返回值。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecResult {
    /// 语句是否执行成功。
    pub success: bool,
    /// 驱动错误代码；本层不填，保留给驱动侧扩展。
    pub code: i32,
    /// 错误提示信息。
    pub message: String,
    /// 最后产生的自增 ID（仅 Insert 且方言支持时填充）。
    pub last_insert_id: i64,
    /// 受影响的行数（仅 Delete/Update/upsert 填充）。
    pub rows_affected: i64,
    /// 最后编译出的 SQL。
    pub sql: String,
}

/// 查询路径错误：编译错误或驱动错误，均不包装。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl StatementBuilder {
    /// 执行 INSERT/DELETE/UPDATE/upsert 语句。
    pub fn exec(&mut self, db: &dyn Session) -> ExecResult {
        self.exec_args(db, &[])
    }

    /// 同 [`StatementBuilder::exec`]，`extra` 追加在编译出的参数之后
    /// （用于 WHERE 子句里手写的占位符）。
    pub fn exec_args(&mut self, db: &dyn Session, extra: &[SqlValue]) -> ExecResult {
        let mut ret = ExecResult::default();

        let sql = match self.to_sql() {
            Ok(sql) => sql,
            Err(e) => {
                ret.message = e.to_string();
                return ret;
            }
        };
        ret.sql = sql.clone();

        if self.debug {
            tracing::debug!(sql = %sql, args = ?self.args, extra = ?extra, "exec statement");
        }

        let mut all = self.args.clone();
        all.extend_from_slice(extra);

        let outcome = if self.render_full {
            match full_sql(&sql, &all) {
                Ok(inlined) => db.exec(&inlined, &[]),
                Err(e) => Err(SessionError(e.to_string())),
            }
        } else {
            db.exec(&sql, &all)
        };

        match outcome {
            Err(e) => ret.message = e.to_string(),
            Ok(out) => {
                ret.success = true;
                match self.kind {
                    StatementKind::Insert => {
                        if self.dialect.returns_last_insert_id()
                            && let Some(id) = out.last_insert_id
                        {
                            ret.last_insert_id = id;
                        }
                    }
                    StatementKind::Delete
                    | StatementKind::Update
                    | StatementKind::InsertOrUpdate => {
                        if let Some(n) = out.rows_affected {
                            ret.rows_affected = n;
                        }
                    }
                    StatementKind::Select => {}
                }
            }
        }
        ret
    }

    /// 查询记录集（按字段名）。
    pub fn query(&mut self, db: &dyn Session, args: &[SqlValue]) -> Result<Rows, QueryError> {
        let sql = self.to_sql()?;
        if self.debug {
            tracing::debug!(sql = %sql, args = ?args, "query statement");
        }
        Ok(db.select(&sql, args)?)
    }

    /// 查询单行数据（按字段名）；强制 `LIMIT 0,1`。
    pub fn query_one(&mut self, db: &dyn Session, args: &[SqlValue]) -> Result<RowMap, QueryError> {
        self.limit(1);
        let sql = self.to_sql()?;
        if self.debug {
            tracing::debug!(sql = %sql, args = ?args, "query statement");
        }
        Ok(db.select_one(&sql, args)?)
    }

    /// 查询记录集（按位置）。
    pub fn query_all_rows(
        &mut self,
        db: &dyn Session,
        args: &[SqlValue],
    ) -> Result<Vec<SqlRow>, QueryError> {
        let sql = self.to_sql()?;
        if self.debug {
            tracing::debug!(sql = %sql, args = ?args, "query statement");
        }
        Ok(db.query(&sql, args)?)
    }

    /// 查询单行数据（按位置）；编译错误折叠进返回的行。
    pub fn query_row(&mut self, db: &dyn Session, args: &[SqlValue]) -> SingleRow {
        let sql = match self.to_sql() {
            Ok(sql) => sql,
            Err(e) => return SingleRow::new(Err(SessionError(e.to_string()))),
        };
        if self.debug {
            tracing::debug!(sql = %sql, args = ?args, "query statement");
        }
        db.query_row(&sql, args)
    }
}
