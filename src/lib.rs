//! stmt-builder：按语句意图动态构造参数化 SQL 与参数列表的库。
//!
//! 核心三件套：
//! - [`StatementBuilder`]：链式配置、按意图编译、可选执行封装；
//! - [`Values`]：字段名到 [`SqlValue`] 的有序值容器；
//! - [`full_sql`]：把占位符语句渲染为字面量内联的完整语句。

pub mod dialect;
pub mod exec;
pub mod interpolate;
pub mod proc;
pub mod session;
pub mod statement;
#[cfg(test)]
mod statement_tests;
pub(crate) mod string_builder;
pub mod value;
pub mod values;

pub use crate::dialect::{Dialect, Family};
pub use crate::exec::{ExecResult, QueryError};
pub use crate::interpolate::{RenderError, full_sql};
pub use crate::proc::{ProcSession, proc_placeholder};
pub use crate::session::{
    ExecOutcome, RowMap, Rows, Session, SessionError, SingleRow, SqlRow,
};
pub use crate::statement::{BuildError, StatementBuilder, StatementKind};
pub use crate::value::{Increment, SqlValue};
pub use crate::values::Values;
