//! StatementBuilder：按语句意图（insert/delete/update/select/upsert）
//! 编译参数化 SQL 与位置参数列表。

use crate::dialect::Dialect;
use crate::interpolate::{RenderError, full_sql};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::values::Values;

/// 语句意图：构造时确定，决定编译策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Insert,
    Delete,
    Update,
    Select,
    InsertOrUpdate,
}

/// 编译错误：在任何参数绑定发生之前返回。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("builder table cannot be empty")]
    MissingTable,
    #[error("builder values cannot be empty")]
    MissingValues,
    #[error("builder deleting all data is not safe")]
    UnsafeBulkDelete,
    #[error("builder updating all data is not safe")]
    UnsafeBulkUpdate,
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// 链式配置的单次性语句构造器。
///
/// 一个实例对应一条语句：构造 → 链式配置 → 编译/执行，不做并发共享。
/// 每次 [`StatementBuilder::to_sql`] 都会重建参数列表，不跨调用累积。
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    pub(crate) kind: StatementKind,
    pub(crate) dialect: Dialect,

    pub(crate) fields: String,
    pub(crate) table: String,
    pub(crate) where_: String,
    pub(crate) group: String,
    pub(crate) order: String,
    pub(crate) limit: String,

    pub(crate) values: Values,
    pub(crate) values2: Values,

    pub(crate) ignore: bool,
    pub(crate) render_full: bool,
    pub(crate) debug: bool,
    pub(crate) allow_unsafe: bool,

    pub(crate) args: Vec<SqlValue>,
}

impl StatementBuilder {
    fn new(kind: StatementKind) -> Self {
        Self {
            kind,
            dialect: Dialect::default(),
            fields: String::new(),
            table: String::new(),
            where_: String::new(),
            group: String::new(),
            order: String::new(),
            limit: String::new(),
            values: Values::new(),
            values2: Values::new(),
            ignore: false,
            render_full: false,
            debug: false,
            allow_unsafe: false,
            args: Vec::new(),
        }
    }

    /// 构建 INSERT 语句。
    pub fn insert() -> Self {
        Self::new(StatementKind::Insert)
    }

    /// 构建 INSERT IGNORE 语句。
    pub fn insert_ignore() -> Self {
        let mut b = Self::new(StatementKind::Insert);
        b.ignore = true;
        b
    }

    /// 构建 DELETE 语句。
    pub fn delete() -> Self {
        Self::new(StatementKind::Delete)
    }

    /// 构建 UPDATE 语句。
    pub fn update() -> Self {
        Self::new(StatementKind::Update)
    }

    /// 构建 upsert 语句；仅对 MySQL 族方言有效，
    /// 内部使用 `ON DUPLICATE KEY UPDATE` 方式实现。
    pub fn insert_or_update() -> Self {
        Self::new(StatementKind::InsertOrUpdate)
    }

    /// 构建 SELECT 语句；`fields` 为输出字段列表，查询全部传 `"*"`。
    pub fn select(fields: impl Into<String>) -> Self {
        let mut b = Self::new(StatementKind::Select);
        b.fields = fields.into();
        b
    }

    /// 语句意图。
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// 设置方言配置，返回旧值。
    pub fn set_dialect(&mut self, dialect: Dialect) -> Dialect {
        std::mem::replace(&mut self.dialect, dialect)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// 设置表名。
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// `from` 的别名。
    pub fn table(&mut self, table: impl Into<String>) -> &mut Self {
        self.from(table)
    }

    /// 设置 WHERE 子句（不含 `WHERE` 关键字的筛选表达式）。
    pub fn where_(&mut self, filter: impl Into<String>) -> &mut Self {
        self.where_ = filter.into();
        self
    }

    /// 设置 GROUP BY 子句。
    pub fn group_by(&mut self, group: impl Into<String>) -> &mut Self {
        self.group = group.into();
        self
    }

    /// 设置 ORDER BY 子句。
    pub fn order_by(&mut self, order: impl Into<String>) -> &mut Self {
        self.order = order.into();
        self
    }

    /// 设置 LIMIT 子句，等价于 `limit_offset(count, 0)`。
    pub fn limit(&mut self, count: i64) -> &mut Self {
        self.limit_offset(count, 0)
    }

    /// 设置带偏移的 LIMIT 子句，渲染为 `offset,count`。
    pub fn limit_offset(&mut self, count: i64, offset: i64) -> &mut Self {
        self.limit = format!("{offset},{count}");
        self
    }

    /// 无筛选条件的 UPDATE/DELETE 默认被拒绝；此开关显式放行。
    pub fn unsafe_(&mut self, yes: bool) -> &mut Self {
        self.allow_unsafe = yes;
        self
    }

    /// 打开后在执行前输出语句与参数日志。
    pub fn debug(&mut self, yes: bool) -> &mut Self {
        self.debug = yes;
        self
    }

    /// 打开后执行路径发送字面量内联的完整语句而非参数化语句。
    pub fn full_sql(&mut self, yes: bool) -> &mut Self {
        self.render_full = yes;
        self
    }

    /// 设置（替换）主值集。
    pub fn values(&mut self, values: Values) -> &mut Self {
        self.values = values;
        self
    }

    /// 设置（替换）副值集：upsert 的更新子句来源。
    pub fn values2(&mut self, values: Values) -> &mut Self {
        self.values2 = values;
        self
    }

    /// 向主值集加入一个值。
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.values.add(key, value);
        self
    }

    /// 向副值集加入一个值。
    pub fn add_value2(&mut self, key: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        self.values2.add(key, value);
        self
    }

    /// 编译后的位置参数。
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// 编译为参数化 SQL；位置参数通过 [`StatementBuilder::args`] 获取。
    ///
    /// 每次调用都先清空参数累积器；编译错误在绑定任何参数之前返回。
    pub fn to_sql(&mut self) -> Result<String, BuildError> {
        self.args.clear();
        let mut args = Vec::new();

        let sql = match self.kind {
            StatementKind::Insert => {
                if self.table.is_empty() {
                    return Err(BuildError::MissingTable);
                }
                if self.values.is_empty() {
                    return Err(BuildError::MissingValues);
                }

                let mut fields = Vec::with_capacity(self.values.len());
                let mut marks = Vec::with_capacity(self.values.len());
                for (k, v) in self.values.iter() {
                    fields.push(self.dialect.quote(k));
                    marks.push("?");
                    // 插入时增量值没有基准可言，绑定其 delta 作为初始值
                    match v {
                        SqlValue::Increment(inc) => args.push(SqlValue::I64(inc.delta)),
                        v => args.push(v.clone()),
                    }
                }

                let verb = if self.ignore {
                    "INSERT IGNORE INTO"
                } else {
                    "INSERT INTO"
                };
                format!(
                    "{verb} {} ({}) VALUES ({})",
                    self.table,
                    fields.join(","),
                    marks.join(",")
                )
            }
            StatementKind::Delete => {
                if self.table.is_empty() {
                    String::new()
                } else {
                    if self.where_.is_empty() && !self.allow_unsafe {
                        return Err(BuildError::UnsafeBulkDelete);
                    }
                    let mut buf = StringBuilder::new();
                    buf.write_str("DELETE ");
                    buf.write_str(&self.table);
                    buf.write_leading("FROM");
                    buf.write_str(" ");
                    buf.write_str(&self.table);
                    if !self.where_.is_empty() {
                        buf.write_leading("WHERE");
                        buf.write_str(" ");
                        buf.write_str(&self.where_);
                    }
                    buf.into_string()
                }
            }
            StatementKind::Update => {
                if self.table.is_empty() {
                    String::new()
                } else {
                    if self.where_.is_empty() && !self.allow_unsafe {
                        return Err(BuildError::UnsafeBulkUpdate);
                    }
                    let assigns = assignments(&self.dialect, &self.values, &mut args);
                    let mut buf = StringBuilder::new();
                    buf.write_str("UPDATE ");
                    buf.write_str(&self.table);
                    buf.write_leading("SET");
                    buf.write_str(" ");
                    buf.write_str(&assigns);
                    if !self.where_.is_empty() {
                        buf.write_leading("WHERE");
                        buf.write_str(" ");
                        buf.write_str(&self.where_);
                    }
                    buf.into_string()
                }
            }
            StatementKind::InsertOrUpdate => {
                if self.table.is_empty() {
                    String::new()
                } else {
                    let mut fields = Vec::with_capacity(self.values.len());
                    let mut marks = Vec::with_capacity(self.values.len());
                    // 插入子句只做普通绑定，不处理增量值
                    for (k, v) in self.values.iter() {
                        fields.push(self.dialect.quote(k));
                        marks.push("?");
                        args.push(v.clone());
                    }
                    let assigns = assignments(&self.dialect, &self.values2, &mut args);
                    format!(
                        "INSERT INTO {} ({}) VALUES ({}) ON DUPLICATE KEY UPDATE {}",
                        self.table,
                        fields.join(","),
                        marks.join(","),
                        assigns
                    )
                }
            }
            StatementKind::Select => {
                let mut buf = StringBuilder::new();
                buf.write_str("SELECT ");
                buf.write_str(&self.fields);
                if !self.table.is_empty() {
                    buf.write_leading("FROM");
                    buf.write_str(" ");
                    buf.write_str(&self.table);
                }
                if !self.where_.is_empty() {
                    buf.write_leading("WHERE");
                    buf.write_str(" ");
                    buf.write_str(&self.where_);
                }
                if !self.group.is_empty() {
                    buf.write_leading("GROUP BY");
                    buf.write_str(" ");
                    buf.write_str(&self.group);
                }
                if !self.order.is_empty() {
                    buf.write_leading("ORDER BY");
                    buf.write_str(" ");
                    buf.write_str(&self.order);
                }
                // 其他方言的分页语法不同，这里有意不输出 LIMIT
                if !self.limit.is_empty() && self.dialect.supports_limit_clause() {
                    buf.write_leading("LIMIT");
                    buf.write_str(" ");
                    buf.write_str(&self.limit);
                }
                buf.into_string()
            }
        };

        self.args = args;
        Ok(sql)
    }

    /// 编译并内联参数，返回不含占位符的完整语句。
    pub fn to_full_sql(&mut self) -> Result<String, BuildError> {
        let sql = self.to_sql()?;
        Ok(full_sql(&sql, &self.args)?)
    }
}

/// 构造赋值子句（UPDATE 的 SET 与 upsert 的更新子句共用）。
///
/// 普通值输出 `字段=?` 并绑定参数；增量值把 delta 内联为字面量，
/// 输出 `字段=基准+delta`（delta 为负时直接拼接），不绑定参数。
fn assignments(dialect: &Dialect, values: &Values, args: &mut Vec<SqlValue>) -> String {
    let mut parts = Vec::with_capacity(values.len());
    for (k, v) in values.iter() {
        match v {
            SqlValue::Increment(inc) => {
                let base = if inc.base_field.is_empty() {
                    k
                } else {
                    inc.base_field.as_str()
                };
                if inc.delta >= 0 {
                    parts.push(format!("{}={}+{}", dialect.quote(k), base, inc.delta));
                } else {
                    parts.push(format!("{}={}{}", dialect.quote(k), base, inc.delta));
                }
            }
            v => {
                parts.push(format!("{}=?", dialect.quote(k)));
                args.push(v.clone());
            }
        }
    }
    parts.join(",")
}
