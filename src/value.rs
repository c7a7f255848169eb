//! SQL 参数值类型。

use std::borrow::Cow;

/// SQL 参数值（封闭枚举：不在此列的类型无法作为参数出现）。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    /// 增量赋值：只在赋值子句中有意义，不能作为字面量渲染。
    Increment(Increment),
}

/// 增量值：`字段 = 基准字段 ± delta`。
///
/// `base_field` 为空表示对当前字段自身累加。delta 可以为负，
/// 渲染时非负用 `+` 连接，负数依赖其自带符号（不会出现双重负号）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    pub delta: i64,
    pub base_field: String,
}

impl Increment {
    /// 对当前字段自身累加 `delta`。
    pub fn by(delta: i64) -> Self {
        Self {
            delta,
            base_field: String::new(),
        }
    }

    /// 以 `base_field` 为基准累加 `delta`。
    pub fn of(base_field: impl Into<String>, delta: i64) -> Self {
        Self {
            delta,
            base_field: base_field.into(),
        }
    }
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 变体名，用于错误信息。
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Increment(_) => "Increment",
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Increment> for SqlValue {
    fn from(v: Increment) -> Self {
        Self::Increment(v)
    }
}
