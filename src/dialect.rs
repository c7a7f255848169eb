//! Dialect：方言配置（引号符号 + 方言族），按值持有在每个 builder 上。

use std::fmt;

/// 目标引擎的方言族。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    #[default]
    MySQL,
    SQLServer,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::SQLServer => "SQLServer",
        };
        f.write_str(s)
    }
}

/// 方言配置：编译期只读；不同 builder 可各自持有不同配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub family: Family,
    /// 标识符引号符号（两侧同一符号）。
    pub quote: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::mysql()
    }
}

impl Dialect {
    pub fn mysql() -> Self {
        Self {
            family: Family::MySQL,
            quote: '`',
        }
    }

    pub fn sql_server() -> Self {
        Self {
            family: Family::SQLServer,
            quote: '"',
        }
    }

    /// 替换引号符号。
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// 为标识符加引号。
    pub fn quote(&self, name: &str) -> String {
        format!("{q}{name}{q}", q = self.quote)
    }

    /// 是否支持 `LIMIT offset,count` 子句。
    pub fn supports_limit_clause(&self) -> bool {
        self.family == Family::MySQL
    }

    /// 是否支持 `ON DUPLICATE KEY UPDATE` 式 upsert。
    pub fn supports_upsert(&self) -> bool {
        self.family == Family::MySQL
    }

    /// 执行 INSERT 后能否取回自增 ID。
    pub fn returns_last_insert_id(&self) -> bool {
        self.family == Family::MySQL
    }
}
