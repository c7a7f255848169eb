//! Values：字段名到参数值的有序容器。

use crate::value::SqlValue;

/// 语句值容器：键为字段名，值为 [`SqlValue`]。
///
/// 键不重复（`add` 对已有键为覆盖语义）；插入顺序决定编译时字段与
/// 占位符的输出顺序。typed getter 遵循“缺键或类型不符返回零值”的
/// 宽松约定，需要严格校验的调用方先用 [`Values::exists`] / [`Values::get`]。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    entries: Vec<(String, SqlValue)>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一个值；键已存在时原位覆盖。
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<SqlValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// 删除指定键；键不存在时什么也不做。
    pub fn del(&mut self, key: &str) -> &mut Self {
        self.entries.retain(|(k, _)| k != key);
        self
    }

    /// 判断指定键是否存在。
    pub fn exists(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// 获取指定键的值。
    pub fn get(&self, key: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// 获取键的字符串值；缺键或类型不符返回空串。
    pub fn get_string(&self, key: &str) -> String {
        match self.get(key) {
            Some(SqlValue::String(s)) => s.to_string(),
            _ => String::new(),
        }
    }

    /// 获取键的有符号整形值；缺键或类型不符返回 0。
    pub fn get_i64(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(SqlValue::I64(n)) => *n,
            _ => 0,
        }
    }

    /// 获取键的无符号整形值；缺键或类型不符返回 0。
    pub fn get_u64(&self, key: &str) -> u64 {
        match self.get(key) {
            Some(SqlValue::U64(n)) => *n,
            _ => 0,
        }
    }

    /// 获取键的浮点值；缺键或类型不符返回 0.0。
    pub fn get_f64(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(SqlValue::F64(n)) => *n,
            _ => 0.0,
        }
    }

    /// 获取键的布尔值；缺键或类型不符返回 false。
    pub fn get_bool(&self, key: &str) -> bool {
        match self.get(key) {
            Some(SqlValue::Bool(b)) => *b,
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按插入顺序遍历键值对。
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for Values {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut vals = Self::new();
        for (k, v) in iter {
            vals.add(k, v);
        }
        vals
    }
}
