// src/domain/article/value_objects.rs
use serde_json::Value;
use std::fmt;

/// Server-assigned article identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Author payload. Opaque JSON kept exactly as the client sent it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAuthor(Value);

impl ArticleAuthor {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// `null`, `false`, `0` and `""` do not count as an author.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(n) => n.as_f64().is_some_and(|v| v == 0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }
}

impl From<Value> for ArticleAuthor {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<ArticleAuthor> for Value {
    fn from(value: ArticleAuthor) -> Self {
        value.0
    }
}
