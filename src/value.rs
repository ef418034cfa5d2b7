//! Semantic value kinds and the typed payloads that flow from the parser
//! into model properties.
use std::fmt::{Display, Formatter};

/// The semantic type of a bindable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Str,
    Int,
    Bool,
    Float,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Str => "string",
            ValueKind::Int => "integer",
            ValueKind::Bool => "boolean",
            ValueKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// A typed value on its way to a model property: either parsed from the
/// command line or taken from a descriptor's default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
            Value::Float(_) => ValueKind::Float,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(text) => write!(f, "{text}"),
            Value::Int(number) => write!(f, "{number}"),
            Value::Bool(flag) => write!(f, "{flag}"),
            Value::Float(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

/// A Rust type a leaf property can have. Ties the property to a [`ValueKind`]
/// and converts bound values into it.
///
/// Implementations must accept every [`Value`] of their own `KIND`; a value
/// of any other kind never reaches `from_value` through a binder.
pub trait BindTarget: Sized + 'static {
    const KIND: ValueKind;

    fn from_value(value: &Value) -> Option<Self>;
}

impl BindTarget for String {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl BindTarget for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(number) => Some(*number),
            _ => None,
        }
    }
}

impl BindTarget for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl BindTarget for f64 {
    const KIND: ValueKind = ValueKind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }
}
