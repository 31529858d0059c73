// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

mod conversion;
mod reference;
mod section;
mod view;

pub use reference::{Reference, Scope};
pub use section::Section;
pub use view::SectionView;

/// The fixed type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValueType {
    Boolean,
    Float,
    Integer,
    Null,
    String,
    List,
    Reference,
    Section,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Boolean => "BOOLEAN",
            ValueType::Float => "FLOAT",
            ValueType::Integer => "INTEGER",
            ValueType::Null => "NULL",
            ValueType::String => "STRING",
            ValueType::List => "LIST",
            ValueType::Reference => "REFERENCE",
            ValueType::Section => "SECTION",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Float(f64),
    Integer(i64),
    String(String),
    Null,
    List(Vec<Value>),
    Reference(Reference),
    Section(Section),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Boolean(_) => ValueType::Boolean,
            Value::Float(_) => ValueType::Float,
            Value::Integer(_) => ValueType::Integer,
            Value::String(_) => ValueType::String,
            Value::Null => ValueType::Null,
            Value::List(_) => ValueType::List,
            Value::Reference(_) => ValueType::Reference,
            Value::Section(_) => ValueType::Section,
        }
    }

    /// Replace the payload in place. The new value must have the same type.
    pub fn update_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if value.value_type() != self.value_type() {
            return Err(ForgeError::TypeMismatch {
                expected: self.value_type(),
                found: value.value_type(),
            });
        }
        *self = value;
        Ok(())
    }

    /// The value this one stands for: a reference is followed to its target,
    /// anything else is returned as is. `root` is the document root.
    pub fn get_value<'a>(&'a self, root: &'a Section) -> Result<&'a Value> {
        match self {
            Value::Reference(reference) => reference.resolve(root),
            other => Ok(other),
        }
    }

    fn mismatch(&self, expected: ValueType) -> ForgeError {
        ForgeError::TypeMismatch {
            expected,
            found: self.value_type(),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueType::Boolean)),
        }
    }

    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => Err(other.mismatch(ValueType::Integer)),
        }
    }

    pub fn as_float(&self) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            other => Err(other.mismatch(ValueType::Float)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueType::String)),
        }
    }

    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch(ValueType::List)),
        }
    }

    pub fn as_section(&self) -> Result<&Section> {
        match self {
            Value::Section(section) => Ok(section),
            other => Err(other.mismatch(ValueType::Section)),
        }
    }

    pub fn as_reference(&self) -> Result<&Reference> {
        match self {
            Value::Reference(reference) => Ok(reference),
            other => Err(other.mismatch(ValueType::Reference)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Section> for Value {
    fn from(section: Section) -> Self {
        Value::Section(section)
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        Value::Reference(reference)
    }
}
