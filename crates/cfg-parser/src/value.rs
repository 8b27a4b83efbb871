//! Typed values and the key prefixes that select them

use serde::Serialize;

use crate::error::FieldError;

/// Decoding rule selected by the leading character of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `i` - base-10 integer, e.g. `iInterval=30`
    Int,
    /// `f` - float, e.g. `fPrice=45.67`
    Float,
    /// `b` - boolean, e.g. `bEnableSpoofing=1`
    Bool,
    /// `s` - string, e.g. `sEntryPointClass=MainMethanina`
    Str,
    /// `l` - comma-separated list, e.g. `lProxyList=127.0.0.1:3456,127.0.0.1:2333`
    List,
}

impl TypeTag {
    /// Resolve a tag from a key's leading character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Int),
            'f' => Some(Self::Float),
            'b' => Some(Self::Bool),
            's' => Some(Self::Str),
            'l' => Some(Self::List),
            _ => None,
        }
    }

    /// Decode a raw value according to this tag.
    ///
    /// `key` is carried only for error context.
    pub fn decode(self, key: &str, raw: &str) -> std::result::Result<Value, FieldError> {
        match self {
            Self::Int => raw
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|source| FieldError::InvalidInt {
                    key: key.to_string(),
                    value: raw.to_string(),
                    source,
                }),
            Self::Float => raw
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|source| FieldError::InvalidFloat {
                    key: key.to_string(),
                    value: raw.to_string(),
                    source,
                }),
            // Non-empty means true; `0` and `false` are not special-cased.
            Self::Bool => Ok(Value::Bool(!raw.is_empty())),
            Self::Str => Ok(Value::Str(raw.to_string())),
            Self::List => Ok(Value::List(raw.split(',').map(str::to_string).collect())),
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            Self::Int => 'i',
            Self::Float => 'f',
            Self::Bool => 'b',
            Self::Str => 's',
            Self::List => 'l',
        };
        write!(f, "{c}")
    }
}

/// A decoded configuration value.
///
/// Serializes untagged, so a section exports as a plain JSON object of
/// scalars and string arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }
}
