//! The polymorphic value accepted by emit operations.

use std::fmt;

use serde_json::Value as Json;

/// Anything that can be emitted: absent, a scalar, or structured data.
///
/// Structured data is held as a [`serde_json::Value`] array or object. JSON
/// scalars convert to the matching scalar variant and `null` to [`Value::Absent`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Structured(Json),
}

impl Value {
    /// Whether the value counts as "present" for emitting.
    ///
    /// `Absent`, `""`, `0`, `0.0`, `NaN` and `false` are falsy; arrays and
    /// objects are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Str(s) => !s.is_empty(),
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::Bool(b) => *b,
            Self::Structured(_) => true,
        }
    }

    /// Borrow the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Scalar text representation. Structured values use compact JSON here; the
/// renderer pretty-prints them through [`crate::inspect`] instead.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => f.write_str(&float_text(*x)),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Structured(json) => write!(f, "{json}"),
        }
    }
}

/// Shortest round-trip text, the way JavaScript prints numbers: integral
/// floats without a fraction, and exponent form (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`.
pub(crate) fn float_text(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        let text = if x.is_sign_negative() { "-Infinity" } else { "Infinity" };
        text.to_string()
    } else if x == 0.0 {
        // covers -0.0
        "0".to_string()
    } else if (1e-6..1e21).contains(&x.abs()) {
        // f64's Display already omits ".0" for integral values
        format!("{x}")
    } else {
        let exp = format!("{x:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Self::Float(f64::from(x))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Self::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(i: usize) -> Self {
        i64::try_from(i).map_or(Self::Float(i as f64), Self::Int)
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Absent,
            Json::Bool(b) => Self::Bool(b),
            Json::String(s) => Self::Str(s),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            structured => Self::Structured(structured),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Absent, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Absent
    }
}
