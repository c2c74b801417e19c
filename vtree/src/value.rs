//! Dynamically-typed property values.

use std::fmt;

/// A dynamic value held by a tree node property.
///
/// The first seven kinds are editable through the debugger; `Object`,
/// `Array`, `Binary`, and `Method` are displayed read-only.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Var {
    #[default]
    Void,
    Undefined,
    Int(i32),
    Int64(i64),
    Bool(bool),
    Double(f64),
    String(String),
    Object,
    Array(Vec<Var>),
    Binary(Vec<u8>),
    Method,
}

impl Var {
    /// Display name of this value's runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Var::Void => "Void",
            Var::Undefined => "Undefined",
            Var::Int(_) => "Int",
            Var::Int64(_) => "Int64",
            Var::Bool(_) => "Bool",
            Var::Double(_) => "Double",
            Var::String(_) => "String",
            Var::Object => "Object",
            Var::Array(_) => "Array",
            Var::Binary(_) => "BinaryData",
            Var::Method => "Method",
        }
    }

    /// Whether the debugger can write a new value of this kind from text.
    pub fn is_editable(&self) -> bool {
        matches!(
            self,
            Var::Void
                | Var::Undefined
                | Var::Int(_)
                | Var::Int64(_)
                | Var::Bool(_)
                | Var::Double(_)
                | Var::String(_)
        )
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Var::Int(_) | Var::Int64(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Var::Bool(_))
    }

    /// Truthiness used by the toggle control.
    pub fn as_bool(&self) -> bool {
        match self {
            Var::Bool(b) => *b,
            Var::Int(i) => *i != 0,
            Var::Int64(i) => *i != 0,
            Var::Double(d) => *d != 0.0,
            Var::String(s) => !s.is_empty(),
            _ => false,
        }
    }

    /// Parse `text` as a new value of the same runtime kind as `self`.
    ///
    /// Returns `None` when the current kind cannot absorb a text edit
    /// (Void, Undefined, Object, Array, Binary, Method); the caller discards
    /// the edit and redisplays the prior value.
    pub fn parse_as_self(&self, text: &str) -> Option<Var> {
        match self {
            Var::Int(_) => Some(Var::Int(parse_leading_i32(text))),
            Var::Int64(_) => Some(Var::Int64(parse_leading_i64(text))),
            Var::Bool(_) => Some(Var::Bool(parse_bool(text))),
            Var::Double(_) => Some(Var::Double(parse_leading_f64(text))),
            Var::String(_) => Some(Var::String(text.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Void => Ok(()),
            Var::Undefined => f.write_str("undefined"),
            Var::Int(i) => write!(f, "{i}"),
            Var::Int64(i) => write!(f, "{i}"),
            // Bools render as 1/0 and the bool parser accepts "1" back.
            Var::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
            Var::Double(d) => write!(f, "{d}"),
            Var::String(s) => f.write_str(s),
            Var::Object => f.write_str("Object"),
            Var::Array(items) => write!(f, "Array[{}]", items.len()),
            Var::Binary(bytes) => write!(f, "{} bytes", bytes.len()),
            Var::Method => f.write_str("Method"),
        }
    }
}

impl From<i32> for Var {
    fn from(v: i32) -> Self {
        Var::Int(v)
    }
}

impl From<i64> for Var {
    fn from(v: i64) -> Self {
        Var::Int64(v)
    }
}

impl From<bool> for Var {
    fn from(v: bool) -> Self {
        Var::Bool(v)
    }
}

impl From<f64> for Var {
    fn from(v: f64) -> Self {
        Var::Double(v)
    }
}

impl From<String> for Var {
    fn from(v: String) -> Self {
        Var::String(v)
    }
}

impl From<&str> for Var {
    fn from(v: &str) -> Self {
        Var::String(v.to_string())
    }
}

/// Text that reads as `true`, case-insensitively. Everything else is `false`.
const TRUE_WORDS: [&str; 5] = ["true", "yes", "definitely", "1", "1.0"];

pub fn parse_bool(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    TRUE_WORDS.contains(&lower.as_str())
}

/// Parse the leading decimal integer of `text`, ignoring trailing garbage.
/// No leading digits yields 0. Out-of-range literals saturate.
pub fn parse_leading_i64(text: &str) -> i64 {
    let t = text.trim_start();
    let (negative, rest) = match t.as_bytes().first() {
        Some(b'-') => (true, &t[1..]),
        Some(b'+') => (false, &t[1..]),
        _ => (false, t),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return 0;
    }
    let mut value: i64 = 0;
    for b in rest[..digits_len].bytes() {
        let d = (b - b'0') as i64;
        value = match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }
    if negative {
        // i64::MIN magnitude overflows on the positive side; saturation above
        // already covered it.
        -value
    } else {
        value
    }
}

pub fn parse_leading_i32(text: &str) -> i32 {
    parse_leading_i64(text).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Parse the leading floating-point literal of `text`. No parseable prefix
/// yields 0.0.
pub fn parse_leading_f64(text: &str) -> f64 {
    let t = text.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits = bytes[exp_end..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    t[..end].parse().unwrap_or(0.0)
}
