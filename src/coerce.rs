//! String-to-number coercion.

use std::fmt;

/// Result of coercing a string: a number when one could be parsed, otherwise
/// the input text unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Int(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Coerced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coerced::Int(n) => write!(f, "{n}"),
            Coerced::Float(x) => write!(f, "{x}"),
            Coerced::Text(s) => f.write_str(s),
        }
    }
}

/// Coerce a string to a number where possible.
///
/// Strings made entirely of ASCII digits parse as [`Coerced::Int`]; anything
/// else attempts a float parse, falling back to [`Coerced::Text`] with the
/// input unchanged. The integer fast path is deliberately non-negative only:
/// `"-3"` takes the float route and yields `-3.0`, not an integer. Digit
/// strings too large for `u64` also fall through to the float parse.
///
/// ```text
/// to_num("7")     -> Int(7)
/// to_num("10.3")  -> Float(10.3)
/// to_num("-3")    -> Float(-3.0)
/// to_num("abc")   -> Text("abc")
/// ```
pub fn to_num(value: &str) -> Coerced {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = value.parse::<u64>() {
            return Coerced::Int(n);
        }
    }

    match value.parse::<f64>() {
        Ok(x) => Coerced::Float(x),
        Err(_) => Coerced::Text(value.to_string()),
    }
}
