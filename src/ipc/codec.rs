// SPDX-License-Identifier: MIT OR Apache-2.0

//! Values exchanged with the script engine and the codec that packs them.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A scalar as the script engine sees it.
///
/// Coercions follow the engine's rules: numbers convert to strings the way
/// `tostring` prints them, and numbers or numeric strings convert to integers by
/// truncating toward zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Nil,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl ScriptValue {
    /// The value as a string, if it is a string or a number.
    pub fn to_script_string(&self) -> Option<String> {
        match self {
            ScriptValue::String(s) => Some(s.clone()),
            ScriptValue::Integer(i) => Some(i.to_string()),
            ScriptValue::Number(n) => Some(format_number(*n)),
            ScriptValue::Nil | ScriptValue::Boolean(_) => None,
        }
    }

    /// The value as an integer, if it is a number or a numeric string.
    ///
    /// Fractions are truncated toward zero. `None` for anything non-numeric, NaN,
    /// or outside the `i64` range.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            ScriptValue::Integer(i) => Some(*i),
            ScriptValue::Number(n) => truncate(*n),
            ScriptValue::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(truncate))
            }
            ScriptValue::Nil | ScriptValue::Boolean(_) => None,
        }
    }
}

/// Significant digits the engine prints for a number.
const NUMBER_PRECISION: i32 = 14;

/// Renders `n` like C's `%.14g`, which is what the engine's `tostring` uses.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // The exponent after rounding to the target precision picks the notation.
    let scientific = format!("{:.*e}", (NUMBER_PRECISION - 1) as usize, n);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .map(|(m, e)| (m, e.parse::<i32>().unwrap_or(0)))
        .unwrap_or((scientific.as_str(), 0));
    if exponent < -4 || exponent >= NUMBER_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (NUMBER_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{n:.decimals$}")).to_string()
    }
}

/// Drops trailing zeros after the decimal point, and the point if nothing is left.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn truncate(n: f64) -> Option<i64> {
    let t = n.trunc();
    // i64::MAX is not representable; 2^63 is the first value out of range.
    (t.is_finite() && t >= i64::MIN as f64 && t < 9_223_372_036_854_775_808.0).then(|| t as i64)
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        ScriptValue::String(value.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self {
        ScriptValue::String(value)
    }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self {
        ScriptValue::Integer(value)
    }
}

/// Serialization contract between the script engine and the primary process.
pub trait Codec: Debug + Send + Sync {
    fn encode(&self, values: &[ScriptValue]) -> Result<Vec<u8>, Error>;
    fn decode(&self, payload: &[u8]) -> Result<Vec<ScriptValue>, Error>;
}

/// The default codec: a JSON array of scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode(&self, values: &[ScriptValue]) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(values)?)
    }

    fn decode(&self, payload: &[u8]) -> Result<Vec<ScriptValue>, Error> {
        Ok(serde_json::from_slice(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_shape() {
        let values = vec![
            ScriptValue::Integer(1),
            ScriptValue::from("42"),
            ScriptValue::Nil,
            ScriptValue::Boolean(true),
            ScriptValue::Number(0.5),
        ];
        let bytes = JsonCodec.encode(&values).unwrap();
        assert_eq!(bytes, br#"[1,"42",null,true,0.5]"#);
        assert_eq!(JsonCodec.decode(&bytes).unwrap(), values);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(JsonCodec.decode(b"[1,"), Err(Error::Codec(_))));
        assert!(matches!(JsonCodec.decode(br#"{"a":1}"#), Err(Error::Codec(_))));
    }

    #[test]
    fn string_coercion() {
        assert_eq!(ScriptValue::Integer(42).to_script_string().as_deref(), Some("42"));
        assert_eq!(ScriptValue::Number(1.5).to_script_string().as_deref(), Some("1.5"));
        assert_eq!(ScriptValue::Nil.to_script_string(), None);
        assert_eq!(ScriptValue::Boolean(false).to_script_string(), None);
    }

    #[test]
    fn numbers_print_like_tostring() {
        let cases: &[(f64, &str)] = &[
            (0.1 + 0.2, "0.3"),
            (1e20, "1e+20"),
            (1e14, "1e+14"),
            (1e13, "10000000000000"),
            (123456.0, "123456"),
            (3.0, "3"),
            (-2.5, "-2.5"),
            (0.0001, "0.0001"),
            (0.00001, "1e-05"),
            (1.0 / 3.0, "0.33333333333333"),
            (9_007_199_254_740_992.0, "9.007199254741e+15"),
            (-1.5e-300, "-1.5e-300"),
            (0.0, "0"),
            (f64::INFINITY, "inf"),
            (f64::NEG_INFINITY, "-inf"),
            (f64::NAN, "nan"),
        ];
        for (n, expected) in cases {
            assert_eq!(
                ScriptValue::Number(*n).to_script_string().as_deref(),
                Some(*expected),
                "{n:e}"
            );
        }
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(ScriptValue::Number(3.0).to_integer(), Some(3));
        assert_eq!(ScriptValue::Number(2.7).to_integer(), Some(2));
        assert_eq!(ScriptValue::Number(-2.7).to_integer(), Some(-2));
        assert_eq!(ScriptValue::Number(f64::NAN).to_integer(), None);
        assert_eq!(ScriptValue::Number(1e19).to_integer(), None);
        assert_eq!(ScriptValue::from("2").to_integer(), Some(2));
        assert_eq!(ScriptValue::from(" 4.9 ").to_integer(), Some(4));
        assert_eq!(ScriptValue::from("two").to_integer(), None);
        assert_eq!(ScriptValue::Nil.to_integer(), None);
    }
}
