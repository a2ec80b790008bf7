// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::CodecError;
use alloy_primitives::{B256, U256};
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A value whose source representation is not known up front: a hex or
/// decimal literal, a machine integer or an arbitrary precision integer.
///
/// Byte-like evidence attributes (hashes, topics, slots, values) are carried
/// as `FieldValue` and only canonicalized when they are checked or put on the
/// wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldValue {
    Text(String),
    Int(i128),
    Big(BigInt),
}

impl FieldValue {
    /// Interprets the value as an integer. Text accepts decimal literals with
    /// an optional leading `-` and `0x` prefixed hex literals.
    pub fn to_bigint(&self) -> Result<BigInt, CodecError> {
        match self {
            FieldValue::Text(s) => parse_literal(s),
            FieldValue::Int(i) => Ok(BigInt::from(*i)),
            FieldValue::Big(b) => Ok(b.clone()),
        }
    }

    /// Canonical byte form.
    ///
    /// A `0x` string with an even number of digits is taken verbatim, leading
    /// zero bytes included. Everything else must be a non-negative integer and
    /// becomes its minimal big-endian encoding, zero being the single byte
    /// `0x00`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        if let FieldValue::Text(s) = self {
            if let Some(bytes) = hex_bytes(s) {
                return Ok(bytes);
            }
        }
        let value = self.to_bigint()?;
        match value.to_biguint() {
            Some(unsigned) => Ok(unsigned.to_bytes_be()),
            None => Err(CodecError::Negative(self.to_string())),
        }
    }

    pub fn byte_len(&self) -> Result<usize, CodecError> {
        self.to_bytes().map(|b| b.len())
    }

    /// `0x` prefixed lowercase hex of [`FieldValue::to_bytes`].
    pub fn to_hex(&self) -> Result<String, CodecError> {
        Ok(format!("0x{}", hex::encode(self.to_bytes()?)))
    }
}

fn hex_bytes(s: &str) -> Option<Vec<u8>> {
    let digits = s.strip_prefix("0x")?;
    if digits.len() % 2 != 0 {
        return None;
    }
    hex::decode(digits).ok()
}

fn parse_literal(s: &str) -> Result<BigInt, CodecError> {
    let literal = s.trim();
    let (sign, body) = match literal.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, literal),
    };

    let (digits, radix) = match body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (body, 10),
    };

    let well_formed = !digits.is_empty()
        && digits.chars().all(|c| match radix {
            16 => c.is_ascii_hexdigit(),
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(CodecError::NotNumeric(s.to_string()));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| CodecError::NotNumeric(s.to_string()))?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Big(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(value: $t) -> Self {
                    FieldValue::Int(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128);

impl From<u128> for FieldValue {
    fn from(value: u128) -> Self {
        match i128::try_from(value) {
            Ok(v) => FieldValue::Int(v),
            Err(_) => FieldValue::Big(BigInt::from(value)),
        }
    }
}

impl From<BigInt> for FieldValue {
    fn from(value: BigInt) -> Self {
        FieldValue::Big(value)
    }
}

impl From<BigUint> for FieldValue {
    fn from(value: BigUint) -> Self {
        FieldValue::Big(BigInt::from(value))
    }
}

impl From<U256> for FieldValue {
    fn from(value: U256) -> Self {
        FieldValue::Big(BigInt::from_bytes_be(
            Sign::Plus,
            &value.to_be_bytes::<32>(),
        ))
    }
}

impl From<B256> for FieldValue {
    fn from(value: B256) -> Self {
        FieldValue::Text(format!("0x{}", hex::encode(value)))
    }
}

/// Serializes to the canonical hex form. Values that cannot be canonicalized
/// keep their source form so that unchecked records still round trip.
impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_hex() {
            Ok(hex) => serializer.serialize_str(&hex),
            Err(_) => match self {
                FieldValue::Int(i) => serializer.serialize_i128(*i),
                other => serializer.serialize_str(&other.to_string()),
            },
        }
    }
}

const NUMBER_TOKEN: &str = "$serde_json::private::Number";

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a hex string, a decimal string or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(FieldValue::Int(v as i128))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(FieldValue::Int(v as i128))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(FieldValue::Int(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(FieldValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Err(E::custom(format!(
            "number {v} is not an integer, quote fractional values as strings"
        )))
    }

    // serde_json hands numbers wider than 64 bits over as a single entry map
    // holding the literal.
    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let literal = match map.next_entry::<String, String>()? {
            Some((key, literal)) if key == NUMBER_TOKEN => literal,
            _ => return Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        };
        parse_literal(&literal)
            .map(FieldValue::Big)
            .map_err(|_| de::Error::custom(format!("number {literal} is not an integer")))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}
