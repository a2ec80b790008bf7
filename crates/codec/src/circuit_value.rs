// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{CodecError, FieldValue};
use alloy_primitives::B256;
use core::fmt;
use num_bigint::BigInt;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Scalar kinds understood by application circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircuitDataType {
    Uint248,
    Uint521,
    Int248,
    Bytes32,
}

impl CircuitDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CircuitDataType::Uint248 => "Uint248",
            CircuitDataType::Uint521 => "Uint521",
            CircuitDataType::Int248 => "Int248",
            CircuitDataType::Bytes32 => "Bytes32",
        }
    }
}

impl fmt::Display for CircuitDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed custom input scalar. Numeric kinds hold a base-10 literal that is
/// known to fit the kind, `Bytes32` holds the original `0x` hex string.
///
/// Values can only be created through the `as_*` constructors; deserializing
/// runs the same constructor again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCircuitValue")]
pub struct CircuitValue {
    #[serde(rename = "type")]
    ty: CircuitDataType,
    data: String,
}

#[derive(Deserialize)]
struct RawCircuitValue {
    #[serde(rename = "type")]
    ty: CircuitDataType,
    data: String,
}

impl TryFrom<RawCircuitValue> for CircuitValue {
    type Error = CodecError;

    fn try_from(raw: RawCircuitValue) -> Result<Self, Self::Error> {
        let data = raw.data.as_str();
        match raw.ty {
            CircuitDataType::Uint248 => as_uint248(data),
            CircuitDataType::Uint521 => as_uint521(data),
            CircuitDataType::Int248 => as_int248(data),
            CircuitDataType::Bytes32 => as_bytes32(data),
        }
    }
}

impl CircuitValue {
    pub fn ty(&self) -> CircuitDataType {
        self.ty
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// Integer value of a numeric kind.
    pub fn to_bigint(&self) -> Result<BigInt, CodecError> {
        if self.ty == CircuitDataType::Bytes32 {
            return Err(CodecError::WrongType {
                expected: "numeric",
                actual: self.ty.as_str(),
            });
        }
        FieldValue::from(self.data.as_str()).to_bigint()
    }

    /// Raw bytes of a `Bytes32` value.
    pub fn to_bytes32(&self) -> Result<[u8; 32], CodecError> {
        if self.ty != CircuitDataType::Bytes32 {
            return Err(CodecError::WrongType {
                expected: CircuitDataType::Bytes32.as_str(),
                actual: self.ty.as_str(),
            });
        }
        decode_bytes32(&self.data)
    }
}

impl From<B256> for CircuitValue {
    fn from(value: B256) -> Self {
        CircuitValue {
            ty: CircuitDataType::Bytes32,
            data: format!("0x{}", hex::encode(value)),
        }
    }
}

fn pow2(bits: usize) -> BigInt {
    BigInt::one() << bits
}

fn numeric(
    ty: CircuitDataType,
    input: FieldValue,
    min: BigInt,
    max_exclusive: BigInt,
) -> Result<CircuitValue, CodecError> {
    let value = input.to_bigint()?;
    if value < min || value >= max_exclusive {
        return Err(CodecError::OutOfRange {
            ty: ty.as_str(),
            value: value.to_string(),
        });
    }
    Ok(CircuitValue {
        ty,
        data: value.to_str_radix(10),
    })
}

/// Unsigned 248 bit integer, `[0, 2^248)`.
pub fn as_uint248(input: impl Into<FieldValue>) -> Result<CircuitValue, CodecError> {
    numeric(
        CircuitDataType::Uint248,
        input.into(),
        BigInt::zero(),
        pow2(248),
    )
}

/// Unsigned 521 bit integer, `[0, 2^521)`.
pub fn as_uint521(input: impl Into<FieldValue>) -> Result<CircuitValue, CodecError> {
    numeric(
        CircuitDataType::Uint521,
        input.into(),
        BigInt::zero(),
        pow2(521),
    )
}

/// Signed 248 bit integer, `[-2^247, 2^247)`.
pub fn as_int248(input: impl Into<FieldValue>) -> Result<CircuitValue, CodecError> {
    numeric(
        CircuitDataType::Int248,
        input.into(),
        -pow2(247),
        pow2(247),
    )
}

/// Exactly 32 bytes given as a `0x` hex string.
pub fn as_bytes32(input: &str) -> Result<CircuitValue, CodecError> {
    decode_bytes32(input)?;
    Ok(CircuitValue {
        ty: CircuitDataType::Bytes32,
        data: input.to_string(),
    })
}

fn decode_bytes32(input: &str) -> Result<[u8; 32], CodecError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or_else(|| CodecError::NotHex(input.to_string()))?;
    if digits.len() % 2 != 0 {
        return Err(CodecError::NotHex(input.to_string()));
    }
    let bytes = hex::decode(digits).map_err(|_| CodecError::NotHex(input.to_string()))?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| CodecError::InvalidLength {
        ty: CircuitDataType::Bytes32.as_str(),
        expected: 32,
        actual,
    })
}
