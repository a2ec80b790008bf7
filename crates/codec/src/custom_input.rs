// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{CircuitValue, CodecError};
use core::fmt;
use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomInputValue {
    Scalar(CircuitValue),
    Array(Vec<CircuitValue>),
}

impl From<CircuitValue> for CustomInputValue {
    fn from(value: CircuitValue) -> Self {
        CustomInputValue::Scalar(value)
    }
}

impl From<Vec<CircuitValue>> for CustomInputValue {
    fn from(value: Vec<CircuitValue>) -> Self {
        CustomInputValue::Array(value)
    }
}

/// Named application circuit inputs. Insertion order is kept so the encoded
/// document is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomInput {
    entries: Vec<(String, CustomInputValue)>,
}

impl CustomInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<CustomInputValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<CustomInputValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&CustomInputValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomInputValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// JSON text sent as the custom input blob.
    pub fn encode(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(json: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Into<String>, V: Into<CustomInputValue>> FromIterator<(K, V)> for CustomInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = CustomInput::new();
        for (name, value) in iter {
            input.insert(name, value);
        }
        input
    }
}

impl Serialize for CustomInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct CustomInputVisitor;

impl<'de> Visitor<'de> for CustomInputVisitor {
    type Value = CustomInput;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of custom input names to typed values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut input = CustomInput::new();
        while let Some((name, value)) = access.next_entry::<String, CustomInputValue>()? {
            input.insert(name, value);
        }
        Ok(input)
    }
}

impl<'de> Deserialize<'de> for CustomInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CustomInputVisitor)
    }
}
