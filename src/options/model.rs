//! Options data handed over by the page after the backend fetch.
//!
//! Values stay as loose JSON because the backend mixes booleans with string
//! sentinels (`"gelano"`, `"cawwot"`, ...) in the same field. Reads follow
//! browser truthiness so a missing or `null` field behaves exactly like
//! `false`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// A single option value: a boolean, a sentinel token, or anything else the
/// backend sends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionValue(Value);

impl OptionValue {
    /// Value of a field that was never sent.
    pub const UNSET: OptionValue = OptionValue(Value::Null);

    /// `false`, `null`, `0` and `""` are falsy; everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        truthy(&self.0)
    }

    /// The value as a string token, if it is one.
    pub fn as_token(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Truthiness of `self[key]` when this value is a nested table.
    /// Missing keys and non-table values read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(truthy)
    }

    /// Build a nested table from `(key, checked)` pairs.
    pub fn table<'a>(entries: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        let map: Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), Value::Bool(v)))
            .collect();
        OptionValue(Value::Object(map))
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue(Value::Bool(b))
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue(Value::String(s.to_string()))
    }
}

impl From<Value> for OptionValue {
    fn from(v: Value) -> Self {
        OptionValue(v)
    }
}

/// Top-level option fields that map onto a single form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    ApExo,
    RangeExo,
    MpExo,
    Rhineetle,
    Dragoturkey,
    Seemyool,
    Dofus,
}

impl OptionField {
    /// Field key, which is also the control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            OptionField::ApExo => "ap_exo",
            OptionField::RangeExo => "range_exo",
            OptionField::MpExo => "mp_exo",
            OptionField::Rhineetle => "rhineetle",
            OptionField::Dragoturkey => "dragoturkey",
            OptionField::Seemyool => "seemyool",
            OptionField::Dofus => "dofus",
        }
    }
}

/// Character build options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub ap_exo: OptionValue,
    pub range_exo: OptionValue,
    /// `true`, `false` or `"gelano"`.
    pub mp_exo: OptionValue,
    pub rhineetle: OptionValue,
    pub dragoturkey: OptionValue,
    pub seemyool: OptionValue,
    /// `true`, `false`, `"lightset"` or `"cawwot"`.
    pub dofus: OptionValue,
    /// Dofus item key -> allowed.
    pub dofuses: OptionValue,
}

impl Options {
    pub fn get(&self, field: OptionField) -> &OptionValue {
        match field {
            OptionField::ApExo => &self.ap_exo,
            OptionField::RangeExo => &self.range_exo,
            OptionField::MpExo => &self.mp_exo,
            OptionField::Rhineetle => &self.rhineetle,
            OptionField::Dragoturkey => &self.dragoturkey,
            OptionField::Seemyool => &self.seemyool,
            OptionField::Dofus => &self.dofus,
        }
    }

    pub fn get_mut(&mut self, field: OptionField) -> &mut OptionValue {
        match field {
            OptionField::ApExo => &mut self.ap_exo,
            OptionField::RangeExo => &mut self.range_exo,
            OptionField::MpExo => &mut self.mp_exo,
            OptionField::Rhineetle => &mut self.rhineetle,
            OptionField::Dragoturkey => &mut self.dragoturkey,
            OptionField::Seemyool => &mut self.seemyool,
            OptionField::Dofus => &mut self.dofus,
        }
    }
}

/// Companion prysmaradite data. Only used when the nested `prysmaradites`
/// table is itself truthy, which filters out half-built payloads like `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prysmaradites {
    pub prysmaradites: OptionValue,
}

impl Prysmaradites {
    pub fn is_present(&self) -> bool {
        self.prysmaradites.is_truthy()
    }
}

/// Class names of controls to disable. Sent as a JSON object; only the keys
/// matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, IgnoredAny>")]
pub struct UnusableSet(BTreeSet<String>);

impl UnusableSet {
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UnusableSet(keys.into_iter().map(Into::into).collect())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, IgnoredAny>> for UnusableSet {
    fn from(map: BTreeMap<String, IgnoredAny>) -> Self {
        UnusableSet(map.into_keys().collect())
    }
}
