//! Option value <-> radio/checkbox value tokens.
//!
//! Plain booleans become `"yes"`/`"no"`. Two radio groups carry extra
//! states, and their sentinel tokens pass through unchanged so they land on
//! the radio with the same value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;
use crate::options::model::OptionValue;

pub const YES: &str = "yes";
pub const NO: &str = "no";
/// MP exo replaced by the Gelano ring.
pub const GELANO: &str = "gelano";
/// Light set of trophies instead of Dofus.
pub const LIGHTSET: &str = "lightset";
/// Trophies with the Cawwot Dofus.
pub const CAWWOT: &str = "cawwot";

pub fn boolean_to_yes_no(value: &OptionValue) -> &'static str {
    if value.is_truthy() { YES } else { NO }
}

pub fn boolean_gelano_to_yes_no(value: &OptionValue) -> &'static str {
    match value.as_token() {
        Some(GELANO) => GELANO,
        _ => boolean_to_yes_no(value),
    }
}

pub fn boolean_trophies_to_yes_no(value: &OptionValue) -> &'static str {
    match value.as_token() {
        Some(LIGHTSET) => LIGHTSET,
        Some(CAWWOT) => CAWWOT,
        _ => boolean_to_yes_no(value),
    }
}

/// Which mapping a radio group uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelMapper {
    YesNo,
    Gelano,
    Trophies,
}

impl LabelMapper {
    pub fn label(self, value: &OptionValue) -> &'static str {
        match self {
            LabelMapper::YesNo => boolean_to_yes_no(value),
            LabelMapper::Gelano => boolean_gelano_to_yes_no(value),
            LabelMapper::Trophies => boolean_trophies_to_yes_no(value),
        }
    }

    /// Every radio value the group can hold.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            LabelMapper::YesNo => &[YES, NO],
            LabelMapper::Gelano => &[YES, NO, GELANO],
            LabelMapper::Trophies => &[YES, NO, LIGHTSET, CAWWOT],
        }
    }

    /// Inverse of [`LabelMapper::label`]. `None` for tokens this group never
    /// produces.
    pub fn value(self, label: &str) -> Option<OptionValue> {
        match label {
            YES => Some(OptionValue::from(true)),
            NO => Some(OptionValue::from(false)),
            other if self.labels().contains(&other) => Some(OptionValue::from(other)),
            _ => None,
        }
    }
}

impl FromStr for LabelMapper {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes_no" => Ok(LabelMapper::YesNo),
            "gelano" => Ok(LabelMapper::Gelano),
            "trophies" => Ok(LabelMapper::Trophies),
            other => Err(OptionsError::UnknownMapper(other.to_string())),
        }
    }
}
