//! Binding table between option fields and form controls.
//!
//! Both directions (filling the form, reading a submission back) walk these
//! tables, so adding a Dofus or a prysmaradite family is a one-line change.

use crate::options::labels::LabelMapper;
use crate::options::model::OptionField;

/// How a top-level field is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Radio group named after the field, values produced by the mapper.
    Radio(LabelMapper),
    /// Single checkbox named after the field.
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    pub field: OptionField,
    pub control: ControlKind,
}

impl FieldBinding {
    const fn radio(field: OptionField, mapper: LabelMapper) -> Self {
        Self { field, control: ControlKind::Radio(mapper) }
    }

    const fn checkbox(field: OptionField) -> Self {
        Self { field, control: ControlKind::Checkbox }
    }

    pub fn name(&self) -> &'static str {
        self.field.name()
    }
}

pub const OPTION_BINDINGS: [FieldBinding; 7] = [
    FieldBinding::radio(OptionField::ApExo, LabelMapper::YesNo),
    FieldBinding::radio(OptionField::RangeExo, LabelMapper::YesNo),
    FieldBinding::radio(OptionField::MpExo, LabelMapper::Gelano),
    FieldBinding::checkbox(OptionField::Rhineetle),
    FieldBinding::checkbox(OptionField::Dragoturkey),
    FieldBinding::checkbox(OptionField::Seemyool),
    FieldBinding::radio(OptionField::Dofus, LabelMapper::Trophies),
];

/// Keys of `options.dofuses`; each is a checkbox name and its class.
pub const DOFUS_KEYS: [&str; 26] = [
    "ochre",
    "vulbis",
    "dolmanax",
    "ice",
    "crimson",
    "emerald",
    "cawwot",
    "dokoko",
    "ivory",
    "watchers",
    "cloudy",
    "turquoise",
    "dotrich",
    "kaliptus",
    "grofus",
    "abyssal",
    "lavasmith",
    "blackspotted",
    "ebony",
    "silver",
    "sparklingsilver",
    "cocoa",
    "domakuro",
    "dorigami",
    "nightmare",
    "sylvan",
];

/// Keys of `prysmaradites.prysmaradites`: base, shiny and iridescent tier of
/// every family.
pub const PRYSMARADITE_KEYS: [&str; 18] = [
    "prytekt",
    "shiny_prytekt",
    "iridescent_prytekt",
    "pryssure",
    "shiny_pryssure",
    "iridescent_pryssure",
    "surpryz",
    "shiny_surpryz",
    "iridescent_surpryz",
    "pryndsight",
    "shiny_pryndsight",
    "iridescent_pryndsight",
    "prylixir",
    "shiny_prylixir",
    "iridescent_prylixir",
    "pryveil",
    "shiny_pryveil",
    "iridescent_pryveil",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn control_names_are_unique() {
        let mut seen = HashSet::new();
        let names = OPTION_BINDINGS
            .iter()
            .map(FieldBinding::name)
            .chain(DOFUS_KEYS)
            .chain(PRYSMARADITE_KEYS);
        for name in names {
            assert!(seen.insert(name), "duplicate control name {name}");
        }
    }

    const PRYSMARADITE_FAMILIES: [&str; 6] =
        ["prytekt", "pryssure", "surpryz", "pryndsight", "prylixir", "pryveil"];

    #[test]
    fn prysmaradite_keys_cover_every_tier() {
        for family in PRYSMARADITE_FAMILIES {
            for key in [
                family.to_string(),
                format!("shiny_{family}"),
                format!("iridescent_{family}"),
            ] {
                assert!(PRYSMARADITE_KEYS.contains(&key.as_str()), "missing {key}");
            }
        }
        assert_eq!(PRYSMARADITE_KEYS.len(), PRYSMARADITE_FAMILIES.len() * 3);
    }

    #[test]
    fn radio_groups_use_expected_mappers() {
        let mapper_of = |field| {
            OPTION_BINDINGS
                .iter()
                .find(|b| b.field == field)
                .map(|b| b.control)
        };
        assert_eq!(mapper_of(OptionField::MpExo), Some(ControlKind::Radio(LabelMapper::Gelano)));
        assert_eq!(mapper_of(OptionField::Dofus), Some(ControlKind::Radio(LabelMapper::Trophies)));
        assert_eq!(mapper_of(OptionField::Seemyool), Some(ControlKind::Checkbox));
    }
}
