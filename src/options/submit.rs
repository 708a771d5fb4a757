//! Read a submitted options form back into [`Options`].
//!
//! Browsers only send checked, enabled controls, so anything absent reads
//! as `false`.

use crate::options::bindings::{ControlKind, DOFUS_KEYS, OPTION_BINDINGS, PRYSMARADITE_KEYS};
use crate::options::model::{OptionValue, Options, Prysmaradites};
use crate::util::{get_param, parse_form_body};

pub fn read_submission(body: &str) -> Options {
    let params = parse_form_body(body);
    let mut options = Options::default();
    for binding in &OPTION_BINDINGS {
        let submitted = get_param(&params, binding.name());
        let value = match binding.control {
            ControlKind::Radio(mapper) => submitted
                .and_then(|label| mapper.value(label))
                .unwrap_or_else(|| OptionValue::from(false)),
            ControlKind::Checkbox => OptionValue::from(submitted.is_some()),
        };
        *options.get_mut(binding.field) = value;
    }
    options.dofuses = checkbox_table(&params, &DOFUS_KEYS);
    options
}

pub fn read_prysmaradite_submission(body: &str) -> Prysmaradites {
    let params = parse_form_body(body);
    Prysmaradites { prysmaradites: checkbox_table(&params, &PRYSMARADITE_KEYS) }
}

fn checkbox_table(params: &[(String, String)], keys: &[&str]) -> OptionValue {
    OptionValue::table(keys.iter().map(|&key| (key, get_param(params, key).is_some())))
}
