//! Fill the options form from fetched data.

use tracing::debug;

use crate::form::{FormSurface, Selector};
use crate::options::bindings::{ControlKind, DOFUS_KEYS, OPTION_BINDINGS, PRYSMARADITE_KEYS};
use crate::options::model::{Options, Prysmaradites};

/// Set every known control from `options`, and the prysmaradite checkboxes
/// from `prysmaradites` when it carries a non-empty table.
///
/// Each control is written once. Missing fields read as `false`; a radio
/// group whose mapped value has no matching radio keeps its selection.
pub fn initialize<F>(form: &mut F, options: &Options, prysmaradites: Option<&Prysmaradites>)
where
    F: FormSurface + ?Sized,
{
    for binding in &OPTION_BINDINGS {
        let value = options.get(binding.field);
        match binding.control {
            ControlKind::Radio(mapper) => form.set_checked(
                Selector::Radio { name: binding.name(), value: mapper.label(value) },
                true,
            ),
            ControlKind::Checkbox => {
                form.set_checked(Selector::Checkbox { name: binding.name() }, value.is_truthy())
            }
        }
    }

    for key in DOFUS_KEYS {
        form.set_checked(Selector::Checkbox { name: key }, options.dofuses.flag(key));
    }

    match prysmaradites {
        Some(p) if p.is_present() => {
            for key in PRYSMARADITE_KEYS {
                form.set_checked(Selector::Checkbox { name: key }, p.prysmaradites.flag(key));
            }
        }
        _ => debug!("no prysmaradite data, leaving prysmaradite controls as they are"),
    }
}
