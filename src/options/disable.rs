//! Grey out items the character is too low level to equip.

use tracing::debug;

use crate::form::{FormSurface, Selector};
use crate::i18n::Localize;
use crate::options::model::UnusableSet;

/// Inline opacity of a disabled item.
pub const DIMMED_OPACITY: f32 = 0.7;

pub const DOFUS_LEVEL_MESSAGE: &str = "You need to be a higher level to equip this Dofus";
pub const PRYSMARADITE_LEVEL_MESSAGE: &str =
    "You need to be a higher level to equip this Prysmaradite";

pub fn disable_unusable_dofus<F, L>(form: &mut F, unusable: &UnusableSet, l10n: &L)
where
    F: FormSurface + ?Sized,
    L: Localize + ?Sized,
{
    disable_unusable(form, unusable, &l10n.gettext(DOFUS_LEVEL_MESSAGE));
}

pub fn disable_unusable_prysmaradites<F, L>(form: &mut F, unusable: &UnusableSet, l10n: &L)
where
    F: FormSurface + ?Sized,
    L: Localize + ?Sized,
{
    disable_unusable(form, unusable, &l10n.gettext(PRYSMARADITE_LEVEL_MESSAGE));
}

/// Disable, uncheck, dim and annotate every control carrying one of the
/// unusable classes. Idempotent.
fn disable_unusable<F>(form: &mut F, unusable: &UnusableSet, tooltip: &str)
where
    F: FormSurface + ?Sized,
{
    debug!(count = unusable.len(), "disabling unusable items");
    for key in unusable.keys() {
        let selector = Selector::Class(key);
        form.set_disabled(selector, true);
        form.set_checked(selector, false);
        form.set_opacity(selector, DIMMED_OPACITY);
        form.set_title(selector, tooltip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::memory::MemoryForm;
    use crate::i18n::{Catalog, Untranslated};

    fn checked_form() -> MemoryForm {
        let mut form = MemoryForm::options_form();
        for name in ["ochre", "vulbis", "ice", "prytekt"] {
            form.set_checked(Selector::Checkbox { name }, true);
        }
        form
    }

    #[test]
    fn disables_named_dofus() {
        let mut form = checked_form();
        let unusable: UnusableSet = serde_json::from_str(r#"{"ochre": 1, "vulbis": 1}"#).unwrap();

        disable_unusable_dofus(&mut form, &unusable, &Untranslated);

        for name in ["ochre", "vulbis"] {
            let c = form.checkbox(name).unwrap();
            assert!(c.disabled, "{name} disabled");
            assert!(!c.checked, "{name} unchecked");
            assert_eq!(c.opacity, Some(DIMMED_OPACITY));
            assert_eq!(c.title.as_deref(), Some(DOFUS_LEVEL_MESSAGE));
        }
        let ice = form.checkbox("ice").unwrap();
        assert!(ice.checked);
        assert!(!ice.disabled);
        assert_eq!(ice.opacity, None);
        assert_eq!(ice.title, None);
    }

    #[test]
    fn disabling_twice_is_idempotent() {
        let unusable = UnusableSet::from_keys(["ochre", "vulbis"]);

        let mut once = checked_form();
        disable_unusable_dofus(&mut once, &unusable, &Untranslated);

        let mut twice = checked_form();
        disable_unusable_dofus(&mut twice, &unusable, &Untranslated);
        disable_unusable_dofus(&mut twice, &unusable, &Untranslated);

        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_key_is_silent() {
        let mut form = checked_form();
        let before = form.clone();
        disable_unusable_dofus(&mut form, &UnusableSet::from_keys(["not_a_dofus"]), &Untranslated);
        assert_eq!(form, before);
    }

    #[test]
    fn prysmaradite_tooltip_is_localized() {
        let mut catalog = Catalog::new();
        catalog.insert(
            PRYSMARADITE_LEVEL_MESSAGE,
            "Vous devez être de plus haut niveau pour équiper cette Prysmaradite",
        );
        let mut form = checked_form();

        disable_unusable_prysmaradites(&mut form, &UnusableSet::from_keys(["prytekt"]), &catalog);

        let c = form.checkbox("prytekt").unwrap();
        assert!(c.disabled);
        assert!(!c.checked);
        assert_eq!(
            c.title.as_deref(),
            Some("Vous devez être de plus haut niveau pour équiper cette Prysmaradite")
        );
    }

    #[test]
    fn empty_set_changes_nothing() {
        let mut form = checked_form();
        let before = form.clone();
        disable_unusable_prysmaradites(&mut form, &UnusableSet::default(), &Untranslated);
        assert_eq!(form, before);
    }
}
