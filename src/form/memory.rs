//! In-memory form: a flat list of controls with browser-like write semantics.

use tracing::trace;

use crate::form::{FormSurface, Selector};
use crate::options::bindings::{ControlKind, DOFUS_KEYS, OPTION_BINDINGS, PRYSMARADITE_KEYS};
use crate::util::percent_encode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Radio,
    Checkbox,
}

/// One `<input>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub input_type: InputType,
    pub name: String,
    /// `value` attribute; checkboxes submit `on`.
    pub value: String,
    pub classes: Vec<String>,
    pub checked: bool,
    pub disabled: bool,
    /// Inline `opacity`, `None` until styled.
    pub opacity: Option<f32>,
    pub title: Option<String>,
}

impl Control {
    fn new(input_type: InputType, name: &str, value: &str, classes: &[&str]) -> Self {
        Self {
            input_type,
            name: name.to_string(),
            value: value.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            checked: false,
            disabled: false,
            opacity: None,
            title: None,
        }
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match *selector {
            Selector::Radio { name, value } => {
                self.input_type == InputType::Radio && self.name == name && self.value == value
            }
            Selector::Checkbox { name } => {
                self.input_type == InputType::Checkbox && self.name == name
            }
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryForm {
    controls: Vec<Control>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The full options form: one radio group per mapped field, one checkbox
    /// per boolean field, Dofus and prysmaradite. Item checkboxes carry their
    /// key as class so the disablers can find them.
    pub fn options_form() -> Self {
        let mut form = Self::new();
        for binding in &OPTION_BINDINGS {
            form = match binding.control {
                ControlKind::Radio(mapper) => form.with_radio_group(binding.name(), mapper.labels()),
                ControlKind::Checkbox => form.with_checkbox(binding.name(), &[]),
            };
        }
        for key in DOFUS_KEYS.into_iter().chain(PRYSMARADITE_KEYS) {
            form = form.with_checkbox(key, &[key]);
        }
        form
    }

    pub fn with_radio_group(mut self, name: &str, values: &[&str]) -> Self {
        for value in values {
            self.controls
                .push(Control::new(InputType::Radio, name, value, &[]));
        }
        self
    }

    pub fn with_checkbox(mut self, name: &str, classes: &[&str]) -> Self {
        self.controls
            .push(Control::new(InputType::Checkbox, name, "on", classes));
        self
    }

    pub fn checkbox(&self, name: &str) -> Option<&Control> {
        self.find(Selector::Checkbox { name })
    }

    pub fn radio(&self, name: &str, value: &str) -> Option<&Control> {
        self.find(Selector::Radio { name, value })
    }

    /// Value of the checked radio in group `name`, if any.
    pub fn selected(&self, name: &str) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.input_type == InputType::Radio && c.name == name && c.checked)
            .map(|c| c.value.as_str())
    }

    pub fn is_checked(&self, name: &str) -> bool {
        self.checkbox(name).is_some_and(|c| c.checked)
    }

    /// URL-encoded body the browser would submit: checked, enabled controls
    /// in document order.
    pub fn serialize(&self) -> String {
        self.controls
            .iter()
            .filter(|c| c.checked && !c.disabled)
            .map(|c| format!("{}={}", percent_encode(&c.name), percent_encode(&c.value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn find(&self, selector: Selector<'_>) -> Option<&Control> {
        self.controls.iter().find(|c| c.matches(&selector))
    }

    fn for_each_match(&mut self, selector: Selector<'_>, mut f: impl FnMut(&mut Control)) {
        let mut hits = 0usize;
        for control in self.controls.iter_mut().filter(|c| c.matches(&selector)) {
            f(control);
            hits += 1;
        }
        if hits == 0 {
            trace!(selector = ?selector, "no control matched");
        }
    }
}

impl FormSurface for MemoryForm {
    fn set_checked(&mut self, selector: Selector<'_>, checked: bool) {
        let mut groups: Vec<String> = Vec::new();
        self.for_each_match(selector, |c| {
            c.checked = checked;
            if checked && c.input_type == InputType::Radio {
                groups.push(c.name.clone());
            }
        });
        if groups.is_empty() {
            return;
        }
        // A checked radio clears the rest of its group.
        for control in &mut self.controls {
            if control.input_type == InputType::Radio
                && groups.contains(&control.name)
                && !control.matches(&selector)
            {
                control.checked = false;
            }
        }
    }

    fn set_disabled(&mut self, selector: Selector<'_>, disabled: bool) {
        self.for_each_match(selector, |c| c.disabled = disabled);
    }

    fn set_opacity(&mut self, selector: Selector<'_>, opacity: f32) {
        self.for_each_match(selector, |c| c.opacity = Some(opacity));
    }

    fn set_title(&mut self, selector: Selector<'_>, title: &str) {
        self.for_each_match(selector, |c| c.title = Some(title.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_form_has_every_control() {
        let form = MemoryForm::options_form();
        assert!(form.radio("mp_exo", "gelano").is_some());
        assert!(form.radio("dofus", "lightset").is_some());
        assert!(form.radio("ap_exo", "gelano").is_none());
        assert!(form.checkbox("seemyool").is_some());
        assert!(form.checkbox("sylvan").is_some());
        assert!(form.checkbox("iridescent_pryveil").is_some());
        assert_eq!(form.checkbox("ochre").unwrap().classes, vec!["ochre"]);
    }

    #[test]
    fn checking_radio_clears_group() {
        let mut form = MemoryForm::new().with_radio_group("mp_exo", &["yes", "no", "gelano"]);
        form.set_checked(Selector::Radio { name: "mp_exo", value: "yes" }, true);
        assert_eq!(form.selected("mp_exo"), Some("yes"));
        form.set_checked(Selector::Radio { name: "mp_exo", value: "gelano" }, true);
        assert_eq!(form.selected("mp_exo"), Some("gelano"));
        assert!(!form.radio("mp_exo", "yes").unwrap().checked);
    }

    #[test]
    fn unmatched_radio_keeps_selection() {
        let mut form = MemoryForm::new().with_radio_group("ap_exo", &["yes", "no"]);
        form.set_checked(Selector::Radio { name: "ap_exo", value: "no" }, true);
        form.set_checked(Selector::Radio { name: "ap_exo", value: "gelano" }, true);
        assert_eq!(form.selected("ap_exo"), Some("no"));
    }

    #[test]
    fn class_selector_hits_all_bearers() {
        let mut form = MemoryForm::new()
            .with_checkbox("ochre", &["ochre", "dofus-item"])
            .with_checkbox("ochre_mirror", &["ochre"])
            .with_checkbox("vulbis", &["vulbis", "dofus-item"]);
        form.set_disabled(Selector::Class("ochre"), true);
        assert!(form.checkbox("ochre").unwrap().disabled);
        assert!(form.checkbox("ochre_mirror").unwrap().disabled);
        assert!(!form.checkbox("vulbis").unwrap().disabled);
    }

    #[test]
    fn missing_control_is_noop() {
        let mut form = MemoryForm::new().with_checkbox("ochre", &["ochre"]);
        let before = form.clone();
        form.set_checked(Selector::Checkbox { name: "vulbis" }, true);
        form.set_title(Selector::Class("vulbis"), "nope");
        assert_eq!(form, before);
    }

    #[test]
    fn serialize_skips_unchecked_and_disabled() {
        let mut form = MemoryForm::new()
            .with_radio_group("ap_exo", &["yes", "no"])
            .with_checkbox("ochre", &["ochre"])
            .with_checkbox("vulbis", &["vulbis"])
            .with_checkbox("ice", &["ice"]);
        form.set_checked(Selector::Radio { name: "ap_exo", value: "yes" }, true);
        form.set_checked(Selector::Checkbox { name: "ochre" }, true);
        form.set_checked(Selector::Checkbox { name: "ice" }, true);
        form.set_disabled(Selector::Class("ice"), true);
        assert_eq!(form.serialize(), "ap_exo=yes&ochre=on");
    }
}
