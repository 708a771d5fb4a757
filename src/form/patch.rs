//! Patch recorder — turns form writes into a JSON list for the page shim.
//!
//! The shim replays each entry with `document.querySelectorAll(selector)`
//! in order, so the browser keeps radio-group exclusivity on its own.

use serde::{Deserialize, Serialize};

use crate::form::{FormSurface, Selector};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FormPatch {
    Checked { selector: String, checked: bool },
    Disabled { selector: String, disabled: bool },
    Opacity { selector: String, opacity: f32 },
    Title { selector: String, title: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchLog {
    patches: Vec<FormPatch>,
}

impl PatchLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patches(&self) -> &[FormPatch] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Serialize the recorded patches as a JSON array.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.patches).unwrap_or_else(|_| "[]".to_string())
    }
}

impl FormSurface for PatchLog {
    fn set_checked(&mut self, selector: Selector<'_>, checked: bool) {
        self.patches.push(FormPatch::Checked { selector: selector.to_css(), checked });
    }

    fn set_disabled(&mut self, selector: Selector<'_>, disabled: bool) {
        self.patches.push(FormPatch::Disabled { selector: selector.to_css(), disabled });
    }

    fn set_opacity(&mut self, selector: Selector<'_>, opacity: f32) {
        self.patches.push(FormPatch::Opacity { selector: selector.to_css(), opacity });
    }

    fn set_title(&mut self, selector: Selector<'_>, title: &str) {
        self.patches.push(FormPatch::Title {
            selector: selector.to_css(),
            title: title.to_string(),
        });
    }
}
