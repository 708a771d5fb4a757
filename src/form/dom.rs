//! Live DOM surface and the direct JavaScript entry points.
//!
//! Selectors resolve through `querySelectorAll` on the document. A selector
//! the browser rejects behaves like one that matches nothing.

use tracing::{debug, trace};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::error::OptionsError;
use crate::form::{FormSurface, Selector};
use crate::i18n::ActiveCatalog;
use crate::options::{self, Options, Prysmaradites, UnusableSet};

pub struct DomForm {
    document: Document,
}

impl DomForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The form of the current page, if there is a window and document.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn for_each_match(&self, selector: Selector<'_>, mut f: impl FnMut(&Element)) {
        let css = selector.to_css();
        let nodes = match self.document.query_selector_all(&css) {
            Ok(nodes) => nodes,
            Err(_) => {
                trace!(%css, "selector rejected by the browser");
                return;
            }
        };
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                f(&element);
            }
        }
    }
}

impl FormSurface for DomForm {
    fn set_checked(&mut self, selector: Selector<'_>, checked: bool) {
        self.for_each_match(selector, |el| match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_checked(checked),
            None if !checked => {
                let _ = el.remove_attribute("checked");
            }
            None => {
                let _ = el.set_attribute("checked", "");
            }
        });
    }

    fn set_disabled(&mut self, selector: Selector<'_>, disabled: bool) {
        self.for_each_match(selector, |el| match el.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_disabled(disabled),
            None if disabled => {
                let _ = el.set_attribute("disabled", "");
            }
            None => {
                let _ = el.remove_attribute("disabled");
            }
        });
    }

    fn set_opacity(&mut self, selector: Selector<'_>, opacity: f32) {
        let value = opacity.to_string();
        self.for_each_match(selector, |el| {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("opacity", &value);
            }
        });
    }

    fn set_title(&mut self, selector: Selector<'_>, title: &str) {
        self.for_each_match(selector, |el| {
            let _ = el.set_attribute("title", title);
        });
    }
}

// ── JavaScript entry points ────────────────────────────────────────

fn page_form() -> Result<DomForm, JsValue> {
    DomForm::from_window().ok_or_else(|| JsValue::from_str("no document available"))
}

fn to_js(e: OptionsError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Fill the options form on the current page.
///
/// `prysmaradites_json` may be empty or `null` when the page has no
/// prysmaradite data.
#[wasm_bindgen]
pub fn options_init(options_json: &str, prysmaradites_json: &str) -> Result<(), JsValue> {
    let options: Options = serde_json::from_str(options_json)
        .map_err(OptionsError::from)
        .map_err(to_js)?;
    let prysmaradites: Option<Prysmaradites> = match prysmaradites_json.trim() {
        "" => None,
        raw => serde_json::from_str(raw)
            .map_err(OptionsError::from)
            .map_err(to_js)?,
    };
    let mut form = page_form()?;
    options::initialize(&mut form, &options, prysmaradites.as_ref());
    debug!("options form initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn disable_unusable_dofus(unusable_json: &str) -> Result<(), JsValue> {
    let unusable = parse_unusable(unusable_json)?;
    options::disable_unusable_dofus(&mut page_form()?, &unusable, &ActiveCatalog);
    Ok(())
}

#[wasm_bindgen]
pub fn disable_unusable_prysmaradites(unusable_json: &str) -> Result<(), JsValue> {
    let unusable = parse_unusable(unusable_json)?;
    options::disable_unusable_prysmaradites(&mut page_form()?, &unusable, &ActiveCatalog);
    Ok(())
}

fn parse_unusable(json: &str) -> Result<UnusableSet, JsValue> {
    serde_json::from_str(json)
        .map_err(OptionsError::from)
        .map_err(to_js)
}
