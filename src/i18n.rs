//! Message lookup for the tooltips.
//!
//! The page installs a catalog once (msgid -> translation) and every
//! tooltip goes through [`Localize::gettext`]. Untranslated msgids come back
//! unchanged, like gettext.
//!
//! The active catalog lives in a `thread_local!` for the lifetime of the
//! WASM instance.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use tracing::debug;

use crate::error::Result;

pub trait Localize {
    fn gettext(&self, msgid: &str) -> String;
}

/// Leaves every message in the source language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Localize for Untranslated {
    fn gettext(&self, msgid: &str) -> String {
        msgid.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, msgid: impl Into<String>, translation: impl Into<String>) {
        self.messages.insert(msgid.into(), translation.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localize for Catalog {
    fn gettext(&self, msgid: &str) -> String {
        match self.messages.get(msgid) {
            // Empty msgstr means "not translated yet".
            Some(t) if !t.is_empty() => t.clone(),
            _ => msgid.to_string(),
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<Catalog> = RefCell::new(Catalog::new());
}

/// Replace the active catalog.
pub fn install_catalog(catalog: Catalog) {
    debug!(messages = catalog.len(), "installing message catalog");
    ACTIVE.with(|c| {
        *c.borrow_mut() = catalog;
    });
}

/// Execute a closure with read access to the active catalog.
pub fn with_catalog<F, R>(f: F) -> R
where
    F: FnOnce(&Catalog) -> R,
{
    ACTIVE.with(|c| f(&c.borrow()))
}

/// Handle on the installed catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActiveCatalog;

impl Localize for ActiveCatalog {
    fn gettext(&self, msgid: &str) -> String {
        with_catalog(|c| c.gettext(msgid))
    }
}
