//! Fashionista options form binding, compiled to WASM.
//!
//! Keeps the character options form in sync with the options fetched from
//! the backend and greys out Dofus/prysmaradite items the character is too
//! low level to equip.
//!
//! Two ways in from JavaScript:
//! - `options_init` / `disable_unusable_*` write straight to the page
//!   document (wasm32 builds, `form::dom`)
//! - `handle_request(method, path, query, body)` for the worker bridge,
//!   routed with `matchit`, answering with JSON control patches

use wasm_bindgen::prelude::*;

pub mod error;
pub mod form;
pub mod i18n;
pub mod options;
pub mod routes;
pub mod util;

pub use error::{OptionsError, Result};
pub use form::{FormSurface, Selector};

/// Process an HTTP-like request and return the response text.
///
/// Called from JavaScript via wasm-bindgen.
///
/// # Arguments
/// * `method` — HTTP method ("GET" or "POST")
/// * `path`   — URL path (e.g., "/api/options/init")
/// * `query`  — Query string (e.g., "?mapper=gelano&value=true")
/// * `body`   — Request body. Empty string for GET requests.
///
/// # Returns
/// JSON patches, JSON data or plain text depending on the route.
#[wasm_bindgen]
pub fn handle_request(method: &str, path: &str, query: &str, body: &str) -> String {
    // Build the router. matchit compiles route patterns into a radix tree.
    let mut router = matchit::Router::new();

    router.insert("/api/options/init", "options_init").ok();
    router.insert("/api/options/unusable/dofus", "unusable_dofus").ok();
    router.insert("/api/options/unusable/prysmaradites", "unusable_prysmaradites").ok();
    router.insert("/api/options/submit", "options_submit").ok();
    router.insert("/api/options/submit/prysmaradites", "prysmaradites_submit").ok();
    router.insert("/api/options/label", "options_label").ok();
    router.insert("/api/i18n/catalog", "i18n_catalog").ok();

    match router.at(path) {
        Ok(matched) => match (*matched.value, method) {
            ("options_label", "GET") => routes::options::handle_label_get(query),

            ("options_init", "POST") => routes::options::handle_init_post(body),
            ("unusable_dofus", "POST") => routes::options::handle_unusable_dofus_post(body),
            ("unusable_prysmaradites", "POST") => {
                routes::options::handle_unusable_prysmaradites_post(body)
            }
            ("options_submit", "POST") => routes::options::handle_submit_post(body),
            ("prysmaradites_submit", "POST") => {
                routes::options::handle_submit_prysmaradites_post(body)
            }
            ("i18n_catalog", "POST") => routes::options::handle_catalog_post(body),

            _ => method_not_allowed(),
        },
        Err(_) => not_found(),
    }
}

fn not_found() -> String {
    "404 — route not found".to_string()
}

fn method_not_allowed() -> String {
    "405 — method not allowed".to_string()
}
