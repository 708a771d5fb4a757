//! `/api/options/*` and `/api/i18n/*` routes.
//!
//! Write routes answer with the JSON patch list produced by a
//! [`PatchLog`]; the page shim replays it on the live form.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{OptionsError, Result};
use crate::form::patch::PatchLog;
use crate::i18n::{self, ActiveCatalog, Catalog};
use crate::options::labels::LabelMapper;
use crate::options::{self, OptionValue, Options, Prysmaradites, UnusableSet};
use crate::util::{get_param, parse_query};

/// Body of `POST /api/options/init`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InitRequest {
    options: Options,
    prysmaradites: Option<Prysmaradites>,
}

fn respond(result: Result<String>) -> String {
    result.unwrap_or_else(|e| format!("error: {}", e))
}

// ── POST /api/options/init ─────────────────────────────────────────

/// Handle POST /api/options/init
/// Body: `{"options": {...}, "prysmaradites": {"prysmaradites": {...}}}`
/// with `prysmaradites` optional.
pub fn handle_init_post(body: &str) -> String {
    respond(init_patches(body))
}

fn init_patches(body: &str) -> Result<String> {
    let request: InitRequest = serde_json::from_str(body)?;
    let mut log = PatchLog::new();
    options::initialize(&mut log, &request.options, request.prysmaradites.as_ref());
    Ok(log.to_json())
}

// ── POST /api/options/unusable/* ───────────────────────────────────

/// Handle POST /api/options/unusable/dofus
/// Body: JSON object keyed by Dofus class names.
pub fn handle_unusable_dofus_post(body: &str) -> String {
    respond(unusable_patches(body, |log, unusable| {
        options::disable_unusable_dofus(log, unusable, &ActiveCatalog)
    }))
}

/// Handle POST /api/options/unusable/prysmaradites
pub fn handle_unusable_prysmaradites_post(body: &str) -> String {
    respond(unusable_patches(body, |log, unusable| {
        options::disable_unusable_prysmaradites(log, unusable, &ActiveCatalog)
    }))
}

fn unusable_patches<F>(body: &str, disable: F) -> Result<String>
where
    F: FnOnce(&mut PatchLog, &UnusableSet),
{
    let unusable: UnusableSet = serde_json::from_str(body)?;
    let mut log = PatchLog::new();
    disable(&mut log, &unusable);
    Ok(log.to_json())
}

// ── POST /api/options/submit ───────────────────────────────────────

/// Handle POST /api/options/submit
/// Body: the URL-encoded options form. Returns the options as JSON.
pub fn handle_submit_post(body: &str) -> String {
    let options = options::read_submission(body);
    respond(serde_json::to_string(&options).map_err(OptionsError::from))
}

/// Handle POST /api/options/submit/prysmaradites
pub fn handle_submit_prysmaradites_post(body: &str) -> String {
    let prysmaradites = options::read_prysmaradite_submission(body);
    respond(serde_json::to_string(&prysmaradites).map_err(OptionsError::from))
}

// ── GET /api/options/label ─────────────────────────────────────────

/// Handle GET /api/options/label?mapper={yes_no|gelano|trophies}&value={json}
/// A `value` that is not valid JSON is taken as a plain string; a missing
/// one is unset.
pub fn handle_label_get(query: &str) -> String {
    respond(label_for(query))
}

fn label_for(query: &str) -> Result<String> {
    let params = parse_query(query);
    let mapper: LabelMapper = get_param(&params, "mapper")
        .ok_or(OptionsError::MissingParam("mapper"))?
        .parse()?;
    let value = match get_param(&params, "value") {
        Some(raw) => {
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
        }
        None => Value::Null,
    };
    Ok(mapper.label(&OptionValue::from(value)).to_string())
}

// ── POST /api/i18n/catalog ─────────────────────────────────────────

/// Handle POST /api/i18n/catalog
/// Body: JSON object msgid -> translation. Replaces the active catalog.
pub fn handle_catalog_post(body: &str) -> String {
    respond(Catalog::from_json(body).map(|catalog| {
        i18n::install_catalog(catalog);
        "ok".to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::patch::FormPatch;
    use crate::options::disable::DOFUS_LEVEL_MESSAGE;

    fn patches(json: &str) -> Vec<FormPatch> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn init_returns_patches() {
        let json = handle_init_post(
            r#"{"options": {"ap_exo": true, "mp_exo": "gelano", "dofuses": {"ochre": true}}}"#,
        );
        let patches = patches(&json);
        assert!(patches.contains(&FormPatch::Checked {
            selector: r#"input[type="radio"][name="mp_exo"][value="gelano"]"#.to_string(),
            checked: true,
        }));
        assert!(patches.contains(&FormPatch::Checked {
            selector: r#"input[type="checkbox"][name="ochre"]"#.to_string(),
            checked: true,
        }));
        assert!(!json.contains("prytekt"));
    }

    #[test]
    fn init_with_companion_touches_prysmaradites() {
        let json = handle_init_post(
            r#"{"options": {}, "prysmaradites": {"prysmaradites": {"prytekt": true}}}"#,
        );
        assert!(json.contains("prytekt"));
        assert!(json.contains("iridescent_pryveil"));
    }

    #[test]
    fn init_rejects_bad_json() {
        let out = handle_init_post("{not json");
        assert!(out.starts_with("error: invalid JSON"));
    }

    #[test]
    fn unusable_dofus_patches() {
        i18n::install_catalog(Catalog::new());
        let patches = patches(&handle_unusable_dofus_post(r#"{"ochre": 1}"#));
        assert_eq!(
            patches,
            vec![
                FormPatch::Disabled { selector: r#"[class~="ochre"]"#.to_string(), disabled: true },
                FormPatch::Checked { selector: r#"[class~="ochre"]"#.to_string(), checked: false },
                FormPatch::Opacity { selector: r#"[class~="ochre"]"#.to_string(), opacity: 0.7 },
                FormPatch::Title {
                    selector: r#"[class~="ochre"]"#.to_string(),
                    title: DOFUS_LEVEL_MESSAGE.to_string(),
                },
            ]
        );
    }

    #[test]
    fn catalog_translates_later_tooltips() {
        let body = format!(r#"{{"{}": "Niveau insuffisant"}}"#, DOFUS_LEVEL_MESSAGE);
        assert_eq!(handle_catalog_post(&body), "ok");
        let json = handle_unusable_dofus_post(r#"{"vulbis": true}"#);
        assert!(json.contains("Niveau insuffisant"));
        // Clean up thread-local state for other tests
        i18n::install_catalog(Catalog::new());
    }

    #[test]
    fn submit_returns_options_json() {
        let json = handle_submit_post("ap_exo=yes&mp_exo=gelano&ochre=on");
        let options: Options = serde_json::from_str(&json).unwrap();
        assert!(options.ap_exo.is_truthy());
        assert_eq!(options.mp_exo.as_token(), Some("gelano"));
        assert!(options.dofuses.flag("ochre"));
    }

    #[test]
    fn submit_prysmaradites_json() {
        let json = handle_submit_prysmaradites_post("shiny_surpryz=on");
        let p: Prysmaradites = serde_json::from_str(&json).unwrap();
        assert!(p.prysmaradites.flag("shiny_surpryz"));
        assert!(!p.prysmaradites.flag("surpryz"));
    }

    #[test]
    fn label_route() {
        assert_eq!(handle_label_get("?mapper=gelano&value=%22gelano%22"), "gelano");
        assert_eq!(handle_label_get("?mapper=trophies&value=cawwot"), "cawwot");
        assert_eq!(handle_label_get("?mapper=yes_no&value=true"), "yes");
        assert_eq!(handle_label_get("?mapper=yes_no"), "no");
        assert!(handle_label_get("?value=true").contains("missing parameter: mapper"));
        assert!(handle_label_get("?mapper=maybe").contains("unknown label mapper"));
    }
}
