//! Form surface — the controls the binding code writes to.
//!
//! Controls are addressed by selector rather than by handle, so a selector
//! matching nothing is a silent no-op on every surface:
//!
//! - [`memory::MemoryForm`] keeps controls in a `Vec` (tests, headless use)
//! - [`patch::PatchLog`] records writes as JSON for the page shim to replay
//! - `dom::DomForm` writes straight to the browser document (wasm32 only)

pub mod memory;
pub mod patch;

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// How to find the control(s) a write applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// The radio of group `name` whose value is `value`.
    Radio { name: &'a str, value: &'a str },
    /// Checkboxes named `name`.
    Checkbox { name: &'a str },
    /// Any element carrying class `class`.
    Class(&'a str),
}

impl Selector<'_> {
    /// Equivalent CSS selector for `querySelectorAll`.
    ///
    /// Classes use the `[class~=..]` form so that any key is a valid
    /// selector, including ones that are not CSS identifiers.
    pub fn to_css(&self) -> String {
        match self {
            Selector::Radio { name, value } => format!(
                r#"input[type="radio"][name="{}"][value="{}"]"#,
                css_string(name),
                css_string(value)
            ),
            Selector::Checkbox { name } => {
                format!(r#"input[type="checkbox"][name="{}"]"#, css_string(name))
            }
            Selector::Class(class) => format!(r#"[class~="{}"]"#, css_string(class)),
        }
    }
}

/// Escape a value for use inside a double-quoted CSS string. Newline
/// characters become hex escapes; NUL becomes U+FFFD, as CSS parsing would
/// make it anyway.
fn css_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\u{c}' => out.push_str("\\c "),
            '\0' => out.push_str("\\fffd "),
            _ => out.push(c),
        }
    }
    out
}

/// Writable view of a form. Every setter applies to all matching controls.
pub trait FormSurface {
    /// Checking a radio unchecks the rest of its group.
    fn set_checked(&mut self, selector: Selector<'_>, checked: bool);
    fn set_disabled(&mut self, selector: Selector<'_>, disabled: bool);
    fn set_opacity(&mut self, selector: Selector<'_>, opacity: f32);
    /// Hover tooltip (`title` attribute).
    fn set_title(&mut self, selector: Selector<'_>, title: &str);
}
