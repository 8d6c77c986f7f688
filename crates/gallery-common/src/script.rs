//! Helpers for emitting the generated media-list script.

use crate::error::{Error, Result};

/// Wrap `value` in single quotes, escaping backslashes and single quotes.
///
/// # Examples
///
/// ```
/// use gallery_common::script::quote_single;
///
/// assert_eq!(quote_single("a.jpg"), "'a.jpg'");
/// assert_eq!(quote_single("it's.jpg"), r"'it\'s.jpg'");
/// ```
pub fn quote_single(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Check that `ident` can be used as the variable name on the left of the
/// generated assignment.
pub fn validate_identifier(ident: &str) -> Result<()> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "{ident:?} is not a valid script identifier"
        )))
    }
}
