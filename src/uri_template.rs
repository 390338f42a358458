//! RFC 6570 URI template expansion, restricted to the forms Graph request
//! templates use:
//!
//! - `{var}` simple expansion, value percent-encoded outside the unreserved set
//! - `{+var}` reserved expansion, URL delimiters kept as-is
//! - `{?a,b}` / `{&a,b}` form-style query expansion
//!
//! Variable names are emitted as written, so `{?%24select}` renders as
//! `?%24select=...`, which servers decode to `$select`.

use std::collections::BTreeMap;
use std::fmt;

/// A value bound to a template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateValue {
    /// A scalar string.
    Text(String),
    /// A list; items are encoded individually and joined with `,`.
    List(Vec<String>),
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Text(value)
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        TemplateValue::List(value)
    }
}

/// Why a template could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{` without a matching `}`.
    Unterminated,
    /// An operator this expander does not implement (`#`, `.`, `/`, ...).
    UnsupportedOperator(char),
    /// A path variable (simple or reserved) had no value.
    MissingVariable(String),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Unterminated => f.write_str("unterminated expression"),
            TemplateError::UnsupportedOperator(op) => write!(f, "unsupported operator '{op}'"),
            TemplateError::MissingVariable(name) => write!(f, "missing path parameter '{name}'"),
        }
    }
}

impl std::error::Error for TemplateError {}

const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Expands `template` with the given variables.
///
/// Path variables (`{var}`, `{+var}`) must be present. Query variables
/// that are absent, or bound to an empty list, are skipped.
pub fn expand(
    template: &str,
    vars: &BTreeMap<String, TemplateValue>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(TemplateError::Unterminated)?;
        expand_expression(&after[..close], vars, &mut out)?;
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn expand_expression(
    expr: &str,
    vars: &BTreeMap<String, TemplateValue>,
    out: &mut String,
) -> Result<(), TemplateError> {
    let (op, names) = match expr.chars().next() {
        Some(c @ ('+' | '?' | '&')) => (Some(c), &expr[1..]),
        Some(c @ ('#' | '.' | '/' | ';' | '=' | ',' | '!' | '@' | '|')) => {
            return Err(TemplateError::UnsupportedOperator(c));
        }
        _ => (None, expr),
    };

    match op {
        None | Some('+') => {
            let reserved = op.is_some();
            for (i, name) in names.split(',').enumerate() {
                let value = vars
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&encode_value(value, reserved));
            }
        }
        Some(first) => {
            let mut separator = first;
            for name in names.split(',') {
                let Some(value) = vars.get(name) else {
                    continue;
                };
                if matches!(value, TemplateValue::List(items) if items.is_empty()) {
                    continue;
                }
                out.push(separator);
                out.push_str(name);
                out.push('=');
                out.push_str(&encode_value(value, false));
                separator = '&';
            }
        }
    }
    Ok(())
}

fn encode_value(value: &TemplateValue, reserved: bool) -> String {
    match value {
        TemplateValue::Text(text) => encode(text, reserved),
        TemplateValue::List(items) => items
            .iter()
            .map(|item| encode(item, reserved))
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn encode(text: &str, reserved: bool) -> String {
    if !reserved {
        return urlencoding::encode(text).into_owned();
    }
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() || "-._~%".contains(c) || RESERVED.contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, TemplateValue)]) -> BTreeMap<String, TemplateValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn reserved_expansion_keeps_base_url_intact() {
        let v = vars(&[("baseurl", "https://graph.microsoft.com/v1.0".into())]);
        let url = expand("{+baseurl}/deviceAppManagement", &v).unwrap();
        assert_eq!(url, "https://graph.microsoft.com/v1.0/deviceAppManagement");
    }

    #[test]
    fn simple_expansion_encodes_path_parameters() {
        let v = vars(&[
            ("baseurl", "https://graph.microsoft.com/v1.0".into()),
            ("mobileApp%2Did", "a b/c".into()),
        ]);
        let url = expand("{+baseurl}/deviceAppManagement/mobileApps/{mobileApp%2Did}", &v).unwrap();
        assert_eq!(
            url,
            "https://graph.microsoft.com/v1.0/deviceAppManagement/mobileApps/a%20b%2Fc"
        );
    }

    #[test]
    fn query_expansion_skips_undefined_and_keeps_template_order() {
        let v = vars(&[
            ("baseurl", "https://h".into()),
            ("%24top", "5".into()),
            ("%24filter", "displayName eq 'Word'".into()),
        ]);
        let url = expand("{+baseurl}/x{?%24count,%24filter,%24top}", &v).unwrap();
        assert_eq!(
            url,
            "https://h/x?%24filter=displayName%20eq%20%27Word%27&%24top=5"
        );
    }

    #[test]
    fn query_expansion_with_nothing_defined_emits_nothing() {
        let v = vars(&[("baseurl", "https://h".into())]);
        let url = expand("{+baseurl}/x{?%24expand,%24select}", &v).unwrap();
        assert_eq!(url, "https://h/x");
    }

    #[test]
    fn list_values_are_comma_joined_after_item_encoding() {
        let v = vars(&[
            ("baseurl", "https://h".into()),
            (
                "%24select",
                vec!["id".to_string(), "display name".to_string()].into(),
            ),
            ("%24expand", TemplateValue::List(Vec::new())),
        ]);
        let url = expand("{+baseurl}/x{?%24expand,%24select}", &v).unwrap();
        assert_eq!(url, "https://h/x?%24select=id,display%20name");
    }

    #[test]
    fn function_parameters_expand_inside_literals() {
        let v = vars(&[
            ("baseurl", "https://h".into()),
            ("bundleId", "com.contoso.app".into()),
        ]);
        let url = expand("{+baseurl}/vppTokens/getLicensesForApp(bundleId='{bundleId}')", &v)
            .unwrap();
        assert_eq!(url, "https://h/vppTokens/getLicensesForApp(bundleId='com.contoso.app')");
    }

    #[test]
    fn continuation_operator_appends_with_ampersand() {
        let v = vars(&[("a", "1".into()), ("b", "2".into())]);
        assert_eq!(expand("/x?fixed=0{&a,b}", &v).unwrap(), "/x?fixed=0&a=1&b=2");
    }

    #[test]
    fn missing_path_variable_is_an_error() {
        let v = vars(&[("baseurl", "https://h".into())]);
        let err = expand("{+baseurl}/mobileApps/{mobileApp%2Did}", &v).unwrap_err();
        assert_eq!(err, TemplateError::MissingVariable("mobileApp%2Did".to_string()));
    }

    #[test]
    fn malformed_templates_are_rejected() {
        let v = BTreeMap::new();
        assert_eq!(expand("/x{?a", &v).unwrap_err(), TemplateError::Unterminated);
        assert_eq!(
            expand("/x{#a}", &v).unwrap_err(),
            TemplateError::UnsupportedOperator('#')
        );
    }
}
