//! Map style encoding.
//!
//! Deserializes provider style rules from JSON and serializes them into
//! the provider's query-fragment language. Each rule becomes a
//! `style=feature:<F>|element:<E>|<prop>:<val>|...` fragment; fragments
//! are joined with `&`. The encoded string is treated as opaque by the
//! rest of the crate.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while loading a style file.
#[derive(Debug, Error)]
pub enum StyleError {
    /// Style file could not be read.
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    /// Style file is not valid rule JSON.
    #[error("failed to parse style file: {0}")]
    Json(#[from] serde_json::Error),
}

/// One styling rule: an optional feature/element selector plus a list of
/// single-key styling properties.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRule {
    /// Feature class the rule applies to, `all` when absent.
    #[serde(rename = "featureType")]
    pub feature_type: Option<String>,

    /// Element of the feature the rule applies to, `all` when absent.
    #[serde(rename = "elementType")]
    pub element_type: Option<String>,

    /// Styling properties, each a single-key object.
    #[serde(default)]
    pub stylers: Vec<Map<String, Value>>,
}

/// Load style rules from a JSON file.
pub fn load(path: &Path) -> Result<Vec<StyleRule>, StyleError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Encode rules into the provider's query-fragment language.
///
/// A rule with no stylers contributes a bare `style=` fragment rather
/// than disappearing, so the fragment count always matches the rule
/// count. Hex colors (`#RRGGBB`) are rewritten to the `0xRRGGBB` form
/// the query encoding expects.
pub fn encode(rules: &[StyleRule]) -> String {
    rules
        .iter()
        .map(encode_rule)
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_rule(rule: &StyleRule) -> String {
    let mut fragment = String::from("style=");

    if rule.stylers.is_empty() {
        return fragment;
    }

    fragment.push_str("feature:");
    fragment.push_str(rule.feature_type.as_deref().unwrap_or("all"));
    fragment.push_str("|element:");
    fragment.push_str(rule.element_type.as_deref().unwrap_or("all"));
    fragment.push('|');

    for styler in &rule.stylers {
        if let Some((property, value)) = styler.iter().next() {
            fragment.push_str(property);
            fragment.push(':');
            fragment.push_str(&render_value(value));
            fragment.push('|');
        }
    }

    fragment
}

/// Render a styler value for the query encoding.
fn render_value(value: &Value) -> String {
    let text = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    text.replace('#', "0x")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules_from_json(json: &str) -> Vec<StyleRule> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_encode_single_rule_with_hex_color() {
        let rules = rules_from_json(
            r##"[{"featureType": "road", "elementType": "geometry",
                 "stylers": [{"color": "#ff0000"}]}]"##,
        );
        assert_eq!(
            encode(&rules),
            "style=feature:road|element:geometry|color:0xff0000|"
        );
    }

    #[test]
    fn test_encode_defaults_to_all_selectors() {
        let rules = rules_from_json(r#"[{"stylers": [{"visibility": "off"}]}]"#);
        assert_eq!(encode(&rules), "style=feature:all|element:all|visibility:off|");
    }

    #[test]
    fn test_encode_empty_stylers_contributes_bare_fragment() {
        let rules = rules_from_json(r#"[{"featureType": "water", "stylers": []}]"#);
        assert_eq!(encode(&rules), "style=");
    }

    #[test]
    fn test_encode_missing_stylers_contributes_bare_fragment() {
        let rules = rules_from_json(r#"[{"featureType": "water"}]"#);
        assert_eq!(encode(&rules), "style=");
    }

    #[test]
    fn test_encode_joins_rules_with_ampersand() {
        let rules = rules_from_json(
            r##"[{"featureType": "road", "stylers": [{"color": "#00ff00"}]},
                {"stylers": []},
                {"featureType": "water", "elementType": "labels",
                 "stylers": [{"visibility": "off"}]}]"##,
        );
        assert_eq!(
            encode(&rules),
            "style=feature:road|element:all|color:0x00ff00|\
             &style=\
             &style=feature:water|element:labels|visibility:off|"
        );
    }

    #[test]
    fn test_encode_multiple_stylers_in_order() {
        let rules = rules_from_json(
            r##"[{"featureType": "poi", "stylers":
                 [{"visibility": "simplified"}, {"color": "#abcdef"}]}]"##,
        );
        assert_eq!(
            encode(&rules),
            "style=feature:poi|element:all|visibility:simplified|color:0xabcdef|"
        );
    }

    #[test]
    fn test_encode_numeric_and_bool_values() {
        let rules = rules_from_json(
            r#"[{"stylers": [{"weight": 2.5}]},
                {"stylers": [{"invert_lightness": true}]}]"#,
        );
        assert_eq!(
            encode(&rules),
            "style=feature:all|element:all|weight:2.5|\
             &style=feature:all|element:all|invert_lightness:true|"
        );
    }

    #[test]
    fn test_encode_empty_rule_list() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(
            &path,
            r##"[{"featureType": "road", "stylers": [{"color": "#112233"}]}]"##,
        )
        .unwrap();

        let rules = load(&path).unwrap();
        assert_eq!(encode(&rules), "style=feature:road|element:all|color:0x112233|");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load(&path), Err(StyleError::Json(_))));
    }
}
