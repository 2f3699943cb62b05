//! Display formatting for event locations.
//!
//! The store's `location` column holds either plain text ("Fellowship Hall")
//! or a JSON-encoded address object written by the admin form.

use serde_json::Value;

pub const LOCATION_PLACEHOLDER: &str = "Location TBA";

/// Address keys, in display order.
const ADDRESS_FIELDS: [&str; 5] = ["name", "street", "city", "state", "zip"];

pub fn format_location(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return LOCATION_PLACEHOLDER.to_string();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => {
            let parts: Vec<&str> = ADDRESS_FIELDS
                .iter()
                .filter_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();

            if parts.is_empty() {
                LOCATION_PLACEHOLDER.to_string()
            } else {
                parts.join(", ")
            }
        }
        Ok(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Ok(Value::String(_)) => LOCATION_PLACEHOLDER.to_string(),
        // Not JSON at all, or JSON we don't render (numbers, arrays): show as typed
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gives_placeholder() {
        assert_eq!(format_location(None), LOCATION_PLACEHOLDER);
        assert_eq!(format_location(Some("")), LOCATION_PLACEHOLDER);
        assert_eq!(format_location(Some("   ")), LOCATION_PLACEHOLDER);
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(format_location(Some("Fellowship Hall")), "Fellowship Hall");
    }

    #[test]
    fn address_object_is_joined() {
        let raw = r#"{"street": "12 Elm St", "city": "Springfield", "state": "IL", "zip": "62701"}"#;
        assert_eq!(format_location(Some(raw)), "12 Elm St, Springfield, IL, 62701");
    }

    #[test]
    fn address_object_skips_missing_and_blank_fields() {
        let raw = r#"{"name": "Grace Chapel", "street": " ", "city": "Springfield", "country": "US"}"#;
        assert_eq!(format_location(Some(raw)), "Grace Chapel, Springfield");
    }

    #[test]
    fn object_without_address_fields_gives_placeholder() {
        assert_eq!(format_location(Some(r#"{"lat": 1.5}"#)), LOCATION_PLACEHOLDER);
    }

    #[test]
    fn malformed_json_is_literal() {
        assert_eq!(format_location(Some(r#"{"street": "12 Elm"#)), r#"{"street": "12 Elm"#);
        assert_eq!(format_location(Some("42")), "42");
    }
}
