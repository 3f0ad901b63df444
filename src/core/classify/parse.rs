//! Strict JSON parsing of model responses with a tagged fallback.
use serde_json::Value;

use crate::types::{Classification, ClassificationOutcome};

/// Parse one model response.
///
/// The whole response text must be a valid JSON document; anything else is
/// a `Fallback` carrying the raw text. Field extraction is lenient: keys
/// that are missing or hold the wrong value type read as absent, and
/// severity is passed through without range checks.
pub fn parse_model_output(raw: &str) -> ClassificationOutcome {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => ClassificationOutcome::Parsed(classification_from_value(&value)),
        Err(_) => ClassificationOutcome::Fallback {
            raw: raw.to_string(),
        },
    }
}

fn classification_from_value(value: &Value) -> Classification {
    Classification {
        category: string_field(value, "category"),
        sentiment: string_field(value, "sentiment"),
        severity: value.get("severity").and_then(Value::as_i64),
        summary: string_field(value, "summary"),
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_json_fields_are_taken_verbatim() {
        let raw = r#"{"category":"Bug/Crash","sentiment":"Negative","severity":4,"summary":"User enjoys the app but reports a launch crash."}"#;
        let outcome = parse_model_output(raw);
        let ClassificationOutcome::Parsed(c) = outcome else {
            panic!("expected parsed outcome");
        };
        assert_eq!(c.category.as_deref(), Some("Bug/Crash"));
        assert_eq!(c.sentiment.as_deref(), Some("Negative"));
        assert_eq!(c.severity, Some(4));
        assert_eq!(
            c.summary.as_deref(),
            Some("User enjoys the app but reports a launch crash.")
        );
    }

    #[test]
    fn out_of_range_severity_passes_through() {
        let outcome = parse_model_output(r#"{"severity":17}"#);
        let ClassificationOutcome::Parsed(c) = outcome else {
            panic!("expected parsed outcome");
        };
        assert_eq!(c.severity, Some(17));
    }

    #[test]
    fn missing_keys_read_as_absent() {
        let outcome = parse_model_output(r#"{"category":"Praise"}"#);
        let ClassificationOutcome::Parsed(c) = outcome else {
            panic!("expected parsed outcome");
        };
        assert_eq!(c.category.as_deref(), Some("Praise"));
        assert_eq!(c.sentiment, None);
        assert_eq!(c.severity, None);
        assert_eq!(c.summary, None);
    }

    #[test]
    fn wrong_value_types_read_as_absent() {
        let outcome = parse_model_output(r#"{"category":2,"severity":"critical"}"#);
        let ClassificationOutcome::Parsed(c) = outcome else {
            panic!("expected parsed outcome");
        };
        assert_eq!(c.category, None);
        assert_eq!(c.severity, None);
    }

    #[test]
    fn non_json_text_becomes_fallback() {
        let raw = "I think this is mixed feedback.";
        let outcome = parse_model_output(raw);
        assert!(outcome.is_fallback());
        assert_eq!(outcome.category(), "Other");
        assert_eq!(outcome.sentiment(), "Neutral");
        assert_eq!(outcome.severity(), "3");
        assert_eq!(outcome.summary(), raw);
    }

    #[test]
    fn truncated_json_becomes_fallback() {
        assert!(parse_model_output(r#"{"category":"Praise""#).is_fallback());
    }
}
