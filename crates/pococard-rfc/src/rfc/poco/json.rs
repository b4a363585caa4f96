//! Building contact records from Portable Contacts JSON.

use serde_json::{Map, Value};

use super::record::{AttributeValue, Complex, ContactRecord, SubField};
use crate::error::{RfcError, RfcResult};

/// Member of a Portable Contacts response that holds the contacts.
const ENTRY: &str = "entry";

impl ContactRecord {
    /// Converts one JSON object into a contact record.
    ///
    /// `null` attributes are skipped; other scalars become text.
    ///
    /// ## Errors
    /// Returns [`RfcError::InvalidInput`] if `value` is not an object.
    pub fn from_json(value: &Value) -> RfcResult<Self> {
        let Value::Object(object) = value else {
            return Err(RfcError::InvalidInput(format!(
                "contact entry must be an object, found {}",
                kind(value)
            )));
        };

        Ok(object
            .iter()
            .filter_map(|(name, value)| attribute_from_json(value).map(|v| (name.as_str(), v)))
            .collect())
    }
}

/// Parses a Portable Contacts JSON document into contact records.
///
/// Accepts a single entry object, an array of entries, or a response
/// envelope whose `entry` member holds either of those.
///
/// ## Errors
/// Returns an error if the text is not valid JSON or an entry is not an
/// object.
pub fn parse_records(input: &str) -> RfcResult<Vec<ContactRecord>> {
    let document: Value = serde_json::from_str(input)?;
    records_from_json(&document)
}

/// Converts an already parsed JSON document into contact records.
///
/// ## Errors
/// Returns [`RfcError::InvalidInput`] if an entry is not an object or the
/// document is neither an object nor an array.
pub fn records_from_json(document: &Value) -> RfcResult<Vec<ContactRecord>> {
    match document {
        Value::Object(object) => match object.get(ENTRY) {
            Some(entry @ (Value::Object(_) | Value::Array(_))) => records_from_json(entry),
            Some(other) => Err(RfcError::InvalidInput(format!(
                "response `entry` must be an object or array, found {}",
                kind(other)
            ))),
            None => Ok(vec![ContactRecord::from_json(document)?]),
        },
        Value::Array(entries) => entries.iter().map(ContactRecord::from_json).collect(),
        other => Err(RfcError::InvalidInput(format!(
            "expected a contact object or array, found {}",
            kind(other)
        ))),
    }
}

fn attribute_from_json(value: &Value) -> Option<AttributeValue> {
    match value {
        Value::Null => None,
        Value::Object(object) => Some(AttributeValue::Complex(complex_from_json(object))),
        Value::Array(items) => {
            if !items.is_empty() && items.iter().all(Value::is_object) {
                Some(AttributeValue::ComplexList(
                    items
                        .iter()
                        .filter_map(Value::as_object)
                        .map(complex_from_json)
                        .collect(),
                ))
            } else {
                Some(AttributeValue::ScalarList(
                    items.iter().filter_map(scalar_text).collect(),
                ))
            }
        }
        scalar => scalar_text(scalar).map(AttributeValue::Scalar),
    }
}

fn complex_from_json(object: &Map<String, Value>) -> Complex {
    let mut complex = Complex::new();
    for (name, value) in object {
        let field = match value {
            Value::Object(nested) => Some(SubField::Complex(complex_from_json(nested))),
            other => scalar_text(other).map(SubField::Scalar),
        };
        if let Some(field) = field {
            complex.insert(name.as_str(), field);
        }
    }
    complex
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_attributes_keep_document_order() {
        let record = ContactRecord::from_json(&json!({
            "note": "first",
            "displayName": "second",
            "id": 42
        }))
        .unwrap();

        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["note", "displayName", "id"]);
        assert_eq!(record.get("id"), Some(&AttributeValue::scalar("42")));
    }

    #[test]
    fn shapes_map_to_variants() {
        let record = ContactRecord::from_json(&json!({
            "name": { "givenName": "Ada", "familyName": "Lovelace" },
            "tags": ["math", 1, null],
            "emails": [{ "value": "ada@example.com", "primary": true }],
            "nickname": null
        }))
        .unwrap();

        assert!(matches!(record.get("name"), Some(AttributeValue::Complex(_))));
        assert_eq!(
            record.get("tags"),
            Some(&AttributeValue::scalars(["math", "1"]))
        );
        let Some(AttributeValue::ComplexList(emails)) = record.get("emails") else {
            panic!("emails should be a complex list");
        };
        assert!(emails[0].is_primary());
        assert!(record.get("nickname").is_none());
    }

    #[test]
    fn empty_array_is_empty_scalar_list() {
        let record = ContactRecord::from_json(&json!({ "emails": [] })).unwrap();
        assert!(record.get("emails").is_some_and(AttributeValue::is_empty_list));
    }

    #[test]
    fn nested_objects_become_nested_complex() {
        let record = ContactRecord::from_json(&json!({
            "organizations": [{ "name": "Plaxo", "location": { "city": "Mountain View" } }]
        }))
        .unwrap();

        let Some(AttributeValue::ComplexList(orgs)) = record.get("organizations") else {
            panic!("organizations should be a complex list");
        };
        assert!(matches!(orgs[0].get("location"), Some(SubField::Complex(_))));
    }

    #[test]
    fn parse_single_entry() {
        let records = parse_records(r#"{"displayName":"Jane"}"#).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn parse_entry_array() {
        let records = parse_records(r#"[{"id":"1"},{"id":"2"}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parse_response_envelope() {
        let records = parse_records(
            r#"{"startIndex":0,"itemsPerPage":2,"totalResults":2,"entry":[{"id":"1"},{"id":"2"}]}"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);

        let single = parse_records(r#"{"entry":{"id":"1"}}"#).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn rejects_non_object_entries() {
        assert!(matches!(
            parse_records(r#"[{"id":"1"}, "oops"]"#),
            Err(RfcError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_records(r#"{"entry": 3}"#),
            Err(RfcError::InvalidInput(_))
        ));
        assert!(matches!(parse_records("true"), Err(RfcError::InvalidInput(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_records("{"), Err(RfcError::JsonError(_))));
    }
}
