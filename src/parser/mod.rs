//! Roster payload parser.
//!
//! Converts the fetched JSON text into records. The payload must be a JSON
//! array; each element is decoded on its own so one bad element only costs
//! that element.

use crate::model::{LoadError, MalformedRecord, Record};
use serde_json::Value;

/// Outcome of decoding a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRoster {
    /// Records that fit the record shape, in payload order.
    pub records: Vec<Record>,
    /// Elements that were rejected, in payload order.
    pub rejected: Vec<MalformedRecord>,
}

/// Decode a roster payload.
///
/// # Errors
///
/// Returns [`LoadError::InvalidJson`] when the text is not JSON and
/// [`LoadError::NotAnArray`] when the top level is not an array. Element
/// level problems are reported in [`ParsedRoster::rejected`] instead.
pub fn parse_roster(payload: &str) -> Result<ParsedRoster, LoadError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| LoadError::InvalidJson {
        line: e.line(),
        column: e.column(),
        reason: e.to_string(),
    })?;

    let Value::Array(elements) = value else {
        return Err(LoadError::NotAnArray {
            found: json_type_name(&value),
        });
    };

    let mut roster = ParsedRoster::default();
    for (index, element) in elements.into_iter().enumerate() {
        match parse_record(element, index) {
            Ok(record) => roster.records.push(record),
            Err(rejected) => roster.rejected.push(rejected),
        }
    }

    Ok(roster)
}

/// Decode one payload element.
///
/// # Errors
///
/// Returns [`MalformedRecord`] naming the element index and the first field
/// problem serde reported.
pub fn parse_record(element: Value, index: usize) -> Result<Record, MalformedRecord> {
    if !element.is_object() {
        return Err(MalformedRecord {
            index,
            reason: format!("expected an object, found {}", json_type_name(&element)),
        });
    }

    serde_json::from_value(element).map_err(|e| MalformedRecord {
        index,
        reason: e.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassLabel, RecordId};

    const BOB: &str = r#"{"id":1,"first_name":"Bob","last_name":"Zane","gender":"Male","class":1,"marks":70,"passing":true,"email":"bz@x.com","img_src":"https://x/1.png"}"#;
    const AMY: &str = r#"{"id":2,"first_name":"Amy","last_name":"Ames","gender":"Female","class":2,"marks":90,"passing":false,"email":"aa@x.com","img_src":"https://x/2.png"}"#;

    #[test]
    fn parses_array_of_records_in_order() {
        let payload = format!("[{BOB},{AMY}]");
        let roster = parse_roster(&payload).unwrap();

        assert_eq!(roster.records.len(), 2);
        assert!(roster.rejected.is_empty());
        assert_eq!(roster.records[0].id, RecordId::Number(1_i64.into()));
        assert_eq!(roster.records[1].first_name, "Amy");
        assert_eq!(roster.records[1].class, ClassLabel::Number(2.0));
    }

    #[test]
    fn empty_array_is_an_empty_roster() {
        let roster = parse_roster("[]").unwrap();
        assert_eq!(roster, ParsedRoster::default());
    }

    #[test]
    fn invalid_json_reports_position() {
        let err = parse_roster("[{\"id\": 1,").unwrap_err();
        match err {
            LoadError::InvalidJson { line, .. } => assert_eq!(line, 1),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = parse_roster(BOB).unwrap_err();
        assert_eq!(err, LoadError::NotAnArray { found: "object" });
    }

    #[test]
    fn element_missing_field_is_skipped_with_reason() {
        let no_first_name = r#"{"id":3,"last_name":"Nameless","gender":"Male","class":1,"marks":1,"passing":true,"email":"n@x.com","img_src":""}"#;
        let payload = format!("[{BOB},{no_first_name},{AMY}]");
        let roster = parse_roster(&payload).unwrap();

        assert_eq!(roster.records.len(), 2);
        assert_eq!(roster.rejected.len(), 1);
        assert_eq!(roster.rejected[0].index, 1);
        assert!(
            roster.rejected[0].reason.contains("first_name"),
            "reason should name the field: {}",
            roster.rejected[0].reason
        );
    }

    #[test]
    fn non_object_element_is_skipped() {
        let payload = format!("[{BOB},42]");
        let roster = parse_roster(&payload).unwrap();
        assert_eq!(roster.records.len(), 1);
        assert_eq!(
            roster.rejected,
            vec![MalformedRecord {
                index: 1,
                reason: "expected an object, found number".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let extra = r#"{"id":4,"first_name":"Cy","last_name":"Dee","gender":"Male","class":"3","marks":55.5,"passing":true,"email":"c@x.com","img_src":"","house":"Blue"}"#;
        let roster = parse_roster(&format!("[{extra}]")).unwrap();
        assert_eq!(roster.records.len(), 1);
        assert_eq!(roster.records[0].class, ClassLabel::Text("3".to_string()));
    }
}
