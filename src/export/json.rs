//! JSON export of a form record.

use crate::domain::{FormRecord, Result};

/// Serializes the record as pretty-printed JSON with camelCase keys.
///
/// # Errors
///
/// Returns [`ZformError::Json`](crate::ZformError::Json) if encoding fails.
///
/// # Example
///
/// ```
/// use zform::domain::FormRecord;
/// use zform::export::to_json_bytes;
///
/// let bytes = to_json_bytes(&FormRecord::default())?;
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("\"firstName\": \"\""));
/// # Ok::<(), zform::ZformError>(())
/// ```
pub fn to_json_bytes(record: &FormRecord) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(record)?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Attachment, Choice, Subject};

    #[test]
    fn json_round_trips_the_record() {
        let mut record = FormRecord {
            first_name: "John".to_string(),
            choice: Some(Choice::Maybe),
            resume: Some(Attachment::new("cv.pdf", 1000)),
            ..FormRecord::default()
        };
        record.subjects.insert(Subject::Physics);

        let bytes = to_json_bytes(&record).unwrap();
        let parsed: FormRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn json_uses_field_keys_and_plain_enum_names() {
        let mut record = FormRecord::default();
        record.subjects.insert(Subject::English);

        let value: serde_json::Value = serde_json::from_slice(&to_json_bytes(&record).unwrap()).unwrap();
        assert_eq!(value["gender"], "Male");
        assert_eq!(value["subjects"], serde_json::json!(["English"]));
        assert!(value["resume"].is_null());
        assert!(value["choice"].is_null());
    }
}
