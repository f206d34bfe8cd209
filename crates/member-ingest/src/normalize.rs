//! Structural validation of raw records against the schema.

use member_model::{RawRecord, Record, Schema};

/// Convert a raw record into a named-field record.
///
/// Values are paired with schema names in order and stripped of surrounding
/// whitespace. Returns `None` (and logs a warning) when the field count does
/// not match the schema; no other validation happens here.
pub fn normalize_record(raw: &RawRecord, schema: &Schema) -> Option<Record> {
    if raw.len() != schema.len() {
        tracing::warn!(
            line = raw.line,
            expected = schema.len(),
            found = raw.len(),
            record = ?raw.fields,
            "ignoring record with a different number of fields than the schema"
        );
        return None;
    }

    Some(
        schema
            .names()
            .zip(&raw.fields)
            .map(|(name, value)| (name, value.trim()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(fields: &[&str]) -> RawRecord {
        fields.iter().copied().collect()
    }

    #[test]
    fn rejects_extra_fields() {
        let record = raw(&[
            "first_name",
            "last_name",
            "company",
            "birth",
            "salary",
            "addr",
            "suburb",
            "state",
            "post",
            "phone",
            "mobile",
            "email",
            "extra field",
        ]);
        assert_eq!(normalize_record(&record, &Schema::member()), None);
    }

    #[test]
    fn rejects_missing_fields() {
        let record = raw(&[
            "first_name",
            "last_name",
            "company",
            "birth",
            "salary",
            "addr",
            "suburb",
            "state",
            "post",
            "phone",
            "mobile",
        ]);
        assert_eq!(normalize_record(&record, &Schema::member()), None);
    }

    #[test]
    fn trims_and_names_every_field() {
        let record = raw(&[
            "first_name   ",
            "  last_name",
            "company",
            "birth",
            "salary",
            "addr",
            "suburb",
            "state",
            "post",
            "phone",
            "mobile",
            "  email  ",
        ]);
        let expected: Record = [
            ("FirstName", "first_name"),
            ("LastName", "last_name"),
            ("Company", "company"),
            ("BirthDate", "birth"),
            ("Salary", "salary"),
            ("Address", "addr"),
            ("Suburb", "suburb"),
            ("State", "state"),
            ("Post", "post"),
            ("Phone", "phone"),
            ("Mobile", "mobile"),
            ("Email", "email"),
        ]
        .into_iter()
        .collect();
        assert_eq!(normalize_record(&record, &Schema::member()), Some(expected));
    }

    #[test]
    fn empty_values_are_kept() {
        let record = raw(&["", " ", "", "", "", "", "", "", "", "", "", ""]);
        let normalized = normalize_record(&record, &Schema::member()).unwrap();
        assert_eq!(normalized.len(), 12);
        assert_eq!(normalized.text("LastName"), Some(""));
    }
}
