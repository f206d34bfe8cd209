//! Source file schema for member records.
//!
//! The declared type of each field is informational only. Values stay
//! opaque strings until a field transformer interprets them.

use serde::{Deserialize, Serialize};

/// Field names used by the member schema and the derived output fields.
pub mod fields {
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const COMPANY: &str = "Company";
    pub const BIRTH_DATE: &str = "BirthDate";
    pub const SALARY: &str = "Salary";
    pub const ADDRESS: &str = "Address";
    pub const SUBURB: &str = "Suburb";
    pub const STATE: &str = "State";
    pub const POST: &str = "Post";
    pub const PHONE: &str = "Phone";
    pub const MOBILE: &str = "Mobile";
    pub const EMAIL: &str = "Email";

    // Derived fields
    pub const FULL_NAME: &str = "FullName";
    pub const AGE: &str = "Age";
    pub const SALARY_BUCKET: &str = "SalaryBucket";

    // Keys inside the nested Address value
    pub const STREET: &str = "Street";
}

/// Declared type of a source field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
}

/// One named field in the source schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Ordered list of source fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The canonical 12-field member schema.
    pub fn member() -> Self {
        let (text, number) = (FieldType::String, FieldType::Number);
        Self::new(vec![
            FieldSpec::new(fields::FIRST_NAME, text),
            FieldSpec::new(fields::LAST_NAME, text),
            FieldSpec::new(fields::COMPANY, text),
            FieldSpec::new(fields::BIRTH_DATE, number),
            FieldSpec::new(fields::SALARY, number),
            FieldSpec::new(fields::ADDRESS, text),
            FieldSpec::new(fields::SUBURB, text),
            FieldSpec::new(fields::STATE, text),
            FieldSpec::new(fields::POST, number),
            FieldSpec::new(fields::PHONE, number),
            FieldSpec::new(fields::MOBILE, number),
            FieldSpec::new(fields::EMAIL, text),
        ])
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::member()
    }
}
