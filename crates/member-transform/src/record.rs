//! Record-level orchestration of the field transformers.

use member_model::{Record, TransformOptions, fields};

use crate::fields::{
    cleanse_birth_date, cleanse_name, cleanse_salary, derive_address, derive_age,
    derive_full_name, derive_salary_bucket,
};

/// Transform a normalized record in place into its output form.
///
/// Steps run in a fixed order and later steps read the values written by
/// earlier ones:
///
/// 1. BirthDate to `DD/MM/YYYY`
/// 2. Salary to currency
/// 3. FirstName and LastName cleansing
/// 4. FullName from the cleansed names
/// 5. Age from the cleansed BirthDate
/// 6. SalaryBucket from the cleansed Salary
/// 7. Nested Address from Address, Suburb, State, and Post
/// 8. Removal of the configured unused fields
///
/// A step that yields no value removes its target field.
pub fn transform_record(record: &mut Record, options: &TransformOptions) {
    let birth_date = record.text(fields::BIRTH_DATE).and_then(cleanse_birth_date);
    record.assign(fields::BIRTH_DATE, birth_date);

    let salary = record.text(fields::SALARY).and_then(cleanse_salary);
    record.assign(fields::SALARY, salary);

    let first_name = record.text(fields::FIRST_NAME).and_then(cleanse_name);
    record.assign(fields::FIRST_NAME, first_name);
    let last_name = record.text(fields::LAST_NAME).and_then(cleanse_name);
    record.assign(fields::LAST_NAME, last_name);

    let full_name = derive_full_name(
        record.text(fields::FIRST_NAME),
        record.text(fields::LAST_NAME),
    );
    record.assign(fields::FULL_NAME, full_name);

    let age = derive_age(record.text(fields::BIRTH_DATE), options.reference_date);
    record.assign(fields::AGE, age);

    let bucket = derive_salary_bucket(record.text(fields::SALARY));
    record.assign(fields::SALARY_BUCKET, bucket);

    let address = derive_address(
        record.text(fields::ADDRESS),
        record.text(fields::SUBURB),
        record.text(fields::STATE),
        record.text(fields::POST),
    );
    record.assign(fields::ADDRESS, address);

    for field in &options.unused_fields {
        record.remove(field);
    }
}
