//! Field transformers.
//!
//! Each transformer is a pure function from raw (or already cleansed) field
//! text to an optional value. `None` means the target field must be absent
//! from the output record. Parse failures are logged and reported as `None`;
//! they never abort the record.
//!
//! - **name**: first/last name cleansing and full name derivation
//! - **date**: birth date parsing and age derivation
//! - **currency**: salary formatting and salary bucket derivation
//! - **address**: nested address derivation

pub mod address;
pub mod currency;
pub mod date;
pub mod name;

pub use address::derive_address;
pub use currency::{
    SalaryBucket, cleanse_salary, derive_salary_bucket, format_currency, parse_decimal,
};
pub use date::{BIRTH_DATE_FORMAT, cleanse_birth_date, derive_age};
pub use name::{cleanse_name, derive_full_name};
