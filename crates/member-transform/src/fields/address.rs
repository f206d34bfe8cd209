//! Nested address derivation.

use std::collections::BTreeMap;

use member_model::fields;

/// Build the nested Address value from the four flat address fields.
///
/// Only non-empty parts are included. Returns `None` when all four are empty
/// or absent.
pub fn derive_address(
    street: Option<&str>,
    suburb: Option<&str>,
    state: Option<&str>,
    post: Option<&str>,
) -> Option<BTreeMap<String, String>> {
    let address: BTreeMap<String, String> = [
        (fields::STREET, street),
        (fields::SUBURB, suburb),
        (fields::STATE, state),
        (fields::POST, post),
    ]
    .into_iter()
    .filter_map(|(key, value)| {
        value
            .filter(|value| !value.is_empty())
            .map(|value| (key.to_string(), value.to_string()))
    })
    .collect();

    (!address.is_empty()).then_some(address)
}
