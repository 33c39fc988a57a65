//! Validation helpers for update payloads and property keys.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{ConfigurationUpdate, PropertyList};

/// Root marker every normalised property key starts with.
pub const KEY_ROOT: &str = "//";
const KEY_SEPARATOR: char = '/';
const KEY_PROPERTIES_SEPARATOR: char = '.';

/// Normalise a property path to the `//a/b/c` form.
///
/// Dotted keys (`myapp.admin.email`) are accepted as an alternative spelling.
#[must_use]
pub fn normalize_key(path: &str) -> String {
    let path = path.trim();
    let mut key = String::with_capacity(path.len() + KEY_ROOT.len());
    if !path.starts_with(KEY_ROOT) {
        key.push_str(KEY_ROOT);
    }
    key.extend(path.chars().map(|c| {
        if c == KEY_PROPERTIES_SEPARATOR {
            KEY_SEPARATOR
        } else {
            c
        }
    }));
    key
}

/// Validate an update payload, returning the target name and property list.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidField`] when the name is missing or blank,
/// when the properties collection is absent, or when a property has a blank
/// or duplicated name.
pub fn validate_update(update: &ConfigurationUpdate) -> CatalogResult<(&str, &PropertyList)> {
    let name = update
        .name
        .as_deref()
        .ok_or_else(|| CatalogError::invalid("/name", "missing"))?;
    if name.trim().is_empty() {
        return Err(CatalogError::invalid("/name", "blank"));
    }
    let properties = update
        .properties
        .as_ref()
        .ok_or_else(|| CatalogError::invalid("/properties", "missing"))?;

    let mut seen = HashSet::with_capacity(properties.property.len());
    for (index, property) in properties.property.iter().enumerate() {
        if property.name.trim().is_empty() {
            return Err(CatalogError::invalid(
                format!("/properties/property/{index}/name"),
                "blank",
            ));
        }
        if !seen.insert(property.name.as_str()) {
            return Err(CatalogError::InvalidField {
                field: format!("/properties/property/{index}/name"),
                reason: "duplicate",
                value: Some(property.name.clone()),
            });
        }
    }
    Ok((name, properties))
}
