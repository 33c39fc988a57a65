//! In-memory configuration catalog.
//!
//! # Design
//! - Constructed explicitly (seeded, from a list, or from a JSON envelope) and
//!   handed to its owner; there is no process-wide instance.
//! - Names are unique; construction rejects duplicates.
//! - `replace` keeps the entry's position so list order is stable across updates.

use crate::error::{CatalogError, CatalogResult};
use crate::model::{
    Configuration, ConfigurationEnvelope, ConfigurationUpdate, OrderedConfiguration, Property,
};
use crate::seed;
use crate::validate::{normalize_key, validate_update};

/// Ordered, name-unique collection of configurations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Configuration>,
}

impl Catalog {
    /// Build a catalog from an ordered list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidField`] for a blank name and
    /// [`CatalogError::DuplicateName`] when a name repeats.
    pub fn new(entries: Vec<Configuration>) -> CatalogResult<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::invalid(
                    format!("/configuration/{index}/name"),
                    "blank",
                ));
            }
            if entries[..index].iter().any(|prior| prior.name == entry.name) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Catalog holding the built-in seed collection.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            entries: seed::configurations(),
        }
    }

    /// Decode a `{ "configuration": [...] }` document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] for malformed JSON and the
    /// [`Catalog::new`] errors for invalid content.
    pub fn from_json(document: &str) -> CatalogResult<Self> {
        let envelope: ConfigurationEnvelope =
            serde_json::from_str(document).map_err(|source| CatalogError::Decode { source })?;
        Self::new(envelope.configuration)
    }

    /// Number of configurations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no configurations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All configurations in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Configuration] {
        &self.entries
    }

    /// All configurations tagged with their position.
    #[must_use]
    pub fn ordered(&self) -> Vec<OrderedConfiguration> {
        assign_order(self.entries.clone())
    }

    /// Configurations whose name or URI contains `text`. Empty text matches everything.
    #[must_use]
    pub fn search(&self, text: Option<&str>) -> Vec<Configuration> {
        match text.filter(|t| !t.is_empty()) {
            None => self.entries.clone(),
            Some(text) => self
                .entries
                .iter()
                .filter(|c| c.name.contains(text) || c.uri.contains(text))
                .cloned()
                .collect(),
        }
    }

    /// Configuration registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no configuration matches.
    pub fn get(&self, name: &str) -> CatalogResult<&Configuration> {
        self.entries
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Property `key` of configuration `name`; `key` may use dotted or slashed form.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown configuration and
    /// [`CatalogError::PropertyNotFound`] for an unknown key.
    pub fn property(&self, name: &str, key: &str) -> CatalogResult<&Property> {
        let key = normalize_key(key);
        let config = self.get(name)?;
        config
            .property(&key)
            .ok_or_else(|| CatalogError::PropertyNotFound {
                name: name.to_string(),
                property: key,
            })
    }

    /// Sorted, de-duplicated property keys of configuration `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown configuration.
    pub fn keys(&self, name: &str) -> CatalogResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .get(name)?
            .properties
            .property
            .iter()
            .map(|p| p.name.clone())
            .collect();
        keys.sort();
        keys.dedup();
        Ok(keys)
    }

    /// Properties of configuration `name`, or of every configuration when
    /// `name` is absent or empty, filtered by `text`.
    ///
    /// A property matches when its name contains the normalised `text`, or
    /// its description or value contains `text` verbatim. Empty text matches
    /// everything.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when `name` is given but unknown.
    pub fn find_properties(
        &self,
        name: Option<&str>,
        text: Option<&str>,
    ) -> CatalogResult<Vec<Property>> {
        let scope: Vec<&Configuration> = match name.filter(|n| !n.is_empty()) {
            Some(name) => vec![self.get(name)?],
            None => self.entries.iter().collect(),
        };
        let properties = scope
            .into_iter()
            .flat_map(|config| config.properties.property.iter());
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(properties.cloned().collect());
        };
        let prefix = normalize_key(text);
        Ok(properties
            .filter(|p| {
                p.name.contains(&prefix) || p.description.contains(text) || p.value.contains(text)
            })
            .cloned()
            .collect())
    }

    /// Add `property` to configuration `name`, or overwrite the stored
    /// property with the same normalised key in place.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidField`] for a blank property name,
    /// [`CatalogError::NotFound`] for an unknown configuration, and
    /// [`CatalogError::ReadOnly`] when it is not updateable.
    pub fn put_property(&mut self, name: &str, mut property: Property) -> CatalogResult<Property> {
        if property.name.trim().is_empty() {
            return Err(CatalogError::invalid("/name", "blank"));
        }
        property.name = normalize_key(&property.name);
        let config = self.updateable_mut(name)?;
        let properties = &mut config.properties.property;
        match properties.iter_mut().find(|p| p.name == property.name) {
            Some(slot) => slot.clone_from(&property),
            None => properties.push(property.clone()),
        }
        Ok(property)
    }

    /// Remove property `key` from configuration `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown configuration,
    /// [`CatalogError::ReadOnly`] when it is not updateable, and
    /// [`CatalogError::PropertyNotFound`] for an unknown key.
    pub fn remove_property(&mut self, name: &str, key: &str) -> CatalogResult<Property> {
        let key = normalize_key(key);
        let config = self.updateable_mut(name)?;
        let properties = &mut config.properties.property;
        let index = properties
            .iter()
            .position(|p| p.name == key)
            .ok_or_else(|| CatalogError::PropertyNotFound {
                name: name.to_string(),
                property: key,
            })?;
        Ok(properties.remove(index))
    }

    fn updateable_mut(&mut self, name: &str) -> CatalogResult<&mut Configuration> {
        let config = self
            .entries
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })?;
        if !config.updateable {
            return Err(CatalogError::ReadOnly {
                name: config.name.clone(),
            });
        }
        Ok(config)
    }

    /// Validate `update` and replace the matching configuration in place.
    ///
    /// Fields omitted from the update keep their stored values, except the
    /// property collection which is always replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidField`] for malformed input,
    /// [`CatalogError::NotFound`] when the name is unknown, and
    /// [`CatalogError::ReadOnly`] when the stored entry is not updateable.
    pub fn replace(&mut self, update: ConfigurationUpdate) -> CatalogResult<Configuration> {
        let (name, _) = validate_update(&update)?;
        let slot = self.updateable_mut(name)?;

        let ConfigurationUpdate {
            uri,
            properties,
            loaded,
            storable,
            updateable,
            ..
        } = update;
        if let Some(uri) = uri {
            slot.uri = uri;
        }
        if let Some(properties) = properties {
            slot.properties = properties;
        }
        slot.loaded = loaded.unwrap_or(slot.loaded);
        slot.storable = storable.unwrap_or(slot.storable);
        slot.updateable = updateable.unwrap_or(slot.updateable);
        Ok(slot.clone())
    }
}

/// Tag each configuration with its zero-based position.
#[must_use]
pub fn assign_order(configurations: Vec<Configuration>) -> Vec<OrderedConfiguration> {
    configurations
        .into_iter()
        .enumerate()
        .map(|(order, configuration)| OrderedConfiguration {
            order,
            configuration,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyList;

    fn bare(name: &str) -> Configuration {
        Configuration {
            uri: format!("classpath:/{name}.properties"),
            name: name.to_string(),
            properties: PropertyList::default(),
            loaded: true,
            storable: true,
            updateable: true,
        }
    }

    #[test]
    fn new_rejects_duplicates_and_blank_names() {
        assert!(matches!(
            Catalog::new(vec![bare("a"), bare("a")]),
            Err(CatalogError::DuplicateName { ref name }) if name == "a"
        ));
        assert!(matches!(
            Catalog::new(vec![bare("a"), bare(" ")]),
            Err(CatalogError::InvalidField { reason: "blank", .. })
        ));
    }

    #[test]
    fn ordered_entries_follow_position() {
        let ordered = Catalog::seeded().ordered();
        let orders: Vec<usize> = ordered.iter().map(|e| e.order).collect();
        assert_eq!(orders, [0, 1, 2, 3]);
    }

    #[test]
    fn search_filters_on_name_and_uri() {
        let catalog = Catalog::seeded();
        let by_name: Vec<String> = catalog
            .search(Some("Cache"))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(by_name, ["myCacheConfig"]);

        let by_uri: Vec<String> = catalog
            .search(Some("/i18n/"))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(by_uri, ["myI18nConfig"]);

        assert_eq!(catalog.search(Some("")).len(), 4);
        assert_eq!(catalog.search(None).len(), 4);
        assert!(catalog.search(Some(" my")).is_empty());
    }

    #[test]
    fn property_lookup_normalises_keys() {
        let catalog = Catalog::seeded();
        let property = catalog
            .property("myConfig", "myapp.admin.email")
            .expect("property");
        assert_eq!(property.value, "myadmin@mysociete.com");
        assert!(matches!(
            catalog.property("myConfig", "myapp.missing"),
            Err(CatalogError::PropertyNotFound { ref property, .. }) if property == "//myapp/missing"
        ));
    }

    #[test]
    fn keys_are_sorted() {
        let keys = Catalog::seeded().keys("myStore").expect("keys");
        assert_eq!(
            keys,
            [
                "//fileStores/myStore/baseUri",
                "//fileStores/myStore/connectTimeout",
                "//fileStores/myStore/readTimeout",
                "//fileStores/myStore/readonly",
            ]
        );
    }

    #[test]
    fn replace_keeps_position_and_unspecified_fields() {
        let mut catalog = Catalog::seeded();
        let updated = catalog
            .replace(ConfigurationUpdate {
                name: Some("myStore".into()),
                properties: Some(PropertyList::default()),
                loaded: Some(false),
                ..ConfigurationUpdate::default()
            })
            .expect("replace");
        assert_eq!(updated.uri, "classpath:/store/myContext.properties");
        assert!(!updated.loaded);
        assert!(updated.storable);
        assert_eq!(updated.property_count(), 0);
        assert_eq!(catalog.list()[2], updated);
    }

    #[test]
    fn replace_rejects_read_only_entries() {
        let mut locked = bare("locked");
        locked.updateable = false;
        let mut catalog = Catalog::new(vec![locked]).expect("catalog");
        assert!(matches!(
            catalog.replace(ConfigurationUpdate {
                name: Some("locked".into()),
                properties: Some(PropertyList::default()),
                ..ConfigurationUpdate::default()
            }),
            Err(CatalogError::ReadOnly { .. })
        ));
    }

    #[test]
    fn find_properties_matches_name_prefix_value_and_description() {
        let catalog = Catalog::seeded();
        let by_prefix = catalog
            .find_properties(Some("myStore"), Some("fileStores.myStore.read"))
            .expect("search");
        let names: Vec<&str> = by_prefix.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "//fileStores/myStore/readTimeout",
                "//fileStores/myStore/readonly"
            ]
        );

        let by_value = catalog
            .find_properties(None, Some("myadmin@mysociete.com"))
            .expect("search");
        assert_eq!(by_value.len(), 1);
        assert_eq!(by_value[0].name, "//myapp/admin/email");

        let everything = catalog.find_properties(Some(""), None).expect("search");
        assert_eq!(everything.len(), 18);

        assert!(matches!(
            catalog.find_properties(Some("ghost"), None),
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[test]
    fn put_property_adds_then_overwrites() {
        let mut catalog = Catalog::seeded();
        let added = catalog
            .put_property(
                "myConfig",
                Property {
                    name: "myapp.admin.phone".into(),
                    value: "0102".into(),
                    kind: "java.lang.String".into(),
                    description: String::new(),
                },
            )
            .expect("add");
        assert_eq!(added.name, "//myapp/admin/phone");
        assert_eq!(catalog.get("myConfig").expect("config").property_count(), 6);

        let overwritten = catalog
            .put_property(
                "myConfig",
                Property {
                    value: "0304".into(),
                    ..added
                },
            )
            .expect("overwrite");
        let config = catalog.get("myConfig").expect("config");
        assert_eq!(config.property_count(), 6);
        assert_eq!(config.property("//myapp/admin/phone"), Some(&overwritten));

        let blank = Property {
            name: " ".into(),
            ..overwritten
        };
        assert!(matches!(
            catalog.put_property("myConfig", blank),
            Err(CatalogError::InvalidField { reason: "blank", .. })
        ));
    }

    #[test]
    fn remove_property_reports_unknown_keys() {
        let mut catalog = Catalog::seeded();
        let removed = catalog
            .remove_property("myStore", "fileStores.myStore.readonly")
            .expect("remove");
        assert_eq!(removed.name, "//fileStores/myStore/readonly");
        assert_eq!(catalog.keys("myStore").expect("keys").len(), 3);
        assert!(matches!(
            catalog.remove_property("myStore", "fileStores.myStore.readonly"),
            Err(CatalogError::PropertyNotFound { .. })
        ));
    }

    #[test]
    fn property_mutations_respect_read_only_entries() {
        let mut locked = bare("locked");
        locked.updateable = false;
        let mut catalog = Catalog::new(vec![locked]).expect("catalog");
        assert!(matches!(
            catalog.remove_property("locked", "a"),
            Err(CatalogError::ReadOnly { .. })
        ));
        assert!(matches!(
            catalog.put_property(
                "locked",
                Property {
                    name: "a".into(),
                    value: String::new(),
                    kind: String::new(),
                    description: String::new(),
                }
            ),
            Err(CatalogError::ReadOnly { .. })
        ));
    }
}
