//! Editable copy of a configuration for the detail view.

use confdeck_model::{Configuration, ConfigurationUpdate};

/// A loaded configuration plus pending property edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    original: Configuration,
    edited: Configuration,
}

impl Draft {
    /// Start editing `configuration`.
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self {
            edited: configuration.clone(),
            original: configuration,
        }
    }

    /// Configuration with the pending edits applied.
    #[must_use]
    pub const fn current(&self) -> &Configuration {
        &self.edited
    }

    /// Whether edits are allowed at all.
    #[must_use]
    pub const fn editable(&self) -> bool {
        self.original.updateable
    }

    /// Set the value of property `key`. Returns `false` for an unknown key.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self
            .edited
            .properties
            .property
            .iter_mut()
            .find(|property| property.name == key)
        {
            Some(property) => {
                property.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Whether any value differs from the loaded configuration.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.original != self.edited
    }

    /// Drop pending edits.
    pub fn reset(&mut self) {
        self.edited = self.original.clone();
    }

    /// Update payload carrying the edited configuration.
    #[must_use]
    pub fn to_update(&self) -> ConfigurationUpdate {
        ConfigurationUpdate::from(self.edited.clone())
    }

    /// Accept `stored` as the new baseline after a successful save.
    pub fn commit(&mut self, stored: Configuration) {
        self.original = stored.clone();
        self.edited = stored;
    }
}

/// Progress of the detail view's save action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing submitted since the last edit.
    #[default]
    Idle,
    /// An update is in flight.
    Saving,
    /// The last update was stored.
    Saved,
    /// The last update was rejected.
    Failed(String),
}

impl SaveStatus {
    /// Whether an update is in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        matches!(self, Self::Saving)
    }

    /// Edits are refused while saving; the stored result replaces the draft
    /// the update was built from.
    #[must_use]
    pub const fn accepts_edits(&self) -> bool {
        !self.is_saving()
    }
}
