//! Data access for the console views.
//!
//! # Design
//! - Views talk to [`ConfigurationService`]; where the data lives is hidden
//!   behind [`ConfigurationSource`].
//! - Operations return values; views own whatever state they keep.
//! - `?Send` futures: the browser event loop is single-threaded.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use confdeck_model::{
    Catalog, CatalogError, Configuration, ConfigurationUpdate, OrderedConfiguration,
    ProblemDetails, assign_order, validate_update,
};
use thiserror::Error;

/// Result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced to views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// No configuration carries the requested name.
    #[error("configuration not found")]
    NotFound {
        /// Requested name.
        name: String,
    },
    /// The backend could not be reached or answered unexpectedly.
    #[error("backend request failed")]
    Network {
        /// Transport or decoding detail.
        message: String,
    },
    /// The update payload was rejected.
    #[error("configuration update rejected")]
    Validation {
        /// JSON pointer of the offending field.
        field: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ServiceError {
    /// Human-readable message for display in a view.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::NotFound { name } => format!("configuration '{name}' not found"),
            Self::Network { message } => message.clone(),
            Self::Validation { field, reason } => format!("{field}: {reason}"),
        }
    }

    /// Classify a failed backend response.
    ///
    /// `name` is the configuration the request addressed; collection requests
    /// pass `None`, so their 404 is a backend fault rather than a missing entry.
    /// A problem document listing invalid parameters is a validation failure
    /// whatever its status.
    #[must_use]
    pub fn from_response(status: u16, problem: Option<ProblemDetails>, name: Option<&str>) -> Self {
        if let Some(name) = name.filter(|_| status == STATUS_NOT_FOUND) {
            return Self::NotFound {
                name: name.to_string(),
            };
        }
        match problem {
            Some(problem) => match problem.invalid_params.and_then(|p| p.into_iter().next()) {
                Some(param) => Self::Validation {
                    field: param.pointer,
                    reason: param.message,
                },
                None => Self::Network {
                    message: problem.detail.unwrap_or(problem.title),
                },
            },
            None => Self::Network {
                message: format!("unexpected status {status}"),
            },
        }
    }
}

const STATUS_NOT_FOUND: u16 = 404;

impl From<CatalogError> for ServiceError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound { name } | CatalogError::PropertyNotFound { name, .. } => {
                Self::NotFound { name }
            }
            CatalogError::InvalidField {
                field,
                reason,
                value,
            } => Self::Validation {
                field,
                reason: value.map_or_else(|| reason.to_string(), |v| format!("{reason}: {v}")),
            },
            CatalogError::DuplicateName { name } => Self::Validation {
                field: "/name".to_string(),
                reason: format!("duplicate: {name}"),
            },
            CatalogError::ReadOnly { .. } => Self::Validation {
                field: "/updateable".to_string(),
                reason: "read_only".to_string(),
            },
            CatalogError::Decode { source } => Self::Network {
                message: source.to_string(),
            },
        }
    }
}

/// Backend collaborator holding the configurations.
#[async_trait(?Send)]
pub trait ConfigurationSource {
    /// Every configuration in backend order.
    async fn list(&self) -> ServiceResult<Vec<Configuration>>;
    /// The configuration named `name`.
    async fn get(&self, name: &str) -> ServiceResult<Configuration>;
    /// Replace the configuration named by `update` and return the stored entity.
    async fn put(&self, update: ConfigurationUpdate) -> ServiceResult<Configuration>;
}

/// In-memory source over a [`Catalog`].
#[derive(Debug)]
pub struct MockSource {
    catalog: RefCell<Catalog>,
}

impl MockSource {
    /// Source over an explicit catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
        }
    }

    /// Source over the built-in seed collection.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait(?Send)]
impl ConfigurationSource for MockSource {
    async fn list(&self) -> ServiceResult<Vec<Configuration>> {
        Ok(self.catalog.borrow().list().to_vec())
    }

    async fn get(&self, name: &str) -> ServiceResult<Configuration> {
        Ok(self.catalog.borrow().get(name)?.clone())
    }

    async fn put(&self, update: ConfigurationUpdate) -> ServiceResult<Configuration> {
        Ok(self.catalog.borrow_mut().replace(update)?)
    }
}

/// Facade the views use for every configuration operation.
#[derive(Clone)]
pub struct ConfigurationService {
    source: Rc<dyn ConfigurationSource>,
}

impl ConfigurationService {
    /// Service over `source`.
    #[must_use]
    pub fn new(source: Rc<dyn ConfigurationSource>) -> Self {
        Self { source }
    }

    /// Service over the seeded in-memory source.
    #[must_use]
    pub fn mock() -> Self {
        Self::new(Rc::new(MockSource::seeded()))
    }

    /// Full collection, each entry tagged with its position.
    ///
    /// # Errors
    ///
    /// Propagates source failures.
    pub async fn fetch_all(&self) -> ServiceResult<Vec<OrderedConfiguration>> {
        Ok(assign_order(self.source.list().await?))
    }

    /// The configuration named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] when no configuration matches.
    pub async fn fetch_by_name(&self, name: &str) -> ServiceResult<Configuration> {
        self.source.get(name).await
    }

    /// Validate `input` and replace the matching configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] for malformed input before the
    /// source is contacted, and [`ServiceError::NotFound`] for an unknown name.
    pub async fn update(&self, input: ConfigurationUpdate) -> ServiceResult<Configuration> {
        validate_update(&input)?;
        self.source.put(input).await
    }
}

impl PartialEq for ConfigurationService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}

impl std::fmt::Debug for ConfigurationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdeck_model::{Property, PropertyList};

    fn property(name: &str, value: &str) -> Property {
        Property {
            name: name.into(),
            value: value.into(),
            kind: "java.lang.String".into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn fetch_all_tags_positions() -> ServiceResult<()> {
        let service = ConfigurationService::mock();
        let all = service.fetch_all().await?;
        let tagged: Vec<(usize, &str)> = all
            .iter()
            .map(|entry| (entry.order, entry.configuration.name.as_str()))
            .collect();
        assert_eq!(
            tagged,
            [
                (0, "myConfig"),
                (1, "myCacheConfig"),
                (2, "myStore"),
                (3, "myI18nConfig")
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn fetch_by_name_looks_up_the_requested_entry() -> ServiceResult<()> {
        let service = ConfigurationService::mock();
        let store = service.fetch_by_name("myStore").await?;
        assert_eq!(store.name, "myStore");
        assert_eq!(store.uri, "classpath:/store/myContext.properties");

        let missing = service.fetch_by_name("nope").await;
        assert_eq!(
            missing,
            Err(ServiceError::NotFound {
                name: "nope".into()
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_validates_before_replacing() {
        let service = ConfigurationService::mock();
        let blank = ConfigurationUpdate {
            name: Some("  ".into()),
            properties: Some(PropertyList::default()),
            ..ConfigurationUpdate::default()
        };
        assert!(matches!(
            service.update(blank).await,
            Err(ServiceError::Validation { field, .. }) if field == "/name"
        ));

        let unknown = ConfigurationUpdate {
            name: Some("ghost".into()),
            properties: Some(PropertyList::default()),
            ..ConfigurationUpdate::default()
        };
        assert!(matches!(
            service.update(unknown).await,
            Err(ServiceError::NotFound { name }) if name == "ghost"
        ));
    }

    #[tokio::test]
    async fn updates_are_visible_to_later_lookups() -> ServiceResult<()> {
        let service = ConfigurationService::mock();
        let mut update = ConfigurationUpdate::from(service.fetch_by_name("myConfig").await?);
        update.properties = Some(PropertyList::from(vec![property(
            "//myapp/name",
            "renamed application",
        )]));
        let stored = service.update(update).await?;
        assert_eq!(stored.property_count(), 1);

        let reloaded = service.fetch_by_name("myConfig").await?;
        assert_eq!(reloaded, stored);
        let all = service.fetch_all().await?;
        assert_eq!(all[0].configuration.name, "myConfig");
        Ok(())
    }

    #[tokio::test]
    async fn read_only_entries_reject_updates() -> ServiceResult<()> {
        let mut locked = Catalog::seeded().list().to_vec();
        locked[0].updateable = false;
        let catalog = Catalog::new(locked).map_err(ServiceError::from)?;
        let service = ConfigurationService::new(Rc::new(MockSource::new(catalog)));
        let update = ConfigurationUpdate::from(service.fetch_by_name("myConfig").await?);
        assert!(matches!(
            service.update(update).await,
            Err(ServiceError::Validation { field, .. }) if field == "/updateable"
        ));
        Ok(())
    }

    #[test]
    fn errors_describe_themselves() {
        let err = ServiceError::from(CatalogError::NotFound {
            name: "nope".into(),
        });
        assert_eq!(err.describe(), "configuration 'nope' not found");
        let err = ServiceError::Validation {
            field: "/properties/property/0/name".into(),
            reason: "blank".into(),
        };
        assert_eq!(err.describe(), "/properties/property/0/name: blank");
    }

    fn problem(status: u16, params: Option<(&str, &str)>) -> ProblemDetails {
        ProblemDetails {
            kind: "https://confdeck.dev/problems/test".into(),
            title: "failed".into(),
            status,
            detail: Some(format!("status {status}")),
            invalid_params: params.map(|(pointer, message)| {
                vec![confdeck_model::ProblemInvalidParam {
                    pointer: pointer.into(),
                    message: message.into(),
                }]
            }),
        }
    }

    #[test]
    fn responses_classify_by_status_and_problem() {
        assert_eq!(
            ServiceError::from_response(404, Some(problem(404, None)), Some("ghost")),
            ServiceError::NotFound {
                name: "ghost".into()
            }
        );
        assert_eq!(
            ServiceError::from_response(
                409,
                Some(problem(409, Some(("/updateable", "read_only")))),
                Some("myConfig")
            ),
            ServiceError::Validation {
                field: "/updateable".into(),
                reason: "read_only".into()
            }
        );
        assert_eq!(
            ServiceError::from_response(
                422,
                Some(problem(422, Some(("/name", "blank")))),
                Some("myConfig")
            ),
            ServiceError::Validation {
                field: "/name".into(),
                reason: "blank".into()
            }
        );
        assert_eq!(
            ServiceError::from_response(400, Some(problem(400, None)), Some("myConfig")),
            ServiceError::Network {
                message: "status 400".into()
            }
        );
        assert_eq!(
            ServiceError::from_response(502, None, Some("myConfig")),
            ServiceError::Network {
                message: "unexpected status 502".into()
            }
        );
    }

    #[test]
    fn collection_not_found_is_a_backend_fault() {
        assert!(matches!(
            ServiceError::from_response(404, Some(problem(404, None)), None),
            ServiceError::Network { .. }
        ));
    }

    #[tokio::test]
    async fn read_only_failures_agree_across_sources() -> ServiceResult<()> {
        let mut locked = Catalog::seeded().list().to_vec();
        locked[0].updateable = false;
        let catalog = Catalog::new(locked).map_err(ServiceError::from)?;
        let service = ConfigurationService::new(Rc::new(MockSource::new(catalog)));
        let update = ConfigurationUpdate::from(service.fetch_by_name("myConfig").await?);
        let from_mock = service.update(update).await;
        let from_http = ServiceError::from_response(
            409,
            Some(problem(409, Some(("/updateable", "read_only")))),
            Some("myConfig"),
        );
        assert_eq!(from_mock, Err(from_http));
        Ok(())
    }

    #[test]
    fn clones_share_one_source() {
        let service = ConfigurationService::mock();
        assert_eq!(service.clone(), service);
        assert_ne!(ConfigurationService::mock(), service);
    }
}
