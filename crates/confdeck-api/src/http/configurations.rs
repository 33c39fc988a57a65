//! Configuration catalog endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use confdeck_model::{
    Configuration, ConfigurationEnvelope, ConfigurationUpdate, ProblemInvalidParam, Property,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Optional free-text filter for the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) text: Option<String>,
}

/// Filters for the property search endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PropertySearchQuery {
    #[serde(default)]
    pub(crate) config: Option<String>,
    #[serde(default)]
    pub(crate) text: Option<String>,
}

pub(crate) async fn list_configurations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SearchQuery>,
) -> Json<ConfigurationEnvelope> {
    let catalog = state.catalog.read().await;
    let configuration = catalog.search(query.text.as_deref());
    Json(ConfigurationEnvelope { configuration })
}

pub(crate) async fn get_configuration(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<Json<Configuration>, ApiError> {
    let catalog = state.catalog.read().await;
    let config = catalog.get(&name)?;
    Ok(Json(config.clone()))
}

pub(crate) async fn update_configuration(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    payload: Result<Json<ConfigurationUpdate>, JsonRejection>,
) -> Result<Json<Configuration>, ApiError> {
    let Json(mut update) = payload.map_err(|rejection| {
        warn!(error = %rejection, config = %name, "rejected configuration update body");
        ApiError::bad_request(rejection.body_text())
    })?;

    match update.name.as_deref() {
        None => update.name = Some(name.clone()),
        Some(body_name) if body_name != name => {
            return Err(ApiError::config_invalid(
                "configuration name does not match the request path",
            )
            .with_invalid_params(vec![ProblemInvalidParam {
                pointer: "/name".to_string(),
                message: format!("expected '{name}', found '{body_name}'"),
            }]));
        }
        Some(_) => {}
    }

    let updated = state.catalog.write().await.replace(update)?;
    info!(
        config = %updated.name,
        properties = updated.property_count(),
        "configuration updated"
    );
    Ok(Json(updated))
}

pub(crate) async fn list_keys(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let keys = state.catalog.read().await.keys(&name)?;
    Ok(Json(keys))
}

pub(crate) async fn get_property(
    State(state): State<Arc<ApiState>>,
    Path((name, property)): Path<(String, String)>,
) -> Result<Json<Property>, ApiError> {
    let catalog = state.catalog.read().await;
    let property = catalog.property(&name, &property)?;
    Ok(Json(property.clone()))
}

pub(crate) async fn find_properties(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<PropertySearchQuery>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let catalog = state.catalog.read().await;
    let properties = catalog.find_properties(query.config.as_deref(), query.text.as_deref())?;
    Ok(Json(properties))
}

pub(crate) async fn put_property(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    payload: Result<Json<Property>, JsonRejection>,
) -> Result<Json<Property>, ApiError> {
    let Json(property) = payload.map_err(|rejection| {
        warn!(error = %rejection, config = %name, "rejected property body");
        ApiError::bad_request(rejection.body_text())
    })?;
    let stored = state.catalog.write().await.put_property(&name, property)?;
    info!(config = %name, property = %stored.name, "property stored");
    Ok(Json(stored))
}

pub(crate) async fn remove_property(
    State(state): State<Arc<ApiState>>,
    Path((name, property)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .catalog
        .write()
        .await
        .remove_property(&name, &property)?;
    info!(config = %name, property = %removed.name, "property removed");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confdeck_model::{Catalog, PropertyList};

    fn state() -> Arc<ApiState> {
        Arc::new(ApiState::new(Catalog::seeded()))
    }

    #[tokio::test]
    async fn list_filters_by_text() {
        let Json(all) = list_configurations(State(state()), Query(SearchQuery::default())).await;
        assert_eq!(all.configuration.len(), 4);

        let Json(filtered) = list_configurations(
            State(state()),
            Query(SearchQuery {
                text: Some("Cache".into()),
            }),
        )
        .await;
        assert_eq!(filtered.configuration.len(), 1);
        assert_eq!(filtered.configuration[0].name, "myCacheConfig");
    }

    #[tokio::test]
    async fn get_unknown_configuration_is_not_found() {
        let err = get_configuration(State(state()), Path("missing".into()))
            .await
            .expect_err("unknown name");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_fills_name_from_path() -> anyhow::Result<()> {
        let state = state();
        let update = ConfigurationUpdate {
            properties: Some(PropertyList::from(vec![Property {
                name: "//myapp/admin/email".into(),
                value: "ops@example.com".into(),
                kind: "java.lang.String".into(),
                description: String::new(),
            }])),
            ..ConfigurationUpdate::default()
        };
        let Json(updated) = update_configuration(
            State(Arc::clone(&state)),
            Path("myConfig".into()),
            Ok(Json(update)),
        )
        .await
        .map_err(|err| anyhow::anyhow!("update failed: {:?}", err.status))?;
        assert_eq!(updated.name, "myConfig");
        assert_eq!(updated.property_count(), 1);

        let Json(stored) = get_configuration(State(state), Path("myConfig".into()))
            .await
            .map_err(|err| anyhow::anyhow!("lookup failed: {:?}", err.status))?;
        assert_eq!(stored.properties.property[0].value, "ops@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_name_mismatch() {
        let update = ConfigurationUpdate {
            name: Some("myStore".into()),
            properties: Some(PropertyList::default()),
            ..ConfigurationUpdate::default()
        };
        let err = update_configuration(State(state()), Path("myConfig".into()), Ok(Json(update)))
            .await
            .expect_err("mismatch");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        let params = err.invalid_params.expect("invalid params");
        assert_eq!(params[0].pointer, "/name");
    }

    #[tokio::test]
    async fn property_lookup_accepts_dotted_keys() -> anyhow::Result<()> {
        let Json(property) = get_property(
            State(state()),
            Path(("myConfig".into(), "myapp.admin.email".into())),
        )
        .await
        .map_err(|err| anyhow::anyhow!("lookup failed: {:?}", err.status))?;
        assert_eq!(property.name, "//myapp/admin/email");

        let Json(keys) = list_keys(State(state()), Path("myConfig".into()))
            .await
            .map_err(|err| anyhow::anyhow!("keys failed: {:?}", err.status))?;
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        Ok(())
    }

    #[tokio::test]
    async fn property_search_scopes_to_a_configuration() -> anyhow::Result<()> {
        let Json(found) = find_properties(
            State(state()),
            Query(PropertySearchQuery {
                config: Some("myStore".into()),
                text: Some("1500".into()),
            }),
        )
        .await
        .map_err(|err| anyhow::anyhow!("search failed: {:?}", err.status))?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "//fileStores/myStore/connectTimeout");

        let err = find_properties(
            State(state()),
            Query(PropertySearchQuery {
                config: Some("ghost".into()),
                text: None,
            }),
        )
        .await
        .expect_err("unknown configuration");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn put_then_remove_property() -> anyhow::Result<()> {
        let state = state();
        let Json(stored) = put_property(
            State(Arc::clone(&state)),
            Path("myConfig".into()),
            Ok(Json(Property {
                name: "myapp.admin.phone".into(),
                value: "0102".into(),
                kind: "java.lang.String".into(),
                description: String::new(),
            })),
        )
        .await
        .map_err(|err| anyhow::anyhow!("put failed: {:?}", err.status))?;
        assert_eq!(stored.name, "//myapp/admin/phone");

        let status = remove_property(
            State(Arc::clone(&state)),
            Path(("myConfig".into(), stored.name.clone())),
        )
        .await
        .map_err(|err| anyhow::anyhow!("remove failed: {:?}", err.status))?;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = remove_property(State(state), Path(("myConfig".into(), stored.name)))
            .await
            .expect_err("already removed");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        Ok(())
    }
}
