//! RFC9457-style API error wrapper.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use confdeck_model::{CatalogError, ProblemDetails, ProblemInvalidParam};

use crate::http::constants::{
    PROBLEM_BAD_REQUEST, PROBLEM_CONFIG_INVALID, PROBLEM_CONFLICT, PROBLEM_NOT_FOUND,
};

/// Structured API error with optional RFC9457 fields.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) kind: &'static str,
    title: &'static str,
    detail: Option<String>,
    pub(crate) invalid_params: Option<Vec<ProblemInvalidParam>>,
}

impl ApiError {
    const fn new(status: StatusCode, kind: &'static str, title: &'static str) -> Self {
        Self {
            status,
            kind,
            title,
            detail: None,
            invalid_params: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub(crate) fn with_invalid_params(mut self, params: Vec<ProblemInvalidParam>) -> Self {
        self.invalid_params = Some(params);
        self
    }

    pub(crate) fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, PROBLEM_BAD_REQUEST, "bad request").with_detail(detail)
    }

    pub(crate) fn not_found(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            PROBLEM_NOT_FOUND,
            "resource not found",
        )
        .with_detail(detail)
    }

    pub(crate) fn conflict(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, PROBLEM_CONFLICT, "conflict").with_detail(detail)
    }

    pub(crate) fn config_invalid(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            PROBLEM_CONFIG_INVALID,
            "configuration invalid",
        )
        .with_detail(detail)
    }
}

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::NotFound { name } => {
                Self::not_found(format!("configuration '{name}' not found"))
            }
            CatalogError::PropertyNotFound { name, property } => Self::not_found(format!(
                "property '{property}' not found in configuration '{name}'"
            )),
            CatalogError::InvalidField {
                field,
                reason,
                value,
            } => {
                let message = value.map_or_else(
                    || reason.to_string(),
                    |value| format!("{reason}: {value}"),
                );
                Self::config_invalid("update payload failed validation").with_invalid_params(
                    vec![ProblemInvalidParam {
                        pointer: field,
                        message,
                    }],
                )
            }
            CatalogError::DuplicateName { name } => {
                Self::conflict(format!("configuration '{name}' already exists"))
            }
            CatalogError::ReadOnly { name } => {
                Self::conflict(format!("configuration '{name}' is not updateable"))
                    .with_invalid_params(vec![ProblemInvalidParam {
                        pointer: "/updateable".to_string(),
                        message: "read_only".to_string(),
                    }])
            }
            CatalogError::Decode { source } => Self::bad_request(source.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ProblemDetails {
            kind: self.kind.to_string(),
            title: self.title.to_string(),
            status: self.status.as_u16(),
            detail: self.detail,
            invalid_params: self.invalid_params,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_statuses() {
        let not_found = ApiError::from(CatalogError::NotFound {
            name: "nope".into(),
        });
        assert_eq!(not_found.status, StatusCode::NOT_FOUND);
        assert_eq!(not_found.kind, PROBLEM_NOT_FOUND);

        let invalid = ApiError::from(CatalogError::InvalidField {
            field: "/properties/property/1/name".into(),
            reason: "duplicate",
            value: Some("//a".into()),
        });
        assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
        let params = invalid.invalid_params.expect("params");
        assert_eq!(params[0].pointer, "/properties/property/1/name");
        assert_eq!(params[0].message, "duplicate: //a");

        let read_only = ApiError::from(CatalogError::ReadOnly {
            name: "locked".into(),
        });
        assert_eq!(read_only.status, StatusCode::CONFLICT);
        let params = read_only.invalid_params.expect("read-only params");
        assert_eq!(params[0].pointer, "/updateable");
        assert_eq!(params[0].message, "read_only");
    }

    #[test]
    fn problem_response_carries_status() {
        let response = ApiError::bad_request("broken").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
