//! REST-backed configuration source.

use async_trait::async_trait;
use confdeck_model::{Configuration, ConfigurationEnvelope, ConfigurationUpdate, ProblemDetails};
use gloo_net::http::{Request, Response};

use crate::core::service::{ConfigurationSource, ServiceError, ServiceResult};

const CONFIGURATIONS_PATH: &str = "/rest/configurations";

/// [`ConfigurationSource`] talking to the Confdeck REST service.
#[derive(Clone, Debug)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    /// Source rooted at `base_url` (scheme, host and port, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn configuration_url(&self, name: &str) -> String {
        format!(
            "{}{CONFIGURATIONS_PATH}/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }
}

fn network(err: &gloo_net::Error) -> ServiceError {
    ServiceError::Network {
        message: err.to_string(),
    }
}

async fn problem(response: Response, name: Option<&str>) -> ServiceError {
    let status = response.status();
    let details = response.json::<ProblemDetails>().await.ok();
    ServiceError::from_response(status, details, name)
}

#[async_trait(?Send)]
impl ConfigurationSource for HttpSource {
    async fn list(&self) -> ServiceResult<Vec<Configuration>> {
        let url = format!("{}{CONFIGURATIONS_PATH}", self.base_url);
        let response = Request::get(&url).send().await.map_err(|e| network(&e))?;
        if !response.ok() {
            return Err(problem(response, None).await);
        }
        let envelope: ConfigurationEnvelope =
            response.json().await.map_err(|e| network(&e))?;
        Ok(envelope.configuration)
    }

    async fn get(&self, name: &str) -> ServiceResult<Configuration> {
        let response = Request::get(&self.configuration_url(name))
            .send()
            .await
            .map_err(|e| network(&e))?;
        if !response.ok() {
            return Err(problem(response, Some(name)).await);
        }
        response.json().await.map_err(|e| network(&e))
    }

    async fn put(&self, update: ConfigurationUpdate) -> ServiceResult<Configuration> {
        let name = update.name.clone().unwrap_or_default();
        let response = Request::put(&self.configuration_url(&name))
            .json(&update)
            .map_err(|e| network(&e))?
            .send()
            .await
            .map_err(|e| network(&e))?;
        if !response.ok() {
            return Err(problem(response, Some(&name)).await);
        }
        response.json().await.map_err(|e| network(&e))
    }
}
