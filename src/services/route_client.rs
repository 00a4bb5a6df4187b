use crate::config::Config;
use crate::constants::FIND_ROUTES_PATH;
use crate::error::{AppError, Result};
use crate::models::{FindRoutesResponse, Route, RouteQuery};
use crate::services::RouteSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the routing backend's `POST /find-routes`.
#[derive(Clone)]
pub struct RouteClient {
    client: Client,
    base_url: String,
}

impl RouteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RouteClient {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(RouteClient {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.request_timeout {
            Some(timeout) => Self::with_timeout(config.api_base_url.clone(), timeout),
            None => Ok(Self::new(config.api_base_url.clone())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), FIND_ROUTES_PATH)
    }

    /// One POST, no retry. Any non-2xx status or unexpected body is an error.
    pub async fn find_routes(&self, query: &RouteQuery) -> Result<Vec<Route>> {
        let url = self.endpoint();

        tracing::debug!(
            source = %query.source,
            destination = %query.destination,
            time_of_day = %query.time_of_day,
            "Route search request to {}",
            url
        );

        let response = self.client.post(&url).json(query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "Routing service HTTP error {}: {}", status, body);
            return Err(AppError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: FindRoutesResponse = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Decode(e.to_string()))?;

        tracing::debug!(
            routes = parsed.routes.len(),
            "Routing service returned {} routes",
            parsed.routes.len()
        );
        Ok(parsed.routes)
    }
}

#[async_trait]
impl RouteSource for RouteClient {
    async fn find_routes(&self, query: &RouteQuery) -> Result<Vec<Route>> {
        RouteClient::find_routes(self, query).await
    }
}
