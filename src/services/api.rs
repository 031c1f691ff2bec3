use crate::config::Config;
use crate::models::{
    cost::{ConnectionTestResult, DashboardSummary},
    error::{AppError, backend_error},
    provider::Provider,
};
use crate::services::query::{build_url, require_base};
use serde_json::{Map, Value};

/// Sparse request parameters: a wire key and an optional value.
pub type Params = [(&'static str, Option<String>)];

/// Path layout exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouteLayout {
    /// `{base}/api/v1/{provider}/...`
    #[default]
    Versioned,
    /// `{base}/{provider}/...`
    Unprefixed,
}

impl RouteLayout {
    fn prefix(self) -> &'static str {
        match self {
            RouteLayout::Versioned => "/api/v1",
            RouteLayout::Unprefixed => "",
        }
    }
}

// API CONFIGURATION
/// Configuration for the backend client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
    layout: RouteLayout,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Configuration taken from the build environment.
    pub fn from_env() -> Self {
        let mut builder = Self::builder();
        if let Some(url) = Config::API_URL {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// URL of the costs endpoint for `provider` with the given query.
    pub fn costs_url(&self, provider: Provider, params: &Params) -> Result<String, AppError> {
        self.url(&format!("/{}/costs", provider.code()), params)
    }

    pub fn test_connection_url(&self, provider: Provider) -> Result<String, AppError> {
        self.url(&format!("/{}/test-connection", provider.code()), &[])
    }

    pub fn summary_url(&self, params: &Params) -> Result<String, AppError> {
        self.url("/dashboard/summary", params)
    }

    fn url(&self, path: &str, params: &Params) -> Result<String, AppError> {
        let base = require_base(self.base_url())?;
        Ok(build_url(
            base,
            &format!("{}{path}", self.layout.prefix()),
            params,
        ))
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    layout: Option<RouteLayout>,
}

impl ApiConfigBuilder {
    /// Sets the backend root address.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Selects the backend path layout.
    pub fn layout(mut self, layout: RouteLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url,
            layout: self.layout.unwrap_or_default(),
        }
    }
}

// CLOUDSPY CLIENT
/// HTTP client for the cost backend.
pub struct CloudSpyClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CloudSpyClient {
    /// Creates a new client configured from the build environment.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_env())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches raw cost data for `provider`. The body is returned as-is for the caller to classify.
    pub async fn fetch_costs(&self, provider: Provider, params: &Params) -> Result<Value, AppError> {
        let url = self.config.costs_url(provider, params)?;
        let failure = format!("Failed to fetch {provider} costs");

        log::debug!("Fetching {provider} costs");
        self.get_json(&url, &failure).await
    }

    /// Posts `credentials` to the provider's connection test endpoint.
    pub async fn test_connection(
        &self,
        provider: Provider,
        credentials: &Params,
    ) -> Result<ConnectionTestResult, AppError> {
        let url = self.config.test_connection_url(provider)?;
        let failure = format!("Failed to test {provider} connection");

        let body = serde_json::json!({
            "provider": provider.code(),
            "credentials": credentials_body(credentials),
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&failure, &e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{failure}: HTTP {status}");
            return Err(AppError::Transport(failure));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| transport_error(&failure, &e))?;

        serde_json::from_value(value).map_err(|e| {
            log::warn!("Malformed connection test result: {e}");
            AppError::UnexpectedShape
        })
    }

    /// Fetches the aggregated multi-cloud summary.
    pub async fn fetch_dashboard_summary(
        &self,
        params: &Params,
    ) -> Result<DashboardSummary, AppError> {
        let url = self.config.summary_url(params)?;
        let value = self
            .get_json(&url, "Failed to fetch dashboard summary")
            .await?;

        if let Some(message) = backend_error(&value) {
            return Err(AppError::Backend(message));
        }

        serde_json::from_value(value).map_err(|e| {
            log::warn!("Malformed dashboard summary: {e}");
            AppError::UnexpectedShape
        })
    }

    /// Executes a single GET and parses the body as JSON.
    async fn get_json(&self, url: &str, failure: &str) -> Result<Value, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(failure, &e))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{failure}: HTTP {status}");
            return Err(AppError::Transport(failure.to_string()));
        }

        response
            .json()
            .await
            .map_err(|e| transport_error(failure, &e))
    }
}

/// Logs the underlying cause and returns the generic per-operation error.
fn transport_error(failure: &str, error: &reqwest::Error) -> AppError {
    if error.is_decode() {
        log::warn!("{failure}: invalid response body: {error}");
    } else {
        log::warn!("{failure}: network error: {error}");
    }
    AppError::Transport(failure.to_string())
}

/// JSON object containing only the credentials that carry a non-empty value.
fn credentials_body(credentials: &Params) -> Map<String, Value> {
    credentials
        .iter()
        .filter_map(|(key, value)| {
            let value = value.as_deref().filter(|v| !v.is_empty())?;
            Some(((*key).to_string(), Value::String(value.to_string())))
        })
        .collect()
}

// CONVENIENCE FUNCTIONS
/// Fetches cost data using the build-time configuration.
pub async fn fetch_costs(
    provider: Provider,
    params: Vec<(&'static str, Option<String>)>,
) -> Result<Value, AppError> {
    CloudSpyClient::new()?.fetch_costs(provider, &params).await
}

/// Tests provider credentials using the build-time configuration.
pub async fn test_connection(
    provider: Provider,
    credentials: Vec<(&'static str, Option<String>)>,
) -> Result<ConnectionTestResult, AppError> {
    CloudSpyClient::new()?
        .test_connection(provider, &credentials)
        .await
}

/// Fetches the dashboard summary using the build-time configuration.
pub async fn fetch_dashboard_summary(
    params: Vec<(&'static str, Option<String>)>,
) -> Result<DashboardSummary, AppError> {
    CloudSpyClient::new()?.fetch_dashboard_summary(&params).await
}
