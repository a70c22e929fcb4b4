//! Cloud Controller API client.
//!
//! Low-level HTTP client that handles authentication and raw GET requests.
//! Collection walking lives in [`crate::pagination`]; entity operations are
//! implemented via traits on the model types.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{CfError, Result};

const USER_AGENT: &str = concat!("cf-report/", env!("CARGO_PKG_VERSION"));

/// Transport options fixed at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientOptions {
    /// Suppress the `GET <url>` progress lines.
    pub quiet: bool,
    /// Accept self-signed or otherwise invalid TLS certificates.
    pub insecure_skip_verify: bool,
}

/// Low-level Cloud Controller client.
///
/// Every request carries the bearer token handed over by the cf CLI. Any
/// response other than `200 OK` is an error; nothing is retried.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use cf_report::{CfClient, ClientOptions};
///
/// # fn example() -> cf_report::Result<()> {
/// let client = CfClient::new(
///     "bearer eyJhbGciOi...",
///     "https://api.sys.example.com",
///     ClientOptions::default(),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CfClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
    options: ClientOptions,
}

impl std::fmt::Debug for CfClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CfClient")
            .field("base_url", &self.base_url.as_str())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl CfClient {
    /// Create a client from a resolved [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid or the HTTP client cannot
    /// be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.access_token,
            &config.api_url,
            ClientOptions {
                quiet: config.quiet,
                insecure_skip_verify: config.insecure_skip_verify,
            },
        )
    }

    /// Create a new client with the provided token and API endpoint.
    ///
    /// # Arguments
    ///
    /// * `token` - Access token, with or without the `bearer ` prefix the cf
    ///   CLI stores it with
    /// * `api_url` - Cloud Controller endpoint (e.g., `https://api.sys.example.com`)
    /// * `options` - Transport options
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is invalid.
    pub fn new(token: &str, api_url: &str, options: ClientOptions) -> Result<Self> {
        let base_url = Url::parse(api_url.trim_end_matches('/'))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .danger_accept_invalid_certs(options.insecure_skip_verify)
            .build()
            .map_err(CfError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: strip_bearer(token).to_string(),
            options,
        })
    }

    /// Resolve a request path against the API base URL.
    ///
    /// Paths starting with `/` are appended to the base URL, keeping any path
    /// prefix it carries. Absolute URLs on the API's own origin are used
    /// as-is; absolute URLs on any other origin are rebased onto the API so
    /// the token is only ever sent to the configured endpoint.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            let url = Url::parse(path)?;
            if url.origin() == self.base_url.origin() {
                return Ok(url);
            }
            tracing::warn!(%url, "link points away from the API endpoint, rebasing");
            let rebased = match url.query() {
                Some(query) => format!("{}?{query}", url.path()),
                None => url.path().to_string(),
            };
            return self.join(&rebased);
        }
        self.join(path)
    }

    fn join(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    /// Make a GET request and decode the JSON body into `T`.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path).await?;
        let body = response.text().await.map_err(CfError::HttpError)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.resolve(path)?;

        if !self.options.quiet {
            tracing::info!("GET {url}");
        }

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(CfError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::OK {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(CfError::ApiError {
            message,
            status_code: status.as_u16(),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // Cloud Controller errors look like {"description": ..., "error_code": ...}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("description").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(code) = json.get("error_code").and_then(|m| m.as_str()) {
                return code.to_string();
            }
        }

        if body.is_empty() {
            format!("HTTP {status}")
        } else {
            body
        }
    }
}

/// The cf CLI stores tokens as `bearer <jwt>`; reqwest adds its own prefix.
fn strip_bearer(token: &str) -> &str {
    let trimmed = token.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}
