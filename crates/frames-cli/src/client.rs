//! Shared HTTP context, error types, and request helpers for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::anyhow;
use frames_api_models::ApiErrorBody;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl std::error::Error for CliError {}

/// Application context passed to command handlers.
#[derive(Clone)]
pub(crate) struct AppContext {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
}

impl AppContext {
    /// Build a client with the request timeout and a per-invocation request id.
    pub(crate) fn new(base_url: Url, timeout_secs: u64, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> CliResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| CliError::failure(anyhow!("invalid base URL: {err}")))
    }

    /// `GET` and decode JSON.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
        let url = self.endpoint(path)?;
        self.execute(self.client.get(url), Method::GET, path).await
    }

    /// Send a JSON body (plus optional query pairs) and decode the JSON reply.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> CliResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let request = self
            .client
            .request(method.clone(), url)
            .query(query)
            .json(body);
        self.execute(request, method, path).await
    }

    /// `DELETE` and decode the JSON reply.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> CliResult<T> {
        let url = self.endpoint(path)?;
        self.execute(self.client.delete(url), Method::DELETE, path)
            .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: Method,
        path: &str,
    ) -> CliResult<T> {
        tracing::debug!(%method, path, "sending request");
        let response = request
            .send()
            .await
            .map_err(|err| CliError::failure(anyhow!("request to {path} failed: {err}")))?;

        if !response.status().is_success() {
            return Err(classify_problem(response).await);
        }

        response.json::<T>().await.map_err(|err| {
            CliError::failure(anyhow!("failed to parse response from {path}: {err}"))
        })
    }
}

/// Parse the API URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}

/// Millisecond timestamp used in exported file names.
#[must_use]
pub(crate) fn timestamp_now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Classify an HTTP response into a CLI error.
pub(crate) async fn classify_problem(response: reqwest::Response) -> CliError {
    let status = response.status();
    let bytes = response.bytes().await.unwrap_or_default();

    let body_text = String::from_utf8_lossy(&bytes).trim().to_string();
    let message = ApiErrorBody::from_slice(&bytes)
        .and_then(|body| body.message())
        .unwrap_or_else(|| body_text.clone());

    if matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND
            | StatusCode::CONFLICT
            | StatusCode::UNPROCESSABLE_ENTITY
    ) && !message.is_empty()
    {
        CliError::validation(message)
    } else if message.is_empty() {
        CliError::failure(anyhow!("request failed with status {status}"))
    } else {
        CliError::failure(anyhow!("{message} (status {status})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::prelude::*;
    use serde_json::json;

    fn context(server: &MockServer) -> Result<AppContext> {
        let base = server
            .base_url()
            .parse()
            .map_err(|_| anyhow!("invalid URL"))?;
        AppContext::new(base, 5, "trace-1").map_err(|err| anyhow!(err.display_message()))
    }

    #[test]
    fn parse_url_rejects_invalid_input() {
        assert!(parse_url("not a url").is_err());
        assert!(parse_url("http://localhost:5000").is_ok());
    }

    #[test]
    fn exit_codes_distinguish_kinds() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::failure(anyhow!("boom")).exit_code(), 3);
    }

    #[tokio::test]
    async fn client_errors_surface_detail_as_validation() -> Result<()> {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/users/9")
                .header(HEADER_REQUEST_ID, "trace-1");
            then.status(404).json_body(json!({"detail": "User not found"}));
        });

        let ctx = context(&server)?;
        let err = ctx
            .get_json::<serde_json::Value>("/api/users/9")
            .await
            .err()
            .ok_or_else(|| anyhow!("expected failure"))?;
        mock.assert();
        assert!(matches!(err, CliError::Validation(ref message) if message == "User not found"));
        Ok(())
    }

    #[tokio::test]
    async fn server_errors_are_failures() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/student/history/1");
            then.status(500).body("");
        });

        let ctx = context(&server)?;
        let err = ctx
            .get_json::<serde_json::Value>("/api/student/history/1")
            .await
            .err()
            .ok_or_else(|| anyhow!("expected failure"))?;
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("500"));
        Ok(())
    }
}
