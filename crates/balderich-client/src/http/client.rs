/*
[INPUT]:  HTTP configuration (base URL, sign prefix, timeouts) and credentials
[OUTPUT]: Signed GET/POST/PUT calls returning envelope data or raw bytes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request/response handling
*/

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Response, Url, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{AuthConfig, DEFAULT_SIGN_PREFIX, Signature};
use crate::http::{BalderichError, Result};
use crate::types::ResponseEnvelope;

/// Base URL of the public Balderich deployment
pub const DEFAULT_BASE_URL: &str = "https://www.ctfer.vip/v2/api/";

/// Content type marking a binary download body
pub const OCTET_STREAM: &str = "application/octet-stream";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Root every relative API path is joined onto
    pub base_url: String,
    /// Prefix prepended to the path when signing
    pub sign_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            base_url: DEFAULT_BASE_URL.to_string(),
            sign_prefix: DEFAULT_SIGN_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    /// Override the base URL, keeping other settings
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// File attached to a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Payload sent alongside the signed query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded`; repeated names are allowed
    Form(Vec<(String, String)>),
    /// `multipart/form-data` file parts
    Multipart(Vec<FilePart>),
}

/// Main HTTP client for the Balderich API
#[derive(Debug, Clone)]
pub struct NssClient {
    http_client: Client,
    base_url: Url,
    sign_prefix: String,
    auth: AuthConfig,
}

impl NssClient {
    /// Create a new client with default configuration
    pub fn new(auth: AuthConfig) -> Result<Self> {
        Self::with_config(auth, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(auth: AuthConfig, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            sign_prefix: config.sign_prefix,
            auth,
        })
    }

    pub fn auth_config(&self) -> &AuthConfig {
        &self.auth
    }

    /// API key sent with every request
    pub fn key(&self) -> &str {
        self.auth.key()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sign a relative path with the configured prefix at the current time
    pub fn sign(&self, path: &str) -> Signature {
        self.auth
            .sign_with_prefix(relative_path(path), None, &self.sign_prefix)
    }

    /// Signed GET returning envelope `data`
    ///
    /// `path` is relative to the base URL; leading `/` characters are stripped
    /// before it is signed and joined, so `"/team/notice/"` and `"team/notice/"`
    /// hit the same route with the same signature.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.signed_request(Method::GET, path, RequestBody::Empty)?;
        self.send_json(builder).await
    }

    /// Signed POST returning envelope `data`
    ///
    /// Leading `/` characters in `path` are stripped, as for [`NssClient::get`].
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> Result<T> {
        let builder = self.signed_request(Method::POST, path, body)?;
        self.send_json(builder).await
    }

    /// Signed PUT returning envelope `data`
    ///
    /// Leading `/` characters in `path` are stripped, as for [`NssClient::get`].
    pub async fn put<T: DeserializeOwned>(&self, path: &str, body: RequestBody) -> Result<T> {
        let builder = self.signed_request(Method::PUT, path, body)?;
        self.send_json(builder).await
    }

    /// Signed POST expecting an `application/octet-stream` body
    ///
    /// Any other content type is read as an error envelope. Leading `/`
    /// characters in `path` are stripped, as for [`NssClient::get`].
    pub async fn post_bytes(&self, path: &str, body: RequestBody) -> Result<Vec<u8>> {
        let builder = self.signed_request(Method::POST, path, body)?;
        let response = self.send_raw(builder).await?;

        if is_octet_stream(&response) {
            let bytes = response.bytes().await?;
            return Ok(bytes.to_vec());
        }

        let status = response.status();
        let body = response.bytes().await?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body)
            .map_err(|e| BalderichError::unexpected_body(status, e))?;
        envelope.into_data::<serde_json::Value>()?;
        Err(BalderichError::unexpected_body(
            status,
            "expected binary body, got a success envelope",
        ))
    }

    /// Build a request for `path` carrying `key`, `time` and `sign` query parameters
    pub(crate) fn signed_request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<RequestBuilder> {
        let path = relative_path(path);
        let signature = self.sign(path);
        let url = self.base_url.join(path)?;

        debug!(
            method = %method,
            path,
            timestamp = signature.timestamp,
            "sending signed request"
        );

        let timestamp = signature.timestamp.to_string();
        let builder = self.http_client.request(method, url).query(&[
            ("key", self.key()),
            ("time", timestamp.as_str()),
            ("sign", signature.digest.as_str()),
        ]);
        apply_body(builder, body)
    }

    /// Send the request and unwrap the `{code, data}` envelope
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send_raw(builder).await?;
        let status = response.status();
        let body = response.bytes().await?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body)
            .map_err(|e| BalderichError::unexpected_body(status, e))?;
        envelope.into_data()
    }

    /// Send the request without interpreting the body
    pub(crate) async fn send_raw(&self, builder: RequestBuilder) -> Result<Response> {
        Ok(builder.send().await?)
    }
}

fn parse_base_url(base_url: &str) -> Result<Url> {
    if base_url.ends_with('/') {
        Ok(Url::parse(base_url)?)
    } else {
        Ok(Url::parse(&format!("{base_url}/"))?)
    }
}

fn relative_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

fn is_octet_stream(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(OCTET_STREAM))
}

fn apply_body(builder: RequestBuilder, body: RequestBody) -> Result<RequestBuilder> {
    match body {
        RequestBody::Empty => Ok(builder),
        RequestBody::Form(fields) => Ok(builder.form(&fields)),
        RequestBody::Multipart(parts) => {
            let mut form = Form::new();
            for part in parts {
                let mime_type = mime_guess::from_path(&part.filename)
                    .first_or_octet_stream()
                    .to_string();
                let file = Part::bytes(part.bytes)
                    .file_name(part.filename)
                    .mime_str(&mime_type)?;
                form = form.part(part.field, file);
            }
            Ok(builder.multipart(form))
        }
    }
}
