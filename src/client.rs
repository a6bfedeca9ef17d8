use std::borrow::Cow;
use std::sync::Arc;

use http::{header, Method, StatusCode};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sonic_rs::JsonValueTrait;
use tokio::sync::watch;
use zeroize::Zeroizing;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::token_store::{FileTokenStore, TokenStore, TOKEN_STORAGE_KEY};

/// How a single request is issued: verb, query string and JSON body.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    method: Method,
    query: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    fn with_method(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::with_method(Method::GET)
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    /// Appends query parameters. Pairs are percent-encoded when sent.
    pub fn query(mut self, pairs: impl IntoIterator<Item = (&'static str, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets the JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let bytes = sonic_rs::to_vec(body).map_err(Error::Encode)?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// The HTTP verb of this request.
    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// The single point of contact with the backend.
///
/// Owns the bearer token: it is loaded from the token store on
/// construction, attached to every request while set, and written through
/// to the store on every change. Whether a token is present is published
/// on a watch channel, see [`ApiClient::watch_token`].
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    store: Arc<dyn TokenStore>,
    token: RwLock<Option<Zeroizing<String>>>,
    token_present: watch::Sender<bool>,
}

impl ApiClient {
    /// Creates a client against `base_url`, picking up any persisted token.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The backend address, e.g. `http://localhost:8000`.
    /// * `store` - Where the token is persisted.
    pub fn new(base_url: &str, store: Arc<dyn TokenStore>) -> Self {
        let token = match store.get(TOKEN_STORAGE_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()).map(Zeroizing::new),
            Err(e) => {
                tracing::warn!("⚠️ Could not read persisted token: {}", e);
                None
            }
        };

        if token.is_some() {
            tracing::debug!("🔑 Loaded persisted token");
        }

        let (token_present, _) = watch::channel(token.is_some());

        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            store,
            token: RwLock::new(token),
            token_present,
        }
    }

    /// Creates a client from configuration, persisting the token to the configured file.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(FileTokenStore::new(config.storage_path.clone()));
        Self::new(&config.api_url, store)
    }

    /// The backend address this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a token is currently set.
    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// Subscribes to token presence. The value flips to `false` whenever the
    /// token is cleared, including when the backend rejects it.
    pub fn watch_token(&self) -> watch::Receiver<bool> {
        self.token_present.subscribe()
    }

    /// Stores `token` in memory and in the token store.
    ///
    /// A failed store write is logged and the in-memory token is kept, so the
    /// current process stays signed in.
    pub fn set_token(&self, token: &str) {
        *self.token.write() = Some(Zeroizing::new(token.to_string()));
        self.token_present.send_replace(true);

        if let Err(e) = self.store.set(TOKEN_STORAGE_KEY, token) {
            tracing::warn!("⚠️ Failed to persist token: {}", e);
        }
    }

    /// Removes the token from memory and from the token store.
    pub fn clear_token(&self) {
        *self.token.write() = None;
        self.token_present.send_replace(false);

        if let Err(e) = self.store.remove(TOKEN_STORAGE_KEY) {
            tracing::warn!("⚠️ Failed to remove persisted token: {}", e);
        }
    }

    /// Forgets the token. Purely local; the backend is not contacted.
    pub fn logout(&self) {
        tracing::info!("👋 Logging out");
        self.clear_token();
    }

    fn current_token(&self) -> Option<Zeroizing<String>> {
        self.token.read().clone()
    }

    /// Drops the token after a 401, unless it was replaced while the request was in flight.
    fn expire_token(&self, sent: &str) {
        let still_current = self
            .token
            .read()
            .as_ref()
            .is_some_and(|t| t.as_str() == sent);

        if still_current {
            tracing::warn!("🔒 Token rejected by backend, clearing it");
            self.clear_token();
        }
    }

    /// Issues a request and decodes the JSON response as `T`.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path under the base URL, starting with `/`.
    /// * `options` - Verb, query and body.
    ///
    /// # Returns
    ///
    /// The decoded body; `{}` for `204 No Content`. The body's shape is
    /// trusted: there is no validation beyond decoding into `T`.
    #[tracing::instrument(skip(self, options), fields(method = %options.method))]
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("➡️ {} {}", options.method, url);

        let mut builder = self
            .http
            .request(options.method, &url)
            .header(header::CONTENT_TYPE, "application/json");

        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }

        let token = self.current_token();
        if let Some(token) = token.as_ref() {
            builder = builder.bearer_auth(token.as_str());
        }

        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let (detail, parsed) = error_detail(&body);

            if status == StatusCode::UNAUTHORIZED {
                if let Some(token) = token.as_ref() {
                    self.expire_token(token);
                }
            }

            let err = Error::from_response(status, detail, parsed);
            tracing::debug!("❌ {} {}: {}", status.as_u16(), endpoint, err);
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            tracing::debug!("✅ 204 {}", endpoint);
            return Ok(sonic_rs::from_str("{}")?);
        }

        let body = response.bytes().await?;
        tracing::debug!("✅ {} {} ({} bytes)", status.as_u16(), endpoint, body.len());
        Ok(sonic_rs::from_slice(&body)?)
    }
}

/// Pulls the backend's `detail` out of an error body.
///
/// Returns the detail (when it is a string) and whether the body was JSON at all.
fn error_detail(body: &[u8]) -> (Option<String>, bool) {
    match sonic_rs::from_slice::<sonic_rs::Value>(body) {
        Ok(value) => (
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string),
            true,
        ),
        Err(_) => (None, false),
    }
}

/// Percent-encodes an identifier for use as a path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
