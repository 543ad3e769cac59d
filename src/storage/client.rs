use crate::config::Credentials;
use crate::error::{Result, ScrapbookError};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response};
use url::Url;

/// Shared handle to one Supabase project.
///
/// Built once at startup and cloned into every client that needs it; the
/// underlying connection pool is shared between clones.
#[derive(Clone)]
pub struct SupabaseClient {
    base_url: Url,
    key: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl SupabaseClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = Url::parse(credentials.url.trim_end_matches('/')).map_err(|e| {
            ScrapbookError::Config(format!("Invalid backend URL '{}': {}", credentials.url, e))
        })?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ScrapbookError::Config(format!(
                "Backend URL must be an http(s) URL, got '{}'",
                credentials.url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("scrapbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScrapbookError::Config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            base_url,
            key: credentials.key.clone(),
            http,
        })
    }

    /// Base URL extended by `segments`, each percent-encoded on its own.
    pub fn endpoint<'a, I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ScrapbookError::Config(format!("Cannot extend URL {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Request carrying the project's API key.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "Backend request");
        self.http
            .request(method, url)
            .header("apikey", &self.key)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
    }
}

/// Pass successful responses through; turn anything else into a message
/// holding the status and response body.
pub(crate) async fn check_response(response: Response) -> std::result::Result<Response, String> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let body = body.trim();
    if body.is_empty() {
        Err(format!("HTTP {}", status))
    } else {
        Err(format!("HTTP {}: {}", status, body))
    }
}
