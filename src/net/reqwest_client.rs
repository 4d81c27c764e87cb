use futures::future::{BoxFuture, FutureExt};
use reqwest::header::HeaderMap;
use url::Url;
use tracing::{debug, instrument};

use crate::error::{FetcherError, Result};

use super::GraphClient;

/// [`GraphClient`] backed by a shared `reqwest::Client`.
///
/// Graph sources are usually relative (`/graphite/render?...`), so every URL
/// is resolved against `base_url` before it goes on the wire.
#[derive(Debug, Clone)]
pub struct ReqwestGraphClient {
    http_client: reqwest::Client,
    base_url: Option<Url>,
}

impl ReqwestGraphClient {
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base_url = base_url
            .map(|raw| Url::parse(raw).map_err(|e| FetcherError::InvalidUrl(format!("{}: {}", raw, e))))
            .transpose()?;

        Ok(Self {
            http_client: reqwest::Client::builder().build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Absolute URLs pass through; relative ones need a base.
    pub fn resolve(&self, url: &str) -> Result<Url> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base
                    .join(url)
                    .map_err(|e| FetcherError::InvalidUrl(format!("{}: {}", url, e))),
                None => Err(FetcherError::InvalidUrl(format!("{}: relative URL without base_url", url))),
            },
            Err(e) => Err(FetcherError::InvalidUrl(format!("{}: {}", url, e))),
        }
    }

    #[instrument(skip(http_client), fields(url = %url))]
    async fn fetch_bytes(http_client: reqwest::Client, url: Url) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = http_client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }

    #[instrument(skip(http_client), fields(url = %url))]
    async fn fetch_headers(http_client: reqwest::Client, url: Url) -> Result<HeaderMap> {
        debug!("HEAD {}", url);

        let response = http_client.head(url).send().await?.error_for_status()?;
        Ok(response.headers().clone())
    }

    #[instrument(skip(http_client, form), fields(url = %url))]
    async fn send_form(http_client: reqwest::Client, url: Url, form: Vec<(String, String)>) -> Result<()> {
        debug!("POST {}", url);

        http_client
            .post(url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl GraphClient for ReqwestGraphClient {
    fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        let http_client = self.http_client.clone();
        let resolved = self.resolve(url);

        async move { Self::fetch_bytes(http_client, resolved?).await }.boxed()
    }

    fn head(&self, url: &str) -> BoxFuture<'static, Result<HeaderMap>> {
        let http_client = self.http_client.clone();
        let resolved = self.resolve(url);

        async move { Self::fetch_headers(http_client, resolved?).await }.boxed()
    }

    fn post_form(&self, url: &str, form: Vec<(String, String)>) -> BoxFuture<'static, Result<()>> {
        let http_client = self.http_client.clone();
        let resolved = self.resolve(url);

        async move { Self::send_form(http_client, resolved?, form).await }.boxed()
    }
}
