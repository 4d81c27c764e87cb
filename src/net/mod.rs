mod reqwest_client;

use futures::future::BoxFuture;
use reqwest::header::HeaderMap;
use std::fmt::Debug;

use crate::error::Result;

pub use reqwest_client::ReqwestGraphClient;

/// The three HTTP verbs a panel needs. Futures are boxed and `'static` so the
/// panel can hand them straight to `tokio::spawn` and keep going.
pub trait GraphClient: Send + Sync + Debug {
    /// GET the body of a graph image or data URL.
    fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>>>;

    /// HEAD a URL and return the response headers of a 2xx answer.
    fn head(&self, url: &str) -> BoxFuture<'static, Result<HeaderMap>>;

    /// POST an urlencoded form; any 2xx is success.
    fn post_form(&self, url: &str, form: Vec<(String, String)>) -> BoxFuture<'static, Result<()>>;
}
