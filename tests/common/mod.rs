#![allow(dead_code)]

use futures::future::{self, BoxFuture, FutureExt};
use graphfetcher::config::DashboardConfig;
use graphfetcher::error::{FetcherError, Result};
use graphfetcher::net::GraphClient;
use graphfetcher::panel::{Container, GraphPanel, PanelContext};
use graphfetcher::renderer::{GraphRenderer, RendererFactory};
use image::{DynamicImage, ImageFormat};
use ratatui::{buffer::Buffer, layout::Rect};
use reqwest::header::{HeaderMap, HeaderValue};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub const PAGE_TARGET: &str = "/ipdevinfo/sw1.example.org/#!ports";

/// Records every call synchronously, before any future is polled, so tests
/// can count fetches without driving the runtime.
#[derive(Debug, Default)]
pub struct MockClient {
    pub gets: Mutex<Vec<String>>,
    pub heads: Mutex<Vec<String>>,
    pub posts: Mutex<Vec<(String, Vec<(String, String)>)>>,
    /// Body for every GET; `None` makes GETs fail.
    pub body: Option<Vec<u8>>,
    /// Value of `X-Where-Am-I` on HEAD responses.
    pub canonical: Option<String>,
    pub head_fails: bool,
    pub post_fails: bool,
    /// GETs for these exact URLs fail even when `body` is set.
    pub failing_gets: Vec<String>,
    /// GETs for these exact URLs wait until the paired sender fires.
    pub held: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockClient {
    pub fn serving_png() -> Self {
        Self {
            body: Some(png_bytes()),
            ..Self::default()
        }
    }

    /// Hold the next GET of `url` until the returned sender fires. Keeping
    /// the sender alive without sending leaves the request hanging.
    pub fn hold(&self, url: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.held.lock().unwrap().insert(url.to_string(), rx);
        tx
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn heads(&self) -> Vec<String> {
        self.heads.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, Vec<(String, String)>)> {
        self.posts.lock().unwrap().clone()
    }
}

impl GraphClient for MockClient {
    fn get_bytes(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        self.gets.lock().unwrap().push(url.to_string());
        let result = self
            .body
            .clone()
            .filter(|_| !self.failing_gets.iter().any(|failing| failing == url))
            .ok_or_else(|| FetcherError::Config("mock GET failure".to_string()));

        match self.held.lock().unwrap().remove(url) {
            Some(release) => async move {
                let _ = release.await;
                result
            }
            .boxed(),
            None => future::ready(result).boxed(),
        }
    }

    fn head(&self, url: &str) -> BoxFuture<'static, Result<HeaderMap>> {
        self.heads.lock().unwrap().push(url.to_string());
        if self.head_fails {
            return future::ready(Err(FetcherError::Config("mock HEAD failure".to_string()))).boxed();
        }

        let mut headers = HeaderMap::new();
        if let Some(canonical) = &self.canonical {
            headers.insert("x-where-am-i", HeaderValue::from_str(canonical).unwrap());
        }
        future::ready(Ok(headers)).boxed()
    }

    fn post_form(&self, url: &str, form: Vec<(String, String)>) -> BoxFuture<'static, Result<()>> {
        self.posts.lock().unwrap().push((url.to_string(), form));
        let result = if self.post_fails {
            Err(FetcherError::Config("mock POST failure".to_string()))
        } else {
            Ok(())
        };
        future::ready(result).boxed()
    }
}

#[derive(Debug)]
pub struct MockRenderer {
    data_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl GraphRenderer for MockRenderer {
    fn data_url(&self) -> &str {
        &self.data_url
    }

    fn set_data_url(&mut self, url: &str) {
        self.data_url = url.to_string();
    }

    fn request(&mut self) {
        self.requests.lock().unwrap().push(self.data_url.clone());
    }

    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

/// Creating a renderer counts as its first request, like the real one.
#[derive(Debug, Default)]
pub struct MockRendererFactory {
    pub requests: Arc<Mutex<Vec<String>>>,
    pub created: Mutex<usize>,
}

impl MockRendererFactory {
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn created(&self) -> usize {
        *self.created.lock().unwrap()
    }
}

impl RendererFactory for MockRendererFactory {
    fn create(&self, _container: &Container, url: &str) -> Box<dyn GraphRenderer> {
        *self.created.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(url.to_string());
        Box::new(MockRenderer {
            data_url: url.to_string(),
            requests: self.requests.clone(),
        })
    }
}

pub fn context(client: Arc<MockClient>, factory: Arc<MockRendererFactory>) -> PanelContext {
    PanelContext {
        client,
        renderer_factory: factory,
        dashboard: DashboardConfig::default(),
        page_target: PAGE_TARGET.to_string(),
    }
}

pub fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::new_rgb8(4, 3)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

/// Let spawned fetches finish and apply their results.
pub async fn settle(panel: &mut GraphPanel) {
    for _ in 0..20 {
        tokio::task::yield_now().await;
        panel.process_messages();
    }
}
