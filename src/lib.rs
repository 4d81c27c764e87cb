pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod net;
pub mod panel;
pub mod renderer;
pub mod ui;
pub mod util;

pub use error::{FetcherError, Result};
pub use panel::{GraphPanel, PanelContext, TimeRange};
