use std::path::PathBuf;
use std::sync::Mutex;

use graphfetcher::app::App;
use graphfetcher::config::{FetcherConfig, DEFAULT_CONFIG_PATH};
use graphfetcher::util::log::log_dir;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // The terminal belongs to the UI; traces go next to the leveled logs.
    std::fs::create_dir_all(log_dir())?;
    let trace_file = std::fs::File::create(log_dir().join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(trace_file))
        .with_ansi(false)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = FetcherConfig::load_from_path(&config_path)?;

    let terminal = ratatui::init();
    let result = match App::new(&config) {
        Ok(app) => app.run(terminal).await,
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}
