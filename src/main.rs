// bloom: terminal rendition of the Bloom plant-shopping demo.
// Loads config, starts logging and the image runtime, then runs the TUI.

mod app;
mod config;
mod error;
mod image;
mod logging;
mod state;
mod ui;

use crate::app::App;
use crate::config::Config;
use crate::error::Result;
use crate::image::ImageLoader;

fn main() -> Result<()> {
    let config = Config::load()?;

    match config::log_dir() {
        Some(dir) => {
            if let Some(path) = logging::init(&dir, &config.log_filter) {
                log::info!("bloom {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
            }
        }
        None => eprintln!("bloom: logging disabled, no cache directory"),
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let loader = ImageLoader::new(runtime.handle().clone())?;
    let mut app = App::new(&config, loader);
    log::info!("image source: {:?}", config.image_source());

    let mut terminal = ratatui::try_init()?;
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        log::error!("event loop failed: {}", e);
    }
    result.map_err(Into::into)
}
