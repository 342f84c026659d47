use log::{error, info};
use nuforc_scraper::browser::{BrowserManager, PageFetcher};
use nuforc_scraper::config::Config;
use nuforc_scraper::{export, logging, pipeline, ScrapeError};
use std::path::Path;

fn main() -> Result<(), ScrapeError> {
    let config = Config::load();
    logging::init(Path::new(&config.log_path))?;

    info!("NUFORC Highlights web scraping started.");

    let manager = match BrowserManager::new(config.browser_config()) {
        Ok(manager) => {
            info!("Chrome browser started successfully.");
            manager
        }
        Err(e) => {
            error!("Failed to start Chrome browser: {}", e);
            return Err(e.into());
        }
    };

    let tab = match manager.new_tab() {
        Ok(tab) => tab,
        Err(e) => {
            error!("Failed to open a browser tab: {}", e);
            manager.close();
            return Err(e.into());
        }
    };

    let fetcher = PageFetcher::new(
        tab,
        config.base_url.clone(),
        config.listing_id.clone(),
        config.settle_delay(),
    );
    let highlights = pipeline::run(&fetcher, config.page_ceiling);

    manager.close();
    info!("Browser closed.");

    export::finalize(highlights.as_ref(), Path::new(&config.output_path))?;
    Ok(())
}
