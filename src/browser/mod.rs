//! Browser session management for the JavaScript-rendered listing.
//!
//! The listing's tables are populated client-side, so each page is loaded
//! in a headless Chrome session and the rendered markup is read back.
//!
//! # Example
//!
//! ```no_run
//! use nuforc_scraper::browser::{BrowserConfig, BrowserManager, PageFetcher};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), nuforc_scraper::browser::BrowserError> {
//! let manager = BrowserManager::new(BrowserConfig::default())?;
//! let tab = manager.new_tab()?;
//!
//! let fetcher = PageFetcher::new(
//!     tab,
//!     "https://nuforc.org/subndx/".to_string(),
//!     "highlights".to_string(),
//!     Duration::from_secs(2),
//! );
//! let html = fetcher.fetch_page(0)?;
//!
//! println!("Rendered {} bytes of HTML", html.len());
//! manager.close();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetcher;
pub mod manager;

// Re-export main types for convenience
pub use config::BrowserConfig;
pub use fetcher::PageFetcher;
pub use manager::{BrowserError, BrowserManager};
