//! Scraper for the NUFORC "Highlights" listing.
//!
//! The listing is paginated and rendered client-side, so plain HTTP fetching
//! returns an empty shell. A headless Chrome session renders each page, the
//! first table on the page is extracted, and the per-page tables are
//! concatenated and written out as a single CSV file. Every step of a run is
//! recorded both to a log file and to the console.

pub mod browser;
pub mod config;
pub mod export;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod table;

use thiserror::Error;

/// Top-level failure modes of a scrape run.
///
/// Only browser startup and the final CSV write can terminate a run;
/// per-page failures are logged and skipped by the pagination driver.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Logging(#[from] logging::LogInitError),

    #[error(transparent)]
    Browser(#[from] browser::BrowserError),

    #[error(transparent)]
    Export(#[from] export::ExportError),
}
