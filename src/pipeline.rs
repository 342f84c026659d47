//! Pagination driver: walks page indices forward until the listing runs
//! out of tables, collecting every extracted row along the way.

use crate::browser::BrowserError;
use crate::models::HighlightTable;
use crate::table;
use log::{error, info};

/// Source of rendered page markup, keyed by zero-based page index.
///
/// The browser-backed [`PageFetcher`](crate::browser::PageFetcher)
/// implements this for real runs; tests drive the pagination state machine
/// with canned pages.
pub trait PageSource {
    fn fetch(&self, page_index: usize) -> Result<String, BrowserError>;
}

/// Scrape pages `0..page_ceiling`, accumulating every table's rows.
///
/// The walk is strictly sequential and forward-only:
/// - a page whose table extracts cleanly has its rows appended, keeping
///   the header of the first table seen;
/// - a page that fails to fetch or to extract is logged and skipped, never
///   retried;
/// - a page without a table ends the scrape;
/// - the page ceiling guarantees termination even if the site never stops
///   serving tables.
///
/// Returns `None` when no page yielded a table.
pub fn run<S: PageSource>(source: &S, page_ceiling: usize) -> Option<HighlightTable> {
    let mut aggregate: Option<HighlightTable> = None;

    for page in 0..page_ceiling {
        let html = match source.fetch(page) {
            Ok(html) => html,
            Err(e) => {
                error!("Error scraping page {}: {}", page, e);
                continue;
            }
        };

        match table::extract_table(&html) {
            Ok(Some(page_table)) => {
                info!("Scraped page {} with {} rows.", page, page_table.row_count());
                match aggregate {
                    Some(ref mut aggregate) => aggregate.append(page_table),
                    None => aggregate = Some(page_table),
                }
            }
            Ok(None) => {
                info!("No table found on page {}. Ending scrape.", page);
                break;
            }
            Err(e) => {
                error!("Error scraping page {}: {}", page, e);
            }
        }
    }

    aggregate
}
