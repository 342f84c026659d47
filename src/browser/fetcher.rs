use super::manager::BrowserError;
use crate::pipeline::PageSource;
use headless_chrome::Tab;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Loads one listing page at a time in a browser tab and returns the
/// rendered markup.
pub struct PageFetcher {
    tab: Arc<Tab>,
    base_url: String,
    listing_id: String,
    settle_delay: Duration,
}

impl PageFetcher {
    pub fn new(
        tab: Arc<Tab>,
        base_url: String,
        listing_id: String,
        settle_delay: Duration,
    ) -> Self {
        Self {
            tab,
            base_url,
            listing_id,
            settle_delay,
        }
    }

    /// Navigate to the given page index and return the rendered HTML.
    ///
    /// After navigation completes, the listing still fills its table from
    /// JavaScript, so the fetcher sleeps for the settle delay before
    /// reading the markup back. Errors are reported, not retried; the
    /// pagination driver decides what to do with a failed page.
    pub fn fetch_page(&self, page_index: usize) -> Result<String, BrowserError> {
        let url = page_url(&self.base_url, &self.listing_id, page_index);

        self.tab.navigate_to(&url).map_err(|e| {
            BrowserError::Navigation(format!("Failed to navigate to {}: {}", url, e))
        })?;
        self.tab.wait_until_navigated().map_err(|e| {
            BrowserError::Navigation(format!("Navigation timeout for {}: {}", url, e))
        })?;

        // Give client-side rendering time to finish
        thread::sleep(self.settle_delay);

        self.tab
            .get_content()
            .map_err(|e| BrowserError::HtmlExtraction(e.to_string()))
    }
}

impl PageSource for PageFetcher {
    fn fetch(&self, page_index: usize) -> Result<String, BrowserError> {
        self.fetch_page(page_index)
    }
}

/// Build the URL for a zero-based page index
fn page_url(base_url: &str, listing_id: &str, page_index: usize) -> String {
    format!("{}?id={}&pg={}", base_url, listing_id, page_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_first_page() {
        assert_eq!(
            page_url("https://nuforc.org/subndx/", "highlights", 0),
            "https://nuforc.org/subndx/?id=highlights&pg=0"
        );
    }

    #[test]
    fn test_page_url_embeds_index() {
        assert_eq!(
            page_url("https://example.com/listing/", "archive", 42),
            "https://example.com/listing/?id=archive&pg=42"
        );
    }
}
