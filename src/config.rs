use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::browser::BrowserConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the paginated listing
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Listing id passed as the `id` query parameter
    #[serde(default = "default_listing_id")]
    pub listing_id: String,

    /// Destination of the run log
    #[serde(default = "default_log_path")]
    pub log_path: String,

    /// Destination of the combined CSV
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Upper bound on page indices, so the scrape terminates even if the
    /// site never stops serving tables
    #[serde(default = "default_page_ceiling")]
    pub page_ceiling: usize,

    /// Delay after navigation for client-side rendering to finish, in ms
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default)]
    pub browser: BrowserSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BrowserSettings {
    /// Run the browser in headless mode
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Navigation timeout in seconds
    #[serde(default = "default_browser_timeout")]
    pub timeout_secs: u64,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    "https://nuforc.org/subndx/".to_string()
}
fn default_listing_id() -> String {
    "highlights".to_string()
}
fn default_log_path() -> String {
    "logs/nuforc_web_scrape.log".to_string()
}
fn default_output_path() -> String {
    "data/nuforc_highlights.csv".to_string()
}
fn default_page_ceiling() -> usize {
    2000
}
fn default_settle_delay_ms() -> u64 {
    2000
}
fn default_true() -> bool {
    true
}
fn default_window_width() -> u32 {
    1920
}
fn default_window_height() -> u32 {
    1080
}
fn default_browser_timeout() -> u64 {
    30
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_id: default_listing_id(),
            log_path: default_log_path(),
            output_path: default_output_path(),
            page_ceiling: default_page_ceiling(),
            settle_delay_ms: default_settle_delay_ms(),
            browser: BrowserSettings::default(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = Path::new("config.toml");
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(cfg) = toml::from_str::<Config>(&content) {
                    return cfg;
                }
            }
        }
        Self::default()
    }

    /// Settle delay as a Duration
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Create a browser configuration from these settings
    pub fn browser_config(&self) -> BrowserConfig {
        BrowserConfig {
            headless: self.browser.headless,
            window_size: (self.browser.window_width, self.browser.window_height),
            timeout_seconds: self.browser.timeout_secs,
            user_agent: self.browser.user_agent.clone(),
        }
    }
}
