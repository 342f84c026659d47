use super::config::BrowserConfig;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::ffi::OsStr;
use std::sync::Arc;

/// Owns the browser process for the duration of a run.
///
/// A manager that fails to launch never holds a browser, so there is
/// nothing to release on that path. A launched browser is released exactly
/// once, either by [`BrowserManager::close`] or by the drop at end of scope.
pub struct BrowserManager {
    browser: Browser,
    config: BrowserConfig,
}

impl BrowserManager {
    /// Launch headless Chrome with the given configuration.
    ///
    /// Fails when the Chrome binary is missing or cannot start. That is not
    /// retried anywhere: a browser that will not launch needs human
    /// intervention, not another attempt.
    pub fn new(config: BrowserConfig) -> Result<Self, BrowserError> {
        // Owned argument strings must outlive the LaunchOptions borrow,
        // so the whole launch happens in this scope.
        let user_agent_arg = config
            .user_agent
            .as_ref()
            .map(|ua| format!("--user-agent={}", ua));

        let mut args: Vec<&OsStr> = vec![
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--no-sandbox"),
        ];
        if let Some(ref ua) = user_agent_arg {
            args.push(OsStr::new(ua));
        }

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some(config.window_size))
            .idle_browser_timeout(config.timeout())
            .args(args)
            .build()
            .map_err(|e| BrowserError::Configuration(e.to_string()))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| BrowserError::Initialization(e.to_string()))?;

        Ok(Self { browser, config })
    }

    /// Create a new tab for scraping
    pub fn new_tab(&self) -> Result<Arc<Tab>, BrowserError> {
        self.browser
            .new_tab()
            .map_err(|e| BrowserError::TabCreation(e.to_string()))
    }

    /// Get the browser configuration
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Shut the browser process down. Consuming the manager makes a second
    /// release impossible.
    pub fn close(self) {
        log::debug!("Browser session released.");
    }
}

/// Errors that can occur during browser operations
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("Browser initialization failed: {0}")]
    Initialization(String),

    #[error("Browser configuration error: {0}")]
    Configuration(String),

    #[error("Tab creation failed: {0}")]
    TabCreation(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("HTML extraction error: {0}")]
    HtmlExtraction(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires Chrome/Chromium to be installed
    fn test_browser_manager_creation() {
        let manager = BrowserManager::new(BrowserConfig::default())
            .expect("Chrome/Chromium not installed");
        assert!(manager.new_tab().is_ok());
        manager.close();
    }
}
