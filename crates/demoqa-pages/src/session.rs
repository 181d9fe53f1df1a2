use std::path::{Path, PathBuf};

use chrono::Local;
use eoka::{Browser, Page, StealthConfig};
use tracing::{debug, info, warn};

use crate::config::SuiteConfig;
use crate::Result;

/// One browser session: a launched browser plus the page scenarios drive.
///
/// Scenarios get a fresh session each so state never leaks between them.
pub struct SuiteSession {
    browser: Browser,
    page: Page,
}

impl SuiteSession {
    /// Launch a browser per the suite config and open a blank page.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        let stealth = StealthConfig {
            headless: config.browser.headless,
            viewport_width: config.browser.viewport.width,
            viewport_height: config.browser.viewport.height,
            ..Default::default()
        };

        debug!(
            "Launching browser (headless: {}, viewport: {}x{})",
            config.browser.headless, config.browser.viewport.width, config.browser.viewport.height
        );
        let browser = Browser::launch_with_config(stealth).await?;
        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page })
    }

    /// The page this session drives.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Save a screenshot of the current page for a failed scenario.
    ///
    /// Best effort: capture or write failures are logged, never propagated,
    /// since the scenario error is the one worth reporting.
    pub async fn failure_screenshot(&self, dir: &Path, scenario: &str) -> Option<PathBuf> {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let name = scenario.replace([' ', '/'], "_");
        let path = dir.join(format!("{name}-{stamp}.png"));

        if let Err(e) = std::fs::create_dir_all(dir) {
            warn!("Failed to create screenshot dir {}: {}", dir.display(), e);
            return None;
        }
        match self.page.screenshot().await {
            Ok(data) => {
                if let Err(e) = std::fs::write(&path, data) {
                    warn!("Failed to save screenshot: {}", e);
                    return None;
                }
                info!("Saved failure screenshot to: {}", path.display());
                Some(path)
            }
            Err(e) => {
                warn!("Failed to capture screenshot: {}", e);
                None
            }
        }
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}
