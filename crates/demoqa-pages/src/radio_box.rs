use eoka::Page;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::nav;
use crate::selectors::radio_box as sel;
use crate::{Error, Result};

/// Page object for the Radio Button page.
///
/// Options are addressed by display name ("Yes", "Impressive", "No"),
/// normalized to the lowercase form the site's ids use.
pub struct RadioBoxPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> RadioBoxPage<'a> {
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    /// Navigate from the landing page to the Radio Button page.
    pub async fn open(&self) -> Result<()> {
        info!("opening radio button page");
        self.page.goto(&self.config.base_url).await?;
        nav::click_by_text(self.page, "Elements").await?;
        nav::click_by_text(self.page, "Radio Button").await?;
        self.page
            .wait_for(
                &sel::label("yes"),
                self.config.timeouts.navigation_ms,
            )
            .await?;
        Ok(())
    }

    fn normalize(option: &str) -> Result<String> {
        let normalized = option.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::InvalidOption("option name is empty".into()));
        }
        Ok(normalized)
    }

    /// Click the label for an option. The input itself is visually hidden,
    /// so the label is the clickable surface.
    pub async fn select_option(&self, option: &str) -> Result<()> {
        let option = Self::normalize(option)?;
        debug!("select_option: '{}'", option);
        self.page.click(&sel::label(&option)).await?;
        Ok(())
    }

    /// Whether an option's underlying input is checked.
    pub async fn is_selected(&self, option: &str) -> Result<bool> {
        let option = Self::normalize(option)?;
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return !!el && el.checked;
            }})()"#,
            serde_json::to_string(&sel::input(&option)).unwrap()
        );
        Ok(self.page.evaluate(&js).await?)
    }

    /// Whether an option's underlying input is disabled.
    pub async fn is_disabled(&self, option: &str) -> Result<bool> {
        let option = Self::normalize(option)?;
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return !!el && el.disabled;
            }})()"#,
            serde_json::to_string(&sel::input(&option)).unwrap()
        );
        Ok(self.page.evaluate(&js).await?)
    }

    /// Read the confirmation message under the options, or `None` when no
    /// selection has been made yet.
    pub async fn output_message(&self) -> Result<Option<String>> {
        if !nav::is_visible(self.page, sel::OUTPUT_MESSAGE).await? {
            return Ok(None);
        }
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return el ? (el.innerText || '').trim() : '';
            }})()"#,
            serde_json::to_string(sel::OUTPUT_MESSAGE).unwrap()
        );
        let text: String = self.page.evaluate(&js).await?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }
}
