use eoka::Page;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::nav;
use crate::selectors::text_box as sel;
use crate::Result;

/// Input for the Text Box form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub full_name: String,
    pub email: String,
    pub current_address: String,
    pub permanent_address: String,
}

/// The echoed output block, parsed back into fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmittedText {
    pub name: String,
    pub email: String,
    pub current_address: String,
    pub permanent_address: String,
}

impl SubmittedText {
    /// Parse one output line of the form `Label:value`. The site's labels
    /// vary in spacing (and spelling), so everything after the first colon
    /// is the value.
    pub(crate) fn parse_line(line: &str) -> Option<&str> {
        line.split_once(':').map(|(_, value)| value.trim())
    }
}

/// Page object for the Text Box form.
pub struct TextBoxPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> TextBoxPage<'a> {
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    /// Navigate from the landing page to the Text Box form.
    pub async fn open(&self) -> Result<()> {
        info!("opening text box page");
        self.page.goto(&self.config.base_url).await?;
        nav::click_by_text(self.page, "Elements").await?;
        nav::click_by_text(self.page, "Text Box").await?;
        self.page
            .wait_for(sel::FULL_NAME_INPUT, self.config.timeouts.navigation_ms)
            .await?;
        Ok(())
    }

    /// Fill every form field.
    pub async fn fill(&self, data: &UserData) -> Result<()> {
        debug!("fill: {} <{}>", data.full_name, data.email);
        self.page.fill(sel::FULL_NAME_INPUT, &data.full_name).await?;
        self.page.fill(sel::EMAIL_INPUT, &data.email).await?;
        self.page
            .fill(sel::CURRENT_ADDRESS_INPUT, &data.current_address)
            .await?;
        self.page
            .fill(sel::PERMANENT_ADDRESS_INPUT, &data.permanent_address)
            .await?;
        Ok(())
    }

    /// Submit the form.
    pub async fn submit(&self) -> Result<()> {
        self.page.click(sel::SUBMIT_BUTTON).await?;
        Ok(())
    }

    /// Read back the echoed output block, or `None` when the form rejected
    /// the input and rendered nothing.
    pub async fn output(&self) -> Result<Option<SubmittedText>> {
        if !nav::is_visible(self.page, sel::OUTPUT).await? {
            return Ok(None);
        }
        let name = self.output_line(sel::OUTPUT_NAME).await?;
        let email = self.output_line(sel::OUTPUT_EMAIL).await?;
        let current_address = self.output_line(sel::OUTPUT_CURRENT_ADDRESS).await?;
        let permanent_address = self.output_line(sel::OUTPUT_PERMANENT_ADDRESS).await?;
        Ok(Some(SubmittedText {
            name,
            email,
            current_address,
            permanent_address,
        }))
    }

    async fn output_line(&self, selector: &str) -> Result<String> {
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return el ? (el.innerText || '').trim() : '';
            }})()"#,
            serde_json::to_string(selector).unwrap()
        );
        let line: String = self.page.evaluate(&js).await?;
        Ok(SubmittedText::parse_line(&line).unwrap_or("").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_takes_everything_after_first_colon() {
        assert_eq!(SubmittedText::parse_line("Name:John Doe"), Some("John Doe"));
        assert_eq!(
            SubmittedText::parse_line("Email:john@x.com"),
            Some("john@x.com")
        );
    }

    #[test]
    fn parse_line_trims_and_keeps_later_colons() {
        assert_eq!(
            SubmittedText::parse_line("Current Address : 12 High St: Flat 3"),
            Some("12 High St: Flat 3")
        );
    }

    #[test]
    fn parse_line_without_colon_is_none() {
        assert_eq!(SubmittedText::parse_line("no separator here"), None);
        assert_eq!(SubmittedText::parse_line(""), None);
    }
}
