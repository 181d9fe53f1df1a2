//! Radio Button scenarios: selection feedback and the permanently disabled
//! option.

use demoqa_pages::{Page, RadioBoxPage, SuiteConfig};

use crate::{check, Result};

async fn select_and_confirm(page: &Page, config: &SuiteConfig, option: &str) -> Result<()> {
    let radio = RadioBoxPage::new(page, config);
    radio.open().await?;

    radio.select_option(option).await?;
    page.wait(200).await;

    check(
        radio.is_selected(option).await?,
        format!("'{option}' should be checked after selection"),
    )?;
    let message = radio.output_message().await?;
    match message {
        Some(message) => check(
            message.to_lowercase().contains(&option.to_lowercase()),
            format!("confirmation should name '{option}', got '{message}'"),
        ),
        None => check(false, "confirmation message should render after selection"),
    }
}

pub async fn select_yes(page: &Page, config: &SuiteConfig) -> Result<()> {
    select_and_confirm(page, config, "Yes").await
}

pub async fn select_impressive(page: &Page, config: &SuiteConfig) -> Result<()> {
    select_and_confirm(page, config, "Impressive").await
}

/// The "No" option is rendered disabled and cannot become selected.
pub async fn no_is_disabled(page: &Page, config: &SuiteConfig) -> Result<()> {
    let radio = RadioBoxPage::new(page, config);
    radio.open().await?;

    check(radio.is_disabled("No").await?, "'No' should be disabled")?;
    check(!radio.is_selected("No").await?, "'No' should not be selected")?;
    check(
        radio.output_message().await?.is_none(),
        "no confirmation should render before any selection",
    )?;
    Ok(())
}
