//! Text Box scenarios: the form echoes valid input and rejects bad emails.

use demoqa_pages::{testdata, Page, SuiteConfig, TextBoxPage, UserData};

use crate::{check, check_eq, Result};

/// Submitting valid data renders an output block echoing every field.
pub async fn submit_echoes_input(page: &Page, config: &SuiteConfig) -> Result<()> {
    let text_box = TextBoxPage::new(page, config);
    text_box.open().await?;

    let data = testdata::text_box_user();
    text_box.fill(&data).await?;
    text_box.submit().await?;

    // Form submission is synchronous on this page; one settle beat suffices.
    page.wait(200).await;
    let output = text_box.output().await?;
    let output = match output {
        Some(output) => output,
        None => return check(false, "output block should render after submit"),
    };
    check_eq(output.name, data.full_name, "echoed name")?;
    check_eq(output.email, data.email, "echoed email")?;
    check_eq(output.current_address, data.current_address, "echoed current address")?;
    check_eq(output.permanent_address, data.permanent_address, "echoed permanent address")?;
    Ok(())
}

/// An invalid email keeps the output's email line from rendering.
pub async fn invalid_email_rejected(page: &Page, config: &SuiteConfig) -> Result<()> {
    let text_box = TextBoxPage::new(page, config);
    text_box.open().await?;

    let invalid = testdata::invalid_emails();
    let data = UserData {
        email: invalid[0].to_string(),
        ..testdata::text_box_user()
    };
    text_box.fill(&data).await?;
    text_box.submit().await?;

    page.wait(200).await;
    if let Some(output) = text_box.output().await? {
        check(
            output.email.is_empty(),
            format!("invalid email '{}' should not be echoed, got '{}'", data.email, output.email),
        )?;
    }
    Ok(())
}
