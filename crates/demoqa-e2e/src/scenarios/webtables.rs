//! Web Tables scenarios: the add/edit/delete/search lifecycle, asserted
//! through the settle-polling table reader.

use demoqa_pages::{testdata, Page, RegistrationUpdate, SuiteConfig, WebTablePage};
use demoqa_table::RowPredicate;
use tracing::info;

use crate::{check, check_eq, Result};

/// Adding a record closes the modal, bumps the row count by one and renders
/// every submitted field verbatim.
pub async fn add_record(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();
    let settle = config.timeouts.default_ms;

    let before = table.count_data_rows().await?;
    let form = testdata::unique_registration("John", "Doe");
    web.add_record(&form).await?;

    check(web.is_form_closed().await?, "registration modal should close on submit")?;
    table.await_row_count(before + 1, settle).await?;
    table.await_match(&form.row_predicate(), settle).await?;

    let records = table.extract_records().await?;
    let expected = form.expected_record();
    check(
        records.contains(&expected),
        format!("rendered rows should include {expected:?}"),
    )?;

    let salary = table.cell_value(&form.row_predicate(), "Salary").await?;
    check_eq(salary, form.salary.clone(), "salary cell")?;
    Ok(())
}

/// Three adds settle at exactly plus-three, with every record present.
pub async fn add_multiple_records(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();
    let settle = config.timeouts.default_ms;

    let before = table.count_data_rows().await?;
    // Accented, very long, and plain values all have to render verbatim.
    let batch = vec![
        testdata::with_unique_email(testdata::special_characters()),
        testdata::with_unique_email(testdata::long_values()),
        testdata::unique_registration("Plain", "Values"),
    ];
    for form in &batch {
        web.add_record(form).await?;
        table.await_match(&form.row_predicate(), settle).await?;
    }

    table.await_row_count(before + 3, settle).await?;
    let records = table.extract_records().await?;
    for form in &batch {
        let expected = form.expected_record();
        check(
            records.contains(&expected),
            format!("rendered rows should include {expected:?}"),
        )?;
    }
    Ok(())
}

/// Editing updates only the touched fields and leaves the rest intact.
pub async fn edit_record(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();
    let settle = config.timeouts.default_ms;

    let form = testdata::unique_registration("Edit", "Target");
    web.add_record(&form).await?;
    table.await_match(&form.row_predicate(), settle).await?;

    info!("editing record <{}>", form.email);
    web.click_edit_for(&form.email).await?;
    web.update_fields(&RegistrationUpdate::new().salary("99000").age("31")).await?;
    web.submit_form().await?;

    let updated = RowPredicate::new()
        .field("Email", form.email.clone())
        .field("Salary", "99000");
    table.await_match(&updated, settle).await?;

    check_eq(
        table.cell_value(&form.row_predicate(), "Age").await?,
        "31".to_string(),
        "age cell after edit",
    )?;
    check_eq(
        table.cell_value(&form.row_predicate(), "First Name").await?,
        form.first_name.clone(),
        "untouched first name after edit",
    )?;
    Ok(())
}

/// Deleting removes the row and drops the count back by one.
pub async fn delete_record(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();
    let settle = config.timeouts.default_ms;

    let form = testdata::unique_registration("Delete", "Target");
    web.add_record(&form).await?;
    table.await_match(&form.row_predicate(), settle).await?;
    let count_with_record = table.count_data_rows().await?;

    web.click_delete_for(&form.email).await?;

    table.await_no_match(&form.row_predicate(), settle).await?;
    table.await_row_count(count_with_record - 1, settle).await?;
    Ok(())
}

/// Searching narrows the grid to matching rows; clearing restores it.
pub async fn search_filters_rows(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();
    let settle = config.timeouts.default_ms;

    let form = testdata::unique_registration("Search", "Target");
    web.add_record(&form).await?;
    table.await_match(&form.row_predicate(), settle).await?;
    let unfiltered = table.count_data_rows().await?;

    // The generated email is unique, so the filtered view is exactly one row.
    web.search_for(&form.email).await?;
    table.await_row_count(1, settle).await?;
    check_eq(
        table.cell_value(&RowPredicate::new(), "Email").await?,
        form.email.clone(),
        "the one filtered row",
    )?;

    web.clear_search().await?;
    table.await_row_count(unfiltered, settle).await?;
    Ok(())
}

/// Every data row carries both action buttons and the headers match the
/// column layout the reader assumes.
pub async fn row_actions_and_headers(page: &Page, config: &SuiteConfig) -> Result<()> {
    let web = WebTablePage::new(page, config);
    web.open().await?;
    let table = web.table();

    check(table.count_data_rows().await? > 0, "seeded grid should have data rows")?;
    check(
        web.each_data_row_has_action("Edit").await?,
        "every data row should have an Edit button",
    )?;
    check(
        web.each_data_row_has_action("Delete").await?,
        "every data row should have a Delete button",
    )?;

    let headers = web.header_names().await?;
    let expected: Vec<&str> = table.columns().names().collect();
    check(
        headers.len() >= expected.len(),
        format!("header count: expected at least {}, got {}", expected.len(), headers.len()),
    )?;
    for (i, name) in expected.iter().enumerate() {
        check_eq(headers[i].as_str(), *name, "header name")?;
    }
    Ok(())
}
