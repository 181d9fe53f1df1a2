use async_trait::async_trait;
use eoka::Page;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use demoqa_table::{ColumnMap, RowPredicate, TableRecord, TableSource, TableStateReader};

use crate::config::SuiteConfig;
use crate::nav;
use crate::selectors::{self, web_table as sel};
use crate::{Error, Result};

/// Form data for the registration modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub salary: String,
    pub department: String,
}

impl RegistrationForm {
    /// Predicate locating this record's row by its email, the one field the
    /// suite keeps unique per record.
    pub fn row_predicate(&self) -> RowPredicate {
        RowPredicate::column_contains("Email", self.email.clone())
    }

    /// The record this form should produce once rendered.
    pub fn expected_record(&self) -> TableRecord {
        TableRecord {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            age: self.age.clone(),
            salary: self.salary.clone(),
            department: self.department.clone(),
        }
    }
}

/// Partial update for the edit modal: only set fields are touched.
#[derive(Debug, Clone, Default)]
pub struct RegistrationUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub salary: Option<String>,
    pub department: Option<String>,
}

impl RegistrationUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn age(mut self, value: impl Into<String>) -> Self {
        self.age = Some(value.into());
        self
    }

    pub fn salary(mut self, value: impl Into<String>) -> Self {
        self.salary = Some(value.into());
        self
    }

    pub fn department(mut self, value: impl Into<String>) -> Self {
        self.department = Some(value.into());
        self
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }
}

/// Snapshot of the rendered grid: rows of trimmed cell texts as JSON.
const ROWS_JS: &str = r#"
(() => {
    const rows = document.querySelectorAll('.rt-tbody .rt-tr-group');
    const out = [];
    for (const row of rows) {
        const cells = row.querySelectorAll('.rt-td');
        out.push(Array.from(cells).map(c => (c.innerText || '').trim()));
    }
    return JSON.stringify(out);
})()
"#;

/// Click a row action button (`[title=...]`) in the first row whose text
/// contains the needle.
const ROW_ACTION_JS: &str = r#"
((needle, title) => {
    const rows = document.querySelectorAll('.rt-tbody .rt-tr-group');
    for (const row of rows) {
        if ((row.innerText || '').includes(needle)) {
            const button = row.querySelector('[title="' + title + '"]');
            if (button) {
                button.click();
                return true;
            }
        }
    }
    return false;
})
"#;

/// Whether every data-bearing row carries the given action button.
const ROWS_HAVE_ACTION_JS: &str = r#"
((title) => {
    const rows = document.querySelectorAll('.rt-tbody .rt-tr-group');
    for (const row of rows) {
        if (!(row.innerText || '').trim()) continue;
        if (!row.querySelector('[title="' + title + '"]')) return false;
    }
    return true;
})
"#;

/// Click the first delete button on the page, if any.
const DELETE_FIRST_JS: &str = r#"
(() => {
    const button = document.querySelector('.rt-tbody [title="Delete"]');
    if (button) {
        button.click();
        return true;
    }
    return false;
})()
"#;

/// Header cell texts, in on-screen order.
const HEADERS_JS: &str = r#"
(() => {
    const cells = document.querySelectorAll('.rt-thead.-header .rt-th');
    return JSON.stringify(Array.from(cells).map(c => (c.innerText || '').trim()));
})()
"#;

/// Select a rows-per-page option by value and fire the change event.
const PAGE_SIZE_JS: &str = r#"
((value) => {
    const sel = document.querySelector('select[aria-label="rows per page"]');
    if (!sel) return false;
    const opt = Array.from(sel.options).find(o => o.value === value);
    if (!opt) return false;
    sel.value = opt.value;
    sel.dispatchEvent(new Event('change', { bubbles: true }));
    return true;
})
"#;

/// Live [`TableSource`] backed by the rendered grid. Each call re-evaluates
/// the snapshot script, so reads always reflect the current DOM.
pub struct LiveTable<'a> {
    page: &'a Page,
}

#[async_trait]
impl TableSource for LiveTable<'_> {
    async fn rows(&self) -> demoqa_table::Result<Vec<Vec<String>>> {
        let json: String = self
            .page
            .evaluate(ROWS_JS)
            .await
            .map_err(|e| demoqa_table::Error::Driver(e.to_string()))?;
        serde_json::from_str(&json)
            .map_err(|e| demoqa_table::Error::Driver(format!("rows snapshot parse error: {e}")))
    }
}

/// Page object for the Web Tables page.
///
/// Pure navigation and mutation; state reads and settle-polling go through
/// the [`TableStateReader`] returned by [`table`](Self::table).
pub struct WebTablePage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> WebTablePage<'a> {
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    /// Reader over the live grid with the standard column layout.
    pub fn table(&self) -> TableStateReader<LiveTable<'a>> {
        TableStateReader::new(LiveTable { page: self.page }, ColumnMap::web_table())
            .with_poll_interval(self.config.timeouts.poll_interval_ms)
    }

    /// Navigate from the landing page through the Elements card to the
    /// Web Tables grid and wait for it to render.
    pub async fn open(&self) -> Result<()> {
        info!("opening web tables page");
        self.page.goto(&self.config.base_url).await?;
        nav::click_by_text(self.page, "Elements").await?;
        nav::click_by_text(self.page, "Web Tables").await?;
        self.page
            .wait_for(sel::TABLE, self.config.timeouts.navigation_ms)
            .await?;
        Ok(())
    }

    // =========================================================================
    // Registration modal
    // =========================================================================

    /// Open the registration modal.
    pub async fn open_form(&self) -> Result<()> {
        self.page.click(sel::ADD_BUTTON).await?;
        self.page
            .wait_for_visible(sel::MODAL, self.config.timeouts.default_ms)
            .await?;
        Ok(())
    }

    /// Fill every registration field, clearing previous content first.
    pub async fn fill_form(&self, form: &RegistrationForm) -> Result<()> {
        debug!("fill_form: {} <{}>", form.first_name, form.email);
        self.page.fill(sel::FIRST_NAME_INPUT, &form.first_name).await?;
        self.page.fill(sel::LAST_NAME_INPUT, &form.last_name).await?;
        self.page.fill(sel::EMAIL_INPUT, &form.email).await?;
        self.page.fill(sel::AGE_INPUT, &form.age).await?;
        self.page.fill(sel::SALARY_INPUT, &form.salary).await?;
        self.page.fill(sel::DEPARTMENT_INPUT, &form.department).await?;
        Ok(())
    }

    /// Fill only the fields the update names.
    pub async fn update_fields(&self, update: &RegistrationUpdate) -> Result<()> {
        let fields = [
            (sel::FIRST_NAME_INPUT, &update.first_name),
            (sel::LAST_NAME_INPUT, &update.last_name),
            (sel::EMAIL_INPUT, &update.email),
            (sel::AGE_INPUT, &update.age),
            (sel::SALARY_INPUT, &update.salary),
            (sel::DEPARTMENT_INPUT, &update.department),
        ];
        for (selector, value) in fields {
            if let Some(value) = value {
                self.page.fill(selector, value).await?;
            }
        }
        Ok(())
    }

    /// Submit the modal form.
    pub async fn submit_form(&self) -> Result<()> {
        self.page.click(sel::SUBMIT_BUTTON).await?;
        Ok(())
    }

    /// Dismiss the modal without submitting.
    pub async fn close_form(&self) -> Result<()> {
        self.page.click(sel::MODAL_CLOSE).await?;
        Ok(())
    }

    /// Open, fill and submit the registration modal in one step.
    pub async fn add_record(&self, form: &RegistrationForm) -> Result<()> {
        info!("add_record: <{}>", form.email);
        self.open_form().await?;
        self.fill_form(form).await?;
        self.submit_form().await
    }

    /// Whether the registration modal is currently absent or hidden.
    pub async fn is_form_closed(&self) -> Result<bool> {
        Ok(!nav::is_visible(self.page, sel::MODAL).await?)
    }

    // =========================================================================
    // Row actions
    // =========================================================================

    /// Click Edit in the first row whose text contains the needle, then wait
    /// for the modal.
    pub async fn click_edit_for(&self, needle: &str) -> Result<()> {
        self.click_row_action(needle, sel::EDIT_TITLE).await?;
        self.page
            .wait_for_visible(sel::MODAL, self.config.timeouts.default_ms)
            .await?;
        Ok(())
    }

    /// Click Delete in the first row whose text contains the needle.
    pub async fn click_delete_for(&self, needle: &str) -> Result<()> {
        self.click_row_action(needle, sel::DELETE_TITLE).await
    }

    async fn click_row_action(&self, needle: &str, title: &str) -> Result<()> {
        debug!("row action '{}' for row containing '{}'", title, needle);
        let js = format!(
            "{}({},{})",
            ROW_ACTION_JS,
            serde_json::to_string(needle).unwrap(),
            serde_json::to_string(title).unwrap()
        );
        let clicked: bool = self.page.evaluate(&js).await?;
        if !clicked {
            return Err(Error::ElementNotFound(format!(
                "{title} button in row containing '{needle}'"
            )));
        }
        Ok(())
    }

    /// Whether every data-bearing row exposes the given action button
    /// ("Edit" or "Delete").
    pub async fn each_data_row_has_action(&self, title: &str) -> Result<bool> {
        let js = format!(
            "{}({})",
            ROWS_HAVE_ACTION_JS,
            serde_json::to_string(title).unwrap()
        );
        Ok(self.page.evaluate(&js).await?)
    }

    /// Delete rows one at a time until no delete button remains.
    pub async fn delete_all_records(&self) -> Result<()> {
        info!("delete_all_records");
        loop {
            let deleted: bool = self.page.evaluate(DELETE_FIRST_JS).await?;
            if !deleted {
                return Ok(());
            }
            // Give the grid a beat to re-render before the next pass.
            self.page.wait(100).await;
        }
    }

    // =========================================================================
    // Search and layout
    // =========================================================================

    /// Type into the search box, replacing any previous term.
    pub async fn search_for(&self, term: &str) -> Result<()> {
        debug!("search_for: '{}'", term);
        self.page.fill(sel::SEARCH_BOX, term).await?;
        Ok(())
    }

    /// Clear the search box.
    pub async fn clear_search(&self) -> Result<()> {
        self.page.fill(sel::SEARCH_BOX, "").await?;
        Ok(())
    }

    /// Pick a rows-per-page value from the dropdown.
    pub async fn select_page_size(&self, rows: u32) -> Result<()> {
        let js = format!(
            "{}({})",
            PAGE_SIZE_JS,
            serde_json::to_string(&rows.to_string()).unwrap()
        );
        let selected: bool = self.page.evaluate(&js).await?;
        if !selected {
            return Err(Error::ElementNotFound(format!(
                "rows-per-page option '{rows}' in {}",
                selectors::by_aria_label("rows per page")
            )));
        }
        Ok(())
    }

    /// Column header names in on-screen order.
    pub async fn header_names(&self) -> Result<Vec<String>> {
        let json: String = self.page.evaluate(HEADERS_JS).await?;
        let names: Vec<String> = serde_json::from_str(&json)
            .map_err(|e| Error::ElementNotFound(format!("header parse error: {e}")))?;
        Ok(names)
    }
}
