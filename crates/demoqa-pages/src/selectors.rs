//! Centralized selectors, one place to update when the site's markup moves.

/// Web Tables page (the react-table grid and its registration modal).
pub mod web_table {
    pub const TABLE: &str = ".rt-table";
    pub const ROW_GROUP: &str = ".rt-tbody .rt-tr-group";
    pub const CELL: &str = ".rt-td";
    pub const HEADER_CELL: &str = ".rt-thead.-header .rt-th";

    pub const ADD_BUTTON: &str = "#addNewRecordButton";
    pub const SEARCH_BOX: &str = "#searchBox";
    pub const PAGE_SIZE_SELECT: &str = "select[aria-label=\"rows per page\"]";

    pub const MODAL: &str = ".modal-content";
    pub const MODAL_CLOSE: &str = ".modal-content .close";

    pub const FIRST_NAME_INPUT: &str = "#firstName";
    pub const LAST_NAME_INPUT: &str = "#lastName";
    pub const EMAIL_INPUT: &str = "#userEmail";
    pub const AGE_INPUT: &str = "#age";
    pub const SALARY_INPUT: &str = "#salary";
    pub const DEPARTMENT_INPUT: &str = "#department";
    pub const SUBMIT_BUTTON: &str = "#submit";

    pub const EDIT_TITLE: &str = "Edit";
    pub const DELETE_TITLE: &str = "Delete";
}

/// Text Box form page.
pub mod text_box {
    pub const FULL_NAME_INPUT: &str = "#userName";
    pub const EMAIL_INPUT: &str = "#userEmail";
    pub const CURRENT_ADDRESS_INPUT: &str = "#currentAddress";
    pub const PERMANENT_ADDRESS_INPUT: &str = "#permanentAddress";
    pub const SUBMIT_BUTTON: &str = "#submit";

    pub const OUTPUT: &str = "#output";
    pub const OUTPUT_NAME: &str = "#output #name";
    pub const OUTPUT_EMAIL: &str = "#output #email";
    pub const OUTPUT_CURRENT_ADDRESS: &str = "#output #currentAddress";
    pub const OUTPUT_PERMANENT_ADDRESS: &str = "#output #permanentAddress";
}

/// Radio Button page.
pub mod radio_box {
    pub const OUTPUT_MESSAGE: &str = ".mt-3";

    /// Input element for a (lowercased) option, e.g. `#yesRadio`.
    pub fn input(option: &str) -> String {
        format!("#{option}Radio")
    }

    /// Clickable label for a (lowercased) option.
    pub fn label(option: &str) -> String {
        format!("label[for=\"{option}Radio\"]")
    }
}

/// Selector for an element carrying a `title` attribute (row action buttons).
pub fn by_title(title: &str) -> String {
    format!("[title=\"{title}\"]")
}

/// Selector for a `data-testid` attribute.
pub fn by_test_id(test_id: &str) -> String {
    format!("[data-testid=\"{test_id}\"]")
}

/// Selector for an `aria-label` attribute.
pub fn by_aria_label(label: &str) -> String {
    format!("[aria-label=\"{label}\"]")
}

/// Append an `:nth-of-type` clause (1-based position).
pub fn nth_of_type(selector: &str, position: usize) -> String {
    format!("{selector}:nth-of-type({position})")
}
