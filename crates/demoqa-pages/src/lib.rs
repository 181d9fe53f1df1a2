//! # demoqa-pages
//!
//! Page objects over the `eoka` browser driver for the demoqa.com practice
//! site, plus the suite configuration and per-scenario session lifecycle.
//!
//! Page objects are assertion-free: they navigate, act and return
//! data/booleans. Assertions and settle-polling belong to the caller, which
//! gets a [`demoqa_table::TableStateReader`] via [`WebTablePage::table`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demoqa_pages::{SuiteConfig, SuiteSession, WebTablePage};
//!
//! # #[tokio::main]
//! # async fn main() -> demoqa_pages::Result<()> {
//! let config = SuiteConfig::default();
//! let session = SuiteSession::launch(&config).await?;
//!
//! let page = WebTablePage::new(session.page(), &config);
//! page.open().await?;
//! let count = page.table().count_data_rows().await?;
//! println!("{count} records on screen");
//!
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod nav;
mod radio_box;
mod session;
mod text_box;
mod web_table;

pub mod selectors;
pub mod testdata;

pub use config::{BrowserConfig, SuiteConfig, Timeouts, Viewport};
pub use radio_box::RadioBoxPage;
pub use session::SuiteSession;
pub use text_box::{SubmittedText, TextBoxPage, UserData};
pub use web_table::{LiveTable, RegistrationForm, RegistrationUpdate, WebTablePage};

// Re-export driver types callers need for their own plumbing.
pub use eoka::{Browser, Page, StealthConfig};

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by page objects and the session lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),

    #[error(transparent)]
    Table(#[from] demoqa_table::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),
}
