use std::path::Path;

use serde::Deserialize;

use crate::{Error, Result};

fn default_base_url() -> String {
    "https://demoqa.com".to_string()
}

fn default_true() -> bool {
    true
}

fn default_navigation_ms() -> u64 {
    30_000
}

fn default_default_ms() -> u64 {
    10_000
}

fn default_poll_interval_ms() -> u64 {
    100
}

/// Top-level suite configuration, loadable from YAML with env overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct SuiteConfig {
    /// Base URL of the site under test.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Browser launch configuration.
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Operation timeout budgets.
    #[serde(default)]
    pub timeouts: Timeouts,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            browser: BrowserConfig::default(),
            timeouts: Timeouts::default(),
        }
    }
}

/// Browser launch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BrowserConfig {
    /// Run in headless mode.
    #[serde(default = "default_true")]
    pub headless: bool,

    /// Viewport size.
    #[serde(default)]
    pub viewport: Viewport,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport: Viewport::default(),
        }
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

/// Timeout budgets in milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct Timeouts {
    /// Navigation and page-ready waits.
    #[serde(default = "default_navigation_ms")]
    pub navigation_ms: u64,

    /// Settle polls and element waits.
    #[serde(default = "default_default_ms")]
    pub default_ms: u64,

    /// Re-evaluation interval for settle polls.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            navigation_ms: default_navigation_ms(),
            default_ms: default_default_ms(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl SuiteConfig {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: SuiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BASE_URL` and `HEADLESS` from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(
            std::env::var("BASE_URL").ok().as_deref(),
            std::env::var("HEADLESS").ok().as_deref(),
        );
    }

    fn apply_overrides(&mut self, base_url: Option<&str>, headless: Option<&str>) {
        if let Some(url) = base_url {
            if !url.is_empty() {
                self.base_url = url.trim_end_matches('/').to_string();
            }
        }
        if let Some(flag) = headless {
            self.browser.headless = !matches!(flag.trim(), "0" | "false" | "no");
        }
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url is required".into()));
        }
        if self.timeouts.default_ms == 0 || self.timeouts.navigation_ms == 0 {
            return Err(Error::Config("timeouts must be non-zero".into()));
        }
        if self.timeouts.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_yaml_uses_defaults() {
        let config = SuiteConfig::parse("{}").unwrap();
        assert_eq!(config.base_url, "https://demoqa.com");
        assert!(config.browser.headless);
        assert_eq!(config.browser.viewport.width, 1920);
        assert_eq!(config.browser.viewport.height, 1080);
        assert_eq!(config.timeouts.navigation_ms, 30_000);
        assert_eq!(config.timeouts.default_ms, 10_000);
        assert_eq!(config.timeouts.poll_interval_ms, 100);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
base_url: "https://staging.example.com"
browser:
  headless: false
  viewport:
    width: 1280
    height: 720
timeouts:
  navigation_ms: 15000
  default_ms: 5000
  poll_interval_ms: 50
"#;
        let config = SuiteConfig::parse(yaml).unwrap();
        assert_eq!(config.base_url, "https://staging.example.com");
        assert!(!config.browser.headless);
        assert_eq!(config.browser.viewport.width, 1280);
        assert_eq!(config.timeouts.default_ms, 5000);
        assert_eq!(config.timeouts.poll_interval_ms, 50);
    }

    #[test]
    fn validation_rejects_empty_base_url() {
        let result = SuiteConfig::parse("base_url: \"\"");
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_zero_timeouts() {
        let result = SuiteConfig::parse("timeouts:\n  default_ms: 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_base_url_and_strip_trailing_slash() {
        let mut config = SuiteConfig::default();
        config.apply_overrides(Some("https://local.test/"), None);
        assert_eq!(config.base_url, "https://local.test");
    }

    #[test]
    fn overrides_parse_headless_flags() {
        let mut config = SuiteConfig::default();
        config.apply_overrides(None, Some("false"));
        assert!(!config.browser.headless);
        config.apply_overrides(None, Some("1"));
        assert!(config.browser.headless);
        config.apply_overrides(None, Some("0"));
        assert!(!config.browser.headless);
    }

    #[test]
    fn empty_override_is_ignored() {
        let mut config = SuiteConfig::default();
        config.apply_overrides(Some(""), None);
        assert_eq!(config.base_url, "https://demoqa.com");
    }
}
