use std::path::Path;

use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;

use countdown_core::format::NEARLY_DUE_WINDOW_DAYS;

pub const CONFIG_FILE: &str = "countdown.toml";
pub const ENV_PREFIX: &str = "COUNTDOWN_";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Color labels by urgency when writing to a terminal
    pub color: bool,
    /// Days ahead that still count as nearly due
    pub nearly_due_days: u32,
    /// Fixed reference date (YYYY-MM-DD) instead of the local date
    pub today: Option<String>,
    pub label_style: LabelStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            nearly_due_days: NEARLY_DUE_WINDOW_DAYS,
            today: None,
            label_style: LabelStyle::default(),
        }
    }
}

/// How a label is wrapped when inserted into the text.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `(1 week)`
    #[default]
    Parens,
    /// `[1 week]`
    Brackets,
}

impl LabelStyle {
    pub fn wrap(&self, label: &str) -> String {
        match self {
            LabelStyle::Parens => format!("({label})"),
            LabelStyle::Brackets => format!("[{label}]"),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_file(CONFIG_FILE)
    }

    /// A missing file is treated as empty; environment variables take precedence.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.nearly_due_days, 3);
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                color = false
                nearly_due_days = 5
                label_style = "brackets"
                "#,
            )?;
            jail.set_env("COUNTDOWN_NEARLY_DUE_DAYS", "7");
            jail.set_env("COUNTDOWN_TODAY", "2025-06-20");

            let config = Config::new()?;

            assert!(!config.color);
            assert_eq!(config.nearly_due_days, 7);
            assert_eq!(config.today.as_deref(), Some("2025-06-20"));
            assert_eq!(config.label_style, LabelStyle::Brackets);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path() {
        Jail::expect_with(|jail| {
            jail.create_file("notes.toml", "label_style = \"parens\"\ncolor = true")?;
            let config = Config::from_file("notes.toml")?;
            assert_eq!(config.label_style, LabelStyle::Parens);
            Ok(())
        });
    }

    #[test]
    fn test_label_style_wrap() {
        assert_eq!(LabelStyle::Parens.wrap("1 week"), "(1 week)");
        assert_eq!(LabelStyle::Brackets.wrap("←2 days"), "[←2 days]");
    }
}
