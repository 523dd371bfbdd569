//! Declarative application configuration: locales, content collections, and
//! logging knobs. Pure data; loading mechanics live in the kernel.

use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub i18n: I18nConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Locale declarations consumed by an external i18n framework.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<LocaleConfig>,
}

/// One declared locale: code, ISO tag, resource file, and display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleConfig {
    pub code: String,
    pub iso: String,
    pub file: String,
    pub name: String,
}

/// Content collections sourced from file globs by an external framework.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub collections: Vec<CollectionConfig>,
}

/// One content collection; this layer does not define its schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    pub kind: CollectionKind,
    pub source: String,
}

/// Collection flavor understood by the content framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Page,
    Data,
}

/// Logging knobs consumed by the CLI when wiring the logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    pub path: Option<PathBuf>,
    pub level: String,
    pub json: bool,
}

// --- Default ---

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "ja".to_owned(),
            locales: vec![
                LocaleConfig {
                    code: "en".to_owned(),
                    iso: "en-US".to_owned(),
                    file: "en.json".to_owned(),
                    name: "English".to_owned(),
                },
                LocaleConfig {
                    code: "ja".to_owned(),
                    iso: "ja-JP".to_owned(),
                    file: "ja.json".to_owned(),
                    name: "日本語".to_owned(),
                },
            ],
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            collections: vec![CollectionConfig {
                name: "help".to_owned(),
                kind: CollectionKind::Page,
                source: "1.help/**/*".to_owned(),
            }],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, path: None, level: "info".to_owned(), json: false }
    }
}
