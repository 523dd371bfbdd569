use config::{Config, Environment, File};
use fedhub_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Attaches context to fallible config operations.
pub trait ConfigErrorExt<T> {
    /// Wrap the error with a static context string.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from a file (e.g., `fedhub.toml`); defaults to
///    `"fedhub"` in the working directory when no path is given.
/// 2. **Environment overrides**: values from variables prefixed with
///    `FEDHUB__`, nested keys separated by double underscores
///    (e.g., `FEDHUB__I18N__DEFAULT_LOCALE` maps to `i18n.default_locale`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing, an override is
/// malformed, or deserialization into `T` fails.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("fedhub"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder().add_source(File::from(effective_path.as_path())).add_source(
        Environment::with_prefix("FEDHUB").separator("__").convert_case(config::Case::Snake),
    );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Sanity checks over a loaded [`AppConfig`].
///
/// # Errors
/// Returns [`ConfigError::Invalid`] when the default locale is not declared,
/// a locale code repeats, or a content collection has an empty source glob.
pub fn validate_app_config(cfg: &AppConfig) -> Result<(), ConfigError> {
    let mut codes: HashSet<&str> = HashSet::new();
    for locale in &cfg.i18n.locales {
        if !codes.insert(locale.code.as_str()) {
            return Err(ConfigError::Invalid {
                message: format!("Locale code `{}` is declared twice", locale.code).into(),
                context: Some("i18n.locales".into()),
            });
        }
    }

    if !codes.contains(cfg.i18n.default_locale.as_str()) {
        return Err(ConfigError::Invalid {
            message: format!(
                "Default locale `{}` is not among the declared locales",
                cfg.i18n.default_locale
            )
            .into(),
            context: Some("i18n.default_locale".into()),
        });
    }

    for collection in &cfg.content.collections {
        if collection.source.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: format!("Collection `{}` has an empty source glob", collection.name)
                    .into(),
                context: Some("content.collections".into()),
            });
        }
    }

    Ok(())
}
