use anyhow::Result;
use fedhub::domain::config::AppConfig;

/// Prints a short summary of the effective configuration.
pub fn show_config(cfg: &AppConfig) -> Result<()> {
    println!(
        "default locale: {} ({} locale(s) declared)",
        cfg.i18n.default_locale,
        cfg.i18n.locales.len()
    );
    for locale in &cfg.i18n.locales {
        println!("  locale {} [{}] -> {} ({})", locale.code, locale.iso, locale.file, locale.name);
    }
    for collection in &cfg.content.collections {
        println!("  collection {} <- {}", collection.name, collection.source);
    }
    println!(
        "logging: console={} level={} json={}",
        cfg.logging.console, cfg.logging.level, cfg.logging.json
    );
    Ok(())
}
