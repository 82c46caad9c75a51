//! Runtime Settings
//!
//! Builds the dashboard configuration from the embedded `dashboard.toml`
//! plus per-browser `localStorage` overrides, and shares the resulting API
//! client with every page.

use leptos::*;
use marketplace_dashboard::api::HttpApiClient;
use marketplace_dashboard::config::{ApiConfig, Config};
use marketplace_dashboard::format::NumberLocale;
use web_sys::console;

/// Locale value meaning "use the browser's language"
const AUTO_LOCALE: &str = "auto";

/// Shared by all pages
#[derive(Clone)]
pub struct AppContext {
    pub api: HttpApiClient,
    pub locale: NumberLocale,
}

/// Embedded defaults, then `localStorage` overrides.
///
/// Runs before logging is set up, so problems go straight to the console.
pub fn load_config() -> Config {
    let mut config = Config::from_toml_str(include_str!("../dashboard.toml")).unwrap_or_else(|e| {
        console::warn_1(&format!("Ignoring embedded dashboard.toml: {}", e).into());
        Config::default()
    });

    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    config.apply_overrides(|key| {
        storage
            .as_ref()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    });

    if let Err(e) = config.validate() {
        console::error_1(&format!("{}; falling back to the default API endpoint", e).into());
        config.api = ApiConfig::default();
    }

    config
}

/// Resolve the configured locale, following the browser for `auto`
fn resolve_locale(configured: &str) -> NumberLocale {
    if configured.eq_ignore_ascii_case(AUTO_LOCALE) {
        let language = web_sys::window()
            .and_then(|window| window.navigator().language())
            .unwrap_or_default();
        NumberLocale::from_tag(&language)
    } else {
        NumberLocale::from_tag(configured)
    }
}

/// Provide the shared context to the component tree
pub fn provide_app_context(config: &Config) {
    provide_context(AppContext {
        api: HttpApiClient::new(&config.api),
        locale: resolve_locale(&config.display.locale),
    });
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found")
}
