//! Language preference resolution and persistence.

use std::sync::Arc;

use tracing::debug;

use learnhub_core::config::app::AppSettings;
use learnhub_core::error::AppError;
use learnhub_core::result::AppResult;
use learnhub_core::traits::ClientStore;

/// Resolves and persists the interface language.
///
/// Resolution order: the stored preference, then the environment's
/// reported locale, then the configured default. Only codes in the
/// supported set are ever returned.
#[derive(Debug)]
pub struct PreferenceService {
    client: Arc<dyn ClientStore>,
    settings: AppSettings,
    language_key: String,
}

impl PreferenceService {
    /// Creates a new preference service.
    pub fn new(
        client: Arc<dyn ClientStore>,
        settings: AppSettings,
        language_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            settings,
            language_key: language_key.into(),
        }
    }

    /// The current interface language.
    pub fn language(&self) -> AppResult<String> {
        if let Some(stored) = self.client.get(&self.language_key)?
            && self.is_supported(&stored)
        {
            return Ok(stored);
        }

        if let Some(env_lang) = environment_language()
            && self.is_supported(&env_lang)
        {
            debug!(language = %env_lang, "Using environment-reported language");
            return Ok(env_lang);
        }

        Ok(self.settings.default_language.clone())
    }

    /// Persists a new language preference.
    pub fn set_language(&self, code: &str) -> AppResult<()> {
        if !self.is_supported(code) {
            return Err(AppError::validation(format!(
                "Unsupported language: '{code}'"
            )));
        }
        self.client.set(&self.language_key, code)
    }

    fn is_supported(&self, code: &str) -> bool {
        self.settings
            .supported_languages
            .iter()
            .any(|supported| supported == code)
    }
}

/// The two-letter language code reported by the environment, if any.
///
/// Reads `LANG`-style locale strings such as `ru_RU.UTF-8`.
fn environment_language() -> Option<String> {
    let locale = std::env::var("LANG").ok()?;
    let code: String = locale
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .take(2)
        .collect();
    (code.len() == 2).then(|| code.to_lowercase())
}
