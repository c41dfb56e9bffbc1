//! General application settings.

use serde::{Deserialize, Serialize};

/// Application identity and localization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Display name shown by the UI surface.
    #[serde(default = "default_name")]
    pub name: String,
    /// Fallback language when neither the stored preference nor the
    /// environment locale is supported.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Two-letter codes of the supported interface languages.
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_name(),
            default_language: default_language(),
            supported_languages: default_supported_languages(),
        }
    }
}

fn default_name() -> String {
    "Academy LearnHub".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_supported_languages() -> Vec<String> {
    ["en", "ru", "kk", "uz"].map(str::to_string).to_vec()
}
