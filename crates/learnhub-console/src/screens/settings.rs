//! Language preference screen.

use learnhub_core::result::AppResult;

use crate::prompt;
use crate::render;
use crate::state::AppState;

/// Show the current language and offer a change.
pub fn settings(state: &AppState) -> AppResult<()> {
    render::heading("Settings");
    render::detail(&[("Language", state.prefs.language()?)]);

    if !prompt::confirm("Change language?")? {
        return Ok(());
    }

    let supported = &state.config.app.supported_languages;
    let index = prompt::select("Language", supported)?;
    state.prefs.set_language(&supported[index])?;
    render::success(&format!("Language set to '{}'", supported[index]));
    Ok(())
}
