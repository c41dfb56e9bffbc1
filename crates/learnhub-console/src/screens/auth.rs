//! Login screen.

use learnhub_core::result::AppResult;

use crate::prompt;
use crate::render;
use crate::state::AppState;

/// Prompt for credentials and attempt a login.
pub fn login(state: &AppState) -> AppResult<()> {
    render::heading("Log in");
    let username = prompt::text("Username")?;
    let password = prompt::password("Password")?;

    if state.identity.login(&username, &password)? {
        if let Some(user) = state.identity.session().current() {
            let name = user.full_name.unwrap_or(user.username);
            render::success(&format!("Welcome, {}!", name));
        }
    } else {
        render::failure("Invalid username or password");
    }
    Ok(())
}

/// Clear the active session.
pub fn logout(state: &AppState) -> AppResult<()> {
    state.identity.logout()?;
    render::success("Logged out");
    Ok(())
}
