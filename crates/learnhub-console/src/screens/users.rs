//! Admin user management.

use serde::Serialize;
use tabled::Tabled;

use learnhub_core::result::AppResult;
use learnhub_entity::user::{UpdateUser, User, UserRole};
use learnhub_service::identity::CreateUserRequest;

use crate::prompt;
use crate::render::{self, OutputFormat};
use crate::state::AppState;

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// Username
    username: String,
    /// Role
    role: String,
    /// Full name
    full_name: String,
    /// Details
    details: String,
    /// Created at
    created_at: String,
}

fn user_row(user: &User) -> UserRow {
    let details = match user.role {
        UserRole::Teacher => {
            let subject = user.subject_area.clone().unwrap_or_default();
            match user.rating {
                Some(rating) => format!("{} (rating {:.1})", subject, rating),
                None => subject,
            }
        }
        UserRole::Student => [
            user.student_number.clone(),
            user.email.clone(),
            user.phone.clone(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", "),
        UserRole::Admin => String::new(),
    };
    UserRow {
        username: user.username.clone(),
        role: user.role.to_string(),
        full_name: user.full_name.clone().unwrap_or_default(),
        details,
        created_at: user.created_at.format("%Y-%m-%d %H:%M").to_string(),
    }
}

/// Admin user management menu.
pub fn manage(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let actions = [
        "List users",
        "Add user",
        "Edit user",
        "Delete user",
        "Back",
    ]
    .map(str::to_string);

    match prompt::select("Users", &actions)? {
        0 => list(state, format),
        1 => add(state),
        2 => edit(state),
        3 => delete(state),
        _ => Ok(()),
    }
}

fn list(state: &AppState, format: OutputFormat) -> AppResult<()> {
    let rows: Vec<UserRow> = state.identity.all_users().iter().map(user_row).collect();
    render::list(&rows, format);
    Ok(())
}

fn pick_user(state: &AppState, label: &str) -> AppResult<User> {
    let users = state.identity.all_users();
    let labels: Vec<String> = users
        .iter()
        .map(|u| format!("{} ({})", u.username, u.role))
        .collect();
    let index = prompt::select(label, &labels)?;
    Ok(users[index].clone())
}

fn pick_role() -> AppResult<UserRole> {
    let roles = [UserRole::Admin, UserRole::Teacher, UserRole::Student];
    let labels: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    let index = prompt::select("Role", &labels)?;
    Ok(roles[index])
}

fn add(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let username = prompt::text("Username")?;
    let password = prompt::password("Password")?;
    let role = pick_role()?;
    let full_name = prompt::optional_text("Full name")?;

    let (mut subject_area, mut student_number, mut email, mut phone) = (None, None, None, None);
    match role {
        UserRole::Teacher => {
            subject_area = prompt::optional_text("Subject area")?;
        }
        UserRole::Student => {
            student_number = prompt::optional_text("Student number")?;
            email = prompt::optional_text("Email")?;
            phone = prompt::optional_text("Phone")?;
        }
        UserRole::Admin => {}
    }

    let user = state.identity.add_user(
        &caller,
        CreateUserRequest {
            username,
            password,
            role,
            full_name,
            subject_area,
            student_number,
            email,
            phone,
        },
    )?;
    render::success(&format!("User '{}' created", user.username));
    Ok(())
}

fn edit(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let user = pick_user(state, "User to edit")?;

    let mut updates = UpdateUser {
        username: prompt::optional_text("New username")?,
        full_name: prompt::optional_text("New full name")?,
        ..UpdateUser::default()
    };
    if prompt::confirm("Change password?")? {
        updates.password = Some(prompt::password("New password")?);
    }
    match user.role {
        UserRole::Teacher => {
            updates.subject_area = prompt::optional_text("New subject area")?;
            if let Some(raw) = prompt::optional_text("New rating (0.0-5.0)")? {
                updates.rating = raw.trim().parse().ok();
            }
        }
        UserRole::Student => {
            updates.student_number = prompt::optional_text("New student number")?;
            updates.email = prompt::optional_text("New email")?;
            updates.phone = prompt::optional_text("New phone")?;
        }
        UserRole::Admin => {}
    }

    let updated = state.identity.update_user(&caller, user.id, updates)?;
    render::success(&format!("User '{}' updated", updated.username));
    Ok(())
}

fn delete(state: &AppState) -> AppResult<()> {
    let caller = state.caller()?;
    let user = pick_user(state, "User to delete")?;
    if !prompt::confirm(&format!("Delete user '{}'?", user.username))? {
        return Ok(());
    }
    state.identity.delete_user(&caller, user.id)?;
    render::success("User deleted");
    Ok(())
}
