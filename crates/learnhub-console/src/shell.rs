//! The interactive menu loop.
//!
//! The anonymous menu offers only login; authenticated menus are built
//! from the session's role, so admin screens are simply absent for
//! non-admins.

use learnhub_core::result::AppResult;
use learnhub_entity::user::{User, UserRole};

use crate::prompt;
use crate::render::{self, OutputFormat};
use crate::screens;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Login,
    BrowseLessons,
    MyHomework,
    ManageLessons,
    GradeHomework,
    ManageUsers,
    ManageCategories,
    Messages,
    Settings,
    Logout,
    Quit,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::BrowseLessons => "Browse lessons",
            Self::MyHomework => "My homework",
            Self::ManageLessons => "Manage lessons",
            Self::GradeHomework => "Grade homework",
            Self::ManageUsers => "Manage users",
            Self::ManageCategories => "Manage categories",
            Self::Messages => "Messages",
            Self::Settings => "Settings",
            Self::Logout => "Log out",
            Self::Quit => "Quit",
        }
    }
}

/// The interactive console shell.
#[derive(Debug)]
pub struct Shell {
    state: AppState,
    format: OutputFormat,
}

impl Shell {
    /// Creates a shell over the given application state.
    pub fn new(state: AppState, format: OutputFormat) -> Self {
        Self { state, format }
    }

    /// Runs the menu loop until the user quits.
    ///
    /// Screen errors are rendered and the loop continues; only terminal
    /// failures abort the shell.
    pub fn run(&self) -> AppResult<()> {
        println!("{}", self.state.config.app.name);
        loop {
            let actions = match self.state.identity.session().current() {
                Some(user) => menu_for(&user),
                None => vec![Action::Login, Action::Quit],
            };
            let labels: Vec<String> = actions.iter().map(|a| a.label().to_string()).collect();
            let index = prompt::select("Menu", &labels)?;
            let action = actions[index];

            if action == Action::Quit {
                return Ok(());
            }
            if let Err(err) = self.dispatch(action) {
                render::failure(&err.to_string());
            }
        }
    }

    fn dispatch(&self, action: Action) -> AppResult<()> {
        match action {
            Action::Login => screens::auth::login(&self.state),
            Action::BrowseLessons => screens::lessons::browse(&self.state, self.format),
            Action::MyHomework => screens::homework::my_submissions(&self.state, self.format),
            Action::ManageLessons => screens::lessons::manage(&self.state, self.format),
            Action::GradeHomework => screens::grading::grade_homework(&self.state, self.format),
            Action::ManageUsers => screens::users::manage(&self.state, self.format),
            Action::ManageCategories => screens::categories::manage(&self.state, self.format),
            Action::Messages => screens::chat::messages(&self.state),
            Action::Settings => screens::settings::settings(&self.state),
            Action::Logout => screens::auth::logout(&self.state),
            Action::Quit => Ok(()),
        }
    }
}

fn menu_for(user: &User) -> Vec<Action> {
    let mut actions = vec![Action::BrowseLessons];
    match user.role {
        UserRole::Admin => {
            actions.extend([
                Action::ManageLessons,
                Action::GradeHomework,
                Action::ManageUsers,
                Action::ManageCategories,
            ]);
        }
        UserRole::Teacher => {
            actions.extend([Action::ManageLessons, Action::GradeHomework]);
        }
        UserRole::Student => {
            actions.push(Action::MyHomework);
        }
    }
    actions.extend([Action::Messages, Action::Settings, Action::Logout, Action::Quit]);
    actions
}
