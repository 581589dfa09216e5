pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

use crate::error::AppError;
use crate::model::SessionCredentials;

#[must_use]
pub fn args_checks() -> Args {
    Args::parse()
}

impl Args {
    /// Trims and checks everything a round needs before it can start.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the session credentials are blank, no player
    /// names are left after trimming, or a name is entered twice.
    pub fn validate(self) -> Result<CleanArgs, AppError> {
        let session_name = self.session_name.trim().to_string();
        let session_password = self.session_password.trim().to_string();
        if session_name.is_empty() || session_password.is_empty() {
            return Err(AppError::Validation(
                "Session name and password are required".into(),
            ));
        }

        let mut players: Vec<String> = Vec::with_capacity(self.players.len());
        for name in self.players.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            if players.iter().any(|p| p == name) {
                return Err(AppError::Validation(format!(
                    "player '{name}' was entered twice"
                )));
            }
            players.push(name.to_string());
        }
        if players.is_empty() {
            return Err(AppError::Validation(
                "You must enter at least one player".into(),
            ));
        }

        self.course.validate()?;

        Ok(CleanArgs {
            players,
            course: self.course,
            credentials: SessionCredentials {
                name: session_name,
                password: session_password,
            },
            create_session: self.create_session,
            remote_url: self.remote_url,
            bind: self.bind,
        })
    }
}
