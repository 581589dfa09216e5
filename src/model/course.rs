use serde::{Deserialize, Serialize};

use super::hole::HOLE_COUNT;
use crate::error::AppError;

/// Course data for the selected tee. Loaded once when the round starts and
/// never refreshed; par edits live on the round, not here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseInfo {
    pub name: String,
    pub tee_color: String,
    pub par: Vec<i32>,
    pub yardage: Vec<i32>,
}

impl CourseInfo {
    /// # Errors
    ///
    /// Will return `Err` if the course has no name or the par/yardage arrays
    /// are not exactly one entry per hole.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("course name is required".into()));
        }
        let holes = usize::from(HOLE_COUNT);
        if self.par.len() != holes {
            return Err(AppError::Validation(format!(
                "course par must list {holes} holes, got {}",
                self.par.len()
            )));
        }
        if self.yardage.len() != holes {
            return Err(AppError::Validation(format!(
                "course yardage must list {holes} holes, got {}",
                self.yardage.len()
            )));
        }
        Ok(())
    }

    /// Par for a 1-based hole number, 0 if the hole is outside the card.
    #[must_use]
    pub fn par_for(&self, hole: u8) -> i32 {
        hole.checked_sub(1)
            .and_then(|i| self.par.get(usize::from(i)))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn yardage_for(&self, hole: u8) -> i32 {
        hole.checked_sub(1)
            .and_then(|i| self.yardage.get(usize::from(i)))
            .copied()
            .unwrap_or(0)
    }
}
