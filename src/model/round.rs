use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::course::CourseInfo;
use super::hole::Hole;
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Round {
    pub players: Vec<String>,
    pub course: CourseInfo,
    /// Allocated lazily: hole `n` lives at index `n - 1`, and only holes up to
    /// the furthest one visited exist.
    pub holes: Vec<Hole>,
    pub par_overrides: BTreeMap<u8, i32>,
    pub started_at: DateTime<Utc>,
}

impl Round {
    /// Starts a round on hole 1.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player list is empty, has blank or duplicate
    /// names, or the course card is malformed.
    pub fn new(players: Vec<String>, course: CourseInfo) -> Result<Self, AppError> {
        if players.is_empty() {
            return Err(AppError::Validation(
                "You must enter at least one player".into(),
            ));
        }
        for (i, player) in players.iter().enumerate() {
            if player.trim().is_empty() {
                return Err(AppError::Validation("player names cannot be blank".into()));
            }
            if players[..i].contains(player) {
                return Err(AppError::Validation(format!(
                    "player '{player}' was entered twice"
                )));
            }
        }
        course.validate()?;

        Ok(Self {
            players,
            course,
            holes: vec![Hole::new(1)],
            par_overrides: BTreeMap::new(),
            started_at: Utc::now(),
        })
    }
}
