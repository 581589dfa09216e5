use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShotType {
    Drive,
    #[serde(rename = "Par 3")]
    Par3,
    Hybrid,
    Iron,
    Approach,
    Chip,
    Putt,
    Gimme,
    #[serde(rename = "Water Hazard")]
    WaterHazard,
}

impl ShotType {
    /// Every shot type in the order the scorecard offers them.
    pub const ALL: [ShotType; 9] = [
        ShotType::Drive,
        ShotType::Par3,
        ShotType::Hybrid,
        ShotType::Iron,
        ShotType::Approach,
        ShotType::Chip,
        ShotType::Putt,
        ShotType::Gimme,
        ShotType::WaterHazard,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShotType::Drive => "Drive",
            ShotType::Par3 => "Par 3",
            ShotType::Hybrid => "Hybrid",
            ShotType::Iron => "Iron",
            ShotType::Approach => "Approach",
            ShotType::Chip => "Chip",
            ShotType::Putt => "Putt",
            ShotType::Gimme => "Gimme",
            ShotType::WaterHazard => "Water Hazard",
        }
    }

    /// Gimme and Water Hazard are recorded once per stroke, not once per player.
    #[must_use]
    pub fn is_whole_stroke(self) -> bool {
        matches!(self, ShotType::Gimme | ShotType::WaterHazard)
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShotType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShotType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::Validation(format!("unknown shot type '{trimmed}'")))
    }
}
