use serde::{Deserialize, Serialize};

use super::shot::ShotType;
use super::stroke::Stroke;

pub const HOLE_COUNT: u8 = 18;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    pub strokes: Vec<Stroke>,
}

impl Hole {
    #[must_use]
    pub fn new(number: u8) -> Self {
        Self {
            number,
            strokes: Vec::new(),
        }
    }

    #[must_use]
    pub fn strokes_for_player(&self, player: &str) -> usize {
        self.strokes.iter().filter(|s| s.has_player(player)).count()
    }

    #[must_use]
    pub fn snapshot(&self) -> HoleSnapshot {
        HoleSnapshot {
            hole: self.number,
            strokes: self.strokes.iter().map(|s| s.players.clone()).collect(),
            shot_types: self.strokes.iter().map(Stroke::shot_type_tags).collect(),
        }
    }
}

/// Wire form of one hole, as pushed to the remote session. `strokes` and
/// `shot_types` are index-aligned: entry i of each describes stroke i.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleSnapshot {
    pub hole: u8,
    pub strokes: Vec<Vec<String>>,
    pub shot_types: Vec<Vec<ShotType>>,
}
