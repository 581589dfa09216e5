use serde::{Deserialize, Serialize};

use super::shot::ShotType;

/// One recorded shot. A stroke can belong to several players at once
/// (a shared drive in a scramble, a conceded gimme).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stroke {
    pub players: Vec<String>,
    pub shot_type: Option<ShotType>,
}

impl Stroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_player(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Adds the player if absent, removes it if present. Returns whether the
    /// player is attached afterwards. Insertion order is kept for display.
    pub fn toggle_player(&mut self, player: &str) -> bool {
        if let Some(pos) = self.players.iter().position(|p| p == player) {
            self.players.remove(pos);
            false
        } else {
            self.players.push(player.to_string());
            true
        }
    }

    /// Tag copies as they are stored remotely and counted on the leaderboard:
    /// a single tag for whole-stroke types, otherwise one per attached player.
    /// Always follows the players attached now, not those attached when the
    /// shot type was chosen.
    #[must_use]
    pub fn shot_type_tags(&self) -> Vec<ShotType> {
        match self.shot_type {
            None => Vec::new(),
            Some(t) if t.is_whole_stroke() => vec![t],
            Some(t) => vec![t; self.players.len()],
        }
    }

    /// The tag copy belonging to `player`, if the player is on this stroke.
    #[must_use]
    pub fn tag_for_player(&self, player: &str) -> Option<ShotType> {
        let pos = self.players.iter().position(|p| p == player)?;
        let tags = self.shot_type_tags();
        match self.shot_type {
            Some(t) if t.is_whole_stroke() => tags.first().copied(),
            _ => tags.get(pos).copied(),
        }
    }
}
