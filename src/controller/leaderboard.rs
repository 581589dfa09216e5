use serde::Serialize;
use std::collections::BTreeMap;

use super::store::ScoringStore;
use crate::model::{ScoreDisplay, ShotType};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HoleScore {
    pub hole: u8,
    pub par: i32,
    pub strokes: usize,
    /// `strokes - par` against the par in effect, for every allocated hole.
    pub to_par: i32,
}

impl HoleScore {
    #[must_use]
    pub fn display(&self) -> ScoreDisplay {
        ScoreDisplay::from_i32(self.to_par)
    }

    /// False while the player has no stroke on this hole yet.
    #[must_use]
    pub fn is_played(&self) -> bool {
        self.strokes > 0
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player: String,
    pub total_strokes: usize,
    pub total_to_par: i32,
    pub holes: Vec<HoleScore>,
    pub shot_types: BTreeMap<ShotType, usize>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Leaderboard {
    pub course_name: String,
    pub holes_started: u8,
    pub standings: Vec<PlayerStanding>,
}

/// Builds the leaderboard from the full round. Read-only; call it again for
/// every view.
///
/// A stroke shared by several players counts once for each of them, never
/// split. Shot type tallies read each player's tag copy; a Gimme or Water
/// Hazard has a single copy which every player on the stroke shares.
#[must_use]
pub fn build_leaderboard(store: &ScoringStore) -> Leaderboard {
    let mut standings: Vec<PlayerStanding> = store
        .players()
        .iter()
        .map(|player| standing_for(store, player))
        .collect();

    // stable: ties stay in entry order
    standings.sort_by_key(|s| s.total_strokes);

    Leaderboard {
        course_name: store.course().name.clone(),
        holes_started: store.allocated_holes(),
        standings,
    }
}

fn standing_for(store: &ScoringStore, player: &str) -> PlayerStanding {
    let mut shot_types: BTreeMap<ShotType, usize> = BTreeMap::new();
    let mut holes = Vec::with_capacity(store.holes().len());

    for hole in store.holes() {
        let par = store.par_for(hole.number);
        let strokes = hole.strokes_for_player(player);

        for tag in hole.strokes.iter().filter_map(|s| s.tag_for_player(player)) {
            *shot_types.entry(tag).or_insert(0) += 1;
        }

        holes.push(HoleScore {
            hole: hole.number,
            par,
            strokes,
            to_par: to_i32(strokes) - par,
        });
    }

    PlayerStanding {
        player: player.to_string(),
        total_strokes: holes.iter().map(|h| h.strokes).sum(),
        total_to_par: holes.iter().map(|h| h.to_par).sum(),
        holes,
        shot_types,
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}
