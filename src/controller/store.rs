use crate::error::AppError;
use crate::model::{CourseInfo, HOLE_COUNT, Hole, HoleSnapshot, Round, ShotType, Stroke};

/// Owns the round being scored. Every mutation of strokes, shot types and par
/// goes through here; nothing else holds a mutable reference to the round.
#[derive(Debug, Clone)]
pub struct ScoringStore {
    round: Round,
}

impl ScoringStore {
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self { round }
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub fn players(&self) -> &[String] {
        &self.round.players
    }

    #[must_use]
    pub fn course(&self) -> &CourseInfo {
        &self.round.course
    }

    /// Allocated holes in order, hole 1 first.
    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.round.holes
    }

    #[must_use]
    pub fn allocated_holes(&self) -> u8 {
        // never more than HOLE_COUNT entries
        u8::try_from(self.round.holes.len()).unwrap_or(HOLE_COUNT)
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole is outside 1..=18 or has not been visited.
    pub fn hole(&self, hole: u8) -> Result<&Hole, AppError> {
        check_hole_number(hole)?;
        self.round
            .holes
            .get(usize::from(hole - 1))
            .ok_or_else(|| AppError::Index(format!("hole {hole} has not been started")))
    }

    fn hole_mut(&mut self, hole: u8) -> Result<&mut Hole, AppError> {
        check_hole_number(hole)?;
        self.round
            .holes
            .get_mut(usize::from(hole - 1))
            .ok_or_else(|| AppError::Index(format!("hole {hole} has not been started")))
    }

    fn stroke_mut(&mut self, hole: u8, index: usize) -> Result<&mut Stroke, AppError> {
        let h = self.hole_mut(hole)?;
        let len = h.strokes.len();
        h.strokes.get_mut(index).ok_or_else(|| {
            AppError::Index(format!(
                "stroke {index} does not exist on hole {hole} ({len} recorded)"
            ))
        })
    }

    /// Makes sure holes 1..=`hole` have storage. Holes already present are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the hole is outside 1..=18.
    pub fn allocate_through(&mut self, hole: u8) -> Result<(), AppError> {
        check_hole_number(hole)?;
        while self.round.holes.len() < usize::from(hole) {
            let next = self.allocated_holes() + 1;
            self.round.holes.push(Hole::new(next));
        }
        Ok(())
    }

    /// Appends an empty stroke and returns its index.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the hole has not been started.
    pub fn add_stroke(&mut self, hole: u8) -> Result<usize, AppError> {
        let h = self.hole_mut(hole)?;
        h.strokes.push(Stroke::new());
        Ok(h.strokes.len() - 1)
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole has not been started or `index` is past
    /// the last stroke.
    pub fn remove_stroke(&mut self, hole: u8, index: usize) -> Result<Stroke, AppError> {
        let h = self.hole_mut(hole)?;
        if index >= h.strokes.len() {
            return Err(AppError::Index(format!(
                "cannot remove stroke {index} from hole {hole} ({} recorded)",
                h.strokes.len()
            )));
        }
        Ok(h.strokes.remove(index))
    }

    /// Attaches or detaches a player. Returns whether the player is attached
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the player is not in the round or the stroke does
    /// not exist.
    pub fn toggle_stroke_player(
        &mut self,
        hole: u8,
        index: usize,
        player: &str,
    ) -> Result<bool, AppError> {
        if !self.round.players.iter().any(|p| p == player) {
            return Err(AppError::Validation(format!(
                "'{player}' is not playing this round"
            )));
        }
        Ok(self.stroke_mut(hole, index)?.toggle_player(player))
    }

    /// Sets or clears the shot type. Tag copies are derived from the stroke's
    /// players, see [`Stroke::shot_type_tags`].
    ///
    /// # Errors
    ///
    /// Will return `Err` if the stroke does not exist.
    pub fn set_shot_type(
        &mut self,
        hole: u8,
        index: usize,
        shot_type: Option<ShotType>,
    ) -> Result<(), AppError> {
        self.stroke_mut(hole, index)?.shot_type = shot_type;
        Ok(())
    }

    /// Any value is accepted; the hole does not need to be visited yet.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the hole is outside 1..=18.
    pub fn set_par_override(&mut self, hole: u8, value: i32) -> Result<(), AppError> {
        check_hole_number(hole)?;
        self.round.par_overrides.insert(hole, value);
        Ok(())
    }

    /// Par in effect for a hole: the local override if one was saved,
    /// otherwise the course card.
    #[must_use]
    pub fn par_for(&self, hole: u8) -> i32 {
        self.round
            .par_overrides
            .get(&hole)
            .copied()
            .unwrap_or_else(|| self.round.course.par_for(hole))
    }

    /// Strokes on one hole that include `player`. Unvisited holes count zero.
    #[must_use]
    pub fn strokes_for_player_on_hole(&self, hole: u8, player: &str) -> usize {
        self.hole(hole)
            .map(|h| h.strokes_for_player(player))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total_strokes_for_player(&self, player: &str) -> usize {
        self.round
            .holes
            .iter()
            .map(|h| h.strokes_for_player(player))
            .sum()
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole has not been started.
    pub fn hole_snapshot(&self, hole: u8) -> Result<HoleSnapshot, AppError> {
        Ok(self.hole(hole)?.snapshot())
    }
}

fn check_hole_number(hole: u8) -> Result<(), AppError> {
    if (1..=HOLE_COUNT).contains(&hole) {
        Ok(())
    } else {
        Err(AppError::Index(format!(
            "hole {hole} is outside 1..={HOLE_COUNT}"
        )))
    }
}
