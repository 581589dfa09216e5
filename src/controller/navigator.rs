use serde::Serialize;

use super::store::ScoringStore;
use crate::error::AppError;
use crate::model::HOLE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Navigation {
    Moved(u8),
    Stayed(u8),
    /// `next` on the last hole. Nothing changes.
    GameOver,
}

/// Unsaved par edit for the hole on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParEditor {
    pub draft: i32,
    pub editing: bool,
}

#[derive(Debug, Clone)]
pub struct HoleNavigator {
    current: u8,
    par_editor: ParEditor,
}

impl HoleNavigator {
    /// Starts on hole 1 with storage for it allocated.
    ///
    /// # Errors
    ///
    /// Will return `Err` only if the store cannot allocate hole 1.
    pub fn new(store: &mut ScoringStore) -> Result<Self, AppError> {
        store.allocate_through(1)?;
        Ok(Self {
            current: 1,
            par_editor: ParEditor {
                draft: store.par_for(1),
                editing: false,
            },
        })
    }

    #[must_use]
    pub fn current(&self) -> u8 {
        self.current
    }

    #[must_use]
    pub fn par_editor(&self) -> ParEditor {
        self.par_editor
    }

    #[must_use]
    pub fn is_last_hole(&self) -> bool {
        self.current == HOLE_COUNT
    }

    /// # Errors
    ///
    /// Will return `Err` if storage for the next hole cannot be allocated.
    pub fn next(&mut self, store: &mut ScoringStore) -> Result<Navigation, AppError> {
        if self.current >= HOLE_COUNT {
            return Ok(Navigation::GameOver);
        }
        let target = self.current + 1;
        store.allocate_through(target)?;
        self.enter(target, store);
        Ok(Navigation::Moved(target))
    }

    pub fn previous(&mut self, store: &ScoringStore) -> Navigation {
        if self.current <= 1 {
            return Navigation::Stayed(self.current);
        }
        self.enter(self.current - 1, store);
        Navigation::Moved(self.current)
    }

    fn enter(&mut self, hole: u8, store: &ScoringStore) {
        self.current = hole;
        self.par_editor = ParEditor {
            draft: store.par_for(hole),
            editing: false,
        };
    }

    pub fn begin_par_edit(&mut self) {
        self.par_editor.editing = true;
    }

    pub fn set_par_draft(&mut self, value: i32) {
        self.par_editor.draft = value;
    }

    pub fn cancel_par_edit(&mut self, store: &ScoringStore) {
        self.par_editor = ParEditor {
            draft: store.par_for(self.current),
            editing: false,
        };
    }

    /// Writes the draft as the current hole's par override.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the store rejects the hole number.
    pub fn save_par(&mut self, store: &mut ScoringStore) -> Result<i32, AppError> {
        let value = self.par_editor.draft;
        store.set_par_override(self.current, value)?;
        self.par_editor.editing = false;
        Ok(value)
    }
}
