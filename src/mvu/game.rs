use crate::controller::navigator::{HoleNavigator, Navigation};
use crate::controller::store::ScoringStore;
use crate::error::AppError;
use crate::model::{HoleSnapshot, Round, ShotType};

/// Everything the scorecard screen needs: the round, where the group is,
/// and the outcome of the last action.
#[derive(Debug, Clone)]
pub struct GameModel {
    pub store: ScoringStore,
    pub navigator: HoleNavigator,
    pub error: Option<AppError>,
    pub game_over: bool,
}

impl GameModel {
    /// # Errors
    ///
    /// Will return `Err` if hole 1 cannot be allocated.
    pub fn new(round: Round) -> Result<Self, AppError> {
        let mut store = ScoringStore::new(round);
        let navigator = HoleNavigator::new(&mut store)?;
        Ok(Self {
            store,
            navigator,
            error: None,
            game_over: false,
        })
    }

    #[must_use]
    pub fn current_hole(&self) -> u8 {
        self.navigator.current()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    AddStroke,
    RemoveStroke(usize),
    TogglePlayer { stroke: usize, player: String },
    SelectShotType { stroke: usize, shot: Option<ShotType> },
    NextHole,
    PreviousHole,
    BeginParEdit,
    EditPar(i32),
    SavePar,
    CancelParEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SyncHole(HoleSnapshot),
    GameOver,
}

/// Applies one user action. Stroke actions always target the hole on screen.
/// A failed action leaves the round untouched, is stored in `model.error`,
/// and yields no effects.
pub fn update(model: &mut GameModel, msg: Msg) -> Vec<Effect> {
    match apply(model, msg) {
        Ok(effects) => {
            model.error = None;
            effects
        }
        Err(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

fn apply(model: &mut GameModel, msg: Msg) -> Result<Vec<Effect>, AppError> {
    let hole = model.navigator.current();
    match msg {
        Msg::AddStroke => {
            model.store.add_stroke(hole)?;
            sync_current_hole(model)
        }
        Msg::RemoveStroke(stroke) => {
            model.store.remove_stroke(hole, stroke)?;
            sync_current_hole(model)
        }
        Msg::TogglePlayer { stroke, player } => {
            model.store.toggle_stroke_player(hole, stroke, &player)?;
            sync_current_hole(model)
        }
        Msg::SelectShotType { stroke, shot } => {
            model.store.set_shot_type(hole, stroke, shot)?;
            sync_current_hole(model)
        }
        Msg::NextHole => match model.navigator.next(&mut model.store)? {
            Navigation::GameOver => {
                model.game_over = true;
                Ok(vec![Effect::GameOver])
            }
            Navigation::Moved(_) | Navigation::Stayed(_) => {
                model.game_over = false;
                Ok(vec![])
            }
        },
        Msg::PreviousHole => {
            model.navigator.previous(&model.store);
            model.game_over = false;
            Ok(vec![])
        }
        Msg::BeginParEdit => {
            model.navigator.begin_par_edit();
            Ok(vec![])
        }
        Msg::EditPar(value) => {
            model.navigator.set_par_draft(value);
            Ok(vec![])
        }
        Msg::SavePar => {
            model.navigator.save_par(&mut model.store)?;
            Ok(vec![])
        }
        Msg::CancelParEdit => {
            model.navigator.cancel_par_edit(&model.store);
            Ok(vec![])
        }
    }
}

fn sync_current_hole(model: &GameModel) -> Result<Vec<Effect>, AppError> {
    let snapshot = model.store.hole_snapshot(model.navigator.current())?;
    Ok(vec![Effect::SyncHole(snapshot)])
}
