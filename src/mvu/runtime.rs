use tokio::task::JoinHandle;

use crate::controller::session::{SyncAdapter, SyncOutcome};
use crate::error::AppError;
use crate::mvu::game::{Effect, GameModel, Msg, update};

#[derive(Clone, Copy, Default)]
pub struct Deps<'a> {
    /// `None` keeps the round local only.
    pub sync: Option<&'a SyncAdapter>,
}

/// Runs one message through `update` and carries out its effects.
///
/// Sync effects are spawned and their handles returned without waiting on
/// them; callers are free to drop them. Must run inside a tokio runtime when
/// a sync adapter is configured.
///
/// # Errors
///
/// Returns the error recorded by `update` when the action was rejected.
pub fn dispatch(
    model: &mut GameModel,
    msg: Msg,
    deps: Deps<'_>,
) -> Result<Vec<JoinHandle<SyncOutcome>>, AppError> {
    let effects = update(model, msg);
    if let Some(e) = &model.error {
        return Err(e.clone());
    }

    let mut pending = Vec::new();
    for effect in effects {
        match effect {
            Effect::SyncHole(snapshot) => match deps.sync {
                Some(adapter) => pending.push(adapter.dispatch(snapshot)),
                None => log::debug!("no session configured; hole {} stays local", snapshot.hole),
            },
            Effect::GameOver => {
                log::info!(
                    "Game Over: {} holes scored at {}",
                    model.store.allocated_holes(),
                    model.store.course().name
                );
            }
        }
    }
    Ok(pending)
}

/// Waits for every spawned push. A task that panicked counts as failed.
pub async fn settle(pending: Vec<JoinHandle<SyncOutcome>>) -> Vec<SyncOutcome> {
    futures::future::join_all(pending)
        .await
        .into_iter()
        .map(|joined| match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("sync task did not finish: {e}");
                SyncOutcome::Failed
            }
        })
        .collect()
}
