pub mod decode;
pub mod http_handlers;

pub use decode::*;
pub use http_handlers::*;

use tokio::sync::RwLock;

use super::session::SyncAdapter;
use crate::mvu::game::GameModel;

/// Shared by every request. The write lock is held for the whole of an
/// action, so actions apply one at a time.
pub struct AppState {
    pub game: RwLock<GameModel>,
    pub sync: Option<SyncAdapter>,
}

impl AppState {
    #[must_use]
    pub fn new(game: GameModel, sync: Option<SyncAdapter>) -> Self {
        Self {
            game: RwLock::new(game),
            sync,
        }
    }
}
