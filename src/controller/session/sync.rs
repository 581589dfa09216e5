use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::model::{HoleSnapshot, SessionHandle};

/// Destination for per-hole pushes.
#[async_trait]
pub trait HolePublisher: Send + Sync {
    async fn publish_hole(
        &self,
        session: &SessionHandle,
        snapshot: &HoleSnapshot,
    ) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Delivered,
    Failed,
}

/// Pushes hole snapshots to the shared session after each stroke change.
///
/// Every push is its own spawned task: no retry, no queue, no ordering.
/// Two pushes for quick successive edits may finish in either order, so the
/// remote copy is only eventually consistent with the local round, once a
/// later push succeeds. The local round is never rolled back.
#[derive(Clone)]
pub struct SyncAdapter {
    publisher: Arc<dyn HolePublisher>,
    session: Arc<SessionHandle>,
}

impl SyncAdapter {
    #[must_use]
    pub fn new(publisher: Arc<dyn HolePublisher>, session: SessionHandle) -> Self {
        Self {
            publisher,
            session: Arc::new(session),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// Spawns the push and returns immediately. Dropping the handle is fine.
    pub fn dispatch(&self, snapshot: HoleSnapshot) -> JoinHandle<SyncOutcome> {
        let publisher = Arc::clone(&self.publisher);
        let session = Arc::clone(&self.session);
        tokio::spawn(async move { push_hole(publisher.as_ref(), &session, &snapshot).await })
    }
}

/// Runs one push to completion, logging instead of returning the error.
pub async fn push_hole(
    publisher: &dyn HolePublisher,
    session: &SessionHandle,
    snapshot: &HoleSnapshot,
) -> SyncOutcome {
    match publisher.publish_hole(session, snapshot).await {
        Ok(()) => {
            log::debug!(
                "synced hole {} ({} strokes) to session '{}'",
                snapshot.hole,
                snapshot.strokes.len(),
                session.name
            );
            SyncOutcome::Delivered
        }
        Err(e) => {
            log::error!("Failed to sync hole {} data: {e}", snapshot.hole);
            SyncOutcome::Failed
        }
    }
}
