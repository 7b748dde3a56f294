//! Delete Flow
//!
//! Platform-free delete sequence for one task item. The browser pieces sit
//! behind three seams so the sequence runs the same in wasm and in tests:
//! the item being styled/removed, the server collaborator, and the timer.

use async_trait::async_trait;

use crate::config::DeleteConfig;
use crate::error::DeleteError;
use crate::models::{DeleteOutcome, DeleteResponse, PendingStyle, TaskId};

/// A rendered task entry
pub trait TaskItem {
    fn mark_pending(&self, style: &PendingStyle) -> Result<(), DeleteError>;
    fn remove(&self);
}

/// Server side of the delete
#[async_trait(?Send)]
pub trait TaskApi {
    async fn delete_task(&self, id: &TaskId) -> Result<DeleteResponse, DeleteError>;
}

#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, ms: u32);
}

/// An item that has been styled for deletion but not yet confirmed
#[derive(Debug)]
pub struct PendingDelete<I: TaskItem> {
    id: TaskId,
    item: I,
}

/// Apply the pending style right away. Nothing is awaited here, so the
/// style is on the item before the click handler returns.
pub fn begin<I: TaskItem>(id: TaskId, item: I, style: &PendingStyle) -> PendingDelete<I> {
    if let Err(e) = item.mark_pending(style) {
        log::warn!("could not style task {}: {}", id, e);
    }
    PendingDelete { id, item }
}

impl<I: TaskItem> PendingDelete<I> {
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Wait, send the delete, then remove or leave the item stuck.
    /// Consumes the pending value so removal happens at most once.
    pub async fn finish<A, D>(self, api: &A, delay: &D, config: &DeleteConfig) -> DeleteOutcome
    where
        A: TaskApi + ?Sized,
        D: Delay + ?Sized,
    {
        delay.wait(config.delay_ms).await;

        let result = match api.delete_task(&self.id).await {
            Ok(resp) if config.check_status && !resp.is_success() => {
                Err(DeleteError::Status(resp.status))
            }
            Ok(resp) => Ok(resp),
            Err(e) => Err(e),
        };

        match result {
            Ok(resp) => {
                log::debug!("task {} deleted (HTTP {})", self.id, resp.status);
                self.item.remove();
                DeleteOutcome::Removed
            }
            Err(e) => {
                log::error!("failed to delete task {}: {}", self.id, e);
                DeleteOutcome::Stuck(e)
            }
        }
    }
}
