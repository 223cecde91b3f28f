use super::messages::Message;
use crate::msg_error;
use anyhow::Result;
use tokio::task::JoinHandle;

/// A write running on the blocking pool.
///
/// Dropping the handle detaches the write; it still completes and any failure
/// is logged.
#[must_use = "await `wait` to observe the outcome, or drop to detach"]
pub struct PendingWrite<T> {
    handle: JoinHandle<Result<T>>,
}

impl<T: Send + 'static> PendingWrite<T> {
    /// Must be called from within a tokio runtime.
    pub(crate) fn spawn(write: impl FnOnce() -> Result<T> + Send + 'static) -> Self {
        let handle = tokio::task::spawn_blocking(move || {
            let outcome = write();
            if let Err(e) = &outcome {
                msg_error!(Message::WriteFailed(e.to_string()));
            }
            outcome
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the write and returns its result.
    pub async fn wait(self) -> Result<T> {
        self.handle.await?
    }
}
