//! # Task Scope
//!
//! A cancellable group of tasks. Work started through [`TaskScope::run`] is aborted by
//! [`TaskScope::cancel`], which may be called from any task.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

#[derive(Clone, Default)]
pub struct TaskScope {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
}

/// Aborts the inner task when the awaiting future is dropped.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// A task started by [`TaskScope::spawn`]. Dropping it aborts the task.
pub struct ScopedTask<T> {
    handle: JoinHandle<T>,
    guard: AbortOnDrop,
}

impl<T> ScopedTask<T> {
    /// Waits for the task. `None` means it was cancelled.
    pub async fn join(self) -> Option<T> {
        let Self { handle, guard: _guard } = self;
        match handle.await {
            Ok(output) => Some(output),
            Err(error) if error.is_cancelled() => None,
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `future` as a task of this scope and waits for it.
    ///
    /// Returns `None` when the scope was cancelled first. A panic inside the task is resumed
    /// in the caller.
    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.spawn(future).join().await
    }

    /// Starts `future` as a task of this scope without waiting. The task is registered before
    /// this returns, so a later [`TaskScope::cancel`] always reaches it.
    pub fn spawn<F>(&self, future: F) -> ScopedTask<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let mut handles = self.lock();
        handles.retain(|handle| !handle.is_finished());
        let handle = tokio::spawn(future);
        handles.push(handle.abort_handle());
        ScopedTask {
            guard: AbortOnDrop(handle.abort_handle()),
            handle,
        }
    }

    /// Aborts every task still running in this scope. Returns how many were aborted.
    pub fn cancel(&self) -> usize {
        let handles: Vec<_> = self.lock().drain(..).collect();
        let active = handles.iter().filter(|handle| !handle.is_finished()).count();
        for handle in handles {
            handle.abort();
        }
        if active > 0 {
            debug!(active, "Scope cancelled");
        }
        active
    }

    /// Number of tasks that have not finished yet.
    pub fn active(&self) -> usize {
        self.lock()
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AbortHandle>> {
        self.handles
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_returns_output() {
        let scope = TaskScope::new();
        assert_eq!(scope.run(async { 42 }).await, Some(42));
        assert_eq!(scope.active(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_aborts_pending_work() {
        let scope = TaskScope::new();
        let pending = tokio::spawn({
            let scope = scope.clone();
            async move {
                scope
                    .run(async {
                        tokio::time::sleep(Duration::from_secs(60)).await;
                        "done"
                    })
                    .await
            }
        });

        tokio::task::yield_now().await;
        assert_eq!(scope.active(), 1);
        assert_eq!(scope.cancel(), 1);
        assert_eq!(pending.await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_task_is_cancellable_before_it_is_polled() {
        let scope = TaskScope::new();
        let task = scope.spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "done"
        });

        assert_eq!(scope.cancel(), 1);
        assert_eq!(task.join().await, None);
    }

    #[tokio::test]
    async fn test_cancel_without_work_is_a_noop() {
        let scope = TaskScope::new();
        assert_eq!(scope.cancel(), 0);
        assert_eq!(scope.run(async { 1 }).await, Some(1));
    }
}
