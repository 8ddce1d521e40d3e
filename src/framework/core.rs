//! # Core Dataflow Framework
//!
//! Generic building blocks of the message → reduce → effect → message loop.
//!
//! ## Key Types
//!
//! - [`Reducer`]: pure state transition producing effect descriptions.
//! - [`EffectHandler`]: executes effect descriptions and commits follow-up messages.
//! - [`Commit`]: the handle effect handlers use to feed messages back into the loop.

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::mpsc;
use tracing::{debug, warn};

// =============================================================================
// 1. THE REDUCER
// =============================================================================

/// A pure, total transition function.
///
/// `reduce` performs no I/O and never panics. A message that has no meaning for the current
/// state returns the state unchanged with no effects.
pub trait Reducer {
    type State: Clone + Debug + Send + Sync + 'static;
    type Msg: Debug + Send + 'static;
    type Effect: Debug + Send + 'static;

    fn reduce(state: Self::State, msg: Self::Msg) -> (Self::State, Vec<Self::Effect>);
}

// =============================================================================
// 2. THE EFFECT HANDLER
// =============================================================================

/// Executes effects produced by a [`Reducer`].
///
/// The only place I/O happens. Results travel back into the loop as messages sent through
/// the [`Commit`]; state is never touched directly.
#[async_trait]
pub trait EffectHandler: Send + Sync + 'static {
    type Effect: Debug + Send + 'static;
    type Msg: Debug + Send + 'static;
    type Error: std::error::Error + Send + 'static;

    async fn handle(
        &self,
        effect: Self::Effect,
        commit: &Commit<Self::Msg>,
    ) -> Result<(), Self::Error>;

    /// Called by the dispatcher when `handle` fails. The default only logs.
    async fn on_error(&self, error: Self::Error) {
        warn!(error = %error, "Unhandled effect error");
    }
}

// =============================================================================
// 3. THE COMMIT HANDLE
// =============================================================================

/// Sends messages back to the dispatcher.
///
/// Holds a weak sender: it never keeps the dispatcher alive, and a message committed after
/// shutdown is dropped.
pub struct Commit<M> {
    sender: mpsc::WeakSender<M>,
}

impl<M> Clone for Commit<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M: Debug + Send> Commit<M> {
    pub fn new(sender: &mpsc::Sender<M>) -> Self {
        Self {
            sender: sender.downgrade(),
        }
    }

    pub fn from_weak(sender: mpsc::WeakSender<M>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, msg: M) {
        let Some(sender) = self.sender.upgrade() else {
            debug!(?msg, "Dispatcher gone, message dropped");
            return;
        };
        if let Err(mpsc::error::SendError(msg)) = sender.send(msg).await {
            debug!(?msg, "Dispatcher closed, message dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_commit_delivers_while_sender_alive() {
        let (sender, mut receiver) = mpsc::channel::<u32>(4);
        let commit = Commit::new(&sender);

        commit.send(7).await;
        assert_eq!(receiver.recv().await, Some(7));
    }

    #[tokio::test]
    async fn test_commit_after_shutdown_is_dropped() {
        let (sender, mut receiver) = mpsc::channel::<u32>(4);
        let commit = Commit::new(&sender);
        drop(sender);

        commit.send(7).await;
        assert_eq!(receiver.recv().await, None);
    }
}
