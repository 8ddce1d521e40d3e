//! # Mock Framework
//!
//! Utilities for testing effect handlers in isolation.
//!
//! Use [`create_mock_commit`] to get a [`MockCommit`]: pass [`MockCommit::commit`] to
//! `EffectHandler::handle`, then assert on what was committed with [`expect_msg`] or
//! [`MockCommit::drain`].

use crate::framework::Commit;
use std::fmt::Debug;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long [`MockCommit::next`] waits for a message.
pub const MOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// A [`Commit`] backed by a receiver the test owns.
///
/// Keeps a strong sender alive, so committed messages are never dropped while the mock
/// exists.
pub struct MockCommit<M> {
    _sender: mpsc::Sender<M>,
    receiver: mpsc::Receiver<M>,
    commit: Commit<M>,
}

impl<M: Debug + Send> MockCommit<M> {
    pub fn commit(&self) -> &Commit<M> {
        &self.commit
    }

    /// Waits for the next committed message, `None` after [`MOCK_TIMEOUT`].
    pub async fn next(&mut self) -> Option<M> {
        tokio::time::timeout(MOCK_TIMEOUT, self.receiver.recv())
            .await
            .ok()
            .flatten()
    }

    /// Every message committed so far, without waiting.
    pub fn drain(&mut self) -> Vec<M> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        messages
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

/// Creates a commit handle and the mock that records its messages.
pub fn create_mock_commit<M: Debug + Send>(buffer_size: usize) -> MockCommit<M> {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let commit = Commit::new(&sender);
    MockCommit {
        _sender: sender,
        receiver,
        commit,
    }
}

/// Waits for the next committed message and panics when none arrives.
pub async fn expect_msg<M: Debug + Send>(mock: &mut MockCommit<M>) -> M {
    match mock.next().await {
        Some(msg) => msg,
        None => panic!("Expected a committed message, none arrived"),
    }
}

/// Receives the next value from a channel and panics when none arrives in time.
pub async fn expect_recv<T>(receiver: &mut mpsc::Receiver<T>) -> T {
    match tokio::time::timeout(MOCK_TIMEOUT, receiver.recv()).await {
        Ok(Some(value)) => value,
        Ok(None) => panic!("Channel closed before a value arrived"),
        Err(_) => panic!("Timed out waiting for a value"),
    }
}
