//! # Dispatcher
//!
//! The single owner of application state.
//!
//! **Concurrency Model**:
//! One task receives messages from a bounded channel and reduces them one at a time. The new
//! state is published on a watch channel before anything else happens, then each effect is
//! spawned into a `JoinSet` so effects run concurrently with later reductions. Failures and
//! panics of an effect stay inside its own task.
//!
//! Dropping every [`DispatchClient`] closes the channel. The loop then aborts effects still
//! in flight and exits.

use super::{Commit, EffectHandler, FrameworkError, Reducer};
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

pub struct Dispatcher<R: Reducer, H> {
    receiver: mpsc::Receiver<R::Msg>,
    commit: Commit<R::Msg>,
    state: watch::Sender<R::State>,
    handler: Arc<H>,
    startup_effects: Vec<R::Effect>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R, H> Dispatcher<R, H>
where
    R: Reducer,
    H: EffectHandler<Effect = R::Effect, Msg = R::Msg>,
{
    /// Creates a dispatcher starting from `init` and the client that feeds it.
    ///
    /// The effects of `init` are spawned as soon as [`run`](Self::run) starts.
    pub fn new(
        buffer_size: usize,
        init: (R::State, Vec<R::Effect>),
        handler: H,
    ) -> (Self, DispatchClient<R::Msg, R::State>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (initial_state, startup_effects) = init;
        let (state, state_receiver) = watch::channel(initial_state);
        let dispatcher = Self {
            receiver,
            commit: Commit::new(&sender),
            state,
            handler: Arc::new(handler),
            startup_effects,
            _reducer: PhantomData,
        };
        let client = DispatchClient {
            sender,
            state: state_receiver,
        };
        (dispatcher, client)
    }

    pub async fn run(mut self) {
        let reducer = std::any::type_name::<R>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(reducer, "Dispatcher started");

        let mut effects = JoinSet::new();
        for effect in std::mem::take(&mut self.startup_effects) {
            self.spawn_effect(&mut effects, effect);
        }

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    debug!(reducer, ?msg, "Reduce");
                    let current = self.state.borrow().clone();
                    let (next, produced) = R::reduce(current, msg);
                    self.state.send_replace(next);
                    for effect in produced {
                        self.spawn_effect(&mut effects, effect);
                    }
                }
                Some(joined) = effects.join_next(), if !effects.is_empty() => {
                    if let Err(join_error) = joined {
                        if join_error.is_panic() {
                            error!(reducer, error = %join_error, "Effect panicked");
                        }
                    }
                }
            }
        }

        let aborted = effects.len();
        effects.shutdown().await;
        info!(reducer, aborted, "Dispatcher shutdown");
    }

    fn spawn_effect(&self, effects: &mut JoinSet<()>, effect: R::Effect) {
        debug!(?effect, "Spawn effect");
        let handler = self.handler.clone();
        let commit = self.commit.clone();
        effects.spawn(async move {
            if let Err(error) = handler.handle(effect, &commit).await {
                warn!(error = ?error, "Effect failed");
                handler.on_error(error).await;
            }
        });
    }
}

/// Cloneable handle for sending messages and observing state.
pub struct DispatchClient<M, S> {
    sender: mpsc::Sender<M>,
    state: watch::Receiver<S>,
}

impl<M, S> Clone for DispatchClient<M, S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            state: self.state.clone(),
        }
    }
}

impl<M, S: Clone> DispatchClient<M, S> {
    pub async fn send(&self, msg: M) -> Result<(), FrameworkError> {
        self.sender
            .send(msg)
            .await
            .map_err(|_| FrameworkError::DispatcherClosed)
    }

    /// Latest published state.
    pub fn state(&self) -> S {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.state.clone()
    }

    /// Waits until the published state satisfies `predicate` and returns it.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&S) -> bool,
    ) -> Result<S, FrameworkError> {
        let mut receiver = self.state.clone();
        let state = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| FrameworkError::DispatcherClosed)?;
        Ok(state.clone())
    }
}
