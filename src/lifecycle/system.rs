use super::DeliveryConfig;
use crate::framework::{DispatchClient, Dispatcher, FrameworkError};
use crate::remote::RemoteService;
use crate::repository::Repositories;
use crate::root::{
    Msg, NavigateCommand, Notification, Notifier, RootEffectHandler, RootReducer, RootState,
};
use crate::store::{self, LocalStore};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runtime orchestrator: starts the store actor and the dispatcher and wires the
/// repositories, the notification channel and the navigation channel between them.
///
/// # Example
///
/// ```ignore
/// let mut system = DeliverySystem::new(&config, Arc::new(remote));
/// system.client.send(Msg::Navigate(NavigateCommand::ToCart)).await?;
/// let notification = system.notifications.recv().await;
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub client: DispatchClient<Msg, RootState>,
    pub notifications: mpsc::Receiver<Notification>,
    pub navigation: mpsc::Receiver<NavigateCommand>,
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Starts the system on an in-memory store.
    pub fn new(config: &DeliveryConfig, remote: Arc<dyn RemoteService>) -> Self {
        let (store_actor, store_client) = store::new(config.store_buffer);
        let store_handle = tokio::spawn(store_actor.run());

        let mut system = Self::with_store(config, Arc::new(store_client), remote);
        system.handles.push(store_handle);
        system
    }

    /// Starts the system on a caller-supplied store.
    pub fn with_store(
        config: &DeliveryConfig,
        store: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteService>,
    ) -> Self {
        let (notifier, notifications) = Notifier::channel(config.notification_buffer);
        let (navigation_sender, navigation) = mpsc::channel(config.navigation_buffer);

        let handler = RootEffectHandler::new(
            Repositories::new(store, remote),
            notifier,
            navigation_sender,
            config.search_debounce(),
        );
        let (dispatcher, client) =
            Dispatcher::<RootReducer, _>::new(config.message_buffer, RootReducer::init(), handler);
        let dispatcher_handle = tokio::spawn(dispatcher.run());

        info!(
            debounce_ms = config.search_debounce_ms,
            message_buffer = config.message_buffer,
            "Delivery system started"
        );

        Self {
            client,
            notifications,
            navigation,
            handles: vec![dispatcher_handle],
        }
    }

    /// Drops the client, which stops the dispatcher, whose exit releases the last store
    /// client. Waits for every task.
    ///
    /// Clones of the client held elsewhere keep the dispatcher alive; drop them first.
    pub async fn shutdown(self) -> Result<(), FrameworkError> {
        info!("Shutting down delivery system...");
        drop(self.client);
        drop(self.notifications);
        drop(self.navigation);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Task failed during shutdown");
                return Err(FrameworkError::TaskFailed(e.to_string()));
            }
        }

        info!("Delivery system shutdown complete.");
        Ok(())
    }
}
