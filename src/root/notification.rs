//! User-facing notifications and the channel that carries them.

use super::Msg;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Text(String),
    Error(String),
    /// A message with a button; pressing it dispatches `action`.
    Action {
        message: String,
        label: String,
        action: Msg,
    },
}

/// Sending half of the notification channel.
///
/// Never waits: a full channel drops the notification with a warning and a closed one
/// drops it silently.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: mpsc::Sender<Notification>,
}

impl Notifier {
    pub fn new(sender: mpsc::Sender<Notification>) -> Self {
        Self { sender }
    }

    /// Creates a notifier and the receiver the UI reads from.
    pub fn channel(buffer_size: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self::new(sender), receiver)
    }

    pub fn text(&self, message: impl Into<String>) {
        self.publish(Notification::Text(message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(Notification::Error(message.into()));
    }

    pub fn action(&self, message: impl Into<String>, label: impl Into<String>, action: Msg) {
        self.publish(Notification::Action {
            message: message.into(),
            label: label.into(),
            action,
        });
    }

    fn publish(&self, notification: Notification) {
        match self.sender.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(notification)) => {
                warn!(?notification, "Notification channel full, dropped");
            }
            Err(TrySendError::Closed(notification)) => {
                debug!(?notification, "Notification receiver gone, dropped");
            }
        }
    }
}
