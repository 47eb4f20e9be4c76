//! In-process registry endpoint
//!
//! Used when the registry lives in the same process as the phone. Delivery is
//! a non-blocking send on a bounded channel: a full or closed channel is a
//! failed delivery, never a wait.

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{RegistryNotification, TelephonyRegistry};
use crate::config::NotifierConfig;
use crate::error::{RegistryError, RegistryResult};

/// Registry endpoint backed by a tokio mpsc channel
#[derive(Debug, Clone)]
pub struct ChannelRegistry {
    tx: mpsc::Sender<RegistryNotification>,
}

impl ChannelRegistry {
    /// Create an endpoint and the receiver the registry reads from
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<RegistryNotification>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Create an endpoint sized by `registry.channel_capacity`
    pub fn from_config(config: &NotifierConfig) -> (Self, mpsc::Receiver<RegistryNotification>) {
        Self::new(config.registry.channel_capacity)
    }
}

#[async_trait]
impl TelephonyRegistry for ChannelRegistry {
    async fn deliver(&self, notification: RegistryNotification) -> RegistryResult<()> {
        self.tx.try_send(notification).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => RegistryError::Full,
            mpsc::error::TrySendError::Closed(_) => RegistryError::Closed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_delivers_in_order() {
        let (registry, mut rx) = ChannelRegistry::new(4);

        registry.notify_data_activity(3).await.unwrap();
        registry.notify_otasp_changed(2).await.unwrap();

        assert_eq!(rx.recv().await, Some(RegistryNotification::DataActivity { activity: 3 }));
        assert_eq!(rx.recv().await, Some(RegistryNotification::OtaspChanged { otasp_mode: 2 }));
    }

    #[tokio::test]
    async fn test_full_channel_fails_without_blocking() {
        let (registry, _rx) = ChannelRegistry::new(1);

        registry.notify_message_waiting_changed(true).await.unwrap();
        let result = registry.notify_message_waiting_changed(false).await;
        assert!(matches!(result, Err(RegistryError::Full)));
    }

    #[tokio::test]
    async fn test_capacity_from_config() {
        let config = NotifierConfig::new().with_channel_capacity(1);
        let (registry, mut rx) = ChannelRegistry::from_config(&config);

        registry.notify_data_activity(1).await.unwrap();
        let result = registry.notify_data_activity(2).await;
        assert!(matches!(result, Err(RegistryError::Full)));

        assert_eq!(rx.recv().await, Some(RegistryNotification::DataActivity { activity: 1 }));
    }

    #[tokio::test]
    async fn test_closed_channel() {
        let (registry, rx) = ChannelRegistry::new(1);
        drop(rx);

        let result = registry.notify_disconnect_cause(16, 0).await;
        assert!(matches!(result, Err(RegistryError::Closed)));
    }
}
