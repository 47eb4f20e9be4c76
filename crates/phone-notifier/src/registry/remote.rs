//! Network registry endpoint
//!
//! Sends each notification as one JSON object per line over a short-lived TCP
//! connection. Nothing is read back: the registry's acknowledgement, if it
//! sends one, is ignored. Connect and write together are bounded by the call
//! timeout.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::trace;

use super::{RegistryNotification, TelephonyRegistry};
use crate::config::NotifierConfig;
use crate::error::{RegistryError, RegistryResult};

/// Default bound on a single registry call
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(500);

/// Wire envelope for a notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireNotification {
    /// Registry method name
    pub method: String,
    /// Service that produced the notification
    pub source: String,
    /// Unix millis at encode time
    pub timestamp: i64,
    pub correlation_id: String,
    pub payload: RegistryNotification,
}

impl WireNotification {
    pub fn new(source: impl Into<String>, payload: RegistryNotification) -> Self {
        Self {
            method: payload.method().to_string(),
            source: source.into(),
            timestamp: Utc::now().timestamp_millis(),
            correlation_id: uuid::Uuid::new_v4().to_string(),
            payload,
        }
    }

    /// Encode as a single newline-terminated JSON line
    pub fn encode(&self) -> RegistryResult<Vec<u8>> {
        let mut frame = serde_json::to_vec(self)?;
        frame.push(b'\n');
        Ok(frame)
    }

    /// Decode one line produced by [`WireNotification::encode`]
    pub fn decode(line: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(line.trim_end())?)
    }
}

/// Registry endpoint reached over TCP
#[derive(Debug, Clone)]
pub struct RemoteRegistry {
    address: String,
    source: String,
    call_timeout: Duration,
}

impl RemoteRegistry {
    /// Create an endpoint for the registry at `address` (`host:port`)
    pub fn new(address: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            source: source.into(),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn from_config(config: &NotifierConfig) -> Self {
        Self::new(config.registry.address.clone(), config.service_name.clone())
            .with_call_timeout(config.registry.call_timeout())
    }

    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn call_timeout(&self) -> Duration {
        self.call_timeout
    }

    /// Call timeout in whole milliseconds, saturating at `u64::MAX`
    fn call_timeout_millis(&self) -> u64 {
        u64::try_from(self.call_timeout.as_millis()).unwrap_or(u64::MAX)
    }

    async fn send_frame(&self, frame: &[u8]) -> RegistryResult<()> {
        let mut stream = TcpStream::connect(self.address.as_str())
            .await
            .map_err(|source| RegistryError::Unreachable {
                address: self.address.clone(),
                source,
            })?;

        stream.write_all(frame).await?;
        stream.shutdown().await?;
        Ok(())
    }
}

#[async_trait]
impl TelephonyRegistry for RemoteRegistry {
    async fn deliver(&self, notification: RegistryNotification) -> RegistryResult<()> {
        let envelope = WireNotification::new(self.source.as_str(), notification);
        let frame = envelope.encode()?;

        trace!(
            method = %envelope.method,
            correlation_id = %envelope.correlation_id,
            address = %self.address,
            "Sending registry notification"
        );

        match tokio::time::timeout(self.call_timeout, self.send_frame(&frame)).await {
            Ok(result) => result,
            Err(_) => Err(RegistryError::Timeout {
                millis: self.call_timeout_millis(),
            }),
        }
    }
}
