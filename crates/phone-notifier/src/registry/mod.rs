//! Registry endpoint abstraction
//!
//! The telephony registry is the single sink that fans phone state out to
//! subscribers. This module defines the calls it accepts and the message form
//! those calls take when they leave the process.
//!
//! A transport only has to implement [`TelephonyRegistry::deliver`]; the
//! per-category methods package their arguments into a
//! [`RegistryNotification`] and hand it over. Transports that need a different
//! shape for a category can override that one method.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;
use crate::types::{CellInfo, CellLocationBundle, DataConnectionInfo, ServiceState, SignalStrength};

pub mod channel;
pub mod remote;

pub use channel::ChannelRegistry;
pub use remote::{RemoteRegistry, WireNotification};

/// A single notification as it crosses the registry boundary.
///
/// All state values are already in their public encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryNotification {
    CallState {
        state: i32,
        incoming_number: String,
    },
    ServiceState {
        state: ServiceState,
    },
    SignalStrength {
        strength: SignalStrength,
    },
    MessageWaitingChanged {
        waiting: bool,
    },
    CallForwardingChanged {
        forwarding: bool,
    },
    DataActivity {
        activity: i32,
    },
    DataConnection {
        info: DataConnectionInfo,
    },
    DataConnectionFailed {
        reason: String,
        apn_type: String,
    },
    CellLocation {
        location: CellLocationBundle,
    },
    CellInfo {
        cells: Vec<CellInfo>,
    },
    OtaspChanged {
        otasp_mode: i32,
    },
    PreciseCallState {
        ringing: i32,
        foreground: i32,
        background: i32,
    },
    DisconnectCause {
        cause: i32,
        precise_cause: i32,
    },
    PreciseDataConnectionFailed {
        reason: String,
        apn_type: String,
        apn: String,
        fail_cause: String,
    },
}

impl RegistryNotification {
    /// Registry method name for this notification
    pub fn method(&self) -> &'static str {
        match self {
            RegistryNotification::CallState { .. } => "call_state",
            RegistryNotification::ServiceState { .. } => "service_state",
            RegistryNotification::SignalStrength { .. } => "signal_strength",
            RegistryNotification::MessageWaitingChanged { .. } => "message_waiting_changed",
            RegistryNotification::CallForwardingChanged { .. } => "call_forwarding_changed",
            RegistryNotification::DataActivity { .. } => "data_activity",
            RegistryNotification::DataConnection { .. } => "data_connection",
            RegistryNotification::DataConnectionFailed { .. } => "data_connection_failed",
            RegistryNotification::CellLocation { .. } => "cell_location",
            RegistryNotification::CellInfo { .. } => "cell_info",
            RegistryNotification::OtaspChanged { .. } => "otasp_changed",
            RegistryNotification::PreciseCallState { .. } => "precise_call_state",
            RegistryNotification::DisconnectCause { .. } => "disconnect_cause",
            RegistryNotification::PreciseDataConnectionFailed { .. } => {
                "precise_data_connection_failed"
            }
        }
    }
}

/// One-way calls accepted by the telephony registry.
///
/// Implementations must be safe to share between tasks. A returned `Ok` means
/// the call was issued, not that the registry acted on it.
#[async_trait]
pub trait TelephonyRegistry: Send + Sync {
    /// Hand a notification to the transport
    async fn deliver(&self, notification: RegistryNotification) -> RegistryResult<()>;

    async fn notify_call_state(&self, state: i32, incoming_number: &str) -> RegistryResult<()> {
        self.deliver(RegistryNotification::CallState {
            state,
            incoming_number: incoming_number.to_string(),
        })
        .await
    }

    async fn notify_service_state(&self, state: &ServiceState) -> RegistryResult<()> {
        self.deliver(RegistryNotification::ServiceState {
            state: state.clone(),
        })
        .await
    }

    async fn notify_signal_strength(&self, strength: &SignalStrength) -> RegistryResult<()> {
        self.deliver(RegistryNotification::SignalStrength {
            strength: strength.clone(),
        })
        .await
    }

    async fn notify_message_waiting_changed(&self, waiting: bool) -> RegistryResult<()> {
        self.deliver(RegistryNotification::MessageWaitingChanged { waiting })
            .await
    }

    async fn notify_call_forwarding_changed(&self, forwarding: bool) -> RegistryResult<()> {
        self.deliver(RegistryNotification::CallForwardingChanged { forwarding })
            .await
    }

    async fn notify_data_activity(&self, activity: i32) -> RegistryResult<()> {
        self.deliver(RegistryNotification::DataActivity { activity })
            .await
    }

    async fn notify_data_connection(&self, info: &DataConnectionInfo) -> RegistryResult<()> {
        self.deliver(RegistryNotification::DataConnection { info: info.clone() })
            .await
    }

    async fn notify_data_connection_failed(&self, reason: &str, apn_type: &str) -> RegistryResult<()> {
        self.deliver(RegistryNotification::DataConnectionFailed {
            reason: reason.to_string(),
            apn_type: apn_type.to_string(),
        })
        .await
    }

    async fn notify_cell_location(&self, location: &CellLocationBundle) -> RegistryResult<()> {
        self.deliver(RegistryNotification::CellLocation {
            location: location.clone(),
        })
        .await
    }

    async fn notify_cell_info(&self, cells: &[CellInfo]) -> RegistryResult<()> {
        self.deliver(RegistryNotification::CellInfo {
            cells: cells.to_vec(),
        })
        .await
    }

    async fn notify_otasp_changed(&self, otasp_mode: i32) -> RegistryResult<()> {
        self.deliver(RegistryNotification::OtaspChanged { otasp_mode })
            .await
    }

    async fn notify_precise_call_state(
        &self,
        ringing: i32,
        foreground: i32,
        background: i32,
    ) -> RegistryResult<()> {
        self.deliver(RegistryNotification::PreciseCallState {
            ringing,
            foreground,
            background,
        })
        .await
    }

    async fn notify_disconnect_cause(&self, cause: i32, precise_cause: i32) -> RegistryResult<()> {
        self.deliver(RegistryNotification::DisconnectCause {
            cause,
            precise_cause,
        })
        .await
    }

    async fn notify_precise_data_connection_failed(
        &self,
        reason: &str,
        apn_type: &str,
        apn: &str,
        fail_cause: &str,
    ) -> RegistryResult<()> {
        self.deliver(RegistryNotification::PreciseDataConnectionFailed {
            reason: reason.to_string(),
            apn_type: apn_type.to_string(),
            apn: apn.to_string(),
            fail_cause: fail_cause.to_string(),
        })
        .await
    }
}
