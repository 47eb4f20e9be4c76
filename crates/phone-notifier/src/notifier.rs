//! Phone state notification dispatch
//!
//! The phone state machine calls into a [`PhoneNotifier`] whenever something it
//! tracks changes. [`NotificationDispatcher`] reads the current values back out
//! of the [`Phone`], converts internal state into public values and makes one
//! call to the [`TelephonyRegistry`].
//!
//! Delivery is best effort. A failed registry call is dropped at the dispatch
//! boundary and the triggering caller never hears about it: no retry, no
//! buffering. Calls made concurrently from different tasks may reach the
//! registry in any order, so callers that need ordered delivery must serialise
//! their own calls.
//!
//! ```rust
//! use rvoip_phone_notifier::{ChannelRegistry, NotificationDispatcher, PhoneNotifier, RegistryNotification};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (registry, mut rx) = ChannelRegistry::new(16);
//! let notifier = NotificationDispatcher::new(Arc::new(registry));
//!
//! notifier.notify_disconnect_cause(16, 0).await;
//!
//! assert_eq!(
//!     rx.recv().await,
//!     Some(RegistryNotification::DisconnectCause { cause: 16, precise_cause: 0 })
//! );
//! # }
//! ```

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::constants::NETWORK_TYPE_UNKNOWN;
use crate::convert::{
    call_state_to_public, data_activity_to_public, data_state_to_public, precise_call_state_to_public,
};
use crate::error::RegistryResult;
use crate::phone::Phone;
use crate::registry::TelephonyRegistry;
use crate::state::DataConnectionState;
use crate::types::{CellInfo, CellLocationBundle, DataConnectionInfo, ServiceState};

/// Receiver of phone state changes.
///
/// Every method returns once the notification has been issued or dropped;
/// none of them report failure.
#[async_trait]
pub trait PhoneNotifier: Send + Sync {
    /// Device call state changed
    async fn notify_phone_state(&self, sender: &dyn Phone);

    async fn notify_service_state(&self, sender: &dyn Phone);

    async fn notify_signal_strength(&self, sender: &dyn Phone);

    async fn notify_message_waiting_changed(&self, sender: &dyn Phone);

    async fn notify_call_forwarding_changed(&self, sender: &dyn Phone);

    async fn notify_data_activity(&self, sender: &dyn Phone);

    /// Data connection for `apn_type` moved to `state`
    async fn notify_data_connection(
        &self,
        sender: &dyn Phone,
        reason: &str,
        apn_type: &str,
        state: DataConnectionState,
    );

    async fn notify_data_connection_failed(&self, sender: &dyn Phone, reason: &str, apn_type: &str);

    async fn notify_cell_location(&self, sender: &dyn Phone);

    async fn notify_cell_info(&self, sender: &dyn Phone, cell_info: &[CellInfo]);

    async fn notify_otasp_changed(&self, sender: &dyn Phone, otasp_mode: i32);

    /// State of the ringing, foreground or background call leg changed
    async fn notify_precise_call_state(&self, sender: &dyn Phone);

    async fn notify_disconnect_cause(&self, cause: i32, precise_cause: i32);

    async fn notify_precise_data_connection_failed(
        &self,
        sender: &dyn Phone,
        reason: &str,
        apn_type: &str,
        apn: &str,
        fail_cause: &str,
    );
}

/// [`PhoneNotifier`] that forwards to a telephony registry
#[derive(Clone)]
pub struct NotificationDispatcher {
    registry: Arc<dyn TelephonyRegistry>,
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    /// Create a dispatcher bound to `registry` for its whole lifetime
    pub fn new(registry: Arc<dyn TelephonyRegistry>) -> Self {
        Self { registry }
    }

    /// Single point where delivery failures are dropped
    fn discard(method: &'static str, outcome: RegistryResult<()>) {
        match outcome {
            Ok(()) => trace!(method, "Registry notified"),
            Err(error) => debug!(method, %error, "Registry notification dropped"),
        }
    }
}

#[async_trait]
impl PhoneNotifier for NotificationDispatcher {
    async fn notify_phone_state(&self, sender: &dyn Phone) {
        let incoming_number = sender
            .ringing_call()
            .and_then(|call| call.earliest_connection().map(|c| c.address.clone()))
            .unwrap_or_default();

        let outcome = self
            .registry
            .notify_call_state(call_state_to_public(sender.state()), &incoming_number)
            .await;
        Self::discard("call_state", outcome);
    }

    async fn notify_service_state(&self, sender: &dyn Phone) {
        let service_state = sender.service_state().unwrap_or_else(ServiceState::out_of_service);

        let outcome = self.registry.notify_service_state(&service_state).await;
        Self::discard("service_state", outcome);
    }

    async fn notify_signal_strength(&self, sender: &dyn Phone) {
        let strength = sender.signal_strength().unwrap_or_default();

        let outcome = self.registry.notify_signal_strength(&strength).await;
        Self::discard("signal_strength", outcome);
    }

    async fn notify_message_waiting_changed(&self, sender: &dyn Phone) {
        let outcome = self
            .registry
            .notify_message_waiting_changed(sender.message_waiting_indicator())
            .await;
        Self::discard("message_waiting_changed", outcome);
    }

    async fn notify_call_forwarding_changed(&self, sender: &dyn Phone) {
        let outcome = self
            .registry
            .notify_call_forwarding_changed(sender.call_forwarding_indicator())
            .await;
        Self::discard("call_forwarding_changed", outcome);
    }

    async fn notify_data_activity(&self, sender: &dyn Phone) {
        let outcome = self
            .registry
            .notify_data_activity(data_activity_to_public(sender.data_activity_state()))
            .await;
        Self::discard("data_activity", outcome);
    }

    async fn notify_data_connection(
        &self,
        sender: &dyn Phone,
        reason: &str,
        apn_type: &str,
        state: DataConnectionState,
    ) {
        // Link data is only meaningful for an established connection
        let (link_properties, link_capabilities) = if state == DataConnectionState::Connected {
            (sender.link_properties(apn_type), sender.link_capabilities(apn_type))
        } else {
            (None, None)
        };

        let roaming = sender.service_state().map(|ss| ss.roaming).unwrap_or(false);

        let info = DataConnectionInfo {
            state: data_state_to_public(state),
            is_data_connectivity_possible: sender.is_data_connectivity_possible(apn_type),
            reason: reason.to_string(),
            apn_type: apn_type.to_string(),
            apn_host: sender.active_apn_host(apn_type).unwrap_or_default(),
            link_properties,
            link_capabilities,
            network_type: sender.network_type().unwrap_or(NETWORK_TYPE_UNKNOWN),
            roaming,
        };

        let outcome = self.registry.notify_data_connection(&info).await;
        Self::discard("data_connection", outcome);
    }

    async fn notify_data_connection_failed(&self, _sender: &dyn Phone, reason: &str, apn_type: &str) {
        let outcome = self
            .registry
            .notify_data_connection_failed(reason, apn_type)
            .await;
        Self::discard("data_connection_failed", outcome);
    }

    async fn notify_cell_location(&self, sender: &dyn Phone) {
        let bundle = sender
            .cell_location()
            .map(|location| location.to_bundle())
            .unwrap_or_else(CellLocationBundle::new);

        let outcome = self.registry.notify_cell_location(&bundle).await;
        Self::discard("cell_location", outcome);
    }

    async fn notify_cell_info(&self, _sender: &dyn Phone, cell_info: &[CellInfo]) {
        let outcome = self.registry.notify_cell_info(cell_info).await;
        Self::discard("cell_info", outcome);
    }

    async fn notify_otasp_changed(&self, _sender: &dyn Phone, otasp_mode: i32) {
        let outcome = self.registry.notify_otasp_changed(otasp_mode).await;
        Self::discard("otasp_changed", outcome);
    }

    async fn notify_precise_call_state(&self, sender: &dyn Phone) {
        let (ringing, foreground, background) = match (
            sender.ringing_call(),
            sender.foreground_call(),
            sender.background_call(),
        ) {
            (Some(r), Some(f), Some(b)) => (r, f, b),
            _ => {
                trace!("Skipping precise call state, a call leg is missing");
                return;
            }
        };

        let outcome = self
            .registry
            .notify_precise_call_state(
                precise_call_state_to_public(ringing.state),
                precise_call_state_to_public(foreground.state),
                precise_call_state_to_public(background.state),
            )
            .await;
        Self::discard("precise_call_state", outcome);
    }

    async fn notify_disconnect_cause(&self, cause: i32, precise_cause: i32) {
        let outcome = self
            .registry
            .notify_disconnect_cause(cause, precise_cause)
            .await;
        Self::discard("disconnect_cause", outcome);
    }

    async fn notify_precise_data_connection_failed(
        &self,
        _sender: &dyn Phone,
        reason: &str,
        apn_type: &str,
        apn: &str,
        fail_cause: &str,
    ) {
        let outcome = self
            .registry
            .notify_precise_data_connection_failed(reason, apn_type, apn, fail_cause)
            .await;
        Self::discard("precise_data_connection_failed", outcome);
    }
}
