//! Read-only view of the phone state machine

use crate::state::{CallState, DataActivityState};
use crate::types::{CallLeg, CellLocation, LinkCapabilities, LinkProperties, ServiceState, SignalStrength};

/// Current state accessors the notifier reads from.
///
/// Implemented by the phone state machine. The notifier only ever reads; any
/// accessor may report an absent value and the notifier substitutes a safe
/// default.
pub trait Phone: Send + Sync {
    /// Device-wide call state
    fn state(&self) -> CallState;

    fn ringing_call(&self) -> Option<CallLeg>;

    fn foreground_call(&self) -> Option<CallLeg>;

    fn background_call(&self) -> Option<CallLeg>;

    fn service_state(&self) -> Option<ServiceState>;

    fn signal_strength(&self) -> Option<SignalStrength>;

    /// Voicemail waiting indicator
    fn message_waiting_indicator(&self) -> bool;

    /// Unconditional call forwarding indicator
    fn call_forwarding_indicator(&self) -> bool;

    fn data_activity_state(&self) -> DataActivityState;

    fn cell_location(&self) -> Option<CellLocation>;

    fn link_properties(&self, apn_type: &str) -> Option<LinkProperties>;

    fn link_capabilities(&self, apn_type: &str) -> Option<LinkCapabilities>;

    fn is_data_connectivity_possible(&self, apn_type: &str) -> bool;

    /// Host of the active access point for `apn_type`
    fn active_apn_host(&self, apn_type: &str) -> Option<String>;

    /// Current radio access technology as a `NETWORK_TYPE_*` value
    fn network_type(&self) -> Option<i32> {
        None
    }
}
