//! Internal telephony state enumerations
//!
//! These are the representations used by the phone state machine. They never
//! cross the registry boundary directly; see [`crate::convert`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse device-wide call state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallState {
    /// No calls
    Idle,
    /// An incoming call is ringing
    Ringing,
    /// At least one call is dialing, active or on hold
    Offhook,
}

impl CallState {
    pub const ALL: [CallState; 3] = [CallState::Idle, CallState::Ringing, CallState::Offhook];
}

impl Default for CallState {
    fn default() -> Self {
        CallState::Idle
    }
}

impl fmt::Display for CallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallState::Idle => write!(f, "IDLE"),
            CallState::Ringing => write!(f, "RINGING"),
            CallState::Offhook => write!(f, "OFFHOOK"),
        }
    }
}

/// State of a single call leg (ringing, foreground or background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreciseCallState {
    Idle,
    Active,
    Holding,
    Dialing,
    Alerting,
    Incoming,
    Waiting,
    Disconnected,
    Disconnecting,
}

impl PreciseCallState {
    pub const ALL: [PreciseCallState; 9] = [
        PreciseCallState::Idle,
        PreciseCallState::Active,
        PreciseCallState::Holding,
        PreciseCallState::Dialing,
        PreciseCallState::Alerting,
        PreciseCallState::Incoming,
        PreciseCallState::Waiting,
        PreciseCallState::Disconnected,
        PreciseCallState::Disconnecting,
    ];
}

impl Default for PreciseCallState {
    fn default() -> Self {
        PreciseCallState::Idle
    }
}

impl fmt::Display for PreciseCallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreciseCallState::Idle => write!(f, "IDLE"),
            PreciseCallState::Active => write!(f, "ACTIVE"),
            PreciseCallState::Holding => write!(f, "HOLDING"),
            PreciseCallState::Dialing => write!(f, "DIALING"),
            PreciseCallState::Alerting => write!(f, "ALERTING"),
            PreciseCallState::Incoming => write!(f, "INCOMING"),
            PreciseCallState::Waiting => write!(f, "WAITING"),
            PreciseCallState::Disconnected => write!(f, "DISCONNECTED"),
            PreciseCallState::Disconnecting => write!(f, "DISCONNECTING"),
        }
    }
}

/// Data connection state for one access point type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Suspended,
}

impl DataConnectionState {
    pub const ALL: [DataConnectionState; 4] = [
        DataConnectionState::Disconnected,
        DataConnectionState::Connecting,
        DataConnectionState::Connected,
        DataConnectionState::Suspended,
    ];
}

impl Default for DataConnectionState {
    fn default() -> Self {
        DataConnectionState::Disconnected
    }
}

impl fmt::Display for DataConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataConnectionState::Disconnected => write!(f, "DISCONNECTED"),
            DataConnectionState::Connecting => write!(f, "CONNECTING"),
            DataConnectionState::Connected => write!(f, "CONNECTED"),
            DataConnectionState::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

/// Direction of traffic on the data link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataActivityState {
    None,
    DataIn,
    DataOut,
    DataInAndOut,
    Dormant,
}

impl DataActivityState {
    pub const ALL: [DataActivityState; 5] = [
        DataActivityState::None,
        DataActivityState::DataIn,
        DataActivityState::DataOut,
        DataActivityState::DataInAndOut,
        DataActivityState::Dormant,
    ];
}

impl Default for DataActivityState {
    fn default() -> Self {
        DataActivityState::None
    }
}

impl fmt::Display for DataActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataActivityState::None => write!(f, "NONE"),
            DataActivityState::DataIn => write!(f, "DATAIN"),
            DataActivityState::DataOut => write!(f, "DATAOUT"),
            DataActivityState::DataInAndOut => write!(f, "DATAINANDOUT"),
            DataActivityState::Dormant => write!(f, "DORMANT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_resting_states() {
        assert_eq!(CallState::default(), CallState::Idle);
        assert_eq!(PreciseCallState::default(), PreciseCallState::Idle);
        assert_eq!(DataConnectionState::default(), DataConnectionState::Disconnected);
        assert_eq!(DataActivityState::default(), DataActivityState::None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CallState::Offhook.to_string(), "OFFHOOK");
        assert_eq!(DataConnectionState::Suspended.to_string(), "SUSPENDED");
        assert_eq!(PreciseCallState::Disconnecting.to_string(), "DISCONNECTING");
        assert_eq!(DataActivityState::DataInAndOut.to_string(), "DATAINANDOUT");
    }

    #[test]
    fn test_display_names_are_distinct() {
        let mut names: Vec<String> = PreciseCallState::ALL.iter().map(|s| s.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PreciseCallState::ALL.len());

        let mut names: Vec<String> = DataActivityState::ALL.iter().map(|s| s.to_string()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DataActivityState::ALL.len());
    }
}
