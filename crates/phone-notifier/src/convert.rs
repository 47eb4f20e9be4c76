//! Conversions between internal state and public wire values
//!
//! Each state family has two independent tables. The internal to public
//! direction is an exhaustive match. The public to internal direction accepts
//! any integer and falls back to the family's resting state for values it does
//! not recognise, so callers never have to handle a decode failure.
//!
//! The two directions are written out separately rather than derived from one
//! another. They agree on the defined set, but nothing else is promised.
//!
//! ```rust
//! use rvoip_phone_notifier::constants::CALL_STATE_RINGING;
//! use rvoip_phone_notifier::convert::{call_state_from_public, call_state_to_public};
//! use rvoip_phone_notifier::state::CallState;
//!
//! assert_eq!(call_state_to_public(CallState::Ringing), CALL_STATE_RINGING);
//! assert_eq!(call_state_from_public(42), CallState::Idle);
//! ```

use crate::constants::*;
use crate::state::{CallState, DataActivityState, DataConnectionState, PreciseCallState};

/// Convert a [`CallState`] into a `CALL_STATE_*` constant
pub fn call_state_to_public(state: CallState) -> i32 {
    match state {
        CallState::Idle => CALL_STATE_IDLE,
        CallState::Ringing => CALL_STATE_RINGING,
        CallState::Offhook => CALL_STATE_OFFHOOK,
    }
}

/// Convert a `CALL_STATE_*` constant into a [`CallState`]
pub fn call_state_from_public(state: i32) -> CallState {
    match state {
        CALL_STATE_RINGING => CallState::Ringing,
        CALL_STATE_OFFHOOK => CallState::Offhook,
        _ => CallState::Idle,
    }
}

/// Convert a [`DataConnectionState`] into a `DATA_*` connection constant
pub fn data_state_to_public(state: DataConnectionState) -> i32 {
    match state {
        DataConnectionState::Disconnected => DATA_DISCONNECTED,
        DataConnectionState::Connecting => DATA_CONNECTING,
        DataConnectionState::Connected => DATA_CONNECTED,
        DataConnectionState::Suspended => DATA_SUSPENDED,
    }
}

/// Convert a `DATA_*` connection constant into a [`DataConnectionState`]
pub fn data_state_from_public(state: i32) -> DataConnectionState {
    match state {
        DATA_CONNECTING => DataConnectionState::Connecting,
        DATA_CONNECTED => DataConnectionState::Connected,
        DATA_SUSPENDED => DataConnectionState::Suspended,
        _ => DataConnectionState::Disconnected,
    }
}

/// Convert a [`DataActivityState`] into a `DATA_ACTIVITY_*` constant
pub fn data_activity_to_public(state: DataActivityState) -> i32 {
    match state {
        DataActivityState::None => DATA_ACTIVITY_NONE,
        DataActivityState::DataIn => DATA_ACTIVITY_IN,
        DataActivityState::DataOut => DATA_ACTIVITY_OUT,
        DataActivityState::DataInAndOut => DATA_ACTIVITY_INOUT,
        DataActivityState::Dormant => DATA_ACTIVITY_DORMANT,
    }
}

/// Convert a `DATA_ACTIVITY_*` constant into a [`DataActivityState`]
pub fn data_activity_from_public(state: i32) -> DataActivityState {
    match state {
        DATA_ACTIVITY_IN => DataActivityState::DataIn,
        DATA_ACTIVITY_OUT => DataActivityState::DataOut,
        DATA_ACTIVITY_INOUT => DataActivityState::DataInAndOut,
        DATA_ACTIVITY_DORMANT => DataActivityState::Dormant,
        _ => DataActivityState::None,
    }
}

/// Convert a [`PreciseCallState`] into a `PRECISE_CALL_STATE_*` constant
pub fn precise_call_state_to_public(state: PreciseCallState) -> i32 {
    match state {
        PreciseCallState::Idle => PRECISE_CALL_STATE_IDLE,
        PreciseCallState::Active => PRECISE_CALL_STATE_ACTIVE,
        PreciseCallState::Holding => PRECISE_CALL_STATE_HOLDING,
        PreciseCallState::Dialing => PRECISE_CALL_STATE_DIALING,
        PreciseCallState::Alerting => PRECISE_CALL_STATE_ALERTING,
        PreciseCallState::Incoming => PRECISE_CALL_STATE_INCOMING,
        PreciseCallState::Waiting => PRECISE_CALL_STATE_WAITING,
        PreciseCallState::Disconnected => PRECISE_CALL_STATE_DISCONNECTED,
        PreciseCallState::Disconnecting => PRECISE_CALL_STATE_DISCONNECTING,
    }
}

/// Convert a `PRECISE_CALL_STATE_*` constant into a [`PreciseCallState`]
pub fn precise_call_state_from_public(state: i32) -> PreciseCallState {
    match state {
        PRECISE_CALL_STATE_ACTIVE => PreciseCallState::Active,
        PRECISE_CALL_STATE_HOLDING => PreciseCallState::Holding,
        PRECISE_CALL_STATE_DIALING => PreciseCallState::Dialing,
        PRECISE_CALL_STATE_ALERTING => PreciseCallState::Alerting,
        PRECISE_CALL_STATE_INCOMING => PreciseCallState::Incoming,
        PRECISE_CALL_STATE_WAITING => PreciseCallState::Waiting,
        PRECISE_CALL_STATE_DISCONNECTED => PreciseCallState::Disconnected,
        PRECISE_CALL_STATE_DISCONNECTING => PreciseCallState::Disconnecting,
        _ => PreciseCallState::Idle,
    }
}
