//! Public wire-level constants
//!
//! These are the stable integer encodings seen by registry subscribers. Internal
//! enumerations in [`crate::state`] are translated into these values by
//! [`crate::convert`] before anything leaves the process.

/// Device call state: no activity
pub const CALL_STATE_IDLE: i32 = 0;
/// Device call state: a new call arrived and is ringing or waiting
pub const CALL_STATE_RINGING: i32 = 1;
/// Device call state: at least one call is dialing, active or on hold
pub const CALL_STATE_OFFHOOK: i32 = 2;

/// Data connection state: disconnected
pub const DATA_DISCONNECTED: i32 = 0;
/// Data connection state: setting up a data connection
pub const DATA_CONNECTING: i32 = 1;
/// Data connection state: connected, IP traffic should be available
pub const DATA_CONNECTED: i32 = 2;
/// Data connection state: connection is up but IP traffic is suspended
pub const DATA_SUSPENDED: i32 = 3;

/// Data activity: no traffic
pub const DATA_ACTIVITY_NONE: i32 = 0;
/// Data activity: receiving
pub const DATA_ACTIVITY_IN: i32 = 1;
/// Data activity: sending
pub const DATA_ACTIVITY_OUT: i32 = 2;
/// Data activity: sending and receiving
pub const DATA_ACTIVITY_INOUT: i32 = 3;
/// Data activity: link is up but physical link is down
pub const DATA_ACTIVITY_DORMANT: i32 = 4;

pub const PRECISE_CALL_STATE_IDLE: i32 = 0;
pub const PRECISE_CALL_STATE_ACTIVE: i32 = 1;
pub const PRECISE_CALL_STATE_HOLDING: i32 = 2;
pub const PRECISE_CALL_STATE_DIALING: i32 = 3;
pub const PRECISE_CALL_STATE_ALERTING: i32 = 4;
pub const PRECISE_CALL_STATE_INCOMING: i32 = 5;
pub const PRECISE_CALL_STATE_WAITING: i32 = 6;
pub const PRECISE_CALL_STATE_DISCONNECTED: i32 = 7;
pub const PRECISE_CALL_STATE_DISCONNECTING: i32 = 8;

// Radio access technologies
pub const NETWORK_TYPE_UNKNOWN: i32 = 0;
pub const NETWORK_TYPE_GPRS: i32 = 1;
pub const NETWORK_TYPE_EDGE: i32 = 2;
pub const NETWORK_TYPE_UMTS: i32 = 3;
pub const NETWORK_TYPE_CDMA: i32 = 4;
pub const NETWORK_TYPE_EVDO_0: i32 = 5;
pub const NETWORK_TYPE_EVDO_A: i32 = 6;
pub const NETWORK_TYPE_1XRTT: i32 = 7;
pub const NETWORK_TYPE_HSDPA: i32 = 8;
pub const NETWORK_TYPE_HSUPA: i32 = 9;
pub const NETWORK_TYPE_HSPA: i32 = 10;
pub const NETWORK_TYPE_IDEN: i32 = 11;
pub const NETWORK_TYPE_EVDO_B: i32 = 12;
pub const NETWORK_TYPE_LTE: i32 = 13;
pub const NETWORK_TYPE_EHRPD: i32 = 14;
pub const NETWORK_TYPE_HSPAP: i32 = 15;
pub const NETWORK_TYPE_GSM: i32 = 16;
pub const NETWORK_TYPE_TD_SCDMA: i32 = 17;
pub const NETWORK_TYPE_IWLAN: i32 = 18;

/// Registration state: registered on a network
pub const STATE_IN_SERVICE: i32 = 0;
/// Registration state: searching or not registered
pub const STATE_OUT_OF_SERVICE: i32 = 1;
/// Registration state: emergency calls only
pub const STATE_EMERGENCY_ONLY: i32 = 2;
/// Registration state: radio explicitly powered off
pub const STATE_POWER_OFF: i32 = 3;

// Over-the-air service provisioning modes, forwarded as-is
pub const OTASP_UNINITIALIZED: i32 = 0;
pub const OTASP_UNKNOWN: i32 = 1;
pub const OTASP_NEEDED: i32 = 2;
pub const OTASP_NOT_NEEDED: i32 = 3;
