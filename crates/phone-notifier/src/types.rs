//! Snapshot types forwarded to the registry
//!
//! Every value here is built fresh from the phone at notification time and is
//! never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{NETWORK_TYPE_UNKNOWN, STATE_OUT_OF_SERVICE};
use crate::state::PreciseCallState;

/// A single connection within a call leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Remote party address, e.g. `+15551234`
    pub address: String,
}

impl Connection {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// One of the phone's call legs: ringing, foreground or background
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallLeg {
    /// Current state of the leg
    pub state: PreciseCallState,
    /// Connections in creation order
    pub connections: Vec<Connection>,
}

impl CallLeg {
    pub fn new(state: PreciseCallState) -> Self {
        Self {
            state,
            connections: Vec::new(),
        }
    }

    pub fn with_connection(mut self, connection: Connection) -> Self {
        self.connections.push(connection);
        self
    }

    /// The oldest connection on this leg, if any
    pub fn earliest_connection(&self) -> Option<&Connection> {
        self.connections.first()
    }
}

/// Radio and network registration snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceState {
    /// Voice registration state (`STATE_*`)
    pub voice_reg_state: i32,
    /// Data registration state (`STATE_*`)
    pub data_reg_state: i32,
    pub roaming: bool,
    pub operator_alpha_long: Option<String>,
    pub operator_alpha_short: Option<String>,
    pub operator_numeric: Option<String>,
    pub is_manual_network_selection: bool,
    pub is_emergency_only: bool,
    /// Radio access technology (`NETWORK_TYPE_*`)
    pub network_type: i32,
}

impl ServiceState {
    /// Explicit out-of-service snapshot
    pub fn out_of_service() -> Self {
        Self {
            voice_reg_state: STATE_OUT_OF_SERVICE,
            data_reg_state: STATE_OUT_OF_SERVICE,
            roaming: false,
            operator_alpha_long: None,
            operator_alpha_short: None,
            operator_numeric: None,
            is_manual_network_selection: false,
            is_emergency_only: false,
            network_type: NETWORK_TYPE_UNKNOWN,
        }
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::out_of_service()
    }
}

/// Sentinel for an unavailable signal measurement
pub const SIGNAL_UNAVAILABLE: i32 = i32::MAX;

/// Signal strength across all supported radio technologies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStrength {
    /// GSM signal strength, 0-31 or 99 for unknown
    pub gsm_signal_strength: i32,
    /// GSM bit error rate, 0-7 or 99 for unknown
    pub gsm_bit_error_rate: i32,
    pub cdma_dbm: i32,
    pub cdma_ecio: i32,
    pub evdo_dbm: i32,
    pub evdo_ecio: i32,
    pub evdo_snr: i32,
    pub lte_signal_strength: i32,
    pub lte_rsrp: i32,
    pub lte_rsrq: i32,
    pub lte_rssnr: i32,
    pub lte_cqi: i32,
    pub is_gsm: bool,
}

impl Default for SignalStrength {
    fn default() -> Self {
        Self {
            gsm_signal_strength: 99,
            gsm_bit_error_rate: 99,
            cdma_dbm: -1,
            cdma_ecio: -1,
            evdo_dbm: -1,
            evdo_ecio: -1,
            evdo_snr: -1,
            lte_signal_strength: 99,
            lte_rsrp: SIGNAL_UNAVAILABLE,
            lte_rsrq: SIGNAL_UNAVAILABLE,
            lte_rssnr: SIGNAL_UNAVAILABLE,
            lte_cqi: SIGNAL_UNAVAILABLE,
            is_gsm: true,
        }
    }
}

/// Flattened cell location as carried on the wire
pub type CellLocationBundle = BTreeMap<String, i32>;

/// Serving cell location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellLocation {
    Gsm {
        /// Location area code, -1 if unknown
        lac: i32,
        /// Cell id, -1 if unknown
        cid: i32,
        /// Primary scrambling code, -1 if unknown
        psc: i32,
    },
    Cdma {
        base_station_id: i32,
        /// Latitude in units of 0.25 seconds
        base_station_latitude: i32,
        /// Longitude in units of 0.25 seconds
        base_station_longitude: i32,
        system_id: i32,
        network_id: i32,
    },
}

impl CellLocation {
    /// Flatten into the key/value bundle subscribers expect
    pub fn to_bundle(&self) -> CellLocationBundle {
        let mut bundle = CellLocationBundle::new();
        match self {
            CellLocation::Gsm { lac, cid, psc } => {
                bundle.insert("lac".to_string(), *lac);
                bundle.insert("cid".to_string(), *cid);
                bundle.insert("psc".to_string(), *psc);
            }
            CellLocation::Cdma {
                base_station_id,
                base_station_latitude,
                base_station_longitude,
                system_id,
                network_id,
            } => {
                bundle.insert("baseStationId".to_string(), *base_station_id);
                bundle.insert("baseStationLatitude".to_string(), *base_station_latitude);
                bundle.insert("baseStationLongitude".to_string(), *base_station_longitude);
                bundle.insert("systemId".to_string(), *system_id);
                bundle.insert("networkId".to_string(), *network_id);
            }
        }
        bundle
    }
}

/// Identity of an observed cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellIdentity {
    Gsm { mcc: i32, mnc: i32, lac: i32, cid: i32 },
    Cdma { network_id: i32, system_id: i32, base_station_id: i32 },
    Lte { mcc: i32, mnc: i32, ci: i32, pci: i32, tac: i32 },
    Wcdma { mcc: i32, mnc: i32, lac: i32, cid: i32, psc: i32 },
}

/// An observed cell, serving or neighbouring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellInfo {
    /// Whether the device is registered on this cell
    pub registered: bool,
    pub timestamp: DateTime<Utc>,
    pub identity: CellIdentity,
}

/// Link-layer configuration of an active data connection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkProperties {
    pub interface_name: Option<String>,
    pub addresses: Vec<String>,
    pub dns_servers: Vec<String>,
    pub gateways: Vec<String>,
    pub mtu: Option<u32>,
}

/// Capabilities advertised for a data connection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkCapabilities {
    pub capabilities: BTreeMap<String, String>,
}

/// Everything the registry learns about a data connection change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConnectionInfo {
    /// Public connection state (`DATA_*`)
    pub state: i32,
    pub is_data_connectivity_possible: bool,
    pub reason: String,
    pub apn_type: String,
    pub apn_host: String,
    /// Only present when the connection is up
    pub link_properties: Option<LinkProperties>,
    /// Only present when the connection is up
    pub link_capabilities: Option<LinkCapabilities>,
    /// Radio access technology (`NETWORK_TYPE_*`)
    pub network_type: i32,
    pub roaming: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_service_snapshot() {
        let ss = ServiceState::out_of_service();
        assert_eq!(ss.voice_reg_state, STATE_OUT_OF_SERVICE);
        assert_eq!(ss.data_reg_state, STATE_OUT_OF_SERVICE);
        assert!(!ss.roaming);
        assert!(ss.operator_numeric.is_none());
        assert_eq!(ss.network_type, NETWORK_TYPE_UNKNOWN);
    }

    #[test]
    fn test_gsm_bundle_keys() {
        let bundle = CellLocation::Gsm { lac: 12, cid: 3401, psc: -1 }.to_bundle();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle["lac"], 12);
        assert_eq!(bundle["cid"], 3401);
        assert_eq!(bundle["psc"], -1);
    }

    #[test]
    fn test_cdma_bundle_keys() {
        let bundle = CellLocation::Cdma {
            base_station_id: 7,
            base_station_latitude: 100,
            base_station_longitude: -200,
            system_id: 4,
            network_id: 5,
        }
        .to_bundle();
        assert_eq!(bundle.len(), 5);
        assert_eq!(bundle["baseStationId"], 7);
        assert_eq!(bundle["baseStationLongitude"], -200);
        assert_eq!(bundle["networkId"], 5);
        assert!(!bundle.contains_key("lac"));
    }

    #[test]
    fn test_earliest_connection() {
        let leg = CallLeg::new(PreciseCallState::Incoming)
            .with_connection(Connection::new("+15550001"))
            .with_connection(Connection::new("+15550002"));
        assert_eq!(leg.earliest_connection().map(|c| c.address.as_str()), Some("+15550001"));
        assert!(CallLeg::new(PreciseCallState::Idle).earliest_connection().is_none());
    }
}
