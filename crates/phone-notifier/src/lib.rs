//! # Phone Notifier - Phone State to Telephony Registry
//!
//! This crate sits between the phone state machine and the telephony registry.
//! When the phone reports a change, the notifier reads the current state,
//! translates internal enumerations into the public integer encodings that
//! subscribers understand, and makes a single one-way call to the registry.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  notify_*   ┌────────────────────────┐  one call  ┌───────────────────┐
//! │ Phone state  │────────────▶│ NotificationDispatcher │───────────▶│ TelephonyRegistry │
//! │   machine    │◀────────────│   (convert + build)    │            │ channel / remote  │
//! └──────────────┘  read-only  └────────────────────────┘            └───────────────────┘
//! ```
//!
//! - [`convert`]: pure, total mappings between internal and public state
//! - [`notifier`]: the dispatcher and the [`PhoneNotifier`] trait
//! - [`registry`]: the endpoint trait plus in-process and TCP endpoints
//!
//! Delivery is best effort: a registry failure is dropped inside the
//! dispatcher and never reaches the phone.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rvoip_phone_notifier::{NotificationDispatcher, NotifierConfig, RemoteRegistry};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotifierConfig::from_file("notifier.toml")?;
//! let registry = Arc::new(RemoteRegistry::from_config(&config));
//! let notifier = NotificationDispatcher::new(registry);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod phone;
pub mod registry;
pub mod state;
pub mod types;

pub use config::{LogSettings, NotifierConfig, RegistryConfig};
pub use error::{NotifierError, RegistryError, RegistryResult, Result};
pub use logging::{setup_logging, LoggingConfig};
pub use notifier::{NotificationDispatcher, PhoneNotifier};
pub use phone::Phone;
pub use registry::{ChannelRegistry, RegistryNotification, RemoteRegistry, TelephonyRegistry, WireNotification};
pub use state::{CallState, DataActivityState, DataConnectionState, PreciseCallState};
pub use types::{
    CallLeg, CellIdentity, CellInfo, CellLocation, CellLocationBundle, Connection, DataConnectionInfo,
    LinkCapabilities, LinkProperties, ServiceState, SignalStrength,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for easier use
pub mod prelude {
    pub use crate::{
        CallState, ChannelRegistry, DataActivityState, DataConnectionState, NotificationDispatcher,
        Phone, PhoneNotifier, PreciseCallState, RemoteRegistry, TelephonyRegistry,
    };
}
