//! device.rs
//! Device listing results and the identity the map pipeline needs.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::session::string_or_number;

/// A device as returned by the device listing endpoint.
/// Known fields are typed; everything else is kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Device {
    #[serde(deserialize_with = "string_or_number")]
    pub device_id: String,
    pub sn: String,
    pub mac: String,
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,
    pub product_mode_code: String,
    pub nickname: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Device {
    pub fn identity(&self) -> DeviceIdentity {
        DeviceIdentity {
            serial: self.sn.clone(),
            mac: self.mac.clone(),
            product_id: self.product_id.clone(),
            product_mode_code: self.product_mode_code.clone(),
        }
    }
}

/// Immutable device attributes used for map key derivation and storage paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub serial: String,
    pub mac: String,
    pub product_id: String,
    pub product_mode_code: String,
}

impl DeviceIdentity {
    pub fn new(
        serial: impl Into<String>,
        mac: impl Into<String>,
        product_id: impl Into<String>,
        product_mode_code: impl Into<String>,
    ) -> Self {
        Self {
            serial: serial.into(),
            mac: mac.into(),
            product_id: product_id.into(),
            product_mode_code: product_mode_code.into(),
        }
    }
}

impl From<&Device> for DeviceIdentity {
    fn from(d: &Device) -> Self {
        d.identity()
    }
}
