//! Device: descriptive types for the things commands operate on.
//!
//! The behaviour of a device lives behind the `Device` port in the `app`
//! crate. This module only holds the values a device can report about itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::power::PowerState;
use crate::time::Timestamp;

/// The kind of appliance a device models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    Light,
    AirConditioner,
    Television,
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::AirConditioner => f.write_str("air_conditioner"),
            Self::Television => f.write_str("television"),
        }
    }
}

/// Point-in-time view of a device's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub id: DeviceId,
    pub name: String,
    pub kind: DeviceKind,
    pub power: PowerState,
    /// Named numeric parameters, e.g. `channel` or `temperature`.
    #[serde(default)]
    pub parameters: BTreeMap<String, i64>,
    pub last_changed: Timestamp,
}

impl DeviceSnapshot {
    /// Look up a parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<i64> {
        self.parameters.get(name).copied()
    }
}
