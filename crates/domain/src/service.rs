//! Service: a named operation a device can be asked to perform.
//!
//! Commands select one service as their forward operation and one as its
//! inverse. The core never looks at what a service does to a device.

use serde::{Deserialize, Serialize};

/// An operation selector understood by devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Service {
    /// Switch the device on.
    TurnOn,
    /// Switch the device off.
    TurnOff,
    /// Set a named numeric parameter (e.g. `"channel"`, `"temperature"`).
    SetParameter { name: String, value: i64 },
}

impl Service {
    /// Convenience constructor for [`Service::SetParameter`].
    #[must_use]
    pub fn set_parameter(name: impl Into<String>, value: i64) -> Self {
        Self::SetParameter {
            name: name.into(),
            value,
        }
    }

    /// Wire-style name of the service, e.g. `"turn_on"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::SetParameter { .. } => "set_parameter",
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnOn | Self::TurnOff => f.write_str(self.name()),
            Self::SetParameter { name, value } => write!(f, "set_parameter({name}={value})"),
        }
    }
}
