//! Virtual television: on/off plus a `channel` number.

use smarthouse_app::ports::Device;
use smarthouse_domain::device::{DeviceKind, DeviceSnapshot};
use smarthouse_domain::error::SmartHouseError;
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::power::PowerState;
use smarthouse_domain::service::Service;

use super::DeviceCore;

/// Name of the channel parameter.
pub const CHANNEL: &str = "channel";

const DEFAULT_CHANNEL: i64 = 1;

/// A simulated television.
pub struct VirtualTelevision {
    core: DeviceCore,
}

impl Default for VirtualTelevision {
    fn default() -> Self {
        Self::new("Virtual Television")
    }
}

impl VirtualTelevision {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(name, DeviceKind::Television, &[(CHANNEL, DEFAULT_CHANNEL)]),
        }
    }

    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    #[must_use]
    pub fn channel(&self) -> i64 {
        self.core.parameter(CHANNEL).unwrap_or(DEFAULT_CHANNEL)
    }

    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.core.snapshot()
    }
}

impl Device for VirtualTelevision {
    fn id(&self) -> DeviceId {
        self.core.id()
    }

    fn name(&self) -> &str {
        self.core.name()
    }

    fn handle_service(&self, service: &Service) -> Result<(), SmartHouseError> {
        let power = self.core.apply(service)?;
        match service {
            Service::SetParameter { value, .. } => {
                tracing::info!(device = self.core.name(), channel = *value, "channel switched");
            }
            _ => tracing::info!(device = self.core.name(), %power, "television switched"),
        }
        Ok(())
    }

    fn parameter(&self, name: &str) -> Result<i64, SmartHouseError> {
        self.core.parameter(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthouse_domain::error::DeviceError;

    #[test]
    fn should_default_to_off_on_channel_one() {
        let tv = VirtualTelevision::default();
        assert_eq!(tv.power(), PowerState::Off);
        assert_eq!(tv.channel(), 1);
    }

    #[test]
    fn should_switch_channel() {
        let tv = VirtualTelevision::default();
        tv.handle_service(&Service::set_parameter(CHANNEL, 42)).unwrap();
        assert_eq!(tv.channel(), 42);
    }

    #[test]
    fn should_turn_on_when_service_called() {
        let tv = VirtualTelevision::default();
        tv.handle_service(&Service::TurnOn).unwrap();
        assert_eq!(tv.power(), PowerState::On);
    }

    #[test]
    fn should_reject_unknown_parameter() {
        let tv = VirtualTelevision::default();
        let result = tv.parameter("volume");
        assert!(matches!(
            result,
            Err(SmartHouseError::Device(DeviceError::UnknownParameter { .. }))
        ));
    }
}
