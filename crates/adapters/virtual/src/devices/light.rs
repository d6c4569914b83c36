//! Virtual light: responds to `turn_on` and `turn_off`.

use smarthouse_app::ports::Device;
use smarthouse_domain::device::{DeviceKind, DeviceSnapshot};
use smarthouse_domain::error::SmartHouseError;
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::power::PowerState;
use smarthouse_domain::service::Service;

use super::DeviceCore;

/// A simulated light that can be turned on and off.
pub struct VirtualLight {
    core: DeviceCore,
}

impl Default for VirtualLight {
    fn default() -> Self {
        Self::new("Virtual Light")
    }
}

impl VirtualLight {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(name, DeviceKind::Light, &[]),
        }
    }

    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.core.snapshot()
    }
}

impl Device for VirtualLight {
    fn id(&self) -> DeviceId {
        self.core.id()
    }

    fn name(&self) -> &str {
        self.core.name()
    }

    fn handle_service(&self, service: &Service) -> Result<(), SmartHouseError> {
        let power = self.core.apply(service)?;
        tracing::info!(device = self.core.name(), %power, "light switched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthouse_domain::error::DeviceError;

    #[test]
    fn should_default_to_off() {
        let light = VirtualLight::default();
        assert_eq!(light.power(), PowerState::Off);
        assert_eq!(light.name(), "Virtual Light");
    }

    #[test]
    fn should_turn_on_when_service_called() {
        let light = VirtualLight::default();
        light.handle_service(&Service::TurnOn).unwrap();
        assert_eq!(light.power(), PowerState::On);
    }

    #[test]
    fn should_turn_off_when_service_called() {
        let light = VirtualLight::default();
        light.handle_service(&Service::TurnOn).unwrap();
        light.handle_service(&Service::TurnOff).unwrap();
        assert_eq!(light.power(), PowerState::Off);
    }

    #[test]
    fn should_refuse_parameter_service() {
        let light = VirtualLight::default();
        let result = light.handle_service(&Service::set_parameter("brightness", 50));
        assert!(matches!(
            result,
            Err(SmartHouseError::Device(DeviceError::UnsupportedService { .. }))
        ));
    }

    #[test]
    fn should_have_no_parameters() {
        let light = VirtualLight::default();
        assert!(light.parameter("brightness").is_err());
    }

    #[test]
    fn should_produce_light_snapshot() {
        let light = VirtualLight::new("Kitchen Light");
        let snapshot = light.snapshot();
        assert_eq!(snapshot.kind, DeviceKind::Light);
        assert_eq!(snapshot.name, "Kitchen Light");
        assert!(snapshot.parameters.is_empty());
    }
}
