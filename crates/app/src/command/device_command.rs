//! Device command: one device, one forward service, one inverse service.

use std::sync::Arc;

use smarthouse_domain::error::SmartHouseError;
use smarthouse_domain::service::Service;

use super::Command;
use crate::ports::Device;

/// Immutable binding of a device to a forward and an inverse [`Service`].
pub struct DeviceCommand {
    device: Arc<dyn Device>,
    forward: Service,
    inverse: Service,
}

impl DeviceCommand {
    /// Bind `device` to an explicit forward/inverse pair.
    pub fn new(device: Arc<dyn Device>, forward: Service, inverse: Service) -> Self {
        Self {
            device,
            forward,
            inverse,
        }
    }

    /// `turn_on`, undone by `turn_off`.
    pub fn turn_on(device: Arc<dyn Device>) -> Self {
        Self::new(device, Service::TurnOn, Service::TurnOff)
    }

    /// `turn_off`, undone by `turn_on`.
    pub fn turn_off(device: Arc<dyn Device>) -> Self {
        Self::new(device, Service::TurnOff, Service::TurnOn)
    }

    /// The service performed by [`execute`](Command::execute).
    #[must_use]
    pub fn forward(&self) -> &Service {
        &self.forward
    }

    /// The service performed by [`undo`](Command::undo).
    #[must_use]
    pub fn inverse(&self) -> &Service {
        &self.inverse
    }
}

impl Command for DeviceCommand {
    fn execute(&self) -> Result<(), SmartHouseError> {
        tracing::debug!(
            device = self.device.name(),
            device_id = %self.device.id(),
            service = %self.forward,
            "execute"
        );
        self.device.handle_service(&self.forward)
    }

    fn undo(&self) -> Result<(), SmartHouseError> {
        tracing::debug!(
            device = self.device.name(),
            device_id = %self.device.id(),
            service = %self.inverse,
            "undo"
        );
        self.device.handle_service(&self.inverse)
    }

    fn description(&self) -> String {
        format!("{}: {}", self.device.name(), self.forward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CallLog, RecordingDevice};
    use smarthouse_domain::error::DeviceError;
    use smarthouse_domain::power::PowerState;

    #[test]
    fn should_turn_device_on_when_executed() {
        let light = Arc::new(RecordingDevice::new("Hall Light", CallLog::default()));
        let cmd = DeviceCommand::turn_on(light.clone());

        cmd.execute().unwrap();

        assert_eq!(light.power(), PowerState::On);
    }

    #[test]
    fn should_restore_previous_power_when_undone() {
        let light = Arc::new(RecordingDevice::new("Hall Light", CallLog::default()));
        let cmd = DeviceCommand::turn_on(light.clone());

        cmd.execute().unwrap();
        cmd.undo().unwrap();

        assert_eq!(light.power(), PowerState::Off);
    }

    #[test]
    fn should_pair_turn_off_with_turn_on() {
        let light = Arc::new(RecordingDevice::new("Hall Light", CallLog::default()));
        let cmd = DeviceCommand::turn_off(light);
        assert_eq!(cmd.forward(), &Service::TurnOff);
        assert_eq!(cmd.inverse(), &Service::TurnOn);
    }

    #[test]
    fn should_be_reproducible_across_repeated_calls() {
        let log = CallLog::default();
        let light = Arc::new(RecordingDevice::new("L", log.clone()));
        let cmd = DeviceCommand::turn_on(light);

        cmd.execute().unwrap();
        cmd.undo().unwrap();
        cmd.execute().unwrap();
        cmd.undo().unwrap();

        assert_eq!(
            log.entries(),
            ["L:turn_on", "L:turn_off", "L:turn_on", "L:turn_off"]
        );
    }

    #[test]
    fn should_describe_device_and_forward_service() {
        let light = Arc::new(RecordingDevice::new("Hall Light", CallLog::default()));
        let cmd = DeviceCommand::turn_on(light);
        assert_eq!(cmd.description(), "Hall Light: turn_on");
    }

    #[test]
    fn should_propagate_device_failure() {
        let light = Arc::new(
            RecordingDevice::new("Hall Light", CallLog::default()).failing_on(Service::TurnOn),
        );
        let cmd = DeviceCommand::turn_on(light);

        let result = cmd.execute();

        assert!(matches!(
            result,
            Err(SmartHouseError::Device(DeviceError::UnsupportedService { .. }))
        ));
    }
}
