//! Virtual air conditioner: on/off plus a target `temperature` in °C.

use smarthouse_app::ports::Device;
use smarthouse_domain::device::{DeviceKind, DeviceSnapshot};
use smarthouse_domain::error::SmartHouseError;
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::power::PowerState;
use smarthouse_domain::service::Service;

use super::DeviceCore;

/// Name of the target temperature parameter.
pub const TEMPERATURE: &str = "temperature";

const DEFAULT_TEMPERATURE: i64 = 22;

/// A simulated air conditioner.
pub struct VirtualAirConditioner {
    core: DeviceCore,
}

impl Default for VirtualAirConditioner {
    fn default() -> Self {
        Self::new("Virtual Air Conditioner")
    }
}

impl VirtualAirConditioner {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: DeviceCore::new(
                name,
                DeviceKind::AirConditioner,
                &[(TEMPERATURE, DEFAULT_TEMPERATURE)],
            ),
        }
    }

    #[must_use]
    pub fn power(&self) -> PowerState {
        self.core.power()
    }

    /// Current target temperature.
    #[must_use]
    pub fn temperature(&self) -> i64 {
        self.core.parameter(TEMPERATURE).unwrap_or(DEFAULT_TEMPERATURE)
    }

    #[must_use]
    pub fn snapshot(&self) -> DeviceSnapshot {
        self.core.snapshot()
    }
}

impl Device for VirtualAirConditioner {
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
                tracing::info!(device = self.core.name(), temperature = *value, "temperature set");
            }
            _ => tracing::info!(device = self.core.name(), %power, "air conditioner switched"),
        }
        Ok(())
    }

    fn parameter(&self, name: &str) -> Result<i64, SmartHouseError> {
        self.core.parameter(name)
    }
}
