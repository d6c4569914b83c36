//! Device port: the collaborator contract every command wraps.

use smarthouse_domain::error::{DeviceError, SmartHouseError};
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::service::Service;

/// A controllable appliance.
///
/// Implementations live in adapter crates (e.g. `adapter_virtual`). State is
/// owned by the implementation, which is why every method takes `&self`:
/// a device is shared by all the commands wrapping it.
pub trait Device: Send + Sync {
    /// Stable identity of this device.
    fn id(&self) -> DeviceId;

    /// Human-readable name, e.g. `"Living Room Light"`.
    fn name(&self) -> &str;

    /// Perform `service` on the device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedService`] when the device does not
    /// understand the service, or [`DeviceError::UnknownParameter`] when a
    /// parameter service names a parameter the device does not have.
    fn handle_service(&self, service: &Service) -> Result<(), SmartHouseError>;

    /// Current value of a numeric parameter.
    ///
    /// The default implementation reports every parameter as unknown, which
    /// suits devices that only switch on and off.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnknownParameter`] when the device has no such
    /// parameter.
    fn parameter(&self, name: &str) -> Result<i64, SmartHouseError> {
        Err(DeviceError::UnknownParameter {
            device: self.name().to_string(),
            parameter: name.to_string(),
        }
        .into())
    }
}
