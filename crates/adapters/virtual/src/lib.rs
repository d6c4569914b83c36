//! # smarthouse-adapter-virtual
//!
//! Simulated devices implementing the [`Device`] port, for tests and the
//! demo binary.
//!
//! ## Provided devices
//!
//! | Device | Services | Parameters |
//! |--------|----------|------------|
//! | [`VirtualLight`] | `turn_on` / `turn_off` | none |
//! | [`VirtualAirConditioner`] | `turn_on` / `turn_off` / `set_parameter` | `temperature` (22) |
//! | [`VirtualTelevision`] | `turn_on` / `turn_off` / `set_parameter` | `channel` (1) |
//!
//! ## Dependency rule
//!
//! Depends on `smarthouse-app` (port traits) and `smarthouse-domain` only.

mod devices;

use std::sync::Arc;

use smarthouse_app::ports::Device;
use smarthouse_domain::device::DeviceSnapshot;

pub use devices::{
    CHANNEL, TEMPERATURE, VirtualAirConditioner, VirtualLight, VirtualTelevision,
};

/// One of each virtual device, shared through [`Arc`] so commands can hold
/// them.
pub struct VirtualHome {
    pub light: Arc<VirtualLight>,
    pub air_conditioner: Arc<VirtualAirConditioner>,
    pub television: Arc<VirtualTelevision>,
}

impl Default for VirtualHome {
    fn default() -> Self {
        Self {
            light: Arc::new(VirtualLight::new("Living Room Light")),
            air_conditioner: Arc::new(VirtualAirConditioner::new("Air Conditioner")),
            television: Arc::new(VirtualTelevision::new("Television")),
        }
    }
}

impl VirtualHome {
    /// All devices as port trait objects, in a stable order.
    #[must_use]
    pub fn devices(&self) -> Vec<Arc<dyn Device>> {
        vec![
            self.light.clone(),
            self.air_conditioner.clone(),
            self.television.clone(),
        ]
    }

    /// Current state of every device.
    #[must_use]
    pub fn snapshots(&self) -> Vec<DeviceSnapshot> {
        vec![
            self.light.snapshot(),
            self.air_conditioner.snapshot(),
            self.television.snapshot(),
        ]
    }
}
