//! Virtual device implementations: light, air conditioner, television.
//!
//! All three share [`DeviceCore`]: identity, power state, named numeric
//! parameters and a `last_changed` timestamp behind a mutex.

mod air_conditioner;
mod light;
mod television;

pub use air_conditioner::{TEMPERATURE, VirtualAirConditioner};
pub use light::VirtualLight;
pub use television::{CHANNEL, VirtualTelevision};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use smarthouse_domain::device::{DeviceKind, DeviceSnapshot};
use smarthouse_domain::error::{DeviceError, SmartHouseError};
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::power::PowerState;
use smarthouse_domain::service::Service;
use smarthouse_domain::time::{Timestamp, now};

struct CoreState {
    power: PowerState,
    parameters: BTreeMap<String, i64>,
    last_changed: Timestamp,
}

/// State and bookkeeping shared by every virtual device.
pub(crate) struct DeviceCore {
    id: DeviceId,
    name: String,
    kind: DeviceKind,
    state: Mutex<CoreState>,
}

impl DeviceCore {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: DeviceKind,
        parameters: &[(&str, i64)],
    ) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.into(),
            kind,
            state: Mutex::new(CoreState {
                power: PowerState::Off,
                parameters: parameters
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), *v))
                    .collect(),
                last_changed: now(),
            }),
        }
    }

    pub(crate) fn id(&self) -> DeviceId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn power(&self) -> PowerState {
        self.lock_state().power
    }

    pub(crate) fn snapshot(&self) -> DeviceSnapshot {
        let state = self.lock_state();
        DeviceSnapshot {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            power: state.power,
            parameters: state.parameters.clone(),
            last_changed: state.last_changed,
        }
    }

    pub(crate) fn parameter(&self, name: &str) -> Result<i64, SmartHouseError> {
        self.lock_state()
            .parameters
            .get(name)
            .copied()
            .ok_or_else(|| self.unknown_parameter(name).into())
    }

    /// Apply `service` and return the power state it leaves the device in.
    pub(crate) fn apply(&self, service: &Service) -> Result<PowerState, SmartHouseError> {
        let mut state = self.lock_state();
        match service {
            Service::TurnOn => state.power = PowerState::On,
            Service::TurnOff => state.power = PowerState::Off,
            Service::SetParameter { name, value } => {
                if state.parameters.is_empty() {
                    return Err(DeviceError::UnsupportedService {
                        device: self.name.clone(),
                        service: service.name(),
                    }
                    .into());
                }
                let current = state
                    .parameters
                    .get_mut(name)
                    .ok_or_else(|| self.unknown_parameter(name))?;
                *current = *value;
            }
        }
        state.last_changed = now();
        Ok(state.power)
    }

    fn unknown_parameter(&self, name: &str) -> DeviceError {
        DeviceError::UnknownParameter {
            device: self.name.clone(),
            parameter: name.to_string(),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
