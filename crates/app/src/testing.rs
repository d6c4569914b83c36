//! In-memory device used by the unit tests of this crate.

use std::collections::BTreeMap;
use std::mem::discriminant;
use std::sync::{Arc, Mutex};

use smarthouse_domain::error::{DeviceError, SmartHouseError};
use smarthouse_domain::id::DeviceId;
use smarthouse_domain::power::PowerState;
use smarthouse_domain::service::Service;

use crate::ports::Device;

/// Ordered record of every service call, shared between devices.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

pub struct RecordingDevice {
    id: DeviceId,
    name: String,
    log: CallLog,
    power: Mutex<PowerState>,
    parameters: Mutex<BTreeMap<String, i64>>,
    failing: Mutex<Option<Service>>,
}

impl RecordingDevice {
    pub fn new(name: &str, log: CallLog) -> Self {
        Self {
            id: DeviceId::new(),
            name: name.to_string(),
            log,
            power: Mutex::new(PowerState::Off),
            parameters: Mutex::new(BTreeMap::new()),
            failing: Mutex::new(None),
        }
    }

    pub fn with_parameter(self, name: &str, value: i64) -> Self {
        self.parameters
            .lock()
            .unwrap()
            .insert(name.to_string(), value);
        self
    }

    /// Refuse every service of the same kind as `service`.
    pub fn failing_on(self, service: Service) -> Self {
        self.fail_on(service);
        self
    }

    /// Start refusing services of the same kind as `service` from now on.
    pub fn fail_on(&self, service: Service) {
        *self.failing.lock().unwrap() = Some(service);
    }

    pub fn power(&self) -> PowerState {
        *self.power.lock().unwrap()
    }

    pub fn parameter_value(&self, name: &str) -> Option<i64> {
        self.parameters.lock().unwrap().get(name).copied()
    }
}

impl Device for RecordingDevice {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn handle_service(&self, service: &Service) -> Result<(), SmartHouseError> {
        if let Some(failing) = self.failing.lock().unwrap().as_ref() {
            if discriminant(failing) == discriminant(service) {
                return Err(DeviceError::UnsupportedService {
                    device: self.name.clone(),
                    service: service.name(),
                }
                .into());
            }
        }
        match service {
            Service::TurnOn => *self.power.lock().unwrap() = PowerState::On,
            Service::TurnOff => *self.power.lock().unwrap() = PowerState::Off,
            Service::SetParameter { name, value } => {
                let mut parameters = self.parameters.lock().unwrap();
                let slot = parameters
                    .get_mut(name)
                    .ok_or_else(|| DeviceError::UnknownParameter {
                        device: self.name.clone(),
                        parameter: name.clone(),
                    })?;
                *slot = *value;
            }
        }
        self.log.push(format!("{}:{service}", self.name));
        Ok(())
    }

    fn parameter(&self, name: &str) -> Result<i64, SmartHouseError> {
        self.parameter_value(name).ok_or_else(|| {
            DeviceError::UnknownParameter {
                device: self.name.clone(),
                parameter: name.to_string(),
            }
            .into()
        })
    }
}
