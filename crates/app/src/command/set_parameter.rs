//! Parameter command: sets a numeric device parameter and remembers the
//! value it replaced so the change can be undone.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use smarthouse_domain::error::{SmartHouseError, UndoError};
use smarthouse_domain::service::Service;

use super::Command;
use crate::ports::Device;

/// Sets `parameter` to `value` on execute; restores the captured previous
/// value on undo.
///
/// The same instance may be pressed several times before being undone, so
/// previous values are kept as a stack: each undo restores the value
/// captured by the most recent execute that has not been undone yet.
pub struct SetParameterCommand {
    device: Arc<dyn Device>,
    parameter: String,
    value: i64,
    previous: Mutex<Vec<i64>>,
}

impl SetParameterCommand {
    pub fn new(device: Arc<dyn Device>, parameter: impl Into<String>, value: i64) -> Self {
        Self {
            device,
            parameter: parameter.into(),
            value,
            previous: Mutex::new(Vec::new()),
        }
    }

    /// The value this command sets.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Number of captured values waiting to be restored.
    #[must_use]
    pub fn pending_undos(&self) -> usize {
        self.lock_previous().len()
    }

    fn lock_previous(&self) -> MutexGuard<'_, Vec<i64>> {
        self.previous
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Command for SetParameterCommand {
    fn execute(&self) -> Result<(), SmartHouseError> {
        let current = self.device.parameter(&self.parameter)?;
        tracing::debug!(
            device = self.device.name(),
            device_id = %self.device.id(),
            parameter = %self.parameter,
            from = current,
            to = self.value,
            "execute"
        );
        self.device
            .handle_service(&Service::set_parameter(&self.parameter, self.value))?;
        self.lock_previous().push(current);
        Ok(())
    }

    fn undo(&self) -> Result<(), SmartHouseError> {
        // Consumed even when the restore fails: the invoker has already
        // popped its history entry.
        let restore = self.lock_previous().pop().ok_or_else(|| {
            UndoError::NothingToRestore {
                command: self.description(),
            }
        })?;
        tracing::debug!(
            device = self.device.name(),
            device_id = %self.device.id(),
            parameter = %self.parameter,
            to = restore,
            "undo"
        );
        self.device
            .handle_service(&Service::set_parameter(&self.parameter, restore))
    }

    fn description(&self) -> String {
        format!(
            "{}: set {} to {}",
            self.device.name(),
            self.parameter,
            self.value
        )
    }
}
