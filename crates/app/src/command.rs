//! Commands: reversible capabilities wrapping device operations.
//!
//! A command is built once, bound wherever it is needed (slots, macros) and
//! shared through [`SharedCommand`]. The remote control pushes the very same
//! instance onto its history, so nothing is allocated per press.

mod device_command;
mod macro_command;
mod set_parameter;

pub use device_command::DeviceCommand;
pub use macro_command::MacroCommand;
pub use set_parameter::SetParameterCommand;

use std::sync::Arc;

use smarthouse_domain::error::SmartHouseError;

/// Shared handle to a command, as stored in slots, macros and the history.
pub type SharedCommand = Arc<dyn Command>;

/// A reversible operation.
///
/// `undo` after `execute` must leave the target in a state equivalent to the
/// one before `execute`. For device commands this law is provided by the
/// pairing of services (`turn_on` / `turn_off`), it is not checked here.
pub trait Command: Send + Sync {
    /// Perform the forward operation.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying device.
    fn execute(&self) -> Result<(), SmartHouseError>;

    /// Perform the inverse operation.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the underlying device, or an
    /// [`UndoError`](smarthouse_domain::error::UndoError) when there is
    /// nothing to revert.
    fn undo(&self) -> Result<(), SmartHouseError>;

    /// Human-readable label, e.g. `"Living Room Light: turn_on"`.
    fn description(&self) -> String;
}
