//! Common error types used across the workspace.
//!
//! Each concern has its own typed error, converted into [`SmartHouseError`]
//! through `#[from]`. There are no `String` variants.

/// Top-level error returned by commands, devices and the remote control.
#[derive(Debug, thiserror::Error)]
pub enum SmartHouseError {
    /// The requested slot cannot be used.
    #[error("slot error")]
    Slot(#[from] SlotError),

    /// A device refused or failed an operation.
    #[error("device error")]
    Device(#[from] DeviceError),

    /// A command has nothing to revert to.
    #[error("undo error")]
    Undo(#[from] UndoError),

    /// A component of a macro command failed. Components before `index`
    /// have already run and are left as they are.
    #[error("macro step {index} failed")]
    MacroStep {
        index: usize,
        #[source]
        source: Box<SmartHouseError>,
    },
}

/// Slot addressing failures on the remote control.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The index is outside the remote's slot table.
    #[error("slot {slot} is out of range (remote has {slot_count} slots)")]
    OutOfRange { slot: usize, slot_count: usize },

    /// The slot exists but no commands have been bound to it.
    #[error("slot {0} has no command bound")]
    Unbound(usize),
}

/// Failures reported by a device collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// The device does not understand the requested service.
    #[error("{device} does not support service {service}")]
    UnsupportedService {
        device: String,
        service: &'static str,
    },

    /// The device has no parameter with the given name.
    #[error("{device} has no parameter {parameter}")]
    UnknownParameter { device: String, parameter: String },
}

/// Failures while reverting a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    /// The command holds no previous value to restore (never executed, or
    /// already undone as many times as it was executed).
    #[error("{command} has no previous value to restore")]
    NothingToRestore { command: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn should_display_out_of_range_slot() {
        let err = SlotError::OutOfRange {
            slot: 5,
            slot_count: 3,
        };
        assert_eq!(err.to_string(), "slot 5 is out of range (remote has 3 slots)");
    }

    #[test]
    fn should_display_unbound_slot() {
        assert_eq!(SlotError::Unbound(2).to_string(), "slot 2 has no command bound");
    }

    #[test]
    fn should_convert_slot_error_into_top_level_error() {
        let err: SmartHouseError = SlotError::Unbound(0).into();
        assert!(matches!(err, SmartHouseError::Slot(SlotError::Unbound(0))));
    }

    #[test]
    fn should_display_unsupported_service() {
        let err = DeviceError::UnsupportedService {
            device: "Hall Light".to_string(),
            service: "set_parameter",
        };
        assert_eq!(
            err.to_string(),
            "Hall Light does not support service set_parameter"
        );
    }

    #[test]
    fn should_expose_failing_component_as_source_of_macro_error() {
        let inner: SmartHouseError = DeviceError::UnknownParameter {
            device: "TV".to_string(),
            parameter: "volume".to_string(),
        }
        .into();
        let err = SmartHouseError::MacroStep {
            index: 1,
            source: Box::new(inner),
        };
        assert_eq!(err.to_string(), "macro step 1 failed");
        assert_eq!(err.source().unwrap().to_string(), "device error");
    }
}
