//! Macro command: a composite fanning execute/undo over its components.

use smarthouse_domain::error::SmartHouseError;
use smarthouse_domain::undo_order::UndoOrder;

use super::{Command, SharedCommand};

/// An ordered group of commands run as a single command.
///
/// `execute` runs the components front to back. `undo` follows the
/// configured [`UndoOrder`]; the default is [`UndoOrder::Forward`], i.e. the
/// same front-to-back order as `execute`.
///
/// Failure is fail-fast with no compensation: the first failing component
/// stops the run and is reported as [`SmartHouseError::MacroStep`] with its
/// position in the sequence. Components that already ran are left as they are.
pub struct MacroCommand {
    commands: Vec<SharedCommand>,
    undo_order: UndoOrder,
}

impl MacroCommand {
    /// Group `commands`, undoing them in forward order.
    pub fn new(commands: Vec<SharedCommand>) -> Self {
        Self::with_undo_order(commands, UndoOrder::Forward)
    }

    /// Group `commands` with an explicit undo order.
    pub fn with_undo_order(commands: Vec<SharedCommand>, undo_order: UndoOrder) -> Self {
        Self {
            commands,
            undo_order,
        }
    }

    #[must_use]
    pub fn undo_order(&self) -> UndoOrder {
        self.undo_order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn step_failed(index: usize, source: SmartHouseError) -> SmartHouseError {
        SmartHouseError::MacroStep {
            index,
            source: Box::new(source),
        }
    }
}

impl Command for MacroCommand {
    fn execute(&self) -> Result<(), SmartHouseError> {
        for (index, command) in self.commands.iter().enumerate() {
            command.execute().map_err(|err| {
                tracing::warn!(index, command = %command.description(), "macro step failed");
                Self::step_failed(index, err)
            })?;
        }
        Ok(())
    }

    fn undo(&self) -> Result<(), SmartHouseError> {
        let undo_step = |(index, command): (usize, &SharedCommand)| {
            command.undo().map_err(|err| {
                tracing::warn!(index, command = %command.description(), "macro undo step failed");
                Self::step_failed(index, err)
            })
        };
        match self.undo_order {
            UndoOrder::Forward => self.commands.iter().enumerate().try_for_each(undo_step),
            UndoOrder::Reverse => self
                .commands
                .iter()
                .enumerate()
                .rev()
                .try_for_each(undo_step),
        }
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.commands.iter().map(|c| c.description()).collect();
        format!("macro [{}]", parts.join(", "))
    }
}
