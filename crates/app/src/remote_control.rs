//! Remote control: the invoker.
//!
//! Holds a fixed-size table of slots, each optionally bound to an
//! (on, off) command pair, and an unbounded history of dispatched commands.
//!
//! Every successful press pushes exactly one entry (the bound instance
//! itself). Every undo pops at most one entry and reverts it. The remote never
//! tracks whether a slot is "currently" on or off; that is the device's
//! business.

use smarthouse_domain::error::{SlotError, SmartHouseError};

use crate::command::SharedCommand;

/// Number of slots on a remote built with [`RemoteControl::default`].
pub const DEFAULT_SLOT_COUNT: usize = 3;

/// Which half of a slot binding a press targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    On,
    Off,
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

struct SlotBinding {
    on: SharedCommand,
    off: SharedCommand,
}

impl SlotBinding {
    fn command(&self, button: Button) -> &SharedCommand {
        match button {
            Button::On => &self.on,
            Button::Off => &self.off,
        }
    }
}

/// Invoker with slot bindings and an undo history.
pub struct RemoteControl {
    slots: Vec<Option<SlotBinding>>,
    history: Vec<SharedCommand>,
}

impl Default for RemoteControl {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

impl RemoteControl {
    /// Create a remote with `slot_count` unbound slots and an empty history.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(slot_count).collect(),
            history: Vec::new(),
        }
    }

    /// Size of the slot table.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Bind an (on, off) pair to `slot`, replacing any previous binding.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] if `slot` is not in the table.
    #[tracing::instrument(
        skip(self, on, off),
        fields(on = %on.description(), off = %off.description())
    )]
    pub fn bind(
        &mut self,
        slot: usize,
        on: SharedCommand,
        off: SharedCommand,
    ) -> Result<(), SmartHouseError> {
        let entry = self.slot_mut(slot)?;
        if entry.is_some() {
            tracing::debug!(slot, "replacing existing binding");
        }
        *entry = Some(SlotBinding { on, off });
        Ok(())
    }

    /// Remove the binding of `slot`. Returns whether a binding was present.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] if `slot` is not in the table.
    #[tracing::instrument(skip(self))]
    pub fn unbind(&mut self, slot: usize) -> Result<bool, SmartHouseError> {
        Ok(self.slot_mut(slot)?.take().is_some())
    }

    /// Whether `slot` exists and has a binding.
    #[must_use]
    pub fn is_bound(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    /// Execute the on-command of `slot` and record it for undo.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the slot is out of range or unbound, or the
    /// command's own error. A command that fails is not recorded.
    pub fn press_on(&mut self, slot: usize) -> Result<(), SmartHouseError> {
        self.press(slot, Button::On)
    }

    /// Execute the off-command of `slot` and record it for undo.
    ///
    /// # Errors
    ///
    /// Same as [`press_on`](Self::press_on).
    pub fn press_off(&mut self, slot: usize) -> Result<(), SmartHouseError> {
        self.press(slot, Button::Off)
    }

    /// Execute one half of a slot binding and record it for undo.
    ///
    /// # Errors
    ///
    /// Same as [`press_on`](Self::press_on).
    #[tracing::instrument(skip(self))]
    pub fn press(&mut self, slot: usize, button: Button) -> Result<(), SmartHouseError> {
        let command = self.binding(slot)?.command(button).clone();
        command.execute()?;
        tracing::info!(command = %command.description(), "pressed");
        self.history.push(command);
        Ok(())
    }

    /// Revert the most recently dispatched command.
    ///
    /// Returns the description of the reverted command, or `None` when the
    /// history is empty (a spurious undo press is not an error).
    ///
    /// # Errors
    ///
    /// Returns the command's undo error. The entry is popped either way.
    #[tracing::instrument(skip(self))]
    pub fn press_undo(&mut self) -> Result<Option<String>, SmartHouseError> {
        let Some(command) = self.history.pop() else {
            tracing::debug!("nothing to undo");
            return Ok(None);
        };
        let description = command.description();
        command.undo()?;
        tracing::info!(command = %description, "undone");
        Ok(Some(description))
    }

    /// Number of commands waiting to be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Description of the command the next undo would revert.
    #[must_use]
    pub fn undo_description(&self) -> Option<String> {
        self.history.last().map(|cmd| cmd.description())
    }

    /// Descriptions of the recorded commands, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.iter().map(|cmd| cmd.description()).collect()
    }

    fn slot_mut(&mut self, slot: usize) -> Result<&mut Option<SlotBinding>, SlotError> {
        let slot_count = self.slots.len();
        self.slots
            .get_mut(slot)
            .ok_or(SlotError::OutOfRange { slot, slot_count })
    }

    fn binding(&self, slot: usize) -> Result<&SlotBinding, SlotError> {
        match self.slots.get(slot) {
            Some(Some(binding)) => Ok(binding),
            Some(None) => Err(SlotError::Unbound(slot)),
            None => Err(SlotError::OutOfRange {
                slot,
                slot_count: self.slots.len(),
            }),
        }
    }
}
