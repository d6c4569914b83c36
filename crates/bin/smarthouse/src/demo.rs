//! Demo scenario: three slots bound to light, air conditioner and
//! television, a few presses and undos, a channel change, then a "party"
//! macro executed and undone.

use std::sync::Arc;

use smarthouse_adapter_virtual::{CHANNEL, VirtualHome};
use smarthouse_app::command::{
    Command, DeviceCommand, MacroCommand, SetParameterCommand, SharedCommand,
};
use smarthouse_app::remote_control::RemoteControl;
use smarthouse_domain::error::SmartHouseError;

use crate::config::RemoteConfig;

/// What is left once the scenario has run.
pub struct Outcome {
    pub home: VirtualHome,
    /// Descriptions of the commands still on the remote's history.
    pub history: Vec<String>,
}

/// Run the scenario against a fresh [`VirtualHome`].
///
/// # Errors
///
/// Returns the first slot, device or undo error encountered, e.g. when the
/// configured remote has fewer than three slots.
pub fn run(config: &RemoteConfig) -> Result<Outcome, SmartHouseError> {
    let home = VirtualHome::default();
    let mut remote = RemoteControl::new(config.slot_count);

    let light_on: SharedCommand = Arc::new(DeviceCommand::turn_on(home.light.clone()));
    let light_off: SharedCommand = Arc::new(DeviceCommand::turn_off(home.light.clone()));
    let ac_on: SharedCommand = Arc::new(DeviceCommand::turn_on(home.air_conditioner.clone()));
    let ac_off: SharedCommand = Arc::new(DeviceCommand::turn_off(home.air_conditioner.clone()));
    let tv_on: SharedCommand = Arc::new(DeviceCommand::turn_on(home.television.clone()));
    let tv_off: SharedCommand = Arc::new(DeviceCommand::turn_off(home.television.clone()));

    remote.bind(0, light_on.clone(), light_off)?;
    remote.bind(1, ac_on.clone(), ac_off)?;
    remote.bind(2, tv_on.clone(), tv_off)?;

    for slot in 0..2 {
        remote.press_on(slot)?;
        remote.press_off(slot)?;
        remote.press_undo()?;
    }

    let news = SetParameterCommand::new(home.television.clone(), CHANNEL, 5);
    news.execute()?;
    news.undo()?;

    let party =
        MacroCommand::with_undo_order(vec![light_on, ac_on, tv_on], config.macro_undo_order);
    tracing::info!(order = %party.undo_order(), "running {}", party.description());
    party.execute()?;
    party.undo()?;

    Ok(Outcome {
        history: remote.history(),
        home,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smarthouse_domain::error::SlotError;
    use smarthouse_domain::power::PowerState;
    use smarthouse_domain::undo_order::UndoOrder;

    #[test]
    fn should_leave_everything_off_after_party_undo() {
        let outcome = run(&RemoteConfig::default()).unwrap();
        assert!(
            outcome
                .home
                .snapshots()
                .iter()
                .all(|s| s.power == PowerState::Off)
        );
    }

    #[test]
    fn should_keep_one_entry_per_undone_pair() {
        let outcome = run(&RemoteConfig::default()).unwrap();
        assert_eq!(
            outcome.history,
            ["Living Room Light: turn_on", "Air Conditioner: turn_on"]
        );
    }

    #[test]
    fn should_restore_channel_after_undo() {
        let outcome = run(&RemoteConfig::default()).unwrap();
        assert_eq!(outcome.home.television.channel(), 1);
    }

    #[test]
    fn should_run_with_reverse_macro_undo() {
        let config = RemoteConfig {
            slot_count: 3,
            macro_undo_order: UndoOrder::Reverse,
        };
        assert!(run(&config).is_ok());
    }

    #[test]
    fn should_fail_when_remote_is_too_small() {
        let config = RemoteConfig {
            slot_count: 2,
            macro_undo_order: UndoOrder::Forward,
        };
        let result = run(&config);
        assert!(matches!(
            result,
            Err(SmartHouseError::Slot(SlotError::OutOfRange { slot: 2, .. }))
        ));
    }
}
