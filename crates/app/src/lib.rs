//! # smarthouse-app
//!
//! Application layer: the command abstraction, the invoker and the
//! **port definition** for devices.
//!
//! ## Responsibilities
//! - Define the **device port** ([`ports::Device`]) that adapters implement
//! - Define the [`command::Command`] capability (`execute` / `undo`) and its
//!   concrete forms: device commands, parameter commands, macro commands
//! - Provide the [`remote_control::RemoteControl`] invoker: a fixed table of
//!   slots bound to on/off command pairs plus an unbounded undo history
//!
//! ## Dependency rule
//! Depends on `smarthouse-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod command;
pub mod ports;
pub mod remote_control;

#[cfg(test)]
mod testing;
