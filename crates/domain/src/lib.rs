//! # smarthouse-domain
//!
//! Pure domain model for the smarthouse remote control.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Services** (the operations a device can be asked to perform:
//!   `turn_on`, `turn_off`, `set_parameter`)
//! - Define **Power state** and the serialisable **Device snapshot**
//! - Define the **Undo order** policy used by composite commands
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The device collaborator and the command abstraction are expressed as
//! traits in the `app` crate.

pub mod device;
pub mod error;
pub mod id;
pub mod power;
pub mod service;
pub mod time;
pub mod undo_order;
