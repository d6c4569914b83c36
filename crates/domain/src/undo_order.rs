//! Undo order: how a composite command replays its components on undo.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Order in which a macro command undoes its components.
///
/// [`Forward`](Self::Forward) undoes components in the same order they were
/// executed. [`Reverse`](Self::Reverse) undoes the last executed component
/// first, which is the true inverse of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndoOrder {
    #[default]
    Forward,
    Reverse,
}

impl std::fmt::Display for UndoOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Reverse => f.write_str("reverse"),
        }
    }
}

/// Returned when a string is neither `forward` nor `reverse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown undo order {0:?}, expected \"forward\" or \"reverse\"")]
pub struct ParseUndoOrderError(pub String);

impl FromStr for UndoOrder {
    type Err = ParseUndoOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            _ => Err(ParseUndoOrderError(s.to_string())),
        }
    }
}
