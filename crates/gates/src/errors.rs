//! Errors for gate evaluation and bus conversion.

use thiserror::Error;

use crate::descriptor::{Arity, Gate};

/// Error while evaluating or describing a gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// A variadic gate was called with no inputs.
    ///
    /// The operation has no logical meaning for zero operands, so this is never coerced into a
    /// boolean result.
    #[error("undefined operation: {gate} called with no inputs")]
    UndefinedOperation {
        /// The gate that was called.
        gate: Gate,
    },

    /// A fixed-arity gate was called with the wrong number of inputs.
    #[error("{gate} expects {expected} input(s), got {got}")]
    ArityMismatch {
        /// The gate that was called.
        gate: Gate,
        /// The arity the gate accepts.
        expected: Arity,
        /// The number of inputs actually supplied.
        got: usize,
    },

    /// The string does not name any known gate.
    #[error("unknown gate: {0:?}")]
    UnknownGate(String),

    /// The requested truth table has more rows than we are willing to enumerate.
    #[error("truth table of arity {0} exceeds the maximum of {max}", max = crate::descriptor::MAX_TRUTH_TABLE_ARITY)]
    TruthTableTooLarge(usize),
}

/// Error while moving an integer onto a [`Bus`](crate::bus::Bus) or back off of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BusError {
    /// The integer has a set bit beyond the width of the bus.
    #[error("value {value:#x} does not fit on a {width}-bit bus")]
    Overflow {
        /// Width of the bus in bits.
        width: usize,
        /// The rejected value.
        value: u128,
    },

    /// The bus has a high signal beyond the width of the target integer.
    #[error("{width}-bit bus does not fit in a {target}-bit integer")]
    Truncated {
        /// Width of the bus in bits.
        width: usize,
        /// Width of the target integer in bits.
        target: usize,
    },
}
