//! Runtime descriptors for the gates in [`crate::gate`].
//!
//! [`Gate`] names a gate so that callers can pick one at runtime, for instance from a config file,
//! and evaluate it with an arity check instead of a panic.

use std::{fmt, str::FromStr};

use proptest_derive::Arbitrary;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::GateError, gate};

/// Largest arity [`Gate::truth_table`] will enumerate.
pub const MAX_TRUTH_TABLE_ARITY: usize = 16;

/// A row of a truth table: the inputs and the gate's output for them.
pub type TruthTableRow = (Vec<bool>, bool);

/// The seven canonical logic gates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Arbitrary,
)]
#[serde(rename_all = "lowercase")]
pub enum Gate {
    /// The primitive every other gate is built from.
    Nand,
    /// Single-input negation.
    Not,
    /// Conjunction.
    And,
    /// Disjunction.
    Or,
    /// Negated disjunction.
    Nor,
    /// Parity.
    Xor,
    /// Negated parity.
    Xnor,
}

/// Number of inputs a gate accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many inputs.
    Exactly(usize),
    /// This many inputs or more.
    AtLeast(usize),
}

impl Arity {
    /// Whether a gate of this arity can be called with `n` inputs.
    pub const fn accepts(&self, n: usize) -> bool {
        match *self {
            Arity::Exactly(expected) => n == expected,
            Arity::AtLeast(min) => n >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

impl Gate {
    /// All gates, in the order they are derived from one another.
    pub const ALL: [Gate; 7] = [
        Gate::Nand,
        Gate::Not,
        Gate::And,
        Gate::Or,
        Gate::Nor,
        Gate::Xor,
        Gate::Xnor,
    ];

    /// Canonical upper-case name of the gate.
    pub const fn name(&self) -> &'static str {
        match self {
            Gate::Nand => "NAND",
            Gate::Not => "NOT",
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Nor => "NOR",
            Gate::Xor => "XOR",
            Gate::Xnor => "XNOR",
        }
    }

    /// Number of inputs the gate accepts.
    pub const fn arity(&self) -> Arity {
        match self {
            Gate::Not => Arity::Exactly(1),
            _ => Arity::AtLeast(1),
        }
    }

    /// Evaluates the gate.
    ///
    /// # Panics
    ///
    /// Panics if the number of inputs is not accepted by [`Gate::arity`]. Use [`Gate::try_eval`]
    /// when the input count is not known to be valid.
    pub fn eval(&self, inputs: &[bool]) -> bool {
        match self {
            Gate::Nand => gate::nand(inputs),
            Gate::Not => match inputs {
                [input] => gate::not(*input),
                _ => panic!("{}", self.arity_error(inputs.len())),
            },
            Gate::And => gate::and(inputs),
            Gate::Or => gate::or(inputs),
            Gate::Nor => gate::nor(inputs),
            Gate::Xor => gate::xor(inputs),
            Gate::Xnor => gate::xnor(inputs),
        }
    }

    /// Evaluates the gate after checking the input count against [`Gate::arity`].
    pub fn try_eval(&self, inputs: &[bool]) -> Result<bool, GateError> {
        self.check_arity(inputs.len()).inspect_err(|err| {
            debug!(gate = %self, inputs = inputs.len(), %err, "rejected gate evaluation")
        })?;

        Ok(self.eval(inputs))
    }

    /// Enumerates every row of the gate's truth table for the given arity.
    ///
    /// Rows are in ascending binary order with the first input as the most significant bit.
    pub fn truth_table(&self, arity: usize) -> Result<Vec<TruthTableRow>, GateError> {
        self.check_arity(arity)
            .and_then(|()| {
                if arity > MAX_TRUTH_TABLE_ARITY {
                    return Err(GateError::TruthTableTooLarge(arity));
                }
                Ok(())
            })
            .inspect_err(|err| debug!(gate = %self, %arity, %err, "rejected truth table"))?;

        Ok((0..1usize << arity)
            .map(|row| {
                let inputs: Vec<bool> = (0..arity)
                    .map(|i| (row >> (arity - 1 - i)) & 1 == 1)
                    .collect();
                let output = self.eval(&inputs);
                (inputs, output)
            })
            .collect())
    }

    fn check_arity(&self, n: usize) -> Result<(), GateError> {
        if self.arity().accepts(n) {
            return Ok(());
        }

        Err(self.arity_error(n))
    }

    fn arity_error(&self, got: usize) -> GateError {
        match self.arity() {
            Arity::AtLeast(_) => GateError::UndefinedOperation { gate: *self },
            expected @ Arity::Exactly(_) => GateError::ArityMismatch {
                gate: *self,
                expected,
                got,
            },
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gate::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GateError::UnknownGate(s.to_owned()))
    }
}
