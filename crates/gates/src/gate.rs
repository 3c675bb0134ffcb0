//! This module provides the canonical logic gates, each derived from the [`nand`] primitive.
//!
//! No gate other than NAND looks at its input values directly: every other gate is a composition
//! of NAND, or of gates that are themselves compositions of NAND.

use crate::{descriptor::Gate, errors::GateError};

/// Evaluates the NAND truth table over every input the iterator yields.
///
/// Panics if the iterator is empty.
fn nand_all(inputs: impl IntoIterator<Item = bool>) -> bool {
    let mut inputs = inputs.into_iter().peekable();
    if inputs.peek().is_none() {
        undefined_operation(Gate::Nand);
    }

    inputs.any(|input| !input)
}

#[cold]
fn undefined_operation(gate: Gate) -> ! {
    panic!("{}", GateError::UndefinedOperation { gate })
}

/// NAND over all inputs: `false` iff every input is `true`.
///
/// # Panics
///
/// Panics if `inputs` is empty. NAND of zero operands is undefined, and every other gate in this
/// module inherits this failure unchanged.
pub fn nand(inputs: &[bool]) -> bool {
    nand_all(inputs.iter().copied())
}

/// Negation of a single input, computed as a one-input NAND.
pub fn not(input: bool) -> bool {
    nand_all([input])
}

/// Conjunction of all inputs: `NOT(NAND(inputs))`.
///
/// # Panics
///
/// Panics if `inputs` is empty.
pub fn and(inputs: &[bool]) -> bool {
    not(nand(inputs))
}

/// Disjunction of all inputs: `NAND(NOT(x1), ..., NOT(xn))`.
///
/// # Panics
///
/// Panics if `inputs` is empty.
pub fn or(inputs: &[bool]) -> bool {
    nand_all(inputs.iter().map(|&input| not(input)))
}

/// Negated disjunction of all inputs: `NOT(OR(inputs))`.
///
/// # Panics
///
/// Panics if `inputs` is empty.
pub fn nor(inputs: &[bool]) -> bool {
    not(or(inputs))
}

/// Parity of the inputs: `true` iff an odd number of them are `true`.
///
/// Reduces left to right with the two-input network `AND(OR(a, b), NAND(a, b))`. A single input is
/// returned as is.
///
/// # Panics
///
/// Panics if `inputs` is empty.
pub fn xor(inputs: &[bool]) -> bool {
    match inputs.split_first() {
        Some((&first, rest)) => rest.iter().fold(first, |acc, &input| xor_pair(acc, input)),
        // rejected by the primitive
        None => nand(inputs),
    }
}

fn xor_pair(a: bool, b: bool) -> bool {
    and(&[or(&[a, b]), nand(&[a, b])])
}

/// Negated parity of the inputs: `NOT(XOR(inputs))`.
///
/// # Panics
///
/// Panics if `inputs` is empty.
pub fn xnor(inputs: &[bool]) -> bool {
    not(xor(inputs))
}
