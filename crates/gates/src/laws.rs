//! Laws every gate in this crate obeys, packaged as proptest checks.
//!
//! Each check returns a [`TestCaseError`] naming the offending gate and inputs, so it can be used
//! directly inside a `proptest!` block with `?`.

use proptest::prelude::TestCaseError;

use crate::descriptor::Gate;

/// Reordering the inputs of a gate must not change its output.
pub fn permutation_invariant(
    gate: Gate,
    inputs: &[bool],
    permuted: &[bool],
) -> Result<(), TestCaseError> {
    let lhs = gate.eval(inputs);
    let rhs = gate.eval(permuted);
    if lhs != rhs {
        return Err(TestCaseError::fail(format!(
            "{gate} is not symmetric: {inputs:?} -> {lhs}, {permuted:?} -> {rhs}"
        )));
    }
    Ok(())
}

/// `negative` must be the exact negation of `positive` on the same inputs.
pub fn negation_pair(positive: Gate, negative: Gate, inputs: &[bool]) -> Result<(), TestCaseError> {
    let lhs = positive.eval(inputs);
    let rhs = negative.eval(inputs);
    if lhs == rhs {
        return Err(TestCaseError::fail(format!(
            "{negative} is not the negation of {positive} on {inputs:?}: both are {lhs}"
        )));
    }
    Ok(())
}

/// The gate must agree with a reference function that inspects the inputs directly.
pub fn matches_reference(
    gate: Gate,
    inputs: &[bool],
    reference: impl Fn(&[bool]) -> bool,
) -> Result<(), TestCaseError> {
    let actual = gate.eval(inputs);
    let expected = reference(inputs);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "{gate} on {inputs:?} gave {actual}, expected {expected}"
        )));
    }
    Ok(())
}
