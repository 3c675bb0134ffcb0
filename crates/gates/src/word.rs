//! Word-level gates: each gate applied bit by bit across [`Bus`]es of equal width.

use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{
    bus::Bus,
    descriptor::Gate,
    gate::{and, nand, nor, not, or, xnor, xor},
};

fn per_bit<const N: usize>(a: &Bus<N>, b: &Bus<N>, gate: fn(&[bool]) -> bool) -> Bus<N> {
    let (a, b) = (a.bits(), b.bits());
    Bus::new(std::array::from_fn(|i| gate(&[a[i], b[i]])))
}

/// Performs a NOT operation on an N bit word.
pub fn not_n<const N: usize>(a: &Bus<N>) -> Bus<N> {
    let a = a.bits();
    Bus::new(std::array::from_fn(|i| not(a[i])))
}

/// Performs a NAND operation on two N bit words.
pub fn nand_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, nand)
}

/// Performs an AND operation on two N bit words.
pub fn and_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, and)
}

/// Performs an OR operation on two N bit words.
pub fn or_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, or)
}

/// Performs a NOR operation on two N bit words.
pub fn nor_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, nor)
}

/// Performs an XOR operation on two N bit words.
pub fn xor_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, xor)
}

/// Performs an XNOR operation on two N bit words.
pub fn xnor_n<const N: usize>(a: &Bus<N>, b: &Bus<N>) -> Bus<N> {
    per_bit(a, b, xnor)
}

/// Evaluates `gate` with every signal on the bus as one of its inputs.
///
/// # Panics
///
/// Panics under the same conditions as [`Gate::eval`]: a zero-width bus is undefined for every
/// variadic gate, and NOT only accepts a one-bit bus.
pub fn reduce<const N: usize>(gate: Gate, bus: &Bus<N>) -> bool {
    gate.eval(bus.bits())
}

impl<const N: usize> Not for Bus<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        not_n(&self)
    }
}

impl<const N: usize> BitAnd for Bus<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        and_n(&self, &rhs)
    }
}

impl<const N: usize> BitOr for Bus<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        or_n(&self, &rhs)
    }
}

impl<const N: usize> BitXor for Bus<N> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        xor_n(&self, &rhs)
    }
}
