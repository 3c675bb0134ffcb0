//! Fixed-width collections of parallel signals.

use std::fmt;

use tracing::trace;

use crate::errors::BusError;

/// `N` parallel signals that can be read from or written to as an unsigned integer.
///
/// Bit 0 is the least significant signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bus<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Bus<N> {
    /// Creates a bus carrying the given signals, least significant first.
    pub const fn new(bits: [bool; N]) -> Self {
        Self { bits }
    }

    /// Width of the bus in bits.
    pub const fn width(&self) -> usize {
        N
    }

    /// All signals on the bus, least significant first.
    pub const fn bits(&self) -> &[bool; N] {
        &self.bits
    }

    /// The signal at position `i`, if the bus is that wide.
    pub fn bit(&self, i: usize) -> Option<bool> {
        self.bits.get(i).copied()
    }

    /// Number of high signals on the bus.
    pub fn count_high(&self) -> usize {
        self.bits.iter().filter(|bit| **bit).count()
    }
}

impl<const N: usize> Default for Bus<N> {
    fn default() -> Self {
        Self { bits: [false; N] }
    }
}

impl<const N: usize> From<[bool; N]> for Bus<N> {
    fn from(bits: [bool; N]) -> Self {
        Self::new(bits)
    }
}

impl<const N: usize> fmt::Display for Bus<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bits
            .iter()
            .rev()
            .try_for_each(|bit| f.write_str(if *bit { "1" } else { "0" }))
    }
}

macro_rules! impl_int_conversions {
    ($($int:ty),+ $(,)?) => {
        $(
            impl<const N: usize> TryFrom<$int> for Bus<N> {
                type Error = BusError;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    let significant = (<$int>::BITS - value.leading_zeros()) as usize;
                    if significant > N {
                        trace!(width = N, %value, "integer does not fit on bus");
                        return Err(BusError::Overflow {
                            width: N,
                            value: value.into(),
                        });
                    }

                    Ok(Self {
                        bits: std::array::from_fn(|i| i < significant && (value >> i) & 1 == 1),
                    })
                }
            }

            impl<const N: usize> TryFrom<Bus<N>> for $int {
                type Error = BusError;

                fn try_from(bus: Bus<N>) -> Result<Self, Self::Error> {
                    let target = <$int>::BITS as usize;
                    if bus.bits.iter().skip(target).any(|bit| *bit) {
                        trace!(width = N, target_bits = target, "bus does not fit in integer");
                        return Err(BusError::Truncated { width: N, target });
                    }

                    Ok(bus
                        .bits
                        .iter()
                        .enumerate()
                        .filter(|(_, bit)| **bit)
                        .fold(0, |acc, (i, _)| acc | (1 << i)))
                }
            }
        )+
    };
}

impl_int_conversions!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn u8_lands_least_significant_first() {
        let bus = Bus::<8>::try_from(0b0000_0110u8).expect("fits");

        assert_eq!(
            bus.bits(),
            &[false, true, true, false, false, false, false, false]
        );
        assert_eq!(bus.to_string(), "00000110");
        assert_eq!(bus.count_high(), 2);
        assert_eq!(bus.bit(1), Some(true));
        assert_eq!(bus.bit(8), None);
    }

    #[test]
    fn wide_bus_pads_with_low_signals() {
        let bus = Bus::<16>::try_from(0xffu8).expect("fits");

        assert_eq!(bus.width(), 16);
        assert_eq!(bus.to_string(), "0000000011111111");
        assert_eq!(u16::try_from(bus), Ok(0x00ff));
    }

    #[test]
    fn narrow_bus_accepts_small_values_of_wide_types() {
        let bus = Bus::<4>::try_from(0b1010u32).expect("fits");

        assert_eq!(bus, Bus::new([false, true, false, true]));
        assert_eq!(u8::try_from(bus), Ok(0b1010));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            Bus::<4>::try_from(0b1_0000u8),
            Err(BusError::Overflow {
                width: 4,
                value: 0x10
            })
        );
        assert_eq!(
            BusError::Overflow {
                width: 4,
                value: 0x10
            }
            .to_string(),
            "value 0x10 does not fit on a 4-bit bus"
        );
    }

    #[test]
    fn truncation_is_rejected() {
        let mut bits = [false; 16];
        bits[12] = true;

        assert_eq!(
            u8::try_from(Bus::new(bits)),
            Err(BusError::Truncated {
                width: 16,
                target: 8
            })
        );
        assert_eq!(u16::try_from(Bus::new(bits)), Ok(1 << 12));
    }

    #[test]
    fn default_bus_is_low() {
        let bus = Bus::<32>::default();

        assert_eq!(bus.count_high(), 0);
        assert_eq!(u32::try_from(bus), Ok(0));
    }

    proptest! {
        #[test]
        fn u32_survives_a_32_bit_bus(value in any::<u32>()) {
            let bus = Bus::<32>::try_from(value).expect("32 bits always fit");
            prop_assert_eq!(bus.count_high(), value.count_ones() as usize);
            prop_assert_eq!(u32::try_from(bus), Ok(value));
        }
    }
}
