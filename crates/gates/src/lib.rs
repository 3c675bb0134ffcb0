//! Logic gates derived from a single NAND primitive.
//!
//! Every variadic gate takes a non-empty slice of inputs. Calling one with no inputs is a
//! programming error and panics; [`Gate::try_eval`] offers a checked alternative.
//!
//! ```
//! # #![allow(unused_crate_dependencies)]
//! use logic_gates::{xor, Bus, Gate};
//!
//! assert!(xor(&[true, true, true]));
//! assert_eq!("xnor".parse::<Gate>().unwrap().try_eval(&[true, false]), Ok(false));
//!
//! let a = Bus::<8>::try_from(0b1100u8).unwrap();
//! let b = Bus::<8>::try_from(0b1010u8).unwrap();
//! assert_eq!(u8::try_from(a ^ b), Ok(0b0110));
//! ```

pub mod bus;
pub mod descriptor;
pub mod errors;
pub mod gate;
pub mod laws;
pub mod word;

pub use bus::Bus;
pub use descriptor::{Arity, Gate, TruthTableRow, MAX_TRUTH_TABLE_ARITY};
pub use errors::{BusError, GateError};
pub use gate::{and, nand, nor, not, or, xnor, xor};
