//! # Ring Module
//!
//! Integer arithmetic modulo `m`: the Euclidean helpers and the [`Ring`] value type
//! that the key generator and the cipher use for every modular operation.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd, mod_inverse};
pub use math::Ring;
