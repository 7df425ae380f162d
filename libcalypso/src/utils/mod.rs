//! Utilities for libcalypso: small, reusable helpers used across the crate.
//!
//! `bits` holds the MSB-first bit view every record decoder is built on;
//! `hex` is used for APDU logging and the dump text format.

pub mod bits;
pub mod hex;

pub use bits::BitView;
pub use hex::*;
