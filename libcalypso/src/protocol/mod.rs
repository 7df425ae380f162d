// libcalypso/src/protocol/mod.rs

//! Calypso APDU encoding and response status handling.

pub mod commands;
pub mod parser;
pub mod responses;

pub use commands::*;
pub use responses::*;
