// libcalypso/src/lib.rs

//! libcalypso
//!
//! Pure Rust reader for Calypso transit cards (Navigo, Opus and related
//! networks): the select/read APDU session and the EN1545 (Intercode)
//! presence-bitmap record decoder.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod poller;
pub mod prelude;
pub mod protocol;
pub mod schema;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
