// libcalypso/src/prelude.rs

pub use crate::card::{
    CalypsoCardBuilder, CalypsoCardData, CardDump, CardFamily, Contract, ContractSlot, Event,
};
pub use crate::config::ReaderConfig;
pub use crate::poller::{EventSink, FailReason, Poller, PollerEvent};
pub use crate::protocol::{ClassByte, Command, Response, StatusWord};
pub use crate::session::{CancelToken, CardSession, FileSource};
pub use crate::transport::Transport;
pub use crate::{Application, CardNumber, Dialect, Error, RecordId, Result, Timestamp};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
