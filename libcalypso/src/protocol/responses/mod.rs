// libcalypso/src/protocol/responses/mod.rs

pub mod status;

pub use status::{SW, StatusKind, StatusWord};

use crate::constants::STATUS_WORD_LEN;
use crate::protocol::parser;
use crate::{Error, Result};

/// A card response split into its payload and trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub payload: Vec<u8>,
    pub status: StatusWord,
}

impl Response {
    /// Split a raw response. Fails with `InvalidLength` when fewer than the
    /// two status bytes are present. The status word is not checked.
    pub fn split(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, STATUS_WORD_LEN)?;
        let at = data.len() - STATUS_WORD_LEN;
        let sw = parser::slice_at(data, at, STATUS_WORD_LEN)?;
        Ok(Self {
            payload: data[..at].to_vec(),
            status: StatusWord::new(sw[0], sw[1]),
        })
    }

    /// Split a raw response and require `90 00`.
    pub fn decode(data: &[u8]) -> Result<Self> {
        let response = Self::split(data)?;
        if !response.status.is_success() {
            return Err(Error::StatusWord {
                status: response.status,
            });
        }
        Ok(response)
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}
