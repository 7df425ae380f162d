// libcalypso/src/protocol/responses/status.rs

//! ISO 7816-4 status words trailing every card response.

use std::fmt;

/// Status word constants seen on Calypso cards
pub struct SW;

impl SW {
    pub const SUCCESS: u16 = 0x9000;
    pub const WRONG_LENGTH: u16 = 0x6700;
    pub const SECURITY_STATUS_NOT_SATISFIED: u16 = 0x6982;
    pub const CONDITIONS_NOT_SATISFIED: u16 = 0x6985;
    pub const FUNCTION_NOT_SUPPORTED: u16 = 0x6A81;
    pub const FILE_NOT_FOUND: u16 = 0x6A82;
    pub const RECORD_NOT_FOUND: u16 = 0x6A83;
    pub const WRONG_P1_P2: u16 = 0x6B00;
    pub const INS_NOT_SUPPORTED: u16 = 0x6D00;
    pub const CLA_NOT_SUPPORTED: u16 = 0x6E00;
}

/// Coarse classification of a status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    FileNotFound,
    SecurityDenied,
    Other,
}

/// SW1/SW2 pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord {
    pub sw1: u8,
    pub sw2: u8,
}

impl StatusWord {
    pub const OK: Self = Self::new(0x90, 0x00);

    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self { sw1, sw2 }
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes([self.sw1, self.sw2])
    }

    pub fn is_success(&self) -> bool {
        self.as_u16() == SW::SUCCESS
    }

    pub fn kind(&self) -> StatusKind {
        match self.as_u16() {
            SW::SUCCESS => StatusKind::Success,
            SW::FILE_NOT_FOUND => StatusKind::FileNotFound,
            SW::SECURITY_STATUS_NOT_SATISFIED => StatusKind::SecurityDenied,
            _ => StatusKind::Other,
        }
    }

    /// Short human description, used in error logs.
    pub fn meaning(&self) -> &'static str {
        match self.as_u16() {
            SW::SUCCESS => "success",
            SW::WRONG_LENGTH => "wrong length",
            SW::SECURITY_STATUS_NOT_SATISFIED => "security status not satisfied",
            SW::CONDITIONS_NOT_SATISFIED => "conditions of use not satisfied",
            SW::FUNCTION_NOT_SUPPORTED => "function not supported",
            SW::FILE_NOT_FOUND => "file not found",
            SW::RECORD_NOT_FOUND => "record not found",
            SW::WRONG_P1_P2 => "wrong parameters p1/p2",
            SW::INS_NOT_SUPPORTED => "instruction not supported",
            SW::CLA_NOT_SUPPORTED => "class not supported",
            _ => "unknown status",
        }
    }
}

impl From<u16> for StatusWord {
    fn from(v: u16) -> Self {
        let [sw1, sw2] = v.to_be_bytes();
        Self { sw1, sw2 }
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}", self.sw1, self.sw2)
    }
}
