// libcalypso/src/protocol/commands/mod.rs

pub mod read;
pub mod select;

pub use read::encode_read_record;
pub use select::encode_select;

use crate::constants::{CALYPSO_CLA, INS_READ_RECORD, INS_SELECT, ISO_CLA};

/// Class byte placed at the head of every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassByte {
    /// 0x94, the Calypso proprietary class
    #[default]
    Calypso,
    /// 0x00, plain ISO 7816-4
    Iso,
}

impl ClassByte {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Calypso => CALYPSO_CLA,
            Self::Iso => ISO_CLA,
        }
    }
}

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select { directory: u8, app: u8 },
    ReadRecord { record: u8 },
}

impl Command {
    /// Return the instruction byte (INS) of the command.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::Select { .. } => INS_SELECT,
            Self::ReadRecord { .. } => INS_READ_RECORD,
        }
    }

    /// Encode the command into the raw APDU bytes. Each call builds a fresh
    /// buffer from the constant templates.
    pub fn encode(&self, cla: ClassByte) -> Vec<u8> {
        match self {
            Self::Select { directory, app } => encode_select(cla, *directory, *app).to_vec(),
            Self::ReadRecord { record } => encode_read_record(cla, *record).to_vec(),
        }
    }

    pub fn select(app: crate::types::Application) -> Self {
        let (directory, app) = app.path();
        Self::Select { directory, app }
    }
}
