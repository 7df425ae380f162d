// libcalypso/src/config.rs

use crate::constants::{MAX_CONTRACTS, MAX_EVENTS};
use crate::protocol::ClassByte;
use crate::{Error, Result};

/// Reader settings applied to one card session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub class_byte: ClassByte,
    pub contract_slots: u8,
    pub event_slots: u8,
    pub read_counters: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            class_byte: ClassByte::Calypso,
            contract_slots: MAX_CONTRACTS as u8,
            event_slots: MAX_EVENTS as u8,
            read_counters: true,
        }
    }
}

impl ReaderConfig {
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.contract_slots as usize > MAX_CONTRACTS {
            return Err(Error::InvalidConfig(format!(
                "contract_slots {} exceeds {}",
                self.contract_slots, MAX_CONTRACTS
            )));
        }
        if self.event_slots as usize > MAX_EVENTS {
            return Err(Error::InvalidConfig(format!(
                "event_slots {} exceeds {}",
                self.event_slots, MAX_EVENTS
            )));
        }
        Ok(())
    }
}

/// Consuming builder for [`ReaderConfig`].
#[derive(Debug, Default)]
pub struct ReaderConfigBuilder {
    class_byte: Option<ClassByte>,
    contract_slots: Option<u8>,
    event_slots: Option<u8>,
    read_counters: Option<bool>,
}

impl ReaderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_byte(mut self, cla: ClassByte) -> Self {
        self.class_byte = Some(cla);
        self
    }

    pub fn contract_slots(mut self, n: u8) -> Self {
        self.contract_slots = Some(n);
        self
    }

    pub fn event_slots(mut self, n: u8) -> Self {
        self.event_slots = Some(n);
        self
    }

    pub fn read_counters(mut self, yes: bool) -> Self {
        self.read_counters = Some(yes);
        self
    }

    pub fn build(self) -> Result<ReaderConfig> {
        let defaults = ReaderConfig::default();
        let config = ReaderConfig {
            class_byte: self.class_byte.unwrap_or(defaults.class_byte),
            contract_slots: self.contract_slots.unwrap_or(defaults.contract_slots),
            event_slots: self.event_slots.unwrap_or(defaults.event_slots),
            read_counters: self.read_counters.unwrap_or(defaults.read_counters),
        };
        config.validate()?;
        Ok(config)
    }
}
