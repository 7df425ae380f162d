// libcalypso/src/card/builder.rs

//! Drives the fixed read sequence and assembles [`CalypsoCardData`].

use log::{debug, info, warn};

use crate::card::{
    CalypsoCardData, CardDump, CardFamily, Classification, ContractSlot, DumpSource, Recorder,
    RecordDecoder,
};
use crate::config::ReaderConfig;
use crate::constants::{MAX_CONTRACTS, MAX_EVENTS};
use crate::session::FileSource;
use crate::types::{Application, RecordId};
use crate::{Error, Result};

/// Builds a card from any [`FileSource`].
///
/// ```
/// use libcalypso::card::CalypsoCardBuilder;
/// use libcalypso::config::ReaderConfig;
///
/// let config = ReaderConfig::builder().event_slots(1).build().unwrap();
/// let builder = CalypsoCardBuilder::with_config(config);
/// assert_eq!(builder.config().event_slots, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalypsoCardBuilder {
    config: ReaderConfig,
}

/// Turn a record-local decoding failure into `None` with a warning.
fn degrade<T>(record: RecordId, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_record_local() => {
            warn!("{} unavailable: {}", record, e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl CalypsoCardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Run the read sequence against `source`.
    ///
    /// Any select or read failure aborts the build. Malformed environment,
    /// contract, counters or event records only degrade their own slot. An
    /// ICC record too short for the card number is fatal.
    pub fn build<S: FileSource + ?Sized>(&self, source: &mut S) -> Result<CalypsoCardData> {
        self.config.validate()?;

        source.select(Application::Icc)?;
        let icc = source.read_record(1)?;
        let card_number = RecordDecoder::card_number(&icc)?;
        debug!("card number {}", card_number);

        source.select(Application::Ticketing)?;
        source.select(Application::Environment)?;
        let env = source.read_record(1)?;

        let family = match Classification::probe(&env) {
            Ok(c) => {
                if c.family == CardFamily::Unknown {
                    let err = Error::UnknownDialect {
                        country: c.country(),
                        network: c.network(),
                    };
                    warn!("{}", err);
                }
                c.family
            }
            Err(e) => {
                warn!("environment too short to classify: {}", e);
                CardFamily::Unknown
            }
        };

        let Some(dialect) = family.dialect() else {
            info!("{} card {}: no record decoder, stopping", family, card_number);
            return Ok(CalypsoCardData::unidentified(card_number, family));
        };
        info!("{} card {}", family, card_number);

        let decoder = RecordDecoder::for_dialect(dialect);
        let environment = degrade(RecordId::Environment, decoder.decode_environment(&env))?;

        let mut contracts: [ContractSlot; MAX_CONTRACTS] = Default::default();
        let mut contract_count = 0u8;
        if self.config.contract_slots > 0 {
            source.select(Application::Contracts)?;
            for index in 0..self.config.contract_slots {
                let payload = source.read_record(index + 1)?;
                let slot = &mut contracts[index as usize];
                match degrade(
                    RecordId::Contract(index),
                    decoder.decode_contract(index, &payload),
                )? {
                    Some(Some(contract)) => {
                        *slot = ContractSlot::Present(contract);
                        contract_count += 1;
                    }
                    Some(None) => {
                        debug!("contract {} empty, scan ends", index);
                        break;
                    }
                    None => *slot = ContractSlot::Unavailable,
                }
            }
        }

        if dialect.has_counters() && self.config.read_counters {
            source.select(Application::Counters)?;
            let payload = source.read_record(1)?;
            if let Some(counters) =
                degrade(RecordId::Counters, RecordDecoder::decode_counters(&payload))?
            {
                for (slot, counter) in contracts.iter_mut().zip(counters) {
                    if let ContractSlot::Present(contract) = slot {
                        contract.counter = Some(counter);
                    }
                }
            }
        }

        let mut events = [None; MAX_EVENTS];
        if self.config.event_slots > 0 {
            source.select(Application::Events)?;
            for index in 0..self.config.event_slots {
                let payload = source.read_record(index + 1)?;
                events[index as usize] =
                    degrade(RecordId::Event(index), decoder.decode_event(index, &payload))?;
            }
        }

        Ok(CalypsoCardData {
            card_number,
            family,
            environment,
            contracts,
            events,
            contract_count,
        })
    }

    /// Build while recording every payload read.
    pub fn build_recorded<S: FileSource>(&self, source: S) -> Result<(CalypsoCardData, CardDump)> {
        let mut recorder = Recorder::new(source);
        let card = self.build(&mut recorder)?;
        Ok((card, recorder.into_dump()))
    }

    /// Decode a dump with this builder's configuration.
    pub fn replay(&self, dump: &CardDump) -> Result<CalypsoCardData> {
        self.build(&mut DumpSource::new(dump))
    }

    /// Decode a dump, reading exactly the records it holds.
    pub fn from_dump(dump: &CardDump) -> Result<CalypsoCardData> {
        let slots = |n: usize, what: &str| {
            u8::try_from(n)
                .map_err(|_| Error::Dump(format!("too many {} records: {}", what, n)))
        };
        let config = ReaderConfig::builder()
            .contract_slots(slots(dump.contracts.len(), "contract")?)
            .event_slots(slots(dump.events.len(), "event")?)
            .read_counters(dump.counters.is_some())
            .build()?;
        Self::with_config(config).replay(dump)
    }
}
