// libcalypso/src/card/decoder.rs

//! Schema-driven record decoding shared by every dialect.

use log::trace;

use crate::card::{Contract, Counter, Environment, Event, NetworkId};
use crate::constants::{ICC_CARD_NUMBER_BITS, MAX_CONTRACTS};
use crate::schema::{CounterLayout, Field, FieldSchema, Layout, SchemaSet};
use crate::types::{CardNumber, Dialect, RecordId, Timestamp};
use crate::utils::BitView;
use crate::{Error, Result};

/// Decodes raw record payloads with the schemas of one dialect.
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder {
    schemas: &'static SchemaSet,
}

/// Read `field` when the schema declares it and the record carries it.
fn optional(layout: &Layout<'_>, field: Field) -> Result<Option<u64>> {
    if !layout.schema().contains(field) {
        return Ok(None);
    }
    layout.read_present(field)
}

/// Day count plus an optional minute-of-day field.
fn date_with_time(layout: &Layout<'_>, date: Field, time: Field) -> Result<Option<Timestamp>> {
    let Some(days) = optional(layout, date)? else {
        return Ok(None);
    };
    let stamp = Timestamp::from_days(days)?;
    Ok(Some(match optional(layout, time)? {
        Some(minutes) => stamp.at_minute_of_day(minutes)?,
        None => stamp,
    }))
}

impl RecordDecoder {
    pub fn new(schemas: &'static SchemaSet) -> Self {
        Self { schemas }
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self::new(SchemaSet::for_dialect(dialect))
    }

    pub fn dialect(&self) -> Dialect {
        self.schemas.dialect
    }

    pub fn schemas(&self) -> &'static SchemaSet {
        self.schemas
    }

    fn layout<'a>(
        schema: &'static FieldSchema,
        payload: &'a [u8],
        record: RecordId,
    ) -> Result<Layout<'a>> {
        schema
            .evaluate(BitView::new(payload))
            .map_err(|e| e.in_record(record))
    }

    /// Card number from the ICC record.
    pub fn card_number(icc: &[u8]) -> Result<CardNumber> {
        let (start, end) = ICC_CARD_NUMBER_BITS;
        let n = BitView::new(icc)
            .slice_to_uint(start, end)
            .map_err(|e| e.in_record(RecordId::Icc))?;
        Ok(CardNumber::new(n as u32))
    }

    pub fn decode_environment(&self, payload: &[u8]) -> Result<Environment> {
        let record = RecordId::Environment;
        let layout = Self::layout(self.schemas.environment, payload, record)?;
        self.environment_fields(&layout)
            .map_err(|e| e.in_record(record))
    }

    fn environment_fields(&self, layout: &Layout<'_>) -> Result<Environment> {
        let network_id = NetworkId::new(layout.read(Field::EnvNetworkId)? as u32);
        Ok(Environment {
            country_code: network_id.country(),
            network_code: network_id.network(),
            app_version: layout.read(Field::EnvApplicationVersionNumber)? as u8,
            validity_end: Timestamp::from_days(
                layout.read(Field::EnvApplicationValidityEndDate)?,
            )?,
            holder_card_status: layout.read(Field::HolderDataCardStatus)? as u8,
            holder_commercial_id: layout.read(Field::HolderDataCommercialID)? as u16,
        })
    }

    /// Decode contract slot `index` (0-based). A zero leading bitmap means
    /// the slot holds no contract and yields `Ok(None)`.
    pub fn decode_contract(&self, index: u8, payload: &[u8]) -> Result<Option<Contract>> {
        let record = RecordId::Contract(index);
        let schema = self.schemas.contract;
        let width = schema
            .leading_bitmap()
            .map(|s| s.width as usize)
            .ok_or_else(|| Error::MalformedRecord {
                record,
                reason: format!("{} schema has no leading bitmap", schema.kind()),
            })?;
        let leading = BitView::new(payload)
            .read(0, width)
            .map_err(|e| e.in_record(record))?;
        if leading == 0 {
            return Ok(None);
        }
        trace!(
            "{} bitmap {}",
            record,
            BitView::new(payload).to_bit_string(0, width - 1)
        );

        let layout = Self::layout(schema, payload, record)?;
        self.contract_fields(&layout)
            .map(Some)
            .map_err(|e| e.in_record(record))
    }

    fn contract_fields(&self, layout: &Layout<'_>) -> Result<Contract> {
        let zones = optional(layout, Field::ContractValidityZones)?.map(|v| {
            let mut zones = [false; 5];
            for (k, zone) in zones.iter_mut().enumerate() {
                *zone = (v >> k) & 1 == 1;
            }
            zones
        });

        Ok(Contract {
            tariff: optional(layout, Field::ContractTariff)?.unwrap_or(0) as u16,
            provider: optional(layout, Field::ContractProvider)?.map(|v| v as u8),
            serial_number: optional(layout, Field::ContractSerialNumber)?.map(|v| v as u32),
            pay_method: optional(layout, Field::ContractPayMethod)?.map(|v| v as u16),
            price_amount: optional(layout, Field::ContractPriceAmount)?.map(|v| v as f32 / 100.0),
            validity_start: date_with_time(
                layout,
                Field::ContractValidityStartDate,
                Field::ContractValidityStartTime,
            )?,
            validity_end: date_with_time(
                layout,
                Field::ContractValidityEndDate,
                Field::ContractValidityEndTime,
            )?,
            zones,
            sale_date: date_with_time(
                layout,
                Field::ContractValiditySaleDate,
                Field::ContractValiditySaleTime,
            )?,
            sale_agent: layout.read(Field::ContractValiditySaleAgent)? as u32,
            sale_device: optional(layout, Field::ContractValiditySaleDevice)?.map(|v| v as u32),
            status: optional(layout, Field::ContractStatus)?.map(|v| v as u16),
            authenticator: optional(layout, Field::ContractAuthenticator)?.map(|v| v as u32),
            counter: None,
        })
    }

    /// Decode event slot `index` (0-based).
    pub fn decode_event(&self, index: u8, payload: &[u8]) -> Result<Event> {
        let record = RecordId::Event(index);
        let layout = Self::layout(self.schemas.event, payload, record)?;
        self.event_fields(&layout).map_err(|e| e.in_record(record))
    }

    fn event_fields(&self, layout: &Layout<'_>) -> Result<Event> {
        let code = optional(layout, Field::EventCode)?.unwrap_or(0);
        let date = Timestamp::from_days(layout.read(Field::EventDateStamp)?)?
            .at_minute_of_day(layout.read(Field::EventTimeStamp)?)?;

        let location = optional(layout, Field::EventLocationId)?;
        let device = optional(layout, Field::EventDevice)?;
        let bus_device = device.map(|v| v >> 8);

        Ok(Event {
            transport_type: (code >> 4) as u8,
            transition: (code & 15) as u8,
            service_provider: optional(layout, Field::EventServiceProvider)?.unwrap_or(0) as u16,
            station_group_id: location.map(|v| (v >> 9) as u16),
            station_id: location.map(|v| ((v >> 4) & 31) as u8),
            location_gate: optional(layout, Field::EventLocationGate)?.map(|v| v as u16),
            device: device.map(|v| v as u16),
            door: bus_device.map(|b| (b / 2 + 1) as u8),
            side: bus_device.map(|b| (b % 2) as u8),
            route_number: optional(layout, Field::EventRouteNumber)?.map(|v| v as u16),
            mission: optional(layout, Field::EventJourneyRun)?.map(|v| v as u16),
            vehicle_id: optional(layout, Field::EventVehicleId)?.map(|v| v as u32),
            used_contract: optional(layout, Field::EventContractPointer)?.map(|v| v as u8),
            date,
            first_stamp: date_with_time(
                layout,
                Field::EventDataDateFirstStamp,
                Field::EventDataTimeFirstStamp,
            )?,
        })
    }

    /// Decode the Navigo counters record, one entry per contract slot.
    pub fn decode_counters(payload: &[u8]) -> Result<[Counter; MAX_CONTRACTS]> {
        let layout = CounterLayout::NAVIGO;
        let bits = BitView::new(payload);
        let mut counters = [Counter {
            count: 0,
            relative_first_stamp_15mn: 0,
        }; MAX_CONTRACTS];
        for (i, counter) in counters.iter_mut().enumerate().take(layout.entries) {
            let (offset, width) = layout.count_at(i);
            let count = bits.read(offset, width);
            let (offset, width) = layout.stamp_at(i);
            let stamp = bits.read(offset, width);
            *counter = Counter {
                count: count.map_err(|e| e.in_record(RecordId::Counters))? as u8,
                relative_first_stamp_15mn: stamp.map_err(|e| e.in_record(RecordId::Counters))?
                    as u32,
            };
        }
        Ok(counters)
    }
}
