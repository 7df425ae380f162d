// libcalypso/src/schema/opus.rs

//! Opus (Montreal) record tables.
//!
//! The environment keeps the Intercode prefix (version, env bitmap, network
//! id first) so the network probe reads the same bits on both dialects.

use super::Field::*;
use super::{FieldSchema, FieldSpec, SchemaKind};

const fn leaf(field: super::Field, width: u16) -> FieldSpec {
    FieldSpec::leaf(field, width)
}

const fn bitmap(field: super::Field, width: u16) -> FieldSpec {
    FieldSpec::bitmap(field, width)
}

const ENVIRONMENT: &[FieldSpec] = &[
    leaf(EnvApplicationVersionNumber, 6),
    bitmap(EnvBitmap, 7),
    leaf(EnvNetworkId, 24).under(EnvBitmap, 0),
    leaf(EnvApplicationIssuerId, 8).under(EnvBitmap, 1),
    leaf(EnvApplicationValidityEndDate, 14).under(EnvBitmap, 2),
    leaf(EnvPayMethod, 11).under(EnvBitmap, 3),
    leaf(EnvAuthenticator, 16).under(EnvBitmap, 4),
    leaf(EnvSelectList, 32).under(EnvBitmap, 5),
    leaf(EnvDataCardStatus, 1).under(EnvBitmap, 6),
    bitmap(HolderBitmap, 3),
    leaf(HolderBirthDate, 32).under(HolderBitmap, 0),
    bitmap(HolderData, 2).under(HolderBitmap, 1),
    leaf(HolderDataCardStatus, 4).under(HolderData, 0),
    leaf(HolderDataCommercialID, 6).under(HolderData, 1),
    leaf(HolderCompany, 32).under(HolderBitmap, 2),
];

const CONTRACT: &[FieldSpec] = &[
    bitmap(ContractBitmap, 7),
    leaf(ContractProvider, 8).under(ContractBitmap, 0),
    leaf(ContractTariff, 16).under(ContractBitmap, 1),
    bitmap(ContractValidityInfoBitmap, 2).under(ContractBitmap, 2),
    leaf(ContractValidityStartDate, 14).under(ContractValidityInfoBitmap, 0),
    leaf(ContractValidityEndDate, 14).under(ContractValidityInfoBitmap, 1),
    bitmap(ContractSaleData, 4).under(ContractBitmap, 3),
    leaf(ContractValiditySaleDate, 14).under(ContractSaleData, 0),
    leaf(ContractValiditySaleTime, 11).under(ContractSaleData, 1),
    leaf(ContractValiditySaleAgent, 8).under(ContractSaleData, 2),
    leaf(ContractValiditySaleDevice, 16).under(ContractSaleData, 3),
    leaf(ContractStatus, 8).under(ContractBitmap, 4),
    leaf(ContractAuthenticator, 16).under(ContractBitmap, 5),
    leaf(ContractData, 0).under(ContractBitmap, 6),
];

const EVENT: &[FieldSpec] = &[
    leaf(EventDateStamp, 14),
    leaf(EventTimeStamp, 11),
    bitmap(EventBitmap, 9),
    leaf(EventCode, 8).under(EventBitmap, 0),
    leaf(EventResult, 8).under(EventBitmap, 1),
    leaf(EventServiceProvider, 8).under(EventBitmap, 2),
    leaf(EventLocationId, 16).under(EventBitmap, 3),
    leaf(EventRouteNumber, 16).under(EventBitmap, 4),
    leaf(EventVehicleId, 16).under(EventBitmap, 5),
    leaf(EventContractPointer, 5).under(EventBitmap, 6),
    leaf(EventAuthenticator, 16).under(EventBitmap, 7),
    leaf(EventData, 0).under(EventBitmap, 8),
];

pub(super) static OPUS_ENVIRONMENT: FieldSchema =
    FieldSchema::new(SchemaKind::OpusEnvironment, ENVIRONMENT);
pub(super) static OPUS_CONTRACT: FieldSchema = FieldSchema::new(SchemaKind::OpusContract, CONTRACT);
pub(super) static OPUS_EVENT: FieldSchema = FieldSchema::new(SchemaKind::OpusEvent, EVENT);
