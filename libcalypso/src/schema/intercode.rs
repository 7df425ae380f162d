// libcalypso/src/schema/intercode.rs

//! Intercode (Navigo) record tables.

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
    // EnvData is a plain container: both members share bit 6
    leaf(EnvDataCardStatus, 1).under(EnvBitmap, 6),
    leaf(EnvData2, 0).under(EnvBitmap, 6),
    bitmap(HolderBitmap, 8),
    bitmap(HolderName, 2).under(HolderBitmap, 0),
    leaf(HolderSurname, 85).under(HolderName, 0),
    leaf(HolderForename, 85).under(HolderName, 1),
    bitmap(HolderBirth, 2).under(HolderBitmap, 1),
    leaf(HolderBirthDate, 32).under(HolderBirth, 0),
    leaf(HolderBirthPlace, 115).under(HolderBirth, 1),
    leaf(HolderBirthName, 85).under(HolderBitmap, 2),
    leaf(HolderIdNumber, 32).under(HolderBitmap, 3),
    leaf(HolderCountryAlpha, 24).under(HolderBitmap, 4),
    leaf(HolderCompany, 32).under(HolderBitmap, 5),
    bitmap(HolderProfiles, 4).under(HolderBitmap, 6),
    bitmap(HolderProfileBitmap, 3).under(HolderProfiles, 0),
    leaf(HolderNetworkId, 24).under(HolderProfileBitmap, 0),
    leaf(HolderProfileNumber, 8).under(HolderProfileBitmap, 1),
    leaf(HolderProfileDate, 14).under(HolderProfileBitmap, 2),
    bitmap(HolderData, 12).under(HolderBitmap, 7),
    leaf(HolderDataCardStatus, 4).under(HolderData, 0),
    leaf(HolderDataTeleReglement, 4).under(HolderData, 1),
    leaf(HolderDataResidence, 17).under(HolderData, 2),
    leaf(HolderDataCommercialID, 6).under(HolderData, 3),
    leaf(HolderDataWorkPlace, 17).under(HolderData, 4),
    leaf(HolderDataStudyPlace, 17).under(HolderData, 5),
    leaf(HolderDataSaleDevice, 16).under(HolderData, 6),
    leaf(HolderDataAuthenticator, 16).under(HolderData, 7),
    leaf(HolderDataProfileStartDate1, 14).under(HolderData, 8),
    leaf(HolderDataProfileStartDate2, 14).under(HolderData, 9),
    leaf(HolderDataProfileStartDate3, 14).under(HolderData, 10),
    leaf(HolderDataProfileStartDate4, 14).under(HolderData, 11),
];

const CONTRACT: &[FieldSpec] = &[
    bitmap(ContractBitmap, 20),
    leaf(ContractNetworkId, 24).under(ContractBitmap, 0),
    leaf(ContractProvider, 8).under(ContractBitmap, 1),
    leaf(ContractTariff, 16).under(ContractBitmap, 2),
    leaf(ContractSerialNumber, 32).under(ContractBitmap, 3),
    bitmap(ContractCustomerInfoBitmap, 2).under(ContractBitmap, 4),
    leaf(ContractCustomerProfile, 6).under(ContractCustomerInfoBitmap, 0),
    leaf(ContractCustomerNumber, 32).under(ContractCustomerInfoBitmap, 1),
    bitmap(ContractPassengerInfoBitmap, 2).under(ContractBitmap, 5),
    leaf(ContractPassengerClass, 8).under(ContractPassengerInfoBitmap, 0),
    leaf(ContractPassengerTotal, 8).under(ContractPassengerInfoBitmap, 1),
    leaf(ContractVehicleClassAllowed, 6).under(ContractBitmap, 6),
    leaf(ContractPaymentPointer, 32).under(ContractBitmap, 7),
    leaf(ContractPayMethod, 11).under(ContractBitmap, 8),
    leaf(ContractServices, 16).under(ContractBitmap, 9),
    leaf(ContractPriceAmount, 16).under(ContractBitmap, 10),
    leaf(ContractPriceUnit, 16).under(ContractBitmap, 11),
    bitmap(ContractRestrictionBitmap, 7).under(ContractBitmap, 12),
    leaf(ContractRestrictStart, 11).under(ContractRestrictionBitmap, 0),
    leaf(ContractRestrictEnd, 11).under(ContractRestrictionBitmap, 1),
    leaf(ContractRestrictDay, 8).under(ContractRestrictionBitmap, 2),
    leaf(ContractRestrictTimeCode, 8).under(ContractRestrictionBitmap, 3),
    leaf(ContractRestrictCode, 8).under(ContractRestrictionBitmap, 4),
    leaf(ContractRestrictProduct, 16).under(ContractRestrictionBitmap, 5),
    leaf(ContractRestrictLocation, 16).under(ContractRestrictionBitmap, 6),
    bitmap(ContractValidityInfoBitmap, 9).under(ContractBitmap, 13),
    leaf(ContractValidityStartDate, 14).under(ContractValidityInfoBitmap, 0),
    leaf(ContractValidityStartTime, 11).under(ContractValidityInfoBitmap, 1),
    leaf(ContractValidityEndDate, 14).under(ContractValidityInfoBitmap, 2),
    leaf(ContractValidityEndTime, 11).under(ContractValidityInfoBitmap, 3),
    leaf(ContractValidityDuration, 8).under(ContractValidityInfoBitmap, 4),
    leaf(ContractValidityLimitDate, 14).under(ContractValidityInfoBitmap, 5),
    leaf(ContractValidityZones, 8).under(ContractValidityInfoBitmap, 6),
    leaf(ContractValidityJourneys, 16).under(ContractValidityInfoBitmap, 7),
    leaf(ContractPeriodJourneys, 16).under(ContractValidityInfoBitmap, 8),
    bitmap(ContractJourneyData, 8).under(ContractBitmap, 14),
    leaf(ContractJourneyOrigin, 16).under(ContractJourneyData, 0),
    leaf(ContractJourneyDestination, 16).under(ContractJourneyData, 1),
    leaf(ContractJourneyRouteNumbers, 16).under(ContractJourneyData, 2),
    leaf(ContractJourneyRouteVariants, 8).under(ContractJourneyData, 3),
    leaf(ContractJourneyRun, 16).under(ContractJourneyData, 4),
    leaf(ContractJourneyVia, 16).under(ContractJourneyData, 5),
    leaf(ContractJourneyDistance, 16).under(ContractJourneyData, 6),
    leaf(ContractJourneyInterchanges, 8).under(ContractJourneyData, 7),
    bitmap(ContractSaleData, 4).under(ContractBitmap, 15),
    leaf(ContractValiditySaleDate, 14).under(ContractSaleData, 0),
    leaf(ContractValiditySaleTime, 11).under(ContractSaleData, 1),
    leaf(ContractValiditySaleAgent, 8).under(ContractSaleData, 2),
    leaf(ContractValiditySaleDevice, 16).under(ContractSaleData, 3),
    leaf(ContractStatus, 8).under(ContractBitmap, 16),
    leaf(ContractLoyaltyPoints, 16).under(ContractBitmap, 17),
    leaf(ContractAuthenticator, 16).under(ContractBitmap, 18),
    leaf(ContractData, 0).under(ContractBitmap, 19),
];

const EVENT: &[FieldSpec] = &[
    leaf(EventDateStamp, 14),
    leaf(EventTimeStamp, 11),
    bitmap(EventBitmap, 28),
    leaf(EventDisplayData, 8).under(EventBitmap, 0),
    leaf(EventNetworkId, 24).under(EventBitmap, 1),
    leaf(EventCode, 8).under(EventBitmap, 2),
    leaf(EventResult, 8).under(EventBitmap, 3),
    leaf(EventServiceProvider, 8).under(EventBitmap, 4),
    leaf(EventNotokCounter, 8).under(EventBitmap, 5),
    leaf(EventSerialNumber, 24).under(EventBitmap, 6),
    leaf(EventDestination, 16).under(EventBitmap, 7),
    leaf(EventLocationId, 16).under(EventBitmap, 8),
    leaf(EventLocationGate, 8).under(EventBitmap, 9),
    leaf(EventDevice, 16).under(EventBitmap, 10),
    leaf(EventRouteNumber, 16).under(EventBitmap, 11),
    leaf(EventRouteVariant, 8).under(EventBitmap, 12),
    leaf(EventJourneyRun, 16).under(EventBitmap, 13),
    leaf(EventVehicleId, 16).under(EventBitmap, 14),
    leaf(EventVehicleClass, 8).under(EventBitmap, 15),
    leaf(EventLocationType, 5).under(EventBitmap, 16),
    leaf(EventEmployee, 240).under(EventBitmap, 17),
    leaf(EventLocationReference, 16).under(EventBitmap, 18),
    leaf(EventJourneyInterchanges, 8).under(EventBitmap, 19),
    leaf(EventPeriodJourneys, 16).under(EventBitmap, 20),
    leaf(EventTotalJourneys, 16).under(EventBitmap, 21),
    leaf(EventJourneyDistance, 16).under(EventBitmap, 22),
    leaf(EventPriceAmount, 16).under(EventBitmap, 23),
    leaf(EventPriceUnit, 16).under(EventBitmap, 24),
    leaf(EventContractPointer, 5).under(EventBitmap, 25),
    leaf(EventAuthenticator, 16).under(EventBitmap, 26),
    bitmap(EventData, 5).under(EventBitmap, 27),
    leaf(EventDataDateFirstStamp, 14).under(EventData, 0),
    leaf(EventDataTimeFirstStamp, 11).under(EventData, 1),
    leaf(EventDataSimulation, 1).under(EventData, 2),
    leaf(EventDataTrip, 2).under(EventData, 3),
    leaf(EventDataRouteDirection, 2).under(EventData, 4),
];

pub(super) static NAVIGO_ENVIRONMENT: FieldSchema =
    FieldSchema::new(SchemaKind::NavigoEnvironment, ENVIRONMENT);
pub(super) static NAVIGO_CONTRACT: FieldSchema =
    FieldSchema::new(SchemaKind::NavigoContract, CONTRACT);
pub(super) static NAVIGO_EVENT: FieldSchema = FieldSchema::new(SchemaKind::NavigoEvent, EVENT);
