// libcalypso/src/schema/field.rs

//! Field keys shared by every record schema.

macro_rules! en1545_fields {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal ),* $(,)?) => {
        /// Key of one EN1545 field. A key may appear in several schemas.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Field {
            $( $(#[$meta])* $variant, )*
        }

        impl Field {
            /// Every key, in declaration order
            pub const ALL: &'static [Field] = &[ $( Field::$variant, )* ];

            /// EN1545 field name
            pub fn name(&self) -> &'static str {
                match self {
                    $( Field::$variant => $name, )*
                }
            }
        }
    };
}

en1545_fields! {
    // Environment / holder
    EnvApplicationVersionNumber => "EnvApplicationVersionNumber",
    EnvBitmap => "Env",
    EnvNetworkId => "EnvNetworkId",
    EnvApplicationIssuerId => "EnvApplicationIssuerId",
    EnvApplicationValidityEndDate => "EnvApplicationValidityEndDate",
    EnvPayMethod => "EnvPayMethod",
    EnvAuthenticator => "EnvAuthenticator",
    EnvSelectList => "EnvSelectList",
    EnvDataCardStatus => "EnvDataCardStatus",
    EnvData2 => "EnvData2",
    HolderBitmap => "Holder",
    HolderName => "HolderName",
    HolderSurname => "HolderSurname",
    HolderForename => "HolderForename",
    HolderBirth => "HolderBirth",
    HolderBirthDate => "HolderBirthDate",
    HolderBirthPlace => "HolderBirthPlace",
    HolderBirthName => "HolderBirthName",
    HolderIdNumber => "HolderIdNumber",
    HolderCountryAlpha => "HolderCountryAlpha",
    HolderCompany => "HolderCompany",
    HolderProfiles => "HolderProfiles",
    HolderProfileBitmap => "HolderProfileBitmap",
    HolderNetworkId => "HolderNetworkId",
    HolderProfileNumber => "HolderProfileNumber",
    HolderProfileDate => "HolderProfileDate",
    HolderData => "HolderData",
    HolderDataCardStatus => "HolderDataCardStatus",
    HolderDataTeleReglement => "HolderDataTeleReglement",
    HolderDataResidence => "HolderDataResidence",
    HolderDataCommercialID => "HolderDataCommercialID",
    HolderDataWorkPlace => "HolderDataWorkPlace",
    HolderDataStudyPlace => "HolderDataStudyPlace",
    HolderDataSaleDevice => "HolderDataSaleDevice",
    HolderDataAuthenticator => "HolderDataAuthenticator",
    HolderDataProfileStartDate1 => "HolderDataProfileStartDate1",
    HolderDataProfileStartDate2 => "HolderDataProfileStartDate2",
    HolderDataProfileStartDate3 => "HolderDataProfileStartDate3",
    HolderDataProfileStartDate4 => "HolderDataProfileStartDate4",

    // Contract
    ContractBitmap => "Contract",
    ContractNetworkId => "ContractNetworkId",
    ContractProvider => "ContractProvider",
    ContractTariff => "ContractTariff",
    ContractSerialNumber => "ContractSerialNumber",
    ContractCustomerInfoBitmap => "ContractCustomerInfoBitmap",
    ContractCustomerProfile => "ContractCustomerProfile",
    ContractCustomerNumber => "ContractCustomerNumber",
    ContractPassengerInfoBitmap => "ContractPassengerInfoBitmap",
    ContractPassengerClass => "ContractPassengerClass",
    ContractPassengerTotal => "ContractPassengerTotal",
    ContractVehicleClassAllowed => "ContractVehicleClassAllowed",
    ContractPaymentPointer => "ContractPaymentPointer",
    ContractPayMethod => "ContractPayMethod",
    ContractServices => "ContractServices",
    ContractPriceAmount => "ContractPriceAmount",
    ContractPriceUnit => "ContractPriceUnit",
    ContractRestrictionBitmap => "ContractRestrictionBitmap",
    ContractRestrictStart => "ContractRestrictStart",
    ContractRestrictEnd => "ContractRestrictEnd",
    ContractRestrictDay => "ContractRestrictDay",
    ContractRestrictTimeCode => "ContractRestrictTimeCode",
    ContractRestrictCode => "ContractRestrictCode",
    ContractRestrictProduct => "ContractRestrictProduct",
    ContractRestrictLocation => "ContractRestrictLocation",
    ContractValidityInfoBitmap => "ContractValidityInfoBitmap",
    ContractValidityStartDate => "ContractValidityStartDate",
    ContractValidityStartTime => "ContractValidityStartTime",
    ContractValidityEndDate => "ContractValidityEndDate",
    ContractValidityEndTime => "ContractValidityEndTime",
    ContractValidityDuration => "ContractValidityDuration",
    ContractValidityLimitDate => "ContractValidityLimiteDate",
    ContractValidityZones => "ContractValidityZones",
    ContractValidityJourneys => "ContractValidityJourneys",
    ContractPeriodJourneys => "ContractPeriodJourneys",
    ContractJourneyData => "ContractJourneyData",
    ContractJourneyOrigin => "ContractJourneyOrigin",
    ContractJourneyDestination => "ContractJourneyDestination",
    ContractJourneyRouteNumbers => "ContractJourneyRouteNumbers",
    ContractJourneyRouteVariants => "ContractJourneyRouteVariants",
    ContractJourneyRun => "ContractJourneyRun",
    ContractJourneyVia => "ContractJourneyVia",
    ContractJourneyDistance => "ContractJourneyDistance",
    ContractJourneyInterchanges => "ContractJourneyInterchanges",
    ContractSaleData => "ContractSaleData",
    ContractValiditySaleDate => "ContractValiditySaleDate",
    ContractValiditySaleTime => "ContractValiditySaleTime",
    ContractValiditySaleAgent => "ContractValiditySaleAgent",
    ContractValiditySaleDevice => "ContractValiditySaleDevice",
    ContractStatus => "ContractStatus",
    ContractLoyaltyPoints => "ContractLoyaltyPoints",
    ContractAuthenticator => "ContractAuthenticator",
    ContractData => "ContractData",

    // Event
    EventDateStamp => "EventDateStamp",
    EventTimeStamp => "EventTimeStamp",
    EventBitmap => "EventBitmap",
    EventDisplayData => "EventDisplayData",
    EventNetworkId => "EventNetworkId",
    EventCode => "EventCode",
    EventResult => "EventResult",
    EventServiceProvider => "EventServiceProvider",
    EventNotokCounter => "EventNotokCounter",
    EventSerialNumber => "EventSerialNumber",
    EventDestination => "EventDestination",
    EventLocationId => "EventLocationId",
    EventLocationGate => "EventLocationGate",
    EventDevice => "EventDevice",
    EventRouteNumber => "EventRouteNumber",
    EventRouteVariant => "EventRouteVariant",
    EventJourneyRun => "EventJourneyRun",
    EventVehicleId => "EventVehicleId",
    EventVehicleClass => "EventVehicleClass",
    EventLocationType => "EventLocationType",
    EventEmployee => "EventEmployee",
    EventLocationReference => "EventLocationReference",
    EventJourneyInterchanges => "EventJourneyInterchanges",
    EventPeriodJourneys => "EventPeriodJourneys",
    EventTotalJourneys => "EventTotalJourneys",
    EventJourneyDistance => "EventJourneyDistance",
    EventPriceAmount => "EventPriceAmount",
    EventPriceUnit => "EventPriceUnit",
    EventContractPointer => "EventContractPointer",
    EventAuthenticator => "EventAuthenticator",
    EventData => "EventData",
    EventDataDateFirstStamp => "EventDataDateFirstStamp",
    EventDataTimeFirstStamp => "EventDataTimeFirstStamp",
    EventDataSimulation => "EventDataSimulation",
    EventDataTrip => "EventDataTrip",
    EventDataRouteDirection => "EventDataRouteDirection",
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
