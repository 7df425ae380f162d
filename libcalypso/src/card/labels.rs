// libcalypso/src/card/labels.rs

//! Human-readable names for coded card values.
//!
//! Lookups return `None` for codes without a known name; the page formatter
//! then prints the raw value.

use crate::types::Dialect;

/// Navigo card kind from the holder card status nibble.
pub fn navigo_card_kind(card_status: u8) -> &'static str {
    match card_status {
        1 => "Navigo Decouverte",
        2 => "Navigo Easy",
        3 => "Imagine R",
        _ => "Navigo",
    }
}

const NAVIGO_TARIFFS: &[(u16, &str)] = &[
    (0x0000, "Navigo Mois"),
    (0x0001, "Navigo Semaine"),
    (0x0002, "Navigo Annuel"),
    (0x0004, "Imagine R Junior"),
    (0x0005, "Imagine R Etudiant"),
    (0x000D, "Navigo Jeunes Week-end"),
    (0x4000, "Navigo Mois 75%"),
    (0x8003, "Navigo Solidarite Gratuit"),
];

pub fn tariff(dialect: Dialect, tariff: u16) -> Option<&'static str> {
    match dialect {
        Dialect::Navigo => lookup(NAVIGO_TARIFFS, tariff),
        Dialect::Opus => None,
    }
}

pub fn transport_type(code: u8) -> Option<&'static str> {
    match code {
        1 => Some("Bus urbain"),
        2 => Some("Bus interurbain"),
        3 => Some("Metro"),
        4 => Some("Tram"),
        5 => Some("Train"),
        8 => Some("Parking"),
        _ => None,
    }
}

pub fn transition(code: u8) -> Option<&'static str> {
    match code {
        1 => Some("Entry"),
        2 => Some("Exit"),
        4 => Some("Inspection"),
        6 => Some("Interchange entry"),
        7 => Some("Interchange exit"),
        _ => None,
    }
}

const SERVICE_PROVIDERS: &[(u16, &str)] = &[
    (2, "SNCF"),
    (3, "RATP"),
    (4, "IDF Mobilites"),
    (10, "IDF Mobilites"),
    (115, "CSO (VEOLIA)"),
    (116, "R'Bus (VEOLIA)"),
    (156, "Phebus"),
    (175, "RATP (Veolia Transport Nanterre)"),
];

pub fn service_provider(code: u16) -> Option<&'static str> {
    lookup(SERVICE_PROVIDERS, code)
}

const PAY_METHODS: &[(u16, &str)] = &[
    (0x80, "Debit PME"),
    (0x90, "Cash"),
    (0xA0, "Mobility Check"),
    (0xA4, "Check"),
    (0xA5, "Vacation Check"),
    (0xB3, "Payment Card"),
    (0xB7, "Telepayment"),
    (0xD2, "Remote Payment"),
    (0xD7, "Voucher"),
    (0xD9, "Discount Voucher"),
];

pub fn pay_method(code: u16) -> Option<&'static str> {
    lookup(PAY_METHODS, code)
}

fn lookup(table: &[(u16, &'static str)], code: u16) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(tariff(Dialect::Navigo, 0x0002), Some("Navigo Annuel"));
        assert_eq!(tariff(Dialect::Navigo, 0x8003), Some("Navigo Solidarite Gratuit"));
        assert_eq!(transport_type(3), Some("Metro"));
        assert_eq!(transition(6), Some("Interchange entry"));
        assert_eq!(service_provider(3), Some("RATP"));
        assert_eq!(service_provider(10), service_provider(4));
        assert_eq!(pay_method(0x90), Some("Cash"));
    }

    #[test]
    fn unknown_codes_have_no_name() {
        assert_eq!(tariff(Dialect::Opus, 0x0000), None);
        assert_eq!(tariff(Dialect::Navigo, 0x1234), None);
        assert_eq!(transport_type(0), None);
        assert_eq!(transition(15), None);
        assert_eq!(service_provider(999), None);
    }

    #[test]
    fn card_kind_defaults_to_navigo() {
        assert_eq!(navigo_card_kind(0), "Navigo");
        assert_eq!(navigo_card_kind(2), "Navigo Easy");
        assert_eq!(navigo_card_kind(15), "Navigo");
    }
}
