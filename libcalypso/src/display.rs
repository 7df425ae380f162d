// libcalypso/src/display.rs

//! Text pages for a decoded card.
//!
//! Page 0 is the environment, pages 1..=4 the contract slots and pages
//! 5..=7 the events. A page exists only when it has something to show, and
//! navigation moves between existing pages.

use std::fmt::{self, Write};

use log::info;

use crate::card::labels;
use crate::card::{CalypsoCardData, Contract, ContractSlot, Event};
use crate::constants::{MAX_CONTRACTS, MAX_EVENTS};
use crate::types::Dialect;

pub const ENVIRONMENT_PAGE: u8 = 0;
pub const FIRST_CONTRACT_PAGE: u8 = 1;
pub const FIRST_EVENT_PAGE: u8 = FIRST_CONTRACT_PAGE + MAX_CONTRACTS as u8;
pub const LAST_PAGE: u8 = FIRST_EVENT_PAGE + MAX_EVENTS as u8 - 1;

enum Page {
    Environment,
    Contract(usize),
    Event(usize),
}

impl Page {
    fn of(page: u8) -> Option<Self> {
        match page {
            ENVIRONMENT_PAGE => Some(Self::Environment),
            p if p < FIRST_EVENT_PAGE => Some(Self::Contract((p - FIRST_CONTRACT_PAGE) as usize)),
            p if p <= LAST_PAGE => Some(Self::Event((p - FIRST_EVENT_PAGE) as usize)),
            _ => None,
        }
    }
}

pub fn has_page(card: &CalypsoCardData, page: u8) -> bool {
    let Some(page) = Page::of(page) else {
        return false;
    };
    match (card.dialect(), page) {
        (_, Page::Environment) => true,
        (None, _) => false,
        (Some(_), Page::Contract(i)) => card.contracts[i] != ContractSlot::Empty,
        (Some(_), Page::Event(i)) => card.events[i].is_some(),
    }
}

pub fn page_count(card: &CalypsoCardData) -> usize {
    (ENVIRONMENT_PAGE..=LAST_PAGE)
        .filter(|p| has_page(card, *p))
        .count()
}

/// Next existing page after `page`, or `page` itself on the last one.
pub fn next_page(card: &CalypsoCardData, page: u8) -> u8 {
    let next = (page.saturating_add(1)..=LAST_PAGE)
        .find(|p| has_page(card, *p))
        .unwrap_or(page);
    info!("Page ID: {} -> {}", page, next);
    next
}

/// Previous existing page before `page`, or `page` itself on the first one.
pub fn prev_page(card: &CalypsoCardData, page: u8) -> u8 {
    let prev = (ENVIRONMENT_PAGE..page.min(LAST_PAGE + 1))
        .rev()
        .find(|p| has_page(card, *p))
        .unwrap_or(page);
    info!("Page ID: {} -> {}", page, prev);
    prev
}

/// Render page `page`, or `None` when the card has no such page.
pub fn get_page(card: &CalypsoCardData, page: u8) -> Option<String> {
    if !has_page(card, page) {
        return None;
    }
    let mut out = String::new();
    write_header(&mut out, card).ok()?;
    let rendered = match (Page::of(page)?, card.dialect()) {
        (Page::Environment, Some(_)) => write_environment(&mut out, card),
        (Page::Contract(i), Some(d)) => write_contract(&mut out, d, i, &card.contracts[i]),
        (Page::Event(i), Some(d)) => match &card.events[i] {
            Some(event) => write_event(&mut out, d, i, event, card),
            None => return None,
        },
        _ => Ok(()),
    };
    rendered.ok()?;
    Some(out)
}

fn write_header(out: &mut String, card: &CalypsoCardData) -> fmt::Result {
    match (card.dialect(), &card.environment) {
        (Some(Dialect::Navigo), Some(env)) => writeln!(
            out,
            "{} {}:",
            labels::navigo_card_kind(env.holder_card_status),
            card.card_number
        ),
        _ => writeln!(out, "{} {}:", card.family, card.card_number),
    }
}

fn write_environment(out: &mut String, card: &CalypsoCardData) -> fmt::Result {
    writeln!(out, "Environment:")?;
    let Some(env) = &card.environment else {
        return writeln!(out, "unavailable");
    };
    writeln!(out, "Network: {:03}-{:03}", env.country_code, env.network_code)?;
    writeln!(out, "App version: {}", env.app_version)?;
    writeln!(out, "Valid until: {}", env.validity_end.date_string())?;
    writeln!(out, "Contracts: {}", card.contract_count)
}

fn write_contract(out: &mut String, dialect: Dialect, index: usize, slot: &ContractSlot) -> fmt::Result {
    writeln!(out, "Contract {}:", index + 1)?;
    let contract = match slot {
        ContractSlot::Present(c) => c,
        _ => return writeln!(out, "unavailable"),
    };
    write_tariff(out, dialect, contract)?;
    if let Some(price) = contract.price_amount {
        writeln!(out, "Price: {:.2}", price)?;
    }
    if let Some(method) = contract.pay_method {
        match labels::pay_method(method) {
            Some(name) => writeln!(out, "Payment: {}", name)?,
            None => writeln!(out, "Payment: 0x{:02x}", method)?,
        }
    }
    match (contract.validity_start, contract.validity_end) {
        (Some(start), Some(end)) => writeln!(
            out,
            "Valid {} to {}",
            start.date_string(),
            end.date_string()
        )?,
        (Some(start), None) => writeln!(out, "Valid from {}", start.date_string())?,
        (None, Some(end)) => writeln!(out, "Valid until {}", end.date_string())?,
        (None, None) => {}
    }
    if let Some(zones) = contract.zones {
        let list: Vec<String> = zones
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(k, _)| (k + 1).to_string())
            .collect();
        writeln!(out, "Zones: {}", list.join(" "))?;
    }
    match contract.sale_date {
        Some(date) => writeln!(
            out,
            "Sold {} by agent {}",
            date.date_string(),
            contract.sale_agent
        )?,
        None => writeln!(out, "Sold by agent {}", contract.sale_agent)?,
    }
    if let Some(device) = contract.sale_device {
        writeln!(out, "Sale device: {}", device)?;
    }
    if let Some(counter) = contract.counter {
        writeln!(out, "Trips left: {}", counter.count)?;
    }
    Ok(())
}

fn write_tariff(out: &mut String, dialect: Dialect, contract: &Contract) -> fmt::Result {
    match labels::tariff(dialect, contract.tariff) {
        Some(name) => writeln!(out, "{}", name),
        None => writeln!(out, "Tariff 0x{:04x}", contract.tariff),
    }
}

fn write_event(
    out: &mut String,
    dialect: Dialect,
    index: usize,
    event: &Event,
    card: &CalypsoCardData,
) -> fmt::Result {
    writeln!(out, "Event {}:", index + 1)?;
    match (
        labels::transport_type(event.transport_type),
        labels::transition(event.transition),
    ) {
        (Some(mode), Some(step)) => writeln!(out, "{} {}", mode, step)?,
        (Some(mode), None) => writeln!(out, "{} ({})", mode, event.transition)?,
        _ => writeln!(
            out,
            "Transport {} ({})",
            event.transport_type, event.transition
        )?,
    }
    match labels::service_provider(event.service_provider) {
        Some(name) => writeln!(out, "Provider: {}", name)?,
        None => writeln!(out, "Provider: {}", event.service_provider)?,
    }
    if let (Some(group), Some(station)) = (event.station_group_id, event.station_id) {
        writeln!(out, "Station: {}-{}", group, station)?;
    }
    if let Some(gate) = event.location_gate {
        writeln!(out, "Gate: {}", gate)?;
    }
    if let (Some(door), Some(side)) = (event.door, event.side) {
        let side = if side == 0 { "right" } else { "left" };
        writeln!(out, "Door: {} ({})", door, side)?;
    }
    if let Some(route) = event.route_number {
        writeln!(out, "Route: {}", route)?;
    }
    if let Some(mission) = event.mission {
        writeln!(out, "Mission: {}", mission)?;
    }
    if let Some(vehicle) = event.vehicle_id {
        writeln!(out, "Vehicle: {}", vehicle)?;
    }
    // Contract pointers are 1-based.
    if let Some(contract) = event
        .used_contract
        .and_then(|p| (p as usize).checked_sub(1))
        .and_then(|i| card.contract(i))
    {
        write!(out, "Contract: ")?;
        write_tariff(out, dialect, contract)?;
    }
    writeln!(out, "{}", event.date)?;
    if let Some(first) = event.first_stamp {
        writeln!(out, "First stamp: {}", first)?;
    }
    Ok(())
}
