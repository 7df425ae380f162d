// libcalypso/src/card/dump.rs

//! Raw record capture and replay.
//!
//! A [`CardDump`] holds the payload of every record read from one card, in
//! read order and with status words stripped. [`Recorder`] captures a dump
//! while a live session runs; [`DumpSource`] plays it back through the same
//! [`FileSource`] interface so decoding a dump follows the live code path.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::protocol::{StatusWord, SW};
use crate::session::FileSource;
use crate::types::Application;
use crate::utils::{bytes_to_hex, parse_hex};
use crate::{Error, Result};

const KIND_ICC: &str = "icc";
const KIND_ENVIRONMENT: &str = "environment";
const KIND_CONTRACT: &str = "contract";
const KIND_COUNTERS: &str = "counters";
const KIND_EVENT: &str = "event";

/// Raw payloads of one card read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardDump {
    pub icc: Option<Vec<u8>>,
    pub environment: Option<Vec<u8>>,
    /// Contract records in slot order, including the empty record that
    /// ended the scan.
    pub contracts: Vec<Vec<u8>>,
    pub counters: Option<Vec<u8>>,
    pub events: Vec<Vec<u8>>,
}

fn set_once(slot: &mut Option<Vec<u8>>, payload: Vec<u8>, lineno: usize, kind: &str) -> Result<()> {
    if slot.is_some() {
        return Err(Error::Dump(format!(
            "line {}: duplicate {} record",
            lineno, kind
        )));
    }
    *slot = Some(payload);
    Ok(())
}

fn file_not_found() -> Error {
    Error::StatusWord {
        status: StatusWord::from(SW::FILE_NOT_FOUND),
    }
}

impl CardDump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a payload read from record `record` of `app`.
    pub fn store(&mut self, app: Application, record: u8, payload: Vec<u8>) -> Result<()> {
        match app {
            Application::Icc => self.icc = Some(payload),
            Application::Environment => self.environment = Some(payload),
            Application::Contracts => self.contracts.push(payload),
            Application::Counters => self.counters = Some(payload),
            Application::Events => self.events.push(payload),
            Application::Ticketing => {
                return Err(Error::Dump(format!(
                    "ticketing directory has no record {}",
                    record
                )))
            }
        }
        Ok(())
    }

    /// Payload of record `record` (1-based) of `app`.
    pub fn record(&self, app: Application, record: u8) -> Option<&[u8]> {
        let index = (record as usize).checked_sub(1)?;
        match app {
            Application::Icc if index == 0 => self.icc.as_deref(),
            Application::Environment if index == 0 => self.environment.as_deref(),
            Application::Counters if index == 0 => self.counters.as_deref(),
            Application::Contracts => self.contracts.get(index).map(Vec::as_slice),
            Application::Events => self.events.get(index).map(Vec::as_slice),
            _ => None,
        }
    }

    /// Render as `kind: hex` lines in read order.
    pub fn to_text(&self) -> String {
        let mut out = String::from("# libcalypso card dump\n");
        let mut line = |kind: &str, payload: &[u8]| {
            out.push_str(kind);
            out.push_str(": ");
            out.push_str(&bytes_to_hex(payload));
            out.push('\n');
        };
        if let Some(icc) = &self.icc {
            line(KIND_ICC, icc);
        }
        if let Some(env) = &self.environment {
            line(KIND_ENVIRONMENT, env);
        }
        for contract in &self.contracts {
            line(KIND_CONTRACT, contract);
        }
        if let Some(counters) = &self.counters {
            line(KIND_COUNTERS, counters);
        }
        for event in &self.events {
            line(KIND_EVENT, event);
        }
        out
    }

    /// Parse the text produced by [`CardDump::to_text`]. Blank lines and
    /// `#` comments are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut dump = CardDump::new();
        for (n, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let lineno = n + 1;
            let (kind, hex) = line
                .split_once(':')
                .ok_or_else(|| Error::Dump(format!("line {}: expected 'kind: hex'", lineno)))?;
            let payload = parse_hex(hex).map_err(|e| match e {
                Error::Dump(msg) => Error::Dump(format!("line {}: {}", lineno, msg)),
                other => other,
            })?;

            let kind = kind.trim();
            match kind {
                KIND_ICC => set_once(&mut dump.icc, payload, lineno, kind)?,
                KIND_ENVIRONMENT => set_once(&mut dump.environment, payload, lineno, kind)?,
                KIND_COUNTERS => set_once(&mut dump.counters, payload, lineno, kind)?,
                KIND_CONTRACT => dump.contracts.push(payload),
                KIND_EVENT => dump.events.push(payload),
                other => {
                    return Err(Error::Dump(format!(
                        "line {}: unknown record kind '{}'",
                        lineno, other
                    )))
                }
            }
        }
        Ok(dump)
    }
}

impl fmt::Display for CardDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for CardDump {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Replays a [`CardDump`]. Missing records answer like a card would, with
/// status 6A82.
#[derive(Debug)]
pub struct DumpSource<'a> {
    dump: &'a CardDump,
    current: Option<Application>,
}

impl<'a> DumpSource<'a> {
    pub fn new(dump: &'a CardDump) -> Self {
        Self {
            dump,
            current: None,
        }
    }
}

impl FileSource for DumpSource<'_> {
    fn select(&mut self, app: Application) -> Result<()> {
        if app == Application::Counters && self.dump.counters.is_none() {
            debug!("replay: no counters record in dump");
            return Err(file_not_found());
        }
        self.current = Some(app);
        Ok(())
    }

    fn read_record(&mut self, record: u8) -> Result<Vec<u8>> {
        let app = self
            .current
            .ok_or_else(|| Error::Dump("read before any select".to_string()))?;
        self.dump
            .record(app, record)
            .map(<[u8]>::to_vec)
            .ok_or_else(|| {
                debug!("replay: {:?} record {} not in dump", app, record);
                file_not_found()
            })
    }
}

/// Wraps a [`FileSource`] and keeps a copy of every payload it returns.
#[derive(Debug)]
pub struct Recorder<S> {
    inner: S,
    current: Option<Application>,
    dump: CardDump,
}

impl<S: FileSource> Recorder<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            current: None,
            dump: CardDump::new(),
        }
    }

    pub fn dump(&self) -> &CardDump {
        &self.dump
    }

    pub fn into_dump(self) -> CardDump {
        self.dump
    }

    pub fn into_parts(self) -> (S, CardDump) {
        (self.inner, self.dump)
    }
}

impl<S: FileSource> FileSource for Recorder<S> {
    fn select(&mut self, app: Application) -> Result<()> {
        self.inner.select(app)?;
        self.current = Some(app);
        Ok(())
    }

    fn read_record(&mut self, record: u8) -> Result<Vec<u8>> {
        let payload = self.inner.read_record(record)?;
        if let Some(app) = self.current {
            self.dump.store(app, record, payload.clone())?;
        }
        Ok(payload)
    }
}
