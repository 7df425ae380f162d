// libcalypso/src/poller.rs

//! Link-layer callback entry point.
//!
//! The host calls [`Poller::on_ready`] once the transport reports a card.
//! The whole session runs inside that call and its outcome reaches the UI
//! as [`PollerEvent`]s.

use std::sync::mpsc::Sender;

use log::{debug, info, warn};

use crate::card::{CalypsoCardBuilder, CalypsoCardData, CardDump};
use crate::config::ReaderConfig;
use crate::session::{CancelToken, CardSession, SessionState};
use crate::transport::Transport;

/// Why a session failed, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailReason {
    /// Link failure, short response or any unclassified card error
    Generic,
    /// Status 6A82
    FileNotFound,
    /// Status 6982
    Security,
    Cancelled,
}

impl FailReason {
    /// Text shown on the reader screen.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Generic => "Error, try\n again",
            Self::FileNotFound => "Read Error,\n wrong card",
            Self::Security => "Access denied,\n wrong card",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollerEvent {
    CardDetected,
    Success(Box<CalypsoCardData>),
    Fail(FailReason),
    FileNotFound,
}

/// Receiver of poller events.
pub trait EventSink {
    fn emit(&mut self, event: PollerEvent);
}

impl EventSink for Vec<PollerEvent> {
    fn emit(&mut self, event: PollerEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<PollerEvent> {
    fn emit(&mut self, event: PollerEvent) {
        if self.send(event).is_err() {
            debug!("event receiver dropped");
        }
    }
}

/// Runs card sessions and remembers the last successful dump.
#[derive(Debug, Default)]
pub struct Poller {
    builder: CalypsoCardBuilder,
    cancel: CancelToken,
    last_dump: Option<CardDump>,
}

impl Poller {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            builder: CalypsoCardBuilder::with_config(config),
            cancel: CancelToken::new(),
            last_dump: None,
        }
    }

    /// Token the UI trips to abort a session in progress.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn last_dump(&self) -> Option<&CardDump> {
        self.last_dump.as_ref()
    }

    pub fn take_last_dump(&mut self) -> Option<CardDump> {
        self.last_dump.take()
    }

    /// Run one full session. Emits `CardDetected` and then exactly one of
    /// `Success`, `FileNotFound` or `Fail`. Returns the terminal state.
    pub fn on_ready<T: Transport>(&mut self, mut transport: T, sink: &mut dyn EventSink) -> SessionState {
        sink.emit(PollerEvent::CardDetected);

        if let Err(e) = transport.reset() {
            warn!("link reset failed: {}", e);
            let reason = e.fail_reason();
            Self::emit_failure(sink, reason);
            return SessionState::Fail(reason);
        }

        let mut session =
            CardSession::with_cancel(transport, self.builder.config(), self.cancel.clone());
        match self.builder.build_recorded(&mut session) {
            Ok((card, dump)) => {
                session.finish();
                info!(
                    "read {} card {} ({} contracts, {} commands)",
                    card.family,
                    card.card_number,
                    card.contract_count,
                    session.commands_sent()
                );
                self.last_dump = Some(dump);
                sink.emit(PollerEvent::Success(Box::new(card)));
            }
            Err(e) => {
                let e = session.fail(e);
                warn!("card read failed: {}", e);
                Self::emit_failure(sink, e.fail_reason());
            }
        }
        session.state()
    }

    fn emit_failure(sink: &mut dyn EventSink, reason: FailReason) {
        match reason {
            FailReason::FileNotFound => sink.emit(PollerEvent::FileNotFound),
            other => sink.emit(PollerEvent::Fail(other)),
        }
    }
}
