// libcalypso/src/session/mod.rs

//! Select/read state machine driven over a [`Transport`].

pub mod cancel;

pub use cancel::CancelToken;

use log::{debug, error};

use crate::config::ReaderConfig;
use crate::poller::FailReason;
use crate::protocol::{ClassByte, Command, Response};
use crate::transport::Transport;
use crate::types::Application;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Anything that can hand out Calypso record payloads: a live session, a
/// replayed dump, or a recorder wrapping either.
pub trait FileSource {
    /// Make `app` the current file.
    fn select(&mut self, app: Application) -> Result<()>;

    /// Read record `record` (1-based) of the current file. The payload has
    /// the status word stripped.
    fn read_record(&mut self, record: u8) -> Result<Vec<u8>>;
}

impl<S: FileSource + ?Sized> FileSource for &mut S {
    fn select(&mut self, app: Application) -> Result<()> {
        (**self).select(app)
    }

    fn read_record(&mut self, record: u8) -> Result<Vec<u8>> {
        (**self).read_record(record)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Start,
    SelectingApp(Application),
    Reading {
        app: Option<Application>,
        record: u8,
    },
    Success,
    Fail(FailReason),
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Fail(_))
    }
}

/// One card session over a live transport.
pub struct CardSession<T: Transport> {
    transport: T,
    class_byte: ClassByte,
    cancel: CancelToken,
    state: SessionState,
    current: Option<Application>,
    commands_sent: usize,
}

impl<T: Transport> CardSession<T> {
    pub fn new(transport: T, config: &ReaderConfig) -> Self {
        Self::with_cancel(transport, config, CancelToken::new())
    }

    pub fn with_cancel(transport: T, config: &ReaderConfig, cancel: CancelToken) -> Self {
        Self {
            transport,
            class_byte: config.class_byte,
            cancel,
            state: SessionState::Start,
            current: None,
            commands_sent: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn commands_sent(&self) -> usize {
        self.commands_sent
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Mark the session as completed.
    pub fn finish(&mut self) {
        if !self.state.is_terminal() {
            self.state = SessionState::Success;
        }
    }

    /// Record a failure raised outside the session (for example a fatal
    /// decoding error) and hand it back.
    pub fn fail(&mut self, err: Error) -> Error {
        self.state = SessionState::Fail(err.fail_reason());
        err
    }

    fn check_cancelled(&mut self) -> Result<()> {
        if self.cancel.is_cancelled() {
            debug!("session cancelled before {:?}", self.state);
            return Err(self.fail(Error::Cancelled));
        }
        Ok(())
    }

    fn exchange(&mut self, command: Command) -> Result<Vec<u8>> {
        let apdu = command.encode(self.class_byte);
        debug!("SEND {}", bytes_to_hex_spaced(&apdu));
        self.commands_sent += 1;

        let raw = self
            .transport
            .send_and_receive(&apdu)
            .map_err(|e| self.fail(e))?;
        debug!("RECV {}", bytes_to_hex_spaced(&raw));
        #[cfg(feature = "diagnostics")]
        log::trace!("raw response ({} bytes): {:?}", raw.len(), raw);

        match Response::decode(&raw) {
            Ok(response) => Ok(response.into_payload()),
            Err(Error::StatusWord { status }) => {
                error!(
                    "{:?} rejected: status {} ({})",
                    command,
                    status,
                    status.meaning()
                );
                Err(self.fail(Error::StatusWord { status }))
            }
            Err(e) => Err(self.fail(e)),
        }
    }
}

impl<T: Transport> FileSource for CardSession<T> {
    fn select(&mut self, app: Application) -> Result<()> {
        self.check_cancelled()?;
        self.state = SessionState::SelectingApp(app);
        self.exchange(Command::select(app))?;
        self.current = Some(app);
        Ok(())
    }

    fn read_record(&mut self, record: u8) -> Result<Vec<u8>> {
        self.check_cancelled()?;
        self.state = SessionState::Reading {
            app: self.current,
            record,
        };
        self.exchange(Command::ReadRecord { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::StatusKind;
    use crate::transport::MockTransport;

    fn session(mock: MockTransport) -> CardSession<MockTransport> {
        CardSession::new(mock, &ReaderConfig::default())
    }

    #[test]
    fn select_then_read() {
        let mut mock = MockTransport::new();
        mock.push_ok(&[]);
        mock.push_ok(&[0xDE, 0xAD]);
        let mut s = session(mock);

        s.select(Application::Icc).unwrap();
        assert_eq!(s.state(), SessionState::SelectingApp(Application::Icc));
        let payload = s.read_record(1).unwrap();
        assert_eq!(payload, vec![0xDE, 0xAD]);
        assert_eq!(
            s.state(),
            SessionState::Reading {
                app: Some(Application::Icc),
                record: 1
            }
        );
        s.finish();
        assert_eq!(s.state(), SessionState::Success);

        let mock = s.into_transport();
        assert_eq!(
            mock.sent,
            vec![
                vec![0x94, 0xA4, 0x00, 0x00, 0x02, 0x00, 0x02, 0x00],
                vec![0x94, 0xB2, 0x01, 0x04, 0x1D],
            ]
        );
    }

    #[test]
    fn iso_class_byte_is_used() {
        let mut mock = MockTransport::new();
        mock.push_ok(&[]);
        let config = ReaderConfig::builder()
            .class_byte(ClassByte::Iso)
            .build()
            .unwrap();
        let mut s = CardSession::new(mock, &config);
        s.select(Application::Icc).unwrap();
        assert_eq!(s.into_transport().sent[0][0], 0x00);
    }

    #[test]
    fn file_not_found_fails_session() {
        let mut mock = MockTransport::new();
        mock.push_status(0x6A, 0x82);
        let mut s = session(mock);
        match s.select(Application::Counters) {
            Err(Error::StatusWord { status }) => {
                assert_eq!(status.kind(), StatusKind::FileNotFound)
            }
            other => panic!("expected StatusWord, got {:?}", other),
        }
        assert_eq!(s.state(), SessionState::Fail(FailReason::FileNotFound));
    }

    #[test]
    fn short_response_is_invalid_length() {
        let mut mock = MockTransport::new();
        mock.push_response(vec![0x90]);
        let mut s = session(mock);
        assert!(matches!(
            s.read_record(1),
            Err(Error::InvalidLength {
                expected: 2,
                actual: 1
            })
        ));
        assert_eq!(s.state(), SessionState::Fail(FailReason::Generic));
    }

    #[test]
    fn transport_error_fails_session() {
        let mut mock = MockTransport::new();
        mock.push_error(Error::Transport("field lost".into()));
        let mut s = session(mock);
        assert!(matches!(
            s.select(Application::Icc),
            Err(Error::Transport(_))
        ));
        assert!(s.state().is_terminal());
    }

    #[test]
    fn cancelled_session_sends_nothing() {
        let mut mock = MockTransport::new();
        mock.push_ok(&[]);
        let token = CancelToken::new();
        token.cancel();
        let mut s = CardSession::with_cancel(mock, &ReaderConfig::default(), token);
        assert!(matches!(s.select(Application::Icc), Err(Error::Cancelled)));
        assert_eq!(s.state(), SessionState::Fail(FailReason::Cancelled));
        assert_eq!(s.commands_sent(), 0);
        assert!(s.into_transport().sent.is_empty());
    }

    #[test]
    fn finish_keeps_failure() {
        let mut s = session(MockTransport::new());
        let _ = s.fail(Error::Timeout);
        s.finish();
        assert_eq!(s.state(), SessionState::Fail(FailReason::Generic));
    }
}
