// libcalypso/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent commands and returns
/// queued responses in order. An empty queue answers `Error::Timeout`.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Result<Vec<u8>>>,
    /// Number of `reset` calls seen
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response, status word included.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(Ok(resp));
    }

    /// Queue `payload` followed by `90 00`.
    pub fn push_ok(&mut self, payload: &[u8]) {
        let mut resp = payload.to_vec();
        resp.extend_from_slice(&[0x90, 0x00]);
        self.push_response(resp);
    }

    /// Queue a bare status word.
    pub fn push_status(&mut self, sw1: u8, sw2: u8) {
        self.push_response(vec![sw1, sw2]);
    }

    /// Queue a link-level failure.
    pub fn push_error(&mut self, err: Error) {
        self.responses.push_back(Err(err));
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    pub fn remaining(&self) -> usize {
        self.responses.len()
    }
}

impl Transport for MockTransport {
    fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.sent.push(command.to_vec());
        self.responses.pop_front().unwrap_or(Err(Error::Timeout))
    }

    fn reset(&mut self) -> Result<()> {
        // Queued responses survive so tests can pre-seed replies before
        // handing the transport to a poller.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
