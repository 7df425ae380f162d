// libcalypso/src/transport/asynchronous.rs

//! Bridge for link layers that only offer an async round trip.

use async_trait::async_trait;
use tokio::runtime::{Builder, Runtime};

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Async counterpart of [`Transport`].
#[async_trait]
pub trait AsyncTransport: Send {
    async fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    async fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Presents an [`AsyncTransport`] as a blocking [`Transport`] by driving each
/// round trip on a private current-thread runtime.
pub struct BlockingTransport<T> {
    inner: T,
    runtime: Runtime,
}

impl<T: AsyncTransport> BlockingTransport<T> {
    pub fn new(inner: T) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| Error::Transport(format!("failed to start runtime: {}", e)))?;
        Ok(Self { inner, runtime })
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: AsyncTransport> Transport for BlockingTransport<T> {
    fn send_and_receive(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        let inner = &mut self.inner;
        self.runtime.block_on(inner.send_and_receive(command))
    }

    fn reset(&mut self) -> Result<()> {
        let inner = &mut self.inner;
        self.runtime.block_on(inner.reset())
    }
}
