// libcalypso/src/transport/mod.rs

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod mock;
pub mod traits;

#[cfg(feature = "async")]
pub use asynchronous::{AsyncTransport, BlockingTransport};
pub use mock::MockTransport;
pub use traits::Transport;
