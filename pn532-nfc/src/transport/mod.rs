// pn532-nfc-rs/pn532-nfc/src/transport/mod.rs

//! Bus transports

#[cfg(feature = "embedded-hal")]
pub mod i2c;
pub mod mock;
pub mod traits;

#[cfg(feature = "embedded-hal")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
