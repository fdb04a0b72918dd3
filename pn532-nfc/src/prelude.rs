// pn532-nfc-rs/pn532-nfc/src/prelude.rs

//! Commonly used types, for `use pn532_nfc::prelude::*`

pub use crate::device::DeviceState;
pub use crate::notify::{LineSink, NotificationSink};
pub use crate::reader::{CardReader, ReaderBuilder, ReaderConfig};
pub use crate::transport::Transport;
pub use crate::{Error, Result, Uid};

pub use crate::utils::{bytes_to_decimal_spaced, bytes_to_hex_spaced};
