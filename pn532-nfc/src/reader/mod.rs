// pn532-nfc-rs/pn532-nfc/src/reader/mod.rs

//! Card presence, card ID and card ID match queries.
//!
//! Every query runs a full detection transaction of its own; nothing is
//! shared between calls except the wakeup state and the last UID read.
//! A missing card, a bus error and a malformed reply all look the same to
//! the caller: `false`, `None` or an empty string.

use log::{debug, warn};

use crate::constants::{NOTIFY_PREFIX, TARGET_RESPONSE_LEN};
use crate::device::{DeviceState, Handshake, exchange};
use crate::notify::NotificationSink;
use crate::protocol::{codec, decode_target};
use crate::transport::Transport;
use crate::types::Uid;
use crate::{Error, Result};

mod builder;
mod config;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;

/// PN532 card reader over a [`Transport`].
pub struct CardReader<T> {
    transport: T,
    config: ReaderConfig,
    handshake: Handshake,
    last_uid: Option<Uid>,
}

impl<T: Transport> CardReader<T> {
    /// Reader with the default address (0x24) and settle delay (100 ms).
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Reader with an explicit configuration. The configuration is not
    /// validated here; use [`ReaderBuilder`] for that.
    pub fn with_config(transport: T, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            handshake: Handshake::new(),
            last_uid: None,
        }
    }

    /// True if a card other than the no-card sentinel answered.
    pub fn check_for_card(&mut self) -> bool {
        self.detect().is_some()
    }

    /// UID of the card in the field, if any.
    pub fn get_card_id(&mut self) -> Option<Uid> {
        self.detect()
    }

    /// UID as space separated decimal bytes (`"4 31 162 59"`), or an empty
    /// string when no card was read.
    pub fn card_id_string(&mut self) -> String {
        self.get_card_id()
            .map(|uid| uid.to_string())
            .unwrap_or_default()
    }

    /// True only if a card was read and its UID equals `expected`.
    pub fn validate_card_id(&mut self, expected: impl Into<Uid>) -> bool {
        let expected = expected.into();
        self.detect().is_some_and(|uid| uid == expected)
    }

    /// Send `NFC:<uid>` to `sink` when a card is present. Does nothing
    /// otherwise.
    pub fn send_card_id<S: NotificationSink + ?Sized>(&mut self, sink: &mut S) {
        if let Some(uid) = self.get_card_id() {
            sink.send(&format!("{}{}", NOTIFY_PREFIX, uid));
        }
    }

    /// Wakeup state of the chip.
    pub fn state(&self) -> DeviceState {
        self.handshake.state()
    }

    /// UID bytes of the most recent target reply, whether or not the reply
    /// passed validation. `None` until a reply has been read.
    pub fn last_uid(&self) -> Option<Uid> {
        self.last_uid
    }

    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the reader and hand back the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    fn detect(&mut self) -> Option<Uid> {
        match self.try_detect() {
            Ok(uid) => Some(uid),
            Err(e @ Error::Bus(_)) => {
                warn!("pn532 detect: {}", e);
                None
            }
            Err(e) => {
                debug!("pn532 detect: {}", e);
                None
            }
        }
    }

    fn try_detect(&mut self) -> Result<Uid> {
        // The detect command goes out even if the wakeup failed; a chip that
        // is really asleep fails the ACK check below.
        if !self.handshake.ensure_awake(&mut self.transport, &self.config) {
            debug!("pn532 not awake, detecting anyway");
        }

        let frame = codec::list_target_frame()?;
        let reply = exchange(&mut self.transport, &self.config, &frame, TARGET_RESPONSE_LEN)?;
        self.last_uid = codec::extract_uid(&reply.response).ok();

        decode_target(&reply.ack, &reply.response)
    }
}
