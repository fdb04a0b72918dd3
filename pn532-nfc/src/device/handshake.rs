// pn532-nfc-rs/pn532-nfc/src/device/handshake.rs

//! Lazy wakeup handshake

use log::{debug, warn};

use crate::constants::WAKEUP_RESPONSE_LEN;
use crate::device::DeviceState;
use crate::device::exchange::exchange;
use crate::protocol::{codec, decode_wakeup};
use crate::reader::ReaderConfig;
use crate::transport::Transport;
use crate::{Error, Result};

/// Wakeup state machine. The PN532 is woken lazily: every query goes
/// through [`Handshake::ensure_awake`], which only talks to the chip while
/// the state is `Disabled`.
///
/// One attempt per call. A failed attempt leaves the state `Disabled` and
/// the next call starts over.
#[derive(Debug, Default)]
pub struct Handshake {
    state: DeviceState,
}

impl Handshake {
    /// Starts `Disabled`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wakeup state.
    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Shorthand for `state().is_enabled()`.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Wake the device unless it is already enabled. Returns whether the
    /// device is enabled afterwards.
    pub fn ensure_awake<T: Transport + ?Sized>(
        &mut self,
        transport: &mut T,
        config: &ReaderConfig,
    ) -> bool {
        if self.is_enabled() {
            return true;
        }
        self.wake(transport, config)
    }

    /// Run the wakeup exchange unconditionally.
    pub fn wake<T: Transport + ?Sized>(&mut self, transport: &mut T, config: &ReaderConfig) -> bool {
        let outcome = run_wakeup(transport, config);
        transport.delay_ms(config.settle_delay_ms);

        match outcome {
            Ok(()) => {
                debug!("pn532 wakeup ok");
                self.state = DeviceState::Enabled;
            }
            Err(e @ Error::Bus(_)) => {
                warn!("pn532 wakeup: {}", e);
                self.state = DeviceState::Disabled;
            }
            Err(e) => {
                debug!("pn532 wakeup rejected: {}", e);
                self.state = DeviceState::Disabled;
            }
        }
        self.is_enabled()
    }
}

fn run_wakeup<T: Transport + ?Sized>(transport: &mut T, config: &ReaderConfig) -> Result<()> {
    transport.delay_ms(config.settle_delay_ms);
    let frame = codec::wakeup_frame()?;
    let reply = exchange(transport, config, &frame, WAKEUP_RESPONSE_LEN)?;
    decode_wakeup(&reply.ack, &reply.response)
}
