// pn532-nfc-rs/pn532-nfc/src/protocol/commands/mod.rs

//! Command payloads

pub mod list_target;
pub mod sam;

pub use list_target::encode_in_list_passive_target;
pub use sam::encode_sam_configuration;

use crate::constants::{PN532_CMD_INLIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION};

/// PN532 commands this driver issues. Per-command encoders live in
/// `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// SAMConfiguration. Sent in normal mode it also wakes the chip.
    SamConfiguration {
        /// 0x01 = normal mode
        mode: u8,
        /// Virtual card timeout in 50 ms units
        timeout: u8,
        /// Whether the chip drives its IRQ pin
        use_irq: u8,
    },
    /// InListPassiveTarget.
    InListPassiveTarget {
        /// Number of targets to activate (1 or 2)
        max_targets: u8,
        /// 0x00 = 106 kbps type A
        baud_rate: u8,
    },
}

impl Command {
    /// Wakeup: SAMConfiguration in normal mode, 1 s virtual card timeout
    /// (0x14 * 50 ms), IRQ pin enabled.
    pub const fn wakeup() -> Self {
        Self::SamConfiguration {
            mode: 0x01,
            timeout: 0x14,
            use_irq: 0x01,
        }
    }

    /// Detect one ISO14443-A target at 106 kbps.
    pub const fn detect_single_target() -> Self {
        Self::InListPassiveTarget {
            max_targets: 0x01,
            baud_rate: 0x00,
        }
    }

    /// Command code byte that follows the TFI.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_INLIST_PASSIVE_TARGET,
        }
    }

    /// The PN532 answers with the command code plus one.
    pub fn response_code(&self) -> u8 {
        self.command_code().wrapping_add(1)
    }

    /// Encode the command into the raw payload (command code + params),
    /// without the TFI byte.
    pub fn encode(&self) -> Vec<u8> {
        match *self {
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(mode, timeout, use_irq),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(max_targets, baud_rate),
        }
    }
}
