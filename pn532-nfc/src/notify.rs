// pn532-nfc-rs/pn532-nfc/src/notify.rs

//! Sinks for card notifications, e.g. a Bluetooth UART bridge.

use std::io::Write;

use log::warn;

/// Fire-and-forget consumer of formatted text.
pub trait NotificationSink {
    /// Deliver one message. Failures are the sink's own business.
    fn send(&mut self, text: &str);
}

impl<F: FnMut(&str)> NotificationSink for F {
    fn send(&mut self, text: &str) {
        self(text)
    }
}

/// Writes each message as one `\r\n` terminated line, the way a UART
/// console expects it. Write errors are logged and dropped.
pub struct LineSink<W> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Line terminator appended to every message.
    pub const NEW_LINE: &'static str = "\r\n";

    /// Wrap a writer, e.g. a serial port or `std::io::stdout()`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwrap the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> NotificationSink for LineSink<W> {
    fn send(&mut self, text: &str) {
        let res = self
            .writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.write_all(Self::NEW_LINE.as_bytes()))
            .and_then(|_| self.writer.flush());
        if let Err(e) = res {
            warn!("notification dropped: {}", e);
        }
    }
}

/// Collects every message. Used by tests and demos.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Every message received, oldest first
    pub messages: Vec<String>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationSink for RecordingSink {
    fn send(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
