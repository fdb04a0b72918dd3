// Replays the usual reader flow against a simulated PN532.
//
// Button A: report whether a card is present and print its ID.
// Button B: forward the card ID over a UART-style line sink.
// Loop:     check for one known card.
//
// Run with `RUST_LOG=trace cargo run --example simulated_reader` to see the
// raw frames.

use pn532_nfc::prelude::*;
use pn532_nfc::test_support::{seed_target, seed_wakeup};
use pn532_nfc::transport::MockTransport;

const KNOWN_CARD: [u8; 4] = [12, 34, 56, 78];

fn main() -> Result<()> {
    env_logger::init();

    let mut mock = MockTransport::new();
    seed_wakeup(&mut mock);
    // A then B see a stranger's card, the loop sees the known one and then
    // the field empties.
    seed_target(&mut mock, [0x04, 0x1F, 0xA2, 0x3B]);
    seed_target(&mut mock, [0x04, 0x1F, 0xA2, 0x3B]);
    seed_target(&mut mock, [0x04, 0x1F, 0xA2, 0x3B]);
    seed_target(&mut mock, KNOWN_CARD);
    seed_target(&mut mock, [0xFF; 4]);

    let mut reader = ReaderBuilder::new()
        .with_transport(mock)
        .settle_delay_ms(0)
        .build()?;
    let mut uart = LineSink::new(std::io::stdout());

    // Button A
    if reader.check_for_card() {
        let id = reader.card_id_string();
        uart.send(&format!("Card detected: {}", id));
    } else {
        uart.send("No NFC card");
    }

    // Button B
    reader.send_card_id(&mut uart);

    // Loop
    for _ in 0..2 {
        if reader.validate_card_id(KNOWN_CARD) {
            uart.send("Card VALID!");
        } else {
            uart.send("Card not recognised");
        }
    }

    println!("device state: {}", reader.state());
    Ok(())
}
