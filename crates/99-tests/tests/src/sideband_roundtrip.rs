//! Sideband messages written through the retry engine and read back.

use anyhow::Result;
use aux_bus::{MBOX_DOWN_REP, MBOX_UP_REQ};
use aux_logger::{AuxLogger, MemorySink};
use aux_retry::{AuxRetry, Outcome};
use aux_scenarios::native_bus;
use sideband_msg::{decode_header, MessageHeader, RelativeAddress};

#[test]
fn routed_reply_is_traced_with_its_path() -> Result<()> {
    let mut header = MessageHeader::for_route(RelativeAddress::from_ports(&[2, 5]));
    header.payload_bytes = 4;
    header.message_number = 1;
    let mut message = header.encode().to_vec();
    message.extend_from_slice(&[0x01, 0x00, 0x00, 0x9C]);

    let mut bus = native_bus();
    bus.load(MBOX_DOWN_REP, &message);
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let mut buf = vec![0u8; message.len()];
    let outcome = AuxRetry::new(&mut logger).read(MBOX_DOWN_REP, &mut buf, 3)?;

    assert_eq!(outcome, Outcome::Ack);
    assert_eq!(decode_header(&buf, 0)?, header);
    let line = &sink.lines()[0];
    assert!(line.contains("hint(to:0.2.5 SE  #1)"), "{line}");
    Ok(())
}

#[test]
fn multipart_message_flags_start_and_end() -> Result<()> {
    let mut first = MessageHeader::for_route(RelativeAddress::root());
    first.is_transaction_end = false;
    first.payload_bytes = 2;
    let mut last = first.clone();
    last.is_transaction_start = false;
    last.is_transaction_end = true;

    let mut bus = native_bus();
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);
    let mut retry = AuxRetry::new(&mut logger);

    for part in [&first, &last] {
        let mut bytes = part.encode().to_vec();
        bytes.extend_from_slice(&[0x30, 0x5A]);
        assert_eq!(retry.write(MBOX_UP_REQ, &bytes, 3)?, Outcome::Ack);
    }

    let lines = sink.lines();
    assert!(lines[0].contains("hint(to:0 S "), "{}", lines[0]);
    assert!(lines[1].contains("hint(to:0 E "), "{}", lines[1]);
    Ok(())
}
