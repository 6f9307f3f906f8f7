//! Retry engine driving a logging decorator over a scripted bus.

use anyhow::Result;
use aux_bus::{BusStatus, MBOX_DOWN_REQ};
use aux_logger::{AuxLogger, LoggerConfig, MemorySink};
use aux_retry::{AuxRetry, Outcome};
use aux_scenarios::{native_bus, Response, ScriptedBus};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn chunked_read_traces_every_chunk() -> Result<()> {
    init_logging();
    let mut bus = ScriptedBus::new(16);
    bus.load(0x0000, &[0x14; 40]);
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let mut buf = [0u8; 40];
    let outcome = AuxRetry::new(&mut logger).read(0x0000, &mut buf, 3)?;

    assert_eq!(outcome, Outcome::Ack);
    assert_eq!(buf, [0x14; 40]);
    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("DP-AUX> OK RD NAT 0000h"));
    assert!(lines[1].starts_with("DP-AUX> OK RD NAT 0010h"));
    assert_eq!(lines[2], "DP-AUX> OK RD NAT 0020h { 14 14 14 14 14 14 14 14  }");
    Ok(())
}

#[test]
fn deferred_attempts_are_traced_then_acked() -> Result<()> {
    let mut bus = native_bus();
    bus.push_n(Response::Defer, 2);
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let outcome = AuxRetry::new(&mut logger).write_transaction(0x0600, &[0x01], 2)?;

    assert_eq!(outcome, Outcome::Ack);
    assert_eq!(
        sink.lines(),
        vec![
            "DP-AUX> INCOMPLETE DEFER WR NAT 0600h {  }".to_string(),
            "DP-AUX> INCOMPLETE DEFER WR NAT 0600h {  }".to_string(),
            "DP-AUX> OK WR NAT 0600h { 01  }".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn exhausted_budget_surfaces_defer_through_the_logger() -> Result<()> {
    let mut bus = native_bus();
    bus.always(Response::Defer);
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let mut buf = [0u8; 2];
    let outcome = AuxRetry::new(&mut logger).read(0x0202, &mut buf, 4)?;

    assert_eq!(outcome, Outcome::Defer);
    assert_eq!(sink.len(), 5);
    drop(logger);
    assert_eq!(bus.call_count(), 5);
    Ok(())
}

#[test]
fn nack_midway_stops_traffic_and_tracing() -> Result<()> {
    let mut bus = native_bus();
    bus.push(Response::Complete).push(Response::Nack);
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let outcome = AuxRetry::new(&mut logger).write(0x0100, &[0xEE; 48], 3)?;

    assert_eq!(outcome, Outcome::Nack);
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "DP-AUX> INCOMPLETE NACK WR NAT 0110h {  }");
    Ok(())
}

#[test]
fn unsupported_register_is_reported_once() -> Result<()> {
    let mut bus = native_bus();
    bus.always(Response::Raw {
        status: BusStatus::Unsupported,
        completed: 0,
    });
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus).with_sink(&sink);

    let (outcome, _) = AuxRetry::new(&mut logger).read_byte(0x2210, 3)?;

    assert_eq!(outcome, Outcome::UnsupportedRegister);
    assert_eq!(
        sink.lines(),
        vec!["DP-AUX> INCOMPLETE UNSUPPORTED RD NAT 2210h {  }".to_string()]
    );
    Ok(())
}

#[test]
fn mailbox_write_decodes_only_the_first_chunk() -> Result<()> {
    let mut bus = native_bus();
    let sink = MemorySink::new();
    let mut logger = AuxLogger::new(&mut bus)
        .with_sink(&sink)
        .with_config(LoggerConfig::default().with_verbose_hint(true))?;

    let mut message: Vec<u8> = vec![0x10, 0x17, 0xC6, 0x11];
    message.extend(std::iter::repeat(0xAB).take(20));
    let outcome = AuxRetry::new(&mut logger).write(MBOX_DOWN_REQ, &message, 3)?;

    assert_eq!(outcome, Outcome::Ack);
    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].starts_with("DP-AUX> OK WR NAT 1000h hint(to:0 SE ALLOCATE_PAYLOAD #0)"),
        "{}",
        lines[0]
    );
    assert!(lines[0].contains("{ 10 17 C6 | 11 AB"));
    assert!(lines[1].starts_with("DP-AUX> OK WR NAT 1010h { AB"));
    drop(logger);
    assert_eq!(bus.peek(MBOX_DOWN_REQ, message.len()), message);
    Ok(())
}
