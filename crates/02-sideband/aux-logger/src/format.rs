use core::fmt::Write;

use aux_bus::{Action, AddressType, BusStatus};

pub fn status_tag(status: BusStatus) -> &'static str {
    match status {
        BusStatus::Success => "OK ",
        BusStatus::Defer => "DEFER ",
        BusStatus::Nack => "NACK ",
        BusStatus::Unsupported => "UNSUPPORTED ",
    }
}

pub fn action_tag(action: Action) -> &'static str {
    match action {
        Action::Read => "RD ",
        Action::Write => "WR ",
    }
}

pub fn type_tag(address_type: AddressType) -> &'static str {
    match address_type {
        AddressType::Native => "NAT ",
        AddressType::I2c => "I2C ",
        AddressType::I2cMot => "I2CMOT ",
    }
}

/// Upper-case hex, every byte followed by a space.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for byte in bytes {
        let _ = write!(out, "{byte:02X} ");
    }
    out
}

/// Common start of every trace line.
pub(crate) fn line_prefix(
    incomplete: bool,
    status: BusStatus,
    action: Action,
    address_type: AddressType,
    address: u32,
) -> String {
    format!(
        "DP-AUX> {}{}{}{}{address:04X}h",
        if incomplete { "INCOMPLETE " } else { "" },
        status_tag(status),
        action_tag(action),
        type_tag(address_type),
    )
}
