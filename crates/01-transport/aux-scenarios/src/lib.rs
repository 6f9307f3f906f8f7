#![allow(missing_docs)]
//! Scripted in-memory AUX transport for exercising the layers above the bus.

mod bus;
mod script;

pub use bus::{CallRecord, ScriptedBus};
pub use script::Response;

/// Builds a bus with the native AUX burst limit and an empty register file.
pub fn native_bus() -> ScriptedBus {
    ScriptedBus::new(aux_bus::AUX_MAX_BURST)
}
