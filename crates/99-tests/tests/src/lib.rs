//! Cross-crate scenarios for the AUX retry and logging stack.

#[cfg(test)]
mod logged_retry;

#[cfg(test)]
mod sideband_roundtrip;
