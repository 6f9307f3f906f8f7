use aux_bus::BusStatus;
use core::fmt;

/// Classified result of one transaction or of a whole chunked span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Every requested byte moved.
    Ack,
    /// Hard rejection by the sink. Never retried.
    Nack,
    /// Transient failure; retried while budget remains, final once exhausted.
    Defer,
    /// Zero bytes completed: the register is not implemented.
    UnsupportedRegister,
}

impl Outcome {
    #[inline]
    pub fn is_ack(self) -> bool {
        matches!(self, Outcome::Ack)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Ack => "ack",
            Outcome::Nack => "nack",
            Outcome::Defer => "defer",
            Outcome::UnsupportedRegister => "unsupported register",
        })
    }
}

/// Maps a raw transport reply onto an [`Outcome`].
///
/// Arms are evaluated top to bottom and the first match wins; several guards
/// overlap, so the order is part of the contract. Transient outcomes consume
/// one unit of `retries` while any remains. The outcome is `Defer` whether or
/// not a retry was available; callers decide whether to reissue by observing
/// the budget.
pub fn classify(
    status: BusStatus,
    completed: usize,
    requested: usize,
    retries: &mut u32,
) -> Outcome {
    match status {
        BusStatus::Success if completed == requested && completed != 0 => Outcome::Ack,
        BusStatus::Defer => {
            consume_retry(retries);
            Outcome::Defer
        }
        BusStatus::Nack => Outcome::Nack,
        _ if completed == 0 => Outcome::UnsupportedRegister,
        _ if completed < requested => {
            consume_retry(retries);
            Outcome::Defer
        }
        _ => Outcome::Ack,
    }
}

#[inline]
fn consume_retry(retries: &mut u32) {
    *retries = retries.saturating_sub(1);
}
