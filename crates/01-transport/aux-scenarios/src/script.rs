use aux_bus::BusStatus;

/// How the scripted bus answers one transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// Serve the whole request from the register file.
    Complete,
    /// Serve only the first `n` bytes and still report success.
    Short(usize),
    Defer,
    Nack,
    /// Report `status` with `completed` bytes served from the register file.
    Raw { status: BusStatus, completed: usize },
}

impl Response {
    /// Status and completed byte count for a request of `requested` bytes.
    pub(crate) fn resolve(self, requested: usize) -> (BusStatus, usize) {
        match self {
            Response::Complete => (BusStatus::Success, requested),
            Response::Short(n) => (BusStatus::Success, n.min(requested)),
            Response::Defer => (BusStatus::Defer, 0),
            Response::Nack => (BusStatus::Nack, 0),
            Response::Raw { status, completed } => (status, completed.min(requested)),
        }
    }
}
