/// What a successful mutation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

/// Emitted once for every successful mutation; list controllers of the
/// same collection consume it to resynchronize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationEvent {
    pub collection: &'static str,
    pub kind: MutationKind,
    pub id: Option<i64>,
}

// capacity of the broadcast channel; a list falling further behind than
// this still resynchronizes as it sees the lag.
pub(crate) const EVENT_CAPACITY: usize = 64;
