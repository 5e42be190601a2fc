use lmcore::record::Record;

use crate::handle::{
    DetailCtrl,
    MutationCtrl,
};

/// Where the screen goes once the confirmation is dealt with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    ReturnToList,
}

/// The confirmation step before deleting a record.
pub struct DeleteCtrl<'p, R: Record> {
    pub(crate) id: i64,
    pub(crate) detail: DetailCtrl<'p, R>,
    pub(crate) mutation: MutationCtrl<'p, R>,
}

mod impls;
