use lmcore::record::Record;

use crate::platform::Platform;

/// Submits writes of a single record type.
///
/// A successful write emits one [`crate::event::MutationEvent`]; the
/// controller never touches any list itself.
pub struct MutationCtrl<'p, R: Record> {
    pub(crate) platform: &'p Platform,
    pub(crate) entity: Option<R>,
    pub(crate) updating: bool,
}

mod impls;
