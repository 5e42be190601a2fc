use lmcore::record::Record;

use crate::platform::Platform;

/// Holds the single record shown by a detail view or edited by a form.
pub struct DetailCtrl<'p, R: Record> {
    pub(crate) platform: &'p Platform,
    pub(crate) entity: R,
    pub(crate) is_new: bool,
    pub(crate) loading: bool,
}

mod impls;
