use lmcore::record::Record;

/// The full related collection, fetched once so that foreign keys may
/// be resolved client side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationLookup<R: Record> {
    pub(crate) records: Vec<R>,
}

mod impls;
