mod delete;
mod detail;
mod list;
mod mutation;
mod relation;

pub use delete::{
    DeleteCtrl,
    Outcome,
};
pub use detail::DetailCtrl;
pub use list::{
    Applied,
    FetchTicket,
    ListCtrl,
};
pub use mutation::MutationCtrl;
pub use relation::RelationLookup;
