use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: u64 = 20;
pub const DEFAULT_SORT_FIELD: &str = "id";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// How a column header should present its sort state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Asc,
    Desc,
}

/// The pagination and sort parameters of a list screen.
///
/// All transitions return a new state; `active_page` is 1-based and is
/// never below 1.  An empty `sort_field` denotes the unsorted request
/// where the server's default ordering applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    active_page: u64,
    items_per_page: u64,
    sort_field: String,
    sort_order: SortOrder,
}

mod impls;
