use std::{
    fmt,
    str::FromStr,
};
use url::form_urlencoded;

use crate::pagination::*;

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("unknown sort order: {s:?}")),
        }
    }
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    /// First page of the given size, sorted by identifier ascending.
    pub fn new(items_per_page: u64) -> Self {
        Self {
            active_page: 1,
            items_per_page: items_per_page.max(1),
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_order: SortOrder::Asc,
        }
    }

    /// State with no sort field, i.e. the server's default ordering.
    pub fn unsorted(items_per_page: u64) -> Self {
        Self {
            sort_field: String::new(),
            ..Self::new(items_per_page)
        }
    }

    /// Seed the state from the query string of the initiating location.
    ///
    /// Recognizes `page` (1-based), `size` and `sort=<field>,<order>`;
    /// anything unknown is ignored and anything malformed falls back to
    /// the default for that parameter.
    pub fn init_from_query(query: &str, items_per_page: u64) -> Self {
        let mut result = Self::new(items_per_page);
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(
            query.trim_start_matches('?')
        )
            .unwrap_or_else(|e| {
                log::debug!("ignoring unparsable query {query:?}: {e}");
                Vec::new()
            });
        for (key, value) in pairs.iter() {
            match key.as_str() {
                "page" => if let Some(page) = parse_positive(value) {
                    result.active_page = page;
                },
                "size" => if let Some(size) = parse_positive(value) {
                    result.items_per_page = size;
                },
                "sort" => if let Some((field, order)) = parse_sort(value) {
                    result.sort_field = field;
                    result.sort_order = order;
                },
                _ => log::trace!("ignoring query parameter {key:?}"),
            }
        }
        result
    }

    pub fn active_page(&self) -> u64 {
        self.active_page
    }

    pub fn items_per_page(&self) -> u64 {
        self.items_per_page
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_sorted(&self) -> bool {
        !self.sort_field.is_empty()
    }

    /// Back to the first page, keeping the sort and page size.
    pub fn reset(&self) -> Self {
        Self {
            active_page: 1,
            ..self.clone()
        }
    }

    /// The following page; callers check that one is available first.
    /// The last representable page stays where it is.
    pub fn advance_page(&self) -> Self {
        Self {
            active_page: self.active_page.saturating_add(1),
            ..self.clone()
        }
    }

    /// Sort by `field`: the current field has its order reversed while a
    /// different field starts ascending.  Either way this is a new query
    /// so the state returns to the first page.
    pub fn toggle_sort(&self, field: &str) -> Self {
        let sort_order = if field == self.sort_field {
            self.sort_order.flip()
        } else {
            SortOrder::Asc
        };
        Self {
            active_page: 1,
            items_per_page: self.items_per_page,
            sort_field: field.to_string(),
            sort_order,
        }
    }

    pub fn sort_indicator(&self, field: &str) -> SortIndicator {
        if field != self.sort_field {
            SortIndicator::Unsorted
        } else {
            match self.sort_order {
                SortOrder::Asc => SortIndicator::Asc,
                SortOrder::Desc => SortIndicator::Desc,
            }
        }
    }

    /// The sort expression as sent to the server, e.g. `name,desc`.
    pub fn sort_expression(&self) -> Option<String> {
        self.is_sorted()
            .then(|| format!("{},{}", self.sort_field, self.sort_order))
    }

    /// Reflect the state back into query string form.
    pub fn to_query(&self) -> String {
        match self.is_sorted() {
            true => format!(
                "page={}&sort={},{}",
                self.active_page,
                form_urlencoded::byte_serialize(self.sort_field.as_bytes())
                    .collect::<String>(),
                self.sort_order,
            ),
            false => format!("page={}", self.active_page),
        }
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim()
        .parse::<u64>()
        .ok()
        .filter(|v| *v > 0)
}

fn parse_sort(value: &str) -> Option<(String, SortOrder)> {
    let (field, order) = match value.split_once(',') {
        Some((field, order)) => (field.trim(), order.parse().ok()?),
        None => (value.trim(), SortOrder::Asc),
    };
    (!field.is_empty() && field.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.'))
        .then(|| (field.to_string(), order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = PaginationState::init_from_query("", 20);
        assert_eq!(state.active_page(), 1);
        assert_eq!(state.items_per_page(), 20);
        assert_eq!(state.sort_field(), "id");
        assert_eq!(state.sort_order(), SortOrder::Asc);
        assert_eq!(state, PaginationState::default());
    }

    #[test]
    fn from_query() {
        let state = PaginationState::init_from_query("?page=3&sort=name,desc", 20);
        assert_eq!(state.active_page(), 3);
        assert_eq!(state.sort_field(), "name");
        assert_eq!(state.sort_order(), SortOrder::Desc);

        let state = PaginationState::init_from_query("page=2&size=50&sort=phone", 20);
        assert_eq!(state.active_page(), 2);
        assert_eq!(state.items_per_page(), 50);
        assert_eq!(state.sort_field(), "phone");
        assert_eq!(state.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn garbage_falls_back() {
        let state = PaginationState::init_from_query(
            "page=-4&size=0&sort=name,sideways&utm=x&&=&%zz",
            15,
        );
        assert_eq!(state, PaginationState::new(15));

        let state = PaginationState::init_from_query("page=abc&sort=,desc", 15);
        assert_eq!(state, PaginationState::new(15));

        let state = PaginationState::init_from_query("sort=drop%20table,asc", 15);
        assert_eq!(state.sort_field(), "id");

        // a malformed value does not discard the well-formed ones
        let state = PaginationState::init_from_query("page=4&sort=name,nope", 15);
        assert_eq!(state.active_page(), 4);
        assert_eq!(state.sort_field(), "id");
    }

    #[test]
    fn last_page_does_not_overflow() {
        let state = PaginationState::init_from_query("page=18446744073709551615", 20);
        assert_eq!(state.active_page(), u64::MAX);
        assert_eq!(state.advance_page().active_page(), u64::MAX);
        assert_eq!(state.advance_page().reset().active_page(), 1);
    }

    #[test]
    fn zero_page_size_clamped() {
        assert_eq!(PaginationState::new(0).items_per_page(), 1);
    }

    #[test]
    fn reset_and_advance() {
        let state = PaginationState::init_from_query("page=1&sort=name,desc", 20)
            .advance_page()
            .advance_page();
        assert_eq!(state.active_page(), 3);
        let reset = state.reset();
        assert_eq!(reset.active_page(), 1);
        assert_eq!(reset.sort_field(), "name");
        assert_eq!(reset.sort_order(), SortOrder::Desc);
        assert_eq!(reset.items_per_page(), 20);
    }

    #[test]
    fn toggle_sort() {
        let state = PaginationState::new(20).advance_page();

        let same = state.toggle_sort("id");
        assert_eq!(same.active_page(), 1);
        assert_eq!(same.sort_order(), SortOrder::Desc);
        assert_eq!(same.toggle_sort("id").sort_order(), SortOrder::Asc);

        let other = same.advance_page().toggle_sort("name");
        assert_eq!(other.active_page(), 1);
        assert_eq!(other.sort_field(), "name");
        assert_eq!(other.sort_order(), SortOrder::Asc);
    }

    #[test]
    fn sort_indicator() {
        let state = PaginationState::new(20).toggle_sort("name").toggle_sort("name");
        assert_eq!(state.sort_indicator("name"), SortIndicator::Desc);
        assert_eq!(state.sort_indicator("id"), SortIndicator::Unsorted);
        assert_eq!(
            PaginationState::new(20).sort_indicator("id"),
            SortIndicator::Asc,
        );
    }

    #[test]
    fn query_reflection() {
        let state = PaginationState::new(20)
            .toggle_sort("createdAt")
            .toggle_sort("createdAt")
            .advance_page();
        assert_eq!(state.to_query(), "page=2&sort=createdAt,desc");
        assert_eq!(PaginationState::init_from_query(&state.to_query(), 20), state);

        let unsorted = PaginationState::unsorted(20);
        assert_eq!(unsorted.to_query(), "page=1");
        assert_eq!(unsorted.sort_expression(), None);
    }
}
