//! Pagination relations advertised by a collection response.
//!
//! The collection endpoint describes its neighbouring pages through a
//! `Link` header in the RFC 5988 style, e.g.
//!
//! ```text
//! </api/leads?page=1&size=20>; rel="next", </api/leads?page=2&size=20>; rel="last"
//! ```
//!
//! Only the zero-based `page` index of each relation is retained, which
//! is all the infinite scroll driver needs to decide whether to continue.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageLinks {
    pub first: Option<u64>,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub last: Option<u64>,
}

// only used to resolve relative references found in the header.
const BASE: &str = "http://localhost/";

impl PageLinks {
    /// Parse the value of a `Link` header.  Entries that cannot be
    /// understood are skipped, as are relations other than the four
    /// pagination ones.
    pub fn parse(header: &str) -> Self {
        let mut result = Self::default();
        for entry in split_entries(header) {
            let mut sections = entry.split(';');
            let Some(target) = sections.next()
                .map(str::trim)
                .and_then(|s| s.strip_prefix('<'))
                .and_then(|s| s.strip_suffix('>'))
            else {
                log::trace!("skipping malformed link entry: {entry:?}");
                continue;
            };
            let Some(rel) = sections
                .filter_map(|param| {
                    let (name, value) = param.split_once('=')?;
                    (name.trim() == "rel")
                        .then(|| value.trim().trim_matches('"'))
                })
                .next()
            else {
                continue;
            };
            let page = Url::parse(BASE)
                .and_then(|base| base.join(target))
                .ok()
                .and_then(|url| page_index(&url))
                .unwrap_or(0);
            match rel {
                "first" => result.first = Some(page),
                "prev" => result.prev = Some(page),
                "next" => result.next = Some(page),
                "last" => result.last = Some(page),
                _ => (),
            }
        }
        result
    }

    pub fn has_next_page(&self) -> bool {
        self.next.is_some()
    }

    pub fn next_page_index(&self) -> Option<u64> {
        self.next
    }
}

// Commas may appear inside the bracketed target (e.g. `sort=id,asc`),
// so only those outside of the brackets separate the entries.
fn split_entries(header: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in header.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                result.push(&header[start..i]);
                start = i + 1;
            }
            _ => (),
        }
    }
    result.push(&header[start..]);
    result
}

fn page_index(url: &Url) -> Option<u64> {
    url.query_pairs()
        .find(|(name, _)| name == "page")
        .and_then(|(_, value)| value.parse().ok())
}
