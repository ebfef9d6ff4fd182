//! Page selection over an in-memory list and the JSON envelope around it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// A validated `page`/`pageSize` pair. Both values are always >= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Builds a request, replacing non-positive values with the defaults.
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page: positive_or(page, DEFAULT_PAGE),
            page_size: positive_or(page_size, DEFAULT_PAGE_SIZE),
        }
    }

    /// Reads `page` and `pageSize` from a raw (undecoded) query string.
    ///
    /// Missing, non-integer, or non-positive values fall back to the
    /// defaults. When a key repeats, the first occurrence wins.
    pub fn from_query(query: Option<&str>) -> Self {
        let query = query.unwrap_or_default();
        Self {
            page: parse_param(query, "page", DEFAULT_PAGE),
            page_size: parse_param(query, "pageSize", DEFAULT_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Index range of this page inside a list of `total` items, clamped to
    /// `[0, total]`. Pages past the end yield an empty range.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let total = total as u64;
        let start = (self.page - 1).saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start as usize..end as usize
    }
}

fn positive_or(value: i64, default: u64) -> u64 {
    if value < 1 {
        default
    } else {
        value as u64
    }
}

fn parse_param(query: &str, key: &str, default: u64) -> u64 {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.parse::<i64>().ok())
        .map(|v| positive_or(v, default))
        .unwrap_or(default)
}

/// Number of pages needed for `total_items` at `page_size` per page.
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    total_items.div_ceil(page_size.max(1))
}

/// One page of items plus the metadata needed to walk the rest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub data: Vec<T>,
}

/// Cuts the requested page out of `items`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Paginated<T> {
    let total_items = items.len();
    let range = request.bounds(total_items);
    let data = items
        .into_iter()
        .skip(range.start)
        .take(range.end - range.start)
        .collect();

    Paginated {
        page: request.page,
        page_size: request.page_size,
        total_items: total_items as u64,
        total_pages: total_pages(total_items as u64, request.page_size),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn defaults_when_query_missing() {
        assert_eq!(PageRequest::from_query(None), PageRequest::default());
        assert_eq!(PageRequest::from_query(Some("")), PageRequest::default());
    }

    #[test]
    fn reads_page_and_page_size() {
        let req = PageRequest::from_query(Some("page=3&pageSize=10"));
        assert_eq!(req.page(), 3);
        assert_eq!(req.page_size(), 10);
    }

    #[test]
    fn page_zero_or_garbage_falls_back_to_one() {
        assert_eq!(PageRequest::from_query(Some("page=0")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("page=abc")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("page=-4")).page(), 1);
        assert_eq!(PageRequest::from_query(Some("page=2.5")).page(), 1);
    }

    #[test]
    fn page_size_negative_or_garbage_falls_back_to_five() {
        assert_eq!(PageRequest::from_query(Some("pageSize=-1")).page_size(), 5);
        assert_eq!(PageRequest::from_query(Some("pageSize=ten")).page_size(), 5);
        assert_eq!(PageRequest::from_query(Some("pageSize=0")).page_size(), 5);
        assert_eq!(PageRequest::from_query(Some("pageSize=")).page_size(), 5);
    }

    #[test]
    fn key_names_are_case_sensitive() {
        let req = PageRequest::from_query(Some("PAGE=3&pagesize=9"));
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn first_repeated_key_wins() {
        let req = PageRequest::from_query(Some("page=2&page=7"));
        assert_eq!(req.page(), 2);
    }

    #[test]
    fn value_overflowing_i64_falls_back() {
        let req = PageRequest::from_query(Some("page=99999999999999999999"));
        assert_eq!(req.page(), 1);
    }

    #[test]
    fn new_applies_same_fallbacks() {
        assert_eq!(PageRequest::new(0, -1), PageRequest::default());
        assert_eq!(PageRequest::new(4, 2).bounds(100), 6..8);
    }

    #[test]
    fn twenty_three_items_in_pages_of_five() {
        let last = paginate(numbers(23), PageRequest::new(5, 5));
        assert_eq!(last.total_pages, 5);
        assert_eq!(last.total_items, 23);
        assert_eq!(last.data, vec![20, 21, 22]);

        let past_end = paginate(numbers(23), PageRequest::new(6, 5));
        assert_eq!(past_end.total_pages, 5);
        assert!(past_end.data.is_empty());
    }

    #[test]
    fn whole_list_in_one_page() {
        let page = paginate(numbers(7), PageRequest::new(1, 7));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.data, numbers(7));
    }

    #[test]
    fn empty_list_has_zero_pages() {
        let page = paginate(Vec::<usize>::new(), PageRequest::default());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn huge_values_saturate_instead_of_overflowing() {
        let req = PageRequest::new(i64::MAX, i64::MAX);
        assert_eq!(req.bounds(10), 10..10);
        let page = paginate(numbers(10), req);
        assert_eq!(page.total_pages, 1);
        assert!(page.data.is_empty());
    }

    #[test]
    fn envelope_uses_camel_case_keys() {
        let page = paginate(numbers(23), PageRequest::new(6, 5));
        insta::assert_json_snapshot!(page, @r###"
        {
          "page": 6,
          "pageSize": 5,
          "totalItems": 23,
          "totalPages": 5,
          "data": []
        }
        "###);
    }
}
