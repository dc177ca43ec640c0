// Sorting and pagination over in-memory record lists

use std::cmp::Ordering;

use serde::Serialize;
use thiserror::Error;

use super::Record;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Rejected list query parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("'{name}' must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Comparable projection of one record field
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    /// Natural ordering of the field type; absent values sort first
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
            (SortKey::Missing, _) => Ordering::Less,
            (_, SortKey::Missing) => Ordering::Greater,
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (SortKey::Int(a), SortKey::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (SortKey::Float(a), SortKey::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

impl From<Option<i32>> for SortKey {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SortKey::Missing, |v| SortKey::Int(v as i64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `desc` (any case) sorts descending
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub limit: usize,
}

impl Page {
    /// Saturates, so a page far past the end is simply empty
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.limit)
    }
}

/// Validated list options shared by every resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub sort_by: Option<String>,
    pub order: SortOrder,
    pub page: Option<Page>,
}

impl ListOptions {
    /// Builds options from raw query values. Pagination applies when either
    /// `page` or `limit` is present; the missing one takes its default.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> Result<Self, QueryError> {
        let page = match (page, limit) {
            (None, None) => None,
            (page, limit) => Some(Page {
                page: parse_positive("page", page, DEFAULT_PAGE)?,
                limit: parse_positive("limit", limit, DEFAULT_LIMIT)?,
            }),
        };

        Ok(Self {
            sort_by: sort_by
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            order: order.map(SortOrder::parse).unwrap_or_default(),
            page,
        })
    }
}

fn parse_positive(
    name: &'static str,
    value: Option<&str>,
    default: usize,
) -> Result<usize, QueryError> {
    let Some(raw) = value else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(QueryError::InvalidNumber {
            name,
            value: raw.to_string(),
        }),
    }
}

/// One page of a list plus the counts needed to walk the rest
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// List response: a bare array, or a page envelope when pagination was requested
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    All(Vec<T>),
    Page(Paginated<T>),
}

impl<T> Listing<T> {
    /// Records contained in the listing
    pub fn items(&self) -> &[T] {
        match self {
            Listing::All(items) => items,
            Listing::Page(page) => &page.data,
        }
    }
}

/// Stable sort by a named field. Unknown fields leave the order untouched.
pub fn sort_records<T: Record>(items: &mut [T], field: &str, order: SortOrder) {
    if items.first().and_then(|item| item.sort_key(field)).is_none() {
        return;
    }
    items.sort_by(|a, b| {
        let a = a.sort_key(field).unwrap_or(SortKey::Missing);
        let b = b.sort_key(field).unwrap_or(SortKey::Missing);
        match order {
            SortOrder::Asc => a.compare(&b),
            SortOrder::Desc => b.compare(&a),
        }
    });
}

/// Slice `[offset, offset + limit)` clamped to the list bounds
pub fn paginate<T>(items: Vec<T>, page: Page) -> Paginated<T> {
    let total = items.len();
    let data = items
        .into_iter()
        .skip(page.offset())
        .take(page.limit)
        .collect();
    Paginated {
        data,
        page: page.page,
        limit: page.limit,
        total,
        total_pages: page.total_pages(total),
    }
}

/// Sorts then paginates an already-filtered list
pub fn apply<T: Record>(mut items: Vec<T>, options: &ListOptions) -> Listing<T> {
    if let Some(field) = &options.sort_by {
        sort_records(&mut items, field, options.order);
    }
    match options.page {
        Some(page) => Listing::Page(paginate(items, page)),
        None => Listing::All(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::{item, Item};

    fn items() -> Vec<Item> {
        vec![
            item(1, "delta", 3),
            item(2, "alpha", 9),
            item(3, "charlie", 3),
            item(4, "bravo", 1),
            item(5, "echo", 7),
        ]
    }

    fn ids(items: &[Item]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_parse_without_pagination() {
        let options = ListOptions::parse(None, None, Some("name"), Some("DESC")).unwrap();
        assert_eq!(options.page, None);
        assert_eq!(options.sort_by.as_deref(), Some("name"));
        assert_eq!(options.order, SortOrder::Desc);
    }

    #[test]
    fn test_parse_fills_missing_page_or_limit() {
        let options = ListOptions::parse(Some("2"), None, None, None).unwrap();
        assert_eq!(options.page, Some(Page { page: 2, limit: DEFAULT_LIMIT }));
        let options = ListOptions::parse(None, Some("3"), None, Some("sideways")).unwrap();
        assert_eq!(options.page, Some(Page { page: 1, limit: 3 }));
        assert_eq!(options.order, SortOrder::Asc);
    }

    #[test]
    fn test_parse_rejects_bad_numbers() {
        assert!(ListOptions::parse(Some("abc"), None, None, None).is_err());
        assert_eq!(
            ListOptions::parse(Some("1"), Some("0"), None, None),
            Err(QueryError::InvalidNumber {
                name: "limit",
                value: "0".to_string()
            })
        );
    }

    #[test]
    fn test_sort_asc_desc_are_reversed() {
        let mut asc = items();
        sort_records(&mut asc, "name", SortOrder::Asc);
        let mut desc = items();
        sort_records(&mut desc, "name", SortOrder::Desc);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
        assert_eq!(ids(&asc), vec![2, 4, 3, 1, 5]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut list = items();
        sort_records(&mut list, "score", SortOrder::Asc);
        assert_eq!(ids(&list), vec![4, 1, 3, 5, 2]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_order() {
        let mut list = items();
        sort_records(&mut list, "colour", SortOrder::Desc);
        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pages_reconstruct_full_list() {
        let all = items();
        let mut rebuilt = Vec::new();
        let first = paginate(all.clone(), Page { page: 1, limit: 2 });
        assert_eq!(first.total_pages, 3);
        for page in 1..=first.total_pages {
            let chunk = paginate(all.clone(), Page { page, limit: 2 });
            assert!(chunk.data.len() <= 2);
            rebuilt.extend(chunk.data);
        }
        assert_eq!(rebuilt, all);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = paginate(items(), Page { page: 9, limit: 2 });
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let options = ListOptions::parse(Some("18446744073709551615"), Some("10"), None, None).unwrap();
        let page = options.page.unwrap();
        assert_eq!(page.offset(), usize::MAX);
        let chunk = paginate(items(), page);
        assert!(chunk.data.is_empty());
        assert_eq!(chunk.total, 5);
        assert_eq!(chunk.total_pages, 1);
    }

    #[test]
    fn test_sort_key_missing_sorts_first() {
        assert_eq!(SortKey::Missing.compare(&SortKey::Int(1)), Ordering::Less);
        assert_eq!(SortKey::from(Some(3)).compare(&SortKey::from(None)), Ordering::Greater);
        assert_eq!(SortKey::Int(2).compare(&SortKey::Float(2.5)), Ordering::Less);
    }

    #[test]
    fn test_apply_returns_envelope_only_when_paginated() {
        let options = ListOptions::parse(None, None, Some("id"), Some("desc")).unwrap();
        match apply(items(), &options) {
            Listing::All(list) => assert_eq!(ids(&list), vec![5, 4, 3, 2, 1]),
            Listing::Page(_) => panic!("expected a bare list"),
        }

        let options = ListOptions::parse(Some("2"), Some("2"), None, None).unwrap();
        match apply(items(), &options) {
            Listing::Page(page) => assert_eq!(ids(&page.data), vec![3, 4]),
            Listing::All(_) => panic!("expected a page"),
        }
    }
}
