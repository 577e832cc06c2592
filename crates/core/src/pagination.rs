// Keyset pagination
//
// Pages are ordered by id descending (newest first, since ids are UUID v7).
// The cursor is the id of the last item of the previous page; the next page
// holds ids strictly below it. Stores are asked for `limit + 1` rows so the
// presence of a following page can be detected without a count query.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{HookwatchError, Result};
use crate::webhook::WebhookSummary;

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MIN_PAGE_LIMIT: u32 = 1;
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Items that can be paged by their identifier.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for WebhookSummary {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for Uuid {
    fn key(&self) -> Uuid {
        *self
    }
}

/// A validated (limit, cursor) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    cursor: Option<Uuid>,
}

impl PageRequest {
    /// Validate raw query input. A missing limit falls back to the default.
    pub fn new(limit: Option<i64>, cursor: Option<Uuid>) -> Result<Self> {
        let limit = match limit {
            None => DEFAULT_PAGE_LIMIT,
            Some(value) if (MIN_PAGE_LIMIT as i64..=MAX_PAGE_LIMIT as i64).contains(&value) => {
                value as u32
            }
            Some(value) => return Err(HookwatchError::InvalidLimit(value)),
        };
        Ok(Self { limit, cursor })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn cursor(&self) -> Option<Uuid> {
        self.cursor
    }

    /// Number of rows to request from the store.
    pub fn fetch_limit(&self) -> i64 {
        i64::from(self.limit) + 1
    }

    /// Whether an id falls inside this request's window.
    pub fn admits(&self, id: Uuid) -> bool {
        self.cursor.map_or(true, |cursor| id < cursor)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            cursor: None,
        }
    }
}

/// One page of results plus the cursor for the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Uuid>,
}

impl<T: Keyed> Page<T> {
    /// Derive a page from rows fetched with `fetch_limit()`, already in
    /// descending id order.
    pub fn from_overfetch(mut rows: Vec<T>, limit: u32) -> Self {
        let limit = limit as usize;
        if rows.len() > limit {
            rows.truncate(limit);
            let next_cursor = rows.last().map(Keyed::key);
            Self {
                items: rows,
                next_cursor,
            }
        } else {
            Self {
                items: rows,
                next_cursor: None,
            }
        }
    }
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal keyset store over a fixed id set, newest first.
    fn fetch(ids: &[Uuid], request: &PageRequest) -> Vec<Uuid> {
        let mut window: Vec<Uuid> = ids.iter().copied().filter(|id| request.admits(*id)).collect();
        window.sort_by(|a, b| b.cmp(a));
        window.truncate(request.fetch_limit() as usize);
        window
    }

    fn ids(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::now_v7()).collect()
    }

    #[test]
    fn test_default_limit() {
        let request = PageRequest::new(None, None).unwrap();
        assert_eq!(request.limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(request.fetch_limit(), 21);
        assert_eq!(request.cursor(), None);
    }

    #[test]
    fn test_limit_bounds() {
        assert!(PageRequest::new(Some(1), None).is_ok());
        assert!(PageRequest::new(Some(100), None).is_ok());
        assert!(matches!(
            PageRequest::new(Some(0), None),
            Err(HookwatchError::InvalidLimit(0))
        ));
        assert!(PageRequest::new(Some(101), None).is_err());
        assert!(PageRequest::new(Some(-5), None).is_err());
    }

    #[test]
    fn test_window_is_strictly_below_cursor() {
        let all = ids(3);
        let request = PageRequest::new(Some(10), Some(all[1])).unwrap();
        assert!(request.admits(all[0]));
        assert!(!request.admits(all[1]));
        assert!(!request.admits(all[2]));
    }

    #[test]
    fn test_from_overfetch_with_more_rows() {
        let rows = ids(3);
        let page = Page::from_overfetch(rows.clone(), 2);
        assert_eq!(page.items, rows[..2].to_vec());
        assert_eq!(page.next_cursor, Some(rows[1]));
    }

    #[test]
    fn test_from_overfetch_last_page() {
        let rows = ids(2);
        let page = Page::from_overfetch(rows.clone(), 2);
        assert_eq!(page.items, rows);
        assert_eq!(page.next_cursor, None);

        let empty: Page<Uuid> = Page::from_overfetch(vec![], 5);
        assert!(empty.items.is_empty());
        assert_eq!(empty.next_cursor, None);
    }

    #[test]
    fn test_two_pages_of_three() {
        let mut all = ids(3);
        all.reverse(); // id1 (newest) > id2 > id3

        let first = PageRequest::new(Some(2), None).unwrap();
        let page = Page::from_overfetch(fetch(&all, &first), first.limit());
        assert_eq!(page.items, vec![all[0], all[1]]);
        assert_eq!(page.next_cursor, Some(all[1]));

        let second = PageRequest::new(Some(2), page.next_cursor).unwrap();
        let page = Page::from_overfetch(fetch(&all, &second), second.limit());
        assert_eq!(page.items, vec![all[2]]);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_paging_visits_every_id_once_in_order() {
        for n in [0usize, 1, 7, 20, 41, 150] {
            let all = ids(n);
            for limit in [1i64, 2, 3, 20, 50, 100] {
                let mut seen = Vec::new();
                let mut cursor = None;
                loop {
                    let request = PageRequest::new(Some(limit), cursor).unwrap();
                    let page = Page::from_overfetch(fetch(&all, &request), request.limit());
                    assert!(page.items.len() <= limit as usize);
                    seen.extend(page.items);
                    match page.next_cursor {
                        Some(next) => cursor = Some(next),
                        None => break,
                    }
                }

                let mut expected = all.clone();
                expected.sort_by(|a, b| b.cmp(a));
                assert_eq!(seen, expected, "n={n} limit={limit}");
            }
        }
    }

    #[test]
    fn test_map_keeps_cursor() {
        let rows = ids(3);
        let page = Page::from_overfetch(rows, 1).map(|id| id.to_string());
        assert_eq!(page.items.len(), 1);
        assert!(page.next_cursor.is_some());
    }
}
