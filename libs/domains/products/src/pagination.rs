//! Page/limit/sort contract for product listings.
//!
//! Pages are 1-based. A non-positive `page` or `limit` means "everything".
//! Both repository implementations go through [`PageRequest::window`] so they
//! slice identically.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Listing order, by id
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc`/`desc` in any case; anything else is ascending
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
    }
}

/// Requested slice of the product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub sort: SortOrder,
}

/// Concrete `OFFSET`/`LIMIT` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// Everything, in the given order
    pub fn all(sort: SortOrder) -> Self {
        Self::new(0, 0, sort)
    }

    /// `None` when unpaginated, otherwise rows `[(page-1)*limit, page*limit)`
    pub fn window(&self) -> Option<PageWindow> {
        if self.page <= 0 || self.limit <= 0 {
            return None;
        }

        let limit = self.limit.unsigned_abs();
        let offset = (self.page.unsigned_abs() - 1).saturating_mul(limit);
        Some(PageWindow { offset, limit })
    }

    /// Apply the window to an already sorted sequence
    pub fn apply<T>(&self, sorted: Vec<T>) -> Vec<T> {
        match self.window() {
            None => sorted,
            Some(PageWindow { offset, limit }) => {
                let offset = usize::try_from(offset).unwrap_or(usize::MAX);
                let limit = usize::try_from(limit).unwrap_or(usize::MAX);
                sorted.into_iter().skip(offset).take(limit).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse_lenient(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("DeSc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(None), SortOrder::Asc);
    }

    #[test]
    fn test_window_for_positive_page_and_limit() {
        assert_eq!(
            PageRequest::new(1, 10, SortOrder::Asc).window(),
            Some(PageWindow { offset: 0, limit: 10 })
        );
        assert_eq!(
            PageRequest::new(3, 10, SortOrder::Asc).window(),
            Some(PageWindow { offset: 20, limit: 10 })
        );
    }

    #[test]
    fn test_non_positive_values_disable_pagination() {
        for (page, limit) in [(0, 10), (1, 0), (-1, 10), (2, -5), (0, 0)] {
            assert_eq!(PageRequest::new(page, limit, SortOrder::Asc).window(), None);
        }
    }

    #[test]
    fn test_window_saturates() {
        let window = PageRequest::new(i64::MAX, i64::MAX, SortOrder::Asc)
            .window()
            .unwrap();
        assert_eq!(window.offset, u64::MAX);
    }

    #[test]
    fn test_apply_slices_pages() {
        let items: Vec<u32> = (1..=23).collect();

        let page = |n| PageRequest::new(n, 10, SortOrder::Asc).apply(items.clone());
        assert_eq!(page(1), (1..=10).collect::<Vec<_>>());
        assert_eq!(page(2), (11..=20).collect::<Vec<_>>());
        assert_eq!(page(3), vec![21, 22, 23]);
        assert!(page(4).is_empty());

        assert_eq!(PageRequest::all(SortOrder::Asc).apply(items.clone()), items);
    }
}
