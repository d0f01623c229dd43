use serde::Deserialize;

/// Pagination envelope attached to every listing response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            items_per_page: 1,
        }
    }
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32, items_per_page: u32) -> Self {
        Self {
            current_page,
            total_pages,
            items_per_page,
        }
        .normalized()
    }

    /// Clamp server-provided values so that `1 <= current_page <= max(total_pages, 1)`
    /// and `items_per_page >= 1`.
    pub fn normalized(self) -> Self {
        let last = self.total_pages.max(1);
        Self {
            current_page: self.current_page.clamp(1, last),
            total_pages: self.total_pages,
            items_per_page: self.items_per_page.max(1),
        }
    }

    /// Whether a pagination control should be rendered at all.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }
}

/// One page of a listing response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> ResultPage<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ResultPage<U> {
        ResultPage {
            items: self.items.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let p: Pagination =
            serde_json::from_str(r#"{"currentPage":3,"totalPages":7,"itemsPerPage":20}"#).unwrap();
        assert_eq!(p, Pagination::new(3, 7, 20));
    }

    #[test]
    fn test_normalized_clamps_current_page() {
        let p = Pagination {
            current_page: 12,
            total_pages: 5,
            items_per_page: 10,
        }
        .normalized();
        assert_eq!(p.current_page, 5);

        let p = Pagination {
            current_page: 0,
            total_pages: 5,
            items_per_page: 0,
        }
        .normalized();
        assert_eq!(p.current_page, 1);
        assert_eq!(p.items_per_page, 1);
    }

    #[test]
    fn test_normalized_with_no_pages() {
        let p = Pagination::new(4, 0, 10);
        assert_eq!(p.current_page, 1);
        assert!(!p.has_multiple_pages());
        assert!(p.is_first_page());
        assert!(p.is_last_page());
    }

    #[test]
    fn test_first_and_last_page() {
        let p = Pagination::new(1, 3, 10);
        assert!(p.is_first_page());
        assert!(!p.is_last_page());

        let p = Pagination::new(3, 3, 10);
        assert!(!p.is_first_page());
        assert!(p.is_last_page());
    }

    #[test]
    fn test_result_page_map_keeps_pagination() {
        let page = ResultPage {
            items: vec![1, 2, 3],
            pagination: Pagination::new(2, 4, 3),
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.pagination, Pagination::new(2, 4, 3));
    }
}
