use serde::Deserialize;

/// Pagination metadata returned alongside a page of quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub next_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// Page number after `current` when stepping forward.
    ///
    /// Wraps to page 1 as soon as the step would reach `total_pages`, so the
    /// literal last page is never reached this way. The backend behaves the
    /// same and the quirk is kept on purpose.
    pub fn wrap_next(&self, current: u32) -> u32 {
        let next = current + 1;
        if next >= self.total_pages {
            1
        } else {
            next
        }
    }

    /// Page number before `current` when stepping backward, wrapping from
    /// page 1 to the last page.
    pub fn wrap_prev(&self, current: u32) -> u32 {
        if current <= 1 {
            self.total_pages.max(1)
        } else {
            current - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination(total_pages: u32) -> Pagination {
        Pagination {
            current_page: 1,
            next_page: 2,
            total_pages,
        }
    }

    #[test]
    fn test_next_steps_forward() {
        let pag = pagination(5);
        assert_eq!(pag.wrap_next(1), 2);
        assert_eq!(pag.wrap_next(3), 4);
    }

    #[test]
    fn test_next_wraps_before_last_page() {
        let pag = pagination(5);
        assert_eq!(pag.wrap_next(4), 1);
    }

    #[test]
    fn test_four_nexts_return_to_page_one_when_five_pages() {
        let pag = pagination(5);
        let mut page = 1;
        for _ in 0..4 {
            page = pag.wrap_next(page);
        }
        assert_eq!(page, 1);
    }

    #[test]
    fn test_next_cycle_length_is_total_minus_one() {
        for total in [2, 3, 7, 100] {
            let pag = pagination(total);
            let mut page = 1;
            for _ in 0..total - 1 {
                page = pag.wrap_next(page);
            }
            assert_eq!(page, 1, "total_pages = {}", total);
        }
    }

    #[test]
    fn test_prev_steps_backward() {
        let pag = pagination(5);
        assert_eq!(pag.wrap_prev(3), 2);
    }

    #[test]
    fn test_prev_wraps_to_last_page() {
        let pag = pagination(5);
        assert_eq!(pag.wrap_prev(1), 5);
    }

    #[test]
    fn test_single_page_always_stays_on_page_one() {
        let pag = pagination(1);
        assert_eq!(pag.wrap_next(1), 1);
        assert_eq!(pag.wrap_prev(1), 1);
    }

    #[test]
    fn test_empty_result_set_stays_on_page_one() {
        let pag = pagination(0);
        assert_eq!(pag.wrap_next(1), 1);
        assert_eq!(pag.wrap_prev(1), 1);
    }

    #[test]
    fn test_deserializes_from_camel_case() {
        let json = r#"{"currentPage": 2, "nextPage": 3, "totalPages": 5}"#;
        let pag: Pagination = serde_json::from_str(json).unwrap();
        assert_eq!(pag.current_page, 2);
        assert_eq!(pag.next_page, 3);
        assert_eq!(pag.total_pages, 5);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let pag: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pag.total_pages, 0);
    }
}
