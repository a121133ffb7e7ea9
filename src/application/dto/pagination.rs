use super::news::NewsDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Page number and size after normalization of raw query input. Invalid
/// input is never rejected, it falls back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    pub fn from_raw(raw_page: Option<&str>, raw_limit: Option<&str>) -> Self {
        let page = parse_positive(raw_page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(raw_limit)
            .filter(|limit| *limit <= MAX_LIMIT)
            .unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit)
    }

    pub fn window(&self, total_count: u64) -> PageWindow {
        PageWindow {
            skip: self.skip(),
            limit: self.limit,
            page: self.page,
            total_pages: self.total_pages(total_count),
        }
    }

    pub fn metadata(&self, total_count: u64) -> PaginationMetadata {
        PaginationMetadata {
            total_pages: self.total_pages(total_count),
            current_page: self.page,
            page_limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl PageWindow {
    pub fn compute(raw_page: Option<&str>, raw_limit: Option<&str>, total_count: u64) -> Self {
        PageRequest::from_raw(raw_page, raw_limit).window(total_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMetadata {
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub current_page: u64,
    pub page_limit: u64,
}

#[derive(Debug, Clone)]
pub struct NewsPage {
    pub items: Vec<NewsDto>,
    pub metadata: PaginationMetadata,
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .and_then(|value| u64::try_from(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_fall_back_to_defaults() {
        let window = PageWindow::compute(Some("0"), Some("0"), 25);
        assert_eq!(
            window,
            PageWindow {
                skip: 0,
                limit: 10,
                page: 1,
                total_pages: 3,
            }
        );
    }

    #[test]
    fn non_positive_pages_become_first_page() {
        for raw in ["0", "-1", "-250", "abc", "", "1.5"] {
            assert_eq!(PageRequest::from_raw(Some(raw), None).page(), 1, "raw page {raw:?}");
        }
        assert_eq!(PageRequest::from_raw(None, None).page(), 1);
    }

    #[test]
    fn out_of_range_limits_become_default() {
        for raw in ["0", "-5", "101", "1000", "ten"] {
            assert_eq!(PageRequest::from_raw(None, Some(raw)).limit(), 10, "raw limit {raw:?}");
        }
        for limit in 1..=100u64 {
            let raw = limit.to_string();
            assert_eq!(PageRequest::from_raw(None, Some(&raw)).limit(), limit);
        }
    }

    #[test]
    fn skip_is_previous_pages_times_limit() {
        for page in 1..=20u64 {
            for limit in [1u64, 7, 10, 100] {
                let request =
                    PageRequest::from_raw(Some(&page.to_string()), Some(&limit.to_string()));
                assert_eq!(request.skip(), (page - 1) * limit);
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::from_raw(Some("1"), Some("10"));
        assert_eq!(request.total_pages(0), 0);
        assert_eq!(request.total_pages(1), 1);
        assert_eq!(request.total_pages(10), 1);
        assert_eq!(request.total_pages(11), 2);
    }

    #[test]
    fn metadata_uses_wire_names() {
        let metadata = PageRequest::from_raw(Some("2"), Some("5")).metadata(12);
        let json = serde_json::to_value(metadata).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "totalPages": 3, "current_page": 2, "page_limit": 5 })
        );
    }

    #[test]
    fn whitespace_around_numbers_is_tolerated() {
        let request = PageRequest::from_raw(Some(" 3 "), Some(" 20"));
        assert_eq!((request.page(), request.limit()), (3, 20));
    }
}
