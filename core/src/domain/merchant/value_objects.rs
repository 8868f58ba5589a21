use std::collections::HashSet;

pub const PAGE_PARAM: &str = "page";
pub const OFFSET_PARAM: &str = "offset";
pub const KEYWORD_PARAM: &str = "keyword";

/// Returned to the caller instead of querying when a search has no keyword.
pub const EMPTY_KEYWORD_MESSAGE: &str = "Please enter a keyword to search";

/// Raw, unvalidated request parameters for a merchant listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerchantQuery {
    pub filters: Vec<(String, String)>,
    pub keyword: Option<String>,
    pub page: Option<String>,
    pub offset: Option<String>,
}

impl MerchantQuery {
    /// Splits request pairs into reserved parameters and filter fields.
    /// When a key repeats, its first value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut query = MerchantQuery::default();
        let mut seen = HashSet::new();

        for (key, value) in pairs {
            let key = key.into();
            if !seen.insert(key.clone()) {
                continue;
            }
            let value = value.into();

            match key.as_str() {
                PAGE_PARAM => query.page = Some(value),
                OFFSET_PARAM => query.offset = Some(value),
                KEYWORD_PARAM => query.keyword = Some(value),
                _ => query.filters.push((key, value)),
            }
        }

        query
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchMerchantsInput {
    pub page: Option<String>,
    pub offset: Option<String>,
}

/// A validated `(page, offset)` window where `offset` is the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub offset: i64,
}

impl Pagination {
    /// Rows to skip. Page 0 is read as page 1.
    pub fn skip(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.offset)
    }

    pub fn limit(&self) -> i64 {
        self.offset
    }
}

/// One page of results plus the number of rows matching the filter
/// regardless of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub pagination: Option<Pagination>,
}
