//! Validated pagination primitives for list endpoints.
//!
//! A [`PageRequest`] is the only way page/size parameters reach a store
//! port: construction applies the endpoint defaults first and then rejects
//! anything below one, so downstream code never re-validates. The offset
//! and limit handed to the store derive from it (`skip = size * (page - 1)`,
//! `take = size`).

use serde::Serialize;
use thiserror::Error;

/// Rejection raised when page or size fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page or size was non-numeric or below one.
    #[error("invalid page or size")]
    Invalid,
}

/// A page/size pair proven valid at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Page used when the client sends none.
    pub const DEFAULT_PAGE: u32 = 1;
    /// Size used when the client sends none.
    pub const DEFAULT_SIZE: u32 = 10;

    /// Build a request from already-numeric values.
    ///
    /// # Errors
    /// Returns [`PageRequestError::Invalid`] when either value is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert!(PageRequest::new(1, 10).is_ok());
    /// assert!(PageRequest::new(0, 10).is_err());
    /// ```
    pub const fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if page < 1 || size < 1 {
            return Err(PageRequestError::Invalid);
        }
        Ok(Self { page, size })
    }

    /// Build a request from raw query values, applying defaults for absent
    /// ones before validating.
    ///
    /// Defaults are applied first, so an explicit zero or negative value is
    /// the only rejection path for a well-formed query string.
    ///
    /// # Errors
    /// Returns [`PageRequestError::Invalid`] when a supplied value does not
    /// parse as an integer or is below one.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::from_raw(None, None).expect("defaults are valid");
    /// assert_eq!(page.page(), 1);
    /// assert_eq!(page.size(), 10);
    /// ```
    pub fn from_raw(page: Option<&str>, size: Option<&str>) -> Result<Self, PageRequestError> {
        let page = match page {
            Some(raw) => raw.parse::<u32>().map_err(|_| PageRequestError::Invalid)?,
            None => Self::DEFAULT_PAGE,
        };
        let size = match size {
            Some(raw) => raw.parse::<u32>().map_err(|_| PageRequestError::Invalid)?,
            None => Self::DEFAULT_SIZE,
        };
        Self::new(page, size)
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of records per page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Offset handed to the store.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let page = PageRequest::new(2, 10).expect("valid page");
    /// assert_eq!(page.skip(), 10);
    /// ```
    #[must_use]
    pub const fn skip(&self) -> u64 {
        (self.size as u64) * (self.page as u64 - 1)
    }

    /// Limit handed to the store.
    #[must_use]
    pub const fn take(&self) -> u64 {
        self.size as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("0"), Some("10"))]
    #[case(Some("1"), Some("0"))]
    #[case(Some("-1"), Some("-1"))]
    #[case(Some("abc"), Some("10"))]
    #[case(Some("1"), Some("1.5"))]
    fn rejects_non_positive_or_non_numeric(#[case] page: Option<&str>, #[case] size: Option<&str>) {
        assert_eq!(PageRequest::from_raw(page, size), Err(PageRequestError::Invalid));
    }

    #[rstest]
    fn applies_defaults_when_absent() {
        let request = match PageRequest::from_raw(None, None) {
            Ok(request) => request,
            Err(err) => panic!("defaults must validate: {err}"),
        };
        assert_eq!(request.page(), PageRequest::DEFAULT_PAGE);
        assert_eq!(request.size(), PageRequest::DEFAULT_SIZE);
    }

    #[rstest]
    #[case(1, 10, 0, 10)]
    #[case(2, 10, 10, 10)]
    #[case(3, 25, 50, 25)]
    fn derives_skip_and_take(
        #[case] page: u32,
        #[case] size: u32,
        #[case] skip: u64,
        #[case] take: u64,
    ) {
        let request = match PageRequest::new(page, size) {
            Ok(request) => request,
            Err(err) => panic!("case must validate: {err}"),
        };
        assert_eq!(request.skip(), skip);
        assert_eq!(request.take(), take);
    }

    #[rstest]
    fn default_matches_endpoint_defaults() {
        let request = PageRequest::default();
        assert_eq!((request.page(), request.size()), (1, 10));
    }
}
