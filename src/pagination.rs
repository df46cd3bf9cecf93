use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a [`PageRequest`] is rejected before it reaches the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRequestError {
    #[error("page offset must not be negative, got {0}")]
    NegativeOffset(i64),
    #[error("page limit must be positive, got {0}")]
    NonPositiveLimit(i64),
    #[error("page {page} of size {size} is out of range")]
    OutOfRange { page: usize, size: usize },
}

/// Offset based slice of a result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Builds a request for the zero-based `page` of `size` rows.
    ///
    /// Fails when the offset does not fit the store's signed 64-bit range.
    pub fn of(page: usize, size: usize) -> Result<Self, PageRequestError> {
        let out_of_range = || PageRequestError::OutOfRange { page, size };
        let limit = i64::try_from(size).map_err(|_| out_of_range())?;
        let offset = i64::try_from(page)
            .ok()
            .and_then(|page| page.checked_mul(limit))
            .ok_or_else(out_of_range)?;
        Ok(Self { offset, limit })
    }

    pub fn validate(&self) -> Result<(), PageRequestError> {
        if self.offset < 0 {
            return Err(PageRequestError::NegativeOffset(self.offset));
        }
        if self.limit <= 0 {
            return Err(PageRequestError::NonPositiveLimit(self.limit));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: usize,
    pub offset: i64,
    pub limit: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total: usize) -> Self {
        Self {
            content,
            total,
            offset: request.offset,
            limit: request.limit,
        }
    }

    /// Assembles a page, running `count` only when the content does not
    /// already determine the total.
    ///
    /// A short page (fewer rows than `limit`) is the final one, so the total is
    /// `offset + content.len()`. An empty page past the first offset proves
    /// nothing (the offset may overshoot the data) and still counts.
    pub fn with_lazy_total<F, E>(content: Vec<T>, request: PageRequest, count: F) -> Result<Self, E>
    where
        F: FnOnce() -> Result<usize, E>,
    {
        let len = content.len();
        let is_short = (len as i64) < request.limit;

        let total = if is_short && (request.offset == 0 || len > 0) {
            log::debug!(
                "Skipping count query: final page at offset {} holds {len} rows",
                request.offset
            );
            request.offset as usize + len
        } else {
            count()?
        };

        Ok(Self::new(content, request, total))
    }

    /// Zero-based index of this page.
    pub fn number(&self) -> usize {
        if self.limit <= 0 {
            return 0;
        }
        (self.offset / self.limit) as usize
    }

    pub fn total_pages(&self) -> usize {
        if self.limit <= 0 {
            return 0;
        }
        self.total.div_ceil(self.limit as usize)
    }

    pub fn has_next(&self) -> bool {
        (self.offset as usize + self.content.len()) < self.total
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            offset: self.offset,
            limit: self.limit,
        }
    }
}
