//! Page arithmetic for the filtered repository list.

use std::collections::BTreeSet;
use std::ops::Range;

use super::record::RepositoryRecord;

/// Filter value that selects every repository.
pub const ALL_LANGUAGES: &str = "All";

/// Repositories per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// 1-indexed page cursor over a list of known length.
///
/// Every method that moves the cursor keeps it within `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current_page: usize,
}

impl Pager {
    /// A pager on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `max(1, ceil(len / page_size))`
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Index range of the current page within a list of `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Advance one page; a no-op on the last page.
    pub fn next(&mut self, len: usize) {
        if self.current_page < self.total_pages(len) {
            self.current_page += 1;
        }
    }

    /// Go back one page; a no-op on page 1.
    pub fn prev(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the cursor back into range after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(len));
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// `"All"` followed by each distinct non-empty language, alphabetically.
pub fn available_languages(items: &[RepositoryRecord]) -> Vec<String> {
    let distinct: BTreeSet<&str> = items
        .iter()
        .filter_map(|r| r.language.as_deref())
        .filter(|lang| !lang.is_empty() && *lang != ALL_LANGUAGES)
        .collect();

    std::iter::once(ALL_LANGUAGES)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

/// Whether `record` passes the `language` filter.
pub fn matches_language(record: &RepositoryRecord, language: &str) -> bool {
    language == ALL_LANGUAGES || record.language.as_deref() == Some(language)
}
