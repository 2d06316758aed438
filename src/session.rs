//! Reading position for an interactive reader.
//!
//! The search core never consults this; callers pass page numbers explicitly.

use serde::{Deserialize, Serialize};

/// Current page within a book, always inside `1..=total_pages` (or `1` for an
/// empty book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSession {
    current_page: usize,
    total_pages: usize,
}

impl ReaderSession {
    pub fn new(total_pages: usize) -> Self {
        ReaderSession {
            current_page: 1,
            total_pages,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Jump to `page`, clamped into range. Returns the page landed on.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages.max(1));
        self.current_page
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }
}
