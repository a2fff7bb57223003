use serde::{Deserialize, Serialize};

use super::id::BookId;

/// Library上の本。BookStoreが所有し、Store経由で操作する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
}

impl Book {
    pub(crate) fn new(id: BookId, title: String, author: String) -> Self {
        Self { id, title, author }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    // --- 内部操作（Store経由でのみ呼ばれる） ---

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_author(&mut self, author: String) {
        self.author = author;
    }
}
