use super::book::Book;
use super::id::BookId;
use crate::domain::error::DomainError;

/// Book Store — 集約ルート。全Book操作はここを経由する。
///
/// 挿入順を保持するVecと単調増加のIDカウンタを持つ。
/// 削除済みIDは再利用しない。
#[derive(Debug, Clone)]
pub struct BookStore {
    books: Vec<Book>,
    next_id: u64,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
        }
    }

    /// 初期データ2冊（id=1, 2）入りのStoreを返す。カウンタは3。
    pub fn seeded() -> Self {
        Self {
            books: vec![
                Book::new(
                    BookId::new(1),
                    "The Lord of the Rings".to_string(),
                    "J.R.R. Tolkien".to_string(),
                ),
                Book::new(
                    BookId::new(2),
                    "Pride and Prejudice".to_string(),
                    "Jane Austen".to_string(),
                ),
            ],
            next_id: 3,
        }
    }

    /// 全Bookを挿入順で返す。
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, id: BookId) -> Result<&Book, DomainError> {
        self.books
            .iter()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))
    }

    /// Book追加。title/authorの非空を検証してから採番・追記する。
    /// 失敗時はStoreを一切変更しない。
    pub fn create(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Book, DomainError> {
        let title = title.into();
        let author = author.into();
        if title.is_empty() || author.is_empty() {
            return Err(DomainError::MissingFields);
        }

        let id = BookId::new(self.next_id);
        self.next_id += 1;

        let book = Book::new(id, title, author);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Book更新。IDは不変、title/authorを置き換える。
    ///
    /// createと異なり非空検証は行わない（元仕様の非対称を保持）。
    pub fn update(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Book, DomainError> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;

        book.set_title(title.into());
        book.set_author(author.into());
        Ok(book.clone())
    }

    /// Book削除。削除したBookを返す。IDは再利用されない。
    pub fn remove(&mut self, id: BookId) -> Result<Book, DomainError> {
        let pos = self
            .books
            .iter()
            .position(|b| b.id() == id)
            .ok_or(DomainError::BookNotFound(id))?;
        Ok(self.books.remove(pos))
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
