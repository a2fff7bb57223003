use crate::domain::model::book::Book;
use crate::domain::model::id::BookId;
use crate::domain::repository::StoreRepository;

use super::error::AppError;

/// BookStoreに対するユースケース。
/// Storeの各操作をリポジトリのロック下で実行する。
#[derive(Clone)]
pub struct LibraryService<R: StoreRepository> {
    repo: R,
}

impl<R: StoreRepository> LibraryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 全Bookを挿入順で返す。
    pub fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repo
            .read(|store| store.list().to_vec())
            .map_err(|e| AppError::Storage(Box::new(e)))
    }

    /// IDでBookを取得する。
    pub fn get_book(&self, id: BookId) -> Result<Book, AppError> {
        let found = self
            .repo
            .read(|store| store.get(id).cloned())
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(found?)
    }

    /// Bookを新規作成する。title/authorが空なら失敗し、Storeは変化しない。
    pub fn create_book(&self, title: String, author: String) -> Result<Book, AppError> {
        let created = self
            .repo
            .write(|store| store.create(title, author))
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(created?)
    }

    /// Bookを更新する。IDは不変。非空検証は行わない。
    pub fn update_book(&self, id: BookId, title: String, author: String) -> Result<Book, AppError> {
        let updated = self
            .repo
            .write(|store| store.update(id, title, author))
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(updated?)
    }

    /// Bookを削除し、削除したBookを返す。
    pub fn delete_book(&self, id: BookId) -> Result<Book, AppError> {
        let removed = self
            .repo
            .write(|store| store.remove(id))
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(removed?)
    }
}
