use std::sync::{Arc, RwLock};

use crate::domain::model::store::BookStore;
use crate::domain::repository::StoreRepository;

#[derive(Debug, thiserror::Error)]
pub enum SharedStoreError {
    #[error("store lock poisoned")]
    Poisoned,
}

/// プロセス内共有のStoreRepository実装。
/// clone間で同一のBookStoreを共有し、操作全体をロック下で実行する。
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<BookStore>>,
}

impl SharedStore {
    pub fn new(store: BookStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// 初期データ入りのStoreを持つリポジトリを返す。
    pub fn seeded() -> Self {
        Self::new(BookStore::seeded())
    }
}

impl StoreRepository for SharedStore {
    type Error = SharedStoreError;

    fn read<T>(&self, f: impl FnOnce(&BookStore) -> T) -> Result<T, Self::Error> {
        let guard = self.inner.read().map_err(|_| SharedStoreError::Poisoned)?;
        Ok(f(&guard))
    }

    fn write<T>(&self, f: impl FnOnce(&mut BookStore) -> T) -> Result<T, Self::Error> {
        let mut guard = self.inner.write().map_err(|_| SharedStoreError::Poisoned)?;
        Ok(f(&mut guard))
    }
}
