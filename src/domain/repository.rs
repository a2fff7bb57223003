use super::model::store::BookStore;

/// 共有Storeへのアクセス抽象。Infra層が実装する。
///
/// 各操作はクロージャ1回分の間、Store全体への一貫したアクセスを保証する。
pub trait StoreRepository {
    type Error: std::error::Error + Send + Sync + 'static;

    fn read<T>(&self, f: impl FnOnce(&BookStore) -> T) -> Result<T, Self::Error>;
    fn write<T>(&self, f: impl FnOnce(&mut BookStore) -> T) -> Result<T, Self::Error>;
}
