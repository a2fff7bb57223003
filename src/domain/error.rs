use super::model::id::BookId;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    #[error("title and author are required")]
    MissingFields,
}
