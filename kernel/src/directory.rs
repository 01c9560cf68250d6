use crate::entity::{Author, AuthorId, Book};
use crate::KernelError;

/// Contract of the external author registry. Pure request/response: the full
/// author listing and the books the directory attributes to one author.
/// Transport failures surface as [`KernelError::DirectoryUnavailable`].
#[async_trait::async_trait]
pub trait AuthorDirectory: 'static + Sync + Send {
    async fn list_authors(&self) -> error_stack::Result<Vec<Author>, KernelError>;
    async fn list_books_by_author_id(
        &self,
        id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnAuthorDirectory: 'static + Sync + Send {
    type AuthorDirectory: AuthorDirectory;
    fn author_directory(&self) -> &Self::AuthorDirectory;
}
