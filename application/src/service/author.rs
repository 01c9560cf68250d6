use kernel::interface::directory::{AuthorDirectory, DependOnAuthorDirectory};
use kernel::KernelError;

use crate::transfer::AuthorDto;

#[async_trait::async_trait]
pub trait GetAuthorService: 'static + Sync + Send + DependOnAuthorDirectory {
    /// Proxies the directory's full listing. Never null: an empty directory
    /// yields an empty vec.
    async fn list_authors(&self) -> error_stack::Result<Vec<AuthorDto>, KernelError> {
        let authors = self.author_directory().list_authors().await?;
        Ok(authors.into_iter().map(AuthorDto::from).collect())
    }
}

impl<T> GetAuthorService for T where T: DependOnAuthorDirectory {}
