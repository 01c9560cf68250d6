use error_stack::Report;
use serde::Deserialize;

use kernel::interface::directory::AuthorDirectory;
use kernel::prelude::entity::{Author, AuthorId, AuthorName, Book, BookId, BookTitle};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

static AUTHOR_SERVICE_URL: &str = "AUTHOR_SERVICE_URL";

/// Client for the external author registry. One plain GET per call, no
/// caching and no retries; every transport or decode failure is reported as
/// [`KernelError::DirectoryUnavailable`].
pub struct HttpAuthorDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthorDirectory {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let base_url = env(AUTHOR_SERVICE_URL)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }
}

#[async_trait::async_trait]
impl AuthorDirectory for HttpAuthorDirectory {
    async fn list_authors(&self) -> error_stack::Result<Vec<Author>, KernelError> {
        let url = format!("{}/authors", self.base_url);
        tracing::debug!(%url, "fetching author listing");
        let rows = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .convert_error()?
            .json::<Vec<AuthorRow>>()
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn list_books_by_author_id(
        &self,
        id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let url = format!("{}/authors/{}/books", self.base_url, id.as_ref());
        tracing::debug!(%url, "fetching books attributed to author");
        let rows = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .convert_error()?
            .json::<Vec<AuthoredBookRow>>()
            .await
            .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct AuthorRow {
    id: i64,
    name: String,
}

impl From<AuthorRow> for Author {
    fn from(value: AuthorRow) -> Self {
        Author::new(AuthorId::new(value.id), AuthorName::new(value.name))
    }
}

#[derive(Debug, Deserialize)]
struct AuthoredBookRow {
    id: i64,
    title: String,
    author: String,
}

impl From<AuthoredBookRow> for Book {
    fn from(value: AuthoredBookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            AuthorName::new(value.author),
        )
    }
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::DirectoryUnavailable))
    }
}
