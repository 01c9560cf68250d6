use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::directory::{AuthorDirectory, DependOnAuthorDirectory};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Author, AuthorName, BookId, BookTitle};
use kernel::KernelError;

use crate::transfer::{
    BookDto, CreateBookDto, DeleteBookDto, GetBookDto, ListBookDto, UpdateBookDto,
};

/// Upper bound on book titles, counted in characters.
const TITLE_MAX_LENGTH: usize = 30;

fn validate_title(title: &BookTitle) -> error_stack::Result<(), KernelError> {
    let raw: &String = title.as_ref();
    if raw.trim().is_empty() {
        return Err(Report::new(KernelError::InvalidTitle)
            .attach_printable("title must not be empty or blank"));
    }
    if raw.chars().count() > TITLE_MAX_LENGTH {
        return Err(Report::new(KernelError::InvalidTitle).attach_printable(format!(
            "title must not exceed {TITLE_MAX_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Cross-validates a book's author against a fresh directory listing. Exact
/// string equality on the author name, fetched once per validating call.
async fn validate_author<D: AuthorDirectory>(
    directory: &D,
    name: &AuthorName,
) -> error_stack::Result<(), KernelError> {
    let authors = directory.list_authors().await?;
    match authors.iter().any(|author| author.name() == name) {
        true => Ok(()),
        false => Err(Report::new(KernelError::InvalidAuthor)
            .attach_printable(format!("no author named {name:?} in the directory"))),
    }
}

async fn resolve_author<D: AuthorDirectory>(
    directory: &D,
    name: &AuthorName,
) -> error_stack::Result<Author, KernelError> {
    let authors = directory.list_authors().await?;
    authors
        .into_iter()
        .find(|author| author.name() == name)
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("no author named {name:?} in the directory"))
        })
}

#[async_trait::async_trait]
pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    async fn get_book(
        &self,
        dto: GetBookDto,
    ) -> error_stack::Result<Option<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self.book_query().find_by_id(&mut connection, &id).await?;

        Ok(book.map(BookDto::from))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

#[async_trait::async_trait]
pub trait ListBookService: 'static + Sync + Send + DependOnBookQuery + DependOnAuthorDirectory {
    /// Without an author filter this is the plain store listing. With one, the
    /// local books of that author are concatenated with the directory's books
    /// for the matching author id. A book present on both sides shows up
    /// twice; the merge does not de-duplicate.
    async fn list_books(&self, dto: ListBookDto) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let filter = dto.author.filter(|name| !name.trim().is_empty());
        let books = match filter {
            None => self.book_query().find_all(&mut connection).await?,
            Some(name) => {
                let name = AuthorName::new(name);
                let author = resolve_author(self.author_directory(), &name).await?;
                let mut books = self
                    .book_query()
                    .find_by_author(&mut connection, &name)
                    .await?;
                let remote = self
                    .author_directory()
                    .list_books_by_author_id(author.id())
                    .await?;
                books.extend(remote);
                books
            }
        };

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> ListBookService for T where T: DependOnBookQuery + DependOnAuthorDirectory {}

#[async_trait::async_trait]
pub trait CreateBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnAuthorDirectory
{
    /// Validates before any store write: a rejected candidate leaves the
    /// store unmodified.
    async fn create_book(&self, dto: CreateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let title = BookTitle::new(dto.title);
        let author = AuthorName::new(dto.author);
        validate_title(&title)?;
        validate_author(self.author_directory(), &author).await?;

        let mut connection = self.database_connection().transact().await?;
        let book = self
            .book_modifier()
            .create(&mut connection, &title, &author)
            .await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> CreateBookService for T where T: DependOnBookModifier + DependOnAuthorDirectory {}

#[async_trait::async_trait]
pub trait UpdateBookService:
    'static + Sync + Send + DependOnBookQuery + DependOnBookModifier + DependOnAuthorDirectory
{
    /// Resolves the stored record first, then applies the create-time
    /// validation to the candidate. Title and author are replaced in place;
    /// the id never changes.
    async fn update_book(&self, dto: UpdateBookDto) -> error_stack::Result<BookDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        let book = self
            .book_query()
            .find_by_id(&mut connection, &id)
            .await?
            .ok_or_else(|| Report::new(KernelError::NotFound))?;

        let title = BookTitle::new(dto.title);
        let author = AuthorName::new(dto.author);
        validate_title(&title)?;
        validate_author(self.author_directory(), &author).await?;

        let book = book.reconstruct(|b| {
            b.title = title.clone();
            b.author = author.clone();
        });
        self.book_modifier().update(&mut connection, &book).await?;
        connection.commit().await?;

        Ok(BookDto::from(book))
    }
}

impl<T> UpdateBookService for T where
    T: DependOnBookQuery + DependOnBookModifier + DependOnAuthorDirectory
{
}

#[async_trait::async_trait]
pub trait DeleteBookService: 'static + Sync + Send + DependOnBookModifier {
    async fn delete_book(&self, dto: DeleteBookDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = BookId::new(dto.id);
        self.book_modifier().delete(&mut connection, &id).await?;
        connection.commit().await?;

        Ok(())
    }
}

impl<T> DeleteBookService for T where T: DependOnBookModifier {}

#[cfg(test)]
mod test {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::{Arc, Mutex};

    use error_stack::Report;
    use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
    use kernel::interface::directory::{AuthorDirectory, DependOnAuthorDirectory};
    use kernel::interface::query::{BookQuery, DependOnBookQuery};
    use kernel::interface::update::{BookModifier, DependOnBookModifier};
    use kernel::prelude::entity::{Author, AuthorId, AuthorName, Book, BookId, BookTitle};
    use kernel::KernelError;

    use crate::service::{
        CreateBookService, DeleteBookService, GetBookService, ListBookService, UpdateBookService,
    };
    use crate::transfer::{
        CreateBookDto, DeleteBookDto, GetBookDto, ListBookDto, UpdateBookDto,
    };

    pub struct MockConnection;

    #[async_trait::async_trait]
    impl Transaction for MockConnection {
        async fn commit(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
        async fn roll_back(self) -> error_stack::Result<(), KernelError> {
            Ok(())
        }
    }

    pub struct MockBookStore {
        books: Arc<Mutex<BTreeMap<i64, Book>>>,
        sequence: AtomicI64,
    }

    impl MockBookStore {
        fn new() -> Self {
            Self {
                books: Arc::new(Mutex::new(BTreeMap::new())),
                sequence: AtomicI64::new(1),
            }
        }

        fn stored(&self) -> Vec<Book> {
            self.books.lock().unwrap().values().cloned().collect()
        }
    }

    #[async_trait::async_trait]
    impl DatabaseConnection for MockBookStore {
        type Transaction = MockConnection;
        async fn transact(&self) -> error_stack::Result<MockConnection, KernelError> {
            Ok(MockConnection)
        }
    }

    #[async_trait::async_trait]
    impl BookQuery for MockBookStore {
        type Transaction = MockConnection;
        async fn find_by_id(
            &self,
            _con: &mut MockConnection,
            id: &BookId,
        ) -> error_stack::Result<Option<Book>, KernelError> {
            Ok(self.books.lock().unwrap().get(id.as_ref()).cloned())
        }
        async fn find_all(
            &self,
            _con: &mut MockConnection,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(self.stored())
        }
        async fn find_by_author(
            &self,
            _con: &mut MockConnection,
            author: &AuthorName,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            Ok(self
                .stored()
                .into_iter()
                .filter(|book| book.author() == author)
                .collect())
        }
    }

    #[async_trait::async_trait]
    impl BookModifier for MockBookStore {
        type Transaction = MockConnection;
        async fn create(
            &self,
            _con: &mut MockConnection,
            title: &BookTitle,
            author: &AuthorName,
        ) -> error_stack::Result<Book, KernelError> {
            let id = self.sequence.fetch_add(1, Ordering::SeqCst);
            let book = Book::new(BookId::new(id), title.clone(), author.clone());
            self.books.lock().unwrap().insert(id, book.clone());
            Ok(book)
        }
        async fn update(
            &self,
            _con: &mut MockConnection,
            book: &Book,
        ) -> error_stack::Result<(), KernelError> {
            self.books
                .lock()
                .unwrap()
                .insert(*book.id().as_ref(), book.clone());
            Ok(())
        }
        async fn delete(
            &self,
            _con: &mut MockConnection,
            book_id: &BookId,
        ) -> error_stack::Result<(), KernelError> {
            self.books.lock().unwrap().remove(book_id.as_ref());
            Ok(())
        }
    }

    pub struct MockDirectory {
        authors: Vec<Author>,
        catalog: BTreeMap<i64, Vec<Book>>,
        available: bool,
    }

    #[async_trait::async_trait]
    impl AuthorDirectory for MockDirectory {
        async fn list_authors(&self) -> error_stack::Result<Vec<Author>, KernelError> {
            if !self.available {
                return Err(Report::new(KernelError::DirectoryUnavailable));
            }
            Ok(self.authors.clone())
        }
        async fn list_books_by_author_id(
            &self,
            id: &AuthorId,
        ) -> error_stack::Result<Vec<Book>, KernelError> {
            if !self.available {
                return Err(Report::new(KernelError::DirectoryUnavailable));
            }
            Ok(self.catalog.get(id.as_ref()).cloned().unwrap_or_default())
        }
    }

    pub struct TestModule {
        store: MockBookStore,
        directory: MockDirectory,
    }

    impl DependOnDatabaseConnection for TestModule {
        type DatabaseConnection = MockBookStore;
        fn database_connection(&self) -> &MockBookStore {
            &self.store
        }
    }

    impl DependOnBookQuery for TestModule {
        type BookQuery = MockBookStore;
        fn book_query(&self) -> &MockBookStore {
            &self.store
        }
    }

    impl DependOnBookModifier for TestModule {
        type BookModifier = MockBookStore;
        fn book_modifier(&self) -> &MockBookStore {
            &self.store
        }
    }

    impl DependOnAuthorDirectory for TestModule {
        type AuthorDirectory = MockDirectory;
        fn author_directory(&self) -> &MockDirectory {
            &self.directory
        }
    }

    const GILSON: &str = "Gilson";
    const JOSHUA: &str = "Joshua";

    fn remote_book(id: i64, title: &str, author: &str) -> Book {
        Book::new(
            BookId::new(id),
            BookTitle::new(title),
            AuthorName::new(author),
        )
    }

    fn module() -> TestModule {
        let directory = MockDirectory {
            authors: vec![
                Author::new(AuthorId::new(1i64), AuthorName::new(GILSON)),
                Author::new(AuthorId::new(2i64), AuthorName::new(JOSHUA)),
            ],
            catalog: BTreeMap::from([(
                1i64,
                vec![remote_book(100, "Quarkus for Spring Developers", GILSON)],
            )]),
            available: true,
        };
        TestModule {
            store: MockBookStore::new(),
            directory,
        }
    }

    fn unavailable_module() -> TestModule {
        let mut module = module();
        module.directory.available = false;
        module
    }

    fn create_dto(title: &str, author: &str) -> CreateBookDto {
        CreateBookDto {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists() {
        let module = module();
        let created = module
            .create_book(create_dto(&"X".repeat(30), GILSON))
            .await
            .unwrap();

        assert_eq!(created.title, "X".repeat(30));
        assert_eq!(created.author, GILSON);

        let found = module
            .get_book(GetBookDto { id: created.id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn create_rejects_blank_titles() {
        let module = module();
        for title in ["", "    "] {
            let report = module.create_book(create_dto(title, GILSON)).await.unwrap_err();
            assert!(matches!(report.current_context(), KernelError::InvalidTitle));
        }
        assert!(module.store.stored().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_overlong_title() {
        let module = module();
        let report = module
            .create_book(create_dto(&"X".repeat(31), GILSON))
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::InvalidTitle));
        assert!(module.store.stored().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_unknown_author() {
        let module = module();
        // Case mismatch counts as unknown: matching is exact.
        for author in ["gilson", "any invalid name"] {
            let report = module
                .create_book(create_dto("The Art of PostgreSQL", author))
                .await
                .unwrap_err();
            assert!(matches!(report.current_context(), KernelError::InvalidAuthor));
        }
        assert!(module.store.stored().is_empty());
    }

    #[tokio::test]
    async fn create_fails_when_directory_is_down() {
        let module = unavailable_module();
        let report = module
            .create_book(create_dto("Database Internals", GILSON))
            .await
            .unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::DirectoryUnavailable
        ));
        assert!(module.store.stored().is_empty());
    }

    #[tokio::test]
    async fn get_missing_book_returns_none() {
        let module = module();
        let found = module.get_book(GetBookDto { id: 999999 }).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let module = module();
        let created = module
            .create_book(create_dto("Release It!", GILSON))
            .await
            .unwrap();

        let updated = module
            .update_book(UpdateBookDto {
                id: created.id,
                title: "Designing Data-Intensive Apps".to_string(),
                author: JOSHUA.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Designing Data-Intensive Apps");
        assert_eq!(updated.author, JOSHUA);

        let found = module
            .get_book(GetBookDto { id: created.id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, updated);
    }

    #[tokio::test]
    async fn update_missing_book_returns_not_found() {
        let module = module();
        let report = module
            .update_book(UpdateBookDto {
                id: 999999,
                title: "Whatever".to_string(),
                author: GILSON.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }

    #[tokio::test]
    async fn rejected_update_leaves_stored_record_unchanged() {
        let module = module();
        let created = module
            .create_book(create_dto("Release It!", GILSON))
            .await
            .unwrap();

        let report = module
            .update_book(UpdateBookDto {
                id: created.id,
                title: "".to_string(),
                author: GILSON.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::InvalidTitle));

        let found = module
            .get_book(GetBookDto { id: created.id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.title, "Release It!");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let module = module();
        let created = module
            .create_book(create_dto("Release It!", GILSON))
            .await
            .unwrap();

        module.delete_book(DeleteBookDto { id: created.id }).await.unwrap();
        // Deleting an absent id is a no-op success.
        module.delete_book(DeleteBookDto { id: created.id }).await.unwrap();
        module.delete_book(DeleteBookDto { id: 999999 }).await.unwrap();

        assert!(module.store.stored().is_empty());
    }

    #[tokio::test]
    async fn list_without_author_returns_all_books() {
        let module = module();
        assert!(module
            .list_books(ListBookDto { author: None })
            .await
            .unwrap()
            .is_empty());

        module.create_book(create_dto("Book One", GILSON)).await.unwrap();
        module.create_book(create_dto("Book Two", JOSHUA)).await.unwrap();

        // A blank filter behaves like no filter at all.
        for author in [None, Some("".to_string()), Some("   ".to_string())] {
            let books = module.list_books(ListBookDto { author }).await.unwrap();
            assert_eq!(books.len(), 2);
        }
    }

    #[tokio::test]
    async fn list_by_author_merges_local_and_directory_books() {
        let module = module();
        module.create_book(create_dto("Local Gilson Book", GILSON)).await.unwrap();
        module.create_book(create_dto("Joshua Book", JOSHUA)).await.unwrap();

        let books = module
            .list_books(ListBookDto {
                author: Some(GILSON.to_string()),
            })
            .await
            .unwrap();

        assert_eq!(books.len(), 2);
        assert!(books.iter().any(|b| b.title == "Local Gilson Book"));
        assert!(books
            .iter()
            .any(|b| b.title == "Quarkus for Spring Developers"));
        assert!(books.iter().all(|b| b.author == GILSON));
    }

    // The merge is a plain concatenation: a book stored locally with the same
    // title and author as a directory book is reported twice. Deliberate,
    // inherited behavior.
    #[tokio::test]
    async fn list_by_author_does_not_deduplicate() {
        let module = module();
        module
            .create_book(create_dto("Quarkus for Spring Developers", GILSON))
            .await
            .unwrap();

        let books = module
            .list_books(ListBookDto {
                author: Some(GILSON.to_string()),
            })
            .await
            .unwrap();

        assert_eq!(books.len(), 2);
        assert!(books
            .iter()
            .all(|b| b.title == "Quarkus for Spring Developers" && b.author == GILSON));
    }

    #[tokio::test]
    async fn list_by_unknown_author_returns_not_found() {
        let module = module();
        let report = module
            .list_books(ListBookDto {
                author: Some("nobody".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(report.current_context(), KernelError::NotFound));
    }
}
