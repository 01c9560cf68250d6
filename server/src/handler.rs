use driver::database::{PostgresBookRepository, PostgresDatabase};
use driver::directory::HttpAuthorDirectory;
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::directory::DependOnAuthorDirectory;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;
use std::ops::Deref;
use std::sync::Arc;
use vodca::References;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    pgpool: PostgresDatabase,
    authors: HttpAuthorDirectory,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;
        let authors = HttpAuthorDirectory::new()?;

        Ok(Self { pgpool, authors })
    }
}

impl DependOnDatabaseConnection for Handler {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        self.pgpool()
    }
}

impl DependOnBookQuery for Handler {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &PostgresBookRepository {
        &PostgresBookRepository
    }
}

impl DependOnBookModifier for Handler {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &PostgresBookRepository {
        &PostgresBookRepository
    }
}

impl DependOnAuthorDirectory for Handler {
    type AuthorDirectory = HttpAuthorDirectory;
    fn author_directory(&self) -> &HttpAuthorDirectory {
        self.authors()
    }
}
