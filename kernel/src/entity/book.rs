mod id;
mod title;

pub use self::{id::*, title::*};
use crate::entity::AuthorName;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: AuthorName,
}

impl Book {
    pub fn new(id: BookId, title: BookTitle, author: AuthorName) -> Self {
        Self { id, title, author }
    }
}
