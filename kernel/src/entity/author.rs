mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use vodca::References;

/// Author identity as reported by the external directory. Read-only on this
/// side: the catalog never creates, mutates or deletes authors.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
}

impl Author {
    pub fn new(id: AuthorId, name: AuthorName) -> Self {
        Self { id, name }
    }
}
