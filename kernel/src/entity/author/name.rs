use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Display name of an author. Also the key a book's `author` field is matched
/// against, byte for byte: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}
