pub use self::author::*;

mod author;
