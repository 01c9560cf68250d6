use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    InvalidTitle,
    InvalidAuthor,
    NotFound,
    DirectoryUnavailable,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidTitle => write!(f, "Invalid book title"),
            KernelError::InvalidAuthor => write!(f, "Invalid author"),
            KernelError::NotFound => write!(f, "Resource not found"),
            KernelError::DirectoryUnavailable => write!(f, "Author directory unavailable"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
