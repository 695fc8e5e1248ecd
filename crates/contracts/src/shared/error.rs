use thiserror::Error;

/// Ошибки входных параметров списочного конвейера
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("items per page must be greater than zero")]
    InvalidPageSize,

    #[error("page numbers start at 1, got {0}")]
    InvalidPage(usize),
}
