use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("email already exists")]
    DuplicateEmail,
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("file type not allowed: {0:?}")]
    InvalidFileType(String),
    #[error("event {0} not found")]
    EventNotFound(i64),
    #[error("member {0} not found")]
    MemberNotFound(i64),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ServiceError {
    /// True for rejections caused by user input rather than infrastructure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Db(_) | Self::Io(_))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
