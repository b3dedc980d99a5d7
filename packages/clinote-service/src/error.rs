pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	Validation { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<clinote_storage::Error> for Error {
	fn from(err: clinote_storage::Error) -> Self {
		match err {
			clinote_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			clinote_storage::Error::InvalidArgument(message) => Self::Validation { message },
		}
	}
}
