use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("Configuration: {0}")] Config(#[from] config::ConfigError),
    #[error("Invalid value for {header}: {value:?}")] InvalidValue { header: &'static str, value: String },
}

pub type HeaderResult<T> = Result<T, HeaderError>;
